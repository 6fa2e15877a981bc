//! Fixed Japanese captions for the case-summary layout.
//!
//! The wording is user-facing clinical terminology with no tolerance for
//! rewording; four captions switch on the inpatient flag.

/// Caption prefix for the case number line.
pub const CASE_NUMBER: &str = "症例番号: ";
pub const FIELD_NUMBER: &str = "分野番号: ";
pub const PATIENT_ID: &str = "患者ID: ";
pub const ADMISSION: &str = "入院・外来: ";
pub const CARE_PERIOD: &str = "受け持ち期間: ";
pub const AGE: &str = "年齢: ";
pub const GENDER: &str = "性別: ";
pub const OUTCOME: &str = "転帰: ";

/// Marker glyph appended after the case number of a designated disease.
pub const DESIGNATED_MARK: &str = " ○";

pub const INPATIENT: &str = "入院症例";
pub const OUTPATIENT: &str = "外来症例";
pub const MALE: &str = "男";
pub const FEMALE: &str = "女";

pub const CHIEF_COMPLAINT: &str = "【主訴】";
pub const PRESENT_ILLNESS: &str = "【現病歴】";
pub const DIFFERENTIAL_DIAGNOSES: &str = "【鑑別診断】";
pub const PROBLEM_POINTS: &str = "【症例の問題点】";
pub const FAMILY_EXPLANATION: &str = "【家族への説明・指示】";
pub const POST_DISCHARGE_COURSE: &str = "【退院後の経過】";

/// Admission status line value.
pub fn admission_status(is_inpatient: bool) -> &'static str {
    if is_inpatient { INPATIENT } else { OUTPATIENT }
}

/// Physical examination caption.
pub fn examination(is_inpatient: bool) -> &'static str {
    if is_inpatient {
        "【入院時診察所見】"
    } else {
        "【来院時診察所見】"
    }
}

/// Laboratory findings caption.
pub fn laboratory(is_inpatient: bool) -> &'static str {
    if is_inpatient {
        "【入院時検査所見】"
    } else {
        "【来院時検査所見】"
    }
}

/// Clinical course caption.
pub fn course(is_inpatient: bool) -> &'static str {
    if is_inpatient { "【入院後経過】" } else { "【来院後経過】" }
}
