//! Deserialization tests for the case record model.

use casebook_model::{CaseId, CaseInput, CaseRecord, Gender, has_text};

#[test]
fn empty_object_resolves_every_default() {
    let record: CaseRecord = serde_json::from_str("{}").expect("parse empty record");
    assert!(record.is_inpatient);
    assert!(!record.is_designated_disease);
    assert_eq!(record.gender, Gender::Other);
    assert!(record.case_number.is_none());
    assert!(record.patient_id.is_empty());
    assert!(record.chief_complaint.is_none());
    assert!(record.differential_diagnoses.is_empty());
}

#[test]
fn gender_maps_only_male_to_male() {
    let male: CaseRecord = serde_json::from_str(r#"{"gender": "male"}"#).expect("parse");
    assert_eq!(male.gender, Gender::Male);

    let female: CaseRecord = serde_json::from_str(r#"{"gender": "female"}"#).expect("parse");
    assert_eq!(female.gender, Gender::Other);

    let unknown: CaseRecord = serde_json::from_str(r#"{"gender": "unknown"}"#).expect("parse");
    assert_eq!(unknown.gender, Gender::Other);

    let null: CaseRecord = serde_json::from_str(r#"{"gender": null}"#).expect("parse");
    assert_eq!(null.gender, Gender::Other);
}

#[test]
fn case_id_accepts_numbers_and_strings() {
    let record: CaseRecord =
        serde_json::from_str(r#"{"case_number": 12, "field_number": "3", "age": "72"}"#)
            .expect("parse");
    assert_eq!(record.case_number, Some(CaseId::Integer(12)));
    assert_eq!(record.field_number, Some(CaseId::Text("3".to_string())));
    assert_eq!(record.case_number.as_ref().map(ToString::to_string).as_deref(), Some("12"));
    assert_eq!(record.age.as_ref().map(ToString::to_string).as_deref(), Some("72"));
}

#[test]
fn sort_key_coerces_mixed_types() {
    let record: CaseRecord =
        serde_json::from_str(r#"{"case_number": "5", "field_number": 2}"#).expect("parse");
    assert_eq!(record.sort_key(), (2.0, 5.0));

    let junk: CaseRecord =
        serde_json::from_str(r#"{"case_number": "n/a"}"#).expect("parse");
    assert_eq!(junk.sort_key(), (0.0, 0.0));
}

#[test]
fn explicit_outpatient_survives() {
    let record: CaseRecord = serde_json::from_str(r#"{"is_inpatient": false}"#).expect("parse");
    assert!(!record.is_inpatient);
}

#[test]
fn presence_requires_non_empty_text() {
    assert!(!has_text(None));
    assert!(!has_text(Some("")));
    assert!(has_text(Some(" ")));
    assert!(has_text(Some("発熱")));

    let record: CaseRecord = serde_json::from_str(
        r#"{"chief_complaint": "", "present_illness": "3日前から発熱。", "differential_diagnoses": []}"#,
    )
    .expect("parse");
    assert_eq!(record.section_count(), 1);
}

#[test]
fn root_object_and_sequence_both_parse() {
    let single: CaseInput = serde_json::from_str(r#"{"case_number": 1}"#).expect("parse single");
    assert!(!single.is_many());
    assert_eq!(single.into_records().len(), 1);

    let many: CaseInput =
        serde_json::from_str(r#"[{"case_number": 1}, {"case_number": 2}]"#).expect("parse many");
    assert!(many.is_many());
    assert_eq!(many.into_records().len(), 2);
}

#[test]
fn scalar_root_is_rejected() {
    assert!(serde_json::from_str::<CaseInput>("42").is_err());
    assert!(serde_json::from_str::<CaseInput>(r#""cases""#).is_err());
}

#[test]
fn narrative_iterator_covers_prose_and_diagnoses() {
    let mut record: CaseRecord = serde_json::from_str(
        r#"{"chief_complaint": "頭痛", "differential_diagnoses": ["片頭痛", "緊張型頭痛"]}"#,
    )
    .expect("parse");
    let texts: Vec<String> = record.narrative_texts_mut().map(|t| t.clone()).collect();
    assert_eq!(texts, vec!["頭痛", "片頭痛", "緊張型頭痛"]);
}
