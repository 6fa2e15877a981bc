//! Per-record layout: basic info block, blank separator, clinical sections.

use casebook_docx::Document;
use casebook_model::{CaseId, CaseRecord, Gender, has_text};

use crate::captions;

/// Append one case summary to `document`.
///
/// Layout order is fixed. The eight basic-info lines always render, with
/// empty fallbacks for absent values; clinical sections render only when
/// their source field is present and non-empty.
pub fn append_case(document: &mut Document, record: &CaseRecord) {
    append_basic_info(document, record);
    document.add_paragraph();
    append_sections(document, record);
}

fn append_basic_info(document: &mut Document, record: &CaseRecord) {
    let paragraph = document.add_paragraph();
    paragraph.add_bold_run(format!(
        "{}{}",
        captions::CASE_NUMBER,
        display_id(record.case_number.as_ref())
    ));
    if record.is_designated_disease {
        paragraph.add_run(captions::DESIGNATED_MARK);
    }

    append_line(
        document,
        captions::FIELD_NUMBER,
        &display_id(record.field_number.as_ref()),
    );
    append_line(document, captions::PATIENT_ID, &record.patient_id);
    append_line(
        document,
        captions::ADMISSION,
        captions::admission_status(record.is_inpatient),
    );
    append_line(document, captions::CARE_PERIOD, &record.care_period);
    append_line(document, captions::AGE, &display_id(record.age.as_ref()));
    let gender = match record.gender {
        Gender::Male => captions::MALE,
        Gender::Other => captions::FEMALE,
    };
    append_line(document, captions::GENDER, gender);
    append_line(document, captions::OUTCOME, &record.outcome);
}

fn append_line(document: &mut Document, caption: &str, value: &str) {
    document.add_paragraph().add_run(format!("{caption}{value}"));
}

fn display_id(value: Option<&CaseId>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}

fn append_sections(document: &mut Document, record: &CaseRecord) {
    append_text_section(
        document,
        captions::CHIEF_COMPLAINT,
        record.chief_complaint.as_deref(),
    );
    append_text_section(
        document,
        captions::PRESENT_ILLNESS,
        record.present_illness.as_deref(),
    );
    append_text_section(
        document,
        captions::examination(record.is_inpatient),
        record.physical_examination.as_deref(),
    );
    append_text_section(
        document,
        captions::laboratory(record.is_inpatient),
        record.laboratory_findings.as_deref(),
    );
    append_diagnoses(document, &record.differential_diagnoses);
    append_text_section(
        document,
        captions::PROBLEM_POINTS,
        record.problem_points.as_deref(),
    );
    append_text_section(
        document,
        captions::course(record.is_inpatient),
        record.hospital_course.as_deref(),
    );
    append_text_section(
        document,
        captions::FAMILY_EXPLANATION,
        record.family_explanation.as_deref(),
    );
    append_text_section(
        document,
        captions::POST_DISCHARGE_COURSE,
        record.post_discharge_course.as_deref(),
    );
}

/// Bold caption run, then the content in the same paragraph after a space.
fn append_text_section(document: &mut Document, caption: &'static str, content: Option<&str>) {
    if !has_text(content) {
        return;
    }
    let content = content.unwrap_or_default();
    let paragraph = document.add_paragraph();
    paragraph.add_bold_run(caption);
    paragraph.add_run(format!(" {content}"));
}

/// Diagnoses render inline as a numbered list within a single paragraph,
/// entries separated by a lone space run.
fn append_diagnoses(document: &mut Document, diagnoses: &[String]) {
    if diagnoses.is_empty() {
        return;
    }
    let paragraph = document.add_paragraph();
    paragraph.add_bold_run(captions::DIFFERENTIAL_DIAGNOSES);
    for (index, diagnosis) in diagnoses.iter().enumerate() {
        if index > 0 {
            paragraph.add_run(" ");
        }
        paragraph.add_run(format!("{}. {}。", index + 1, diagnosis));
    }
}
