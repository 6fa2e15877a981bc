//! Persistence smoke tests: the coordinators write exactly one container.

use std::fs;

use casebook_model::CaseRecord;
use casebook_render::{write_batch, write_single};

fn record(json: &str) -> CaseRecord {
    serde_json::from_str(json).expect("parse record")
}

#[test]
fn write_single_produces_one_zip_container() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("case1.docx");
    write_single(&record(r#"{"case_number": 1}"#), &path).expect("write");

    let bytes = fs::read(&path).expect("read output");
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn write_batch_accepts_empty_input() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("cases_all.docx");
    write_batch(&[], &path).expect("write");
    assert!(path.exists());
}

#[test]
fn write_into_missing_directory_surfaces_the_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("missing").join("case.docx");
    let error = write_single(&record("{}"), &path).expect_err("must fail");
    assert!(format!("{error:#}").contains("case.docx"));
}
