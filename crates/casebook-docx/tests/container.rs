//! Container round-trip tests: write a `.docx`, re-open the ZIP, and check
//! the parts Word actually reads.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use casebook_docx::Document;

fn read_part(path: &Path, name: &str) -> String {
    let file = File::open(path).expect("open container");
    let mut archive = zip::ZipArchive::new(file).expect("read container");
    let mut part = archive.by_name(name).expect("find part");
    let mut text = String::new();
    part.read_to_string(&mut text).expect("read part");
    text
}

fn sample_document() -> Document {
    let mut document = Document::new();
    let paragraph = document.add_paragraph();
    paragraph.add_bold_run("症例番号: 12").add_run(" ○");
    document.add_paragraph().add_run("患者ID: A-102");
    document.add_page_break();
    document.add_paragraph().align_center().add_run("=".repeat(50));
    document
}

#[test]
fn written_container_holds_expected_parts() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("case.docx");
    sample_document().save(&path).expect("save");

    let file = File::open(&path).expect("open");
    let archive = zip::ZipArchive::new(file).expect("zip");
    let names: Vec<&str> = archive.file_names().collect();
    for expected in [
        "[Content_Types].xml",
        "_rels/.rels",
        "docProps/core.xml",
        "word/_rels/document.xml.rels",
        "word/styles.xml",
        "word/document.xml",
    ] {
        assert!(names.contains(&expected), "missing part {expected}");
    }
}

#[test]
fn document_part_carries_runs_and_breaks() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("case.docx");
    sample_document().save(&path).expect("save");

    let body = read_part(&path, "word/document.xml");
    assert!(body.contains("症例番号: 12"));
    assert!(body.contains(r#"<w:t xml:space="preserve"> ○</w:t>"#));
    assert!(body.contains(r#"<w:br w:type="page"/>"#));
    assert!(body.contains(r#"<w:jc w:val="center"/>"#));

    let styles = read_part(&path, "word/styles.xml");
    assert!(styles.contains("MS Mincho"));
}

#[test]
fn rendering_twice_yields_identical_content_parts() {
    let dir = tempfile::tempdir().expect("tempdir");
    let first = dir.path().join("first.docx");
    let second = dir.path().join("second.docx");
    sample_document().save(&first).expect("save first");
    sample_document().save(&second).expect("save second");

    // Core properties carry a timestamp; the content parts must not.
    for part in ["word/document.xml", "word/styles.xml", "[Content_Types].xml"] {
        assert_eq!(read_part(&first, part), read_part(&second, part), "{part} differs");
    }
}

#[test]
fn save_into_missing_directory_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("no-such-dir").join("case.docx");
    assert!(sample_document().save(&path).is_err());
}
