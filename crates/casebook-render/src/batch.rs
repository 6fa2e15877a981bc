//! Batch coordination: sorting, separators, pagination, persistence.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use casebook_docx::Document;
use casebook_model::CaseRecord;

use crate::renderer::append_case;

/// Width of the separator line drawn before each case in batch output.
const SEPARATOR_WIDTH: usize = 50;

/// Build a document containing a single case summary.
pub fn build_single_document(record: &CaseRecord) -> Document {
    let mut document = Document::new();
    append_case(&mut document, record);
    document
}

/// Build one document holding every case: sorted by field number then case
/// number, a centered separator line before each case, and a page break
/// between cases.
pub fn build_batch_document(records: &[CaseRecord]) -> Document {
    let mut ordered: Vec<&CaseRecord> = records.iter().collect();
    ordered.sort_by(|a, b| {
        let (a_field, a_case) = a.sort_key();
        let (b_field, b_case) = b.sort_key();
        a_field
            .total_cmp(&b_field)
            .then_with(|| a_case.total_cmp(&b_case))
    });

    let mut document = Document::new();
    for (index, record) in ordered.iter().enumerate() {
        if index > 0 {
            document.add_page_break();
        }
        document
            .add_paragraph()
            .align_center()
            .add_run("=".repeat(SEPARATOR_WIDTH));
        append_case(&mut document, record);
    }
    document
}

/// Render one record and persist it to `output`.
pub fn write_single(record: &CaseRecord, output: &Path) -> Result<()> {
    let document = build_single_document(record);
    document
        .save(output)
        .with_context(|| format!("write {}", output.display()))?;
    info!(output = %output.display(), "case summary written");
    Ok(())
}

/// Render every record into one paginated document and persist it.
pub fn write_batch(records: &[CaseRecord], output: &Path) -> Result<()> {
    let document = build_batch_document(records);
    document
        .save(output)
        .with_context(|| format!("write {}", output.display()))?;
    info!(
        case_count = records.len(),
        output = %output.display(),
        "batch summary written"
    );
    Ok(())
}
