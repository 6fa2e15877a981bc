//! Minimal OOXML (`.docx`) document model and writer.
//!
//! Implements just enough of WordprocessingML for case-summary output:
//! paragraphs of styled runs, page breaks, centered alignment, fixed page
//! geometry, and a document-wide base font with an east-Asian override.
//! The container side emits the smallest part set Word accepts.

mod error;
mod types;
mod writer;

pub use error::{DocxError, Result};
pub use types::{Alignment, Block, Document, FontConfig, PageSetup, Paragraph, Run};
pub use writer::{DocxWriter, write_docx};
