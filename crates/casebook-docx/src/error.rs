//! Error types for document persistence.

use thiserror::Error;

/// Errors that can occur when writing a `.docx` container.
#[derive(Debug, Error)]
pub enum DocxError {
    /// Container (ZIP) error.
    #[error("container error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// XML serialization error.
    #[error("xml error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for docx operations.
pub type Result<T> = std::result::Result<T, DocxError>;
