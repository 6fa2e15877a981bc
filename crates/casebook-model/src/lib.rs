pub mod record;

pub use record::{CaseId, CaseInput, CaseRecord, Gender, has_text};
