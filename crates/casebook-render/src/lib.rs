//! Case-summary rendering: fixed per-record layout, batch coordination,
//! and terminology normalization.

pub mod batch;
pub mod captions;
pub mod renderer;
pub mod terms;

pub use batch::{build_batch_document, build_single_document, write_batch, write_single};
pub use renderer::append_case;
pub use terms::{TermRules, TermRulesError};
