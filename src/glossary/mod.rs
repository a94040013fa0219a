//! Caller-side acronym corpus: cross-call dedup, lookup, persistence.

pub mod types;
pub mod store;

pub use types::*;
pub use store::Glossary;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlossaryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
