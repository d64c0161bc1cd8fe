//! Error types with fix suggestions

use thiserror::Error;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

/// Errors surfaced by the recorder.
///
/// `record` never returns one of these: allocation failure there aborts the
/// process. Only the fallible `try_record` path reports exhaustion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecorderError {
    #[error("EVREC-001: Cannot grow event log past {len} records")]
    ResourceExhausted { len: usize },
}

impl FixSuggestion for RecorderError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            RecorderError::ResourceExhausted { .. } => {
                Some("Record fewer or shorter events, or split the scenario across recorders")
            }
        }
    }
}
