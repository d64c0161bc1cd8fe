//! eventrec - thread-safe append-only event recorder for test doubles

pub mod audio;
pub mod config;
pub mod error;
pub mod event_log;
pub mod interaction;
pub mod snapshot;

pub use config::RecorderConfig;
pub use error::{FixSuggestion, RecorderError};
pub use event_log::{EventRecord, EventRecorder};
pub use interaction::Interaction;
pub use snapshot::Snapshot;
