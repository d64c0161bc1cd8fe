//! Structured interactions rendered to canonical record text
//!
//! An interaction is an event kind plus ordered `key=value` parameters:
//!
//! ```rust
//! use eventrec::Interaction;
//!
//! let msg = Interaction::new("onSetVolumeRequested")
//!     .param("audioStream", "STREAM_MUSIC")
//!     .to_string();
//! assert_eq!(msg, "onSetVolumeRequested audioStream=STREAM_MUSIC");
//! ```

use std::fmt;

/// One observed call, before it is flattened into a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    kind: String,
    params: Vec<(String, String)>,
}

impl Interaction {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            params: Vec::new(),
        }
    }

    /// Append a parameter (rendered in insertion order)
    pub fn param(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.params.push((key.into(), value.to_string()));
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }
}

impl fmt::Display for Interaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.kind)?;
        for (key, value) in &self.params {
            write!(f, " {}={}", key, value)?;
        }
        Ok(())
    }
}
