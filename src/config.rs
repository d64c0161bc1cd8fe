//! Recorder configuration
//!
//! Construction-time settings only. Nothing here changes the ordering or
//! atomicity of records.

use serde::Deserialize;

/// Settings applied when an [`EventRecorder`](crate::EventRecorder) is built
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RecorderConfig {
    /// Slots reserved up front in the log
    pub initial_capacity: usize,

    /// Emit a `tracing` trace event for every record
    pub trace_records: bool,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            trace_records: false,
        }
    }
}

impl RecorderConfig {
    /// Preset for chatty test doubles: small preallocation, records traced
    pub fn testing() -> Self {
        Self {
            initial_capacity: 16,
            trace_records: true,
        }
    }

    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    pub fn with_trace_records(mut self, enabled: bool) -> Self {
        self.trace_records = enabled;
        self
    }
}
