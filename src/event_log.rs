//! Thread-safe, append-only event recorder
//!
//! - EventRecord: one immutable formatted message
//! - EventRecorder: shared log handle with `record` and `snapshot`
//!
//! Producers format their message before calling `record`; the lock is only
//! held for the push itself.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Serialize, Serializer};

use crate::config::RecorderConfig;
use crate::error::RecorderError;
use crate::interaction::Interaction;
use crate::snapshot::Snapshot;

/// Single recorded message
///
/// Uses Arc<str> so snapshots clone pointers, not text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventRecord(Arc<str>);

impl EventRecord {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First whitespace-delimited token of the message
    pub fn kind(&self) -> &str {
        self.0.split_whitespace().next().unwrap_or("")
    }
}

impl Deref for EventRecord {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EventRecord {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for EventRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl From<String> for EventRecord {
    fn from(message: String) -> Self {
        Self(Arc::from(message))
    }
}

impl From<&str> for EventRecord {
    fn from(message: &str) -> Self {
        Self(Arc::from(message))
    }
}

impl PartialEq<str> for EventRecord {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for EventRecord {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

/// Thread-safe, append-only event recorder
///
/// Clones share the same log, so a test can hand one handle to the code
/// under test and keep another for assertions.
#[derive(Clone)]
pub struct EventRecorder {
    events: Arc<RwLock<Vec<EventRecord>>>,
    trace_records: bool,
}

impl EventRecorder {
    /// Create an empty recorder with default settings
    pub fn new() -> Self {
        Self::with_config(RecorderConfig::default())
    }

    pub fn with_config(config: RecorderConfig) -> Self {
        Self {
            events: Arc::new(RwLock::new(Vec::with_capacity(config.initial_capacity))),
            trace_records: config.trace_records,
        }
    }

    /// Append a message (thread-safe)
    ///
    /// Allocation failure aborts the process; use [`try_record`](Self::try_record)
    /// to observe it instead.
    pub fn record(&self, message: impl Into<String>) {
        let record = EventRecord::from(message.into());
        let index = {
            let mut events = self.events.write();
            events.push(record.clone());
            events.len() - 1
        };
        self.trace(index, &record);
    }

    /// Append a message, reporting a failure to grow the log instead of aborting
    ///
    /// Only growth of the log itself is fallible; building the record from
    /// `message` still aborts on allocation failure. The log is left
    /// untouched on error.
    pub fn try_record(&self, message: impl Into<String>) -> Result<(), RecorderError> {
        let record = EventRecord::from(message.into());
        let index = {
            let mut events = self.events.write();
            if events.try_reserve(1).is_err() {
                let len = events.len();
                drop(events);
                tracing::warn!(len, "event log could not grow");
                return Err(RecorderError::ResourceExhausted { len });
            }
            events.push(record.clone());
            events.len() - 1
        };
        self.trace(index, &record);
        Ok(())
    }

    /// Render an interaction and append it
    pub fn record_interaction(&self, interaction: &Interaction) {
        self.record(interaction.to_string());
    }

    /// Point-in-time copy of every record so far, in append order
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.events.read().clone())
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn trace(&self, index: usize, record: &EventRecord) {
        if self.trace_records {
            tracing::trace!(index, record = record.as_str(), "recorded event");
        }
    }
}

impl Default for EventRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventRecorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventRecorder")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;

    // ═══════════════════════════════════════════════════════════════
    // EventRecord tests
    // ═══════════════════════════════════════════════════════════════

    #[test]
    fn record_kind_is_first_token() {
        let record = EventRecord::from("onVolumeUpdateReceived audioStream=STREAM_ALARM");
        assert_eq!(record.kind(), "onVolumeUpdateReceived");
        assert_eq!(EventRecord::from("").kind(), "");
    }

    #[test]
    fn record_compares_with_str() {
        let record = EventRecord::from("hello".to_string());
        assert_eq!(record, "hello");
        assert_eq!(record.len(), 5);
        assert_eq!(record.to_string(), "hello");
    }

    #[test]
    fn record_serializes_as_plain_string() {
        let json = serde_json::to_value(EventRecord::from("a b=c")).unwrap();
        assert_eq!(json, serde_json::json!("a b=c"));
    }

    // ═══════════════════════════════════════════════════════════════
    // EventRecorder tests
    // ═══════════════════════════════════════════════════════════════

    #[test]
    fn recorder_new_starts_empty() {
        let recorder = EventRecorder::new();
        assert!(recorder.is_empty());
        assert_eq!(recorder.len(), 0);
        assert!(recorder.snapshot().is_empty());
    }

    #[test]
    fn recorder_keeps_call_order() {
        let recorder = EventRecorder::new();
        recorder.record("onSetVolumeRequested audioStream=STREAM_MUSIC");
        recorder.record("onVolumeUpdateReceived audioStream=STREAM_MUSIC");

        assert_eq!(
            recorder.snapshot(),
            [
                "onSetVolumeRequested audioStream=STREAM_MUSIC",
                "onVolumeUpdateReceived audioStream=STREAM_MUSIC",
            ]
        );
    }

    #[test]
    fn recorder_allows_duplicates() {
        let recorder = EventRecorder::new();
        recorder.record("tick");
        recorder.record("tick");
        recorder.record("tick");

        let snapshot = recorder.snapshot();
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot.count("tick"), 3);
    }

    #[test]
    fn try_record_appends_like_record() {
        let recorder = EventRecorder::new();
        recorder.try_record("first").unwrap();
        recorder.record("second");
        recorder.try_record(String::from("third")).unwrap();

        assert_eq!(recorder.snapshot(), ["first", "second", "third"]);
    }

    #[test]
    fn record_interaction_uses_canonical_text() {
        let recorder = EventRecorder::new();
        recorder.record_interaction(
            &Interaction::new("onSetVolumeRequested").param("audioStream", "STREAM_DTMF"),
        );
        assert_eq!(
            recorder.snapshot(),
            ["onSetVolumeRequested audioStream=STREAM_DTMF"]
        );
    }

    #[test]
    fn snapshot_is_not_affected_by_later_records() {
        let recorder = EventRecorder::new();
        recorder.record("before");

        let snapshot = recorder.snapshot();
        recorder.record("after");

        assert_eq!(snapshot, ["before"]);
        assert_eq!(recorder.snapshot(), ["before", "after"]);
    }

    #[test]
    fn recorder_is_clone() {
        let recorder = EventRecorder::new();
        recorder.record("one");

        let cloned = recorder.clone();
        assert_eq!(cloned.len(), 1);

        // Cloned shares the same underlying log (Arc)
        recorder.record("two");
        assert_eq!(cloned.len(), 2);
    }

    #[test]
    fn with_config_preallocates() {
        let recorder =
            EventRecorder::with_config(RecorderConfig::default().with_initial_capacity(32));
        assert!(recorder.events.read().capacity() >= 32);
        assert!(recorder.is_empty());
    }

    #[test]
    fn debug_shows_len_only() {
        let recorder = EventRecorder::new();
        recorder.record("secret payload");
        let debug = format!("{:?}", recorder);
        assert_eq!(debug, "EventRecorder { len: 1 }");
    }

    #[test]
    fn recorder_thread_safe_concurrent_records() {
        let recorder = EventRecorder::new();

        let handles: Vec<_> = (0..10)
            .map(|i| {
                let recorder = recorder.clone();
                thread::spawn(move || {
                    for j in 0..50 {
                        recorder.record(format!("worker={} seq={}", i, j));
                    }
                })
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }

        let snapshot = recorder.snapshot();
        assert_eq!(snapshot.len(), 500);

        // Every message exactly once, intact
        let unique: HashSet<&str> = snapshot.iter().map(|r| r.as_str()).collect();
        assert_eq!(unique.len(), 500);
        for i in 0..10 {
            for j in 0..50 {
                assert!(unique.contains(format!("worker={} seq={}", i, j).as_str()));
            }
        }
    }

    #[test]
    fn per_thread_order_is_preserved() {
        let recorder = EventRecorder::new();

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let recorder = recorder.clone();
                thread::spawn(move || {
                    for j in 0..100 {
                        recorder.record(format!("w{} {}", i, j));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let snapshot = recorder.snapshot();
        for i in 0..4 {
            let prefix = format!("w{}", i);
            let seqs: Vec<u32> = snapshot
                .matching_kind(&prefix)
                .iter()
                .map(|r| r.split_whitespace().nth(1).unwrap().parse().unwrap())
                .collect();
            assert_eq!(seqs, (0..100).collect::<Vec<_>>());
        }
    }
}
