//! Point-in-time views of a recorder's log, with assertion helpers

use std::ops::Index;

use serde::Serialize;
use serde_json::Value;

use crate::event_log::EventRecord;

/// Immutable copy of the log at the moment `snapshot()` was called
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Snapshot {
    records: Vec<EventRecord>,
}

impl Snapshot {
    pub(crate) fn new(records: Vec<EventRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EventRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[EventRecord] {
        &self.records
    }

    pub fn first(&self) -> Option<&EventRecord> {
        self.records.first()
    }

    pub fn last(&self) -> Option<&EventRecord> {
        self.records.last()
    }

    /// True if any record equals `message`
    pub fn contains(&self, message: &str) -> bool {
        self.records.iter().any(|r| r == message)
    }

    /// Multiplicity of `message`
    pub fn count(&self, message: &str) -> usize {
        self.records.iter().filter(|r| *r == message).count()
    }

    /// True if `expected` appears as an in-order subsequence
    ///
    /// Other records may sit between the expected ones.
    pub fn contains_in_order(&self, expected: &[&str]) -> bool {
        let mut wanted = expected.iter().peekable();
        for record in &self.records {
            match wanted.peek() {
                Some(next) if record == *next => {
                    wanted.next();
                }
                Some(_) => {}
                None => break,
            }
        }
        wanted.peek().is_none()
    }

    /// Records whose first token equals `kind`
    pub fn matching_kind(&self, kind: &str) -> Vec<EventRecord> {
        self.records
            .iter()
            .filter(|r| r.kind() == kind)
            .cloned()
            .collect()
    }

    pub fn into_strings(self) -> Vec<String> {
        self.records.into_iter().map(|r| r.to_string()).collect()
    }

    /// JSON array of messages, for debug dumps
    pub fn to_json(&self) -> Value {
        Value::Array(
            self.records
                .iter()
                .map(|r| Value::String(r.to_string()))
                .collect(),
        )
    }
}

impl Index<usize> for Snapshot {
    type Output = EventRecord;

    fn index(&self, index: usize) -> &EventRecord {
        &self.records[index]
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a EventRecord;
    type IntoIter = std::slice::Iter<'a, EventRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for Snapshot {
    type Item = EventRecord;
    type IntoIter = std::vec::IntoIter<EventRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

fn same_messages(records: &[EventRecord], expected: &[&str]) -> bool {
    records.len() == expected.len() && records.iter().zip(expected).all(|(r, e)| r == e)
}

impl PartialEq<[&str]> for Snapshot {
    fn eq(&self, other: &[&str]) -> bool {
        same_messages(&self.records, other)
    }
}

impl PartialEq<&[&str]> for Snapshot {
    fn eq(&self, other: &&[&str]) -> bool {
        same_messages(&self.records, other)
    }
}

impl<const N: usize> PartialEq<[&str; N]> for Snapshot {
    fn eq(&self, other: &[&str; N]) -> bool {
        same_messages(&self.records, other)
    }
}

impl PartialEq<Vec<&str>> for Snapshot {
    fn eq(&self, other: &Vec<&str>) -> bool {
        same_messages(&self.records, other)
    }
}
