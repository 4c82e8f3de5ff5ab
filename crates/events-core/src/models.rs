use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{EventError, Result};

// ── Field names ────────────────────────────────────────────────────────────────

pub const TEAM_NAME: &str = "team_name";
pub const EVENT_TYPE_NAME: &str = "event_type_name";
pub const PASS_LENGTH: &str = "pass_length";
pub const PLAYER_POSITION_NAME: &str = "player_position_name";
pub const PLAYER_NAME: &str = "player_name";
pub const OUTCOME_NAME: &str = "outcome_name";
pub const PERIOD: &str = "period";
pub const ID: &str = "id";

// ── Event types ────────────────────────────────────────────────────────────────

pub const PASS: &str = "Pass";
pub const SHOT: &str = "Shot";

// ── EventRecord ────────────────────────────────────────────────────────────────

/// One event row (a pass, shot, carry, ...) keyed by header name.
///
/// Values are kept as the raw strings read from the source. An empty string
/// and an absent field are different things: the loader always fills every
/// header, so absence only occurs for ragged rows or hand-built records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventRecord {
    fields: HashMap<String, String>,
}

impl EventRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tolerant lookup: `None` when the field is absent.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Exact-match lookup: an absent field is a [`EventError::MissingField`].
    pub fn field(&self, field: &str) -> Result<&str> {
        self.get(field).ok_or_else(|| EventError::missing_field(field))
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over `(field, value)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for EventRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Records in source row order.
pub type Dataset = Vec<EventRecord>;

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EventRecord {
        [(TEAM_NAME, "Arsenal"), (OUTCOME_NAME, "")]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_get_present_and_absent() {
        let record = sample();
        assert_eq!(record.get(TEAM_NAME), Some("Arsenal"));
        assert_eq!(record.get(PERIOD), None);
    }

    #[test]
    fn test_field_distinguishes_empty_from_missing() {
        let record = sample();
        assert_eq!(record.field(OUTCOME_NAME).unwrap(), "");
        match record.field(PASS_LENGTH) {
            Err(EventError::MissingField { field }) => assert_eq!(field, PASS_LENGTH),
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_insert_overwrites() {
        let mut record = EventRecord::new();
        assert!(record.is_empty());
        record.insert(PERIOD, "1");
        record.insert(PERIOD, "2");
        assert_eq!(record.len(), 1);
        assert!(record.contains(PERIOD));
        assert_eq!(record.get(PERIOD), Some("2"));
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["team_name"], "Arsenal");
        assert_eq!(json["outcome_name"], "");

        let back: EventRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, sample());
    }
}
