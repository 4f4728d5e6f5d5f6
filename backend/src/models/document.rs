//! Output document produced for JSON consumers.

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use super::calendar::CalendarKind;

/// Identity block describing the calendar an output document came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Calendar date as `yyyy-MM-dd`
    pub date: String,
    #[serde(rename = "type")]
    pub calendar_type: String,
    pub algorithm: String,
    pub location: Option<String>,
    pub latitude: String,
    pub longitude: String,
    pub elevation: String,
    /// Standard-time abbreviation of the zone (`EST`, `IST`), not a long
    /// display name; the IANA id when the zone has no abbreviation.
    pub time_zone_name: String,
    #[serde(rename = "timeZoneID")]
    pub time_zone_id: String,
    /// Standard UTC offset in hours
    pub time_zone_offset: String,
}

/// Metadata plus one ordered `label -> value` mapping keyed by calendar kind.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputDocument {
    pub metadata: Metadata,
    kind: CalendarKind,
    entries: Vec<(String, String)>,
}

impl OutputDocument {
    pub fn new(metadata: Metadata, kind: CalendarKind) -> Self {
        Self {
            metadata,
            kind,
            entries: Vec::new(),
        }
    }

    pub fn kind(&self) -> CalendarKind {
        self.kind
    }

    /// Top-level key the entries are serialized under.
    pub fn kind_key(&self) -> &'static str {
        self.kind.output_key()
    }

    /// Append an entry. An existing label keeps its position and takes the
    /// new value.
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) {
        let label = label.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == label) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((label, value)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == label)
            .map(|(_, value)| value.as_str())
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_json_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

struct Entries<'a>(&'a [(String, String)]);

impl Serialize for Entries<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, value) in self.0 {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

impl Serialize for OutputDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("metadata", &self.metadata)?;
        map.serialize_entry(self.kind_key(), &Entries(&self.entries))?;
        map.end()
    }
}
