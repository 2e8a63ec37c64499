/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the dataset loader, the table controller and the UI layer.
use std::cmp::Ordering;
use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Value};

/// Unique identifier of a property record
pub const IDENTIFIER_FIELD: &str = "archipelagoId";
/// Categorical field used by the tag filter
pub const TAG_FIELD: &str = "aggregationTag";
/// Metadata field that never becomes a column
pub const RESERVED_FIELD: &str = "__typename";

static ABSENT: FieldValue = FieldValue::Null;

/// A picture descriptor nested inside a property record
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Picture {
    pub filename: String,
}

/// A single value of a property record field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// JSON null, or a key the record does not have
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    /// A list of objects carrying a `filename`
    Pictures(Vec<Picture>),
    /// Any other nested value, kept as compact JSON text
    Other(String),
}

impl FieldValue {
    /// Text shown in a table cell, or `None` when the value is missing or falsy
    pub fn display_text(&self) -> Option<String> {
        match self {
            FieldValue::Null | FieldValue::Bool(false) => None,
            FieldValue::Bool(true) => Some("true".to_string()),
            FieldValue::Number(n) if *n == 0.0 || n.is_nan() => None,
            FieldValue::Number(n) => Some(n.to_string()),
            FieldValue::Text(s) if s.is_empty() => None,
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::Pictures(pictures) => pictures
                .first()
                .map(|picture| picture.filename.clone())
                .filter(|filename| !filename.is_empty()),
            FieldValue::Other(json) => Some(json.clone()),
        }
    }

    /// The value as text, if it is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Generic less-than/greater-than over two field values.
    ///
    /// Values of the same kind compare naturally; different kinds order by
    /// kind, with null always last.
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a.cmp(b),
            (FieldValue::Number(a), FieldValue::Number(b)) => a.total_cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (FieldValue::Pictures(a), FieldValue::Pictures(b)) => a
                .first()
                .map(|p| p.filename.as_str())
                .cmp(&b.first().map(|p| p.filename.as_str())),
            (FieldValue::Other(a), FieldValue::Other(b)) => a.cmp(b),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            FieldValue::Bool(_) => 0,
            FieldValue::Number(_) => 1,
            FieldValue::Text(_) => 2,
            FieldValue::Pictures(_) => 3,
            FieldValue::Other(_) => 4,
            FieldValue::Null => 5,
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Bool(b),
            Value::Number(n) => FieldValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => FieldValue::Text(s),
            array @ Value::Array(_) => match serde_json::from_value::<Vec<Picture>>(array.clone()) {
                Ok(pictures) => FieldValue::Pictures(pictures),
                Err(_) => FieldValue::Other(array.to_string()),
            },
            object @ Value::Object(_) => FieldValue::Other(object.to_string()),
        }
    }
}

/// A field name used as a table column identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnKey(String);

impl ColumnKey {
    pub fn new(name: impl Into<String>) -> Self {
        ColumnKey(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The identifier and tag columns can never be collapsed
    pub fn is_always_visible(&self) -> bool {
        self.0 == IDENTIFIER_FIELD || self.0 == TAG_FIELD
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Represents a single property in the dataset.
///
/// Fields keep the order they have in the source document.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRecord {
    fields: Vec<(String, FieldValue)>,
}

impl PropertyRecord {
    pub fn new(fields: Vec<(String, FieldValue)>) -> Self {
        Self { fields }
    }

    /// Build a record from a JSON object
    pub fn from_json(object: Map<String, Value>) -> Self {
        Self {
            fields: object
                .into_iter()
                .map(|(name, value)| (name, FieldValue::from(value)))
                .collect(),
        }
    }

    /// Look up a field; absent keys read as `FieldValue::Null`
    pub fn get(&self, name: &str) -> &FieldValue {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
            .unwrap_or(&ABSENT)
    }

    /// Field names in document order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn identifier(&self) -> &FieldValue {
        self.get(IDENTIFIER_FIELD)
    }

    /// The aggregation tag, when the record has a textual one
    pub fn tag(&self) -> Option<&str> {
        self.get(TAG_FIELD).as_text()
    }
}
