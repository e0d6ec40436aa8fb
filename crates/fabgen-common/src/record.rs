//! Defaulted field access over cleaned records.
//!
//! Generators read attributes from cleaned payloads with recognized
//! defaults applied at ingestion. [`Record`] wraps a cleaned JSON object
//! and provides the read-field-else-default contract in one place so the
//! processing logic never touches raw `serde_json::Value` shapes.

use serde_json::{Map, Value};

const EMPTY: &[Value] = &[];

/// Borrowed view of one cleaned record (a JSON object).
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> Record<'a> {
    /// Wraps a cleaned JSON object.
    pub fn new(fields: &'a Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Wraps a value if it is an object.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        value.as_object().map(Self::new)
    }

    /// Gets a field, treating JSON null as absent.
    pub fn get(&self, field: &str) -> Option<&'a Value> {
        match self.fields.get(field) {
            Some(Value::Null) | None => None,
            Some(value) => Some(value),
        }
    }

    /// Gets a string field, falling back to the default when the field is
    /// absent, null, or not a string.
    pub fn get_str_or(&self, field: &str, default: &'a str) -> &'a str {
        self.get(field).and_then(Value::as_str).unwrap_or(default)
    }

    /// Gets an unsigned integer field. Absent, null, negative, or
    /// non-numeric values yield `None`.
    pub fn get_u32(&self, field: &str) -> Option<u32> {
        self.get(field)
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
    }

    /// Gets a boolean field, falling back to the default.
    pub fn get_bool_or(&self, field: &str, default: bool) -> bool {
        self.get(field).and_then(Value::as_bool).unwrap_or(default)
    }

    /// Gets a nested object field as a record.
    pub fn get_object(&self, field: &str) -> Option<Record<'a>> {
        self.get(field).and_then(Record::from_value)
    }

    /// Gets an array field, defaulting to an empty sequence.
    pub fn get_array(&self, field: &str) -> &'a [Value] {
        self.get(field)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY)
    }
}
