// fieldscrub-core/src/value.rs
//! Provides the core value model for field sanitisation: the universe of
//! caller-supplied input values, opaque upload handles, and the ordered
//! accumulator for cleaned output.

use std::collections::HashMap;

use anyhow::{bail, Result};
use log::warn;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// Metadata describing a single uploaded file.
///
/// The engine treats handles as opaque: beyond asking the configured
/// `UploadInspector` whether a handle is genuine, it never interprets them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadHandle {
    /// Client-supplied file name.
    pub file_name: String,
    /// Declared MIME type, if the transport provided one.
    pub content_type: Option<String>,
    /// Size in bytes.
    pub size: u64,
}

impl UploadHandle {
    pub fn new(file_name: impl Into<String>, content_type: Option<String>, size: u64) -> Self {
        Self {
            file_name: file_name.into(),
            content_type,
            size,
        }
    }
}

/// A single field value as supplied by a caller.
///
/// This is the whole universe the engine operates on. Nested mappings have
/// no representation; see [`FieldValue::from_json`] for how they degrade at
/// the JSON boundary.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<FieldValue>),
    Upload(UploadHandle),
}

impl FieldValue {
    /// Shorthand constructor for text values.
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Standard truthiness over the value universe: `""`, `"0"`, `0`, `0.0`,
    /// null, an empty list and `false` are falsy; everything else, upload
    /// handles included, is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Null => false,
            FieldValue::Bool(b) => *b,
            FieldValue::Int(n) => *n != 0,
            FieldValue::Float(f) => *f != 0.0,
            FieldValue::Text(s) => !s.is_empty() && s != "0",
            FieldValue::List(items) => !items.is_empty(),
            FieldValue::Upload(_) => true,
        }
    }

    /// Whether the value counts as blank for the `notBlank` category.
    /// Exact complement of [`FieldValue::is_truthy`].
    pub fn is_empty_like(&self) -> bool {
        !self.is_truthy()
    }

    /// Textual rendering for the string-shaped transforms. Scalars render
    /// (`true` renders as `"1"`, `false` and null as `""`); lists and
    /// uploads have no sensible rendering and return `None`.
    pub fn render_text(&self) -> Option<String> {
        match self {
            FieldValue::Null => Some(String::new()),
            FieldValue::Bool(b) => Some(if *b { "1".to_string() } else { String::new() }),
            FieldValue::Int(n) => Some(n.to_string()),
            FieldValue::Float(f) => Some(f.to_string()),
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::List(_) | FieldValue::Upload(_) => None,
        }
    }

    /// Converts a JSON value into a field value.
    ///
    /// Nested JSON objects have no counterpart in the value universe and
    /// degrade to [`FieldValue::Null`] with a warning. Upload handles never
    /// parse from JSON; they only enter through the programmatic API.
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => FieldValue::Null,
            serde_json::Value::Bool(b) => FieldValue::Bool(*b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => FieldValue::Int(i),
                None => FieldValue::Float(n.as_f64().unwrap_or(0.0)),
            },
            serde_json::Value::String(s) => FieldValue::Text(s.clone()),
            serde_json::Value::Array(items) => {
                FieldValue::List(items.iter().map(Self::from_json).collect())
            }
            serde_json::Value::Object(_) => {
                warn!("Nested JSON objects have no field-value representation; treating as null.");
                FieldValue::Null
            }
        }
    }

    /// Renders the value as JSON. Upload handles serialise to a descriptive
    /// object; non-finite floats degrade to null.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            FieldValue::Null => serde_json::Value::Null,
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
            FieldValue::Int(n) => serde_json::Value::Number((*n).into()),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::Text(s) => serde_json::Value::String(s.clone()),
            FieldValue::List(items) => {
                serde_json::Value::Array(items.iter().map(Self::to_json).collect())
            }
            FieldValue::Upload(handle) => serde_json::json!({
                "file_name": handle.file_name,
                "content_type": handle.content_type,
                "size": handle.size,
            }),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// Raw caller-supplied fields, keyed by field name. Immutable during
/// processing; the engine only ever reads it.
pub type RawFields = HashMap<String, FieldValue>;

/// Parses a top-level JSON object into raw fields.
pub fn raw_fields_from_json(doc: &serde_json::Value) -> Result<RawFields> {
    let serde_json::Value::Object(map) = doc else {
        bail!("Raw field input must be a JSON object at the top level.");
    };
    Ok(map
        .iter()
        .map(|(key, value)| (key.clone(), FieldValue::from_json(value)))
        .collect())
}

/// Ordered mapping of cleaned fields.
///
/// Iteration and serialisation order follow the policy's allowed-field
/// order; the key set is always a subset of allowed ∩ keys(raw).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanedFields {
    entries: Vec<(String, FieldValue)>,
}

impl CleanedFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` under `field`, replacing any earlier entry for the
    /// same field while keeping its original position.
    pub fn insert(&mut self, field: String, value: FieldValue) {
        match self.entries.iter_mut().find(|(name, _)| *name == field) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((field, value)),
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    pub fn contains_key(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Field names in output order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Converts back into a raw mapping, e.g. to feed cleaned output through
    /// the engine again.
    pub fn into_raw(self) -> RawFields {
        self.entries.into_iter().collect()
    }

    /// Renders the mapping as a JSON object, preserving field order.
    pub fn to_json(&self) -> serde_json::Value {
        let map: serde_json::Map<String, serde_json::Value> = self
            .entries
            .iter()
            .map(|(name, value)| (name.clone(), value.to_json()))
            .collect();
        serde_json::Value::Object(map)
    }
}

impl Serialize for CleanedFields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
