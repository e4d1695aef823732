use std::collections::HashMap;
use std::sync::Arc;

use dashmap::DashMap;

use crate::schema;

/// Raw input for one field, tagged by control type.
///
/// Numeric inputs are kept as the text the user typed; checkbox inputs are
/// kept as their checked state. Conversion to strict numeric/boolean types
/// happens once, in the payload builder.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl From<&str> for FieldValue {
    fn from(raw: &str) -> Self {
        FieldValue::Text(raw.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(raw: String) -> Self {
        FieldValue::Text(raw)
    }
}

impl From<bool> for FieldValue {
    fn from(checked: bool) -> Self {
        FieldValue::Flag(checked)
    }
}

/// In-memory store of raw form input, keyed by field display name.
///
/// Cloning is cheap and shares the underlying store, so a form instance can
/// hand the same state to its edit handlers and its submit path. Edits are
/// last-write-wins per key.
#[derive(Clone, Debug, Default)]
pub struct FormState {
    data: Arc<DashMap<String, FieldValue>>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            data: Arc::new(DashMap::new()),
        }
    }

    /// Record an edit. `name` must be one of the schema's field names;
    /// anything else is a programming error and panics.
    ///
    /// No range validation happens here; implausible values pass through
    /// to the payload builder untouched.
    pub fn set_field(&self, name: &str, value: impl Into<FieldValue>) {
        assert!(
            schema::descriptor(name).is_some(),
            "unknown form field: {name}"
        );
        self.data.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<FieldValue> {
        self.data.get(name).map(|entry| entry.clone())
    }

    /// Owned copy of the current state. Mutating the returned map never
    /// affects the store.
    pub fn snapshot(&self) -> HashMap<String, FieldValue> {
        self.data
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    /// Discard all recorded input.
    pub fn reset(&self) {
        self.data.clear();
    }
}
