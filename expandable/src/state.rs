//! Persisted expansion state across container recreation.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Saved record of a container: its own flag plus the upstream state blob.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavedState {
    #[serde(default)]
    pub expanded: bool,
    /// State saved by whatever the container is built on, passed through
    /// untouched.
    #[serde(default)]
    pub super_state: Option<Value>,
}

/// Errors that can occur when reading a saved record.
#[derive(Debug, Error)]
pub enum StateError {
    /// The saved value is not a record at all.
    #[error("saved state is not a record (got {0})")]
    NotARecord(&'static str),

    /// The record could not be decoded.
    #[error("malformed saved state: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl SavedState {
    pub fn new(expanded: bool, super_state: Option<Value>) -> Self {
        Self {
            expanded,
            super_state,
        }
    }

    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "expanded": self.expanded,
            "super_state": self.super_state,
        })
    }

    pub fn to_json(&self) -> Result<String, StateError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_value(value: Value) -> Result<Self, StateError> {
        if !value.is_object() {
            return Err(StateError::NotARecord(kind_of(&value)));
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_json(input: &str) -> Result<Self, StateError> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_value(value)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a record",
    }
}
