//! Dynamically typed host values.

use serde::{Deserialize, Serialize};

/// A value as produced by the host editor's scripting layer.
///
/// Buffer reads return `Value`, not `String`: the host's document model is
/// untyped, and a misbehaving caller can hand the extension a number or a
/// list where a line of text is expected. Code that requires text matches
/// on [`Value::Text`] and reports the actual type via [`Value::type_name`]
/// otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A line of text. No embedded line terminator.
    Text(String),
    /// A signed integer.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// A boolean.
    Boolean(bool),
    /// An ordered list of values.
    List(Vec<Value>),
    /// The host's null value.
    Nil,
}

impl Value {
    /// Name of this value's type, as shown in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Text(_) => "string",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Boolean(_) => "boolean",
            Value::List(_) => "list",
            Value::Nil => "nil",
        }
    }

    /// The text content, if this is a [`Value::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Whether this value is textual.
    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}
