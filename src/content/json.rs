//! JSON documents
//!
//! JSON maps directly onto the content model: arrays are tag descriptions,
//! objects are attribute maps (key order preserved), strings are text.

use serde_json::Value;

use super::{Attributes, Content, Number};

impl From<Value> for Content {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Content::Null,
            Value::Bool(b) => Content::Bool(b),
            Value::Number(n) => Content::Number(match n.as_i64() {
                Some(i) => Number::Int(i),
                None => Number::Float(n.as_f64().unwrap_or(f64::NAN)),
            }),
            Value::String(s) => Content::Text(s),
            Value::Array(items) => Content::Sequence(items.into_iter().map(Content::from).collect()),
            Value::Object(map) => Content::Attributes(map.into_iter().collect::<Attributes>()),
        }
    }
}

impl Content {
    /// Parse a JSON document into content
    pub fn from_json_str(source: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(source)?;
        Ok(Content::from(value))
    }

    /// Parse a JSON array into a list of top-level arguments
    ///
    /// A non-array document is treated as a single argument.
    pub fn arguments_from_json_str(source: &str) -> Result<Vec<Self>, serde_json::Error> {
        let value: Value = serde_json::from_str(source)?;
        Ok(match value {
            Value::Array(items) => items.into_iter().map(Content::from).collect(),
            other => vec![Content::from(other)],
        })
    }
}
