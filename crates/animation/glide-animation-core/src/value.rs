//! Externally visible animated values and the shape tag chosen at start.

use serde::{Deserialize, Serialize};

/// Value as seen by shared values and style readers.
///
/// Text covers both unit-bearing strings (`"10px"`, `"50%"`, `"rotate45deg"`)
/// and color specifications (`"#ff0000"`, `"rgba(0, 0, 0, 0.5)"`, `"red"`);
/// which of the two it is gets decided once, when an animation starts.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data")]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    /// Convenience constructor for text values.
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(_) => None,
        }
    }

    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Number(_) => None,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

/// Shape an animation committed to at its first start.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum ValueShape {
    /// Bare number, stepped as is.
    Number,
    /// Numeric payload wrapped in a textual prefix and suffix.
    Unit { prefix: String, suffix: String },
    /// Color stepped as four independent HSVA channels.
    Color,
}

impl ValueShape {
    #[inline]
    pub fn is_color(&self) -> bool {
        matches!(self, ValueShape::Color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_json_is_tagged() {
        let v = Value::text("10px");
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json, serde_json::json!({"type": "Text", "data": "10px"}));
        let back: Value = serde_json::from_value(json).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn accessors() {
        assert_eq!(Value::from(2.5).as_number(), Some(2.5));
        assert_eq!(Value::from("50%").as_text(), Some("50%"));
        assert_eq!(Value::from("50%").as_number(), None);
    }
}
