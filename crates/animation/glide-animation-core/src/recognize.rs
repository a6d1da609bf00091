//! Splitting unit-bearing strings into prefix, numeric payload and suffix.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::value::Value;

// Leading letters, signed decimal with optional exponent, trailing letters or `%`.
// Every group is optional, so the leftmost match always starts at offset 0.
static PREFIX_NUMBER_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Za-z]*)(-?\d*\.?\d*)([eE][-+]?[0-9]+)?([A-Za-z%]*)")
        .expect("prefix/suffix pattern is valid")
});

/// Result of [`recognize_prefix_suffix`].
#[derive(Clone, Debug, PartialEq)]
pub struct Recognized {
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    /// Numeric payload; NaN when the string carries no number.
    pub stripped: f64,
}

impl Recognized {
    /// True when the value was a string, even a bare one like `"42"`.
    #[inline]
    pub fn from_text(&self) -> bool {
        self.prefix.is_some()
    }
}

/// Recognize `(prefix, number, suffix)` in a value.
///
/// Numbers pass through untouched. For strings, a missing numeric payload
/// yields `stripped == NaN` rather than an error.
pub fn recognize_prefix_suffix(value: &Value) -> Recognized {
    match value {
        Value::Number(n) => Recognized {
            prefix: None,
            suffix: None,
            stripped: *n,
        },
        Value::Text(s) => recognize_str(s),
    }
}

fn recognize_str(s: &str) -> Recognized {
    let Some(caps) = PREFIX_NUMBER_SUFFIX.captures(s) else {
        return Recognized {
            prefix: Some(String::new()),
            suffix: Some(String::new()),
            stripped: f64::NAN,
        };
    };
    let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());

    let mut number = group(2).to_string();
    number.push_str(group(3));

    Recognized {
        prefix: Some(group(1).to_string()),
        suffix: Some(group(4).to_string()),
        stripped: parse_float(&number),
    }
}

fn parse_float(s: &str) -> f64 {
    s.parse::<f64>().unwrap_or(f64::NAN)
}
