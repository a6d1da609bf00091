//! Rendering normalized numeric payloads back into their external shape.

use crate::value::{Value, ValueShape};

/// Render `stripped` in the shape the animation committed to.
///
/// `original` is the field as it was before normalization; `None` means the
/// field had no value ("no target yet") and stays `None`.
pub fn render_back(stripped: f64, original: Option<&Value>, shape: &ValueShape) -> Option<Value> {
    original.map(|_| match shape {
        ValueShape::Unit { prefix, suffix } => {
            Value::Text(format!("{prefix}{}{suffix}", format_number(stripped)))
        }
        // Colors are recomposed from channels by the decorator, never from one number.
        ValueShape::Number | ValueShape::Color => Value::Number(stripped),
    })
}

// Outside this range numbers are written with an exponent.
const PLAIN_MIN: f64 = 1e-6;
const PLAIN_MAX: f64 = 1e21;

/// Format a number the way style strings expect it: `10` not `10.0`, `-0` as
/// `0`, and exponent form (`1e-7`, `1e+21`) for very small or large magnitudes.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let s = if n > 0.0 { "Infinity" } else { "-Infinity" };
        s.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if n.abs() < PLAIN_MIN || n.abs() >= PLAIN_MAX {
        let s = format!("{n:e}");
        match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => s,
        }
    } else {
        n.to_string()
    }
}
