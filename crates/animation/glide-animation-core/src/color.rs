//! Color bridge: recognizing color strings and moving them in and out of HSVA.
//!
//! Channels are exchanged as `[hue, saturation, value, alpha]`, each in `[0, 1]`
//! (hue is a fraction of a full turn). Recomposed colors are rendered as
//! `rgba(r, g, b, a)` with integer RGB components.

use once_cell::sync::Lazy;
use palette::{encoding, FromColor, Hsla, Hsva, Srgb, Srgba};
use regex::Regex;

use crate::transform::format_number;
use crate::value::Value;

static RGB_FN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^rgba?\(\s*([\d.]+)\s*,\s*([\d.]+)\s*,\s*([\d.]+)\s*(?:,\s*([\d.]+)\s*)?\)$",
    )
    .expect("rgb pattern is valid")
});

static HSL_FN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^hsla?\(\s*(-?[\d.]+)\s*,\s*([\d.]+)%\s*,\s*([\d.]+)%\s*(?:,\s*([\d.]+)\s*)?\)$",
    )
    .expect("hsl pattern is valid")
});

/// HSVA channel order used by the decorator.
pub const CHANNELS: [&str; 4] = ["H", "S", "V", "A"];

/// Whether `value` is a color specification this bridge can decompose.
pub fn is_color(value: &Value) -> bool {
    match value {
        Value::Text(s) => parse_rgba(s).is_some(),
        Value::Number(_) => false,
    }
}

type Rgba = Srgba<f64>;
type Hsv = Hsva<encoding::Srgb, f64>;
type Hsl = Hsla<encoding::Srgb, f64>;

/// Decompose a color into `[h, s, v, a]`; `None` when `value` is not a color.
pub fn to_hsva(value: &Value) -> Option<[f64; 4]> {
    let rgba = parse_rgba(value.as_text()?)?;
    let hsva = Hsv::from_color(rgba);
    Some([
        hsva.hue.into_positive_degrees() / 360.0,
        hsva.saturation,
        hsva.value,
        hsva.alpha,
    ])
}

/// Recompose `[h, s, v, a]` into an `rgba(...)` color string.
pub fn from_hsva(hsva: [f64; 4]) -> Value {
    let [h, s, v, a] = hsva;
    let hsv = Hsv::new(h * 360.0, s.clamp(0.0, 1.0), v.clamp(0.0, 1.0), a);
    let rgba = Rgba::from_color(hsv);
    let to_byte = |c: f64| (c * 255.0).round().clamp(0.0, 255.0);
    Value::Text(format!(
        "rgba({}, {}, {}, {})",
        format_number(to_byte(rgba.red)),
        format_number(to_byte(rgba.green)),
        format_number(to_byte(rgba.blue)),
        format_number(a.clamp(0.0, 1.0)),
    ))
}

fn parse_rgba(input: &str) -> Option<Rgba> {
    let s = input.trim().to_ascii_lowercase();
    if s == "transparent" {
        return Some(Rgba::new(0.0, 0.0, 0.0, 0.0));
    }
    if s.starts_with('#') {
        return parse_hex(&s);
    }
    if let Some(caps) = RGB_FN.captures(&s) {
        let channel = |i: usize| -> Option<f64> { caps.get(i)?.as_str().parse().ok() };
        let alpha = match caps.get(4) {
            Some(m) => m.as_str().parse::<f64>().ok()?,
            None => 1.0,
        };
        return Some(Rgba::new(
            channel(1)? / 255.0,
            channel(2)? / 255.0,
            channel(3)? / 255.0,
            alpha,
        ));
    }
    if let Some(caps) = HSL_FN.captures(&s) {
        let part = |i: usize| -> Option<f64> { caps.get(i)?.as_str().parse().ok() };
        let alpha = match caps.get(4) {
            Some(m) => m.as_str().parse::<f64>().ok()?,
            None => 1.0,
        };
        let hsla = Hsl::new(part(1)?, part(2)? / 100.0, part(3)? / 100.0, alpha);
        return Some(Rgba::from_color(hsla));
    }
    palette::named::from_str(&s).map(|rgb| from_bytes(rgb, 1.0))
}

fn parse_hex(s: &str) -> Option<Rgba> {
    let digits = &s[1..];
    if !digits.is_ascii() {
        return None;
    }
    match digits.len() {
        3 | 6 => s.parse::<Srgb<u8>>().ok().map(|rgb| from_bytes(rgb, 1.0)),
        4 => {
            let rgb = format!("#{}", &digits[..3]).parse::<Srgb<u8>>().ok()?;
            let a = u8::from_str_radix(&digits[3..].repeat(2), 16).ok()?;
            Some(from_bytes(rgb, f64::from(a) / 255.0))
        }
        8 => {
            let rgb = format!("#{}", &digits[..6]).parse::<Srgb<u8>>().ok()?;
            let a = u8::from_str_radix(&digits[6..], 16).ok()?;
            Some(from_bytes(rgb, f64::from(a) / 255.0))
        }
        _ => None,
    }
}

fn from_bytes(rgb: Srgb<u8>, alpha: f64) -> Rgba {
    Rgba::new(
        f64::from(rgb.red) / 255.0,
        f64::from(rgb.green) / 255.0,
        f64::from(rgb.blue) / 255.0,
        alpha,
    )
}
