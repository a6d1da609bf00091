use serde::{Deserialize, Serialize};

/// Maps linear progress in `[0, 1]` to eased progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    Quad,
    Cubic,
    /// `cubic-bezier(0.42, 0, 0.58, 1)`.
    #[default]
    EaseInOut,
    Bezier { x1: f64, y1: f64, x2: f64, y2: f64 },
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Quad => t * t,
            Easing::Cubic => t * t * t,
            Easing::EaseInOut => bezier_ease(t, 0.42, 0.0, 0.58, 1.0),
            Easing::Bezier { x1, y1, x2, y2 } => bezier_ease(t, x1, y1, x2, y2),
        }
    }
}

#[inline]
fn cubic_bezier(p1: f64, p2: f64, t: f64) -> f64 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}

/// Invert x(t) by bisection, then evaluate y. Assumes x1, x2 in `[0, 1]`.
fn bezier_ease(t: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    if x1 == y1 && x2 == y2 {
        return t;
    }
    let mut lo = 0.0;
    let mut hi = 1.0;
    let mut mid = t;
    for _ in 0..40 {
        let x = cubic_bezier(x1, x2, mid);
        if (x - t).abs() < 1e-9 {
            break;
        }
        if x < t {
            lo = mid;
        } else {
            hi = mid;
        }
        mid = 0.5 * (lo + hi);
    }
    cubic_bezier(y1, y2, mid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        for easing in [
            Easing::Linear,
            Easing::Quad,
            Easing::Cubic,
            Easing::EaseInOut,
            Easing::Bezier { x1: 0.25, y1: 0.1, x2: 0.25, y2: 1.0 },
        ] {
            assert!(easing.apply(0.0).abs() < 1e-6, "{easing:?}");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?}");
        }
    }

    #[test]
    fn ease_in_out_is_symmetric_and_monotonic() {
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-6);
        let mut last = 0.0;
        for i in 1..=20 {
            let y = Easing::EaseInOut.apply(i as f64 / 20.0);
            assert!(y > last);
            last = y;
        }
    }

    #[test]
    fn serde_names() {
        let e: Easing = serde_json::from_str(r#""Linear""#).unwrap();
        assert_eq!(e, Easing::Linear);
        let b: Easing =
            serde_json::from_str(r#"{"Bezier": {"x1": 0.1, "y1": 0.2, "x2": 0.3, "y2": 0.4}}"#).unwrap();
        assert_eq!(b, Easing::Bezier { x1: 0.1, y1: 0.2, x2: 0.3, y2: 0.4 });
    }
}
