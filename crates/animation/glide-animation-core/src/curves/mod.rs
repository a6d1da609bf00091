//! Reference base curves.
//!
//! Each curve steps one number through the [`Curve`](crate::animation::Curve)
//! protocol; decoration makes them usable for unit strings and colors.

mod easing;
mod spring;
mod timing;

pub use easing::Easing;
pub use spring::{with_spring, Spring};
pub use timing::{with_timing, Timing};
