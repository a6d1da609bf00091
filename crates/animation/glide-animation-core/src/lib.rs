//! Glide Animation Core
//!
//! Normalizes heterogeneous animated values (numbers, unit strings such as
//! `"10px"`, and colors) into a single numeric stepping protocol and back.
//! Base curves only ever see numbers; [`decorate_animation`] picks the value
//! shape once at start and converts on the way in and out, and
//! [`define_animation`] decides in which execution context an animation is
//! built.

pub mod animation;
pub mod cancel;
pub mod color;
pub mod config;
pub mod curves;
pub mod decorate;
pub mod error;
pub mod factory;
pub mod higher_order;
pub mod recognize;
pub mod transform;
pub mod value;

// Re-exports for schedulers and shared-value containers
pub use animation::{
    Animation, AnimationCallback, ChannelSnapshot, Curve, Frame, Handoff, HigherOrder, Timestamp,
};
pub use cancel::{cancel_animation, SharedValue};
pub use color::{from_hsva, is_color, to_hsva};
pub use config::{SpringConfig, TimingConfig};
pub use curves::{with_spring, with_timing, Easing, Spring, Timing};
pub use decorate::decorate_animation;
pub use error::{AnimationError, Result};
pub use factory::{
    define_animation, initial_updater_run, AnimationSpec, DeferredAnimation, ExecContext,
};
pub use higher_order::{with_delay, with_sequence, with_start_value, Delay, Sequence, StartFrom};
pub use recognize::{recognize_prefix_suffix, Recognized};
pub use transform::{format_number, render_back};
pub use value::{Value, ValueShape};
