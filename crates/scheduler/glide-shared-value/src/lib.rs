//! glide-shared-value
//!
//! A shared value that owns the animation driving it, and a fixed-interval
//! frame loop. Together they play the scheduler's part of the animation
//! protocol: start once with the value being replaced, step every frame,
//! notify completion, and treat every assignment as a cancellation.

pub mod frame_loop;
pub mod mutable;

pub use frame_loop::{FrameLoop, FrameLoopConfig};
pub use mutable::Mutable;
