//! Fixed-interval frame clock.

use glide_animation_core::{AnimationError, Result, Timestamp, Value};
use serde::{Deserialize, Serialize};

use crate::mutable::Mutable;

/// Frame loop settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameLoopConfig {
    pub frame_interval_ms: f64,
    /// Upper bound for [`FrameLoop::drive`], so a never-settling animation
    /// cannot spin forever.
    pub max_frames: usize,
}

impl Default for FrameLoopConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 1000.0 / 60.0,
            max_frames: 600,
        }
    }
}

impl FrameLoopConfig {
    pub fn from_json(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.frame_interval_ms > 0.0) {
            return Err(AnimationError::InvalidConfig {
                reason: format!(
                    "frame_interval_ms must be > 0, got {}",
                    self.frame_interval_ms
                ),
            });
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct FrameLoop {
    config: FrameLoopConfig,
    now: Timestamp,
}

impl FrameLoop {
    pub fn new(config: FrameLoopConfig) -> Self {
        Self { config, now: 0.0 }
    }

    pub fn config(&self) -> &FrameLoopConfig {
        &self.config
    }

    #[inline]
    pub fn now(&self) -> Timestamp {
        self.now
    }

    /// Move the clock forward one frame and return the new time.
    pub fn advance(&mut self) -> Timestamp {
        self.now += self.config.frame_interval_ms;
        self.now
    }

    /// Step `shared` until its animation finishes (or `max_frames` elapse),
    /// returning the value observed after every frame.
    pub fn drive(&mut self, shared: &mut Mutable) -> Vec<Value> {
        let mut frames = Vec::new();
        while shared.is_animating() && frames.len() < self.config.max_frames {
            let now = self.advance();
            shared.tick(now);
            frames.push(shared.get().clone());
        }
        if shared.is_animating() {
            log::warn!(
                "animation still running after {} frames",
                self.config.max_frames
            );
        }
        frames
    }
}
