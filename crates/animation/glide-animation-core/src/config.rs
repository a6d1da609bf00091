//! Configuration for the reference curves.

use serde::{Deserialize, Serialize};

use crate::curves::Easing;
use crate::error::{AnimationError, Result};

/// Duration-based animation settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            duration_ms: 300.0,
            easing: Easing::EaseInOut,
        }
    }
}

impl TimingConfig {
    pub fn from_json(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Zero duration is allowed and finishes on the first frame.
    pub fn validate(&self) -> Result<()> {
        if !(self.duration_ms >= 0.0) {
            return Err(AnimationError::InvalidConfig {
                reason: format!("duration_ms must be >= 0, got {}", self.duration_ms),
            });
        }
        Ok(())
    }
}

/// Physical spring settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub damping: f64,
    pub mass: f64,
    pub stiffness: f64,
    /// Stop at the target instead of bouncing past it.
    pub overshoot_clamping: bool,
    pub rest_displacement_threshold: f64,
    pub rest_speed_threshold: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: 10.0,
            mass: 1.0,
            stiffness: 100.0,
            overshoot_clamping: false,
            rest_displacement_threshold: 0.01,
            rest_speed_threshold: 2.0,
        }
    }
}

impl SpringConfig {
    pub fn from_json(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.mass > 0.0) {
            return Err(AnimationError::InvalidConfig {
                reason: format!("mass must be > 0, got {}", self.mass),
            });
        }
        if !(self.stiffness > 0.0) {
            return Err(AnimationError::InvalidConfig {
                reason: format!("stiffness must be > 0, got {}", self.stiffness),
            });
        }
        if !(self.damping >= 0.0) {
            return Err(AnimationError::InvalidConfig {
                reason: format!("damping must be >= 0, got {}", self.damping),
            });
        }
        Ok(())
    }
}
