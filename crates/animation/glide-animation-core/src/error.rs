//! Error types for animation construction and configuration.

use serde::{Deserialize, Serialize};

/// Errors surfaced synchronously to whichever side built or resolved an animation.
///
/// Stepping itself never fails: malformed unit strings degrade to NaN instead.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AnimationError {
    /// A plain value was supplied where an animation was expected
    #[error("Expected an animation, got a plain value: {value:?}")]
    NotAnimation { value: crate::value::Value },

    /// The animation builder failed
    #[error("Animation builder failed: {reason}")]
    Build { reason: String },

    /// A configuration value is out of range
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Configuration JSON could not be parsed
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },
}

impl AnimationError {
    pub fn build(reason: impl Into<String>) -> Self {
        Self::Build {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for AnimationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            reason: err.to_string(),
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, AnimationError>;
