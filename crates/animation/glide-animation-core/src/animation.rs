//! The animation record and the protocol base curves and higher-order
//! animations implement.
//!
//! A scheduler drives every [`Animation`] the same way: `on_start` once with
//! the value being animated, the current timestamp and an optional [`Handoff`]
//! from the animation it replaces, then `on_frame` every frame until it
//! returns `true`.

use std::fmt;

use crate::decorate::Decorated;
use crate::value::{Value, ValueShape};

/// Milliseconds on the scheduler's clock.
pub type Timestamp = f64;

/// Completion notifier; receives `true` when the animation ran to the end and
/// `false` when it was cancelled or superseded.
pub type AnimationCallback = Box<dyn FnOnce(bool) + Send>;

/// Normalized numeric state a base curve steps.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Frame {
    pub current: f64,
    pub to_value: Option<f64>,
    pub start_value: Option<f64>,
}

/// Continuity information for one numeric channel of a superseded animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChannelSnapshot {
    pub current: f64,
    pub to_value: Option<f64>,
    /// Units per second.
    pub velocity: f64,
}

/// Immutable snapshot taken by consuming the animation being replaced.
///
/// Taking a handoff ends the previous animation; nothing is written back into
/// it, so there is nothing to re-normalize afterwards.
#[derive(Clone, Debug, PartialEq)]
pub enum Handoff {
    /// Number and unit-string animations share one numeric channel.
    Scalar {
        shape: ValueShape,
        channel: ChannelSnapshot,
    },
    /// Hue, saturation, value and alpha channels.
    Color { channels: [ChannelSnapshot; 4] },
}

impl Handoff {
    pub fn shape(&self) -> ValueShape {
        match self {
            Handoff::Scalar { shape, .. } => shape.clone(),
            Handoff::Color { .. } => ValueShape::Color,
        }
    }

    /// Snapshot for a scalar successor; colors have no single channel.
    pub fn scalar(&self) -> Option<&ChannelSnapshot> {
        match self {
            Handoff::Scalar { channel, .. } => Some(channel),
            Handoff::Color { .. } => None,
        }
    }

    /// Snapshot for color channel `index`; scalars carry no color channels.
    pub fn color_channel(&self, index: usize) -> Option<&ChannelSnapshot> {
        match self {
            Handoff::Color { channels } => channels.get(index),
            Handoff::Scalar { .. } => None,
        }
    }
}

/// Base animation over a single number (timing, spring, decay, ...).
pub trait Curve: fmt::Debug + Send {
    /// Begin animating from `value`. `previous` is the matching channel of the
    /// animation being replaced, when there is one.
    fn on_start(
        &mut self,
        frame: &mut Frame,
        value: f64,
        now: Timestamp,
        previous: Option<&ChannelSnapshot>,
    );

    /// Advance to `now`; returns `true` once finished.
    fn on_frame(&mut self, frame: &mut Frame, now: Timestamp) -> bool;

    /// Instantaneous velocity in units per second, used for continuity.
    fn velocity(&self) -> f64 {
        0.0
    }

    fn box_clone(&self) -> Box<dyn Curve>;
}

impl Clone for Box<dyn Curve> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}

/// Animation that sequences other animations (delay, sequence, repeat).
///
/// Higher-order animations are never decorated: each child is decorated on
/// its own when it is built.
pub trait HigherOrder: fmt::Debug + Send {
    fn on_start(
        &mut self,
        current: &mut Option<Value>,
        value: &Value,
        now: Timestamp,
        previous: Option<Handoff>,
    );

    fn on_frame(&mut self, current: &mut Option<Value>, now: Timestamp) -> bool;

    /// Continuity of whichever child is active.
    fn into_handoff(self: Box<Self>) -> Option<Handoff>;

    /// Shape of the active child, if it has started.
    fn shape(&self) -> Option<ValueShape> {
        None
    }
}

pub(crate) enum Driver {
    /// Base curve as built, before decoration.
    Raw(Box<dyn Curve>),
    Decorated(Decorated),
    HigherOrder(Box<dyn HigherOrder>),
}

/// A single animation instance.
///
/// `current`, `to_value` and `start_value` are always in their external shape
/// when read from outside `on_start`/`on_frame`.
pub struct Animation {
    pub current: Option<Value>,
    pub to_value: Option<Value>,
    pub start_value: Option<Value>,
    callback: Option<AnimationCallback>,
    pub(crate) driver: Driver,
}

impl fmt::Debug for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let driver = match &self.driver {
            Driver::Raw(_) => "raw",
            Driver::Decorated(_) => "decorated",
            Driver::HigherOrder(_) => "higher-order",
        };
        f.debug_struct("Animation")
            .field("current", &self.current)
            .field("to_value", &self.to_value)
            .field("start_value", &self.start_value)
            .field("has_callback", &self.callback.is_some())
            .field("driver", &driver)
            .finish()
    }
}

impl Animation {
    /// Undecorated animation stepping `curve` towards `to_value`.
    pub fn new(curve: impl Curve + 'static, to_value: Option<Value>) -> Self {
        Self {
            current: to_value.clone(),
            to_value,
            start_value: None,
            callback: None,
            driver: Driver::Raw(Box::new(curve)),
        }
    }

    pub fn higher_order(inner: impl HigherOrder + 'static) -> Self {
        Self {
            current: None,
            to_value: None,
            start_value: None,
            callback: None,
            driver: Driver::HigherOrder(Box::new(inner)),
        }
    }

    pub fn with_callback(mut self, callback: impl FnOnce(bool) + Send + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    #[inline]
    pub fn is_higher_order(&self) -> bool {
        matches!(self.driver, Driver::HigherOrder(_))
    }

    #[inline]
    pub fn is_decorated(&self) -> bool {
        matches!(self.driver, Driver::Decorated(_))
    }

    /// Shape committed to at the first start; `None` before that.
    pub fn shape(&self) -> Option<ValueShape> {
        match &self.driver {
            Driver::Raw(_) => None,
            Driver::Decorated(d) => d.shape(),
            Driver::HigherOrder(h) => h.shape(),
        }
    }

    /// Begin animating from `value`.
    pub fn on_start(&mut self, value: &Value, now: Timestamp, previous: Option<Handoff>) {
        match &mut self.driver {
            Driver::Raw(curve) => {
                let n = value.as_number().unwrap_or_else(|| {
                    log::warn!("undecorated animation started from non-numeric {value:?}");
                    f64::NAN
                });
                let mut frame = Frame {
                    current: self.current.as_ref().and_then(Value::as_number).unwrap_or(n),
                    to_value: self.to_value.as_ref().and_then(Value::as_number),
                    start_value: None,
                };
                let snapshot = previous.as_ref().and_then(Handoff::scalar);
                curve.on_start(&mut frame, n, now, snapshot);
                self.current = Some(Value::Number(frame.current));
                self.start_value = frame.start_value.map(Value::Number);
            }
            Driver::Decorated(d) => d.on_start(
                &mut self.current,
                &mut self.to_value,
                &mut self.start_value,
                value,
                now,
                previous,
            ),
            Driver::HigherOrder(h) => h.on_start(&mut self.current, value, now, previous),
        }
    }

    /// Advance to `now`; returns `true` once finished.
    pub fn on_frame(&mut self, now: Timestamp) -> bool {
        match &mut self.driver {
            Driver::Raw(curve) => {
                let mut frame = Frame {
                    current: self
                        .current
                        .as_ref()
                        .and_then(Value::as_number)
                        .unwrap_or(f64::NAN),
                    to_value: self.to_value.as_ref().and_then(Value::as_number),
                    start_value: self.start_value.as_ref().and_then(Value::as_number),
                };
                let finished = curve.on_frame(&mut frame, now);
                self.current = Some(Value::Number(frame.current));
                finished
            }
            Driver::Decorated(d) => d.on_frame(
                &mut self.current,
                &mut self.to_value,
                &mut self.start_value,
                now,
            ),
            Driver::HigherOrder(h) => h.on_frame(&mut self.current, now),
        }
    }

    /// Fire the completion callback; it runs at most once.
    pub fn finish(&mut self, finished: bool) {
        if let Some(callback) = self.callback.take() {
            callback(finished);
        }
    }

    /// Consume this animation into the continuity snapshot its successor reads.
    ///
    /// The completion callback is dropped without firing; schedulers call
    /// [`Animation::finish`] first when the callback should observe the cut.
    pub fn into_handoff(self) -> Option<Handoff> {
        match self.driver {
            Driver::Raw(curve) => {
                let current = self.current.as_ref().and_then(Value::as_number)?;
                Some(Handoff::Scalar {
                    shape: ValueShape::Number,
                    channel: ChannelSnapshot {
                        current,
                        to_value: self.to_value.as_ref().and_then(Value::as_number),
                        velocity: curve.velocity(),
                    },
                })
            }
            Driver::Decorated(d) => d.into_handoff(),
            Driver::HigherOrder(h) => h.into_handoff(),
        }
    }
}
