//! Decoration: wrapping a base curve so one numeric protocol can animate
//! numbers, unit strings and colors.
//!
//! The shape is picked from the first value an animation starts from and then
//! stays fixed for the life of that animation:
//!
//! - colors are split into HSVA channels, each stepped by its own copy of the
//!   base curve, and recomposed every frame;
//! - other strings are split into prefix, number and suffix, the number is
//!   stepped and the string rebuilt every frame;
//! - numbers go straight to the base curve.

use std::array;

use crate::animation::{Animation, ChannelSnapshot, Curve, Driver, Frame, Handoff, Timestamp};
use crate::color::{from_hsva, to_hsva, CHANNELS};
use crate::recognize::recognize_prefix_suffix;
use crate::transform::render_back;
use crate::value::{Value, ValueShape};

/// Wrap `animation` with shape dispatch.
///
/// Higher-order and already decorated animations are returned unchanged.
pub fn decorate_animation(mut animation: Animation) -> Animation {
    animation.driver = match animation.driver {
        Driver::Raw(base) => {
            // Pristine copy for color channels, taken before any stepping.
            let template = base.box_clone();
            Driver::Decorated(Decorated {
                base,
                template,
                frame: Frame::default(),
                stepper: None,
            })
        }
        other => other,
    };
    animation
}

#[derive(Debug)]
struct Channel {
    frame: Frame,
    curve: Box<dyn Curve>,
}

impl Channel {
    fn snapshot(&self) -> ChannelSnapshot {
        snapshot(&self.frame, self.curve.as_ref())
    }
}

#[derive(Debug)]
enum Stepper {
    Number,
    /// Always holds a [`ValueShape::Unit`].
    Unit(ValueShape),
    Color {
        channels: Box<[Channel; 4]>,
        /// Last string written to `current`; channel state is authoritative
        /// while `current` still holds it.
        rendered: Value,
    },
}

/// Decorated base curve plus the stepper chosen at start.
#[derive(Debug)]
pub(crate) struct Decorated {
    base: Box<dyn Curve>,
    template: Box<dyn Curve>,
    frame: Frame,
    stepper: Option<Stepper>,
}

fn snapshot(frame: &Frame, curve: &dyn Curve) -> ChannelSnapshot {
    ChannelSnapshot {
        current: frame.current,
        to_value: frame.to_value,
        velocity: curve.velocity(),
    }
}

impl Decorated {
    pub(crate) fn shape(&self) -> Option<ValueShape> {
        self.stepper.as_ref().map(|s| match s {
            Stepper::Number => ValueShape::Number,
            Stepper::Unit(shape) => shape.clone(),
            Stepper::Color { .. } => ValueShape::Color,
        })
    }

    pub(crate) fn on_start(
        &mut self,
        current: &mut Option<Value>,
        to_value: &mut Option<Value>,
        start_value: &mut Option<Value>,
        value: &Value,
        now: Timestamp,
        previous: Option<Handoff>,
    ) {
        if let Some(value_hsva) = to_hsva(value) {
            log::debug!("animation starting as color from {value:?}");
            self.color_on_start(current, to_value, value_hsva, now, previous.as_ref());
        } else if let Value::Text(_) = value {
            log::debug!("animation starting as unit string from {value:?}");
            self.unit_on_start(current, to_value, start_value, value, now, previous.as_ref());
        } else {
            self.number_on_start(current, to_value, start_value, value, now, previous.as_ref());
        }
    }

    fn color_on_start(
        &mut self,
        current: &mut Option<Value>,
        to_value: &Option<Value>,
        value_hsva: [f64; 4],
        now: Timestamp,
        previous: Option<&Handoff>,
    ) {
        let current_hsva = current.as_ref().and_then(to_hsva).unwrap_or(value_hsva);
        let target_hsva = to_value.as_ref().and_then(to_hsva);

        let channels: [Channel; 4] = array::from_fn(|i| {
            let mut channel = Channel {
                frame: Frame {
                    current: current_hsva[i],
                    to_value: target_hsva.map(|t| t[i]),
                    start_value: None,
                },
                curve: self.template.box_clone(),
            };
            let prev = previous.and_then(|p| p.color_channel(i));
            channel
                .curve
                .on_start(&mut channel.frame, value_hsva[i], now, prev);
            log::trace!("color channel {} started at {}", CHANNELS[i], channel.frame.current);
            channel
        });

        let rendered = recompose(&channels);
        *current = Some(rendered.clone());
        self.stepper = Some(Stepper::Color {
            channels: Box::new(channels),
            rendered,
        });
    }

    fn unit_on_start(
        &mut self,
        current: &mut Option<Value>,
        to_value: &mut Option<Value>,
        start_value: &mut Option<Value>,
        value: &Value,
        now: Timestamp,
        previous: Option<&Handoff>,
    ) {
        let recognized = recognize_prefix_suffix(value);
        let shape = ValueShape::Unit {
            prefix: recognized.prefix.unwrap_or_default(),
            suffix: recognized.suffix.unwrap_or_default(),
        };
        if recognized.stripped.is_nan() {
            log::warn!("no numeric payload in {value:?}, animating NaN");
        }

        self.frame = Frame {
            current: recognized.stripped,
            to_value: to_value
                .as_ref()
                .map(|t| recognize_prefix_suffix(t).stripped),
            start_value: Some(recognized.stripped),
        };
        let prev = previous.and_then(Handoff::scalar);
        self.base
            .on_start(&mut self.frame, recognized.stripped, now, prev);

        *current = render_back(self.frame.current, Some(value), &shape);
        *start_value = self
            .frame
            .start_value
            .and_then(|n| render_back(n, Some(value), &shape));
        let target = to_value.take();
        *to_value = match self.frame.to_value {
            Some(n) => render_back(n, target.as_ref(), &shape),
            None => target,
        };
        self.stepper = Some(Stepper::Unit(shape));
    }

    fn number_on_start(
        &mut self,
        current: &mut Option<Value>,
        to_value: &mut Option<Value>,
        start_value: &mut Option<Value>,
        value: &Value,
        now: Timestamp,
        previous: Option<&Handoff>,
    ) {
        let n = value.as_number().unwrap_or(f64::NAN);
        self.frame = Frame {
            current: current.as_ref().and_then(Value::as_number).unwrap_or(n),
            to_value: to_value.as_ref().and_then(Value::as_number),
            start_value: start_value.as_ref().and_then(Value::as_number),
        };
        let prev = previous.and_then(Handoff::scalar);
        self.base.on_start(&mut self.frame, n, now, prev);

        write_numbers(&self.frame, current, to_value, start_value);
        self.stepper = Some(Stepper::Number);
    }

    pub(crate) fn on_frame(
        &mut self,
        current: &mut Option<Value>,
        to_value: &mut Option<Value>,
        start_value: &mut Option<Value>,
        now: Timestamp,
    ) -> bool {
        match &mut self.stepper {
            None => {
                log::warn!("on_frame called before on_start; nothing to step");
                true
            }
            Some(Stepper::Number) => {
                // Numbers are stepped in place, so outside writes to `current` are honored.
                if let Some(n) = current.as_ref().and_then(Value::as_number) {
                    self.frame.current = n;
                }
                let finished = self.base.on_frame(&mut self.frame, now);
                write_numbers(&self.frame, current, to_value, start_value);
                finished
            }
            Some(Stepper::Unit(shape)) => {
                let finished = self.base.on_frame(&mut self.frame, now);
                let display = current.take().unwrap_or(Value::Number(self.frame.current));
                *current = render_back(self.frame.current, Some(&display), shape);
                if let Some(t) = self.frame.to_value {
                    *to_value = render_back(t, Some(&Value::Number(t)), shape);
                }
                log::trace!("unit frame at {now}: {current:?}");
                finished
            }
            Some(Stepper::Color { channels, rendered }) => {
                // Our own output is byte-rounded; only outside writes are decomposed.
                let written = current
                    .as_ref()
                    .filter(|c| **c != *rendered)
                    .and_then(to_hsva);
                let mut finished = true;
                for (i, channel) in channels.iter_mut().enumerate() {
                    if let Some(hsva) = written {
                        channel.frame.current = hsva[i];
                    }
                    finished &= channel.curve.on_frame(&mut channel.frame, now);
                }
                *rendered = recompose(channels);
                *current = Some(rendered.clone());
                log::trace!("color frame at {now}: {current:?}");
                finished
            }
        }
    }

    pub(crate) fn into_handoff(self) -> Option<Handoff> {
        match self.stepper? {
            Stepper::Number => Some(Handoff::Scalar {
                shape: ValueShape::Number,
                channel: snapshot(&self.frame, self.base.as_ref()),
            }),
            Stepper::Unit(shape) => Some(Handoff::Scalar {
                shape,
                channel: snapshot(&self.frame, self.base.as_ref()),
            }),
            Stepper::Color { channels, .. } => Some(Handoff::Color {
                channels: array::from_fn(|i| channels[i].snapshot()),
            }),
        }
    }
}

fn write_numbers(
    frame: &Frame,
    current: &mut Option<Value>,
    to_value: &mut Option<Value>,
    start_value: &mut Option<Value>,
) {
    *current = Some(Value::Number(frame.current));
    if let Some(t) = frame.to_value {
        *to_value = Some(Value::Number(t));
    }
    if let Some(s) = frame.start_value {
        *start_value = Some(Value::Number(s));
    }
}

fn recompose(channels: &[Channel; 4]) -> Value {
    from_hsva(array::from_fn(|i| channels[i].frame.current))
}
