use crate::animation::{Animation, AnimationCallback, ChannelSnapshot, Curve, Frame, Timestamp};
use crate::config::TimingConfig;
use crate::error::Result;
use crate::factory::{define_animation, AnimationSpec, ExecContext};
use crate::value::Value;

/// Duration-based curve from the start value to `to_value`.
#[derive(Clone, Debug)]
pub struct Timing {
    config: TimingConfig,
    start_time: Timestamp,
    start_value: f64,
    last: Option<(Timestamp, f64)>,
    velocity: f64,
}

impl Timing {
    pub fn new(config: TimingConfig) -> Self {
        Self {
            config,
            start_time: 0.0,
            start_value: 0.0,
            last: None,
            velocity: 0.0,
        }
    }

    fn track_velocity(&mut self, now: Timestamp, current: f64) {
        if let Some((t, v)) = self.last {
            let dt = now - t;
            if dt > 0.0 {
                self.velocity = (current - v) / dt * 1000.0;
            }
        }
        self.last = Some((now, current));
    }
}

impl Curve for Timing {
    fn on_start(
        &mut self,
        frame: &mut Frame,
        value: f64,
        now: Timestamp,
        _previous: Option<&ChannelSnapshot>,
    ) {
        self.start_time = now;
        self.start_value = value;
        self.last = Some((now, value));
        self.velocity = 0.0;
        frame.current = value;
        frame.start_value = Some(value);
    }

    fn on_frame(&mut self, frame: &mut Frame, now: Timestamp) -> bool {
        let Some(target) = frame.to_value else {
            return true;
        };
        let elapsed = now - self.start_time;
        let finished = elapsed >= self.config.duration_ms;
        frame.current = if finished {
            target
        } else {
            let progress = self.config.easing.apply(elapsed / self.config.duration_ms);
            self.start_value + (target - self.start_value) * progress
        };
        self.track_velocity(now, frame.current);
        finished
    }

    fn velocity(&self) -> f64 {
        self.velocity
    }

    fn box_clone(&self) -> Box<dyn Curve> {
        Box::new(self.clone())
    }
}

/// Animate towards `to_value` over `config.duration_ms`.
pub fn with_timing(
    ctx: ExecContext,
    to_value: impl Into<Value>,
    config: TimingConfig,
    callback: Option<AnimationCallback>,
) -> Result<AnimationSpec> {
    config.validate()?;
    let to_value = to_value.into();
    define_animation(ctx, to_value.clone(), move || {
        let animation = Animation::new(Timing::new(config), Some(to_value));
        Ok(match callback {
            Some(cb) => animation.with_callback(cb),
            None => animation,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::Easing;

    fn linear(duration_ms: f64) -> Timing {
        Timing::new(TimingConfig {
            duration_ms,
            easing: Easing::Linear,
        })
    }

    #[test]
    fn reaches_target_at_duration() {
        let mut timing = linear(100.0);
        let mut frame = Frame {
            to_value: Some(10.0),
            ..Default::default()
        };
        timing.on_start(&mut frame, 0.0, 1000.0, None);
        assert!(!timing.on_frame(&mut frame, 1050.0));
        assert!((frame.current - 5.0).abs() < 1e-9);
        assert!((timing.velocity() - 100.0).abs() < 1e-9);
        assert!(timing.on_frame(&mut frame, 1100.0));
        assert_eq!(frame.current, 10.0);
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let mut timing = linear(0.0);
        let mut frame = Frame {
            to_value: Some(3.0),
            ..Default::default()
        };
        timing.on_start(&mut frame, 1.0, 0.0, None);
        assert!(timing.on_frame(&mut frame, 0.0));
        assert_eq!(frame.current, 3.0);
    }

    #[test]
    fn without_target_finishes_in_place() {
        let mut timing = linear(100.0);
        let mut frame = Frame::default();
        timing.on_start(&mut frame, 4.0, 0.0, None);
        assert!(timing.on_frame(&mut frame, 16.0));
        assert_eq!(frame.current, 4.0);
    }
}
