use crate::animation::{Animation, AnimationCallback, ChannelSnapshot, Curve, Frame, Timestamp};
use crate::config::SpringConfig;
use crate::error::Result;
use crate::factory::{define_animation, AnimationSpec, ExecContext};
use crate::value::Value;

// Longest gap integrated in one frame; larger gaps (app paused) are clamped.
const MAX_FRAME_MS: f64 = 64.0;
const STEP_MS: f64 = 1.0;

/// Damped spring towards `to_value`, inheriting velocity from the animation
/// it replaces.
#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    start_value: f64,
    last_timestamp: Timestamp,
    velocity: f64,
}

impl Spring {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            config,
            start_value: 0.0,
            last_timestamp: 0.0,
            velocity: 0.0,
        }
    }

    fn at_rest(&self, position: f64, target: f64) -> bool {
        self.velocity.abs() < self.config.rest_speed_threshold
            && (position - target).abs() < self.config.rest_displacement_threshold
    }

    fn overshot(&self, position: f64, target: f64) -> bool {
        (self.start_value < target && position > target)
            || (self.start_value > target && position < target)
    }
}

impl Curve for Spring {
    fn on_start(
        &mut self,
        frame: &mut Frame,
        value: f64,
        now: Timestamp,
        previous: Option<&ChannelSnapshot>,
    ) {
        self.velocity = previous.map_or(0.0, |p| p.velocity);
        self.start_value = value;
        self.last_timestamp = now;
        frame.current = value;
        frame.start_value = Some(value);
    }

    fn on_frame(&mut self, frame: &mut Frame, now: Timestamp) -> bool {
        let Some(target) = frame.to_value else {
            return true;
        };
        let SpringConfig {
            damping,
            mass,
            stiffness,
            overshoot_clamping,
            ..
        } = self.config;

        let mut remaining = (now - self.last_timestamp).clamp(0.0, MAX_FRAME_MS);
        self.last_timestamp = now;

        let mut x = frame.current;
        while remaining > 0.0 {
            let dt = remaining.min(STEP_MS) / 1000.0;
            let accel = (-stiffness * (x - target) - damping * self.velocity) / mass;
            self.velocity += accel * dt;
            x += self.velocity * dt;
            remaining -= STEP_MS;
        }
        frame.current = x;

        if self.at_rest(x, target) || (overshoot_clamping && self.overshot(x, target)) {
            frame.current = target;
            self.velocity = 0.0;
            return true;
        }
        false
    }

    fn velocity(&self) -> f64 {
        self.velocity
    }

    fn box_clone(&self) -> Box<dyn Curve> {
        Box::new(self.clone())
    }
}

/// Spring towards `to_value`.
pub fn with_spring(
    ctx: ExecContext,
    to_value: impl Into<Value>,
    config: SpringConfig,
    callback: Option<AnimationCallback>,
) -> Result<AnimationSpec> {
    config.validate()?;
    let to_value = to_value.into();
    define_animation(ctx, to_value.clone(), move || {
        let animation = Animation::new(Spring::new(config), Some(to_value));
        Ok(match callback {
            Some(cb) => animation.with_callback(cb),
            None => animation,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(spring: &mut Spring, frame: &mut Frame, from: Timestamp, frames: usize) -> bool {
        for i in 1..=frames {
            if spring.on_frame(frame, from + i as f64 * 16.0) {
                return true;
            }
        }
        false
    }

    #[test]
    fn settles_on_target() {
        let mut spring = Spring::new(SpringConfig::default());
        let mut frame = Frame {
            to_value: Some(1.0),
            ..Default::default()
        };
        spring.on_start(&mut frame, 0.0, 0.0, None);
        assert!(run(&mut spring, &mut frame, 0.0, 600));
        assert_eq!(frame.current, 1.0);
    }

    #[test]
    fn inherits_previous_velocity() {
        let mut spring = Spring::new(SpringConfig::default());
        let mut frame = Frame {
            to_value: Some(0.0),
            ..Default::default()
        };
        let previous = ChannelSnapshot {
            current: 0.0,
            to_value: None,
            velocity: 50.0,
        };
        spring.on_start(&mut frame, 0.0, 0.0, Some(&previous));
        assert_eq!(spring.velocity(), 50.0);
        spring.on_frame(&mut frame, 16.0);
        assert!(frame.current > 0.0, "keeps moving the way it was going");
    }

    #[test]
    fn overshoot_clamping_stops_at_target() {
        let mut spring = Spring::new(SpringConfig {
            overshoot_clamping: true,
            damping: 1.0,
            ..Default::default()
        });
        let mut frame = Frame {
            to_value: Some(10.0),
            ..Default::default()
        };
        spring.on_start(&mut frame, 0.0, 0.0, None);
        assert!(run(&mut spring, &mut frame, 0.0, 200));
        assert_eq!(frame.current, 10.0);
    }
}
