use glide_animation_core::{Animation, AnimationSpec, Result, SharedValue, Timestamp, Value};

/// Shared value with at most one animation driving it.
#[derive(Debug)]
pub struct Mutable {
    value: Value,
    running: Option<Animation>,
}

impl Mutable {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            running: None,
        }
    }

    pub fn get(&self) -> &Value {
        &self.value
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.running.is_some()
    }

    /// The running animation, for inspection.
    pub fn animation(&self) -> Option<&Animation> {
        self.running.as_ref()
    }

    /// Assign a plain value or start an animation at `now`.
    ///
    /// Deferred specs are resolved here, on the stepping side. The animation
    /// being replaced is consumed into the handoff the new one starts from.
    /// If resolving fails, the running animation is left untouched.
    pub fn assign(&mut self, spec: AnimationSpec, now: Timestamp) -> Result<()> {
        let mut animation = match spec {
            AnimationSpec::Value(value) => {
                self.set_value(value);
                return Ok(());
            }
            spec => spec.resolve()?,
        };
        let previous = self.running.take().and_then(|mut prev| {
            prev.finish(false);
            prev.into_handoff()
        });
        animation.on_start(&self.value, now, previous);
        if let Some(current) = &animation.current {
            self.value = current.clone();
        }
        self.running = Some(animation);
        Ok(())
    }

    /// Step the running animation; returns `true` while it keeps running.
    pub fn tick(&mut self, now: Timestamp) -> bool {
        let Some(animation) = self.running.as_mut() else {
            return false;
        };
        let finished = animation.on_frame(now);
        if let Some(current) = &animation.current {
            self.value = current.clone();
        }
        if !finished {
            return true;
        }
        if let Some(mut done) = self.running.take() {
            log::trace!("animation finished at {now}");
            done.finish(true);
        }
        false
    }
}

impl SharedValue for Mutable {
    fn value(&self) -> Value {
        self.value.clone()
    }

    /// Any assignment interrupts the running animation.
    fn set_value(&mut self, value: Value) {
        if let Some(mut interrupted) = self.running.take() {
            log::debug!("assignment interrupted running animation at {:?}", self.value);
            interrupted.finish(false);
        }
        self.value = value;
    }
}
