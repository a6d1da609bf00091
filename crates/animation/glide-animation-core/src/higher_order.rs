//! Animations that schedule other animations.
//!
//! Their children are decorated when they are built; the wrappers themselves
//! only forward values and timestamps.

use std::collections::VecDeque;

use crate::animation::{Animation, Handoff, HigherOrder, Timestamp};
use crate::error::Result;
use crate::factory::{build_in_context, AnimationSpec, ExecContext};
use crate::value::{Value, ValueShape};

/// Holds the value for `delay_ms`, then runs the child.
#[derive(Debug)]
pub struct Delay {
    delay_ms: f64,
    child: Animation,
    start_time: Timestamp,
    started: bool,
    previous: Option<Handoff>,
}

impl Delay {
    pub fn new(delay_ms: f64, child: Animation) -> Self {
        Self {
            delay_ms,
            child,
            start_time: 0.0,
            started: false,
            previous: None,
        }
    }
}

impl HigherOrder for Delay {
    fn on_start(
        &mut self,
        current: &mut Option<Value>,
        value: &Value,
        now: Timestamp,
        previous: Option<Handoff>,
    ) {
        self.start_time = now;
        self.started = false;
        self.previous = previous;
        *current = Some(value.clone());
    }

    fn on_frame(&mut self, current: &mut Option<Value>, now: Timestamp) -> bool {
        if !self.started {
            if now - self.start_time < self.delay_ms {
                return false;
            }
            self.started = true;
            let from = current.clone().unwrap_or(Value::Number(0.0));
            self.child.on_start(&from, now, self.previous.take());
        }
        let finished = self.child.on_frame(now);
        *current = self.child.current.clone();
        if finished {
            self.child.finish(true);
        }
        finished
    }

    fn into_handoff(mut self: Box<Self>) -> Option<Handoff> {
        self.child.finish(false);
        if self.started {
            self.child.into_handoff()
        } else {
            self.previous.take()
        }
    }

    fn shape(&self) -> Option<ValueShape> {
        if self.started {
            self.child.shape()
        } else {
            None
        }
    }
}

/// Runs children one after another, each starting where the last one ended.
#[derive(Debug)]
pub struct Sequence {
    active: Option<Animation>,
    pending: VecDeque<Animation>,
}

impl Sequence {
    pub fn new(children: Vec<Animation>) -> Self {
        Self {
            active: None,
            pending: children.into(),
        }
    }
}

impl HigherOrder for Sequence {
    fn on_start(
        &mut self,
        current: &mut Option<Value>,
        value: &Value,
        now: Timestamp,
        previous: Option<Handoff>,
    ) {
        *current = Some(value.clone());
        self.active = self.pending.pop_front();
        if let Some(child) = self.active.as_mut() {
            child.on_start(value, now, previous);
            *current = child.current.clone();
        }
    }

    fn on_frame(&mut self, current: &mut Option<Value>, now: Timestamp) -> bool {
        let Some(child) = self.active.as_mut() else {
            return true;
        };
        let finished = child.on_frame(now);
        *current = child.current.clone();
        if !finished {
            return false;
        }

        let Some(mut done) = self.active.take() else {
            return true;
        };
        done.finish(true);
        let handoff = done.into_handoff();
        match self.pending.pop_front() {
            Some(mut next) => {
                let from = current.clone().unwrap_or(Value::Number(0.0));
                next.on_start(&from, now, handoff);
                *current = next.current.clone();
                self.active = Some(next);
                false
            }
            None => true,
        }
    }

    fn into_handoff(mut self: Box<Self>) -> Option<Handoff> {
        for child in self.pending.iter_mut() {
            child.finish(false);
        }
        let mut active = self.active.take()?;
        active.finish(false);
        active.into_handoff()
    }

    fn shape(&self) -> Option<ValueShape> {
        self.active.as_ref().and_then(Animation::shape)
    }
}

/// Starts the child from a fixed value instead of the animated one.
#[derive(Debug)]
pub struct StartFrom {
    start: Value,
    child: Animation,
}

impl StartFrom {
    pub fn new(start: Value, child: Animation) -> Self {
        Self { start, child }
    }
}

impl HigherOrder for StartFrom {
    fn on_start(
        &mut self,
        current: &mut Option<Value>,
        _value: &Value,
        now: Timestamp,
        previous: Option<Handoff>,
    ) {
        self.child.on_start(&self.start, now, previous);
        *current = self.child.current.clone();
    }

    fn on_frame(&mut self, current: &mut Option<Value>, now: Timestamp) -> bool {
        let finished = self.child.on_frame(now);
        *current = self.child.current.clone();
        if finished {
            self.child.finish(true);
        }
        finished
    }

    fn into_handoff(mut self: Box<Self>) -> Option<Handoff> {
        self.child.finish(false);
        self.child.into_handoff()
    }

    fn shape(&self) -> Option<ValueShape> {
        self.child.shape()
    }
}

/// Start `next` from `start` instead of whatever the shared value holds.
pub fn with_start_value(
    ctx: ExecContext,
    start: Value,
    next: AnimationSpec,
) -> Result<AnimationSpec> {
    if ctx == ExecContext::StyleUpdater {
        return Ok(AnimationSpec::Value(start));
    }
    build_in_context(ctx, move || {
        let child = next.resolve()?;
        Ok(Animation::higher_order(StartFrom::new(start, child)))
    })
}

/// Wait `delay_ms` before running `next`.
///
/// In a style update `next` is already the plain starting value and is
/// passed through.
pub fn with_delay(ctx: ExecContext, delay_ms: f64, next: AnimationSpec) -> Result<AnimationSpec> {
    if ctx == ExecContext::StyleUpdater {
        return Ok(next);
    }
    build_in_context(ctx, move || {
        let child = next.resolve()?;
        Ok(Animation::higher_order(Delay::new(delay_ms, child)))
    })
}

/// Run `items` back to back.
pub fn with_sequence(ctx: ExecContext, items: Vec<AnimationSpec>) -> Result<AnimationSpec> {
    if ctx == ExecContext::StyleUpdater {
        if let Some(first) = items.into_iter().next() {
            return Ok(first);
        }
        return Ok(AnimationSpec::Value(Value::Number(0.0)));
    }
    build_in_context(ctx, move || {
        let children = items
            .into_iter()
            .map(AnimationSpec::resolve)
            .collect::<Result<Vec<_>>>()?;
        Ok(Animation::higher_order(Sequence::new(children)))
    })
}
