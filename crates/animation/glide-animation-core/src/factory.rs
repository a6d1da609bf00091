//! Building animations in the right execution context.
//!
//! An animation must be decorated on the side that will step it. Callers on
//! the real-time side (or without a native stepping backend) get a ready
//! animation; callers on the controlling side get a [`DeferredAnimation`] that
//! the real-time side resolves later. Style updaters get the starting value
//! back untouched.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::animation::Animation;
use crate::decorate::decorate_animation;
use crate::error::{AnimationError, Result};
use crate::value::Value;

/// Where the factory is being called from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ExecContext {
    /// Inside one synchronous style-recomputation pass.
    StyleUpdater,
    /// Inside the per-frame stepping context.
    RealTime,
    /// On the controlling side; with a native backend, animations are handed
    /// over to the real-time side before being built.
    Controller { native_backend: bool },
}

impl ExecContext {
    /// Whether animations built here should be constructed immediately.
    #[inline]
    pub fn builds_eagerly(self) -> bool {
        match self {
            ExecContext::RealTime => true,
            ExecContext::Controller { native_backend } => !native_backend,
            ExecContext::StyleUpdater => false,
        }
    }
}

type Builder = Box<dyn FnOnce() -> Result<Animation> + Send>;

/// Construction postponed until the real-time side resolves it.
pub struct DeferredAnimation {
    build: Builder,
}

impl fmt::Debug for DeferredAnimation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredAnimation").finish_non_exhaustive()
    }
}

impl DeferredAnimation {
    /// Build and decorate the animation in the calling context.
    pub fn resolve(self) -> Result<Animation> {
        let animation = (self.build)()?;
        Ok(decorate_animation(animation))
    }
}

/// What [`define_animation`] hands back.
#[derive(Debug)]
pub enum AnimationSpec {
    /// Called during a style update: the starting value, unchanged.
    Value(Value),
    /// Built and decorated.
    Ready(Animation),
    /// To be resolved by the side that steps it.
    Deferred(DeferredAnimation),
}

impl AnimationSpec {
    /// Turn a ready or deferred spec into an animation.
    pub fn resolve(self) -> Result<Animation> {
        match self {
            AnimationSpec::Ready(animation) => Ok(animation),
            AnimationSpec::Deferred(deferred) => deferred.resolve(),
            AnimationSpec::Value(value) => Err(AnimationError::NotAnimation { value }),
        }
    }

    #[inline]
    pub fn is_deferred(&self) -> bool {
        matches!(self, AnimationSpec::Deferred(_))
    }
}

/// Define an animation whose builder runs now or later depending on `ctx`.
///
/// Builder errors surface from whichever call runs the builder: this one for
/// eager contexts, [`DeferredAnimation::resolve`] otherwise.
pub fn define_animation<F>(ctx: ExecContext, starting: Value, build: F) -> Result<AnimationSpec>
where
    F: FnOnce() -> Result<Animation> + Send + 'static,
{
    if ctx == ExecContext::StyleUpdater {
        return Ok(AnimationSpec::Value(starting));
    }
    build_in_context(ctx, build)
}

/// Eager-or-deferred split shared with animations that wrap other specs.
pub(crate) fn build_in_context<F>(ctx: ExecContext, build: F) -> Result<AnimationSpec>
where
    F: FnOnce() -> Result<Animation> + Send + 'static,
{
    let deferred = DeferredAnimation {
        build: Box::new(build),
    };
    if ctx.builds_eagerly() {
        log::debug!("building animation eagerly in {ctx:?}");
        deferred.resolve().map(AnimationSpec::Ready)
    } else {
        log::debug!("deferring animation construction to the real-time side");
        Ok(AnimationSpec::Deferred(deferred))
    }
}

/// Run a style updater with the style-update context in scope.
///
/// Animations defined through the provided context resolve to their starting
/// values, so the first pass yields plain styles.
pub fn initial_updater_run<R>(updater: impl FnOnce(ExecContext) -> R) -> R {
    updater(ExecContext::StyleUpdater)
}
