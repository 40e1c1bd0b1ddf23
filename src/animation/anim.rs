use crate::animation::ease::Ease;
use crate::animation::interp::{DEFAULT_FADE_FRAMES, clamped_interpolate};
use crate::animation::spring::{SpringConfig, spring_progress};
use crate::foundation::core::{Fps, FrameIndex, FrameRange};
use crate::foundation::error::{ReelError, ReelResult};
use crate::foundation::math::{finite_or, lerp};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// How an [`AnimationSpec`] moves from its start value to its end value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    /// Normalized curve over `[delay, delay + duration]`.
    Curve(Ease),
    /// Physics-based progress from `delay`; ignores `duration`.
    Spring(SpringConfig),
}

impl Easing {
    /// Plain linear interpolation.
    pub const LINEAR: Self = Self::Curve(Ease::Linear);
}

impl Default for Easing {
    fn default() -> Self {
        Self::LINEAR
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum EasingRepr {
    Curve(Ease),
    Spring { spring: SpringConfig },
}

impl Serialize for Easing {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match *self {
            Self::Curve(ease) => EasingRepr::Curve(ease),
            Self::Spring(spring) => EasingRepr::Spring { spring },
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Easing {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match EasingRepr::deserialize(deserializer)? {
            EasingRepr::Curve(ease) => Self::Curve(ease),
            EasingRepr::Spring { spring } => Self::Spring(spring),
        })
    }
}

/// One animated property: a value moving from `start_value` to `end_value`.
///
/// Sampling is a pure function of the frame; an `AnimationSpec` holds no state between evaluations.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSpec {
    /// Onset in frames.
    pub delay: u64,
    /// Length of curve-eased animations in frames. Zero means already complete.
    pub duration: u64,
    /// Value at and before the onset.
    pub start_value: f64,
    /// Settled value.
    pub end_value: f64,
    /// Progress shape.
    pub easing: Easing,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self {
            delay: 0,
            duration: DEFAULT_FADE_FRAMES,
            start_value: 0.0,
            end_value: 1.0,
            easing: Easing::LINEAR,
        }
    }
}

impl AnimationSpec {
    /// Linear animation over `[delay, delay + duration]`.
    pub fn linear(delay: u64, duration: u64, start_value: f64, end_value: f64) -> Self {
        Self {
            delay,
            duration,
            start_value,
            end_value,
            easing: Easing::LINEAR,
        }
    }

    /// Spring animation starting at `delay`.
    pub fn spring(delay: u64, start_value: f64, end_value: f64, config: SpringConfig) -> Self {
        Self {
            delay,
            start_value,
            end_value,
            easing: Easing::Spring(config),
            ..Self::default()
        }
    }

    /// Replace the easing.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Reject non-finite endpoints and non-physical springs.
    pub fn validate(&self) -> ReelResult<()> {
        if !self.start_value.is_finite() || !self.end_value.is_finite() {
            return Err(ReelError::validation(
                "animation start_value/end_value must be finite",
            ));
        }
        if let Easing::Spring(cfg) = self.easing
            && !cfg.is_valid()
        {
            return Err(ReelError::validation(format!(
                "spring needs finite damping >= 0, stiffness > 0 and mass > 0, got {cfg:?}"
            )));
        }
        Ok(())
    }

    /// Normalized progress at `frame` (may exceed 1 for under-damped springs).
    pub fn progress(&self, frame: FrameIndex, fps: Fps) -> f64 {
        match self.easing {
            Easing::Curve(ease) => ease.apply(clamped_interpolate(
                frame.elapsed_since(self.delay) as f64,
                [0.0, self.duration as f64],
                [0.0, 1.0],
            )),
            Easing::Spring(cfg) => spring_progress(frame, self.delay, fps, cfg),
        }
    }

    /// Property value at `frame`.
    pub fn sample(&self, frame: FrameIndex, fps: Fps) -> f64 {
        let p = self.progress(frame, fps);
        if p == 0.0 {
            return self.start_value;
        }
        if p == 1.0 {
            return self.end_value;
        }
        finite_or(lerp(self.start_value, self.end_value, p), self.end_value)
    }

    /// Sample every frame of `range`, in frame order.
    #[tracing::instrument(skip(self))]
    pub fn bake(&self, range: FrameRange, fps: Fps) -> Vec<f64> {
        (range.start.0..range.end.0)
            .into_par_iter()
            .map(|f| self.sample(FrameIndex(f), fps))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
