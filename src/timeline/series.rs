use crate::animation::interp::clamped_interpolate;
use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{ReelError, ReelResult};
use smallvec::SmallVec;

/// One scene of a sequence.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SceneSpec {
    /// Stable identifier, unique within a storyboard.
    pub id: String,
    /// Length in frames, including the frames it shares with neighbouring transitions.
    pub duration: u64,
}

impl SceneSpec {
    /// Build a scene.
    pub fn new(id: impl Into<String>, duration: u64) -> Self {
        Self {
            id: id.into(),
            duration,
        }
    }
}

/// Linear fade applied between every pair of adjacent scenes.
///
/// Adjacent scenes overlap by `duration` frames. The entering scene fades in on top of the
/// exiting one, which stays opaque unless `fade_exiting` is set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TransitionSpec {
    /// Overlap in frames. Zero is a hard cut.
    pub duration: u64,
    /// Fade the exiting scene out while the entering one fades in.
    pub fade_exiting: bool,
}

impl TransitionSpec {
    /// Fade of `duration` frames over an opaque exiting scene.
    pub fn fade(duration: u64) -> Self {
        Self {
            duration,
            fade_exiting: false,
        }
    }
}

/// A scene placed on the global timeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduledScene {
    /// Scene identifier.
    pub id: String,
    /// Global frames covered by the scene.
    pub range: FrameRange,
}

/// A scene visible at some global frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveScene<'a> {
    /// Position in the sequence.
    pub index: usize,
    /// Scene identifier.
    pub id: &'a str,
    /// Frame relative to the scene's own start.
    pub local_frame: FrameIndex,
    /// Composite opacity in `[0, 1]`.
    pub opacity: f64,
}

/// Scenes in paint order (exiting below entering).
pub type ActiveScenes<'a> = SmallVec<[ActiveScene<'a>; 2]>;

/// Immutable schedule of scenes joined by overlapping transitions.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneTimeline {
    scenes: Vec<ScheduledScene>,
    transition: TransitionSpec,
    total: u64,
}

impl SceneTimeline {
    /// Schedule `scenes` back to back, overlapping neighbours by the transition duration.
    pub fn new(scenes: Vec<SceneSpec>, transition: TransitionSpec) -> ReelResult<Self> {
        if scenes.is_empty() {
            return Err(ReelError::validation("timeline needs at least one scene"));
        }
        if let Some(s) = scenes.iter().find(|s| s.duration == 0) {
            return Err(ReelError::validation(format!(
                "scene '{}' must have a positive duration",
                s.id
            )));
        }
        let t = transition.duration;
        if let Some(pair) = scenes
            .windows(2)
            .find(|pair| t > pair[0].duration || t > pair[1].duration)
        {
            return Err(ReelError::validation(format!(
                "transition of {t} frames between '{}' ({}) and '{}' ({}) exceeds a scene duration",
                pair[0].id, pair[0].duration, pair[1].id, pair[1].duration
            )));
        }

        let mut start = 0u64;
        let mut scheduled = Vec::with_capacity(scenes.len());
        for (i, s) in scenes.into_iter().enumerate() {
            if i > 0 {
                start -= t;
            }
            let end = start
                .checked_add(s.duration)
                .ok_or_else(|| ReelError::validation("timeline length overflows u64"))?;
            scheduled.push(ScheduledScene {
                id: s.id,
                range: FrameRange::new(FrameIndex(start), FrameIndex(end))?,
            });
            start = end;
        }
        let total = start;

        Ok(Self {
            scenes: scheduled,
            transition,
            total,
        })
    }

    /// `sum(durations) - (n - 1) * transition`.
    pub fn total_frames(&self) -> u64 {
        self.total
    }

    /// Scheduled scenes in sequence order.
    pub fn scenes(&self) -> &[ScheduledScene] {
        &self.scenes
    }

    /// Transition shared by every adjacent pair.
    pub fn transition(&self) -> TransitionSpec {
        self.transition
    }

    /// Look up a scene by id.
    pub fn scene(&self, id: &str) -> Option<&ScheduledScene> {
        self.scenes.iter().find(|s| s.id == id)
    }

    /// Scenes visible at `frame`, exiting first. Empty past the end of the timeline.
    pub fn active_at(&self, frame: FrameIndex) -> ActiveScenes<'_> {
        let last = self.scenes.len() - 1;
        let t = self.transition.duration as f64;
        self.scenes
            .iter()
            .enumerate()
            .filter(|(_, s)| s.range.contains(frame))
            .map(|(index, s)| {
                let local = frame.0 - s.range.start.0;
                let len = s.range.len_frames();
                let mut opacity = 1.0;
                if index > 0 && local < self.transition.duration {
                    opacity *= clamped_interpolate(local as f64, [0.0, t], [0.0, 1.0]);
                }
                if self.transition.fade_exiting && index < last {
                    // Only scenes with a successor have an exit ramp; `new` bounds it by `len`.
                    let exit_start = len.saturating_sub(self.transition.duration);
                    if local >= exit_start {
                        let p =
                            clamped_interpolate((local - exit_start) as f64, [0.0, t], [0.0, 1.0]);
                        opacity *= 1.0 - p;
                    }
                }
                ActiveScene {
                    index,
                    id: s.id.as_str(),
                    local_frame: FrameIndex(local),
                    opacity,
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/series.rs"]
mod tests;
