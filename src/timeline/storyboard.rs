use super::series::{SceneSpec, SceneTimeline, TransitionSpec};
use crate::foundation::core::Fps;
use crate::foundation::error::{ReelError, ReelResult};
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Transition styles a storyboard may request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionKind {
    /// Linear opacity crossfade.
    #[default]
    Fade,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
struct TransitionDef {
    kind: TransitionKind,
    duration: u64,
    fade_exiting: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct StoryboardDef {
    fps: Fps,
    #[serde(default)]
    transition: TransitionDef,
    scenes: Vec<SceneSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    duration: Option<u64>,
}

/// JSON boundary object for a whole video: frame rate, scenes and transition timing.
///
/// Parsing only checks shape. Call [`Storyboard::validate`] (or [`Storyboard::timeline`],
/// which validates first) before trusting the values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Storyboard {
    def: StoryboardDef,
}

impl Storyboard {
    /// Parse a storyboard from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ReelResult<Self> {
        let def: StoryboardDef = serde_json::from_reader(r)
            .map_err(|e| ReelError::serde(format!("parse storyboard JSON: {e}")))?;
        Ok(Self { def })
    }

    /// Parse a storyboard from a JSON string.
    pub fn from_json_str(s: &str) -> ReelResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse a storyboard from a JSON file on disk.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ReelError::config(format!("open storyboard JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize back to pretty JSON.
    pub fn to_json_string(&self) -> ReelResult<String> {
        serde_json::to_string_pretty(&self.def)
            .map_err(|e| ReelError::serde(format!("serialize storyboard JSON: {e}")))
    }

    /// Check frame rate, scene ids, transition fit and the declared total duration.
    #[tracing::instrument(skip(self), fields(scenes = self.def.scenes.len()))]
    pub fn validate(&self) -> ReelResult<()> {
        self.compile().map(|_| ())
    }

    /// Validate and build the scene timeline.
    pub fn timeline(&self) -> ReelResult<SceneTimeline> {
        self.compile()
    }

    /// Declared frame rate (unvalidated).
    pub fn fps(&self) -> Fps {
        self.def.fps
    }

    /// Declared total duration in frames, when present.
    pub fn declared_duration(&self) -> Option<u64> {
        self.def.duration
    }

    /// Scenes in sequence order.
    pub fn scenes(&self) -> &[SceneSpec] {
        &self.def.scenes
    }

    /// Transition kind requested between scenes.
    pub fn transition_kind(&self) -> TransitionKind {
        self.def.transition.kind
    }

    fn compile(&self) -> ReelResult<SceneTimeline> {
        let def = &self.def;
        Fps::new(def.fps.num, def.fps.den)?;

        let mut seen = HashSet::new();
        for scene in &def.scenes {
            if scene.id.trim().is_empty() {
                return Err(ReelError::validation("scene ids must be non-empty"));
            }
            if !seen.insert(scene.id.as_str()) {
                return Err(ReelError::validation(format!(
                    "duplicate scene id '{}'",
                    scene.id
                )));
            }
        }

        let transition = match def.transition.kind {
            TransitionKind::Fade => TransitionSpec {
                duration: def.transition.duration,
                fade_exiting: def.transition.fade_exiting,
            },
        };
        let timeline = SceneTimeline::new(def.scenes.clone(), transition)?;

        if let Some(declared) = def.duration
            && declared != timeline.total_frames()
        {
            return Err(ReelError::validation(format!(
                "declared duration {declared} does not match computed total {}",
                timeline.total_frames()
            )));
        }
        tracing::debug!(total = timeline.total_frames(), "storyboard compiled");
        Ok(timeline)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/storyboard.rs"]
mod tests;
