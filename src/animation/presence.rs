//! Show/hide windows for popups and caption overlays.

use crate::animation::interp::{DEFAULT_FADE_FRAMES, clamped_interpolate, is_visible};
use crate::animation::motion::Alignment;
use crate::animation::spring::{SpringConfig, spring_progress};
use crate::foundation::core::{Fps, FrameIndex, Vec2};

/// Frame window in which an element is on screen, with symmetric entry/exit ramps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Presence {
    /// First visible frame.
    pub show_at: u64,
    /// Last visible frame; `None` keeps the element up until the scene ends.
    pub hide_at: Option<u64>,
    /// Length of the entry and exit ramps in frames.
    pub duration: u64,
}

impl Default for Presence {
    fn default() -> Self {
        Self {
            show_at: 0,
            hide_at: None,
            duration: DEFAULT_FADE_FRAMES,
        }
    }
}

impl Presence {
    /// Window starting at `show_at` with no end.
    pub fn from(show_at: u64) -> Self {
        Self {
            show_at,
            ..Self::default()
        }
    }

    /// Window `[show_at, hide_at]`.
    pub fn between(show_at: u64, hide_at: u64) -> Self {
        Self {
            show_at,
            hide_at: Some(hide_at),
            ..Self::default()
        }
    }

    /// Replace the ramp length.
    pub fn with_duration(mut self, duration: u64) -> Self {
        self.duration = duration;
        self
    }

    /// Whether `frame` lies inside the window (both ends inclusive).
    pub fn is_visible(&self, frame: FrameIndex) -> bool {
        is_visible(frame, Some(self.show_at), self.hide_at)
    }

    /// Entry ramp `0 -> 1` over `duration` frames from `show_at`.
    pub fn entry_progress(&self, frame: FrameIndex) -> f64 {
        clamped_interpolate(
            frame.elapsed_since(self.show_at) as f64,
            [0.0, self.duration as f64],
            [0.0, 1.0],
        )
    }

    /// Exit ramp `1 -> 0` ending at `hide_at`; 1 when the window has no end.
    pub fn exit_progress(&self, frame: FrameIndex) -> f64 {
        let Some(hide_at) = self.hide_at else {
            return 1.0;
        };
        let end = hide_at as f64;
        clamped_interpolate(
            frame.as_f64(),
            [end - self.duration as f64, end],
            [1.0, 0.0],
        )
    }

    /// Whether the exit ramp has started.
    pub fn is_exiting(&self, frame: FrameIndex) -> bool {
        self.hide_at
            .is_some_and(|h| frame.as_f64() > h as f64 - self.duration as f64)
    }

    /// Combined opacity of the entry and exit ramps.
    pub fn opacity(&self, frame: FrameIndex) -> f64 {
        self.entry_progress(frame) * self.exit_progress(frame)
    }
}

/// Resolved visual state of an animated element for one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ElementTransform {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Uniform scale factor.
    pub scale: f64,
    /// Translation in pixels.
    pub translate: Vec2,
}

impl Default for ElementTransform {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            scale: 1.0,
            translate: Vec2::ZERO,
        }
    }
}

/// Popup entrance style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PopupAnimation {
    /// Opacity only.
    Fade,
    /// Spring scale from 0.
    #[default]
    Scale,
    /// Rises from below.
    SlideUp,
    /// Drops from above.
    SlideDown,
    /// Comes in from the right, moving left.
    SlideLeft,
    /// Comes in from the left, moving right.
    SlideRight,
}

/// Slide distance of popup entrances in pixels.
pub const POPUP_SLIDE_DISTANCE: f64 = 50.0;

/// Popup state at `frame`, or `None` outside its presence window.
///
/// Opacity follows the presence ramps; motion is driven by the [`SpringConfig::BOUNCY`] spring
/// started at `show_at`.
pub fn popup_transform(
    frame: FrameIndex,
    fps: Fps,
    presence: &Presence,
    animation: PopupAnimation,
) -> Option<ElementTransform> {
    if !presence.is_visible(frame) {
        return None;
    }

    let spring = spring_progress(frame, presence.show_at, fps, SpringConfig::BOUNCY);
    let remaining = (1.0 - spring) * POPUP_SLIDE_DISTANCE;
    let mut out = ElementTransform {
        opacity: presence.opacity(frame),
        ..ElementTransform::default()
    };

    match animation {
        PopupAnimation::Fade => {}
        PopupAnimation::Scale => out.scale = spring,
        PopupAnimation::SlideUp => out.translate = Vec2::new(0.0, remaining),
        PopupAnimation::SlideDown => out.translate = Vec2::new(0.0, -remaining),
        PopupAnimation::SlideLeft => out.translate = Vec2::new(remaining, 0.0),
        PopupAnimation::SlideRight => out.translate = Vec2::new(-remaining, 0.0),
    }
    Some(out)
}

/// Caption overlay entrance/exit style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayEffect {
    /// Opacity only.
    #[default]
    Fade,
    /// Horizontal slide away from the aligned edge.
    Slide,
    /// Vertical slide from below.
    SlideUp,
    /// Grow from 80% size.
    Scale,
}

impl OverlayEffect {
    /// Transform for ramp progress `p` in `[0, 1]`.
    pub fn transform(self, p: f64, align: Alignment) -> ElementTransform {
        let mut out = ElementTransform {
            opacity: p,
            ..ElementTransform::default()
        };
        match self {
            Self::Fade => {}
            Self::Slide => {
                let slide_x = match align {
                    Alignment::Left => -100.0,
                    Alignment::Right => 100.0,
                    Alignment::Center => 0.0,
                };
                out.translate = Vec2::new((1.0 - p) * slide_x, 0.0);
            }
            Self::SlideUp => out.translate = Vec2::new(0.0, (1.0 - p) * 50.0),
            Self::Scale => out.scale = 0.8 + p * 0.2,
        }
        out
    }
}

/// Overlay state at `frame`: `effect_in` while entering or holding, `effect_out` once the exit
/// ramp has started. `None` before `show_at` and after `hide_at`.
pub fn overlay_transform(
    frame: FrameIndex,
    presence: &Presence,
    effect_in: OverlayEffect,
    effect_out: OverlayEffect,
    align: Alignment,
) -> Option<ElementTransform> {
    if !presence.is_visible(frame) {
        return None;
    }
    let out = if presence.is_exiting(frame) {
        effect_out.transform(presence.exit_progress(frame), align)
    } else {
        effect_in.transform(presence.entry_progress(frame), align)
    };
    Some(out)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/presence.rs"]
mod tests;
