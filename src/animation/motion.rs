use crate::animation::interp::clamped_interpolate;
use crate::animation::spring::{SpringConfig, spring_progress};
use crate::foundation::core::{Fps, FrameIndex, Vec2};

/// Side an element slides in from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Enters moving upwards (starts below, positive y).
    Up,
    /// Enters moving downwards (starts above, negative y).
    Down,
    /// Enters moving left (starts right, positive x).
    Left,
    /// Enters moving right (starts left, negative x).
    Right,
}

impl Direction {
    /// Offset vector for a remaining distance `offset` along this direction.
    pub fn offset(self, offset: f64) -> Vec2 {
        match self {
            Self::Up => Vec2::new(0.0, offset),
            Self::Down => Vec2::new(0.0, -offset),
            Self::Left => Vec2::new(offset, 0.0),
            Self::Right => Vec2::new(-offset, 0.0),
        }
    }
}

/// Default slide distance in pixels.
pub const DEFAULT_SLIDE_DISTANCE: f64 = 30.0;

/// Spring-driven slide: the remaining `(1 - progress) * distance`, oriented by `direction`.
pub fn slide_offset(
    frame: FrameIndex,
    delay: u64,
    fps: Fps,
    distance: f64,
    direction: Direction,
    config: SpringConfig,
) -> Vec2 {
    let progress = spring_progress(frame, delay, fps, config);
    direction.offset((1.0 - progress) * distance)
}

/// Default pulse speed in radians per frame.
pub const DEFAULT_PULSE_SPEED: f64 = 0.1;
/// Default pulse amplitude.
pub const DEFAULT_PULSE_INTENSITY: f64 = 0.1;
/// Default wave speed in radians per frame.
pub const DEFAULT_WAVE_SPEED: f64 = 0.05;

/// Endless oscillation around 1: `1 + sin(frame * speed) * intensity`.
pub fn pulse(frame: FrameIndex, speed: f64, intensity: f64) -> f64 {
    1.0 + (frame.as_f64() * speed).sin() * intensity
}

/// Endless oscillation in `[0, 1]`: `(sin(frame * speed + offset) + 1) / 2`.
pub fn wave(frame: FrameIndex, speed: f64, offset: f64) -> f64 {
    ((frame.as_f64() * speed + offset).sin() + 1.0) / 2.0
}

/// Horizontal placement of a framed media element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Centered, no perspective tilt.
    #[default]
    Center,
    /// Pinned to the left edge, tilted towards the center.
    Left,
    /// Pinned to the right edge, tilted towards the center.
    Right,
}

/// Entrance of a left/right aligned element: it swings from a steep angle to its resting tilt
/// while sliding in from outside.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AlignmentMotion {
    /// Placement.
    pub align: Alignment,
    /// Resting tilt in degrees.
    pub angle: f64,
    /// Tilt at the start of the entrance, in degrees.
    pub from_angle: f64,
    /// Entrance length in frames.
    pub duration: u64,
    /// Entrance onset in frames.
    pub delay: u64,
    /// Slide distance in pixels at the start of the entrance.
    pub slide_distance: f64,
    /// When false, the element sits at its resting pose from the first frame.
    pub animate: bool,
}

impl Default for AlignmentMotion {
    fn default() -> Self {
        Self {
            align: Alignment::Center,
            angle: 8.0,
            from_angle: 35.0,
            duration: 45,
            delay: 0,
            slide_distance: 80.0,
            animate: true,
        }
    }
}

impl AlignmentMotion {
    fn progress_input(&self, frame: FrameIndex) -> f64 {
        frame.elapsed_since(self.delay) as f64
    }
}

/// Tilt in degrees for `motion` at `frame`. Left tilts positive, right negative.
pub fn rotation_for_alignment(frame: FrameIndex, motion: &AlignmentMotion) -> f64 {
    let sign = match motion.align {
        Alignment::Center => return 0.0,
        Alignment::Left => 1.0,
        Alignment::Right => -1.0,
    };
    if !motion.animate {
        return motion.angle * sign;
    }
    clamped_interpolate(
        motion.progress_input(frame),
        [0.0, motion.duration as f64],
        [motion.from_angle * sign, motion.angle * sign],
    )
}

/// Horizontal entrance offset in pixels for `motion` at `frame`; settles at 0.
pub fn slide_offset_for_alignment(frame: FrameIndex, motion: &AlignmentMotion) -> f64 {
    let dir = match motion.align {
        Alignment::Center => return 0.0,
        Alignment::Left => -1.0,
        Alignment::Right => 1.0,
    };
    if !motion.animate {
        return 0.0;
    }
    clamped_interpolate(
        motion.progress_input(frame),
        [0.0, motion.duration as f64],
        [motion.slide_distance * dir, 0.0],
    )
}

#[cfg(test)]
#[path = "../../tests/unit/animation/motion.rs"]
mod tests;
