//! reelkit is the deterministic motion core for programmatic promo and demo videos.
//!
//! Every value is a pure function of an explicit frame index (and frame rate, where
//! physics is involved). Nothing reads ambient time, so any frame can be computed on its
//! own, in any order, on any thread.
//!
//! - Curves: [`clamped_interpolate`], [`fade_in`], [`spring_progress`], [`slide_offset`],
//!   [`pulse`], [`wave`] and the [`AnimationSpec`] value object
//! - Presence: [`Presence`] windows and [`popup_transform`] entrances
//! - Code: [`tokenize`] into highlighted [`Token`] lines and [`reveal`] them for a typing effect
//! - Sequencing: [`Storyboard`] JSON compiled into a [`SceneTimeline`]
//! - Style: palettes, header levels, terminal themes and token colors as [`Rgba8`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub(crate) mod animation;
mod foundation;
pub(crate) mod highlight;
pub(crate) mod style;
pub(crate) mod timeline;

pub use crate::foundation::core::{Fps, FrameIndex, FrameRange, Vec2};
pub use crate::foundation::error::{ReelError, ReelResult};

pub use crate::animation::anim::{AnimationSpec, Easing};
pub use crate::animation::ease::Ease;
pub use crate::animation::interp::{
    DEFAULT_FADE_FRAMES, clamped_interpolate, fade_in, fade_out, is_visible,
};
pub use crate::animation::motion::{
    Alignment, AlignmentMotion, DEFAULT_PULSE_INTENSITY, DEFAULT_PULSE_SPEED,
    DEFAULT_SLIDE_DISTANCE, DEFAULT_WAVE_SPEED, Direction, pulse, rotation_for_alignment,
    slide_offset, slide_offset_for_alignment, wave,
};
pub use crate::animation::presence::{
    ElementTransform, OverlayEffect, POPUP_SLIDE_DISTANCE, PopupAnimation, Presence,
    overlay_transform, popup_transform,
};
pub use crate::animation::spring::{SpringConfig, scale_in, spring_progress, spring_step};

pub use crate::highlight::reveal::{Typewriter, reveal, total_chars};
pub use crate::highlight::rules::{TOKEN_GROUP, TokenRule, rules_for};
pub use crate::highlight::scanner::{tokenize, tokenize_tagged};
pub use crate::highlight::token::{Language, Token, TokenKind, TokenLine};

pub use crate::style::color::Rgba8;
pub use crate::style::palette::{
    DEFAULT_GRADIENT_SPEED, GRADIENT_SHIFT_DEGREES, Gradient, GradientKind, HeaderLevel,
    LevelColors, Palette, PaletteName, gradient_shift,
};
pub use crate::style::theme::{TerminalColors, TerminalTheme, token_color};

pub use crate::timeline::series::{
    ActiveScene, ActiveScenes, SceneSpec, SceneTimeline, ScheduledScene, TransitionSpec,
};
pub use crate::timeline::storyboard::{Storyboard, TransitionKind};
