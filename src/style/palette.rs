use super::color::Rgba8;
use crate::foundation::error::{ReelError, ReelResult};
use std::fmt::Write as _;
use std::str::FromStr;

/// Gradient angle swing, in degrees, of [`gradient_shift`].
pub const GRADIENT_SHIFT_DEGREES: f64 = 30.0;
/// Default phase speed of [`gradient_shift`], in radians per frame.
pub const DEFAULT_GRADIENT_SPEED: f64 = 0.02;

/// Three-stop background palette.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Stops, first to last.
    pub colors: [Rgba8; 3],
    /// Linear gradient angle in degrees.
    pub angle: f64,
}

/// Named background palettes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteName {
    /// Black to slate.
    Dark,
    /// White to light slate.
    Light,
    /// Deep orange.
    Warm,
    /// Deep cyan.
    Cool,
    /// Deep red.
    Emergency,
}

const DARK: Palette = Palette {
    colors: [
        Rgba8::rgb(0x00, 0x00, 0x00),
        Rgba8::rgb(0x0f, 0x17, 0x2a),
        Rgba8::rgb(0x1e, 0x29, 0x3b),
    ],
    angle: 180.0,
};
const LIGHT: Palette = Palette {
    colors: [
        Rgba8::rgb(0xff, 0xff, 0xff),
        Rgba8::rgb(0xf8, 0xfa, 0xfc),
        Rgba8::rgb(0xe2, 0xe8, 0xf0),
    ],
    angle: 180.0,
};
const WARM: Palette = Palette {
    colors: [
        Rgba8::rgb(0x7c, 0x2d, 0x12),
        Rgba8::rgb(0xc2, 0x41, 0x0c),
        Rgba8::rgb(0xea, 0x58, 0x0c),
    ],
    angle: 135.0,
};
const COOL: Palette = Palette {
    colors: [
        Rgba8::rgb(0x0c, 0x4a, 0x6e),
        Rgba8::rgb(0x03, 0x69, 0xa1),
        Rgba8::rgb(0x08, 0x91, 0xb2),
    ],
    angle: 135.0,
};
const EMERGENCY: Palette = Palette {
    colors: [
        Rgba8::rgb(0x45, 0x0a, 0x0a),
        Rgba8::rgb(0x7f, 0x1d, 0x1d),
        Rgba8::rgb(0xb9, 0x1c, 0x1c),
    ],
    angle: 180.0,
};

impl PaletteName {
    /// Every palette, in declaration order.
    pub const ALL: [PaletteName; 5] = [
        Self::Dark,
        Self::Light,
        Self::Warm,
        Self::Cool,
        Self::Emergency,
    ];

    /// The palette's stops and angle.
    pub const fn palette(self) -> &'static Palette {
        match self {
            Self::Dark => &DARK,
            Self::Light => &LIGHT,
            Self::Warm => &WARM,
            Self::Cool => &COOL,
            Self::Emergency => &EMERGENCY,
        }
    }

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Warm => "warm",
            Self::Cool => "cool",
            Self::Emergency => "emergency",
        }
    }
}

impl FromStr for PaletteName {
    type Err = ReelError;

    fn from_str(s: &str) -> ReelResult<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ReelError::config(format!("unknown palette \"{s}\"")))
    }
}

/// Header severity levels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderLevel {
    /// Neutral slate.
    #[default]
    Default,
    /// Blue.
    Info,
    /// Amber.
    Warn,
    /// Red.
    Emergency,
}

/// Color scheme of a header at one [`HeaderLevel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelColors {
    /// Panel fill.
    pub background: Rgba8,
    /// Panel outline.
    pub border: Rgba8,
    /// Title text.
    pub text: Rgba8,
    /// Icon and subtitle accent.
    pub accent: Rgba8,
}

// CSS alpha given in thousandths, rounded to the nearest byte.
const fn translucent(r: u8, g: u8, b: u8, alpha_permille: u32) -> Rgba8 {
    Rgba8::rgba(r, g, b, ((alpha_permille * 255 + 500) / 1000) as u8)
}

const LEVEL_DEFAULT: LevelColors = LevelColors {
    background: translucent(15, 23, 42, 850),
    border: translucent(71, 85, 105, 500),
    text: Rgba8::WHITE,
    accent: Rgba8::rgb(0x94, 0xa3, 0xb8),
};
const LEVEL_INFO: LevelColors = LevelColors {
    background: translucent(30, 58, 138, 850),
    border: translucent(59, 130, 246, 700),
    text: Rgba8::WHITE,
    accent: Rgba8::rgb(0x60, 0xa5, 0xfa),
};
const LEVEL_WARN: LevelColors = LevelColors {
    background: translucent(120, 53, 15, 850),
    border: translucent(245, 158, 11, 700),
    text: Rgba8::WHITE,
    accent: Rgba8::rgb(0xfb, 0xbf, 0x24),
};
const LEVEL_EMERGENCY: LevelColors = LevelColors {
    background: translucent(127, 29, 29, 900),
    border: translucent(239, 68, 68, 800),
    text: Rgba8::WHITE,
    accent: Rgba8::rgb(0xf8, 0x71, 0x71),
};

impl HeaderLevel {
    /// Colors for this level.
    pub const fn colors(self) -> &'static LevelColors {
        match self {
            Self::Default => &LEVEL_DEFAULT,
            Self::Info => &LEVEL_INFO,
            Self::Warn => &LEVEL_WARN,
            Self::Emergency => &LEVEL_EMERGENCY,
        }
    }
}

/// Gradient geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    /// Straight gradient along `angle`.
    #[default]
    Linear,
    /// Circle centered in the frame.
    Radial,
}

/// Background gradient description.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Gradient {
    /// Geometry.
    #[serde(default)]
    pub kind: GradientKind,
    /// Angle in degrees (linear only).
    #[serde(default = "default_angle")]
    pub angle: f64,
    /// Color stops.
    pub colors: Vec<Rgba8>,
    /// Stop positions in percent. Missing entries are spaced evenly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positions: Option<Vec<f64>>,
}

fn default_angle() -> f64 {
    180.0
}

impl From<&Palette> for Gradient {
    fn from(p: &Palette) -> Self {
        Self {
            kind: GradientKind::Linear,
            angle: p.angle,
            colors: p.colors.to_vec(),
            positions: None,
        }
    }
}

impl From<PaletteName> for Gradient {
    fn from(name: PaletteName) -> Self {
        Self::from(name.palette())
    }
}

impl Gradient {
    /// Stops with resolved positions in percent.
    pub fn stops(&self) -> Vec<(Rgba8, f64)> {
        let last = self.colors.len().saturating_sub(1);
        self.colors
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                let explicit = self.positions.as_ref().and_then(|p| p.get(i)).copied();
                let even = if last == 0 {
                    0.0
                } else {
                    i as f64 / last as f64 * 100.0
                };
                (c, explicit.unwrap_or(even))
            })
            .collect()
    }

    /// CSS `background` value, rotating a linear gradient by `angle_offset` degrees.
    pub fn to_css(&self, angle_offset: f64) -> String {
        let mut stops = String::new();
        for (i, (c, pos)) in self.stops().into_iter().enumerate() {
            if i > 0 {
                stops.push_str(", ");
            }
            let _ = write!(stops, "{c} {pos}%");
        }
        match self.kind {
            GradientKind::Radial => format!("radial-gradient(circle at 50% 50%, {stops})"),
            GradientKind::Linear => {
                format!("linear-gradient({}deg, {stops})", self.angle + angle_offset)
            }
        }
    }
}

/// Angle offset of an animated gradient: `sin(frame * speed) * 30` degrees.
pub fn gradient_shift(frame: u64, speed: f64) -> f64 {
    let v = (frame as f64 * speed).sin() * GRADIENT_SHIFT_DEGREES;
    if v.is_finite() { v } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/style/palette.rs"]
mod tests;
