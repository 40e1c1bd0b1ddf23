use crate::foundation::error::{ReelError, ReelResult};
use crate::foundation::math::unit_to_u8;
use std::fmt;
use std::str::FromStr;

/// Straight (non-premultiplied) 8-bit RGBA color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha, 255 is opaque.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color with an explicit 8-bit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Replace alpha with a unit-range value (clamped, NaN becomes transparent).
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            a: unit_to_u8(alpha),
            ..self
        }
    }

    /// Alpha in `[0, 1]`.
    pub fn alpha(self) -> f64 {
        f64::from(self.a) / 255.0
    }

    /// Parse `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    pub fn parse_css(s: &str) -> ReelResult<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }
        let lower = s.to_ascii_lowercase();
        if let Some(args) = function_args(&lower, "rgba") {
            return parse_channels(args, true);
        }
        if let Some(args) = function_args(&lower, "rgb") {
            return parse_channels(args, false);
        }
        Err(ReelError::validation(format!(
            "unsupported color notation \"{s}\""
        )))
    }

    /// `#rrggbb` when opaque, `#rrggbbaa` otherwise.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgba8 {
    type Err = ReelError;

    fn from_str(s: &str) -> ReelResult<Self> {
        Self::parse_css(s)
    }
}

impl serde::Serialize for Rgba8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Rgba8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse_css(&s).map_err(serde::de::Error::custom)
    }
}

fn parse_hex(s: &str) -> ReelResult<Rgba8> {
    fn hex_byte(pair: &str) -> ReelResult<u8> {
        u8::from_str_radix(pair, 16)
            .map_err(|_| ReelError::validation(format!("invalid hex byte \"{pair}\"")))
    }

    if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ReelError::validation(format!("invalid hex color digits \"{s}\"")));
    }
    match s.len() {
        3 => {
            let r = hex_byte(&s[0..1])?;
            let g = hex_byte(&s[1..2])?;
            let b = hex_byte(&s[2..3])?;
            Ok(Rgba8::rgb(r * 17, g * 17, b * 17))
        }
        6 | 8 => {
            let r = hex_byte(&s[0..2])?;
            let g = hex_byte(&s[2..4])?;
            let b = hex_byte(&s[4..6])?;
            let a = if s.len() == 8 { hex_byte(&s[6..8])? } else { 255 };
            Ok(Rgba8::rgba(r, g, b, a))
        }
        _ => Err(ReelError::validation(
            "hex color must be #RGB, #RRGGBB or #RRGGBBAA (case-insensitive)",
        )),
    }
}

fn function_args<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    s.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_channels(args: &str, with_alpha: bool) -> ReelResult<Rgba8> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return Err(ReelError::validation(format!(
            "expected {expected} color components, got {}",
            parts.len()
        )));
    }

    let number = |p: &str| -> ReelResult<f64> {
        p.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ReelError::validation(format!("invalid color component \"{p}\"")))
    };
    let channel = |p: &str| -> ReelResult<u8> { Ok(number(p)?.clamp(0.0, 255.0).round() as u8) };

    let r = channel(parts[0])?;
    let g = channel(parts[1])?;
    let b = channel(parts[2])?;
    let a = if with_alpha {
        unit_to_u8(number(parts[3])?)
    } else {
        255
    };
    Ok(Rgba8::rgba(r, g, b, a))
}

#[cfg(test)]
#[path = "../../tests/unit/style/color.rs"]
mod tests;
