use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{ReelError, ReelResult};
use serde::{Deserialize, Serialize};

/// Damped harmonic oscillator parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SpringConfig {
    /// Viscous damping coefficient `c`.
    pub damping: f64,
    /// Spring constant `k`.
    pub stiffness: f64,
    /// Moving mass `m`.
    pub mass: f64,
}

impl SpringConfig {
    /// Heavily damped, no overshoot. The default for slides and scale-ins.
    pub const SMOOTH: Self = Self::new(200.0, 100.0, 0.5);
    /// Stiffer spring used for popups and cards.
    pub const BOUNCY: Self = Self::new(100.0, 200.0, 0.5);
    /// Light and fast.
    pub const SNAPPY: Self = Self::new(80.0, 300.0, 0.3);
    /// Heavy and slow.
    pub const GENTLE: Self = Self::new(300.0, 80.0, 0.8);

    /// Build a config from raw coefficients.
    pub const fn new(damping: f64, stiffness: f64, mass: f64) -> Self {
        Self {
            damping,
            stiffness,
            mass,
        }
    }

    /// Look up a named preset (`smooth`, `bouncy`, `snappy`, `gentle`).
    pub fn preset(name: &str) -> ReelResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "smooth" => Ok(Self::SMOOTH),
            "bouncy" => Ok(Self::BOUNCY),
            "snappy" => Ok(Self::SNAPPY),
            "gentle" => Ok(Self::GENTLE),
            other => Err(ReelError::config(format!("unknown spring preset '{other}'"))),
        }
    }

    /// Whether the coefficients describe a physical spring.
    pub fn is_valid(&self) -> bool {
        self.damping.is_finite()
            && self.damping >= 0.0
            && self.stiffness.is_finite()
            && self.stiffness > 0.0
            && self.mass.is_finite()
            && self.mass > 0.0
    }

    /// Damping ratio `zeta = c / (2 * sqrt(k * m))`.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Undamped natural frequency `omega0 = sqrt(k / m)` in rad/s.
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::SMOOTH
    }
}

impl<'de> Deserialize<'de> for SpringConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Preset(String),
            Params {
                damping: f64,
                stiffness: f64,
                mass: f64,
            },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Preset(name) => Self::preset(&name).map_err(serde::de::Error::custom),
            Repr::Params {
                damping,
                stiffness,
                mass,
            } => Ok(Self::new(damping, stiffness, mass)),
        }
    }
}

/// Unit step response (`x(0) = 0`, `v(0) = 0`, target 1) after `secs` seconds.
///
/// Under-damped springs oscillate around 1 with a decaying envelope. Springs with a damping
/// ratio of 1 or more settle along the critically damped curve at the natural frequency, which
/// never overshoots. Invalid configs report the settled value.
pub fn spring_step(secs: f64, config: SpringConfig) -> f64 {
    if !config.is_valid() || !secs.is_finite() {
        return 1.0;
    }
    if secs <= 0.0 {
        return 0.0;
    }

    let w0 = config.natural_frequency();
    let zeta = config.damping_ratio();

    if zeta < 1.0 {
        let wd = w0 * (1.0 - zeta * zeta).sqrt();
        let e = (-zeta * w0 * secs).exp();
        let k = zeta * w0 / wd;
        1.0 - e * ((wd * secs).cos() + k * (wd * secs).sin())
    } else {
        let e = (-w0 * secs).exp();
        1.0 - e * (1.0 + w0 * secs)
    }
}

/// Spring progress for an element that starts moving at `delay`.
///
/// Frames before the onset report 0.
pub fn spring_progress(frame: FrameIndex, delay: u64, fps: Fps, config: SpringConfig) -> f64 {
    if !config.is_valid() {
        tracing::debug!(?config, "invalid spring config, reporting settled progress");
        return 1.0;
    }
    let secs = fps.frames_to_secs(frame.elapsed_since(delay));
    spring_step(secs, config)
}

/// Spring-driven scale factor (`0 -> 1`).
pub fn scale_in(frame: FrameIndex, delay: u64, fps: Fps, config: SpringConfig) -> f64 {
    spring_progress(frame, delay, fps, config)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
