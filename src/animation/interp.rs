use crate::foundation::core::FrameIndex;
use crate::foundation::math::lerp;

/// Default fade length in frames.
pub const DEFAULT_FADE_FRAMES: u64 = 20;

/// Map `input` linearly from `in_range` onto `out_range`, holding the nearest output bound
/// outside the input range.
///
/// A degenerate input range (`in_start == in_end`) acts as a step: `out_end` once `input`
/// reaches `in_start`, `out_start` before. Descending input ranges clamp in the direction of
/// the range. A NaN `input` yields `out_start`.
pub fn clamped_interpolate(input: f64, in_range: [f64; 2], out_range: [f64; 2]) -> f64 {
    let [in_start, in_end] = in_range;
    let [out_start, out_end] = out_range;

    if input.is_nan() {
        return out_start;
    }
    if in_start == in_end {
        return if input >= in_start { out_end } else { out_start };
    }

    let t = (input - in_start) / (in_end - in_start);
    if t.is_nan() || t <= 0.0 {
        return out_start;
    }
    if t >= 1.0 {
        return out_end;
    }
    lerp(out_start, out_end, t)
}

/// Opacity ramp `0 -> 1` over `duration` frames starting at `delay`.
pub fn fade_in(frame: FrameIndex, delay: u64, duration: u64) -> f64 {
    clamped_interpolate(
        frame.elapsed_since(delay) as f64,
        [0.0, duration as f64],
        [0.0, 1.0],
    )
}

/// Opacity ramp `1 -> 0` over `duration` frames starting at `start_frame`.
pub fn fade_out(frame: FrameIndex, start_frame: u64, duration: u64) -> f64 {
    let start = start_frame as f64;
    clamped_interpolate(
        frame.as_f64(),
        [start, start + duration as f64],
        [1.0, 0.0],
    )
}

/// Frame-window visibility: hidden before `show_at` and after `hide_at` (both inclusive bounds).
pub fn is_visible(frame: FrameIndex, show_at: Option<u64>, hide_at: Option<u64>) -> bool {
    if show_at.is_some_and(|s| frame.0 < s) {
        return false;
    }
    if hide_at.is_some_and(|h| frame.0 > h) {
        return false;
    }
    true
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
