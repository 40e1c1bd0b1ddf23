use super::token::{Token, TokenLine};

/// Characters in `lines`, counting one trailing newline per line.
pub fn total_chars(lines: &[TokenLine]) -> usize {
    lines
        .iter()
        .map(|line| line.iter().map(Token::char_len).sum::<usize>() + 1)
        .sum()
}

/// Truncate tokenized lines to the first `visible` characters.
///
/// The result always has as many lines as the input; lines past the budget come back empty.
/// A token straddling the budget is cut at a character boundary and keeps its kind, and
/// each line consumes one extra character for its newline.
pub fn reveal(lines: &[TokenLine], visible: usize) -> Vec<TokenLine> {
    let mut budget = visible;
    lines
        .iter()
        .map(|line| {
            let mut out = Vec::new();
            for token in line {
                if budget == 0 {
                    break;
                }
                let len = token.char_len();
                if len <= budget {
                    if len > 0 {
                        out.push(token.clone());
                    }
                    budget -= len;
                } else {
                    let cut: String = token.value.chars().take(budget).collect();
                    out.push(Token::new(token.kind, cut));
                    budget = 0;
                }
            }
            budget = budget.saturating_sub(1);
            out
        })
        .collect()
}

/// Frame-driven character reveal for a typing effect.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Typewriter {
    /// Characters revealed per frame.
    pub type_speed: f64,
}

impl Default for Typewriter {
    fn default() -> Self {
        Self { type_speed: 2.0 }
    }
}

impl Typewriter {
    /// Typewriter revealing `type_speed` characters per frame.
    pub fn new(type_speed: f64) -> Self {
        Self { type_speed }
    }

    /// `floor(frame * type_speed)`, or 0 for a non-finite or non-positive speed.
    pub fn visible_chars(self, frame: u64) -> usize {
        if !self.type_speed.is_finite() || self.type_speed <= 0.0 {
            return 0;
        }
        // Saturating float-to-int cast.
        (frame as f64 * self.type_speed).floor() as usize
    }

    /// Whether text is still being revealed at `frame`.
    pub fn is_typing(self, frame: u64, lines: &[TokenLine]) -> bool {
        self.visible_chars(frame) < total_chars(lines)
    }

    /// [`reveal`] at `frame`.
    pub fn reveal(self, frame: u64, lines: &[TokenLine]) -> Vec<TokenLine> {
        reveal(lines, self.visible_chars(frame))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/highlight/reveal.rs"]
mod tests;
