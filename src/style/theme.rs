use super::color::Rgba8;
use crate::highlight::token::TokenKind;

/// Terminal window chrome themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerminalTheme {
    /// One Dark style chrome.
    #[default]
    Dark,
    /// Near-black chrome.
    Darker,
    /// Light gray chrome.
    Light,
}

/// Chrome colors of a terminal window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TerminalColors {
    /// Code area fill.
    pub background: Rgba8,
    /// Title bar fill.
    pub title_bar: Rgba8,
    /// Window and title bar outline.
    pub border: Rgba8,
    /// Title text.
    pub title_text: Rgba8,
}

const TERMINAL_DARK: TerminalColors = TerminalColors {
    background: Rgba8::rgb(0x28, 0x2c, 0x34),
    title_bar: Rgba8::rgb(0x21, 0x25, 0x2b),
    border: Rgba8::rgb(0x18, 0x1a, 0x1f),
    title_text: Rgba8::rgb(0x9d, 0xa5, 0xb4),
};
const TERMINAL_DARKER: TerminalColors = TerminalColors {
    background: Rgba8::rgb(0x1e, 0x1e, 0x1e),
    title_bar: Rgba8::rgb(0x32, 0x32, 0x33),
    border: Rgba8::rgb(0x14, 0x14, 0x14),
    title_text: Rgba8::rgb(0x80, 0x80, 0x80),
};
const TERMINAL_LIGHT: TerminalColors = TerminalColors {
    background: Rgba8::rgb(0xfa, 0xfa, 0xfa),
    title_bar: Rgba8::rgb(0xe8, 0xe8, 0xe8),
    border: Rgba8::rgb(0xd0, 0xd0, 0xd0),
    title_text: Rgba8::rgb(0x66, 0x66, 0x66),
};

impl TerminalTheme {
    /// Chrome colors for this theme.
    pub const fn colors(self) -> &'static TerminalColors {
        match self {
            Self::Dark => &TERMINAL_DARK,
            Self::Darker => &TERMINAL_DARKER,
            Self::Light => &TERMINAL_LIGHT,
        }
    }
}

/// Foreground color of a highlighted token. Identical across terminal themes.
pub const fn token_color(kind: TokenKind) -> Rgba8 {
    match kind {
        TokenKind::Keyword => Rgba8::rgb(0xc6, 0x78, 0xdd),
        TokenKind::String => Rgba8::rgb(0x98, 0xc3, 0x79),
        TokenKind::Number => Rgba8::rgb(0xd1, 0x9a, 0x66),
        TokenKind::Comment => Rgba8::rgb(0x5c, 0x63, 0x70),
        TokenKind::Function => Rgba8::rgb(0x61, 0xaf, 0xef),
        TokenKind::Variable => Rgba8::rgb(0xe0, 0x6c, 0x75),
        TokenKind::Operator => Rgba8::rgb(0x56, 0xb6, 0xc2),
        TokenKind::Punctuation | TokenKind::Plain => Rgba8::rgb(0xab, 0xb2, 0xbf),
        TokenKind::Type => Rgba8::rgb(0xe5, 0xc0, 0x7b),
    }
}

impl TokenKind {
    /// See [`token_color`].
    pub const fn color(self) -> Rgba8 {
        token_color(self)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/theme.rs"]
mod tests;
