use crate::foundation::error::{ReelError, ReelResult};
use std::str::FromStr;

/// Highlight class of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Reserved words and literal keywords.
    Keyword,
    /// Quoted string literals.
    String,
    /// Numeric literals.
    Number,
    /// Line and block comments.
    Comment,
    /// Identifiers in call position.
    Function,
    /// Shell variables and JSON object keys.
    Variable,
    /// Operator runs.
    Operator,
    /// Brackets, separators and terminators.
    Punctuation,
    /// Type names and annotations.
    Type,
    /// Anything no rule claimed.
    Plain,
}

/// A classified slice of one source line.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Token {
    /// Highlight class.
    pub kind: TokenKind,
    /// Exact source text.
    pub value: String,
}

impl Token {
    /// Build a token.
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Build a [`TokenKind::Plain`] token.
    pub fn plain(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Plain, value)
    }

    /// Length in characters (Unicode scalar values).
    pub fn char_len(&self) -> usize {
        self.value.chars().count()
    }
}

/// Tokens of one line, in source order.
pub type TokenLine = Vec<Token>;

/// Languages with a rule table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// JavaScript.
    #[default]
    Javascript,
    /// TypeScript.
    Typescript,
    /// Python.
    Python,
    /// POSIX shell.
    Bash,
    /// JSON.
    Json,
    /// No highlighting.
    Plain,
}

impl Language {
    /// Every language, in declaration order.
    pub const ALL: [Language; 6] = [
        Self::Javascript,
        Self::Typescript,
        Self::Python,
        Self::Bash,
        Self::Json,
        Self::Plain,
    ];

    /// Resolve a language tag, falling back to [`Language::Plain`] for unknown tags.
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or_else(|_| {
            tracing::debug!(tag, "unknown language tag, highlighting as plain text");
            Self::Plain
        })
    }

    /// Canonical lowercase tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Javascript => "javascript",
            Self::Typescript => "typescript",
            Self::Python => "python",
            Self::Bash => "bash",
            Self::Json => "json",
            Self::Plain => "plain",
        }
    }
}

impl FromStr for Language {
    type Err = ReelError;

    fn from_str(s: &str) -> ReelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "javascript" | "js" | "jsx" => Ok(Self::Javascript),
            "typescript" | "ts" | "tsx" => Ok(Self::Typescript),
            "python" | "py" => Ok(Self::Python),
            "bash" | "sh" | "shell" => Ok(Self::Bash),
            "json" => Ok(Self::Json),
            "plain" | "text" | "" => Ok(Self::Plain),
            other => Err(ReelError::validation(format!(
                "unknown language tag '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/highlight/token.rs"]
mod tests;
