//! Regex rule-table tokenizer for code blocks shown in terminal scenes.
//!
//! Each language is an ordered list of [`TokenRule`](crate::TokenRule)s. Every rule runs
//! over the whole line; matches are pooled, sorted by start offset, and claimed left to right.
//! When two matches overlap, the one that starts first wins, and on a shared start the rule
//! listed first wins. Unclaimed text becomes [`TokenKind::Plain`](crate::TokenKind::Plain).

pub(crate) mod reveal;
pub(crate) mod rules;
pub(crate) mod scanner;
pub(crate) mod token;
