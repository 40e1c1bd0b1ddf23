use super::token::{Language, TokenKind};
use regex::Regex;
use std::sync::LazyLock;

/// Capture group that narrows a rule's claimed span.
///
/// When present and matched, only this group is tokenized and scanning resumes at its end.
/// The trailing context after it (an opening paren, a colon) stays available to later rules.
pub const TOKEN_GROUP: &str = "tok";

/// One entry of a language's ordered rule table.
#[derive(Clone, Debug)]
pub struct TokenRule {
    /// Compiled pattern, run over a single line.
    pub pattern: Regex,
    /// Class assigned to every match.
    pub kind: TokenKind,
}

impl TokenRule {
    /// Compile a rule.
    pub fn new(pattern: &str, kind: TokenKind) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            kind,
        })
    }
}

// Word boundaries and classes are ASCII-only: `é` is not a word character and `٣` is not a
// digit, so `é1` still yields the number `1`.
const LINE_COMMENT_SLASH: &str = r"//.*$";
const BLOCK_COMMENT: &str = r"/\*(?s:.)*?\*/";
const LINE_COMMENT_HASH: &str = r"#.*$";
const JS_KEYWORDS: &str = concat!(
    r"(?-u:\b)(?:const|let|var|function|return|if|else|for|while|class|import|export|from|",
    r"default|async|await|try|catch|throw|new|this|typeof|instanceof)(?-u:\b)",
);
const TS_KEYWORDS: &str = concat!(
    r"(?-u:\b)(?:const|let|var|function|return|if|else|for|while|class|import|export|from|",
    r"default|async|await|try|catch|throw|new|this|typeof|instanceof|interface|type|enum|",
    r"implements|extends|public|private|protected|readonly)(?-u:\b)",
);
const JS_LITERALS: &str = r"(?-u:\b)(?:true|false|null|undefined)(?-u:\b)";
const TS_ANNOTATION: &str = r":\s*[a-zA-Z_][a-zA-Z0-9_]*";
const QUOTED: &str = r#""(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'"#;
const QUOTED_OR_TEMPLATE: &str = r#""(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'|`(?:[^`\\]|\\.)*`"#;
const DECIMAL: &str = r"(?-u:\b)[0-9]+\.?[0-9]*(?-u:\b)";
const TYPE_NAME: &str = r"(?-u:\b)[A-Z][a-zA-Z0-9]*(?-u:\b)";
const CALL: &str = r"(?-u:\b)(?P<tok>[a-zA-Z_][a-zA-Z0-9_]*\s*)\(";
const C_OPERATORS: &str = r"[=+\-*/<>!&|?:]+";
const C_PUNCTUATION: &str = r"[{}\[\]();,.]";

const PY_TRIPLE_QUOTED: &str = r#""""(?s:.)*?"""|'''(?s:.)*?'''"#;
const PY_KEYWORDS: &str = concat!(
    r"(?-u:\b)(?:def|class|return|if|elif|else|for|while|import|from|as|try|except|finally|",
    r"raise|with|lambda|yield|pass|break|continue|and|or|not|in|is|True|False|None)(?-u:\b)",
);
const PY_OPERATORS: &str = r"[=+\-*/<>!&|@:]+";

const SH_KEYWORDS: &str = concat!(
    r"(?-u:\b)(?:if|then|else|elif|fi|for|while|do|done|case|esac|function|return|exit|echo|",
    r"cd|ls|mkdir|rm|cp|mv|cat|grep|sed|awk|export|source)(?-u:\b)",
);
const SH_VARIABLE: &str = r"\$[a-zA-Z0-9_]+|\$\{[^}]+\}";
const SH_INTEGER: &str = r"(?-u:\b)[0-9]+(?-u:\b)";
const SH_OPERATORS: &str = r"[|&;<>]+";

const JSON_KEY: &str = r#"(?P<tok>"(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*')\s*:"#;
const JSON_LITERALS: &str = r"(?-u:\b)(?:true|false|null)(?-u:\b)";
const JSON_NUMBER: &str = r"(?-u:\b)-?[0-9]+\.?[0-9]*(?-u:\b)";
const JSON_PUNCTUATION: &str = r"[{}\[\]:,]";

use TokenKind as K;

static JAVASCRIPT: LazyLock<Vec<TokenRule>> = LazyLock::new(|| {
    compile(
        Language::Javascript,
        &[
            (LINE_COMMENT_SLASH, K::Comment),
            (BLOCK_COMMENT, K::Comment),
            (JS_KEYWORDS, K::Keyword),
            (JS_LITERALS, K::Keyword),
            (QUOTED_OR_TEMPLATE, K::String),
            (DECIMAL, K::Number),
            (TYPE_NAME, K::Type),
            (CALL, K::Function),
            (C_OPERATORS, K::Operator),
            (C_PUNCTUATION, K::Punctuation),
        ],
    )
});

static TYPESCRIPT: LazyLock<Vec<TokenRule>> = LazyLock::new(|| {
    compile(
        Language::Typescript,
        &[
            (LINE_COMMENT_SLASH, K::Comment),
            (BLOCK_COMMENT, K::Comment),
            (TS_KEYWORDS, K::Keyword),
            (JS_LITERALS, K::Keyword),
            (TS_ANNOTATION, K::Type),
            (QUOTED_OR_TEMPLATE, K::String),
            (DECIMAL, K::Number),
            (TYPE_NAME, K::Type),
            (CALL, K::Function),
            (C_OPERATORS, K::Operator),
            (C_PUNCTUATION, K::Punctuation),
        ],
    )
});

static PYTHON: LazyLock<Vec<TokenRule>> = LazyLock::new(|| {
    compile(
        Language::Python,
        &[
            (LINE_COMMENT_HASH, K::Comment),
            (PY_TRIPLE_QUOTED, K::String),
            (PY_KEYWORDS, K::Keyword),
            (QUOTED, K::String),
            (DECIMAL, K::Number),
            (CALL, K::Function),
            (PY_OPERATORS, K::Operator),
            (C_PUNCTUATION, K::Punctuation),
        ],
    )
});

static BASH: LazyLock<Vec<TokenRule>> = LazyLock::new(|| {
    compile(
        Language::Bash,
        &[
            (LINE_COMMENT_HASH, K::Comment),
            (SH_KEYWORDS, K::Keyword),
            (QUOTED, K::String),
            (SH_VARIABLE, K::Variable),
            (SH_INTEGER, K::Number),
            (SH_OPERATORS, K::Operator),
        ],
    )
});

static JSON: LazyLock<Vec<TokenRule>> = LazyLock::new(|| {
    compile(
        Language::Json,
        &[
            (JSON_KEY, K::Variable),
            (QUOTED, K::String),
            (JSON_LITERALS, K::Keyword),
            (JSON_NUMBER, K::Number),
            (JSON_PUNCTUATION, K::Punctuation),
        ],
    )
});

/// Ordered rule table for `language`. Empty for [`Language::Plain`].
pub fn rules_for(language: Language) -> &'static [TokenRule] {
    match language {
        Language::Javascript => &JAVASCRIPT,
        Language::Typescript => &TYPESCRIPT,
        Language::Python => &PYTHON,
        Language::Bash => &BASH,
        Language::Json => &JSON,
        Language::Plain => &[],
    }
}

fn compile(language: Language, table: &[(&str, TokenKind)]) -> Vec<TokenRule> {
    table
        .iter()
        .filter_map(|&(pattern, kind)| match TokenRule::new(pattern, kind) {
            Ok(rule) => Some(rule),
            Err(err) => {
                tracing::error!(
                    language = language.as_str(),
                    pattern,
                    %err,
                    "skipping invalid token rule"
                );
                None
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/highlight/rules.rs"]
mod tests;
