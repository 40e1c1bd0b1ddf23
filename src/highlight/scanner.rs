use super::rules::{TOKEN_GROUP, TokenRule, rules_for};
use super::token::{Language, Token, TokenKind, TokenLine};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Claim {
    start: usize,
    end: usize,
    kind: TokenKind,
}

/// Split `code` on `'\n'` and tokenize each line independently.
///
/// Always returns one [`TokenLine`] per line. A line no rule touches (including an empty
/// line) becomes a single plain token holding the whole line, and concatenating a line's
/// token values reproduces it exactly.
#[tracing::instrument(skip(code), fields(bytes = code.len()))]
pub fn tokenize(code: &str, language: Language) -> Vec<TokenLine> {
    let rules = rules_for(language);
    code.split('\n').map(|line| tokenize_line(line, rules)).collect()
}

/// [`tokenize`] with a free-form language tag (`"js"`, `"python"`, ...).
pub fn tokenize_tagged(code: &str, tag: &str) -> Vec<TokenLine> {
    tokenize(code, Language::from_tag(tag))
}

fn tokenize_line(line: &str, rules: &[TokenRule]) -> TokenLine {
    let mut claims = Vec::new();
    for rule in rules {
        collect_claims(line, rule, &mut claims);
    }
    // Stable: on a shared start the earlier rule keeps priority.
    claims.sort_by_key(|c| c.start);

    let mut out = Vec::new();
    let mut pos = 0;
    for claim in claims {
        if claim.start < pos {
            continue;
        }
        if claim.start > pos {
            out.push(Token::plain(&line[pos..claim.start]));
        }
        out.push(Token::new(claim.kind, &line[claim.start..claim.end]));
        pos = claim.end;
    }
    if pos < line.len() {
        out.push(Token::plain(&line[pos..]));
    }
    if out.is_empty() {
        out.push(Token::plain(line));
    }
    out
}

fn collect_claims(line: &str, rule: &TokenRule, out: &mut Vec<Claim>) {
    let mut at = 0;
    while at <= line.len() {
        let Some(caps) = rule.pattern.captures_at(line, at) else {
            break;
        };
        let Some(span) = caps.name(TOKEN_GROUP).or_else(|| caps.get(0)) else {
            break;
        };
        if span.is_empty() {
            match line[span.start()..].chars().next() {
                Some(c) => at = span.start() + c.len_utf8(),
                None => break,
            }
            continue;
        }
        out.push(Claim {
            start: span.start(),
            end: span.end(),
            kind: rule.kind,
        });
        at = span.end();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/highlight/scanner.rs"]
mod tests;
