use super::*;
use crate::highlight::token::TokenKind;

fn sample() -> Vec<TokenLine> {
    vec![
        vec![
            Token::new(TokenKind::Keyword, "let"),
            Token::plain(" x"),
        ],
        vec![Token::new(TokenKind::Comment, "// hi")],
    ]
}

#[test]
fn total_counts_newline_per_line() {
    assert_eq!(total_chars(&sample()), 6 + 6);
    assert_eq!(total_chars(&[]), 0);
}

#[test]
fn zero_budget_keeps_line_count() {
    let out = reveal(&sample(), 0);
    assert_eq!(out.len(), 2);
    assert!(out.iter().all(Vec::is_empty));
}

#[test]
fn straddling_token_is_cut_and_keeps_kind() {
    let out = reveal(&sample(), 4);
    assert_eq!(
        out[0],
        vec![Token::new(TokenKind::Keyword, "let"), Token::plain(" ")]
    );
    assert!(out[1].is_empty());
}

#[test]
fn newline_consumes_one_char() {
    // "let x" (5) + newline (1) + "//" (2)
    let out = reveal(&sample(), 8);
    assert_eq!(out[0].len(), 2);
    assert_eq!(out[1], vec![Token::new(TokenKind::Comment, "//")]);
}

#[test]
fn full_budget_is_identity() {
    let lines = sample();
    assert_eq!(reveal(&lines, total_chars(&lines)), lines);
    assert_eq!(reveal(&lines, usize::MAX), lines);
}

#[test]
fn cuts_on_char_boundaries() {
    let lines = vec![vec![Token::new(TokenKind::String, "'é€'")]];
    assert_eq!(
        reveal(&lines, 3)[0],
        vec![Token::new(TokenKind::String, "'é€")]
    );
}

#[test]
fn typewriter_floors_and_guards_speed() {
    let tw = Typewriter::new(1.5);
    assert_eq!(tw.visible_chars(0), 0);
    assert_eq!(tw.visible_chars(3), 4);
    assert_eq!(Typewriter::new(0.0).visible_chars(100), 0);
    assert_eq!(Typewriter::new(f64::NAN).visible_chars(100), 0);
    assert_eq!(Typewriter::default().visible_chars(10), 20);
}

#[test]
fn typing_finishes_once_everything_is_visible() {
    let lines = sample();
    let tw = Typewriter::default();
    assert!(tw.is_typing(5, &lines));
    assert!(!tw.is_typing(6, &lines));
    assert_eq!(tw.reveal(6, &lines), lines);
}
