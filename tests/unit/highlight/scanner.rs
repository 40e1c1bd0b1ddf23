use super::*;

fn kinds_and_values(line: &TokenLine) -> Vec<(TokenKind, &str)> {
    line.iter().map(|t| (t.kind, t.value.as_str())).collect()
}

#[test]
fn javascript_declaration_and_comment() {
    let lines = tokenize("const x = 1;\n// done", Language::Javascript);
    assert_eq!(lines.len(), 2);
    assert_eq!(
        kinds_and_values(&lines[0]),
        vec![
            (TokenKind::Keyword, "const"),
            (TokenKind::Plain, " x "),
            (TokenKind::Operator, "="),
            (TokenKind::Plain, " "),
            (TokenKind::Number, "1"),
            (TokenKind::Punctuation, ";"),
        ]
    );
    assert_eq!(kinds_and_values(&lines[1]), vec![(TokenKind::Comment, "// done")]);
}

#[test]
fn call_position_claims_identifier_only() {
    let lines = tokenize(r#"console.log("hi")"#, Language::Javascript);
    assert_eq!(
        kinds_and_values(&lines[0]),
        vec![
            (TokenKind::Plain, "console"),
            (TokenKind::Punctuation, "."),
            (TokenKind::Function, "log"),
            (TokenKind::Punctuation, "("),
            (TokenKind::String, r#""hi""#),
            (TokenKind::Punctuation, ")"),
        ]
    );
}

#[test]
fn earlier_rule_wins_shared_start() {
    let lines = tokenize("/* hi */ x", Language::Javascript);
    assert_eq!(
        kinds_and_values(&lines[0]),
        vec![(TokenKind::Comment, "/* hi */"), (TokenKind::Plain, " x")]
    );
}

#[test]
fn typescript_annotation_beats_operator() {
    let lines = tokenize("let n: number = 5;", Language::Typescript);
    assert_eq!(
        kinds_and_values(&lines[0]),
        vec![
            (TokenKind::Keyword, "let"),
            (TokenKind::Plain, " n"),
            (TokenKind::Type, ": number"),
            (TokenKind::Plain, " "),
            (TokenKind::Operator, "="),
            (TokenKind::Plain, " "),
            (TokenKind::Number, "5"),
            (TokenKind::Punctuation, ";"),
        ]
    );
}

#[test]
fn python_definition() {
    let lines = tokenize("def greet(name):", Language::Python);
    assert_eq!(
        kinds_and_values(&lines[0]),
        vec![
            (TokenKind::Keyword, "def"),
            (TokenKind::Plain, " "),
            (TokenKind::Function, "greet"),
            (TokenKind::Punctuation, "("),
            (TokenKind::Plain, "name"),
            (TokenKind::Punctuation, ")"),
            (TokenKind::Operator, ":"),
        ]
    );
}

#[test]
fn bash_pipeline() {
    let lines = tokenize("echo $HOME | grep x", Language::Bash);
    assert_eq!(
        kinds_and_values(&lines[0]),
        vec![
            (TokenKind::Keyword, "echo"),
            (TokenKind::Plain, " "),
            (TokenKind::Variable, "$HOME"),
            (TokenKind::Plain, " "),
            (TokenKind::Operator, "|"),
            (TokenKind::Plain, " "),
            (TokenKind::Keyword, "grep"),
            (TokenKind::Plain, " x"),
        ]
    );
}

#[test]
fn json_keys_are_variables_values_are_strings() {
    let lines = tokenize(r#"{"name": "reel", "n": 2}"#, Language::Json);
    assert_eq!(
        kinds_and_values(&lines[0]),
        vec![
            (TokenKind::Punctuation, "{"),
            (TokenKind::Variable, r#""name""#),
            (TokenKind::Punctuation, ":"),
            (TokenKind::Plain, " "),
            (TokenKind::String, r#""reel""#),
            (TokenKind::Punctuation, ","),
            (TokenKind::Plain, " "),
            (TokenKind::Variable, r#""n""#),
            (TokenKind::Punctuation, ":"),
            (TokenKind::Plain, " "),
            (TokenKind::Number, "2"),
            (TokenKind::Punctuation, "}"),
        ]
    );
}

#[test]
fn empty_lines_keep_one_plain_token() {
    let lines = tokenize("a\n\nb", Language::Plain);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], vec![Token::plain("")]);
    assert_eq!(lines[2], vec![Token::plain("b")]);
}

#[test]
fn unknown_tag_renders_plain() {
    let lines = tokenize_tagged("fn main() {}", "rust");
    assert_eq!(lines, vec![vec![Token::plain("fn main() {}")]]);
}

#[test]
fn lines_reassemble_exactly() {
    let code = "const s = 'héllo'; // é\nlet t = `x ${y}`;\n\treturn f(1.5)";
    for lang in Language::ALL {
        let lines = tokenize(code, lang);
        let rebuilt: Vec<String> = lines
            .iter()
            .map(|l| l.iter().map(|t| t.value.as_str()).collect())
            .collect();
        assert_eq!(rebuilt.join("\n"), code, "{lang:?}");
    }
}

#[test]
fn empty_matches_terminate() {
    let rule = TokenRule::new("x*", TokenKind::Plain).unwrap();
    let mut claims = Vec::new();
    collect_claims("abé", &rule, &mut claims);
    assert!(claims.is_empty());
}

#[test]
fn non_ascii_letters_are_not_word_characters() {
    let lines = tokenize("const é1 = 2;", Language::Javascript);
    assert_eq!(
        kinds_and_values(&lines[0]),
        vec![
            (TokenKind::Keyword, "const"),
            (TokenKind::Plain, " é"),
            (TokenKind::Number, "1"),
            (TokenKind::Plain, " "),
            (TokenKind::Operator, "="),
            (TokenKind::Plain, " "),
            (TokenKind::Number, "2"),
            (TokenKind::Punctuation, ";"),
        ]
    );

    let lines = tokenize("x = \u{663};", Language::Javascript);
    assert_eq!(
        kinds_and_values(&lines[0]),
        vec![
            (TokenKind::Plain, "x "),
            (TokenKind::Operator, "="),
            (TokenKind::Plain, " \u{663}"),
            (TokenKind::Punctuation, ";"),
        ]
    );
}
