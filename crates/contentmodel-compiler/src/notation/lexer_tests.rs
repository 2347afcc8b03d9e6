use super::lexer::{TokenKind, lex, token_text};

fn snapshot(input: &str) -> String {
    let mut out = String::new();
    for token in lex(input) {
        out.push_str(&format!(
            "{:?} {:?}\n",
            token.kind,
            token_text(input, &token)
        ));
    }
    out
}

#[test]
fn punctuation() {
    insta::assert_snapshot!(snapshot("( ) , | & ? * +"), @r#"
    ParenOpen "("
    ParenClose ")"
    Comma ","
    Pipe "|"
    Ampersand "&"
    Question "?"
    Star "*"
    Plus "+"
    "#);
}

#[test]
fn group_with_occurrences() {
    insta::assert_snapshot!(snapshot("(a, b?)*"), @r#"
    ParenOpen "("
    Name "a"
    Comma ","
    Name "b"
    Question "?"
    ParenClose ")"
    Star "*"
    "#);
}

#[test]
fn pcdata_any_case() {
    insta::assert_snapshot!(snapshot("#PCDATA #pcdata"), @r##"
    Pcdata "#PCDATA"
    Pcdata "#pcdata"
    "##);
}

#[test]
fn names_with_punctuation() {
    insta::assert_snapshot!(snapshot("h1 x.y sub-item"), @r#"
    Name "h1"
    Name "x.y"
    Name "sub-item"
    "#);
}

#[test]
fn garbage_is_coalesced() {
    let tokens = lex("(a $$$ b)");
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::ParenOpen,
            TokenKind::Name,
            TokenKind::Garbage,
            TokenKind::Name,
            TokenKind::ParenClose,
        ]
    );
    assert_eq!(tokens[2].span, 3..6);
}

#[test]
fn whitespace_is_dropped() {
    assert!(lex(" \n\t ").is_empty());
}
