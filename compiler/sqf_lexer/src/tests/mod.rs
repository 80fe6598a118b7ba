use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn kinds(source: &str) -> Vec<LexKind> {
    lex(source).into_iter().map(|lexeme| lexeme.kind).collect()
}

#[test]
fn lexes_assignment() {
    assert_eq!(
        kinds("_x = 2;"),
        vec![
            LexKind::Ident("_x".into()),
            LexKind::Operator("="),
            LexKind::Number(2.0),
            LexKind::Semicolon,
            LexKind::Eof,
        ]
    );
}

#[test]
fn prefers_longest_operator() {
    assert_eq!(
        kinds("a == b != c >= d && !e"),
        vec![
            LexKind::Ident("a".into()),
            LexKind::Operator("=="),
            LexKind::Ident("b".into()),
            LexKind::Operator("!="),
            LexKind::Ident("c".into()),
            LexKind::Operator(">="),
            LexKind::Ident("d".into()),
            LexKind::Operator("&&"),
            LexKind::Operator("!"),
            LexKind::Ident("e".into()),
            LexKind::Eof,
        ]
    );
}

#[test]
fn lexes_number_forms() {
    assert_eq!(
        kinds("1 2.5 .5 1e3 0x1F $ff"),
        vec![
            LexKind::Number(1.0),
            LexKind::Number(2.5),
            LexKind::Number(0.5),
            LexKind::Number(1000.0),
            LexKind::Number(31.0),
            LexKind::Number(255.0),
            LexKind::Eof,
        ]
    );
}

#[test]
fn lexes_strings_with_doubled_quotes() {
    assert_eq!(
        kinds(r#""say ""hi""" 'it''s'"#),
        vec![
            LexKind::Text("say \"hi\"".into()),
            LexKind::Text("it's".into()),
            LexKind::Eof,
        ]
    );
}

#[test]
fn skips_comments() {
    assert_eq!(
        kinds("// line\n_a /* block\n still */ ;"),
        vec![
            LexKind::Ident("_a".into()),
            LexKind::Semicolon,
            LexKind::Eof,
        ]
    );
}

#[test]
fn block_comment_on_one_line() {
    assert_eq!(
        kinds("_x = 1 /* c */;"),
        vec![
            LexKind::Ident("_x".into()),
            LexKind::Operator("="),
            LexKind::Number(1.0),
            LexKind::Semicolon,
            LexKind::Eof,
        ]
    );
}

#[test]
fn block_comment_ends_at_first_close() {
    assert_eq!(
        kinds("/* a */ 1 /* b ** */ * 2"),
        vec![
            LexKind::Number(1.0),
            LexKind::Operator("*"),
            LexKind::Number(2.0),
            LexKind::Eof,
        ]
    );
}

#[test]
fn unterminated_block_comment() {
    let lexemes = lex("_x; /* open");
    assert_eq!(lexemes[2].kind, LexKind::UnterminatedComment);
    assert_eq!(lexemes[2].span, Span::new(4, 11));
    assert_eq!(lexemes[3].kind, LexKind::Eof);
}

#[test]
fn delimiters() {
    assert_eq!(
        kinds("{[(,)]}"),
        vec![
            LexKind::LBrace,
            LexKind::LBracket,
            LexKind::LParen,
            LexKind::Comma,
            LexKind::RParen,
            LexKind::RBracket,
            LexKind::RBrace,
            LexKind::Eof,
        ]
    );
}

#[test]
fn invalid_character_becomes_error_lexeme() {
    let lexemes = lex("_a @ 1");
    assert_eq!(lexemes[1].kind, LexKind::Invalid);
    assert_eq!(lexemes[1].span, Span::new(3, 4));
}

#[test]
fn records_spans() {
    let lexemes = lex("hint \"x\"");
    assert_eq!(lexemes[0].span, Span::new(0, 4));
    assert_eq!(lexemes[1].span, Span::new(5, 8));
    assert_eq!(lexemes[2].span, Span::point(8));
}

proptest! {
    #[test]
    fn integers_round_trip(n in any::<u32>()) {
        let lexemes = lex(&n.to_string());
        prop_assert_eq!(lexemes.len(), 2);
        prop_assert_eq!(&lexemes[0].kind, &LexKind::Number(f64::from(n)));
    }

    #[test]
    fn identifiers_are_single_tokens(name in "[a-z_][a-z0-9_]{0,12}") {
        let lexemes = lex(&name);
        prop_assert_eq!(&lexemes[0].kind, &LexKind::Ident(name.clone()));
        prop_assert_eq!(&lexemes[1].kind, &LexKind::Eof);
    }
}
