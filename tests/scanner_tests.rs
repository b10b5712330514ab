// Integration tests for the scanner

use rlox::diagnostics::CollectingReporter;
use rlox::parser::lexer::scan;
use rlox::parser::token::{Literal, Token, TokenKind};

fn scan_ok(source: &str) -> Vec<Token> {
    let mut reporter = CollectingReporter::new();
    let tokens = scan(source, &mut reporter);
    assert!(
        !reporter.had_error(),
        "unexpected diagnostics: {:?}",
        reporter.diagnostics
    );
    tokens
}

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

#[test]
fn test_whitespace_and_comments_only() {
    let tokens = scan_ok("  \t\r\n// nothing here\n\n   // trailing comment");
    assert_eq!(kinds(&tokens), vec![TokenKind::Eof]);
    assert_eq!(tokens[0].line, 4);
}

#[test]
fn test_two_character_operators_are_maximal() {
    let tokens = scan_ok("!= == <= >= ! = < >");
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::BangEqual,
            TokenKind::EqualEqual,
            TokenKind::LessEqual,
            TokenKind::GreaterEqual,
            TokenKind::Bang,
            TokenKind::Equal,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Eof,
        ]
    );

    let glued = scan_ok("!=!");
    assert_eq!(
        kinds(&glued),
        vec![TokenKind::BangEqual, TokenKind::Bang, TokenKind::Eof]
    );
}

#[test]
fn test_number_never_takes_trailing_dot() {
    let tokens = scan_ok("123.");
    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::Number, TokenKind::Dot, TokenKind::Eof]
    );
    assert_eq!(tokens[0].literal, Some(Literal::Number(123.0)));
    assert_eq!(tokens[0].lexeme, "123");
}

#[test]
fn test_number_never_takes_second_dot() {
    let tokens = scan_ok("123.4.5");
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Number,
            TokenKind::Dot,
            TokenKind::Number,
            TokenKind::Eof
        ]
    );
    assert_eq!(tokens[0].literal, Some(Literal::Number(123.4)));
    assert_eq!(tokens[2].literal, Some(Literal::Number(5.0)));
}

#[test]
fn test_multiline_string_advances_line() {
    let tokens = scan_ok("\"one\ntwo\nthree\" after");
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(
        tokens[0].literal,
        Some(Literal::Str("one\ntwo\nthree".to_string()))
    );
    assert_eq!(tokens[0].line, 1);

    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].line, 3);
    assert_eq!(tokens[2].kind, TokenKind::Eof);
    assert_eq!(tokens[2].line, 3);
}

#[test]
fn test_every_keyword_scans_to_its_kind() {
    for (text, kind) in TokenKind::KEYWORDS {
        let tokens = scan_ok(text);
        assert_eq!(kinds(&tokens), vec![kind, TokenKind::Eof], "{}", text);
    }
}

#[test]
fn test_keyword_prefixes_are_identifiers() {
    let tokens = scan_ok("orchid classy nil_ _true Fun");
    assert!(tokens[..5].iter().all(|t| t.kind == TokenKind::Identifier));
}

#[test]
fn test_errors_are_reported_and_scanning_continues() {
    let mut reporter = CollectingReporter::new();
    let tokens = scan("1 # 2\n\"open", &mut reporter);

    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::Number, TokenKind::Number, TokenKind::Eof]
    );
    assert_eq!(
        reporter.messages(),
        vec!["Unexpected character '#'.", "Unterminated string."]
    );
    assert_eq!(reporter.diagnostics[0].line, 1);
    assert_eq!(reporter.diagnostics[0].location, "");
    assert_eq!(reporter.diagnostics[1].line, 2);
}
