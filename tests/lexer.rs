//! Integration tests for dpp-lexer crate.

use dpp_common::Span;
use dpp_lexer::{Lexer, Token, TokenKind};

fn lex(source: &str) -> Vec<TokenKind> {
    let lexer = Lexer::new(source);
    let (tokens, diags) = lexer.tokenize();
    assert!(diags.is_empty(), "unexpected lexer errors: {diags:?}");
    tokens.into_iter().map(|t| t.kind).collect()
}

fn lex_with_errors(source: &str) -> (Vec<TokenKind>, usize) {
    let lexer = Lexer::new(source);
    let (tokens, errors) = lexer.tokenize();
    (tokens.into_iter().map(|t| t.kind).collect(), errors.len())
}

fn lex_tokens(source: &str) -> Vec<Token> {
    let lexer = Lexer::new(source);
    let (tokens, _) = lexer.tokenize();
    tokens
}

// ============================================================================
// Keyword and Identifier Tests
// ============================================================================

#[test]
fn test_keywords() {
    assert_eq!(
        lex("fct if else while wield canvas and or not true false"),
        vec![
            TokenKind::Fct,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::While,
            TokenKind::Wield,
            TokenKind::Canvas,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Not,
            TokenKind::True,
            TokenKind::False,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_type_keywords() {
    assert_eq!(
        lex("int float bool string cursor"),
        vec![
            TokenKind::KwInt,
            TokenKind::KwFloat,
            TokenKind::KwBool,
            TokenKind::KwString,
            TokenKind::KwCursor,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_keyword_matching_is_exact() {
    // Near-keywords stay identifiers
    assert_eq!(
        lex("iff wieldx If _while"),
        vec![
            TokenKind::Ident("iff".to_string()),
            TokenKind::Ident("wieldx".to_string()),
            TokenKind::Ident("If".to_string()),
            TokenKind::Ident("_while".to_string()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_unicode_identifiers() {
    assert_eq!(
        lex("пример 画布 _x9"),
        vec![
            TokenKind::Ident("пример".to_string()),
            TokenKind::Ident("画布".to_string()),
            TokenKind::Ident("_x9".to_string()),
            TokenKind::Eof,
        ]
    );
}

// ============================================================================
// Number Tests
// ============================================================================

#[test]
fn test_numbers() {
    assert_eq!(
        lex("42 3.25 0 0.5"),
        vec![
            TokenKind::Int(42),
            TokenKind::Float(3.25),
            TokenKind::Int(0),
            TokenKind::Float(0.5),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_dot_without_digit_is_not_consumed() {
    // `5.x`: the dot is not part of the number, and `.` itself is not a
    // Draw++ token, so it is reported and skipped.
    let (kinds, errors) = lex_with_errors("5.x");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Int(5),
            TokenKind::Ident("x".to_string()),
            TokenKind::Eof,
        ]
    );
    assert_eq!(errors, 1);
}

// ============================================================================
// String Tests
// ============================================================================

#[test]
fn test_string_literal() {
    assert_eq!(
        lex(r#""hello world""#),
        vec![TokenKind::String("hello world".to_string()), TokenKind::Eof]
    );
}

#[test]
fn test_string_escapes() {
    assert_eq!(
        lex(r#""line1\nline2 \"quoted\" back\\slash""#),
        vec![
            TokenKind::String("line1\nline2 \"quoted\" back\\slash".to_string()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_string_keeps_raw_newlines_and_unicode() {
    assert_eq!(
        lex("\"a\nb é\""),
        vec![TokenKind::String("a\nb é".to_string()), TokenKind::Eof]
    );
}

#[test]
fn test_unknown_escape_drops_character() {
    let (kinds, errors) = lex_with_errors(r#""a\qb""#);
    assert_eq!(
        kinds,
        vec![TokenKind::String("ab".to_string()), TokenKind::Eof]
    );
    assert_eq!(errors, 1);
}

#[test]
fn test_unterminated_string_still_produces_token() {
    let (kinds, errors) = lex_with_errors("\"abc");
    assert_eq!(
        kinds,
        vec![TokenKind::String("abc".to_string()), TokenKind::Eof]
    );
    assert_eq!(errors, 1);

    // The error is anchored at the opening quote
    let lexer = Lexer::new("\"abc");
    let (_, diags) = lexer.tokenize();
    assert_eq!(diags[0].span.start.0, 0);
}

// ============================================================================
// Operator and Punctuation Tests
// ============================================================================

#[test]
fn test_operators_longest_match() {
    assert_eq!(
        lex("< <= > >= = == !="),
        vec![
            TokenKind::Lt,
            TokenKind::LtEq,
            TokenKind::Gt,
            TokenKind::GtEq,
            TokenKind::Eq,
            TokenKind::EqEq,
            TokenKind::BangEq,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_punctuation() {
    assert_eq!(
        lex("( ) { } , ; + - * /"),
        vec![
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_lone_bang_is_an_error() {
    let (kinds, errors) = lex_with_errors("a ! b");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Ident("a".to_string()),
            TokenKind::Ident("b".to_string()),
            TokenKind::Eof,
        ]
    );
    assert_eq!(errors, 1);
}

// ============================================================================
// Comment and Whitespace Tests
// ============================================================================

#[test]
fn test_line_comments() {
    assert_eq!(
        lex("1 // comment with symbols @ # $\n2"),
        vec![TokenKind::Int(1), TokenKind::Int(2), TokenKind::Eof]
    );
}

#[test]
fn test_comment_at_end_of_input() {
    assert_eq!(lex("1 // trailing"), vec![TokenKind::Int(1), TokenKind::Eof]);
}

#[test]
fn test_long_comment_runs_lex_flat() {
    // Thousands of consecutive comment lines must not deepen the stack.
    let source = "// nothing to see here\n".repeat(50_000);
    assert_eq!(lex(&source), vec![TokenKind::Eof]);
}

// ============================================================================
// Error and Span Tests
// ============================================================================

#[test]
fn test_unrecognized_characters_skipped_one_by_one() {
    let (kinds, errors) = lex_with_errors("a @ $ b");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Ident("a".to_string()),
            TokenKind::Ident("b".to_string()),
            TokenKind::Eof,
        ]
    );
    assert_eq!(errors, 2);
}

#[test]
fn test_long_junk_runs_lex_flat() {
    // One diagnostic per character, and no stack growth either.
    let junk = "@".repeat(50_000);
    let (kinds, errors) = lex_with_errors(&junk);
    assert_eq!(kinds, vec![TokenKind::Eof]);
    assert_eq!(errors, 50_000);
}

#[test]
fn test_spans_are_byte_accurate() {
    let tokens = lex_tokens("int x = 5;");
    assert_eq!(tokens[0].span, Span::from_usize(0, 3)); // int
    assert_eq!(tokens[1].span, Span::from_usize(4, 5)); // x
    assert_eq!(tokens[2].span, Span::from_usize(6, 7)); // =
    assert_eq!(tokens[3].span, Span::from_usize(8, 9)); // 5
    assert_eq!(tokens[4].span, Span::from_usize(9, 10)); // ;
}

#[test]
fn test_eof_is_zero_length() {
    let tokens = lex_tokens("x");
    let eof = tokens.last().unwrap();
    assert_eq!(eof.kind, TokenKind::Eof);
    assert!(eof.span.is_empty());
    assert_eq!(eof.span.start.0, 1);
}

#[test]
fn test_empty_input() {
    let tokens = lex_tokens("");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
    assert_eq!(tokens[0].span, Span::from_usize(0, 0));
}

#[test]
fn test_multibyte_identifier_spans() {
    // "пример" is 12 bytes long
    let tokens = lex_tokens("int пример = 5;");
    assert_eq!(tokens[1].span, Span::from_usize(4, 16));
    assert_eq!(tokens[2].span, Span::from_usize(17, 18)); // =
}
