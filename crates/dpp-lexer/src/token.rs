//! Token definitions for Draw++.

use dpp_common::Span;

/// A token with its kind and span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// The kind of a token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    Int(i64),
    Float(f64),
    String(String),

    // Identifiers
    Ident(String),

    // Keywords
    Fct,
    If,
    Else,
    While,
    Wield,
    Canvas,
    And,
    Or,
    Not,
    True,
    False,

    // Type keywords
    KwInt,    // int
    KwFloat,  // float
    KwBool,   // bool
    KwString, // string
    KwCursor, // cursor

    // Delimiters
    LParen, // (
    RParen, // )
    LBrace, // {
    RBrace, // }

    // Operators
    Plus,   // +
    Minus,  // -
    Star,   // *
    Slash,  // /
    Eq,     // =
    EqEq,   // ==
    BangEq, // !=
    Lt,     // <
    LtEq,   // <=
    Gt,     // >
    GtEq,   // >=

    // Punctuation
    Comma,     // ,
    Semicolon, // ;

    // Special
    Eof,
}

impl TokenKind {
    /// Returns true if this token is a keyword.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Fct
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::While
                | TokenKind::Wield
                | TokenKind::Canvas
                | TokenKind::And
                | TokenKind::Or
                | TokenKind::Not
                | TokenKind::True
                | TokenKind::False
                | TokenKind::KwInt
                | TokenKind::KwFloat
                | TokenKind::KwBool
                | TokenKind::KwString
                | TokenKind::KwCursor
        )
    }

    /// Returns true if this token is a built-in type keyword.
    pub fn is_type_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::KwInt
                | TokenKind::KwFloat
                | TokenKind::KwBool
                | TokenKind::KwString
                | TokenKind::KwCursor
        )
    }

    /// Returns the keyword for an identifier, if any.
    pub fn keyword_from_str(s: &str) -> Option<TokenKind> {
        match s {
            "fct" => Some(TokenKind::Fct),
            "if" => Some(TokenKind::If),
            "else" => Some(TokenKind::Else),
            "while" => Some(TokenKind::While),
            "wield" => Some(TokenKind::Wield),
            "canvas" => Some(TokenKind::Canvas),
            "and" => Some(TokenKind::And),
            "or" => Some(TokenKind::Or),
            "not" => Some(TokenKind::Not),
            "true" => Some(TokenKind::True),
            "false" => Some(TokenKind::False),
            "int" => Some(TokenKind::KwInt),
            "float" => Some(TokenKind::KwFloat),
            "bool" => Some(TokenKind::KwBool),
            "string" => Some(TokenKind::KwString),
            "cursor" => Some(TokenKind::KwCursor),
            _ => None,
        }
    }
}
