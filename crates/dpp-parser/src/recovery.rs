//! Error recovery strategies for the parser.
//!
//! This module provides utilities for recovering from parse errors
//! so the parser can continue and report multiple errors.

use dpp_lexer::TokenKind;

/// Tokens that typically start a new statement.
pub const STMT_STARTS: &[TokenKind] = &[
    TokenKind::Fct,
    TokenKind::If,
    TokenKind::Else,
    TokenKind::While,
    TokenKind::Wield,
    TokenKind::Canvas,
    TokenKind::KwInt,
    TokenKind::KwFloat,
    TokenKind::KwBool,
    TokenKind::KwString,
    TokenKind::KwCursor,
];

/// Tokens that typically end a statement.
pub const STMT_ENDS: &[TokenKind] = &[TokenKind::Semicolon, TokenKind::RBrace];

/// Check if a token kind is in a set.
pub fn is_in_set(kind: &TokenKind, set: &[TokenKind]) -> bool {
    set.iter()
        .any(|k| std::mem::discriminant(k) == std::mem::discriminant(kind))
}

/// Check if a token starts a statement.
pub fn is_stmt_start(kind: &TokenKind) -> bool {
    is_in_set(kind, STMT_STARTS)
}

/// Check if a token ends a statement.
pub fn is_stmt_end(kind: &TokenKind) -> bool {
    is_in_set(kind, STMT_ENDS)
}
