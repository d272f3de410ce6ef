//! Parser for Draw++.
//!
//! This crate provides a recursive descent parser that converts
//! tokens into an abstract syntax tree.
//!
//! ## Error Recovery
//!
//! The parser implements error recovery to continue parsing after
//! encountering errors, allowing multiple errors to be reported
//! in a single parse pass. Broken constructs become placeholder
//! nodes rather than holes in the tree.

mod parser;
mod recovery;

pub use parser::Parser;

use dpp_diagnostic::Diagnostic;
use dpp_lexer::Lexer;
use dpp_syntax::Program;

/// Parse source code into an AST.
///
/// Always returns a `Program`; broken input is reflected in the diagnostics
/// and in placeholder nodes, never in an absent tree. Lexer diagnostics come
/// before parser diagnostics.
pub fn parse(source: &str) -> (Program, Vec<Diagnostic>) {
    let lexer = Lexer::new(source);
    let (tokens, mut diagnostics) = lexer.tokenize();

    let mut parser = Parser::new(tokens);
    let program = parser.parse_program();

    diagnostics.extend(parser.diagnostics());
    (program, diagnostics)
}
