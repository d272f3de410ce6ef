//! CLI command implementations.

pub mod ast;
pub mod check;
pub mod tokens;
