//! AST and syntax definitions for Draw++.
//!
//! This crate defines the abstract syntax tree produced by the parser.
//! The tree is error-tolerant: broken constructs are represented by
//! placeholder nodes so that later stages always have something to walk.

mod ast;
mod expr;
mod types;

pub use ast::*;
pub use expr::*;
pub use types::*;
