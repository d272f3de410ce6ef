//! Common utilities and data structures for the Draw++ compiler.
//!
//! This crate provides foundational types used across the compiler:
//! - `Span`: Source code location tracking
//! - `SourceBuffer`: Source text access and line/column computation

mod source;
mod span;

pub use source::{LineCol, SourceBuffer};
pub use span::{BytePos, Span};
