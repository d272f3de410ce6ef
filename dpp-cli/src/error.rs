//! Driver-level errors.

use thiserror::Error;

/// Errors the CLI driver itself can fail with. Problems in the source text
/// are diagnostics, not `CliError`s.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read file '{path}': {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{count} error(s) found in '{path}'")]
    CheckFailed { count: usize, path: String },
}
