//! The `dpp tokens` command.
//! `dpp tokens` 命令。

use crate::error::CliError;
use dpp_diagnostic::emit;
use dpp_lexer::Lexer;
use std::fs;

/// Dump the token stream of a Draw++ file with spans.
/// 输出 Draw++ 文件的 token 流及其范围。
pub fn run(file: &str) -> Result<(), CliError> {
    let source = fs::read_to_string(file).map_err(|e| CliError::ReadFile {
        path: file.to_string(),
        source: e,
    })?;

    let (tokens, diagnostics) = Lexer::new(&source).tokenize();

    for diag in &diagnostics {
        emit(&source, file, diag);
    }

    for token in &tokens {
        println!("{:<12} {:?}", format!("{:?}", token.span), token.kind);
    }

    Ok(())
}
