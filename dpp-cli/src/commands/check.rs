//! The `dpp check` command.
//! `dpp check` 命令。

use crate::error::CliError;
use crate::output;
use dpp_common::SourceBuffer;
use dpp_diagnostic::{emit, render_compact};
use dpp_parser::parse;
use std::fs;

/// Parse a Draw++ file and report its diagnostics.
/// 解析 Draw++ 文件并报告诊断信息。
pub fn run(file: &str, plain: bool, verbose: bool) -> Result<(), CliError> {
    let source = fs::read_to_string(file).map_err(|e| CliError::ReadFile {
        path: file.to_string(),
        source: e,
    })?;

    let (program, diagnostics) = parse(&source);

    if plain {
        let buffer = SourceBuffer::new(source.as_str());
        for diag in &diagnostics {
            eprintln!("{}", render_compact(&buffer, file, diag));
        }
    } else {
        for diag in &diagnostics {
            emit(&source, file, diag);
        }
    }

    if verbose {
        output::detail(&format!("parsed {} statement(s)", program.stmts.len()));
    }

    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    let warnings = diagnostics.len() - errors;

    output::verdict(file, errors, warnings);

    if errors > 0 {
        return Err(CliError::CheckFailed {
            count: errors,
            path: file.to_string(),
        });
    }

    Ok(())
}
