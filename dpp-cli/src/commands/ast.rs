//! The `dpp ast` command.
//! `dpp ast` 命令。

use crate::error::CliError;
use crate::output;
use dpp_diagnostic::emit;
use dpp_parser::parse;
use std::fs;

/// Parse a Draw++ file and print its syntax tree.
/// 解析 Draw++ 文件并打印其语法树。
///
/// The tree is printed even when the input has errors; broken constructs
/// show up as placeholder nodes.
/// 即使输入有错误也会打印语法树，损坏的结构显示为占位符节点。
pub fn run(file: &str, verbose: bool) -> Result<(), CliError> {
    let source = fs::read_to_string(file).map_err(|e| CliError::ReadFile {
        path: file.to_string(),
        source: e,
    })?;

    let (program, diagnostics) = parse(&source);

    for diag in &diagnostics {
        emit(&source, file, diag);
    }

    println!("{program:#?}");

    if verbose {
        output::detail(&format!("{} diagnostic(s)", diagnostics.len()));
    }

    Ok(())
}
