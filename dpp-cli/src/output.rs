//! Status lines printed after the diagnostics.
//! 诊断信息之后打印的状态行。
//!
//! The diagnostics themselves are rendered by ariadne; these helpers only
//! produce the one-line verdict and the `--verbose` detail lines that
//! follow them.
//! 详细诊断由 ariadne 渲染，这里只负责其后的单行结论与 `--verbose` 细节行。

const RESET: &str = "\x1b[0m";
const GREEN: &str = "\x1b[1;32m";
const YELLOW: &str = "\x1b[1;33m";
const RED: &str = "\x1b[1;31m";
const DIM: &str = "\x1b[2m";

/// One-line verdict for a checked Draw++ file.
/// 针对一个 Draw++ 文件的单行检查结论。
pub fn verdict(path: &str, errors: usize, warnings: usize) {
    match (errors, warnings) {
        (0, 0) => println!("{GREEN}ok{RESET}: {path} parses cleanly"),
        (0, w) => println!(
            "{YELLOW}ok{RESET}: {path} parses with {}",
            count(w, "warning")
        ),
        (e, 0) => eprintln!("{RED}failed{RESET}: {path} has {}", count(e, "error")),
        (e, w) => eprintln!(
            "{RED}failed{RESET}: {path} has {} and {}",
            count(e, "error"),
            count(w, "warning")
        ),
    }
}

/// A dimmed detail line, shown with `--verbose`.
/// 暗色细节行，随 `--verbose` 显示。
pub fn detail(msg: &str) {
    println!("{DIM}  {msg}{RESET}");
}

/// `1 error`, `2 errors`.
fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {noun}")
    } else {
        format!("{n} {noun}s")
    }
}
