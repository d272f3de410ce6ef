//! Draw++ CLI - The Draw++ language command line interface.
//! Draw++ CLI - Draw++ 语言的命令行界面。

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};

/// Main CLI structure.
/// 主 CLI 结构体。
#[derive(Parser)]
#[command(name = "dpp")]
#[command(author, version, about = "Draw++ - A small procedural drawing language", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output. / 启用详细输出。
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress output. / 抑制输出。
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Available CLI commands.
/// 可用的 CLI 命令。
#[derive(Subcommand)]
enum Commands {
    /// Parse a file and report diagnostics. / 解析文件并报告诊断信息。
    Check {
        /// The file to check. / 要检查的文件。
        file: String,

        /// One diagnostic per line, without colors or source excerpts.
        /// 每行一条诊断，不带颜色和源码摘录。
        #[arg(long)]
        plain: bool,
    },

    /// Parse a file and print its syntax tree. / 解析文件并打印语法树。
    Ast {
        /// The file to parse. / 要解析的文件。
        file: String,
    },

    /// Dump the token stream of a file. / 输出文件的 token 流。
    Tokens {
        /// The file to tokenize. / 要分词的文件。
        file: String,
    },
}

/// Main entry point.
/// 主入口点。
fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check { file, plain } => commands::check::run(&file, plain, cli.verbose),
        Commands::Ast { file } => commands::ast::run(&file, cli.verbose),
        Commands::Tokens { file } => commands::tokens::run(&file),
    };

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("error: {}", e);
        }
        std::process::exit(1);
    }
}
