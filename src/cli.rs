//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "lintrank",
    version,
    about = "Rank lint errors by rule and by file",
    long_about = "Lintrank — a tiny CLI that reads an ESLint JSON report and prints the top 10 error types and the top 10 files by error count.",
    after_help = "Examples:\n  lintrank\n  lintrank --report build/lint-report.json\n  lintrank --output json"
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(long, help = "Path to the lint report (default: lint-report.json)")]
    pub report: Option<String>,
    #[arg(long, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
}
