//! Lintrank CLI binary entry point.
//! Reads the report, ranks rules and files, and prints the result.

use clap::Parser;
use lintrank::analyze::{self, Outcome};
use lintrank::cli::Cli;
use lintrank::output;
use std::path::Path;

fn main() {
    let cli = Cli::parse();
    let output_mode = cli.output.unwrap_or_else(|| "human".to_string());
    let report = cli.report.unwrap_or_else(|| "lint-report.json".to_string());
    // Every outcome, failures included, goes to stdout; the exit status is
    // always 0.
    match analyze::run_report(Path::new(&report)) {
        Ok(Outcome::Rankings(res)) => output::print_rankings(&res, &output_mode),
        Ok(Outcome::NotAList) => output::print_not_a_list(&output_mode),
        Err(e) => output::print_failure(&e.to_string(), &output_mode),
    }
}
