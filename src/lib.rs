//! Lintrank core library.
//!
//! Reads an ESLint-style JSON report, aggregates error counts by rule and by
//! file, and ranks the top offenders of each.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `decode`: Encoding-fallback report reading (UTF-16 first, UTF-8 second).
//! - `analyze`: Parsing, shape check, aggregation, and ranking.
//! - `models`: Report schema and ranked output structs.
//! - `output`: Human/JSON printers.
pub mod analyze;
pub mod cli;
pub mod decode;
pub mod models;
pub mod output;
