//! Report analysis: parse, shape check, aggregation, and ranking.
//!
//! Aggregation is fully staged before anything is printed, so a failure can
//! never leave a half-printed ranking behind.

use crate::decode::{self, ReadError};
use crate::models::{FileCount, FileEntry, Rankings, RuleCount};
use serde_json::Value as Json;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Both rankings keep at most this many entries.
pub const RANK_LIMIT: usize = 10;

/// Rule bucket for messages that carry no rule id.
const UNKNOWN_RULE: &str = "unknown";

#[derive(Debug, Error)]
/// Failure surfaced through the top-level `Error analyzing report:` line.
pub enum AnalyzeError {
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error(transparent)]
    Parse(#[from] serde_json::Error),
}

/// What a run produced: rankings, or the non-list diagnostic.
#[derive(Debug)]
pub enum Outcome {
    Rankings(Rankings),
    NotAList,
}

/// Read, decode, parse, and rank the report at `path`.
pub fn run_report(path: &Path) -> Result<Outcome, AnalyzeError> {
    let text = decode::read_report(path)?;
    let root: Json = serde_json::from_str(&text)?;
    if !root.is_array() {
        return Ok(Outcome::NotAList);
    }
    let entries: Vec<FileEntry> = serde_json::from_value(root)?;
    Ok(Outcome::Rankings(rank_entries(&entries)))
}

/// Build both frequency tables in one pass over the entries, then rank.
///
/// Entries without messages contribute to neither table. A repeated file
/// path overwrites its count (later entry wins) while keeping its
/// first-seen position for tie ordering.
pub fn rank_entries(entries: &[FileEntry]) -> Rankings {
    let mut rule_counts = OrderedCounts::new();
    let mut file_counts = OrderedCounts::new();
    for entry in entries {
        if entry.messages.is_empty() {
            continue;
        }
        file_counts.set(&entry.file_path, entry.messages.len());
        for msg in &entry.messages {
            rule_counts.add(msg.rule_id.as_deref().unwrap_or(UNKNOWN_RULE));
        }
    }
    Rankings {
        rules: rule_counts
            .into_ranked()
            .into_iter()
            .map(|(rule, count)| RuleCount { rule, count })
            .collect(),
        files: file_counts
            .into_ranked()
            .into_iter()
            .map(|(file, count)| FileCount { file, count })
            .collect(),
    }
}

/// Counter that remembers first-seen insertion order. The stable sort in
/// `into_ranked` then breaks count ties in favor of earlier keys.
struct OrderedCounts {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl OrderedCounts {
    fn new() -> Self {
        OrderedCounts {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    fn slot(&mut self, key: &str) -> usize {
        if let Some(&pos) = self.index.get(key) {
            return pos;
        }
        let pos = self.entries.len();
        self.index.insert(key.to_string(), pos);
        self.entries.push((key.to_string(), 0));
        pos
    }

    /// Increment the count for `key` by one.
    fn add(&mut self, key: &str) {
        let pos = self.slot(key);
        self.entries[pos].1 += 1;
    }

    /// Overwrite the count for `key`, keeping its first-seen position.
    fn set(&mut self, key: &str, count: usize) {
        let pos = self.slot(key);
        self.entries[pos].1 = count;
    }

    /// Sort descending by count (stable) and truncate to the rank limit.
    fn into_ranked(self) -> Vec<(String, usize)> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(RANK_LIMIT);
        entries
    }
}
