//! Shared data models: the report schema and ranked output structs.

use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
/// One linted file from the report. Absent fields fall back to defaults so
/// aggregation never sees a missing key.
pub struct FileEntry {
    #[serde(default, rename = "filePath")]
    pub file_path: String,
    #[serde(default)]
    pub messages: Vec<Message>,
}

#[derive(Deserialize)]
/// A single diagnostic message. ESLint writes `"ruleId": null` for
/// parse-level messages; null and an absent key both count as unknown.
pub struct Message {
    #[serde(default, rename = "ruleId")]
    pub rule_id: Option<String>,
}

#[derive(Serialize, Debug)]
/// A ranked rule with its total occurrence count.
pub struct RuleCount {
    pub rule: String,
    pub count: usize,
}

#[derive(Serialize, Debug)]
/// A ranked file with its message count. Holds the full path; shortening
/// happens at print time.
pub struct FileCount {
    pub file: String,
    pub count: usize,
}

#[derive(Serialize, Debug)]
/// Both rankings, already sorted and truncated.
pub struct Rankings {
    pub rules: Vec<RuleCount>,
    pub files: Vec<FileCount>,
}
