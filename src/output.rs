//! Output rendering for the rankings and diagnostics.
//!
//! Supports `human` (default) and `json` outputs. The human form is the
//! report contract; color only decorates the headers when stdout is a
//! terminal, so redirected output stays byte-exact.

use crate::models::Rankings;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

/// Workspace prefix baked into absolute paths by the CI environment.
/// Printed paths keep only what follows its last occurrence.
const PATH_PREFIX_MARKER: &str = "Akapoolco";

fn use_colors(output: &str) -> bool {
    output != "json"
        && std::env::var_os("NO_COLOR").is_none()
        && std::io::stdout().is_terminal()
}

/// Print both rankings in the requested format.
pub fn print_rankings(res: &Rankings, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_rankings_json(res)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            print_header("--- Top 10 Error Types ---", color);
            for rc in &res.rules {
                println!("{}: {}", rc.rule, rc.count);
            }
            println!();
            print_header("--- Top 10 Files by Error Count ---", color);
            for fc in &res.files {
                println!("{}: {}", shorten_path(&fc.file), fc.count);
            }
        }
    }
}

fn print_header(text: &str, color: bool) {
    if color {
        println!("{}", text.bold());
    } else {
        println!("{}", text);
    }
}

/// Print the non-list diagnostic. Not an error; the catch-all line is
/// reserved for read/parse failures.
pub fn print_not_a_list(output: &str) {
    print_diagnostic("Report is not a list. Format might be wrong.", output);
}

/// Print the top-level failure line for a read or parse error.
pub fn print_failure(message: &str, output: &str) {
    print_diagnostic(&format!("Error analyzing report: {}", message), output);
}

fn print_diagnostic(line: &str, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&json!({ "error": line })).unwrap()
        ),
        _ => println!("{}", line),
    }
}

/// Shorten a path for display: keep only what follows the last occurrence
/// of the workspace marker, or the whole path when the marker is absent.
pub fn shorten_path(path: &str) -> &str {
    match path.rfind(PATH_PREFIX_MARKER) {
        Some(pos) => &path[pos + PATH_PREFIX_MARKER.len()..],
        None => path,
    }
}

/// Compose the rankings JSON object (pure) for testing/snapshot purposes.
pub fn compose_rankings_json(res: &Rankings) -> JsonVal {
    let rules: Vec<_> = res
        .rules
        .iter()
        .map(|rc| json!({"rule": rc.rule, "count": rc.count}))
        .collect();
    let files: Vec<_> = res
        .files
        .iter()
        .map(|fc| json!({"file": shorten_path(&fc.file), "count": fc.count}))
        .collect();
    json!({"errorTypes": rules, "files": files})
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FileCount, RuleCount};

    #[test]
    fn test_shorten_path_strips_after_last_marker() {
        assert_eq!(
            shorten_path("C:\\Users\\dev\\Akapoolco\\src\\app.js"),
            "\\src\\app.js"
        );
        assert_eq!(
            shorten_path("/home/Akapoolco/nested/Akapoolco/lib.js"),
            "/lib.js"
        );
    }

    #[test]
    fn test_shorten_path_without_marker_verbatim() {
        assert_eq!(shorten_path("src/app.js"), "src/app.js");
        assert_eq!(shorten_path(""), "");
    }

    #[test]
    fn test_shorten_path_marker_at_end() {
        assert_eq!(shorten_path("somewhere/Akapoolco"), "");
    }

    #[test]
    fn test_compose_rankings_json_shape() {
        let res = Rankings {
            rules: vec![RuleCount {
                rule: "semi".into(),
                count: 3,
            }],
            files: vec![FileCount {
                file: "x/Akapoolco/a.js".into(),
                count: 3,
            }],
        };
        let out = compose_rankings_json(&res);
        assert_eq!(out["errorTypes"][0]["rule"], "semi");
        assert_eq!(out["errorTypes"][0]["count"], 3);
        assert_eq!(out["files"][0]["file"], "/a.js");
    }
}
