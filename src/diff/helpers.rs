//! Helper functions for diff parsing.

use regex::Regex;
use std::sync::LazyLock;

/// `@@ -old_start[,old_count] +new_start[,new_count] @@[ context]`
static HUNK_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@@ -(\d+)(?:,(\d+))? \+(\d+)(?:,(\d+))? @@").expect("hunk header pattern")
});

/// Parsed hunk header. Omitted counts default to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct HunkHeader {
    pub old_start: usize,
    pub old_count: usize,
    pub new_start: usize,
    pub new_count: usize,
}

/// Parse the paths from a "diff --git" line (without the prefix).
///
/// Handles:
/// - "a/path/to/file b/path/to/file" (normal)
/// - "a/path/to/file b/path/to/renamed" (rename)
/// - "a/my file.rs b/my file.rs" (paths with spaces)
///
/// Returns `(old_path, new_path)`; either is `None` if it cannot be found.
pub(super) fn parse_diff_git_line(rest: &str) -> (Option<String>, Option<String>) {
    // Paths can contain spaces, so split on the last " b/" occurrence.
    if let Some(b_pos) = rest.rfind(" b/") {
        let old = rest[..b_pos].strip_prefix("a/").map(normalize_path);
        let new = normalize_path(&rest[b_pos + 3..]);
        return (old, Some(new));
    }

    // Fallback: whitespace-separated without prefixes.
    let parts: Vec<&str> = rest.split_whitespace().collect();
    match parts.as_slice() {
        [old, new] => (Some(normalize_path(old)), Some(normalize_path(new))),
        _ => (None, None),
    }
}

/// Parse a hunk header line, returning `None` if it does not match the grammar.
pub(super) fn parse_hunk_header(line: &str) -> Option<HunkHeader> {
    let caps = HUNK_HEADER.captures(line)?;
    // A missing count means a one-line range.
    let count = |i: usize| match caps.get(i) {
        Some(m) => m.as_str().parse::<usize>().ok(),
        None => Some(1),
    };

    Some(HunkHeader {
        old_start: caps.get(1)?.as_str().parse().ok()?,
        old_count: count(2)?,
        new_start: caps.get(3)?.as_str().parse().ok()?,
        new_count: count(4)?,
    })
}

/// Parse the path after a `---` or `+++` marker.
///
/// Strips the `a/`/`b/` prefix and a trailing tab-separated timestamp (as
/// written by `diff -u`). Returns `None` for `/dev/null`.
pub(super) fn parse_marker_path(rest: &str) -> Option<String> {
    let path = rest.split('\t').next().unwrap_or_default().trim();
    if path.is_empty() || path == "/dev/null" {
        return None;
    }

    let path = path
        .strip_prefix("a/")
        .or_else(|| path.strip_prefix("b/"))
        .unwrap_or(path);
    Some(normalize_path(path))
}

/// Normalize a file path to use forward slashes.
pub(super) fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
