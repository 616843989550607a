//! Unified diff parsing for scopediff.
//!
//! Replays a unified diff hunk by hunk, tracking the old-file and new-file
//! line counters independently, and records every added or deleted line with
//! the line number on its own side. Supports:
//! - `git diff` output (`diff --git` sections, renames, new/deleted files)
//! - plain `diff -u` output (sections started by `---`/`+++` markers)
//! - hunk headers with omitted counts (`@@ -3 +3 @@` means a count of 1)
//! - deleted/added content that itself starts with `--`/`++`
//!
//! Malformed headers and lines are reported as diagnostics and skipped.

mod api;
mod helpers;
mod parser;


// Re-export public API
pub use api::{ChangeType, FileDiff, Side};
pub use parser::parse_unified_diff;
