//! Public types for diff parsing.

use crate::error::Diagnostic;
use serde::Serialize;
use std::fmt;

/// Which side of a diff a line number or source refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The pre-change file (`---`).
    Old,
    /// The post-change file (`+++`).
    New,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Old => f.write_str("old"),
            Side::New => f.write_str("new"),
        }
    }
}

/// Classification of a changed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Deletion,
    Addition,
}

impl ChangeType {
    /// The diff marker for this change.
    pub fn symbol(&self) -> char {
        match self {
            ChangeType::Deletion => '-',
            ChangeType::Addition => '+',
        }
    }

    /// Ordering among changes on the same line: deletions first.
    pub fn sort_rank(&self) -> u8 {
        match self {
            ChangeType::Deletion => 0,
            ChangeType::Addition => 1,
        }
    }

    /// The side whose line numbering this change uses.
    pub fn side(&self) -> Side {
        match self {
            ChangeType::Deletion => Side::Old,
            ChangeType::Addition => Side::New,
        }
    }
}

/// A single added or deleted line from a hunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLine {
    /// Line number on the change's own side (old for deletions, new for additions).
    pub line_num: usize,
    /// The line without its leading `+` or `-`.
    pub content: String,
    pub change_type: ChangeType,
}

/// All changed lines of one file section, in diff order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileDiff {
    /// Path on the old side; `None` for a new file.
    pub old_path: Option<String>,
    /// Path on the new side; `None` for a deleted file.
    pub new_path: Option<String>,
    pub lines: Vec<DiffLine>,
    /// Number of hunk headers replayed for this file.
    pub hunks: usize,
}

impl FileDiff {
    /// The path to report: the new path, or the old path for deleted files.
    pub fn path(&self) -> &str {
        self.new_path
            .as_deref()
            .or(self.old_path.as_deref())
            .unwrap_or_default()
    }

    pub fn additions(&self) -> usize {
        self.count(ChangeType::Addition)
    }

    pub fn deletions(&self) -> usize {
        self.count(ChangeType::Deletion)
    }

    fn count(&self, change_type: ChangeType) -> usize {
        self.lines
            .iter()
            .filter(|l| l.change_type == change_type)
            .count()
    }
}

/// Result of replaying a whole diff.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDiff {
    /// Files with at least one changed line, in diff order.
    pub files: Vec<FileDiff>,
    pub diagnostics: Vec<Diagnostic>,
}
