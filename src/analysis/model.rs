use crate::error::Diagnostic;
use crate::lang::Language;
use crate::reconcile::{ChangeGroup, DiffChange, FileIndices, StructureStat, group_changes, top_structures};

/// Attributed changes of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAnalysis {
    /// Reported path: the new path, or the old one for deleted files.
    pub path: String,
    /// `None` for files without a structure front end.
    pub language: Option<Language>,
    pub indices: FileIndices,
    /// New-side text, used for context lines.
    pub new_source: Option<String>,
    pub changes: Vec<DiffChange>,
}

impl FileAnalysis {
    pub fn groups(&self) -> Vec<ChangeGroup<'_>> {
        group_changes(&self.changes, &self.indices)
    }

    pub fn source_lines(&self) -> Option<Vec<&str>> {
        self.new_source.as_deref().map(|s| s.lines().collect())
    }

    pub fn total(&self) -> usize {
        self.changes.len()
    }
}

/// One file together with its change groups.
#[derive(Debug, Clone)]
pub struct FileGroups<'a> {
    pub file: &'a FileAnalysis,
    pub groups: Vec<ChangeGroup<'a>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisReport {
    /// Analyzed files in diff order.
    pub files: Vec<FileAnalysis>,
    pub diagnostics: Vec<Diagnostic>,
}

impl AnalysisReport {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Changed lines across all files.
    pub fn total_changes(&self) -> usize {
        self.files.iter().map(FileAnalysis::total).sum()
    }

    pub fn grouped(&self) -> Vec<FileGroups<'_>> {
        self.files
            .iter()
            .map(|file| FileGroups {
                file,
                groups: file.groups(),
            })
            .collect()
    }
}

/// The most modified structures across `grouped`.
pub fn structure_stats<'a>(grouped: &'a [FileGroups<'a>], limit: usize) -> Vec<StructureStat<'a>> {
    top_structures(
        grouped
            .iter()
            .map(|g| (g.file.path.as_str(), g.groups.as_slice())),
        limit,
    )
}
