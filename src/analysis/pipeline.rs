//! Per-file analysis pipeline.

use super::model::{AnalysisReport, FileAnalysis};
use crate::config::Config;
use crate::diff::{FileDiff, Side, parse_unified_diff};
use crate::error::{Diagnostic, Result};
use crate::index::IndexedFile;
use crate::lang::{self, Language};
use crate::reconcile::{FileIndices, attribute};
use crate::source::SourceProvider;
use globset::GlobSet;
use log::{debug, info, warn};

/// Analyze a whole unified diff.
///
/// Faults limited to one file or hunk end up in `diagnostics`; the only
/// error is an invalid `exclude_paths` pattern.
pub fn analyze(
    diff_text: &str,
    sources: &dyn SourceProvider,
    config: &Config,
) -> Result<AnalysisReport> {
    let excluded = config.exclude_matcher()?;
    let parsed = parse_unified_diff(diff_text);

    let mut report = AnalysisReport {
        files: Vec::new(),
        diagnostics: parsed.diagnostics,
    };

    for file in &parsed.files {
        if let Some(analysis) = analyze_file(file, sources, config, &excluded, &mut report.diagnostics) {
            report.files.push(analysis);
        }
    }

    info!(
        "analyzed {} files, {} changed lines",
        report.files.len(),
        report.total_changes()
    );
    Ok(report)
}

fn analyze_file(
    file: &FileDiff,
    sources: &dyn SourceProvider,
    config: &Config,
    excluded: &GlobSet,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<FileAnalysis> {
    let path = file.path();
    if excluded.is_match(path) {
        debug!("{} matches exclude_paths, skipping", path);
        return None;
    }

    let language = Language::from_path(path);
    if language.is_none() && !config.report_unsupported_files {
        debug!("{} has no structure front end, skipping", path);
        return None;
    }

    let old_source = file.old_path.as_deref().and_then(|p| sources.old_source(p));
    let new_source = file.new_path.as_deref().and_then(|p| sources.new_source(p));

    if old_source.is_none() && file.old_path.is_some() {
        debug!("{}: old side unavailable, deletions use the new-side index", path);
    }
    if new_source.is_none() && file.new_path.is_some() {
        let diagnostic = Diagnostic::SourceUnavailable {
            file_path: path.to_string(),
            side: Side::New,
        };
        warn!("{}", diagnostic);
        diagnostics.push(diagnostic);
    }

    let indices = match language {
        Some(language) => {
            let mut index_side = |side: Side, source: Option<&str>| {
                index(path, language, side, source?, config, diagnostics)
            };
            FileIndices::new(
                index_side(Side::Old, old_source.as_deref()),
                index_side(Side::New, new_source.as_deref()),
            )
        }
        None => FileIndices::default(),
    };

    let changes = attribute(file, &indices);
    debug!(
        "{}: +{} -{}, {} attributed",
        path,
        file.additions(),
        file.deletions(),
        changes.iter().filter(|c| c.structure.is_some()).count()
    );

    Some(FileAnalysis {
        path: path.to_string(),
        language,
        indices,
        new_source,
        changes,
    })
}

/// Extract and index one side of a file, recording a diagnostic on failure.
fn index(
    path: &str,
    language: Language,
    side: Side,
    source: &str,
    config: &Config,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<IndexedFile> {
    match lang::extract(language, source, config.default_spans) {
        Ok(structures) => {
            if structures.is_empty() {
                debug!("{} ({} side): no structures", path, side);
            }
            let indexed = IndexedFile::new(structures);
            debug!(
                "{} ({} side): {} {} structures covering {} lines",
                path,
                side,
                indexed.structures().len(),
                language,
                indexed.covered_lines()
            );
            Some(indexed)
        }
        Err(e) => {
            let diagnostic = Diagnostic::StructureExtraction {
                file_path: path.to_string(),
                side,
                reason: e.to_string(),
            };
            warn!("{}", diagnostic);
            diagnostics.push(diagnostic);
            None
        }
    }
}
