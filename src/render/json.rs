//! JSON report.

use super::RenderOptions;
use crate::analysis::{AnalysisReport, FileGroups, structure_stats};
use crate::diff::{ChangeType, Side};
use crate::error::Result;
use crate::reconcile::{ChangeGroup, WindowEntry, WindowLine, display_window};
use crate::structure::{BoundaryKind, Structure, StructureKind};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    summary: JsonSummary,
    files: Vec<JsonFile<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    statistics: Option<Vec<JsonStat<'a>>>,
    diagnostics: Vec<String>,
}

#[derive(Debug, Serialize)]
struct JsonSummary {
    files: usize,
    lines_changed: usize,
    additions: usize,
    deletions: usize,
}

#[derive(Debug, Serialize)]
struct JsonFile<'a> {
    path: &'a str,
    language: Option<&'static str>,
    additions: usize,
    deletions: usize,
    groups: Vec<JsonGroup<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonGroup<'a> {
    /// `null` for lines outside any structure.
    structure: Option<JsonStructure<'a>>,
    additions: usize,
    deletions: usize,
    lines: Vec<JsonLine<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonStructure<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    kind: StructureKind,
    side: Side,
    start_line: usize,
    end_line: usize,
    full_path: String,
    signature: String,
    modifiers: &'a [String],
    decorators: &'a [String],
    params: &'a [String],
    return_type: Option<&'a str>,
    line_count: usize,
    boundary: BoundaryKind,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
enum LineKind {
    Context,
    Addition,
    Deletion,
}

#[derive(Debug, Serialize)]
struct JsonLine<'a> {
    line_num: usize,
    kind: LineKind,
    content: &'a str,
    gap_before: bool,
}

#[derive(Debug, Serialize)]
struct JsonStat<'a> {
    rank: usize,
    file_path: &'a str,
    full_path: String,
    additions: usize,
    deletions: usize,
    total: usize,
}

/// Render the report as pretty-printed JSON.
pub fn render_json(
    report: &AnalysisReport,
    options: &RenderOptions,
    generated_at: DateTime<Utc>,
) -> Result<String> {
    let grouped = report.grouped();
    let (additions, deletions) = grouped
        .iter()
        .flat_map(|g| &g.groups)
        .fold((0, 0), |(a, d), group| (a + group.additions, d + group.deletions));

    let statistics = options.stats.then(|| {
        structure_stats(&grouped, options.top)
            .into_iter()
            .enumerate()
            .map(|(i, stat)| JsonStat {
                rank: i + 1,
                file_path: stat.file_path,
                total: stat.total(),
                full_path: stat.full_path,
                additions: stat.additions,
                deletions: stat.deletions,
            })
            .collect()
    });

    let doc = JsonReport {
        generated_at,
        summary: JsonSummary {
            files: report.files.len(),
            lines_changed: report.total_changes(),
            additions,
            deletions,
        },
        files: grouped.iter().map(|g| json_file(g, options)).collect(),
        statistics,
        diagnostics: report.diagnostics.iter().map(ToString::to_string).collect(),
    };

    Ok(serde_json::to_string_pretty(&doc)?)
}

fn json_file<'a>(file_groups: &'a FileGroups<'a>, options: &RenderOptions) -> JsonFile<'a> {
    let file = file_groups.file;
    let source_lines = file.source_lines();

    let groups = file_groups
        .groups
        .iter()
        .map(|group| {
            let entries = display_window(
                &group.changes,
                source_lines.as_deref(),
                options.context_lines,
                options.min_gap,
            );
            JsonGroup {
                structure: json_structure(file_groups, group),
                additions: group.additions,
                deletions: group.deletions,
                lines: entries.iter().map(json_line).collect(),
            }
        })
        .collect();

    JsonFile {
        path: &file.path,
        language: file.language.map(|l| l.name()),
        additions: file_groups.groups.iter().map(|g| g.additions).sum(),
        deletions: file_groups.groups.iter().map(|g| g.deletions).sum(),
        groups,
    }
}

fn json_structure<'a>(
    file_groups: &'a FileGroups<'a>,
    group: &ChangeGroup<'a>,
) -> Option<JsonStructure<'a>> {
    let reference = group.structure?;
    let indices = &file_groups.file.indices;
    let structure: &'a Structure = indices.get(reference)?;

    Some(JsonStructure {
        name: &structure.name,
        kind: structure.kind,
        side: reference.side,
        start_line: structure.start_line,
        end_line: structure.end_line,
        full_path: indices.full_path(reference)?,
        signature: structure.signature(),
        modifiers: &structure.modifiers,
        decorators: &structure.decorators,
        params: &structure.params,
        return_type: structure.return_type.as_deref(),
        line_count: structure.line_count(),
        boundary: structure.boundary,
    })
}

fn json_line<'a>(entry: &WindowEntry<'a>) -> JsonLine<'a> {
    let (kind, content) = match entry.line {
        WindowLine::Unchanged(text) => (LineKind::Context, text),
        WindowLine::Changed(change) => match change.change_type {
            ChangeType::Addition => (LineKind::Addition, change.content.as_str()),
            ChangeType::Deletion => (LineKind::Deletion, change.content.as_str()),
        },
    };
    JsonLine {
        line_num: entry.line_num,
        kind,
        content,
        gap_before: entry.gap_before,
    }
}
