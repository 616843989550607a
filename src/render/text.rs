//! Plain-text report.

use super::RenderOptions;
use super::escape::{BOLD, DIM, FG_CYAN, FG_GREEN, FG_RED, FG_YELLOW, Palette};
use crate::analysis::{AnalysisReport, FileGroups, structure_stats};
use crate::diff::ChangeType;
use crate::reconcile::{ChangeGroup, WindowEntry, WindowLine, display_window};
use crate::structure::BoundaryKind;
use std::fmt::Write;

const TITLE: &str = "Structural Diff Analysis";
const UNGROUPED: &str = "(outside any structure)";
const ELLIPSIS: &str = "...";

/// Render the whole report as text.
pub fn render_text(report: &AnalysisReport, options: &RenderOptions) -> String {
    let palette = Palette::new(options.color);
    let heavy = "=".repeat(options.separator_width);
    let light = "-".repeat(options.separator_width);
    let grouped = report.grouped();

    let mut out = String::new();
    let _ = writeln!(out, "{}", palette.paint(FG_CYAN, &heavy));
    let _ = writeln!(out, "{}", palette.paint(BOLD, TITLE));
    let _ = writeln!(out, "{}", palette.paint(FG_CYAN, &heavy));
    let _ = writeln!(
        out,
        "Summary: {} files, {} lines changed",
        report.files.len(),
        report.total_changes()
    );

    for file_groups in &grouped {
        out.push('\n');
        render_file(&mut out, file_groups, options, &palette, &light);
    }

    if options.stats {
        render_stats(&mut out, &grouped, options, &palette, &light);
    }

    if !report.diagnostics.is_empty() {
        let _ = writeln!(out, "\nDiagnostics:");
        for diagnostic in &report.diagnostics {
            let _ = writeln!(out, "  warning: {}", diagnostic);
        }
    }
    out
}

fn render_file(
    out: &mut String,
    file_groups: &FileGroups<'_>,
    options: &RenderOptions,
    palette: &Palette,
    light: &str,
) {
    let file = file_groups.file;
    let _ = writeln!(out, "{}", palette.paint(FG_CYAN, &format!("File: {}", file.path)));
    let _ = writeln!(out, "{}", light);

    let source_lines = file.source_lines();
    for group in &file_groups.groups {
        out.push('\n');
        render_group_header(out, file_groups, group, options, palette);

        let entries = display_window(
            &group.changes,
            source_lines.as_deref(),
            options.context_lines,
            options.min_gap,
        );
        for entry in &entries {
            render_entry(out, entry, options, palette);
        }
    }
}

fn render_group_header(
    out: &mut String,
    file_groups: &FileGroups<'_>,
    group: &ChangeGroup<'_>,
    options: &RenderOptions,
    palette: &Palette,
) {
    let title = group.full_path.as_deref().unwrap_or(UNGROUPED);
    let _ = writeln!(out, "{}", palette.paint(FG_YELLOW, &format!("▸ {}", title)));

    if options.verbose
        && let Some(structure) = group
            .structure
            .and_then(|s| file_groups.file.indices.get(s))
    {
        let estimated = match structure.boundary {
            BoundaryKind::Exact => "",
            BoundaryKind::Estimated => " (estimated)",
        };
        let _ = writeln!(
            out,
            "  lines {}-{}{} | {}",
            structure.start_line,
            structure.end_line,
            estimated,
            structure.signature()
        );
    }

    let _ = writeln!(out, "  (+{} -{} lines)", group.additions, group.deletions);
}

fn render_entry(out: &mut String, entry: &WindowEntry<'_>, options: &RenderOptions, palette: &Palette) {
    if entry.gap_before {
        let _ = writeln!(out, "{}", palette.paint(DIM, &format!("{:>4}", ELLIPSIS)));
    }

    let (prefix, content, style) = match entry.line {
        WindowLine::Unchanged(text) => (' ', text, DIM),
        WindowLine::Changed(change) => {
            let style = match change.change_type {
                ChangeType::Addition => FG_GREEN,
                ChangeType::Deletion => FG_RED,
            };
            (change.change_type.symbol(), change.content.as_str(), style)
        }
    };

    let content = if options.verbose {
        content.to_string()
    } else {
        truncate(content, options.max_line_length)
    };
    let line = format!("{:4} {} {}", entry.line_num, prefix, content);
    let _ = writeln!(out, "{}", palette.paint(style, &line));
}

fn render_stats(
    out: &mut String,
    grouped: &[FileGroups<'_>],
    options: &RenderOptions,
    palette: &Palette,
    light: &str,
) {
    let stats = structure_stats(grouped, options.top);

    out.push('\n');
    let _ = writeln!(
        out,
        "{}",
        palette.paint(BOLD, &format!("Top {} Most Modified Structures", options.top))
    );
    let _ = writeln!(out, "{}", light);

    if stats.is_empty() {
        let _ = writeln!(out, "  no changes inside structures");
        return;
    }
    for (i, stat) in stats.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:2}. {:3} lines | {}: {} (+{} -{})",
            i + 1,
            stat.total(),
            stat.file_path,
            stat.full_path,
            stat.additions,
            stat.deletions
        );
    }
}

/// Cut `text` to at most `max` characters, ending in `...` when shortened.
pub(super) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(ELLIPSIS.len());
    let mut cut: String = text.chars().take(keep).collect();
    cut.push_str(ELLIPSIS);
    cut
}
