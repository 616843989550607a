//! Unified diff replay.

use super::api::{ChangeType, DiffLine, FileDiff, ParsedDiff};
use super::helpers::{HunkHeader, parse_diff_git_line, parse_hunk_header, parse_marker_path};
use crate::error::Diagnostic;
use log::{debug, warn};

/// Position inside the current hunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hunk {
    /// Not inside a hunk (file headers, metadata).
    None,
    /// After a malformed header: lines are dropped until the next header or section.
    Skipping,
    /// Replaying hunk lines.
    Active {
        old_line: usize,
        new_line: usize,
        old_remaining: usize,
        new_remaining: usize,
    },
}

impl Hunk {
    fn start(header: HunkHeader) -> Self {
        Hunk::Active {
            old_line: header.old_start,
            new_line: header.new_start,
            old_remaining: header.old_count,
            new_remaining: header.new_count,
        }
    }

    /// True while the header counts still expect lines.
    fn is_strict(&self) -> bool {
        matches!(
            self,
            Hunk::Active { old_remaining, new_remaining, .. }
                if *old_remaining > 0 || *new_remaining > 0
        )
    }
}

/// The replay state folded over the diff lines.
#[derive(Debug)]
struct Replay {
    done: Vec<FileDiff>,
    current: Option<FileDiff>,
    /// Whether the current section has seen its `---` marker.
    saw_old_marker: bool,
    hunk: Hunk,
    diagnostics: Vec<Diagnostic>,
}

impl Default for Replay {
    fn default() -> Self {
        Self {
            done: Vec::new(),
            current: None,
            saw_old_marker: false,
            hunk: Hunk::None,
            diagnostics: Vec::new(),
        }
    }
}

/// Parse unified diff text into per-file changed lines.
///
/// Never fails: grammar violations become diagnostics on the result and the
/// offending header or line is skipped. Files without any added or deleted
/// lines (pure renames, mode changes, binary files) are omitted.
pub fn parse_unified_diff(text: &str) -> ParsedDiff {
    text.lines()
        .enumerate()
        .fold(Replay::default(), |state, (i, line)| state.step(i + 1, line))
        .finish()
}

impl Replay {
    fn step(mut self, line_no: usize, line: &str) -> Self {
        if self.hunk.is_strict() {
            if self.replay_strict(line_no, line) {
                return self;
            }
        } else if matches!(self.hunk, Hunk::Active { .. }) && self.replay_lenient(line) {
            return self;
        } else if self.hunk == Hunk::Skipping && is_hunk_content(line) {
            return self;
        }

        self.structural(line_no, line);
        self
    }

    /// Handle a line while the header counts are not yet exhausted.
    ///
    /// Returns false if the line ended the hunk and still needs structural handling.
    fn replay_strict(&mut self, line_no: usize, line: &str) -> bool {
        match line.as_bytes().first() {
            Some(b'+') => self.record(ChangeType::Addition, &line[1..]),
            Some(b'-') => self.record(ChangeType::Deletion, &line[1..]),
            Some(b' ') | None => self.advance_context(),
            Some(b'\\') => {}
            Some(b'@') if line.starts_with("@@") => return false,
            Some(_) => {
                self.diagnose(
                    line_no,
                    format!("unexpected line inside hunk: {}", preview(line)),
                );
                self.hunk = Hunk::None;
                return false;
            }
        }
        true
    }

    /// Handle a line after the header counts are exhausted.
    ///
    /// File markers and headers are left for structural handling.
    fn replay_lenient(&mut self, line: &str) -> bool {
        if line.starts_with("+++ ") || line.starts_with("--- ") || line.starts_with("@@") {
            return false;
        }
        match line.as_bytes().first() {
            Some(b'+') => self.record(ChangeType::Addition, &line[1..]),
            Some(b'-') => self.record(ChangeType::Deletion, &line[1..]),
            Some(b' ') => self.advance_context(),
            Some(b'\\') => {}
            _ => return false,
        }
        true
    }

    /// Handle section markers, hunk headers and metadata lines.
    fn structural(&mut self, line_no: usize, line: &str) {
        if let Some(rest) = line.strip_prefix("diff --git ") {
            let (old_path, new_path) = parse_diff_git_line(rest);
            self.start_section(old_path, new_path);
        } else if let Some(rest) = line.strip_prefix("--- ") {
            let starts_new = match &self.current {
                Some(file) => self.saw_old_marker || file.hunks > 0,
                None => true,
            };
            let path = parse_marker_path(rest);
            if starts_new {
                self.start_section(path, None);
            } else if let Some(file) = self.current.as_mut() {
                file.old_path = path;
            }
            self.saw_old_marker = true;
        } else if let Some(rest) = line.strip_prefix("+++ ") {
            let path = parse_marker_path(rest);
            match self.current.as_mut() {
                Some(file) => file.new_path = path,
                None => self.start_section(None, path),
            }
            self.hunk = Hunk::None;
        } else if line.starts_with("@@") {
            self.start_hunk(line_no, line);
        } else {
            // Metadata such as `index`, `new file mode`, `Binary files ... differ`.
            self.hunk = match self.hunk {
                Hunk::Skipping => Hunk::Skipping,
                _ => Hunk::None,
            };
        }
    }

    fn start_section(&mut self, old_path: Option<String>, new_path: Option<String>) {
        self.flush();
        self.current = Some(FileDiff {
            old_path,
            new_path,
            ..FileDiff::default()
        });
        self.saw_old_marker = false;
        self.hunk = Hunk::None;
    }

    fn start_hunk(&mut self, line_no: usize, line: &str) {
        let Some(file) = self.current.as_mut() else {
            self.diagnose(line_no, "hunk header outside a file section".to_string());
            self.hunk = Hunk::Skipping;
            return;
        };

        match parse_hunk_header(line) {
            Some(header) => {
                file.hunks += 1;
                self.hunk = Hunk::start(header);
            }
            None => {
                self.diagnose(line_no, format!("invalid hunk header: {}", preview(line)));
                self.hunk = Hunk::Skipping;
            }
        }
    }

    fn record(&mut self, change_type: ChangeType, content: &str) {
        let Hunk::Active {
            old_line,
            new_line,
            old_remaining,
            new_remaining,
        } = &mut self.hunk
        else {
            return;
        };

        let line_num = match change_type {
            ChangeType::Deletion => {
                let n = *old_line;
                *old_line += 1;
                *old_remaining = old_remaining.saturating_sub(1);
                n
            }
            ChangeType::Addition => {
                let n = *new_line;
                *new_line += 1;
                *new_remaining = new_remaining.saturating_sub(1);
                n
            }
        };

        if let Some(file) = self.current.as_mut() {
            file.lines.push(DiffLine {
                line_num,
                content: content.to_string(),
                change_type,
            });
        }
    }

    fn advance_context(&mut self) {
        if let Hunk::Active {
            old_line,
            new_line,
            old_remaining,
            new_remaining,
        } = &mut self.hunk
        {
            *old_line += 1;
            *new_line += 1;
            *old_remaining = old_remaining.saturating_sub(1);
            *new_remaining = new_remaining.saturating_sub(1);
        }
    }

    fn diagnose(&mut self, line_no: usize, reason: String) {
        let diagnostic = Diagnostic::MalformedDiff { line_no, reason };
        warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }

    fn flush(&mut self) {
        if let Some(file) = self.current.take() {
            if file.lines.is_empty() {
                debug!("no changed lines in {}, skipping", file.path());
            } else {
                self.done.push(file);
            }
        }
    }

    fn finish(mut self) -> ParsedDiff {
        self.flush();
        ParsedDiff {
            files: self.done,
            diagnostics: self.diagnostics,
        }
    }
}

/// Lines that belong to a hunk body.
fn is_hunk_content(line: &str) -> bool {
    if line.starts_with("--- ") || line.starts_with("+++ ") {
        return false;
    }
    matches!(line.as_bytes().first(), None | Some(b'+' | b'-' | b' ' | b'\\'))
}

fn preview(line: &str) -> String {
    const MAX: usize = 40;
    if line.chars().count() > MAX {
        format!("{}...", line.chars().take(MAX).collect::<String>())
    } else {
        line.to_string()
    }
}
