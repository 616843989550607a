//! Brace-balancing scanner with lexical-context tracking.

use super::spans::DefaultSpans;
use crate::structure::{BoundaryKind, StructureKind};
use log::debug;

/// Lexical context of the scanner. Braces only count in `Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    Normal,
    LineComment,
    BlockComment,
    StringLiteral,
    CharLiteral,
    TextBlock,
}

/// The resolved last line of a structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Line of the matching closing brace (or of a terminating `;`).
    Exact(usize),
    /// `opening_line + DefaultSpan(kind)`; the text ended first.
    Estimated(usize),
}

impl Boundary {
    pub fn line(&self) -> usize {
        match self {
            Boundary::Exact(line) | Boundary::Estimated(line) => *line,
        }
    }

    pub fn kind(&self) -> BoundaryKind {
        match self {
            Boundary::Exact(_) => BoundaryKind::Exact,
            Boundary::Estimated(_) => BoundaryKind::Estimated,
        }
    }
}

/// Finds closing lines in one file's source text.
#[derive(Debug, Clone)]
pub struct BoundaryResolver<'a> {
    source: &'a str,
    /// Byte offset where each line starts; index 0 is line 1.
    line_starts: Vec<usize>,
    spans: DefaultSpans,
}

impl<'a> BoundaryResolver<'a> {
    pub fn new(source: &'a str, spans: DefaultSpans) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            source,
            line_starts,
            spans,
        }
    }

    /// Resolve the end line of a structure whose declaration starts at byte
    /// offset `at`.
    pub fn resolve(&self, at: usize, kind: StructureKind) -> Boundary {
        match self.scan(at) {
            Some(line) => Boundary::Exact(line),
            None => {
                let opening_line = self.line_of(at);
                let estimate = opening_line + self.spans.span_for(kind);
                debug!(
                    "no closing brace for {} at line {}, estimating end line {}",
                    kind, opening_line, estimate
                );
                Boundary::Estimated(estimate)
            }
        }
    }

    /// 1-based line containing byte offset `at`.
    fn line_of(&self, at: usize) -> usize {
        self.line_starts.partition_point(|&start| start <= at)
    }

    /// Scan forward from byte offset `at` until the first `{` found is
    /// balanced again, returning that line.
    ///
    /// A `;` reached before any `{` ends a declaration without a body on
    /// that line. Returns `None` if the text ends first.
    pub fn scan(&self, at: usize) -> Option<usize> {
        if at >= self.source.len() {
            return None;
        }
        let opening_line = self.line_of(at);
        let bytes = self.source.as_bytes();

        let mut state = LexState::Normal;
        let mut depth: usize = 0;
        let mut opened = false;
        let mut line = opening_line;
        let mut i = at;

        while i < bytes.len() {
            let b = bytes[i];
            let next = bytes.get(i + 1).copied();

            if b == b'\n' {
                line += 1;
                // Line comments end here; Java string and char literals cannot span lines.
                if matches!(
                    state,
                    LexState::LineComment | LexState::StringLiteral | LexState::CharLiteral
                ) {
                    state = LexState::Normal;
                }
                i += 1;
                continue;
            }

            match state {
                LexState::Normal => match b {
                    b'/' if next == Some(b'/') => {
                        state = LexState::LineComment;
                        i += 2;
                        continue;
                    }
                    b'/' if next == Some(b'*') => {
                        state = LexState::BlockComment;
                        i += 2;
                        continue;
                    }
                    b'"' if bytes[i..].starts_with(b"\"\"\"") => {
                        state = LexState::TextBlock;
                        i += 3;
                        continue;
                    }
                    b'"' => state = LexState::StringLiteral,
                    b'\'' => state = LexState::CharLiteral,
                    b'{' => {
                        depth += 1;
                        opened = true;
                    }
                    b'}' if depth > 0 => {
                        depth -= 1;
                        if depth == 0 {
                            return Some(line);
                        }
                    }
                    b';' if !opened => return Some(line),
                    _ => {}
                },
                LexState::LineComment => {}
                LexState::BlockComment => {
                    if b == b'*' && next == Some(b'/') {
                        state = LexState::Normal;
                        i += 2;
                        continue;
                    }
                }
                LexState::StringLiteral | LexState::CharLiteral => {
                    let quote = if state == LexState::StringLiteral {
                        b'"'
                    } else {
                        b'\''
                    };
                    if b == b'\\' {
                        if next == Some(b'\n') {
                            line += 1;
                        }
                        i += 2;
                        continue;
                    }
                    if b == quote {
                        state = LexState::Normal;
                    }
                }
                LexState::TextBlock => {
                    if b == b'\\' {
                        if next == Some(b'\n') {
                            line += 1;
                        }
                        i += 2;
                        continue;
                    }
                    if bytes[i..].starts_with(b"\"\"\"") {
                        state = LexState::Normal;
                        i += 3;
                        continue;
                    }
                }
            }

            i += 1;
        }

        None
    }
}
