//! Config struct definition and default implementation.

use super::types::*;
use crate::boundary::DefaultSpans;
use serde::Deserialize;

/// Configuration for a scopediff run.
///
/// This struct represents the contents of `.scopediff.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Analysis settings
    // =========================================================================
    /// Minimum distance between consecutive displayed lines before the run
    /// between them is elided.
    #[serde(default = "default_min_gap_for_ellipsis")]
    pub min_gap_for_ellipsis: usize,

    /// Fallback end-line spans for structures whose closing brace is missing.
    #[serde(default)]
    pub default_spans: DefaultSpans,

    /// Glob patterns for files to leave out of the analysis.
    #[serde(default)]
    pub exclude_paths: Vec<String>,

    /// Whether files without a language front end are still reported.
    #[serde(default = "default_true")]
    pub report_unsupported_files: bool,

    // =========================================================================
    // Presentation settings
    // =========================================================================
    /// Context lines shown around each change.
    #[serde(default = "default_context_lines")]
    pub context_lines: usize,

    /// Number of structures listed by `--stats`.
    #[serde(default = "default_top_structures_limit")]
    pub top_structures_limit: usize,

    /// Content is truncated to this many characters unless `--verbose`.
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,

    /// Width of the banner separators.
    #[serde(default = "default_separator_width")]
    pub separator_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_gap_for_ellipsis: default_min_gap_for_ellipsis(),
            default_spans: DefaultSpans::default(),
            exclude_paths: Vec::new(),
            report_unsupported_files: default_true(),
            context_lines: default_context_lines(),
            top_structures_limit: default_top_structures_limit(),
            max_line_length: default_max_line_length(),
            separator_width: default_separator_width(),
        }
    }
}
