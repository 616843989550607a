//! Presentation of an [`AnalysisReport`](crate::analysis::AnalysisReport).
//!
//! Both renderers walk the same grouped view and the same display windows;
//! they differ only in output format.

mod escape;
mod json;
mod text;


pub use json::render_json;
pub use text::render_text;

use crate::config::Config;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings shared by the renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Show structure ranges and signatures, and never truncate content.
    pub verbose: bool,
    /// Append the most-modified-structures table.
    pub stats: bool,
    pub top: usize,
    pub color: bool,
    pub context_lines: usize,
    pub min_gap: usize,
    pub max_line_length: usize,
    pub separator_width: usize,
}

impl RenderOptions {
    /// Options from the config file; flags are applied by the caller.
    pub fn from_config(config: &Config) -> Self {
        Self {
            verbose: false,
            stats: false,
            top: config.top_structures_limit,
            color: false,
            context_lines: config.context_lines,
            min_gap: config.min_gap_for_ellipsis,
            max_line_length: config.max_line_length,
            separator_width: config.separator_width,
        }
    }
}
