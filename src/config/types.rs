//! Configuration constants and defaults for scopediff.

/// Config file looked up in the repository root when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = ".scopediff.yaml";

/// Smallest accepted `max_line_length`.
pub const MIN_LINE_LENGTH: usize = 10;

// Default value functions for serde
pub(crate) fn default_min_gap_for_ellipsis() -> usize {
    5
}
pub(crate) fn default_context_lines() -> usize {
    3
}
pub(crate) fn default_top_structures_limit() -> usize {
    10
}
pub(crate) fn default_max_line_length() -> usize {
    70
}
pub(crate) fn default_separator_width() -> usize {
    80
}
pub(crate) fn default_true() -> bool {
    true
}
