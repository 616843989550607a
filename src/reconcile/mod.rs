//! Diff reconciliation: attribute changed lines to structures, group them,
//! and compute display windows.
//!
//! The pipeline for one file is:
//! 1. [`attribute`] turns the parsed diff lines into [`DiffChange`]s, looking
//!    each line up in the old-side or new-side line index.
//! 2. [`group_changes`] partitions the changes by structure in first-seen
//!    order; `rank_by_total` reorders groups for statistics.
//! 3. `mark_gaps` and [`display_window`] tell the presentation layer where
//!    runs of lines can be elided.

mod attribute;
mod group;
mod window;


pub use attribute::{DiffChange, FileIndices, attribute};
pub use group::{ChangeGroup, StructureStat, group_changes, top_structures};
pub use window::{WindowEntry, WindowLine, display_window};
