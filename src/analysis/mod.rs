//! Whole-diff analysis.
//!
//! [`analyze`] replays a unified diff, extracts the structures of every
//! changed file on both sides, and attributes each changed line. The
//! resulting [`AnalysisReport`] is what the renderers consume.

mod model;
mod pipeline;


pub use model::{AnalysisReport, FileGroups, structure_stats};
pub use pipeline::analyze;
