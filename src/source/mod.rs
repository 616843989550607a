//! Where diff text and file contents come from.
//!
//! A run obtains its unified diff from one of three front ends (git, a direct
//! two-file comparison, or a diff file) and reads each file's old and new
//! contents through the matching [`SourceProvider`].

mod compare;
mod input;
mod repo;


pub use compare::compare_diff;
pub use input::{WorkingTreeSources, read_diff_input};
pub use repo::GitSources;

/// Supplies the full text of a file on either side of the diff.
///
/// `None` means the side is unavailable; analysis continues with whatever
/// the other side provides.
pub trait SourceProvider {
    fn old_source(&self, path: &str) -> Option<String>;
    fn new_source(&self, path: &str) -> Option<String>;
}
