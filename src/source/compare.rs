use super::SourceProvider;
use crate::error::{Result, ScopeDiffError};
use similar::TextDiff;
use std::path::Path;

/// Lines of context around each hunk of a generated diff.
const CONTEXT_RADIUS: usize = 3;

/// Contents of two files compared directly; every path maps to them.
#[derive(Debug, Clone)]
pub struct CompareSources {
    old: String,
    new: String,
}

impl SourceProvider for CompareSources {
    fn old_source(&self, _path: &str) -> Option<String> {
        Some(self.old.clone())
    }

    fn new_source(&self, _path: &str) -> Option<String> {
        Some(self.new.clone())
    }
}

/// Read both files and produce their unified diff.
///
/// # Returns
///
/// * `Ok((diff_text, sources))` - The diff (empty when the files are equal)
/// * `Err(ScopeDiffError::MissingInput)` - Either file does not exist
pub fn compare_diff(file1: &Path, file2: &Path) -> Result<(String, CompareSources)> {
    let old = read_input(file1)?;
    let new = read_input(file2)?;

    let diff_text = TextDiff::from_lines(&old, &new)
        .unified_diff()
        .context_radius(CONTEXT_RADIUS)
        .header(
            &format!("a/{}", file1.display()),
            &format!("b/{}", file2.display()),
        )
        .to_string();

    Ok((diff_text, CompareSources { old, new }))
}

fn read_input(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(ScopeDiffError::MissingInput(format!(
            "File not found: {}",
            path.display()
        )));
    }
    Ok(std::fs::read_to_string(path)?)
}
