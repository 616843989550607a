use super::SourceProvider;
use crate::error::{Result, ScopeDiffError};
use log::debug;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Sources for a diff read from a file: the working tree only.
#[derive(Debug, Clone)]
pub struct WorkingTreeSources {
    root: PathBuf,
}

impl WorkingTreeSources {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl SourceProvider for WorkingTreeSources {
    fn old_source(&self, _path: &str) -> Option<String> {
        None
    }

    fn new_source(&self, path: &str) -> Option<String> {
        std::fs::read_to_string(self.root.join(path))
            .inspect_err(|e| debug!("no working-tree source for {}: {}", path, e))
            .ok()
    }
}

/// Read diff text from `path`, or from stdin when `path` is `-`.
pub fn read_diff_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    std::fs::read_to_string(path).map_err(|e| {
        ScopeDiffError::MissingInput(format!(
            "failed to read diff file '{}': {}",
            path.display(),
            e
        ))
    })
}
