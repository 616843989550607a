use super::SourceProvider;
use crate::git::show_file;
use log::debug;
use std::path::PathBuf;

/// File contents for `git diff [rev1 [rev2]]`.
#[derive(Debug, Clone)]
pub struct GitSources {
    repo: PathBuf,
    rev1: Option<String>,
    rev2: Option<String>,
}

impl GitSources {
    pub fn new(repo: impl Into<PathBuf>, rev1: Option<String>, rev2: Option<String>) -> Self {
        Self {
            repo: repo.into(),
            rev1,
            rev2,
        }
    }

    fn show(&self, rev: Option<&str>, path: &str) -> Option<String> {
        show_file(&self.repo, rev, path)
            .inspect_err(|e| debug!("no source for {}: {}", path, e))
            .ok()
    }
}

impl SourceProvider for GitSources {
    /// The file at `rev1`, or in the index when no revision was given.
    fn old_source(&self, path: &str) -> Option<String> {
        self.show(self.rev1.as_deref(), path)
    }

    /// The file at `rev2`, or in the working tree.
    fn new_source(&self, path: &str) -> Option<String> {
        match &self.rev2 {
            Some(rev) => self.show(Some(rev), path),
            None => std::fs::read_to_string(self.repo.join(path))
                .inspect_err(|e| debug!("no working-tree source for {}: {}", path, e))
                .ok(),
        }
    }
}
