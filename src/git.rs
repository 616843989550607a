//! Git command runner for scopediff.
//!
//! Provides a safe wrapper around git commands with captured stdout/stderr
//! and structured error handling. All git operations should go through this module.

use crate::error::{Result, ScopeDiffError};
use log::debug;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output, exactly as written. File contents and diffs depend on
    /// their leading and trailing lines, so nothing is trimmed.
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    /// Create a new GitOutput from raw output bytes.
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    /// Returns true if stdout has no content besides whitespace.
    pub fn is_empty(&self) -> bool {
        self.stdout.trim().is_empty()
    }
}

/// Run a git command with the specified working directory.
///
/// # Arguments
///
/// * `cwd` - The working directory to run the command in
/// * `args` - The git command arguments (without "git" prefix)
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(ScopeDiffError::GitError)` - On non-zero exit code (mapped to exit code 3)
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let cwd = cwd.as_ref();
    debug!("git {} (in {})", args.join(" "), cwd.display());

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            ScopeDiffError::GitError(format!(
                "failed to execute git {}: {}",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if git_output.stderr.is_empty() {
            git_output.stdout.trim().to_string()
        } else {
            git_output.stderr.clone()
        };

        Err(ScopeDiffError::GitError(format!(
            "git {} failed (exit code {}): {}",
            args.first().unwrap_or(&""),
            exit_code,
            error_msg
        )))
    }
}

/// Get the repository root directory using `git rev-parse --show-toplevel`.
///
/// # Returns
///
/// * `Ok(PathBuf)` - The absolute path to the repository root
/// * `Err(ScopeDiffError::UserError)` - If not inside a git repository (exit code 1)
pub fn get_repo_root<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    let output = run_git(cwd.as_ref(), &["rev-parse", "--show-toplevel"]).map_err(|e| {
        ScopeDiffError::UserError(format!(
            "not inside a git repository ({}). Run from within a repository or pass --repo.",
            e
        ))
    })?;
    Ok(PathBuf::from(output.stdout.trim()))
}

/// Unified diff text for the requested revisions.
///
/// * no revisions: index against working tree (`git diff`)
/// * one revision: that revision against the working tree
/// * two revisions: the first against the second
pub fn diff_text<P: AsRef<Path>>(repo: P, rev1: Option<&str>, rev2: Option<&str>) -> Result<String> {
    let mut args = vec!["diff", "--no-color", "--no-ext-diff"];
    args.extend(rev1);
    args.extend(rev2);

    let output = run_git(repo, &args)?;
    if output.is_empty() {
        debug!("git {} produced no changes", args.join(" "));
    }
    Ok(output.stdout)
}

/// Contents of `path` at `rev`, or in the index when `rev` is `None`.
pub fn show_file<P: AsRef<Path>>(repo: P, rev: Option<&str>, path: &str) -> Result<String> {
    let spec = format!("{}:{}", rev.unwrap_or_default(), path);
    Ok(run_git(repo, &["show", &spec])?.stdout)
}
