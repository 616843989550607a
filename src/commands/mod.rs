//! Command implementation for scopediff.
//!
//! Resolves the diff source selected on the command line, runs the analysis,
//! and renders the report.

use crate::analysis::analyze;
use crate::cli::{Cli, DiffMode};
use crate::config::Config;
use crate::error::{Result, ScopeDiffError};
use crate::git;
use crate::render::{OutputFormat, RenderOptions, render_json, render_text};
use crate::source::{GitSources, SourceProvider, WorkingTreeSources, compare_diff, read_diff_input};
use chrono::Utc;
use log::{debug, info};
use std::io::IsTerminal;
use std::path::PathBuf;


/// Message printed when the diff contains no changes.
pub const NO_CHANGES: &str = "No changes detected";

/// Run scopediff and print the report to stdout.
pub fn run(cli: &Cli) -> Result<()> {
    let color = !cli.no_color && std::io::stdout().is_terminal();
    let output = execute(cli, color)?;
    print!("{}", output);
    Ok(())
}

/// Run scopediff and return the rendered report.
pub fn execute(cli: &Cli, color: bool) -> Result<String> {
    if cli.top == Some(0) {
        return Err(ScopeDiffError::UserError(
            "--top must be greater than 0".to_string(),
        ));
    }

    let (diff_text, sources, root) = load_diff(cli)?;
    let config = Config::discover(cli.config.as_deref(), &root)?;

    if diff_text.trim().is_empty() {
        info!("diff is empty");
        return Ok(format!("{}\n", NO_CHANGES));
    }

    let report = analyze(&diff_text, sources.as_ref(), &config)?;
    if report.is_empty() && report.diagnostics.is_empty() {
        return Ok(format!("{}\n", NO_CHANGES));
    }

    let mut options = RenderOptions::from_config(&config);
    options.verbose = cli.verbose;
    options.stats = cli.stats;
    options.color = color;
    if let Some(top) = cli.top {
        options.top = top;
    }

    match cli.format {
        OutputFormat::Text => Ok(render_text(&report, &options)),
        OutputFormat::Json => {
            let mut json = render_json(&report, &options, Utc::now())?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Diff text, its source provider, and the directory config is looked up in.
fn load_diff(cli: &Cli) -> Result<(String, Box<dyn SourceProvider>, PathBuf)> {
    match cli.mode() {
        DiffMode::Git { rev1, rev2 } => {
            let repo = git::get_repo_root(&cli.repo)?;
            debug!("git mode in {}", repo.display());
            let text = git::diff_text(&repo, rev1.as_deref(), rev2.as_deref())?;
            let sources = GitSources::new(repo.clone(), rev1, rev2);
            Ok((text, Box::new(sources), repo))
        }
        DiffMode::Compare { file1, file2 } => {
            debug!("comparing {} and {}", file1.display(), file2.display());
            let (text, sources) = compare_diff(&file1, &file2)?;
            Ok((text, Box::new(sources), cli.repo.clone()))
        }
        DiffMode::DiffFile(path) => {
            debug!("reading diff from {}", path.display());
            let text = read_diff_input(&path)?;
            let sources = WorkingTreeSources::new(cli.repo.clone());
            Ok((text, Box::new(sources), cli.repo.clone()))
        }
    }
}
