//! CLI argument parsing for scopediff.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the argument surface; the run itself lives in the
//! `commands` module.

use crate::render::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Scopediff: attribute changed lines to the classes, methods, and functions
/// that contain them.
///
/// With no arguments, analyzes uncommitted changes (`git diff`). One revision
/// compares it against the working tree; two revisions compare them against
/// each other. `--compare` diffs two files directly.
#[derive(Parser, Debug)]
#[command(name = "scopediff")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// First revision, or the old file with --compare.
    pub rev1: Option<String>,

    /// Second revision, or the new file with --compare.
    pub rev2: Option<String>,

    /// Treat REV1 and REV2 as file paths and compare them directly.
    #[arg(long, requires = "rev2", conflicts_with = "diff_file")]
    pub compare: bool,

    /// Read the unified diff from a file ("-" for stdin) instead of running git.
    #[arg(long, value_name = "PATH", conflicts_with_all = ["rev1", "rev2"])]
    pub diff_file: Option<PathBuf>,

    /// Repository (or working-tree root) to analyze.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub repo: PathBuf,

    /// Show structure ranges and signatures, and do not truncate lines.
    #[arg(short, long)]
    pub verbose: bool,

    /// Append the most modified structures.
    #[arg(short, long)]
    pub stats: bool,

    /// Number of structures listed by --stats (overrides the config file).
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Config file (defaults to <repo>/.scopediff.yaml when present).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable ANSI colours.
    #[arg(long)]
    pub no_color: bool,

    /// Log debug output to stderr.
    #[arg(long)]
    pub debug: bool,
}

/// Where the diff text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffMode {
    Git {
        rev1: Option<String>,
        rev2: Option<String>,
    },
    Compare {
        file1: PathBuf,
        file2: PathBuf,
    },
    DiffFile(PathBuf),
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    pub fn mode(&self) -> DiffMode {
        if let Some(path) = &self.diff_file {
            return DiffMode::DiffFile(path.clone());
        }
        if self.compare
            && let (Some(file1), Some(file2)) = (&self.rev1, &self.rev2)
        {
            return DiffMode::Compare {
                file1: PathBuf::from(file1),
                file2: PathBuf::from(file2),
            };
        }
        DiffMode::Git {
            rev1: self.rev1.clone(),
            rev2: self.rev2.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_no_arguments_is_working_tree_diff() {
        let cli = Cli::try_parse_from(["scopediff"]).unwrap();
        assert_eq!(cli.mode(), DiffMode::Git { rev1: None, rev2: None });
        assert_eq!(cli.repo, PathBuf::from("."));
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.verbose && !cli.stats && !cli.no_color && !cli.debug);
    }

    #[test]
    fn parse_revisions() {
        let cli = Cli::try_parse_from(["scopediff", "HEAD~1", "HEAD"]).unwrap();
        assert_eq!(
            cli.mode(),
            DiffMode::Git {
                rev1: Some("HEAD~1".to_string()),
                rev2: Some("HEAD".to_string()),
            }
        );

        let cli = Cli::try_parse_from(["scopediff", "main"]).unwrap();
        assert_eq!(
            cli.mode(),
            DiffMode::Git {
                rev1: Some("main".to_string()),
                rev2: None,
            }
        );
    }

    #[test]
    fn parse_compare() {
        let cli = Cli::try_parse_from(["scopediff", "--compare", "a.py", "b.py"]).unwrap();
        assert_eq!(
            cli.mode(),
            DiffMode::Compare {
                file1: PathBuf::from("a.py"),
                file2: PathBuf::from("b.py"),
            }
        );
    }

    #[test]
    fn compare_requires_two_files() {
        assert!(Cli::try_parse_from(["scopediff", "--compare", "a.py"]).is_err());
        assert!(Cli::try_parse_from(["scopediff", "--compare"]).is_err());
    }

    #[test]
    fn parse_diff_file() {
        let cli = Cli::try_parse_from(["scopediff", "--diff-file", "-"]).unwrap();
        assert_eq!(cli.mode(), DiffMode::DiffFile(PathBuf::from("-")));
    }

    #[test]
    fn diff_file_conflicts_with_revisions() {
        assert!(Cli::try_parse_from(["scopediff", "--diff-file", "x.diff", "HEAD"]).is_err());
    }

    #[test]
    fn parse_output_flags() {
        let cli = Cli::try_parse_from([
            "scopediff",
            "-v",
            "-s",
            "--top",
            "5",
            "--format",
            "json",
            "--no-color",
            "--debug",
            "--repo",
            "/tmp/project",
            "--config",
            "custom.yaml",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert!(cli.stats);
        assert_eq!(cli.top, Some(5));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.no_color);
        assert!(cli.debug);
        assert_eq!(cli.repo, PathBuf::from("/tmp/project"));
        assert_eq!(cli.config, Some(PathBuf::from("custom.yaml")));
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["scopediff", "--format", "xml"]).is_err());
    }
}
