//! Error types for the scopediff CLI.
//!
//! `ScopeDiffError` covers the faults that stop a run. Faults scoped to a
//! single file or hunk are reported as [`Diagnostic`] values instead, so the
//! rest of the diff is still analyzed.

use crate::diff::Side;
use crate::exit_codes;
use std::fmt;
use thiserror::Error;

/// Main error type for scopediff operations.
#[derive(Error, Debug)]
pub enum ScopeDiffError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// No diff text (or a required input file) could be obtained.
    #[error("Missing input: {0}")]
    MissingInput(String),

    /// Git operation failed.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// Reading a file or stream failed.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The report could not be serialized.
    #[error("Failed to render report: {0}")]
    RenderError(#[from] serde_json::Error),
}

impl ScopeDiffError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScopeDiffError::UserError(_) => exit_codes::USER_ERROR,
            ScopeDiffError::MissingInput(_) => exit_codes::MISSING_INPUT,
            ScopeDiffError::IoError(_) => exit_codes::MISSING_INPUT,
            ScopeDiffError::GitError(_) => exit_codes::GIT_FAILURE,
            ScopeDiffError::RenderError(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for scopediff operations.
pub type Result<T> = std::result::Result<T, ScopeDiffError>;

/// A recoverable fault found during analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A file's source could not be turned into structures; its changes stay unattributed.
    StructureExtraction {
        file_path: String,
        side: Side,
        reason: String,
    },
    /// A diff line or hunk header did not match the unified-diff grammar.
    MalformedDiff { line_no: usize, reason: String },
    /// The source text for one side of a file could not be read.
    SourceUnavailable { file_path: String, side: Side },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::StructureExtraction {
                file_path,
                side,
                reason,
            } => write!(
                f,
                "{}: {} side not analyzed ({})",
                file_path, side, reason
            ),
            Diagnostic::MalformedDiff { line_no, reason } => {
                write!(f, "diff line {}: {}", line_no, reason)
            }
            Diagnostic::SourceUnavailable { file_path, side } => {
                write!(f, "{}: {} source unavailable", file_path, side)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = ScopeDiffError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn missing_input_has_correct_exit_code() {
        let err = ScopeDiffError::MissingInput("no diff".to_string());
        assert_eq!(err.exit_code(), exit_codes::MISSING_INPUT);
    }

    #[test]
    fn git_error_has_correct_exit_code() {
        let err = ScopeDiffError::GitError("not a repository".to_string());
        assert_eq!(err.exit_code(), exit_codes::GIT_FAILURE);
    }

    #[test]
    fn io_error_converts_and_maps_to_missing_input() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ScopeDiffError = io.into();
        assert_eq!(err.exit_code(), exit_codes::MISSING_INPUT);
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn json_error_is_not_reported_as_missing_input() {
        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ScopeDiffError = json.into();
        assert!(matches!(err, ScopeDiffError::RenderError(_)));
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert!(err.to_string().starts_with("Failed to render report: "));
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = ScopeDiffError::MissingInput("File not found: a.py".to_string());
        assert_eq!(err.to_string(), "Missing input: File not found: a.py");
    }

    #[test]
    fn diagnostics_render_file_and_side() {
        let diag = Diagnostic::StructureExtraction {
            file_path: "src/app.py".to_string(),
            side: Side::Old,
            reason: "syntax error at line 3".to_string(),
        };
        assert_eq!(
            diag.to_string(),
            "src/app.py: old side not analyzed (syntax error at line 3)"
        );

        let diag = Diagnostic::MalformedDiff {
            line_no: 7,
            reason: "invalid hunk header".to_string(),
        };
        assert_eq!(diag.to_string(), "diff line 7: invalid hunk header");
    }
}
