//! Config loading, validation, and utility operations.

use super::model::Config;
use super::types::{CONFIG_FILE_NAME, MIN_LINE_LENGTH};
use crate::error::{Result, ScopeDiffError};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(ScopeDiffError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ScopeDiffError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the config for a run.
    ///
    /// An explicit path must exist. Otherwise `<repo>/.scopediff.yaml` is used
    /// when present, and the defaults when it is not.
    pub fn discover(explicit: Option<&Path>, repo: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            debug!("loading config from {}", path.display());
            return Self::load(path);
        }

        let candidate = repo.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            debug!("loading config from {}", candidate.display());
            Self::load(candidate)
        } else {
            debug!("no {} found, using defaults", CONFIG_FILE_NAME);
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            ScopeDiffError::UserError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `min_gap_for_ellipsis` must be at least 2
    /// - `top_structures_limit`, `separator_width` and every default span must be positive
    /// - `max_line_length` must be at least 10
    /// - `exclude_paths` entries must be valid globs
    pub fn validate(&self) -> Result<()> {
        if self.min_gap_for_ellipsis < 2 {
            return Err(invalid("min_gap_for_ellipsis must be at least 2"));
        }

        if self.top_structures_limit == 0 {
            return Err(invalid("top_structures_limit must be greater than 0"));
        }

        if self.separator_width == 0 {
            return Err(invalid("separator_width must be greater than 0"));
        }

        if self.max_line_length < MIN_LINE_LENGTH {
            return Err(invalid(&format!(
                "max_line_length must be at least {} (found {})",
                MIN_LINE_LENGTH, self.max_line_length
            )));
        }

        for (kind, span) in self.default_spans.entries() {
            if span == 0 {
                return Err(invalid(&format!(
                    "default_spans.{} must be greater than 0",
                    kind
                )));
            }
        }

        self.exclude_matcher()?;
        Ok(())
    }

    /// Compile `exclude_paths` into a matcher.
    ///
    /// Patterns are normalized to forward slashes; empty entries are skipped.
    pub fn exclude_matcher(&self) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();

        for pattern in &self.exclude_paths {
            let normalized = pattern.trim().replace('\\', "/");
            if normalized.is_empty() {
                continue;
            }
            let glob = Glob::new(&normalized).map_err(|e| {
                invalid(&format!("exclude_paths has invalid glob '{}': {}", pattern, e))
            })?;
            builder.add(glob);
        }

        builder
            .build()
            .map_err(|e| invalid(&format!("exclude_paths could not be compiled: {}", e)))
    }
}

fn invalid(reason: &str) -> ScopeDiffError {
    ScopeDiffError::UserError(format!("config validation failed: {}", reason))
}
