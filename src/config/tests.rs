//! Tests for config functionality.

use crate::boundary::DefaultSpans;
use super::Config;
use super::types::CONFIG_FILE_NAME;
use crate::structure::StructureKind;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.min_gap_for_ellipsis, 5);
    assert_eq!(config.context_lines, 3);
    assert_eq!(config.top_structures_limit, 10);
    assert_eq!(config.max_line_length, 70);
    assert_eq!(config.separator_width, 80);
    assert_eq!(config.default_spans, DefaultSpans::default());
    assert!(config.exclude_paths.is_empty());
    assert!(config.report_unsupported_files);
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();

    // Should use all defaults
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
min_gap_for_ellipsis: 8
context_lines: 1
"#;
    let config = Config::from_yaml(yaml).unwrap();

    // Specified values should be used
    assert_eq!(config.min_gap_for_ellipsis, 8);
    assert_eq!(config.context_lines, 1);

    // Unspecified values should use defaults
    assert_eq!(config.top_structures_limit, 10);
    assert_eq!(config.max_line_length, 70);
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
min_gap_for_ellipsis: 6
context_lines: 0
top_structures_limit: 3
max_line_length: 120
separator_width: 100
report_unsupported_files: false
exclude_paths:
  - "vendor/**"
  - "**/*_pb2.py"
default_spans:
  class: 500
  enum: 40
  method: 25
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.min_gap_for_ellipsis, 6);
    assert_eq!(config.context_lines, 0);
    assert_eq!(config.top_structures_limit, 3);
    assert_eq!(config.max_line_length, 120);
    assert_eq!(config.separator_width, 100);
    assert!(!config.report_unsupported_files);
    assert_eq!(config.exclude_paths, vec!["vendor/**", "**/*_pb2.py"]);

    // Partial span tables keep the other defaults.
    assert_eq!(config.default_spans.span_for(StructureKind::Class), 500);
    assert_eq!(config.default_spans.span_for(StructureKind::Enum), 40);
    assert_eq!(config.default_spans.span_for(StructureKind::Method), 25);
    assert_eq!(config.default_spans.span_for(StructureKind::Interface), 1000);
    assert_eq!(config.default_spans.span_for(StructureKind::Constructor), 50);
}

#[test]
fn test_parse_yaml_with_unknown_fields() {
    // Unknown fields should be silently ignored for forward compatibility
    let yaml = r#"
context_lines: 2
unknown_field: "some value"
another_unknown:
  nested: true
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.context_lines, 2);
    assert_eq!(config.min_gap_for_ellipsis, 5);
}

#[test]
fn test_parse_invalid_yaml() {
    let result = Config::from_yaml("context_lines: [not, a, number]");

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_validate_small_gap_threshold() {
    for gap in [0, 1] {
        let config = Config {
            min_gap_for_ellipsis: gap,
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("min_gap_for_ellipsis"));
    }
}

#[test]
fn test_validate_zero_top_structures_limit() {
    let result = Config::from_yaml("top_structures_limit: 0");

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("top_structures_limit"));
}

#[test]
fn test_validate_short_max_line_length() {
    let result = Config::from_yaml("max_line_length: 9");

    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(err.to_string().contains("max_line_length must be at least 10"));
    assert_eq!(err.exit_code(), crate::exit_codes::USER_ERROR);
}

#[test]
fn test_validate_zero_default_span() {
    let yaml = r#"
default_spans:
  constructor: 0
"#;
    let result = Config::from_yaml(yaml);

    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("default_spans.constructor")
    );
}

#[test]
fn test_validate_invalid_exclude_glob() {
    let yaml = r#"
exclude_paths: ["["]
"#;
    let result = Config::from_yaml(yaml);

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("invalid glob"));
}

#[test]
fn test_exclude_matcher() {
    let config = Config {
        exclude_paths: vec![
            "vendor/**".to_string(),
            "gen\\*.py".to_string(),
            "  ".to_string(),
        ],
        ..Config::default()
    };
    let matcher = config.exclude_matcher().unwrap();

    assert!(matcher.is_match("vendor/lib/x.py"));
    assert!(matcher.is_match("gen/models.py"));
    assert!(!matcher.is_match("src/app.py"));
}

#[test]
fn test_config_load_from_file() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "context_lines: 7").unwrap();
    writeln!(file, "separator_width: 40").unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.context_lines, 7);
    assert_eq!(config.separator_width, 40);
}

#[test]
fn test_config_load_missing_file() {
    let result = Config::load("/nonexistent/path/.scopediff.yaml");
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn test_discover_prefers_explicit_path() {
    use tempfile::TempDir;

    let repo = TempDir::new().unwrap();
    std::fs::write(repo.path().join(CONFIG_FILE_NAME), "context_lines: 1\n").unwrap();
    let explicit = repo.path().join("custom.yaml");
    std::fs::write(&explicit, "context_lines: 2\n").unwrap();

    let config = Config::discover(Some(&explicit), repo.path()).unwrap();
    assert_eq!(config.context_lines, 2);
}

#[test]
fn test_discover_uses_repo_file_then_defaults() {
    use tempfile::TempDir;

    let repo = TempDir::new().unwrap();
    assert_eq!(Config::discover(None, repo.path()).unwrap(), Config::default());

    std::fs::write(repo.path().join(CONFIG_FILE_NAME), "context_lines: 1\n").unwrap();
    let config = Config::discover(None, repo.path()).unwrap();
    assert_eq!(config.context_lines, 1);
}

#[test]
fn test_discover_missing_explicit_path_is_an_error() {
    use tempfile::TempDir;

    let repo = TempDir::new().unwrap();
    let result = Config::discover(Some(&repo.path().join("missing.yaml")), repo.path());
    assert!(result.is_err());
}
