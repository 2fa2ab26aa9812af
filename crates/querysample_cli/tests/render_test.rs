//! Tests for the command-line front end.

use clap::Parser;
use querysample_cli::{Cli, SampleRequest, render};
use std::io::Write;

const REQUEST: &str = r#"
[table]
schema_name = "s"
table_name = "t"
known_partition_values = ["dt=2021-01-01", "dt=2021-01-02"]

[[table.columns]]
name = "dt"
type = "string"

[[table.columns]]
name = "cnt"
type = "bigint"
"#;

fn write_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("querysample").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_request_file_parses() {
    let file = write_file(REQUEST);
    let request = SampleRequest::from_file(file.path()).unwrap();
    assert_eq!(request.table.full_name(), "s.t");
    assert_eq!(request.table.columns().len(), 2);
    assert!(request.options.is_none());
}

#[test]
fn test_render_defaults() {
    let file = write_file(REQUEST);
    let cli = parse(&[file.path().to_str().unwrap()]);
    let sql = render(&cli).unwrap();
    assert_eq!(sql, "SELECT * FROM s.t\nWHERE dt='2021-01-02'\nLIMIT 100");
}

#[test]
fn test_render_with_flags() {
    let file = write_file(REQUEST);
    let cli = parse(&[
        file.path().to_str().unwrap(),
        "--limit",
        "10",
        "--partition",
        "dt=2021-01-01",
        "--filter",
        "cnt",
        "=",
        "5",
        "--order-by",
        "cnt",
        "--desc",
    ]);
    let sql = render(&cli).unwrap();
    assert_eq!(
        sql,
        "SELECT * FROM s.t\nWHERE dt='2021-01-01' AND cnt = 5\nORDER BY cnt DESC\nLIMIT 10"
    );
}

#[test]
fn test_file_options_used_when_no_flags() {
    let content = format!(
        "{REQUEST}\n[options]\nlimit = 3\norder_by_column = \"dt\"\norder_by_ascending = false\n"
    );
    let file = write_file(&content);
    let cli = parse(&[file.path().to_str().unwrap()]);
    let sql = render(&cli).unwrap();
    assert!(sql.ends_with("ORDER BY dt DESC\nLIMIT 3"));
}

#[test]
fn test_config_default_limit() {
    let request = write_file(REQUEST);
    let config = write_file("default_limit = 42\n");
    let cli = parse(&[
        request.path().to_str().unwrap(),
        "--config",
        config.path().to_str().unwrap(),
    ]);
    assert!(render(&cli).unwrap().ends_with("LIMIT 42"));
}

#[test]
fn test_validation_error_surfaces() {
    let file = write_file(REQUEST);
    let cli = parse(&[file.path().to_str().unwrap(), "--filter", "cnt", "=", "abc"]);
    let err = render(&cli).unwrap_err();
    assert!(err.to_string().contains("Invalid numeric filter value abc"));
}

#[test]
fn test_zero_limit_rejected_by_parser() {
    let result = Cli::try_parse_from(["querysample", "t.toml", "--limit", "0"]);
    assert!(result.is_err());
}

#[test]
fn test_desc_requires_order_by() {
    let result = Cli::try_parse_from(["querysample", "t.toml", "--desc"]);
    assert!(result.is_err());
}

#[test]
fn test_missing_request_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");
    let cli = parse(&[missing.to_str().unwrap()]);
    assert!(render(&cli).is_err());
}
