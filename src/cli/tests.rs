//! Unit tests for CLI parsing and config layering

use crate::cli::Cli;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_positional_output_dir() {
    let cli = Cli::try_parse_from(["lambdagen", "target/java"]).unwrap();
    assert_eq!(cli.output_dir, Some(PathBuf::from("target/java")));
    assert!(!cli.no_throwing);
    assert!(!cli.dry_run);
    assert!(cli.root_package.is_none());
}

#[test]
fn test_all_flags_parse() {
    let cli = Cli::try_parse_from([
        "lambdagen",
        "out",
        "--config",
        "lambdagen.toml",
        "--package",
        "com.example.fn",
        "--no-throwing",
        "--strict",
        "--dry-run",
        "--template",
        "custom.jinja",
        "--log-level",
        "debug",
        "--trace",
    ])
    .unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("lambdagen.toml")));
    assert_eq!(cli.root_package.as_deref(), Some("com.example.fn"));
    assert!(cli.no_throwing);
    assert!(cli.strict);
    assert!(cli.dry_run);
    assert_eq!(cli.template, Some(PathBuf::from("custom.jinja")));
    assert_eq!(cli.log_level.as_deref(), Some("debug"));
    assert!(cli.trace);
}

#[test]
fn test_short_flags() {
    let cli = Cli::try_parse_from(["lambdagen", "-p", "org.acme", "-c", "x.toml", "out"]).unwrap();
    assert_eq!(cli.root_package.as_deref(), Some("org.acme"));
    assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
}

#[test]
fn test_unknown_flag_is_rejected() {
    assert!(Cli::try_parse_from(["lambdagen", "out", "--colour"]).is_err());
}

#[test]
fn test_flags_override_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lambdagen.toml");
    std::fs::write(
        &path,
        "root_package = \"from.file\"\nthrowing = true\nfile_extension = \"jav\"\n",
    )
    .unwrap();
    let cli = Cli::try_parse_from([
        "lambdagen",
        "out",
        "--config",
        path.to_str().unwrap(),
        "--package",
        "from.flag",
        "--no-throwing",
    ])
    .unwrap();
    let config = cli.resolve_config().unwrap();
    assert_eq!(config.root_package, "from.flag");
    assert!(!config.throwing);
    assert_eq!(config.file_extension, "jav");
    assert_eq!(config.output_dir, Some(PathBuf::from("out")));
}

#[test]
fn test_missing_explicit_config_is_error() {
    let cli = Cli::try_parse_from(["lambdagen", "out", "--config", "/nonexistent/lambdagen.toml"])
        .unwrap();
    assert!(cli.resolve_config().is_err());
}

#[test]
fn test_invalid_package_flag_is_error() {
    let cli = Cli::try_parse_from(["lambdagen", "out", "--package", "has space"]).unwrap();
    assert!(cli.resolve_config().is_err());
}

#[test]
fn test_log_level_flag() {
    let cli = Cli::try_parse_from(["lambdagen", "--log-level", "trace"]).unwrap();
    assert_eq!(cli.log_config().log_level, "trace");
}
