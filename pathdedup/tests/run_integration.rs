//! Integration tests for full deduplication runs.
//!
//! These tests drive the public API end to end: configuration layering,
//! reading the variable from the environment, and writing the output file.
//! Tests that touch the process environment are marked `#[serial]`.

mod common;

use std::fs;

use common::{EnvGuard, Scratch};
use pathdedup::config::{Config, ConfigBuilder};
use pathdedup::{dedupe_to_file, run, DedupePlan, Error};
use serial_test::serial;

const VAR: &str = "PATHDEDUP_IT_PATH";

fn config_for(scratch: &Scratch) -> pathdedup::ResolvedConfig {
    ConfigBuilder::new()
        .skip_env()
        .with_config(Config {
            variable: Some(VAR.to_string()),
            delimiter: Some(';'),
            output_path: Some(scratch.output.clone()),
        })
        .build()
        .unwrap()
}

// ============================================================================
// Explicit inputs
// ============================================================================

#[test]
fn test_windows_style_path() {
    let scratch = Scratch::new();
    dedupe_to_file("C:\\a\\;C:\\b;C:\\a;C:\\b\\", ';', &scratch.output).unwrap();
    assert_eq!(scratch.read_output(), "C:\\a;C:\\b");
}

#[test]
fn test_empty_source_writes_empty_file() {
    let scratch = Scratch::new();
    dedupe_to_file("", ';', &scratch.output).unwrap();
    assert_eq!(scratch.read_output(), "");
}

#[test]
fn test_output_is_a_fixed_point() {
    let scratch = Scratch::new();
    let source = "/opt/x/:/usr/bin:/opt/x:/usr/bin//:/sbin";

    dedupe_to_file(source, ':', &scratch.output).unwrap();
    let first = scratch.read_output();

    dedupe_to_file(&first, ':', &scratch.output).unwrap();
    assert_eq!(scratch.read_output(), first);
    assert_eq!(first, "/opt/x:/usr/bin:/sbin");
}

#[test]
fn test_repeated_appends_collapse() {
    // A build tool appending the same block over and over.
    let block = "C:\\Python;C:\\Git\\cmd;C:\\Windows\\System32";
    let source = vec![block; 200].join(";");

    let plan = DedupePlan::build(&source, ';');
    assert_eq!(plan.output(), block);
    assert_eq!(plan.report().removed_entries, 597);
    assert!(plan.report().input_length > 8191);
    assert!(!plan.report().exceeds_windows_limit());
}

#[test]
fn test_overwrites_previous_output() {
    let scratch = Scratch::new();
    fs::write(&scratch.output, "stale contents that are much longer").unwrap();

    dedupe_to_file("a;b", ';', &scratch.output).unwrap();
    assert_eq!(scratch.read_output(), "a;b");
}

// ============================================================================
// Environment-driven runs
// ============================================================================

#[test]
#[serial]
fn test_run_from_environment() {
    let scratch = Scratch::new();
    let _guard = EnvGuard::set(VAR, "C:\\a\\;C:\\b;C:\\a;C:\\b\\");

    let report = run(&config_for(&scratch)).unwrap();

    assert_eq!(scratch.read_output(), "C:\\a;C:\\b");
    assert_eq!(report.input_entries, 4);
    assert_eq!(report.unique_entries, 2);
}

#[test]
#[serial]
fn test_run_missing_variable() {
    let scratch = Scratch::new();
    let _guard = EnvGuard::unset(VAR);

    let err = run(&config_for(&scratch)).unwrap_err();
    assert!(matches!(err, Error::VariableNotSet { ref name } if name == VAR));
    assert!(!scratch.output.exists());
}

#[test]
#[serial]
fn test_run_empty_variable() {
    let scratch = Scratch::new();
    let _guard = EnvGuard::set(VAR, "");

    let err = run(&config_for(&scratch)).unwrap_err();
    assert!(matches!(err, Error::VariableEmpty { .. }));
}

#[test]
#[serial]
fn test_run_unwritable_output() {
    let scratch = Scratch::new();
    let _guard = EnvGuard::set(VAR, "a;a");

    let mut config = config_for(&scratch);
    config.output_path = scratch.output.join("not-a-dir").join("path.txt");

    let err = run(&config).unwrap_err();
    assert!(matches!(err, Error::OutputWrite { .. }));
}

#[test]
#[serial]
fn test_env_overrides_feed_run() {
    let scratch = Scratch::new();
    let _var = EnvGuard::set(VAR, "x|y|x/");
    let _name = EnvGuard::set("DEDUPE_PATH_VARIABLE", VAR);
    let _delim = EnvGuard::set("DEDUPE_PATH_DELIMITER", "|");
    let _out = EnvGuard::set("DEDUPE_PATH_OUTPUT", scratch.output.to_str().unwrap());

    let config = ConfigBuilder::new().build().unwrap();
    run(&config).unwrap();

    assert_eq!(scratch.read_output(), "x|y");
}
