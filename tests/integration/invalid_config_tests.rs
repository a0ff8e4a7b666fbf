//! These tests are for testing some invalid config-file-specific options.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::bpal_command;

#[test]
fn test_toml_mismatch_type() {
    bpal_command(&["-C", "./tests/invalid_configs/toml_mismatch_type.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid type"));
}

#[test]
fn test_rate_too_small() {
    bpal_command(&["-C", "./tests/invalid_configs/rate_too_small.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'rate' must be greater"));
}

#[test]
fn test_rate_nonsense() {
    bpal_command(&["-C", "./tests/invalid_configs/rate_nonsense.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'rate' was set with an invalid value",
        ));
}

/// Checks for if a hex is valid.
#[test]
fn test_invalid_colour_hex() {
    bpal_command(&["-C", "./tests/invalid_configs/invalid_colour_hex.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid hex color"));
}

#[test]
fn test_invalid_colour_name() {
    bpal_command(&["-C", "./tests/invalid_configs/invalid_colour_name.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid named color"));
}

/// A config created from scratch should parse cleanly, for obvious reasons.
#[test]
fn test_created_config_is_valid() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bpal.toml");
    let path_str = path.to_str().unwrap();

    // First run creates the file; it fails on --rate, not on the config.
    bpal_command(&["-C", path_str, "-r", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'--rate' must be greater"));

    assert!(path.exists());

    // Second run reads it back; same argument failure, no config error.
    bpal_command(&["-C", path_str, "-r", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file error").not());
}
