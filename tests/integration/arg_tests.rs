//! These tests are mostly here just to ensure that invalid results will be
//! caught when passing arguments.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::bpal_command;

#[test]
fn test_small_rate() {
    bpal_command(&["-C", "./tests/valid_configs/empty_config.toml"])
        .arg("-r")
        .arg("49")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'--rate' must be greater"));
}

#[test]
fn test_invalid_rate() {
    bpal_command(&["-C", "./tests/valid_configs/empty_config.toml"])
        .arg("-r")
        .arg("very fast")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'--rate' was set with an invalid value",
        ));
}

#[test]
fn test_invalid_mode() {
    bpal_command(&["-m", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a valid mode"));
}

#[test]
fn test_level_out_of_range() {
    bpal_command(&["-l", "101"]).assert().failure();
}

#[test]
fn test_unknown_argument() {
    bpal_command(&["--wingardium_leviosa"]).assert().failure();
}
