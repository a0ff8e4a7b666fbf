use std::process::Command;

use assert_cmd::cargo::CommandCargoExt;

/// Returns a command to run the bpal binary with the given arguments.
///
/// Note that every test going through this must fail before the TUI starts,
/// or it would hang waiting on a terminal that isn't there.
pub fn bpal_command(args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("bpal").unwrap();
    cmd.args(args);
    cmd
}
