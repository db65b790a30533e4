//! Builds the child process invocation for the delegated configure script.

use std::process::{Command, Stdio};

use crate::cli::LaunchProfile;

/// Build `<interpreter> <root>/etc/configure.py <args...>`.
///
/// The child inherits stdio, environment, and working directory, so relative arguments such
/// as `etc/conf` resolve against the caller's directory.
pub fn build_configure_command(profile: &LaunchProfile) -> Command {
    let mut command = Command::new(&profile.interpreter);
    command
        .arg(&profile.script)
        .args(&profile.args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    command
}
