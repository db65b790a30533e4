use std::process::ExitStatus;

use anyhow::Error;

use crate::lib::errors::{LaunchError, EXIT_LAUNCHER_FAILURE};

/// Offset shells add to a terminating signal number.
const SIGNAL_EXIT_BASE: i32 = 128;

/// How the delegated script terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildExit {
    pub exit_code: i32,
    pub signal: Option<i32>,
}

impl ChildExit {
    pub fn from_status(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return Self {
                exit_code: code,
                signal: None,
            };
        }

        match terminating_signal(&status) {
            Some(signal) => Self {
                exit_code: SIGNAL_EXIT_BASE + signal,
                signal: Some(signal),
            },
            None => Self {
                exit_code: EXIT_LAUNCHER_FAILURE,
                signal: None,
            },
        }
    }
}

#[cfg(unix)]
fn terminating_signal(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn terminating_signal(_status: &ExitStatus) -> Option<i32> {
    None
}

/// Bundles a launcher failure message with the exit code to terminate with.
#[derive(Debug)]
pub struct LaunchExit {
    message: String,
    exit_code: i32,
}

impl LaunchExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:#}"),
            exit_code: EXIT_LAUNCHER_FAILURE,
        }
    }

    pub fn from_launch_error(err: LaunchError) -> Self {
        Self {
            message: format!("configure: {err}"),
            exit_code: err.exit_code(),
        }
    }

    pub fn report(self) -> i32 {
        eprintln!("{}", self.message);
        self.exit_code
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    #[cfg(test)]
    pub fn message(&self) -> &str {
        &self.message
    }
}
