//! Launch the delegated configure script and report how it ended.
pub mod command;
pub mod config;
pub mod exit;

use std::io::{self, Write};

use serde_json::json;
use tracing::debug;

use crate::{
    cli::LaunchProfile,
    lib::{
        errors::LaunchError,
        telemetry::{self, LaunchTelemetry},
    },
};

pub use command::build_configure_command;
pub use config::LauncherConfig;
pub use exit::{ChildExit, LaunchExit};

/// Result of a launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// Dry run: the pretty JSON plan that would have been executed.
    Planned(String),
    /// The child ran to completion.
    Exited(ChildExit),
}

impl LaunchOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchOutcome::Planned(_) => 0,
            LaunchOutcome::Exited(exit) => exit.exit_code,
        }
    }
}

/// Run the profile: spawn one child, wait for it, and hand back its status untouched.
pub fn run(profile: &LaunchProfile) -> Result<LaunchOutcome, LaunchError> {
    let root = profile.root.to_string_lossy();
    let interpreter = profile.interpreter.to_string_lossy();
    let script = profile.script.to_string_lossy();
    let args = profile.display_args();
    telemetry::emit_launch(&LaunchTelemetry {
        root: &root,
        interpreter: &interpreter,
        interpreter_source: profile.interpreter_source.as_str(),
        script: &script,
        args: &args,
        default_args_applied: profile.default_args_applied,
    });

    if profile.dry_run {
        return Ok(LaunchOutcome::Planned(plan_payload(profile)));
    }

    let mut child = build_configure_command(profile).spawn().map_err(|source| {
        debug!(
            target: "configure_launcher::launch",
            interpreter = %interpreter,
            reason = %source,
            "Failed to start interpreter"
        );
        LaunchError::Spawn {
            interpreter: profile.interpreter.clone(),
            source,
        }
    })?;

    let status = child.wait().map_err(|source| LaunchError::Wait {
        interpreter: profile.interpreter.clone(),
        source,
    })?;

    let exit = ChildExit::from_status(status);
    telemetry::emit_child_exit(exit.exit_code, exit.signal);
    Ok(LaunchOutcome::Exited(exit))
}

/// Write a dry-run plan to `out`. A reader that hangs up early is not a failure.
pub fn write_plan(out: &mut impl Write, plan: &str) -> io::Result<()> {
    match writeln!(out, "{plan}").and_then(|_| out.flush()) {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

/// Pretty JSON description of the invocation a real launch would perform.
pub fn plan_payload(profile: &LaunchProfile) -> String {
    let command_line: Vec<String> = profile
        .command_line()
        .iter()
        .map(|part| part.to_string_lossy().into_owned())
        .collect();

    let payload = json!({
        "status": "planned",
        "root": profile.root.to_string_lossy(),
        "interpreter": profile.interpreter.to_string_lossy(),
        "interpreter_source": profile.interpreter_source.as_str(),
        "script": profile.script.to_string_lossy(),
        "args": profile.display_args(),
        "default_args_applied": profile.default_args_applied,
        "config_path": profile.config_path.as_ref().map(|path| path.to_string_lossy()),
        "command_line": command_line,
    });

    serde_json::to_string_pretty(&payload).unwrap_or_else(|_| payload.to_string())
}
