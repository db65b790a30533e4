//! Telemetry initialization and launch event helpers.

use std::io::IsTerminal;

use anyhow::Result;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter applied when `RUST_LOG` is unset; the child owns the terminal, so stay quiet.
const DEFAULT_FILTER: &str = "warn";

/// Initialize `tracing`, writing launcher diagnostics to stderr.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Payload for logging a resolved launch as structured telemetry.
#[derive(Debug)]
pub struct LaunchTelemetry<'a> {
    pub root: &'a str,
    pub interpreter: &'a str,
    pub interpreter_source: &'a str,
    pub script: &'a str,
    pub args: &'a [String],
    pub default_args_applied: bool,
}

/// Emit the resolved launch to `tracing`.
pub fn emit_launch(telemetry: &LaunchTelemetry<'_>) {
    debug!(
        target: "configure_launcher::launch",
        root = telemetry.root,
        interpreter = telemetry.interpreter,
        interpreter_source = telemetry.interpreter_source,
        script = telemetry.script,
        args = ?telemetry.args,
        default_args_applied = telemetry.default_args_applied,
        "Launching delegated configure script"
    );
}

/// Record how the child terminated.
pub fn emit_child_exit(exit_code: i32, signal: Option<i32>) {
    debug!(
        target: "configure_launcher::launch",
        exit_code,
        signal = ?signal,
        "Delegated configure script finished"
    );
}
