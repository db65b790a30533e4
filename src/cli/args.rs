//! CLI argument definitions and `LaunchProfile` construction.
use std::ffi::OsString;

use anyhow::{Context, Result};
use clap::Parser;

use super::{effective_args, is_truthy, resolve_interpreter, LaunchEnv, LaunchProfile};
use crate::{
    launcher::config::LauncherConfig,
    lib::{errors::LaunchError, paths},
};

/// Command-line arguments.
///
/// The launcher owns no flags; everything after the program name belongs to the delegated
/// script, so `--help` and `--version` are forwarded rather than answered here.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "configure",
    about = "Run etc/configure.py with the selected Python interpreter",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct LauncherArgs {
    /// Arguments forwarded verbatim to etc/configure.py (defaults to `etc/conf`).
    #[arg(value_name = "ARGS", allow_hyphen_values = true)]
    pub args: Vec<OsString>,
}

impl LauncherArgs {
    /// Parse raw process arguments, the first being the program name.
    pub fn from_os_args<I, T>(raw: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut raw = raw.into_iter().map(Into::into);
        let program = raw.next().unwrap_or_else(|| OsString::from("configure"));
        // Leading `--` makes clap treat every caller token as positional, including a
        // caller-supplied `--`.
        let argv = [program, OsString::from("--")].into_iter().chain(raw);
        Self::try_parse_from(argv).context("failed to read launcher arguments")
    }

    /// Build a `LaunchProfile` from CLI args and environment variables.
    pub fn build(self) -> Result<LaunchProfile, LaunchError> {
        self.build_with(LaunchEnv::capture())
    }

    /// Build a `LaunchProfile` from CLI args and already captured environment values.
    pub fn build_with(self, env: LaunchEnv) -> Result<LaunchProfile, LaunchError> {
        let root = paths::resolve_root(env.root)?;
        let config = LauncherConfig::locate(env.config_path, &root)?;
        let (interpreter, interpreter_source) =
            resolve_interpreter(env.python_exe, config.python_exe.as_deref());
        let (args, default_args_applied) =
            effective_args(self.args, config.default_args.as_deref());

        Ok(LaunchProfile {
            script: paths::script_path(&root),
            root,
            interpreter,
            interpreter_source,
            args,
            default_args_applied,
            config_path: config.source_path,
            dry_run: is_truthy(env.dry_run.as_deref()),
        })
    }
}
