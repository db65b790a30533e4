//! LaunchProfile and interpreter/argument resolution.
use std::{
    env,
    ffi::{OsStr, OsString},
    path::PathBuf,
};

use crate::launcher::config::CONFIG_ENV_KEY;

/// Interpreter used when neither `PYTHON_EXE` nor the config file names one.
pub const DEFAULT_INTERPRETER: &str = "python";
/// Argument handed to the delegated script when the caller supplies none.
pub const CONF_DEFAULT: &str = "etc/conf";
pub const PYTHON_EXE_ENV: &str = "PYTHON_EXE";
pub const ROOT_ENV: &str = "CONFIGURE_ROOT";
pub const DRY_RUN_ENV: &str = "CONFIGURE_LAUNCHER_DRY_RUN";

/// Where the interpreter name came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpreterSource {
    Env,
    ConfigFile,
    Default,
}

impl InterpreterSource {
    pub const fn as_str(&self) -> &'static str {
        match self {
            InterpreterSource::Env => "env",
            InterpreterSource::ConfigFile => "config_file",
            InterpreterSource::Default => "default",
        }
    }
}

/// Environment inputs captured once at startup.
#[derive(Debug, Clone, Default)]
pub struct LaunchEnv {
    pub python_exe: Option<OsString>,
    pub root: Option<OsString>,
    pub config_path: Option<OsString>,
    pub dry_run: Option<OsString>,
}

impl LaunchEnv {
    /// Read every launcher variable from the process environment.
    pub fn capture() -> Self {
        Self {
            python_exe: env::var_os(PYTHON_EXE_ENV),
            root: env::var_os(ROOT_ENV),
            config_path: env::var_os(CONFIG_ENV_KEY),
            dry_run: env::var_os(DRY_RUN_ENV),
        }
    }
}

/// Resolved launch profile.
#[derive(Debug, Clone)]
pub struct LaunchProfile {
    pub root: PathBuf,
    pub script: PathBuf,
    pub interpreter: OsString,
    pub interpreter_source: InterpreterSource,
    pub args: Vec<OsString>,
    pub default_args_applied: bool,
    pub config_path: Option<PathBuf>,
    pub dry_run: bool,
}

impl LaunchProfile {
    /// Full command line: interpreter, script, then the effective arguments.
    pub fn command_line(&self) -> Vec<OsString> {
        let mut line = Vec::with_capacity(self.args.len() + 2);
        line.push(self.interpreter.clone());
        line.push(self.script.clone().into_os_string());
        line.extend(self.args.iter().cloned());
        line
    }

    /// Lossy UTF-8 rendering of the arguments for logs and dry-run output.
    pub fn display_args(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }
}

/// Resolve the interpreter in the order: `PYTHON_EXE` → config file → `python`.
///
/// Empty values count as unset at both levels.
pub fn resolve_interpreter(
    env_value: Option<OsString>,
    configured: Option<&str>,
) -> (OsString, InterpreterSource) {
    if let Some(value) = env_value.filter(|v| !v.is_empty()) {
        return (value, InterpreterSource::Env);
    }

    if let Some(value) = configured.filter(|v| !v.is_empty()) {
        return (OsString::from(value), InterpreterSource::ConfigFile);
    }

    (
        OsString::from(DEFAULT_INTERPRETER),
        InterpreterSource::Default,
    )
}

/// Caller arguments win whenever there is at least one; otherwise the defaults apply.
///
/// Returns the effective list and whether the defaults were substituted.
pub fn effective_args(args: Vec<OsString>, defaults: Option<&[String]>) -> (Vec<OsString>, bool) {
    if !args.is_empty() {
        return (args, false);
    }

    let defaults = match defaults {
        Some(values) => values.iter().map(OsString::from).collect(),
        None => vec![OsString::from(CONF_DEFAULT)],
    };
    (defaults, true)
}

/// Accepts `1`, `true`, or `yes` in any case.
pub fn is_truthy(value: Option<&OsStr>) -> bool {
    value
        .and_then(OsStr::to_str)
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}
