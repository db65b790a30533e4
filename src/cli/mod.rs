//! CLI entrypoint module structure.

pub mod args;
pub mod profile;

pub use args::LauncherArgs;
pub use profile::{
    effective_args, is_truthy, resolve_interpreter, InterpreterSource, LaunchEnv, LaunchProfile,
    CONF_DEFAULT, DEFAULT_INTERPRETER, DRY_RUN_ENV, PYTHON_EXE_ENV, ROOT_ENV,
};
