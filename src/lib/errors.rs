use std::{ffi::OsString, io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Exit code used by shells when a command cannot be found.
pub const EXIT_COMMAND_NOT_FOUND: i32 = 127;
/// Exit code used by shells when a command exists but cannot be executed.
pub const EXIT_COMMAND_NOT_EXECUTABLE: i32 = 126;
/// Exit code for any other launcher-side failure.
pub const EXIT_LAUNCHER_FAILURE: i32 = 1;

/// Errors that can occur while loading or validating the launcher configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested configuration file does not exist.
    #[error("Configuration file {path} does not exist")]
    MissingFile { path: PathBuf },
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Failures raised by the launcher itself, before or while starting the child process.
///
/// A child that starts and exits non-zero is not an error at this layer; its status is
/// passed through untouched.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Failed to determine the current directory: {source}")]
    CurrentDirUnavailable {
        #[source]
        source: io::Error,
    },
    #[error("Failed to locate the launcher executable: {source}")]
    ExecutableUnavailable {
        #[source]
        source: io::Error,
    },
    #[error("Root directory {path} could not be resolved: {source}")]
    RootUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to start interpreter `{}`: {source}", interpreter.to_string_lossy())]
    Spawn {
        interpreter: OsString,
        #[source]
        source: io::Error,
    },
    #[error("Failed to wait for interpreter `{}`: {source}", interpreter.to_string_lossy())]
    Wait {
        interpreter: OsString,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl LaunchError {
    /// Exit code the launcher terminates with for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::Spawn { source, .. } => match source.kind() {
                io::ErrorKind::NotFound => EXIT_COMMAND_NOT_FOUND,
                io::ErrorKind::PermissionDenied => EXIT_COMMAND_NOT_EXECUTABLE,
                _ => EXIT_LAUNCHER_FAILURE,
            },
            _ => EXIT_LAUNCHER_FAILURE,
        }
    }
}
