//! Load and validate the optional launcher configuration file.
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{debug, info};

use crate::lib::errors::ConfigError;

pub const CONFIG_ENV_KEY: &str = "CONFIGURE_LAUNCHER_CONFIG";
/// Picked up from the root directory when no explicit path is given.
pub const IMPLICIT_CONFIG_PATH: &str = "etc/launcher.toml";

/// Launcher settings refined by the configuration file. All fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LauncherConfig {
    pub python_exe: Option<String>,
    pub default_args: Option<Vec<String>>,
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawLauncherFile {
    launcher: Option<RawLauncherSection>,
}

#[derive(Debug, Deserialize, Default)]
struct RawLauncherSection {
    python_exe: Option<String>,
    default_args: Option<Vec<String>>,
}

impl LauncherConfig {
    /// Prefer an explicit path (from `CONFIGURE_LAUNCHER_CONFIG`); otherwise read
    /// `<root>/etc/launcher.toml` if it exists; otherwise fall back to defaults.
    pub fn locate(explicit: Option<OsString>, root: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit.filter(|value| !value.is_empty()) {
            let path = PathBuf::from(path);
            if !path.is_file() {
                let error = ConfigError::MissingFile { path: path.clone() };
                debug!(
                    target: "configure_launcher::config",
                    path = %path.display(),
                    reason = %error,
                    "Configuration file named by CONFIGURE_LAUNCHER_CONFIG is missing"
                );
                return Err(error);
            }
            return Self::load_from_path(path);
        }

        let implicit = root.join(IMPLICIT_CONFIG_PATH);
        if implicit.is_file() {
            return Self::load_from_path(implicit);
        }

        debug!(
            target: "configure_launcher::config",
            path = %implicit.display(),
            env = CONFIG_ENV_KEY,
            "No launcher configuration file; using defaults"
        );
        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::from(path.clone()).format(config::FileFormat::Toml));
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            debug!(
                target: "configure_launcher::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawLauncherFile = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            debug!(
                target: "configure_launcher::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, path.clone()).map_err(|err| {
            debug!(
                target: "configure_launcher::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        info!(
            target: "configure_launcher::config",
            path = %path.display(),
            python_exe = config.python_exe.as_deref().unwrap_or(""),
            default_args = ?config.default_args,
            "Configuration file loaded successfully"
        );
        Ok(config)
    }

    fn from_raw(raw: RawLauncherFile, path: PathBuf) -> Result<Self, ConfigError> {
        let section = raw.launcher.unwrap_or_default();

        if let Some(python_exe) = section.python_exe.as_deref() {
            if python_exe.is_empty() {
                return Err(ConfigError::InvalidField {
                    path,
                    field: "launcher.python_exe",
                    message: "Remove the key or name an interpreter".into(),
                });
            }
        }

        if let Some(default_args) = section.default_args.as_deref() {
            if default_args.is_empty() {
                return Err(ConfigError::InvalidField {
                    path,
                    field: "launcher.default_args",
                    message: "Provide at least one argument or remove the key".into(),
                });
            }
            if default_args.iter().any(String::is_empty) {
                return Err(ConfigError::InvalidField {
                    path,
                    field: "launcher.default_args",
                    message: "Arguments must not be empty strings".into(),
                });
            }
        }

        Ok(Self {
            python_exe: section.python_exe,
            default_args: section.default_args,
            source_path: Some(path),
        })
    }
}
