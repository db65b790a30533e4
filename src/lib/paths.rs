//! Root directory resolution and delegated script location.

use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

use crate::lib::errors::LaunchError;

/// Delegated configuration script, relative to the root directory.
pub const SCRIPT_RELATIVE_PATH: &str = "etc/configure.py";

/// Absolute path of the delegated script under `root`.
pub fn script_path(root: &Path) -> PathBuf {
    root.join(SCRIPT_RELATIVE_PATH)
}

/// Resolve the root directory in the order: explicit override → executable location.
///
/// Neither branch consults the caller's working directory except to absolutize a relative
/// override, so the same launcher resolves the same script from anywhere.
pub fn resolve_root(override_root: Option<OsString>) -> Result<PathBuf, LaunchError> {
    if let Some(root) = override_root.filter(|value| !value.is_empty()) {
        let root = PathBuf::from(root);
        if root.is_absolute() {
            return Ok(root);
        }
        let cwd =
            env::current_dir().map_err(|source| LaunchError::CurrentDirUnavailable { source })?;
        return Ok(cwd.join(root));
    }

    let exe =
        env::current_exe().map_err(|source| LaunchError::ExecutableUnavailable { source })?;
    let exe = exe
        .canonicalize()
        .map_err(|source| LaunchError::RootUnavailable { path: exe, source })?;
    Ok(root_from_executable(&exe))
}

/// First ancestor of the executable's directory that holds the delegated script, or the
/// executable's directory itself when none does.
pub fn root_from_executable(exe: &Path) -> PathBuf {
    let exe_dir = exe.parent().unwrap_or(exe);
    find_root_from(exe_dir).unwrap_or_else(|| exe_dir.to_path_buf())
}

/// Walk up from `start` looking for a directory containing the delegated script.
pub fn find_root_from(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| looks_like_root(dir))
        .map(Path::to_path_buf)
}

fn looks_like_root(dir: &Path) -> bool {
    script_path(dir).is_file()
}
