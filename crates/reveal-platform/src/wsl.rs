use log::debug;
use std::path::PathBuf;
use which::which;

/// Set by WSL in every process started inside a distro.
const WSL_DISTRO_ENV: &str = "WSL_DISTRO_NAME";

/// Translates Linux paths to Windows paths when invoked as `wslpath -w`.
const PATH_HELPER: &str = "wslpath";

pub fn wsl_distro_name() -> Option<String> {
    std::env::var(WSL_DISTRO_ENV)
        .ok()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
}

pub fn find_path_helper() -> Option<PathBuf> {
    match which(PATH_HELPER) {
        Ok(path) => {
            debug!("Found {} at {:?}", PATH_HELPER, path);
            Some(path)
        }
        Err(e) => {
            debug!("{} not available: {}", PATH_HELPER, e);
            None
        }
    }
}
