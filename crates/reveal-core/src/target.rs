use std::path::{Path, PathBuf};

use crate::error::RevealError;

/// Picks the path to reveal: an explicit argument wins over the document
/// the host reports as active.
pub fn current_file_path(
    explicit: Option<&Path>,
    active_document: Option<&Path>,
) -> Result<PathBuf, RevealError> {
    explicit
        .filter(|p| !p.as_os_str().is_empty())
        .or(active_document.filter(|p| !p.as_os_str().is_empty()))
        .map(Path::to_path_buf)
        .ok_or(RevealError::NoPath)
}
