use std::path::{Path, PathBuf};

use crate::resolve::classify::FsProbe;
use crate::resolve::error::{NotFound, ResolveResult, SELECTED_ITEM_PATH};

/// Resolve a solution's file path from the raw path the host supplies.
///
/// The host hands over the solution's full path directly, so there is no
/// property bag to consult. The only validation is that the path's parent
/// directory exists; a missing or unreachable parent is `NotFound`.
pub fn resolve(raw_path: &Path, fs: &dyn FsProbe) -> ResolveResult<PathBuf> {
    let parent = raw_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or(NotFound::new(SELECTED_ITEM_PATH))?;

    if !fs.dir_exists(parent) {
        return Err(NotFound::new(SELECTED_ITEM_PATH));
    }

    Ok(raw_path.to_path_buf())
}
