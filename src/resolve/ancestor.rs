use std::path::{Path, PathBuf};

use crate::resolve::classify::FsProbe;
use crate::resolve::error::{NotFound, ResolveResult, EXISTING_ANCESTOR};

/// Find the nearest existing directory for a possibly-nonexistent target.
///
/// Starting from `path` itself, walk to its parent, grandparent and so on,
/// returning the first directory that exists on the filesystem. Used to seed
/// interactive shell sessions at a directory that is guaranteed to exist even
/// when the resolved target (for example an output file that has not been
/// built yet) does not.
///
/// Fails only when no ancestor exists at all; the platform root is assumed to
/// exist, so this does not happen in practice for rooted paths.
pub fn first_existing_directory(path: &Path, fs: &dyn FsProbe) -> ResolveResult<PathBuf> {
    let mut current = Some(path);
    while let Some(p) = current {
        if !p.as_os_str().is_empty() && fs.dir_exists(p) {
            return Ok(p.to_path_buf());
        }
        current = p.parent();
    }
    Err(NotFound::new(EXISTING_ANCESTOR))
}
