use std::path::{Path, PathBuf};

use crate::props::PropertyBag;
use crate::resolve::classify::{self, FsProbe};
use crate::resolve::error::{NotFound, ResolveResult, PROJECT_PATH};

/// Property names tried for the project's own path, in priority order.
///
/// The ordering is a design invariant: native, managed and analysis-only
/// project types expose different subsets of these keys, and priority order
/// selects the most authoritative one available. First present key wins.
pub const CANDIDATE_KEYS: [&str; 3] = ["FullProjectFileName", "FullPath", "ProjectFile"];

/// Secondary key appended when the winning candidate is a directory.
const FILE_NAME_KEY: &str = "FileName";

/// Resolve a project's own file path from its property bag.
///
/// Behaviour:
/// - The first present key of [`CANDIDATE_KEYS`] supplies the candidate.
/// - A candidate that classifies as a directory must be completed with the
///   bag's `FileName` value; a directory candidate without `FileName` is
///   `NotFound`.
/// - A bag with no candidate key at all is `NotFound`.
pub fn resolve(bag: &PropertyBag, fs: &dyn FsProbe) -> ResolveResult<PathBuf> {
    let candidate = CANDIDATE_KEYS
        .iter()
        .find_map(|key| bag.text(key))
        .ok_or(NotFound::new(PROJECT_PATH))?;

    construct(bag, candidate, fs)
}

fn construct(bag: &PropertyBag, candidate: &str, fs: &dyn FsProbe) -> ResolveResult<PathBuf> {
    if classify::is_directory(fs, candidate) {
        let file_name = bag.text(FILE_NAME_KEY).ok_or(NotFound::new(PROJECT_PATH))?;
        Ok(Path::new(candidate).join(file_name))
    } else {
        Ok(PathBuf::from(candidate))
    }
}
