use std::fs;
use std::io;
use std::path::Path;

/// Seam over the filesystem queries the classifier depends on.
///
/// The queries are fallible on purpose: some candidate paths are virtual or
/// not yet materialized, and the classifier's fallback behaviour when a query
/// fails is part of its contract. Production code uses [`RealFs`]; tests
/// substitute probes that fail on demand.
pub trait FsProbe {
    /// Whether `path` names a directory. `Err` means the query itself could
    /// not be answered (nonexistent path, permission trouble, etc.).
    fn metadata_is_dir(&self, path: &Path) -> io::Result<bool>;

    /// Whether `path` is absolute under the platform's path semantics. `Err`
    /// means absoluteness could not be determined.
    fn is_rooted(&self, path: &Path) -> io::Result<bool>;

    /// Plain existence check: `true` iff `path` exists and is a directory.
    /// No heuristics; used for parent-directory validation and the ancestor
    /// walk.
    fn dir_exists(&self, path: &Path) -> bool {
        self.metadata_is_dir(path).unwrap_or(false)
    }
}

/// [`FsProbe`] backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFs;

impl FsProbe for RealFs {
    fn metadata_is_dir(&self, path: &Path) -> io::Result<bool> {
        fs::metadata(path).map(|m| m.is_dir())
    }

    fn is_rooted(&self, path: &Path) -> io::Result<bool> {
        Ok(path.is_absolute())
    }
}

/// Classify `path` as a directory.
///
/// Behaviour:
/// - When the filesystem query answers, its answer wins.
/// - When the query itself fails, fall back to a syntactic heuristic: the
///   path is a directory iff it ends with a path-separator character. This
///   keeps virtual or not-yet-materialized directory candidates (for example
///   an output directory that has not been built) classified correctly.
pub fn is_directory(fs: &dyn FsProbe, path: &str) -> bool {
    match fs.metadata_is_dir(Path::new(path)) {
        Ok(is_dir) => is_dir,
        Err(_) => ends_with_separator(path),
    }
}

/// Classify `path` as rooted (absolute).
///
/// When the platform query fails the path is treated as already absolute.
/// That is the conservative choice here: it avoids double-prefixing a path
/// that merely looked unrooted because of a transient query failure.
pub fn is_rooted(fs: &dyn FsProbe, path: &str) -> bool {
    fs.is_rooted(Path::new(path)).unwrap_or(true)
}

// Both `/` and the platform main separator count, mirroring hosts that
// accept either on Windows.
fn ends_with_separator(path: &str) -> bool {
    path.ends_with('/') || path.ends_with(std::path::MAIN_SEPARATOR)
}
