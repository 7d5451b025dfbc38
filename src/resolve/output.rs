use std::path::PathBuf;

use crate::props::PropertyBag;
use crate::resolve::classify::{self, FsProbe};
use crate::resolve::error::{NotFound, ResolveResult, PROJECT_OUTPUT_PATH};
use crate::resolve::project;

/// Property names tried for the build artifact, in priority order, against
/// the active-configuration bag. First present key wins.
pub const CANDIDATE_KEYS: [&str; 3] = ["PrimaryOutput", "CodeAnalysisInputAssembly", "OutputPath"];

/// Secondary key appended when the resolved candidate is a directory. Looked
/// up in the *project-level* bag, not the configuration bag.
const OUTPUT_FILE_NAME_KEY: &str = "OutputFileName";

/// Resolve a project's build-artifact path.
///
/// Behaviour:
/// - The first present key of [`CANDIDATE_KEYS`] in `active_config` supplies
///   the candidate.
/// - A candidate that does not classify as rooted is anchored at the parent
///   directory of the project's own path, resolved via
///   [`project::resolve`] over `project_bag`; a `NotFound` from that
///   resolution propagates unchanged.
/// - If the absolute candidate classifies as a directory, `project_bag` must
///   carry `OutputFileName`, which is appended; otherwise `NotFound`.
/// - A configuration bag with no candidate key at all is `NotFound`.
pub fn resolve(
    active_config: &PropertyBag,
    project_bag: &PropertyBag,
    fs: &dyn FsProbe,
) -> ResolveResult<PathBuf> {
    let candidate = CANDIDATE_KEYS
        .iter()
        .find_map(|key| active_config.text(key))
        .ok_or(NotFound::new(PROJECT_OUTPUT_PATH))?;

    let mut path = if classify::is_rooted(fs, candidate) {
        PathBuf::from(candidate)
    } else {
        let project_path = project::resolve(project_bag, fs)?;
        let anchor = project_path
            .parent()
            .ok_or(NotFound::new(PROJECT_OUTPUT_PATH))?;
        anchor.join(candidate)
    };

    let is_dir = classify::is_directory(fs, &path.to_string_lossy());
    if is_dir {
        let file_name = project_bag
            .text(OUTPUT_FILE_NAME_KEY)
            .ok_or(NotFound::new(PROJECT_OUTPUT_PATH))?;
        path.push(file_name);
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::PropertyValue;
    use crate::resolve::classify::RealFs;
    use std::fs;
    use tempfile::tempdir;

    fn bag(entries: &[(&str, &str)]) -> PropertyBag {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), PropertyValue::Text(v.to_string())))
            .collect()
    }

    #[test]
    fn rooted_file_candidate_resolves_directly() {
        let cfg = bag(&[("PrimaryOutput", "/proj/bin/out.bin")]);
        let got = resolve(&cfg, &PropertyBag::default(), &RealFs).unwrap();
        assert_eq!(got, PathBuf::from("/proj/bin/out.bin"));
    }

    #[test]
    fn relative_candidate_anchors_at_project_parent() {
        let cfg = bag(&[("PrimaryOutput", "bin/out.bin")]);
        let project = bag(&[("FullProjectFileName", "/proj/app.proj")]);
        let got = resolve(&cfg, &project, &RealFs).unwrap();
        assert_eq!(got, PathBuf::from("/proj/bin/out.bin"));
    }

    #[test]
    fn relative_candidate_propagates_project_not_found() {
        let cfg = bag(&[("OutputPath", "bin/Debug/")]);
        let err = resolve(&cfg, &PropertyBag::default(), &RealFs).unwrap_err();
        // The failure comes from the project resolver, unchanged.
        assert_eq!(err.context(), "the project path");
    }

    #[test]
    fn directory_candidate_appends_output_file_name() {
        let cfg = bag(&[("OutputPath", "bin/Debug/")]);
        let project = bag(&[
            ("FullProjectFileName", "/proj/app.proj"),
            ("OutputFileName", "app.dll"),
        ]);
        let got = resolve(&cfg, &project, &RealFs).unwrap();
        assert_eq!(got, PathBuf::from("/proj/bin/Debug/app.dll"));
    }

    #[test]
    fn directory_candidate_without_output_file_name_is_not_found() {
        let cfg = bag(&[("OutputPath", "bin/Debug/")]);
        let project = bag(&[("FullProjectFileName", "/proj/app.proj")]);
        let err = resolve(&cfg, &project, &RealFs).unwrap_err();
        assert_eq!(err.context(), "the project output path");
    }

    #[test]
    fn existing_output_directory_is_detected_without_suffix() {
        // A materialized output directory classifies as a directory even
        // without a trailing separator.
        let td = tempdir().unwrap();
        let out_dir = td.path().join("bin");
        fs::create_dir_all(&out_dir).unwrap();

        let cfg = bag(&[("OutputPath", &out_dir.to_string_lossy())]);
        let project = bag(&[
            ("FullProjectFileName", "/proj/app.proj"),
            ("OutputFileName", "app.dll"),
        ]);
        let got = resolve(&cfg, &project, &RealFs).unwrap();
        assert_eq!(got, out_dir.join("app.dll"));
    }

    #[test]
    fn missing_candidate_keys_is_not_found() {
        let err = resolve(&PropertyBag::default(), &PropertyBag::default(), &RealFs).unwrap_err();
        assert_eq!(err.context(), "the project output path");
    }

    #[test]
    fn primary_output_wins_over_fallbacks() {
        let cfg = bag(&[
            ("OutputPath", "/ignored/dir/"),
            ("PrimaryOutput", "/proj/bin/out.bin"),
            ("CodeAnalysisInputAssembly", "/ignored/analysis.dll"),
        ]);
        let got = resolve(&cfg, &PropertyBag::default(), &RealFs).unwrap();
        assert_eq!(got, PathBuf::from("/proj/bin/out.bin"));
    }
}
