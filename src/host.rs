//! Traits at the host-IDE boundary, plus the dispatch helpers that turn a
//! host-side handle into a resolved path.
//!
//! All methods on these traits must be called on the host's single serialized
//! coordination thread; see [`crate::props::PropertySource`].

use std::path::PathBuf;

use crate::props::{read_properties, PropertyBag, PropertySource};
use crate::resolve::classify::FsProbe;
use crate::resolve::{self, NotFound, ResolveResult, ACTIVE_CONFIGURATION, SELECTED_ITEM_PATH};

/// A host-side solution. The host supplies the solution's full path
/// directly; no property bag is involved.
pub trait SolutionHandle {
    fn full_path(&self) -> PathBuf;
}

/// A host-side project: its own properties plus, when the host exposes one,
/// the property set of the active build configuration.
pub trait ProjectHandle {
    fn properties(&self) -> Option<&dyn PropertySource>;

    /// The active configuration's properties, if the host exposes them
    /// directly. When absent, [`active_configuration_bag`] falls back to the
    /// nested `ActiveConfiguration` entry of the project bag.
    fn active_configuration(&self) -> Option<&dyn PropertySource>;
}

/// A host-side project item (a file under a project).
pub trait ProjectItemHandle {
    fn properties(&self) -> Option<&dyn PropertySource>;
}

/// One entry of the host's current selection. A selected entry exposes a
/// project or a project item, mutually exclusive; both absent is possible
/// and such entries are skipped by consumers.
pub trait SelectedEntry {
    fn project(&self) -> Option<&dyn ProjectHandle>;
    fn project_item(&self) -> Option<&dyn ProjectItemHandle>;
}

/// Read a project's own property bag.
pub fn project_bag(project: &dyn ProjectHandle) -> PropertyBag {
    read_properties(project.properties())
}

/// The active-configuration bag for `project`.
///
/// Prefers the configuration source the host exposes directly. Otherwise the
/// project-level bag is consulted for a nested `ActiveConfiguration` bag.
/// Neither being available is `NotFound`.
pub fn active_configuration_bag(project: &dyn ProjectHandle) -> ResolveResult<PropertyBag> {
    if let Some(source) = project.active_configuration() {
        return Ok(read_properties(Some(source)));
    }

    let bag = project_bag(project);
    bag.bag("ActiveConfiguration")
        .cloned()
        .ok_or(NotFound::new(ACTIVE_CONFIGURATION))
}

/// Resolve a project's own file path.
pub fn project_path(project: &dyn ProjectHandle, fs: &dyn FsProbe) -> ResolveResult<PathBuf> {
    resolve::project::resolve(&project_bag(project), fs)
}

/// Resolve a project's build-artifact path from its active configuration.
pub fn output_path(project: &dyn ProjectHandle, fs: &dyn FsProbe) -> ResolveResult<PathBuf> {
    let active_config = active_configuration_bag(project)?;
    resolve::output::resolve(&active_config, &project_bag(project), fs)
}

/// Resolve the solution's path.
pub fn solution_path(solution: &dyn SolutionHandle, fs: &dyn FsProbe) -> ResolveResult<PathBuf> {
    resolve::solution::resolve(&solution.full_path(), fs)
}

/// Resolve the path of one selected entry: the project if present, otherwise
/// the project item, otherwise `NotFound`.
pub fn selected_entry_path(entry: &dyn SelectedEntry, fs: &dyn FsProbe) -> ResolveResult<PathBuf> {
    if let Some(project) = entry.project() {
        return project_path(project, fs);
    }
    if let Some(item) = entry.project_item() {
        return resolve::item::resolve(&read_properties(item.properties()));
    }
    Err(NotFound::new(SELECTED_ITEM_PATH))
}
