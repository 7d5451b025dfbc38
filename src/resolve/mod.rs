//! The path-resolution core: pure functions from host property bags to
//! validated filesystem paths, one resolver per entity kind.

pub mod ancestor;
pub mod classify;
mod error;
pub mod item;
pub mod output;
pub mod project;
pub mod solution;

pub use ancestor::first_existing_directory;
pub use classify::{FsProbe, RealFs};
pub use error::{NotFound, ResolveResult};

pub(crate) use error::{ACTIVE_CONFIGURATION, SELECTED_ITEM_PATH};
