pub mod commands;
pub mod host;
pub mod launch;
pub mod props;
pub mod resolve;

pub use crate::commands::OpenCommands;
pub use crate::launch::{Launcher, ProcessLauncher, ShellInvocation, ShellKind};
pub use crate::props::{read_properties, PropertyBag, PropertyReadError, PropertySource, PropertyValue};
pub use crate::resolve::{first_existing_directory, FsProbe, NotFound, RealFs, ResolveResult};
