//! Context-menu command actions: resolve the selected entity's path and hand
//! it to a shell-launch sink.
//!
//! This is the adapter layer a host binding owns. It is an explicit struct,
//! constructed and torn down by whoever wires the core into a host; there is
//! no process-wide singleton here. A resolver failure is a silent no-op: no
//! shell is launched, nothing surfaces to the user, and the failure is only
//! visible at debug level in the log.

use anyhow::Context;

use crate::host::{self, ProjectHandle, SelectedEntry, SolutionHandle};
use crate::launch::{Launcher, ProcessLauncher, ShellKind};
use crate::resolve::classify::FsProbe;
use crate::resolve::{NotFound, RealFs};

/// The command actions, parameterized over the launch sink and filesystem
/// probe so hosts and tests can substitute either.
pub struct OpenCommands<L = ProcessLauncher, F = RealFs> {
    launcher: L,
    fs: F,
}

impl OpenCommands {
    pub fn new() -> Self {
        OpenCommands {
            launcher: ProcessLauncher,
            fs: RealFs,
        }
    }
}

impl Default for OpenCommands {
    fn default() -> Self {
        OpenCommands::new()
    }
}

impl<L: Launcher, F: FsProbe> OpenCommands<L, F> {
    pub fn with(launcher: L, fs: F) -> Self {
        OpenCommands { launcher, fs }
    }

    /// Open the solution's location in `shell`.
    pub fn open_solution(
        &self,
        solution: &dyn SolutionHandle,
        shell: ShellKind,
    ) -> anyhow::Result<()> {
        match host::solution_path(solution, &self.fs) {
            Ok(path) => self.launch(shell, &path),
            Err(e) => {
                skip(&e);
                Ok(())
            }
        }
    }

    /// Open the location of every selected entry in `shell`.
    ///
    /// Entries exposing neither a project nor a project item are skipped.
    /// The first entry that fails to resolve stops the action; entries
    /// already launched stay launched, the failing one launches nothing.
    pub fn open_selection<'a>(
        &self,
        entries: impl IntoIterator<Item = &'a dyn SelectedEntry>,
        shell: ShellKind,
    ) -> anyhow::Result<()> {
        for entry in entries {
            if entry.project().is_none() && entry.project_item().is_none() {
                continue;
            }
            match host::selected_entry_path(entry, &self.fs) {
                Ok(path) => self.launch(shell, &path)?,
                Err(e) => {
                    skip(&e);
                    return Ok(());
                }
            }
        }
        Ok(())
    }

    /// Open the project's build-output location in `shell`.
    pub fn open_output(
        &self,
        project: &dyn ProjectHandle,
        shell: ShellKind,
    ) -> anyhow::Result<()> {
        match host::output_path(project, &self.fs) {
            Ok(path) => self.launch(shell, &path),
            Err(e) => {
                skip(&e);
                Ok(())
            }
        }
    }

    fn launch(&self, shell: ShellKind, path: &std::path::Path) -> anyhow::Result<()> {
        let invocation = match shell.invocation(path, &self.fs) {
            Ok(inv) => inv,
            Err(e) => {
                skip(&e);
                return Ok(());
            }
        };
        self.launcher
            .launch(&invocation)
            .with_context(|| format!("failed to launch {}", invocation.program()))
    }
}

fn skip(e: &NotFound) {
    tracing::debug!("no path to open: {e}");
}
