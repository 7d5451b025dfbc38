//! Shell-launch sink: the three fixed external command templates and the
//! launcher that spawns them.
//!
//! The argument strings produced here are the literal contract other
//! components reproduce to stay interchangeable with this core; tests assert
//! them byte for byte.

use std::io;
use std::path::Path;
use std::process::Command;

use crate::resolve::classify::FsProbe;
use crate::resolve::{first_existing_directory, ResolveResult};

/// Which external shell a resolved path is handed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellKind {
    /// `explorer.exe "<absolute-path>"`
    FileBrowser,
    /// `cmd.exe /K "cd /D <absolute-path>"`
    CommandShell,
    /// `powershell.exe -NoExit -Command "Set-Location -Path <absolute-path>"`
    ScriptingShell,
}

impl ShellKind {
    /// Build the invocation for a resolved path.
    ///
    /// Interactive shells (command shell, scripting shell) must be seeded at
    /// a directory that actually exists, so the resolved target is first
    /// mapped through [`first_existing_directory`]. The file browser receives
    /// the resolved path as-is.
    pub fn invocation(self, path: &Path, fs: &dyn FsProbe) -> ResolveResult<ShellInvocation> {
        match self {
            ShellKind::FileBrowser => Ok(ShellInvocation::file_browser(path)),
            ShellKind::CommandShell => {
                let dir = first_existing_directory(path, fs)?;
                Ok(ShellInvocation::command_shell(&dir))
            }
            ShellKind::ScriptingShell => {
                let dir = first_existing_directory(path, fs)?;
                Ok(ShellInvocation::scripting_shell(&dir))
            }
        }
    }
}

/// One fully-rendered external command: a program name plus its argument
/// string, exactly as the template prescribes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellInvocation {
    program: &'static str,
    arguments: String,
}

impl ShellInvocation {
    /// File-browser template: `explorer.exe "<absolute-path>"`.
    pub fn file_browser(path: &Path) -> Self {
        ShellInvocation {
            program: "explorer.exe",
            arguments: format!("\"{}\"", path.display()),
        }
    }

    /// Command-shell template: `cmd.exe /K "cd /D <absolute-path>"`.
    pub fn command_shell(directory: &Path) -> Self {
        ShellInvocation {
            program: "cmd.exe",
            arguments: format!("/K \"cd /D {}\"", directory.display()),
        }
    }

    /// Scripting-shell template:
    /// `powershell.exe -NoExit -Command "Set-Location -Path <absolute-path>"`.
    pub fn scripting_shell(directory: &Path) -> Self {
        ShellInvocation {
            program: "powershell.exe",
            arguments: format!(
                "-NoExit -Command \"Set-Location -Path {}\"",
                directory.display()
            ),
        }
    }

    pub fn program(&self) -> &str {
        self.program
    }

    pub fn arguments(&self) -> &str {
        &self.arguments
    }

    /// The full rendered command line.
    pub fn command_line(&self) -> String {
        format!("{} {}", self.program, self.arguments)
    }
}

/// Sink that actually runs a [`ShellInvocation`]. Production code uses
/// [`ProcessLauncher`]; tests substitute recording launchers.
pub trait Launcher {
    fn launch(&self, invocation: &ShellInvocation) -> io::Result<()>;
}

/// [`Launcher`] that spawns the external process and does not wait for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn launch(&self, invocation: &ShellInvocation) -> io::Result<()> {
        let mut command = Command::new(invocation.program());
        // On Windows the argument string must reach the process verbatim,
        // quotes included; elsewhere it is passed as a single argument.
        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            command.raw_arg(invocation.arguments());
        }
        #[cfg(not(windows))]
        {
            command.arg(invocation.arguments());
        }
        command.spawn().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::RealFs;
    use tempfile::tempdir;

    #[test]
    fn file_browser_template_is_exact() {
        let inv = ShellInvocation::file_browser(Path::new("/proj/app.sln"));
        assert_eq!(inv.program(), "explorer.exe");
        assert_eq!(inv.arguments(), "\"/proj/app.sln\"");
        assert_eq!(inv.command_line(), "explorer.exe \"/proj/app.sln\"");
    }

    #[test]
    fn command_shell_template_is_exact() {
        let inv = ShellInvocation::command_shell(Path::new("/proj/bin"));
        assert_eq!(inv.program(), "cmd.exe");
        assert_eq!(inv.arguments(), "/K \"cd /D /proj/bin\"");
        assert_eq!(inv.command_line(), "cmd.exe /K \"cd /D /proj/bin\"");
    }

    #[test]
    fn scripting_shell_template_is_exact() {
        let inv = ShellInvocation::scripting_shell(Path::new("/proj/bin"));
        assert_eq!(inv.program(), "powershell.exe");
        assert_eq!(
            inv.arguments(),
            "-NoExit -Command \"Set-Location -Path /proj/bin\""
        );
    }

    #[test]
    fn interactive_shells_are_seeded_at_an_existing_directory() {
        // The target file does not exist; the invocation must point at the
        // nearest existing ancestor instead.
        let td = tempdir().unwrap();
        let target = td.path().join("bin").join("out.bin");
        let inv = ShellKind::CommandShell.invocation(&target, &RealFs).unwrap();
        assert_eq!(
            inv.arguments(),
            format!("/K \"cd /D {}\"", td.path().display())
        );
    }

    #[test]
    fn file_browser_receives_the_path_as_is() {
        let td = tempdir().unwrap();
        let target = td.path().join("bin").join("out.bin");
        let inv = ShellKind::FileBrowser.invocation(&target, &RealFs).unwrap();
        assert_eq!(inv.arguments(), format!("\"{}\"", target.display()));
    }
}
