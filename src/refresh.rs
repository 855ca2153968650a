//! Desktop cache refresh steps
//!
//! Each step is one external tool run against a subdirectory of the data dir.
//! The tools are opaque: the hook only builds their argument list and looks at
//! how they exited.

use std::ffi::OsString;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

/// One cache refresh, in the order the hook runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefreshStep {
    /// `glib-compile-schemas <data>/glib-2.0/schemas`
    CompileSchemas,
    /// `gtk-update-icon-cache -qtf <data>/icons/hicolor`
    UpdateIconCache,
    /// `update-desktop-database -q <data>/applications`
    UpdateDesktopDatabase,
}

impl RefreshStep {
    pub const ALL: [RefreshStep; 3] = [
        RefreshStep::CompileSchemas,
        RefreshStep::UpdateIconCache,
        RefreshStep::UpdateDesktopDatabase,
    ];

    pub fn program(self) -> &'static str {
        match self {
            RefreshStep::CompileSchemas => "glib-compile-schemas",
            RefreshStep::UpdateIconCache => "gtk-update-icon-cache",
            RefreshStep::UpdateDesktopDatabase => "update-desktop-database",
        }
    }

    /// Flags passed before the target directory.
    ///
    /// `-qtf` asks gtk-update-icon-cache to be quiet, ignore a missing
    /// index.theme and force the rebuild.
    pub fn flags(self) -> &'static [&'static str] {
        match self {
            RefreshStep::CompileSchemas => &[],
            RefreshStep::UpdateIconCache => &["-qtf"],
            RefreshStep::UpdateDesktopDatabase => &["-q"],
        }
    }

    /// Target directory relative to the data dir.
    pub fn subdir(self) -> &'static [&'static str] {
        match self {
            RefreshStep::CompileSchemas => &["glib-2.0", "schemas"],
            RefreshStep::UpdateIconCache => &["icons", "hicolor"],
            RefreshStep::UpdateDesktopDatabase => &["applications"],
        }
    }

    pub fn target(self, data_dir: &Path) -> PathBuf {
        self.subdir()
            .iter()
            .fold(data_dir.to_path_buf(), |path, part| path.join(part))
    }

    /// Full argument list: flags, then the target directory.
    pub fn args(self, data_dir: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = self.flags().iter().map(OsString::from).collect();
        args.push(self.target(data_dir).into_os_string());
        args
    }

    /// Status line printed right before the tool runs.
    pub fn message(self) -> &'static str {
        match self {
            RefreshStep::CompileSchemas => "Compiling GSettings schemas...",
            RefreshStep::UpdateIconCache => "Updating icon cache...",
            RefreshStep::UpdateDesktopDatabase => "Updating desktop database...",
        }
    }

    /// Printable command line, for dry runs and warnings.
    pub fn command_line(self, data_dir: &Path) -> String {
        let mut parts = vec![self.program().to_string()];
        parts.extend(self.flags().iter().map(|f| f.to_string()));
        parts.push(self.target(data_dir).display().to_string());
        parts.join(" ")
    }
}

impl fmt::Display for RefreshStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

/// Launches external programs for the hook.
pub trait CommandRunner {
    /// Run `program` with `args`, blocking until it exits.
    ///
    /// Returns the exit code, or -1 when the process was killed by a signal.
    /// `Err` means the program could not be started at all.
    fn run(&mut self, program: &str, args: &[OsString]) -> io::Result<i32>;
}

/// Runs programs from `PATH`, sharing the hook's stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, program: &str, args: &[OsString]) -> io::Result<i32> {
        let status = Command::new(program).args(args).status()?;
        Ok(status.code().unwrap_or(-1))
    }
}

impl<R: CommandRunner + ?Sized> CommandRunner for &mut R {
    fn run(&mut self, program: &str, args: &[OsString]) -> io::Result<i32> {
        (**self).run(program, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_order() {
        let programs: Vec<_> = RefreshStep::ALL.iter().map(|s| s.program()).collect();
        assert_eq!(
            programs,
            ["glib-compile-schemas", "gtk-update-icon-cache", "update-desktop-database"]
        );
    }

    #[test]
    fn test_targets() {
        let data = Path::new("/usr/local/share");
        assert_eq!(
            RefreshStep::CompileSchemas.target(data),
            PathBuf::from("/usr/local/share/glib-2.0/schemas")
        );
        assert_eq!(
            RefreshStep::UpdateIconCache.target(data),
            PathBuf::from("/usr/local/share/icons/hicolor")
        );
        assert_eq!(
            RefreshStep::UpdateDesktopDatabase.target(data),
            PathBuf::from("/usr/local/share/applications")
        );
    }

    #[test]
    fn test_args_put_flags_first() {
        let data = Path::new("/opt/app/share");
        assert_eq!(
            RefreshStep::CompileSchemas.args(data),
            vec![OsString::from("/opt/app/share/glib-2.0/schemas")]
        );
        assert_eq!(
            RefreshStep::UpdateIconCache.args(data),
            vec![OsString::from("-qtf"), OsString::from("/opt/app/share/icons/hicolor")]
        );
        assert_eq!(
            RefreshStep::UpdateDesktopDatabase.args(data),
            vec![OsString::from("-q"), OsString::from("/opt/app/share/applications")]
        );
    }

    #[test]
    fn test_command_line() {
        let data = Path::new("/usr/share");
        assert_eq!(
            RefreshStep::UpdateIconCache.command_line(data),
            "gtk-update-icon-cache -qtf /usr/share/icons/hicolor"
        );
        assert_eq!(RefreshStep::UpdateDesktopDatabase.to_string(), "update-desktop-database");
    }

    #[test]
    fn test_system_runner_exit_codes() {
        let mut runner = SystemRunner;
        assert_eq!(runner.run("true", &[]).unwrap(), 0);
        assert_eq!(runner.run("false", &[]).unwrap(), 1);
        let args = [OsString::from("-c"), OsString::from("exit 42")];
        assert_eq!(runner.run("sh", &args).unwrap(), 42);
    }

    #[test]
    fn test_system_runner_missing_program() {
        let err = SystemRunner
            .run("definitely-not-a-real-tool-xyz", &[])
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
