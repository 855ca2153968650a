//! Hook configuration
//!
//! Meson hands the hook its install location through the environment:
//! `MESON_INSTALL_PREFIX` for the prefix and `DESTDIR` when the install is
//! staged into a packaging root.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable carrying the install prefix.
pub const PREFIX_VAR: &str = "MESON_INSTALL_PREFIX";

/// Environment variable marking a staged install.
pub const DESTDIR_VAR: &str = "DESTDIR";

/// Prefix used when Meson did not provide one.
pub const DEFAULT_PREFIX: &str = "/usr/local";

/// Values the hook reads once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookConfig {
    pub prefix: PathBuf,
    pub destdir: Option<OsString>,
    pub dry_run: bool,
}

impl HookConfig {
    /// Build a config from raw variable values.
    ///
    /// An absent or empty prefix falls back to [`DEFAULT_PREFIX`].
    pub fn new(prefix: Option<OsString>, destdir: Option<OsString>) -> Self {
        let prefix = match prefix {
            Some(p) if !p.is_empty() => PathBuf::from(p),
            _ => PathBuf::from(DEFAULT_PREFIX),
        };

        Self {
            prefix,
            destdir,
            dry_run: false,
        }
    }

    /// Read `MESON_INSTALL_PREFIX` and `DESTDIR` from the process environment.
    pub fn from_env() -> Self {
        Self::new(std::env::var_os(PREFIX_VAR), std::env::var_os(DESTDIR_VAR))
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// `<prefix>/share`
    pub fn data_dir(&self) -> PathBuf {
        self.prefix.join("share")
    }

    /// Whether files were installed into a staging root rather than the live
    /// system. An empty `DESTDIR` counts as unset.
    pub fn is_staged(&self) -> bool {
        self.destdir.as_deref().is_some_and(|d| !d.is_empty())
    }

    pub fn prefix(&self) -> &Path {
        &self.prefix
    }
}

impl Default for HookConfig {
    fn default() -> Self {
        Self::new(None, None)
    }
}
