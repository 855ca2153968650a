//! Meson post-install hook for PixelConvert
//!
//! After `meson install` copies files into the prefix, the hook refreshes the
//! desktop caches that would otherwise only pick them up after a re-login:
//!
//! - `glib-compile-schemas` for `<prefix>/share/glib-2.0/schemas`
//! - `gtk-update-icon-cache -qtf` for `<prefix>/share/icons/hicolor`
//! - `update-desktop-database -q` for `<prefix>/share/applications`
//!
//! When `DESTDIR` is set the install is staged for packaging and the live
//! system caches are left alone. Refresh tools are best effort: a tool that
//! fails or is not installed produces a warning and the hook carries on.
//!
//! # Example
//!
//! ```no_run
//! use pixelconvert_postinstall::{HookConfig, PostInstallHook};
//!
//! let report = PostInstallHook::new(HookConfig::from_env()).run()?;
//! println!("refreshed {} caches", report.steps.len());
//! # Ok::<(), pixelconvert_postinstall::HookError>(())
//! ```

pub mod config;
pub mod error;
pub mod hook;
pub mod output;
pub mod refresh;

pub use config::HookConfig;
pub use error::HookError;
pub use hook::{HookReport, PostInstallHook, StepOutcome};
pub use refresh::{CommandRunner, RefreshStep, SystemRunner};
