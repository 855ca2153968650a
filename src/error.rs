//! Hook error types.

use thiserror::Error;

/// Errors that abort the hook.
///
/// Refresh tools exiting nonzero or missing from `PATH` are not errors; they
/// are recorded in the [`HookReport`](crate::HookReport) instead.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}
