//! The post-install hook
//!
//! Runs the refresh steps in order against the live data dir, or skips them
//! all for a staged install. A refresh tool failing or being absent never
//! stops the hook; only a failure to spawn anything at all does.

use crate::config::HookConfig;
use crate::error::HookError;
use crate::output;
use crate::refresh::{CommandRunner, RefreshStep, SystemRunner};
use std::io;
use std::path::PathBuf;

/// What happened to one refresh step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Succeeded,
    /// The tool ran and exited nonzero (-1 for a signal).
    Failed { code: i32 },
    /// The tool is not on `PATH`.
    Missing,
    /// Dry run: the command was printed, not executed.
    Planned,
}

/// Result of one hook invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookReport {
    pub data_dir: PathBuf,
    /// True when `DESTDIR` marked a staged install and nothing ran.
    pub skipped: bool,
    pub steps: Vec<(RefreshStep, StepOutcome)>,
}

impl HookReport {
    pub fn outcome(&self, step: RefreshStep) -> Option<StepOutcome> {
        self.steps
            .iter()
            .find(|(s, _)| *s == step)
            .map(|(_, outcome)| *outcome)
    }

    /// Steps that did not complete cleanly.
    pub fn failures(&self) -> impl Iterator<Item = &(RefreshStep, StepOutcome)> {
        self.steps
            .iter()
            .filter(|(_, o)| matches!(o, StepOutcome::Failed { .. } | StepOutcome::Missing))
    }
}

pub struct PostInstallHook<R: CommandRunner = SystemRunner> {
    config: HookConfig,
    runner: R,
}

impl PostInstallHook<SystemRunner> {
    pub fn new(config: HookConfig) -> Self {
        Self::with_runner(config, SystemRunner)
    }
}

impl<R: CommandRunner> PostInstallHook<R> {
    pub fn with_runner(config: HookConfig, runner: R) -> Self {
        Self { config, runner }
    }

    pub fn config(&self) -> &HookConfig {
        &self.config
    }

    pub fn into_runner(self) -> R {
        self.runner
    }

    /// Run the hook once.
    pub fn run(&mut self) -> Result<HookReport, HookError> {
        let data_dir = self.config.data_dir();
        let mut report = HookReport {
            data_dir: data_dir.clone(),
            skipped: self.config.is_staged(),
            steps: Vec::new(),
        };

        if report.skipped {
            output::skip("DESTDIR is set, skipping cache refresh");
        } else {
            for step in RefreshStep::ALL {
                let outcome = self.run_step(step)?;
                report.steps.push((step, outcome));
            }
        }

        output::success("Post-install complete!");
        Ok(report)
    }

    fn run_step(&mut self, step: RefreshStep) -> Result<StepOutcome, HookError> {
        let data_dir = self.config.data_dir();
        output::action(step.message());

        if self.config.dry_run {
            output::detail(&step.command_line(&data_dir));
            return Ok(StepOutcome::Planned);
        }

        match self.runner.run(step.program(), &step.args(&data_dir)) {
            Ok(0) => Ok(StepOutcome::Succeeded),
            Ok(code) => {
                output::warning(&format!("{} exited with code {}", step, code));
                Ok(StepOutcome::Failed { code })
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                output::warning(&format!("{} not found, skipping", step));
                Ok(StepOutcome::Missing)
            }
            Err(source) => Err(HookError::Spawn {
                program: step.program().to_string(),
                source,
            }),
        }
    }
}
