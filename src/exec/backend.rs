// src/exec/backend.rs

//! Pluggable command runner abstraction.
//!
//! The dispatcher talks to a `CommandRunner` instead of spawning processes
//! itself, so tests can swap in a fake that records invocations.
//!
//! - `ProcessRunner` is the implementation used by `on-change`; it runs the
//!   command as a child process (see [`process`](super::process)).
//! - Tests provide their own `CommandRunner` returning canned outcomes.

use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;

use super::command::{CommandOutcome, CommandSpec};
use super::process::run_process;

/// Trait abstracting how the configured command is executed.
///
/// `Err` means the command could not be run at all (e.g. executable not
/// found); a command that ran and exited nonzero is an `Ok` outcome.
pub trait CommandRunner: Send {
    fn run<'a>(
        &'a mut self,
        command: &'a CommandSpec,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutcome>> + Send + 'a>>;
}

/// Runs commands as real child processes.
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ProcessRunner {
    fn run<'a>(
        &'a mut self,
        command: &'a CommandSpec,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutcome>> + Send + 'a>> {
        Box::pin(async move { Ok(run_process(command).await?) })
    }
}
