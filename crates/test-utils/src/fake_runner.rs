use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use on_change::errors::{OnChangeError, Result};
use on_change::exec::{CommandOutcome, CommandRunner, CommandSpec};

/// A fake command runner that:
/// - records every command it was asked to run
/// - optionally sleeps to simulate a slow command
/// - returns a canned outcome (success by default).
#[derive(Clone)]
pub struct FakeRunner {
    runs: Arc<Mutex<Vec<CommandSpec>>>,
    delay: Duration,
    exit_code: Option<i32>,
    spawn_error: bool,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self {
            runs: Arc::new(Mutex::new(Vec::new())),
            delay: Duration::ZERO,
            exit_code: Some(0),
            spawn_error: false,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_exit_code(mut self, code: i32) -> Self {
        self.exit_code = Some(code);
        self
    }

    /// Every run fails as if the executable did not exist.
    pub fn failing_to_spawn(mut self) -> Self {
        self.spawn_error = true;
        self
    }

    /// Shared log of runs; clone it before handing the runner away.
    pub fn runs(&self) -> Arc<Mutex<Vec<CommandSpec>>> {
        Arc::clone(&self.runs)
    }

    pub fn run_count(&self) -> usize {
        self.runs.lock().unwrap().len()
    }
}

impl Default for FakeRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for FakeRunner {
    fn run<'a>(
        &'a mut self,
        command: &'a CommandSpec,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutcome>> + Send + 'a>> {
        Box::pin(async move {
            self.runs.lock().unwrap().push(command.clone());

            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }

            if self.spawn_error {
                return Err(OnChangeError::Other(anyhow::anyhow!(
                    "failed to spawn command `{command}`"
                )));
            }

            Ok(CommandOutcome {
                exit_code: self.exit_code,
                stdout: format!("ran {command}\n"),
                stderr: String::new(),
            })
        })
    }
}
