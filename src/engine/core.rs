// src/engine/core.rs

//! Pure dispatcher state machine.
//!
//! Consumes [`DispatchEvent`]s and returns the commands the IO shell
//! (`engine::runtime::Dispatcher`) should carry out. No channels, no Tokio,
//! no processes, so every transition can be unit tested directly.

use tracing::{debug, info};

use crate::engine::{DispatchEvent, DispatcherState};
use crate::types::ChangeEvent;

/// Command produced by the core, to be executed by the outer IO shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreCommand {
    /// Run the configured command once because this file changed.
    RunCommand(ChangeEvent),
    /// Tell the user there is nothing to watch.
    ReportEmptyWatchSet,
}

/// Decision returned by the core after handling a single `DispatchEvent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreStep {
    pub commands: Vec<CoreCommand>,
    /// Whether the outer loop should keep running.
    pub keep_running: bool,
}

impl CoreStep {
    fn continue_with(commands: Vec<CoreCommand>) -> Self {
        Self {
            commands,
            keep_running: true,
        }
    }

    fn stop_with(commands: Vec<CoreCommand>) -> Self {
        Self {
            commands,
            keep_running: false,
        }
    }
}

#[derive(Debug)]
pub struct DispatcherCore {
    state: DispatcherState,
    changes_seen: usize,
}

impl Default for DispatcherCore {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatcherCore {
    pub fn new() -> Self {
        Self {
            state: DispatcherState::Starting,
            changes_seen: 0,
        }
    }

    pub fn state(&self) -> DispatcherState {
        self.state
    }

    /// Number of change events accepted so far.
    pub fn changes_seen(&self) -> usize {
        self.changes_seen
    }

    pub fn step(&mut self, event: DispatchEvent) -> CoreStep {
        if self.state == DispatcherState::Shutdown {
            debug!(?event, "event after shutdown ignored");
            return CoreStep::stop_with(Vec::new());
        }

        match event {
            DispatchEvent::WatchSetReady { files: 0 } => {
                self.state = DispatcherState::Shutdown;
                CoreStep::stop_with(vec![CoreCommand::ReportEmptyWatchSet])
            }
            DispatchEvent::WatchSetReady { files } => {
                info!(files, "watching");
                self.state = DispatcherState::Watching;
                CoreStep::continue_with(Vec::new())
            }
            DispatchEvent::FileChanged(change) => {
                // A monitor can only exist once the watch set is known.
                self.state = DispatcherState::Watching;
                self.changes_seen += 1;
                CoreStep::continue_with(vec![CoreCommand::RunCommand(change)])
            }
            DispatchEvent::ShutdownRequested => {
                info!("shutdown requested");
                self.state = DispatcherState::Shutdown;
                CoreStep::stop_with(Vec::new())
            }
            DispatchEvent::MonitorsExhausted => {
                info!("no monitors left; nothing more to watch");
                self.state = DispatcherState::Shutdown;
                CoreStep::stop_with(Vec::new())
            }
        }
    }
}
