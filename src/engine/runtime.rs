// src/engine/runtime.rs

use std::fmt;
use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info, warn};

use crate::errors::Result;
use crate::exec::{CommandOutcome, CommandRunner, CommandSpec};
use crate::types::ChangeEvent;

use super::core::{CoreCommand, DispatcherCore};
use super::{DispatchEvent, ShutdownHandle};

/// What happened during one dispatcher run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    pub changes_seen: usize,
    pub commands_run: usize,
    pub commands_failed: usize,
    /// True if the run ended because the watch set was empty.
    pub nothing_to_watch: bool,
}

/// Owns the change-event channel and the shutdown signal, and runs the
/// configured command once per change event.
///
/// This is the IO shell around [`DispatcherCore`]. Commands are awaited
/// inside the receive loop, so two runs never overlap; events that arrive
/// in the meantime wait in the unbounded channel.
pub struct Dispatcher<R: CommandRunner> {
    core: DispatcherCore,
    command: CommandSpec,
    runner: R,
    event_tx: mpsc::UnboundedSender<ChangeEvent>,
    event_rx: mpsc::UnboundedReceiver<ChangeEvent>,
    shutdown_tx: Arc<watch::Sender<bool>>,
    shutdown_rx: watch::Receiver<bool>,
}

impl<R: CommandRunner> fmt::Debug for Dispatcher<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("core", &self.core)
            .field("command", &self.command)
            .finish_non_exhaustive()
    }
}

impl<R: CommandRunner> Dispatcher<R> {
    pub fn new(command: CommandSpec, runner: R) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        Self {
            core: DispatcherCore::new(),
            command,
            runner,
            event_tx,
            event_rx,
            shutdown_tx: Arc::new(shutdown_tx),
            shutdown_rx,
        }
    }

    /// Sender half handed to each monitor.
    pub fn event_sender(&self) -> mpsc::UnboundedSender<ChangeEvent> {
        self.event_tx.clone()
    }

    /// Receiver monitors use to observe shutdown.
    pub fn shutdown_receiver(&self) -> watch::Receiver<bool> {
        self.shutdown_rx.clone()
    }

    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle::new(Arc::clone(&self.shutdown_tx))
    }

    /// Main loop.
    ///
    /// `monitors` is the number of monitors that were actually started. With
    /// zero the loop reports the empty watch set and returns immediately.
    /// On exit the shutdown signal is raised so every monitor stops too.
    pub async fn run(self, monitors: usize) -> Result<DispatchSummary> {
        let Self {
            mut core,
            command,
            mut runner,
            event_tx,
            mut event_rx,
            shutdown_tx,
            mut shutdown_rx,
        } = self;

        // Only monitors hold senders from here on; when they are all gone
        // `recv` yields `None`.
        drop(event_tx);

        let mut summary = DispatchSummary::default();
        let mut next = Some(DispatchEvent::WatchSetReady { files: monitors });

        info!(cmd = %command, "dispatcher started");

        loop {
            let event = match next.take() {
                Some(event) => event,
                None => next_event(&mut event_rx, &mut shutdown_rx).await,
            };
            debug!(?event, "dispatcher received event");

            let step = core.step(event);

            for cmd in step.commands {
                match cmd {
                    CoreCommand::ReportEmptyWatchSet => {
                        println!("Passed parameters match no files!");
                        warn!("watch set is empty; nothing to do");
                        summary.nothing_to_watch = true;
                    }
                    CoreCommand::RunCommand(change) => {
                        info!(file = %change.file_name(), path = %change, "change detected");

                        let outcome = tokio::select! {
                            biased;
                            _ = wait_for_shutdown(&mut shutdown_rx) => {
                                info!("shutdown while command was running; abandoning it");
                                next = Some(DispatchEvent::ShutdownRequested);
                                break;
                            }
                            res = runner.run(&command) => res,
                        };

                        summary.commands_run += 1;
                        if !report_outcome(&command, outcome) {
                            summary.commands_failed += 1;
                        }
                    }
                }
            }

            if next.is_some() {
                continue;
            }

            if !step.keep_running {
                break;
            }
        }

        summary.changes_seen = core.changes_seen();
        shutdown_tx.send_replace(true);
        info!(
            changes = summary.changes_seen,
            runs = summary.commands_run,
            failed = summary.commands_failed,
            "dispatcher exiting"
        );
        Ok(summary)
    }
}

/// Wait for whichever comes first: a change event or the shutdown signal.
async fn next_event(
    event_rx: &mut mpsc::UnboundedReceiver<ChangeEvent>,
    shutdown_rx: &mut watch::Receiver<bool>,
) -> DispatchEvent {
    tokio::select! {
        biased;
        _ = wait_for_shutdown(shutdown_rx) => DispatchEvent::ShutdownRequested,
        event = event_rx.recv() => match event {
            Some(change) => DispatchEvent::FileChanged(change),
            None => DispatchEvent::MonitorsExhausted,
        },
    }
}

/// Resolves once the shutdown flag is set (or its sender is gone).
async fn wait_for_shutdown(shutdown_rx: &mut watch::Receiver<bool>) {
    // `wait_for` checks the current value first, then every change.
    let _ = shutdown_rx.wait_for(|stop| *stop).await;
}

/// Surface a finished run to the user. Returns false if the run failed.
fn report_outcome(command: &CommandSpec, outcome: Result<CommandOutcome>) -> bool {
    match outcome {
        Ok(out) => {
            if !out.stdout.is_empty() {
                print!("{}", out.stdout);
                if !out.stdout.ends_with('\n') {
                    println!();
                }
            }
            for line in out.stderr.lines() {
                warn!(cmd = %command, "stderr: {}", line);
            }

            if out.success() {
                info!(cmd = %command, "command finished");
                true
            } else {
                match out.exit_code {
                    Some(code) => warn!(cmd = %command, exit_code = code, "command failed"),
                    None => warn!(cmd = %command, "command terminated by signal"),
                }
                false
            }
        }
        Err(err) => {
            error!(cmd = %command, error = %err, "could not run command");
            false
        }
    }
}
