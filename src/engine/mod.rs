// src/engine/mod.rs

//! Change dispatcher.
//!
//! This module ties together:
//! - the shared change-event channel every monitor writes into
//! - the shutdown signal observed by monitors and the dispatcher
//! - serialized execution of the configured command
//!
//! The pure state machine lives in [`core`]; the async/IO shell is
//! implemented in [`runtime`].

use std::sync::Arc;

use tokio::sync::watch;

use crate::types::ChangeEvent;

/// Lifecycle of the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatcherState {
    /// Watch set is being built; no monitors yet.
    Starting,
    /// Waiting for change events or shutdown.
    Watching,
    /// Terminal.
    Shutdown,
}

/// Events flowing into the dispatcher core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchEvent {
    /// Monitors have been spawned for this many files.
    WatchSetReady { files: usize },
    /// A watched file's modification time advanced.
    FileChanged(ChangeEvent),
    /// Graceful shutdown requested (e.g. Ctrl-C).
    ShutdownRequested,
    /// Every monitor has exited; nothing can change anymore.
    MonitorsExhausted,
}

/// Cloneable trigger for the global shutdown signal.
#[derive(Debug, Clone)]
pub struct ShutdownHandle {
    tx: Arc<watch::Sender<bool>>,
}

impl ShutdownHandle {
    pub(crate) fn new(tx: Arc<watch::Sender<bool>>) -> Self {
        Self { tx }
    }

    /// Ask every monitor and the dispatcher to stop. Idempotent.
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_triggered(&self) -> bool {
        *self.tx.borrow()
    }
}

pub mod core;
pub mod runtime;

pub use self::core::{CoreCommand, CoreStep, DispatcherCore};
pub use runtime::{DispatchSummary, Dispatcher};
