// src/watch/monitor.rs

//! Per-file polling loop.
//!
//! Every watched file gets its own Tokio task that sleeps for the poll
//! interval, stats the file and reports a [`ChangeEvent`] whenever the
//! modification time moves forward. Monitors share no state with each other;
//! the event channel is their only link to the dispatcher.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, trace, warn};

use crate::fs::FileSystem;
use crate::types::{ChangeEvent, WatchedFile};
use crate::watch::discovery::WatchSet;

/// Delay between two stats of the same file.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Why a monitor stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorExit {
    /// The file could no longer be stat'd (deleted, permissions changed...).
    StatFailed,
    /// The dispatcher dropped its receiver.
    DispatcherClosed,
    /// Global shutdown was signalled.
    Shutdown,
}

/// Poll `file` until it disappears, the dispatcher goes away or shutdown is
/// signalled.
///
/// The recorded timestamp is replaced by every successful stat, so only a
/// strictly later time than the previous poll produces an event.
pub async fn monitor_file(
    fs: Arc<dyn FileSystem>,
    file: WatchedFile,
    interval: Duration,
    event_tx: mpsc::UnboundedSender<ChangeEvent>,
    mut shutdown_rx: watch::Receiver<bool>,
) -> MonitorExit {
    let WatchedFile { path, mut modified } = file;
    debug!(path = %path.display(), "monitor started");

    loop {
        if *shutdown_rx.borrow() {
            return MonitorExit::Shutdown;
        }

        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            changed = shutdown_rx.changed() => {
                if changed.is_err() || *shutdown_rx.borrow() {
                    debug!(path = %path.display(), "monitor stopping on shutdown");
                    return MonitorExit::Shutdown;
                }
                continue;
            }
        }

        let stat = match fs.stat(&path) {
            Ok(stat) => stat,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "cannot stat watched file; no longer watching it");
                return MonitorExit::StatFailed;
            }
        };

        if stat.modified > modified {
            trace!(path = %path.display(), "modification time advanced");
            if event_tx.send(ChangeEvent::new(path.clone())).is_err() {
                debug!(path = %path.display(), "dispatcher gone; monitor exiting");
                return MonitorExit::DispatcherClosed;
            }
        }

        modified = stat.modified;
    }
}

/// Spawn one monitor per file in `set`.
///
/// The initial timestamp is taken here, so anything written after this call
/// returns is reported. A file that vanished between discovery and this call
/// is logged and skipped.
pub fn spawn_monitors(
    fs: Arc<dyn FileSystem>,
    set: &WatchSet,
    interval: Duration,
    event_tx: &mpsc::UnboundedSender<ChangeEvent>,
    shutdown_rx: &watch::Receiver<bool>,
) -> Vec<(PathBuf, JoinHandle<MonitorExit>)> {
    let mut handles = Vec::with_capacity(set.len());

    for path in set {
        let modified = match fs.stat(path) {
            Ok(stat) => stat.modified,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "cannot stat file at monitor start; skipping");
                continue;
            }
        };

        let file = WatchedFile {
            path: path.clone(),
            modified,
        };
        let handle = tokio::spawn(monitor_file(
            Arc::clone(&fs),
            file,
            interval,
            event_tx.clone(),
            shutdown_rx.clone(),
        ));
        handles.push((path.clone(), handle));
    }

    debug!(monitors = handles.len(), "monitors spawned");
    handles
}
