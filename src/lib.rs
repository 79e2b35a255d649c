// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod logging;
pub mod types;
pub mod watch;

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{current_dir, load_and_validate, WatchConfig};
use crate::engine::{DispatchSummary, Dispatcher};
use crate::exec::{CommandRunner, ProcessRunner};
use crate::fs::{FileSystem, RealFileSystem};
use crate::watch::{build_watch_set, spawn_monitors, WatchSet};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config resolution (CLI + optional TOML file)
/// - watch-set discovery
/// - one polling monitor per file
/// - the dispatcher that runs the command
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<DispatchSummary> {
    let cwd = current_dir()?;
    let cfg = load_and_validate(&args, cwd)?;
    debug!(?cfg, "resolved configuration");

    let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);
    Ok(watch_and_dispatch(&cfg, fs, ProcessRunner::new()).await?)
}

/// Build the watch set, start the monitors and drive the dispatcher until
/// shutdown.
///
/// Split out of [`run`] so tests can plug in a fake filesystem or runner.
pub async fn watch_and_dispatch<R: CommandRunner>(
    cfg: &WatchConfig,
    fs: Arc<dyn FileSystem>,
    runner: R,
) -> errors::Result<DispatchSummary> {
    let set = build_watch_set(fs.as_ref(), &cfg.cwd, &cfg.targets, &cfg.filter)?;

    if cfg.verbose {
        print_watch_set(&set);
    }

    let dispatcher = Dispatcher::new(cfg.command.clone(), runner);

    // Ctrl-C → graceful shutdown.
    {
        let shutdown = dispatcher.shutdown_handle();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            shutdown.trigger();
        });
    }

    let monitors = {
        let event_tx = dispatcher.event_sender();
        let shutdown_rx = dispatcher.shutdown_receiver();
        spawn_monitors(fs, &set, cfg.poll_interval, &event_tx, &shutdown_rx)
    };
    info!(
        monitors = monitors.len(),
        interval_ms = cfg.poll_interval.as_millis() as u64,
        "monitoring started"
    );

    dispatcher.run(monitors.len()).await
}

fn print_watch_set(set: &WatchSet) {
    println!("Watching {} file(s):", set.len());
    for path in set {
        println!("  {}", path.display());
    }
}
