// src/exec/process.rs

//! Child process execution.

use std::process::Stdio;

use anyhow::{Context, Result};
use tokio::process::Command;
use tracing::{debug, info};

use super::command::{CommandOutcome, CommandSpec};

/// Run `spec` to completion and capture both output streams.
///
/// The child is killed if the returned future is dropped before it exits,
/// which is how the dispatcher abandons a run on shutdown.
pub async fn run_process(spec: &CommandSpec) -> Result<CommandOutcome> {
    info!(cmd = %spec, "running command");

    let mut cmd = Command::new(&spec.program);
    cmd.args(&spec.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let output = cmd
        .output()
        .await
        .with_context(|| format!("running command '{spec}'"))?;

    let exit_code = output.status.code();
    debug!(cmd = %spec, ?exit_code, "command process exited");

    Ok(CommandOutcome {
        exit_code,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}
