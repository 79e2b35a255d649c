// src/exec/mod.rs

//! Command execution layer.
//!
//! - [`command`] holds the parsed command and the outcome of one run.
//! - [`process`] runs a command as a child process with `tokio::process`.
//! - [`backend`] provides the `CommandRunner` trait and the production
//!   `ProcessRunner`, which tests can replace with a fake implementation.

pub mod backend;
pub mod command;
pub mod process;

pub use backend::{CommandRunner, ProcessRunner};
pub use command::{CommandOutcome, CommandSpec};
