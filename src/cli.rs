// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! The historical single-dash spellings `-ext` and `-exc` are rewritten to
//! `--extension` / `--exclude` before clap sees them, since clap only allows
//! single-character short flags.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum};

const EXAMPLES: &str = "\
Examples:
  run ls whenever a file in the current directory changes
    on-change ls .

  run ls whenever a javascript file changes
    on-change ls src/ -ext .js

  run ls whenever a javascript or typescript file changes
    on-change ls src/ -ext .js,.ts

  ... except for foo.js
    on-change ls src/ -ext .js,.ts -exc foo.js";

/// Command-line arguments for `on-change`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "on-change",
    version,
    about = "A command line utility for rerunning a command on file change.",
    long_about = None,
    after_help = EXAMPLES
)]
pub struct CliArgs {
    /// Command to run, e.g. "cargo test". Split on spaces; no shell, no quoting.
    #[arg(value_name = "COMMAND")]
    pub command: String,

    /// Files or directories to watch. Directories are searched recursively.
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Comma-separated file suffixes to watch (e.g. ".js,.ts"). Alias: -ext.
    #[arg(long = "extension", value_name = "EXTS", value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// Comma-separated regexes; any path they match is ignored. Alias: -exc.
    #[arg(long = "exclude", value_name = "PATTERNS", value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Print the resolved watch set before monitoring starts.
    #[arg(short, long)]
    pub verbose: bool,

    /// Delay between two checks of the same file, in milliseconds.
    ///
    /// Default: 20.
    #[arg(long, value_name = "MS")]
    pub poll_interval_ms: Option<u64>,

    /// Optional TOML file with default extensions, exclusions and polling settings.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `ON_CHANGE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// What the process should do after looking at its arguments.
#[derive(Debug, Clone)]
pub enum Invocation {
    /// Print usage and exit successfully.
    Help,
    Run(CliArgs),
}

/// Parse the process arguments.
pub fn parse() -> Result<Invocation, clap::Error> {
    parse_from(std::env::args_os())
}

/// Parse an explicit argument list; the first item is the program name.
///
/// No arguments at all, or an extension flag in the command position, is
/// treated as a request for help rather than an error.
pub fn parse_from<I, T>(args: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    match args.get(1).map(|a| a.to_string_lossy()) {
        None => return Ok(Invocation::Help),
        Some(first) if first == "-ext" || first == "--extension" => {
            return Ok(Invocation::Help);
        }
        _ => {}
    }

    CliArgs::try_parse_from(args.into_iter().map(expand_alias)).map(Invocation::Run)
}

/// Print the long usage text to stdout.
pub fn print_help() {
    let mut cmd = CliArgs::command();
    if let Err(err) = cmd.print_help() {
        eprintln!("failed to print help: {err}");
    }
}

fn expand_alias(arg: OsString) -> OsString {
    match arg.to_str() {
        Some("-ext") => OsString::from("--extension"),
        Some("-exc") => OsString::from("--exclude"),
        _ => arg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn run_args(args: &[&str]) -> CliArgs {
        match parse_from(args.iter().copied()).unwrap() {
            Invocation::Run(a) => a,
            Invocation::Help => panic!("expected run, got help"),
        }
    }

    #[test]
    fn no_arguments_means_help() {
        assert!(matches!(parse_from(["on-change"]).unwrap(), Invocation::Help));
    }

    #[test]
    fn leading_extension_flag_means_help() {
        assert!(matches!(parse_from(["on-change", "-ext", ".js"]).unwrap(), Invocation::Help));
        assert!(matches!(
            parse_from(["on-change", "--extension", ".js"]).unwrap(),
            Invocation::Help
        ));
    }

    #[test]
    fn help_flag_is_a_display_help_error() {
        let err = parse_from(["on-change", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn command_and_paths_are_positional() {
        let args = run_args(&["on-change", "cargo test", "src", "tests"]);
        assert_eq!(args.command, "cargo test");
        assert_eq!(args.paths, vec![PathBuf::from("src"), PathBuf::from("tests")]);
        assert!(args.extensions.is_empty());
        assert!(!args.verbose);
    }

    #[test]
    fn short_aliases_split_on_commas() {
        let args = run_args(&["on-change", "ls", "src/", "-ext", ".js,.ts", "-exc", "foo.js", "-v"]);
        assert_eq!(args.extensions, vec![".js", ".ts"]);
        assert_eq!(args.exclude, vec!["foo.js"]);
        assert!(args.verbose);
    }

    #[test]
    fn repeated_flags_accumulate() {
        let args = run_args(&[
            "on-change",
            "ls",
            ".",
            "--extension",
            ".rs",
            "--extension",
            ".toml",
        ]);
        assert_eq!(args.extensions, vec![".rs", ".toml"]);
    }

    #[test]
    fn missing_path_is_a_usage_error() {
        let err = parse_from(["on-change", "ls"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }
}
