//! # warsim CLI Library
//!
//! Command-line interface for the warsim War engine. It exposes subcommands
//! for playing a single game, simulating many games, summarising turn logs
//! and showing the active configuration.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["warsim", "play", "--seed", "42"];
//! let code = warsim_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play one game, printing every turn, the winner and statistics
//! - `sim`: Play many games and report win rates, draws and game lengths
//! - `stats`: Aggregate statistics from a JSONL turn log
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;

use cli::{Commands, WarsimCli};
use commands::{
    PlayOptions, SimOptions, handle_cfg_command, handle_play_command, handle_sim_command,
    handle_stats_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["warsim", "play", "--seed", "42", "--turns", "3"];
/// let code = warsim_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "sim", "stats", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = WarsimCli::try_parse_from(&argv);
    let cli = match parsed {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    // Print clap error first
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err).is_err()
                        || writeln!(err, "warsim - War card game simulator").is_err()
                        || writeln!(err, "Usage: warsim <command> [options]\n").is_err()
                        || writeln!(err, "Commands:").is_err()
                    {
                        return exit_code::ERROR;
                    }
                    for c in COMMANDS {
                        if writeln!(err, "  {}", c).is_err() {
                            return exit_code::ERROR;
                        }
                    }
                    let _ = writeln!(err, "\nFor full help, run: warsim --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Play {
            seed,
            first,
            second,
            turns,
            log,
            face_down,
            no_recycle,
            narrate,
        } => handle_play_command(
            PlayOptions {
                seed,
                first,
                second,
                turns,
                log,
                face_down,
                no_recycle,
                narrate,
            },
            out,
            err,
        ),
        Commands::Sim {
            games,
            seed,
            output,
            face_down,
            no_recycle,
        } => handle_sim_command(
            SimOptions {
                games,
                seed,
                output,
                face_down,
                no_recycle,
            },
            out,
            err,
        ),
        Commands::Stats { input } => handle_stats_command(&input, out, err),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = writeln!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
