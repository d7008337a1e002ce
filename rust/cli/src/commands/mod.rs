//! Command handler modules for the warsim CLI.
//!
//! Each command lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers: Helper functions specific to that command
//! - Dependency injection: Output streams (`&mut dyn Write`) passed as parameters
//! - Error propagation: All errors propagated via `CliError` enum

mod cfg;
mod play;
mod sim;
mod stats;

pub use cfg::handle_cfg_command;
pub use play::{PlayOptions, handle_play_command};
pub use sim::{SimOptions, handle_sim_command};
pub use stats::handle_stats_command;

use crate::config::{self, Config};
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Loads the layered configuration, reporting failures on `err`.
fn load_config(err: &mut dyn Write) -> Result<Config, CliError> {
    match config::load_with_sources() {
        Ok(resolved) => Ok(resolved.config),
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            Err(e.into())
        }
    }
}
