//! Configuration command handler.
//!
//! This module implements the `cfg` command, which displays the current
//! warsim configuration settings with their sources (default, environment,
//! or configuration file).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "face_down": {
//!     "value": 1,
//!     "source": "default"
//!   },
//!   "seed": {
//!     "value": 42,
//!     "source": "env"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// Loads the current configuration with source tracking and displays it
/// as formatted JSON to the output stream.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "face_down": {
            "value": config.face_down,
            "source": sources.face_down,
        },
        "recycle": {
            "value": config.recycle,
            "source": sources.recycle,
        },
        "max_turns": {
            "value": config.max_turns,
            "source": sources.max_turns,
        },
        "first": {
            "value": config.first,
            "source": sources.first,
        },
        "second": {
            "value": config.second,
            "source": sources.second,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_cfg_displays_json_output() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_cfg_command(&mut out, &mut err).expect("cfg succeeds with defaults");

        let value: serde_json::Value =
            serde_json::from_slice(&out).expect("cfg output is JSON");
        assert!(value.get("face_down").is_some());
        assert!(value["recycle"].get("source").is_some());
        assert!(err.is_empty());
    }
}
