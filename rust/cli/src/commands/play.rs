//! Play command handler: one game of War, turn by turn.
//!
//! Every played turn is printed as it happens, either as a compact one-liner
//! or, with `--narrate`, as the engine's full sentence. The game ends with
//! the winner, the aggregate statistics and the final card counts.

use std::io::Write;
use std::path::Path;

use warsim_engine::game::Game;
use warsim_engine::logger::TurnLogger;
use warsim_engine::player::Player;
use warsim_engine::report;

use super::load_config;
use crate::error::CliError;
use crate::formatters::format_turn;
use crate::io_utils::ensure_parent_dir;
use crate::ui;

/// Options for the `play` command, already parsed by clap.
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    pub seed: Option<u64>,
    pub first: Option<String>,
    pub second: Option<String>,
    pub turns: Option<u32>,
    pub log: Option<String>,
    pub face_down: Option<usize>,
    pub no_recycle: bool,
    pub narrate: bool,
}

/// Handle the play command.
///
/// Command-line values win over the resolved configuration, which in turn
/// wins over the defaults.
///
/// # Errors
///
/// - `CliError::Config` for an invalid configuration
/// - `CliError::Engine` for invalid player names or rules
/// - `CliError::Io` when output or the turn log cannot be written
pub fn handle_play_command(
    opts: PlayOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = load_config(err)?;
    let rules = cfg.rules(opts.face_down, opts.no_recycle);
    let first = Player::new(opts.first.unwrap_or_else(|| cfg.first.clone()))?;
    let second = Player::new(opts.second.unwrap_or_else(|| cfg.second.clone()))?;
    let seed = opts.seed.or(cfg.seed).unwrap_or_else(rand::random);

    let mut game = Game::with_rules(&first, &second, rules, Some(seed))?;
    writeln!(
        out,
        "{} vs {} (seed {}, {} face-down)",
        first.name(),
        second.name(),
        seed,
        rules.face_down
    )?;

    let limit = opts.turns.unwrap_or(u32::MAX);
    let mut played = 0u32;
    while played < limit && game.is_active() {
        game.play_turn();
        played += 1;
        if let Some(record) = game.last_turn() {
            let names = [first.name(), second.name()];
            if opts.narrate {
                writeln!(
                    out,
                    "Turn {}: {}",
                    record.turn,
                    report::describe_turn(record, names)
                )?;
            } else {
                writeln!(out, "{}", format_turn(record, names))?;
            }
        }
    }

    writeln!(out, "{}", game.winner_report())?;
    write!(out, "{}", game.stats_report())?;
    for p in [&first, &second] {
        writeln!(
            out,
            "{}: {} in stack, {} taken",
            p.name(),
            p.stack_size(),
            p.cards_taken()
        )?;
    }

    if let Some(path) = opts.log {
        write_turn_log(Path::new(&path), &game, err)?;
        writeln!(out, "Turn log: {} ({} turns)", path, game.log().len())?;
    }
    Ok(())
}

fn write_turn_log(path: &Path, game: &Game, err: &mut dyn Write) -> Result<(), CliError> {
    if let Err(e) = ensure_parent_dir(path) {
        ui::write_error(err, &e)?;
        return Err(CliError::Io(std::io::Error::other(e)));
    }
    let mut logger = match TurnLogger::create(path) {
        Ok(l) => l,
        Err(e) => {
            ui::write_error(err, &format!("Failed to open turn log: {}", e))?;
            return Err(CliError::Io(e));
        }
    };
    logger.write_all(game.log())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_play_limited_turns() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let opts = PlayOptions {
            seed: Some(42),
            turns: Some(3),
            ..PlayOptions::default()
        };
        handle_play_command(opts, &mut out, &mut err).expect("play succeeds");

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("seed 42"));
        assert!(output.contains("#1"));
        assert!(output.contains("#3"));
        assert!(!output.contains("#4 "));
        assert!(output.contains("No winner yet."));
    }

    #[test]
    #[serial]
    fn test_play_same_names_is_allowed() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let opts = PlayOptions {
            seed: Some(1),
            first: Some("Bob".into()),
            second: Some("Bob".into()),
            turns: Some(1),
            ..PlayOptions::default()
        };
        assert!(handle_play_command(opts, &mut out, &mut err).is_ok());
    }

    #[test]
    #[serial]
    fn test_play_rejects_blank_name() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let opts = PlayOptions {
            first: Some(" ".into()),
            ..PlayOptions::default()
        };
        let res = handle_play_command(opts, &mut out, &mut err);
        assert!(matches!(res, Err(CliError::Engine(_))));
    }
}
