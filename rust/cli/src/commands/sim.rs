//! Simulation command handler for playing many games in a row.
//!
//! Game `i` uses the seed `base_seed + i`, so a whole batch can be replayed
//! from its base seed. The same two players sit at every table; each new
//! game re-deals their cards.
//!
//! # Examples
//!
//! ```no_run
//! use warsim_cli::run;
//! use std::io;
//!
//! // 1000 games from seed 42, one JSON summary per game
//! let args = ["warsim", "sim", "--games", "1000", "--seed", "42", "--output", "data/sim.jsonl"];
//! run(args, &mut io::stdout(), &mut io::stderr());
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use warsim_engine::game::Game;
use warsim_engine::logger::EndReason;
use warsim_engine::player::Player;
use warsim_engine::report::Outcome;

use super::load_config;
use crate::error::CliError;
use crate::io_utils::ensure_parent_dir;
use crate::ui;

/// Options for the `sim` command.
#[derive(Debug, Clone)]
pub struct SimOptions {
    pub games: u64,
    pub seed: Option<u64>,
    pub output: Option<String>,
    pub face_down: Option<usize>,
    pub no_recycle: bool,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            games: 100,
            seed: None,
            output: None,
            face_down: None,
            no_recycle: false,
        }
    }
}

/// One line of the `--output` file.
#[derive(Debug, Serialize)]
struct GameSummary<'a> {
    game: u64,
    seed: u64,
    outcome: Option<Outcome>,
    winner: Option<&'a str>,
    end_reason: Option<EndReason>,
    turns: usize,
    wars: u32,
    cards: [usize; 2],
    ts: String,
}

#[derive(Debug, Default)]
struct Tally {
    wins: [u64; 2],
    draws: u64,
    turns: u64,
    wars: u64,
    turn_limit_hits: u64,
    longest: usize,
}

/// Handle the sim command.
///
/// # Errors
///
/// - `CliError::InvalidInput` when `games` is zero
/// - `CliError::Config` / `CliError::Engine` for invalid settings
/// - `CliError::Io` when the summary file cannot be written
pub fn handle_sim_command(
    opts: SimOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if opts.games == 0 {
        ui::write_error(err, "games must be >= 1")?;
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }

    let cfg = load_config(err)?;
    let rules = cfg.rules(opts.face_down, opts.no_recycle);
    rules.validate()?;
    let players = [Player::new(cfg.first.clone())?, Player::new(cfg.second.clone())?];
    let base_seed = opts.seed.or(cfg.seed).unwrap_or_else(rand::random);

    let mut sink = match opts.output.as_deref() {
        Some(p) => Some(open_output(Path::new(p), err)?),
        None => None,
    };

    let mut tally = Tally::default();
    for i in 0..opts.games {
        let seed = base_seed.wrapping_add(i);
        let mut game = Game::with_rules(&players[0], &players[1], rules, Some(seed))?;
        game.play_all();

        let turns = game.log().len();
        let wars = game.stats().wars;
        tally.turns += turns as u64;
        tally.wars += u64::from(wars);
        tally.longest = tally.longest.max(turns);
        match game.outcome() {
            Some(Outcome::Winner(seat)) => tally.wins[seat.min(1)] += 1,
            _ => tally.draws += 1,
        }
        if game.end_reason() == Some(EndReason::TurnLimit) {
            tally.turn_limit_hits += 1;
        }

        if let Some(w) = sink.as_mut() {
            let summary = GameSummary {
                game: i + 1,
                seed,
                outcome: game.outcome(),
                winner: game.winner().map(|p| p.name()),
                end_reason: game.end_reason(),
                turns,
                wars,
                cards: [players[0].cards_taken(), players[1].cards_taken()],
                ts: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            };
            let line = serde_json::to_string(&summary).map_err(std::io::Error::other)?;
            writeln!(w, "{}", line)?;
        }
    }
    if let Some(mut w) = sink {
        w.flush()?;
    }

    tracing::info!(
        games = opts.games,
        base_seed,
        draws = tally.draws,
        "simulation finished"
    );
    report(&tally, opts.games, base_seed, &players, out)?;
    if tally.turn_limit_hits > 0 {
        ui::display_warning(
            err,
            &format!(
                "{} game(s) reached the {}-turn limit and were decided by card count",
                tally.turn_limit_hits, rules.max_turns
            ),
        )?;
    }
    Ok(())
}

fn open_output(path: &Path, err: &mut dyn Write) -> Result<BufWriter<File>, CliError> {
    if let Err(e) = ensure_parent_dir(path) {
        ui::write_error(err, &e)?;
        return Err(CliError::Io(std::io::Error::other(e)));
    }
    match File::create(path) {
        Ok(f) => Ok(BufWriter::new(f)),
        Err(e) => {
            ui::write_error(err, &format!("Failed to open output file: {}", e))?;
            Err(CliError::Io(e))
        }
    }
}

fn report(
    tally: &Tally,
    games: u64,
    base_seed: u64,
    players: &[Player; 2],
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let pct = |n: u64| n as f64 * 100.0 / games as f64;
    writeln!(out, "Simulated: {} games (base seed {})", games, base_seed)?;
    for (seat, p) in players.iter().enumerate() {
        writeln!(
            out,
            "{} wins: {} ({:.1}%)",
            p.name(),
            tally.wins[seat],
            pct(tally.wins[seat])
        )?;
    }
    writeln!(out, "Draws: {} ({:.1}%)", tally.draws, pct(tally.draws))?;
    writeln!(
        out,
        "Average turns: {:.1}",
        tally.turns as f64 / games as f64
    )?;
    writeln!(out, "Average wars: {:.1}", tally.wars as f64 / games as f64)?;
    writeln!(out, "Longest game: {} turns", tally.longest)?;
    Ok(())
}
