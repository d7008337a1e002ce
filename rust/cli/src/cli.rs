//! Command-line surface of `warsim`, parsed with clap's derive API.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "warsim",
    version,
    about = "Simulate the card game War",
    long_about = None
)]
pub struct WarsimCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play one game and print every turn
    Play {
        /// RNG seed for the shuffle (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Name of the first player
        #[arg(long)]
        first: Option<String>,
        /// Name of the second player
        #[arg(long)]
        second: Option<String>,
        /// Stop after this many turns instead of playing to the end
        #[arg(long)]
        turns: Option<u32>,
        /// Write the turn log as JSONL to this file
        #[arg(long)]
        log: Option<String>,
        /// Face-down cards per player in each war round
        #[arg(long)]
        face_down: Option<usize>,
        /// Do not reshuffle won cards into an empty draw stack
        #[arg(long)]
        no_recycle: bool,
        /// Print full sentences instead of one-line turns
        #[arg(long)]
        narrate: bool,
    },
    /// Play many games and report aggregate results
    Sim {
        /// Number of games to play
        #[arg(long, default_value_t = 100)]
        games: u64,
        /// Base seed; game i uses seed + i
        #[arg(long)]
        seed: Option<u64>,
        /// Write one JSONL summary per game to this file
        #[arg(long)]
        output: Option<String>,
        /// Face-down cards per player in each war round
        #[arg(long)]
        face_down: Option<usize>,
        /// Do not reshuffle won cards into an empty draw stack
        #[arg(long)]
        no_recycle: bool,
    },
    /// Summarise a JSONL turn log written by `play --log`
    Stats {
        #[arg(long)]
        input: String,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
