use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// The two face-up cards of one round, in seat order.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Reveal {
    pub first: Card,
    pub second: Card,
}

/// Why a game stopped.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// A player could not reveal a card at the start of a turn
    OutOfCards,
    /// A player ran out while placing war cards
    OutOfCardsInWar,
    /// Both players ran out on the same draw
    BothOutOfCards,
    /// The turn cap was reached and card counts decided the game
    TurnLimit,
}

/// Cards handed over when the turn cap decides a game.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    /// Seat that held more cards at the cap; `None` when holdings were equal
    pub leader: Option<usize>,
    /// Cards the leader took from the other player
    pub cards: usize,
}

/// Outcome of one played turn.
/// Serialized to JSONL by [`TurnLogger`].
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-based turn number within the game
    pub turn: u32,
    /// Face-up pairs, the opening reveal first and one per war round after it
    pub reveals: Vec<Reveal>,
    /// Number of war escalations in this turn
    pub wars: u32,
    /// Seat (0 or 1) that won the turn; `None` when the pot was split
    pub winner: Option<usize>,
    /// Cards moved into a collected pile by this turn
    pub cards_won: usize,
    /// Set on the turn that ended the game
    #[serde(default)]
    pub game_over: Option<EndReason>,
    /// Card-count settlement applied after this turn hit the turn cap
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settlement: Option<Settlement>,
    /// Timestamp when the record was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl TurnRecord {
    pub fn had_war(&self) -> bool {
        self.wars > 0
    }
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends turn records to a JSONL file, one record per line.
pub struct TurnLogger {
    writer: Option<BufWriter<File>>,
    written: usize,
}

impl TurnLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            written: 0,
        })
    }

    /// A logger that counts records without writing them anywhere.
    pub fn discard() -> Self {
        Self {
            writer: None,
            written: 0,
        }
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn write(&mut self, record: &TurnRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        self.written += 1;
        Ok(())
    }

    pub fn write_all<'a, I>(&mut self, records: I) -> std::io::Result<()>
    where
        I: IntoIterator<Item = &'a TurnRecord>,
    {
        for rec in records {
            self.write(rec)?;
        }
        Ok(())
    }
}
