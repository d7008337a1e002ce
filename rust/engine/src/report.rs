//! Text summaries of a game: single turns, the full log, the winner and
//! aggregate statistics. Everything here reads records and never touches
//! player cards.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::logger::{EndReason, Settlement, TurnRecord};

/// Final result of a game.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Seat (0 or 1) that ended with more cards
    Winner(usize),
    Draw,
}

/// Aggregate numbers over a sequence of turns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub turns: u32,
    /// War escalations across all turns
    pub wars: u32,
    /// Turns containing at least one war
    pub turns_with_war: u32,
    /// Most escalations in a single turn
    pub longest_war: u32,
    pub turns_won: [u32; 2],
    pub cards_won: [usize; 2],
    /// Turns whose pot went back to both players
    pub splits: u32,
}

impl GameStats {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a TurnRecord>,
    {
        let mut s = Self::default();
        for r in records {
            s.turns += 1;
            s.wars += r.wars;
            if r.had_war() {
                s.turns_with_war += 1;
            }
            s.longest_war = s.longest_war.max(r.wars);
            match r.winner {
                Some(seat) if seat < 2 => {
                    s.turns_won[seat] += 1;
                    s.cards_won[seat] += r.cards_won;
                }
                _ => s.splits += 1,
            }
            if let Some(Settlement {
                leader: Some(seat),
                cards,
            }) = r.settlement
            {
                if seat < 2 {
                    s.cards_won[seat] += cards;
                }
            }
        }
        s
    }

    /// Share of turns won by `seat`, 0.0 when nothing was played.
    pub fn win_rate(&self, seat: usize) -> f64 {
        if self.turns == 0 || seat > 1 {
            return 0.0;
        }
        f64::from(self.turns_won[seat]) / f64::from(self.turns)
    }

    pub fn war_rate(&self) -> f64 {
        if self.turns == 0 {
            return 0.0;
        }
        f64::from(self.turns_with_war) / f64::from(self.turns)
    }
}

/// Narrates one turn, e.g.
/// `Alice played Queen of Hearts, Bob played 5 of Spades. Alice wins.`
pub fn describe_turn(record: &TurnRecord, names: [&str; 2]) -> String {
    let mut line = String::new();
    for (i, rev) in record.reveals.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        let _ = write!(
            line,
            "{} played {}, {} played {}.",
            names[0], rev.first, names[1], rev.second
        );
        if rev.first.rank == rev.second.rank {
            line.push_str(" Draw.");
        }
    }
    if !line.is_empty() {
        line.push(' ');
    }
    match (record.winner, record.game_over) {
        (Some(w), Some(EndReason::OutOfCardsInWar)) => {
            let _ = write!(
                line,
                "{} cannot finish the war. {} wins.",
                names[1 - w.min(1)],
                names[w.min(1)]
            );
        }
        (Some(w), Some(EndReason::OutOfCards)) if record.reveals.is_empty() => {
            let _ = write!(
                line,
                "{} has no cards left. {} wins.",
                names[1 - w.min(1)],
                names[w.min(1)]
            );
        }
        (Some(w), _) => {
            let _ = write!(line, "{} wins.", names[w.min(1)]);
        }
        (None, _) => line.push_str("Both players ran out of cards, the pot is split."),
    }
    match record.settlement {
        Some(Settlement {
            leader: Some(l),
            cards,
        }) => {
            let l = l.min(1);
            let _ = write!(
                line,
                " Turn limit reached. {} holds more cards and takes the remaining {} from {}.",
                names[l],
                cards,
                names[1 - l]
            );
        }
        Some(Settlement { leader: None, .. }) => {
            line.push_str(" Turn limit reached with equal cards.");
        }
        None if record.game_over == Some(EndReason::TurnLimit) => {
            line.push_str(" Turn limit reached.");
        }
        None => {}
    }
    line
}

/// One numbered line per turn.
pub fn describe_log(records: &[TurnRecord], names: [&str; 2]) -> String {
    if records.is_empty() {
        return "No turns played yet.".to_string();
    }
    let mut out = String::new();
    for r in records {
        let _ = writeln!(out, "Turn {}: {}", r.turn, describe_turn(r, names));
    }
    out
}

pub fn describe_winner(outcome: Option<Outcome>, names: [&str; 2]) -> String {
    match outcome {
        Some(Outcome::Winner(seat)) => format!("The winner is {}.", names[seat.min(1)]),
        Some(Outcome::Draw) => "The game ended in a draw.".to_string(),
        None => "No winner yet.".to_string(),
    }
}

pub fn describe_stats(stats: &GameStats, names: [&str; 2]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Turns played: {}", stats.turns);
    for seat in 0..2 {
        let _ = writeln!(
            out,
            "{}: won {} turns ({:.1}%), collected {} cards",
            names[seat],
            stats.turns_won[seat],
            stats.win_rate(seat) * 100.0,
            stats.cards_won[seat]
        );
    }
    let _ = writeln!(
        out,
        "Wars: {} in {} turns ({:.1}%), longest chain {}",
        stats.wars,
        stats.turns_with_war,
        stats.war_rate() * 100.0,
        stats.longest_war
    );
    if stats.splits > 0 {
        let _ = writeln!(out, "Split pots: {}", stats.splits);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};
    use crate::logger::Reveal;

    fn record(reveals: Vec<Reveal>, wars: u32, winner: Option<usize>, cards: usize) -> TurnRecord {
        TurnRecord {
            turn: 1,
            reveals,
            wars,
            winner,
            cards_won: cards,
            game_over: None,
            settlement: None,
            ts: None,
        }
    }

    fn reveal(a: Rank, b: Rank) -> Reveal {
        Reveal {
            first: Card::new(a, Suit::Hearts),
            second: Card::new(b, Suit::Spades),
        }
    }

    #[test]
    fn plain_turn_names_winner() {
        let r = record(vec![reveal(Rank::Queen, Rank::Five)], 0, Some(0), 2);
        assert_eq!(
            describe_turn(&r, ["Alice", "Bob"]),
            "Alice played Queen of Hearts, Bob played 5 of Spades. Alice wins."
        );
    }

    #[test]
    fn war_turn_mentions_draw() {
        let r = record(
            vec![reveal(Rank::Six, Rank::Six), reveal(Rank::Two, Rank::Ace)],
            1,
            Some(1),
            6,
        );
        let text = describe_turn(&r, ["Alice", "Bob"]);
        assert!(text.contains("Draw."));
        assert!(text.ends_with("Bob wins."));
    }

    #[test]
    fn stats_count_wars_and_splits() {
        let records = vec![
            record(vec![reveal(Rank::Ace, Rank::Two)], 0, Some(0), 2),
            record(vec![reveal(Rank::Two, Rank::Two)], 2, Some(1), 10),
            record(vec![], 0, None, 4),
        ];
        let s = GameStats::from_records(&records);
        assert_eq!(s.turns, 3);
        assert_eq!(s.wars, 2);
        assert_eq!(s.turns_with_war, 1);
        assert_eq!(s.longest_war, 2);
        assert_eq!(s.turns_won, [1, 1]);
        assert_eq!(s.cards_won, [2, 10]);
        assert_eq!(s.splits, 1);
    }

    #[test]
    fn turn_cap_settlement_credits_the_leader() {
        let mut last = record(vec![reveal(Rank::Nine, Rank::Four)], 0, Some(0), 2);
        last.game_over = Some(EndReason::TurnLimit);
        last.settlement = Some(Settlement {
            leader: Some(1),
            cards: 20,
        });
        let records = vec![record(vec![reveal(Rank::Two, Rank::Ace)], 0, Some(1), 2), last];

        let s = GameStats::from_records(&records);
        assert_eq!(s.turns_won, [1, 1]);
        assert_eq!(s.cards_won, [2, 22]);

        let text = describe_turn(&records[1], ["A", "B"]);
        assert!(text.starts_with("A played 9 of Hearts"));
        assert!(text.ends_with(
            "Turn limit reached. B holds more cards and takes the remaining 20 from A."
        ));
    }

    #[test]
    fn empty_stats_do_not_divide_by_zero() {
        let s = GameStats::default();
        assert_eq!(s.win_rate(0), 0.0);
        assert_eq!(s.war_rate(), 0.0);
        assert!(describe_stats(&s, ["A", "B"]).contains("Turns played: 0"));
    }

    #[test]
    fn winner_text_before_and_after() {
        assert_eq!(describe_winner(None, ["A", "B"]), "No winner yet.");
        assert_eq!(
            describe_winner(Some(Outcome::Winner(1)), ["A", "B"]),
            "The winner is B."
        );
        assert_eq!(
            describe_winner(Some(Outcome::Draw), ["A", "B"]),
            "The game ended in a draw."
        );
    }
}
