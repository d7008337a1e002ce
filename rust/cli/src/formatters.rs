//! Compact card and turn formatters for terminal display.
//!
//! The engine narrates turns in full sentences; these helpers render the
//! one-line form used by `warsim play`. Unicode suit symbols are used where
//! the terminal supports them, with an ASCII fallback.
//!
//! ## Example
//!
//! ```rust
//! use warsim_engine::cards::{Card, Rank, Suit};
//! use warsim_cli::formatters::format_card;
//!
//! let ace_spades = Card { rank: Rank::Ace, suit: Suit::Spades };
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! ```

use warsim_engine::cards::{Card, Rank, Suit};
use warsim_engine::logger::{Reveal, Settlement, TurnRecord};

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// Format a Rank as a single character (2-9, T, J, Q, K, A).
pub fn format_rank(rank: &Rank) -> String {
    match rank {
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "T",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
    }
    .to_string()
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// `"A♠ vs 7♦"`
pub fn format_reveal(reveal: &Reveal) -> String {
    format!(
        "{} vs {}",
        format_card(&reveal.first),
        format_card(&reveal.second)
    )
}

/// One-line summary of a turn, e.g. `#3  5♥ vs 5♠ | war | K♥ vs 2♠ -> Alice +6`.
pub fn format_turn(record: &TurnRecord, names: [&str; 2]) -> String {
    let rounds: Vec<String> = record.reveals.iter().map(format_reveal).collect();
    let played = if rounds.is_empty() {
        "no cards".to_string()
    } else {
        rounds.join(" | war | ")
    };
    let result = match record.winner {
        Some(seat) => format!("{} +{}", names[seat.min(1)], record.cards_won),
        None => format!("split {}", record.cards_won),
    };
    let mut line = format!("#{:<4} {} -> {}", record.turn, played, result);
    if let Some(reason) = record.game_over {
        line.push_str(&format!(" (game over: {:?})", reason));
    }
    if let Some(Settlement {
        leader: Some(seat),
        cards,
    }) = record.settlement
    {
        line.push_str(&format!(" [settled: {} +{}]", names[seat.min(1)], cards));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    #[test]
    fn test_format_rank() {
        assert_eq!(format_rank(&Rank::Two), "2");
        assert_eq!(format_rank(&Rank::Ten), "T");
        assert_eq!(format_rank(&Rank::Queen), "Q");
        assert_eq!(format_rank(&Rank::Ace), "A");
    }

    #[test]
    fn test_format_suit_unicode_or_ascii() {
        let hearts = format_suit(&Suit::Hearts);
        assert!(hearts == "♥" || hearts == "h");
        let spades = format_suit(&Suit::Spades);
        assert!(spades == "♠" || spades == "s");
    }

    #[test]
    fn test_format_turn_with_war() {
        let record = TurnRecord {
            turn: 3,
            reveals: vec![
                Reveal {
                    first: card(Rank::Five, Suit::Hearts),
                    second: card(Rank::Five, Suit::Spades),
                },
                Reveal {
                    first: card(Rank::King, Suit::Hearts),
                    second: card(Rank::Two, Suit::Spades),
                },
            ],
            wars: 1,
            winner: Some(0),
            cards_won: 6,
            game_over: None,
            settlement: None,
            ts: None,
        };
        let line = format_turn(&record, ["Alice", "Bob"]);
        assert!(line.starts_with("#3"));
        assert!(line.contains("| war |"));
        assert!(line.ends_with("-> Alice +6"));
    }

    #[test]
    fn test_format_turn_split() {
        let record = TurnRecord {
            turn: 1,
            reveals: vec![],
            wars: 0,
            winner: None,
            cards_won: 0,
            game_over: None,
            settlement: None,
            ts: None,
        };
        let line = format_turn(&record, ["A", "B"]);
        assert!(line.contains("no cards"));
        assert!(line.ends_with("split 0"));
    }

    #[test]
    fn test_format_turn_shows_settlement() {
        let record = TurnRecord {
            turn: 3,
            reveals: vec![Reveal {
                first: card(Rank::Nine, Suit::Diamonds),
                second: card(Rank::Four, Suit::Clubs),
            }],
            wars: 0,
            winner: Some(0),
            cards_won: 2,
            game_over: Some(warsim_engine::logger::EndReason::TurnLimit),
            settlement: Some(Settlement {
                leader: Some(1),
                cards: 25,
            }),
            ts: None,
        };
        let line = format_turn(&record, ["Alice", "Bob"]);
        assert!(line.contains("-> Alice +2 (game over: TurnLimit)"));
        assert!(line.ends_with("[settled: Bob +25]"));
    }
}
