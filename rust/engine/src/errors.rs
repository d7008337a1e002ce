use thiserror::Error;

/// Errors raised when setting up players and games.
///
/// Play itself never fails: running out of cards ends the game normally.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("A player cannot play against themselves")]
    SelfPlay,
    #[error("Player {name} is already playing another game")]
    AlreadyBound { name: String },
    #[error("Player name must not be empty")]
    EmptyName,
    #[error("Invalid rules: {0}")]
    InvalidRules(String),
}
