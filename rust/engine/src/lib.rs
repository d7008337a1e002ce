//! # warsim-engine: War Card Game Engine Core
//!
//! A deterministic simulation of the two-player card game War. Each player
//! starts with half of a shuffled 52-card deck; every turn both reveal their
//! top card and the higher rank takes both. Equal ranks start a war that
//! escalates until a round is decided or a player runs out of cards.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG and the 26/26 split
//! - [`stack`] - A player's draw stack and collected pile
//! - [`engine`] - Turn and war resolution between two stacks
//! - [`player`] - Players as shared handles with identity tokens
//! - [`game`] - Binding players, the turn loop and reporting entry points
//! - [`rules`] - Rule variants (face-down cards per war, recycling, turn cap)
//! - [`logger`] - Turn records and JSONL turn logging
//! - [`report`] - Turn narration, winner text and aggregate statistics
//! - [`errors`] - Error types for game setup
//!
//! ## Quick Start
//!
//! ```rust
//! use warsim_engine::game::Game;
//! use warsim_engine::player::Player;
//!
//! let alice = Player::new("Alice").unwrap();
//! let bob = Player::new("Bob").unwrap();
//! let mut game = Game::new(&alice, &bob).unwrap();
//!
//! game.play_turn();
//! assert_eq!(
//!     alice.stack_size() + bob.stack_size() + alice.cards_taken() + bob.cards_taken(),
//!     52
//! );
//!
//! game.play_all();
//! println!("{}", game.winner_report());
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All game outcomes are reproducible using a seed:
//!
//! ```rust
//! use warsim_engine::game::Game;
//! use warsim_engine::player::Player;
//!
//! let (a, b) = (Player::new("A").unwrap(), Player::new("B").unwrap());
//! let mut g1 = Game::with_seed(&a, &b, 7).unwrap();
//! g1.play_all();
//! let first_run = g1.log().to_vec();
//! drop(g1);
//!
//! let mut g2 = Game::with_seed(&a, &b, 7).unwrap();
//! g2.play_all();
//! assert_eq!(g2.log(), &first_run[..]);
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod logger;
pub mod player;
pub mod report;
pub mod rules;
pub mod stack;
