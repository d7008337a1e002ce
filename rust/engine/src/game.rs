use std::io::Write;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::deck::Deck;
use crate::engine::{resolve_turn, settle_by_count};
use crate::errors::GameError;
use crate::logger::{EndReason, TurnRecord};
use crate::player::{Binding, GameId, Player};
use crate::report::{self, GameStats, Outcome};
use crate::rules::WarRules;

/// RNG stream used for reshuffling collected piles, kept apart from the
/// stream that shuffles the opening deck.
const RECYCLE_STREAM: u64 = 1;

/// A game of War between two players.
///
/// Creating a game binds both players to it and deals them a fresh 26/26
/// split. A player stays bound until the game finishes or is dropped; while
/// bound it cannot join a game against anybody else. Building a new game for
/// the same pair replaces the old one, which then ignores further play.
///
/// # Examples
///
/// ```
/// use warsim_engine::game::Game;
/// use warsim_engine::player::Player;
///
/// let alice = Player::new("Alice").unwrap();
/// let bob = Player::new("Bob").unwrap();
/// let mut game = Game::with_seed(&alice, &bob, 42).unwrap();
/// assert_eq!(alice.stack_size(), 26);
///
/// game.play_all();
/// assert!(game.is_finished());
/// assert_eq!(alice.stack_size() + bob.stack_size(), 0);
/// assert_eq!(alice.cards_taken() + bob.cards_taken(), 52);
/// ```
#[derive(Debug)]
pub struct Game {
    id: GameId,
    players: [Player; 2],
    rules: WarRules,
    seed: u64,
    rng: ChaCha20Rng,
    log: Vec<TurnRecord>,
    outcome: Option<Outcome>,
    end_reason: Option<EndReason>,
}

impl Game {
    /// Creates a game under the default rules with a random seed.
    ///
    /// # Errors
    ///
    /// See [`Game::with_rules`].
    pub fn new(first: &Player, second: &Player) -> Result<Self, GameError> {
        Self::with_rules(first, second, WarRules::default(), None)
    }

    pub fn with_seed(first: &Player, second: &Player, seed: u64) -> Result<Self, GameError> {
        Self::with_rules(first, second, WarRules::default(), Some(seed))
    }

    /// Creates a game, binds both players to it and resets their cards.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidRules`] if `rules` fail validation
    /// - [`GameError::SelfPlay`] if both arguments are the same player
    /// - [`GameError::AlreadyBound`] if either player is in an unfinished
    ///   game against someone else
    pub fn with_rules(
        first: &Player,
        second: &Player,
        rules: WarRules,
        seed: Option<u64>,
    ) -> Result<Self, GameError> {
        rules.validate()?;
        if first.id() == second.id() {
            return Err(GameError::SelfPlay);
        }
        for (p, other) in [(first, second), (second, first)] {
            if let Some(b) = p.binding() {
                if b.opponent != other.id() {
                    return Err(GameError::AlreadyBound {
                        name: p.name().to_string(),
                    });
                }
            }
        }

        let seed = seed.unwrap_or_else(rand::random);
        let id = GameId::next();

        let mut deck = Deck::new_with_seed(seed);
        deck.shuffle();
        let (a, b) = deck.split();
        first.reset_cards(a);
        second.reset_cards(b);
        first.bind(Binding {
            game: id,
            opponent: second.id(),
        });
        second.bind(Binding {
            game: id,
            opponent: first.id(),
        });

        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        rng.set_stream(RECYCLE_STREAM);

        tracing::debug!(
            game = id.value(),
            seed,
            first = first.name(),
            second = second.name(),
            "game created"
        );

        Ok(Self {
            id,
            players: [first.clone(), second.clone()],
            rules,
            seed,
            rng,
            log: Vec::new(),
            outcome: None,
            end_reason: None,
        })
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn rules(&self) -> &WarRules {
        &self.rules
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn log(&self) -> &[TurnRecord] {
        &self.log
    }

    pub fn last_turn(&self) -> Option<&TurnRecord> {
        self.log.last()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    pub fn winner(&self) -> Option<&Player> {
        match self.outcome {
            Some(Outcome::Winner(seat)) => self.players.get(seat),
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Unfinished and still owning both players' cards.
    pub fn is_active(&self) -> bool {
        !self.is_finished() && self.players.iter().all(|p| p.is_bound_to(self.id))
    }

    pub fn stats(&self) -> GameStats {
        GameStats::from_records(&self.log)
    }

    /// Plays a single turn, wars included.
    ///
    /// Does nothing once the game is finished, or when the players have been
    /// dealt into a newer game.
    pub fn play_turn(&mut self) {
        if self.is_finished() {
            tracing::debug!(game = self.id.value(), "game already finished");
            return;
        }
        if !self.is_active() {
            tracing::warn!(
                game = self.id.value(),
                "players were dealt into a newer game; ignoring play"
            );
            return;
        }

        let res = {
            let mut a = self.players[0].stack_mut();
            let mut b = self.players[1].stack_mut();
            resolve_turn(&mut a, &mut b, &self.rules, &mut self.rng)
        };

        let record = TurnRecord {
            turn: self.log.len() as u32 + 1,
            reveals: res.reveals,
            wars: res.wars,
            winner: res.winner,
            cards_won: res.cards_won,
            game_over: res.game_over,
            settlement: None,
            ts: None,
        };
        tracing::debug!(
            game = self.id.value(),
            turn = record.turn,
            winner = ?record.winner,
            cards = record.cards_won,
            wars = record.wars,
            "turn resolved"
        );
        self.log.push(record);

        if let Some(reason) = res.game_over {
            self.finish(reason);
        } else if self.log.len() as u32 >= self.rules.max_turns {
            self.finish_at_turn_limit();
        }
    }

    /// Plays turns until the game is decided.
    pub fn play_all(&mut self) {
        while self.is_active() {
            self.play_turn();
        }
    }

    fn finish_at_turn_limit(&mut self) {
        let settlement = {
            let mut a = self.players[0].stack_mut();
            let mut b = self.players[1].stack_mut();
            settle_by_count(&mut a, &mut b)
        };
        if let Some(last) = self.log.last_mut() {
            last.game_over = Some(EndReason::TurnLimit);
            last.settlement = Some(settlement);
        }
        tracing::warn!(
            game = self.id.value(),
            turns = self.log.len(),
            leader = ?settlement.leader,
            cards = settlement.cards,
            "turn limit reached, deciding by card count"
        );
        self.finish(EndReason::TurnLimit);
    }

    fn finish(&mut self, reason: EndReason) {
        let held = [
            self.players[0].cards_taken() + self.players[0].stack_size(),
            self.players[1].cards_taken() + self.players[1].stack_size(),
        ];
        let outcome = match held[0].cmp(&held[1]) {
            std::cmp::Ordering::Greater => Outcome::Winner(0),
            std::cmp::Ordering::Less => Outcome::Winner(1),
            std::cmp::Ordering::Equal => Outcome::Draw,
        };
        self.outcome = Some(outcome);
        self.end_reason = Some(reason);
        for p in &self.players {
            p.release(self.id);
        }
        tracing::info!(
            game = self.id.value(),
            turns = self.log.len(),
            ?outcome,
            ?reason,
            "game finished"
        );
    }

    fn names(&self) -> [&str; 2] {
        [self.players[0].name(), self.players[1].name()]
    }

    pub fn last_turn_report(&self) -> String {
        match self.log.last() {
            Some(r) => report::describe_turn(r, self.names()),
            None => "No turns played yet.".to_string(),
        }
    }

    pub fn winner_report(&self) -> String {
        report::describe_winner(self.outcome, self.names())
    }

    pub fn log_report(&self) -> String {
        report::describe_log(&self.log, self.names())
    }

    pub fn stats_report(&self) -> String {
        report::describe_stats(&self.stats(), self.names())
    }

    pub fn print_last_turn(&self) {
        print_line(&self.last_turn_report());
    }

    pub fn print_winner(&self) {
        print_line(&self.winner_report());
    }

    pub fn print_log(&self) {
        print_line(self.log_report().trim_end());
    }

    pub fn print_stats(&self) {
        print_line(self.stats_report().trim_end());
    }
}

impl Drop for Game {
    fn drop(&mut self) {
        for p in &self.players {
            p.release(self.id);
        }
    }
}

fn print_line(text: &str) {
    // stdout may be closed; reports never fail the caller
    let _ = writeln!(std::io::stdout().lock(), "{}", text);
}
