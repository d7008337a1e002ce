use std::cell::{RefCell, RefMut};
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;
use crate::stack::CardStack;

static NEXT_PLAYER_ID: AtomicU64 = AtomicU64::new(1);
static NEXT_GAME_ID: AtomicU64 = AtomicU64::new(1);

/// Identity token of a player. Two players with the same name still have
/// different ids.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct PlayerId(u64);

impl PlayerId {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Identity token of a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct GameId(u64);

impl GameId {
    pub(crate) fn next() -> Self {
        Self(NEXT_GAME_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "game-{}", self.0)
    }
}

/// Which game a player currently belongs to, and against whom.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) struct Binding {
    pub game: GameId,
    pub opponent: PlayerId,
}

#[derive(Debug, Default)]
struct PlayerState {
    stack: CardStack,
    binding: Option<Binding>,
}

/// A War player.
///
/// `Player` is a handle: clones share the same cards and identity, which is
/// how a game and its caller observe the same player. Building a
/// [`crate::game::Game`] resets the cards of both of its players.
#[derive(Debug, Clone)]
pub struct Player {
    id: PlayerId,
    name: Rc<str>,
    state: Rc<RefCell<PlayerState>>,
}

impl Player {
    /// Creates a player with a fresh identity and no cards.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyName`] for an empty or blank name.
    ///
    /// # Examples
    ///
    /// ```
    /// use warsim_engine::player::Player;
    ///
    /// let a = Player::new("Bob").unwrap();
    /// let b = Player::new("Bob").unwrap();
    /// assert_ne!(a.id(), b.id());
    /// assert_eq!(a.stack_size(), 0);
    /// assert!(Player::new("  ").is_err());
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, GameError> {
        let name: String = name.into();
        if name.trim().is_empty() {
            return Err(GameError::EmptyName);
        }
        Ok(Self {
            id: PlayerId(NEXT_PLAYER_ID.fetch_add(1, Ordering::Relaxed)),
            name: name.into(),
            state: Rc::new(RefCell::new(PlayerState::default())),
        })
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cards left in the draw stack.
    pub fn stack_size(&self) -> usize {
        self.state.borrow().stack.stack_size()
    }

    /// Cards currently held in the collected pile.
    ///
    /// Cards shuffled back into the draw stack leave the pile, so together
    /// with [`Player::stack_size`] this always accounts for every card the
    /// player holds. The cumulative intake is
    /// [`Player::cards_collected_total`].
    pub fn cards_taken(&self) -> usize {
        self.state.borrow().stack.cards_taken()
    }

    /// Every card moved into the collected pile since the last reset,
    /// including cards later shuffled back into the draw stack.
    pub fn cards_collected_total(&self) -> usize {
        self.state.borrow().stack.collected_total()
    }

    /// Whether the player is bound to a game that has not finished.
    pub fn is_playing(&self) -> bool {
        self.state.borrow().binding.is_some()
    }

    pub(crate) fn binding(&self) -> Option<Binding> {
        self.state.borrow().binding
    }

    pub(crate) fn bind(&self, binding: Binding) {
        self.state.borrow_mut().binding = Some(binding);
    }

    pub(crate) fn is_bound_to(&self, game: GameId) -> bool {
        self.binding().is_some_and(|b| b.game == game)
    }

    /// Clears the binding only if it still points at `game`.
    pub(crate) fn release(&self, game: GameId) {
        let mut st = self.state.borrow_mut();
        if st.binding.is_some_and(|b| b.game == game) {
            st.binding = None;
        }
    }

    pub(crate) fn reset_cards(&self, cards: Vec<Card>) {
        self.state.borrow_mut().stack.reset(cards);
    }

    pub(crate) fn stack_mut(&self) -> RefMut<'_, CardStack> {
        RefMut::map(self.state.borrow_mut(), |st| &mut st.stack)
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Player {}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
