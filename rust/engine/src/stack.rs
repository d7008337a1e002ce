//! A player's cards: the draw stack they play from and the pile of cards
//! they have won.

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::cards::Card;

/// Draw stack plus collected pile for one player.
///
/// Cards only ever move between piles; nothing here creates or destroys a
/// card, so `stack_size() + cards_taken()` changes only through [`collect`],
/// [`take_all`] and [`draw`].
///
/// [`collect`]: CardStack::collect
/// [`take_all`]: CardStack::take_all
/// [`draw`]: CardStack::draw
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardStack {
    /// Front is the next card to play
    draw: VecDeque<Card>,
    /// Cards won, in the order they arrived
    collected: Vec<Card>,
    /// Every card ever moved into `collected` since the last reset
    collected_total: usize,
}

impl CardStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a stack whose draw order is `cards`, front first.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let mut s = Self::new();
        s.reset(cards);
        s
    }

    pub fn reset(&mut self, cards: Vec<Card>) {
        self.draw = cards.into();
        self.collected.clear();
        self.collected_total = 0;
    }

    pub fn stack_size(&self) -> usize {
        self.draw.len()
    }

    pub fn cards_taken(&self) -> usize {
        self.collected.len()
    }

    pub fn collected_total(&self) -> usize {
        self.collected_total
    }

    pub fn total(&self) -> usize {
        self.draw.len() + self.collected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Removes the front card of the draw stack.
    ///
    /// With `recycle` set, an empty draw stack is first refilled from the
    /// collected pile in shuffled order. `None` means the player is out of
    /// cards.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R, recycle: bool) -> Option<Card> {
        if self.draw.is_empty() && recycle && !self.collected.is_empty() {
            let mut cards = std::mem::take(&mut self.collected);
            cards.shuffle(rng);
            self.draw.extend(cards);
        }
        self.draw.pop_front()
    }

    pub fn collect<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        let before = self.collected.len();
        self.collected.extend(cards);
        self.collected_total += self.collected.len() - before;
    }

    /// Moves whatever is left in the draw stack onto the collected pile.
    pub fn sweep(&mut self) {
        let rest: Vec<Card> = self.draw.drain(..).collect();
        self.collect(rest);
    }

    /// Empties both piles, handing every card to the caller.
    pub fn take_all(&mut self) -> Vec<Card> {
        let mut all: Vec<Card> = self.draw.drain(..).collect();
        all.append(&mut self.collected);
        all
    }
}
