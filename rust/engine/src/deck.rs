use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card, DECK_SIZE};

/// A 52-card deck with its own seeded RNG so a game's opening split is
/// reproducible from its seed.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    /// Deals the remaining cards alternately into two halves, first card to
    /// the first half. A full deck yields 26/26.
    pub fn split(&mut self) -> (Vec<Card>, Vec<Card>) {
        let mut first = Vec::with_capacity(DECK_SIZE / 2);
        let mut second = Vec::with_capacity(DECK_SIZE / 2);
        let mut to_first = true;
        while let Some(c) = self.deal_card() {
            if to_first {
                first.push(c);
            } else {
                second.push(c);
            }
            to_first = !to_first;
        }
        (first, second)
    }
}
