use std::cmp::Ordering;

use rand::Rng;

use crate::cards::Card;
use crate::logger::{EndReason, Reveal, Settlement};
use crate::rules::WarRules;
use crate::stack::CardStack;

/// What a single call to [`resolve_turn`] did to the two stacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Face-up pairs, opening reveal first
    pub reveals: Vec<Reveal>,
    /// War escalations played
    pub wars: u32,
    /// Seat that collected the pot, `None` when it was split back
    pub winner: Option<usize>,
    /// Cards that changed hands
    pub cards_won: usize,
    /// Set when this turn ended the game
    pub game_over: Option<EndReason>,
}

/// Cards committed during one turn, kept per seat so a double exhaustion can
/// hand every card back to its owner.
#[derive(Debug, Default)]
struct Pot {
    stakes: [Vec<Card>; 2],
}

impl Pot {
    fn add(&mut self, seat: usize, card: Card) {
        self.stakes[seat].push(card);
    }

    fn len(&self) -> usize {
        self.stakes[0].len() + self.stakes[1].len()
    }

    fn into_cards(self) -> Vec<Card> {
        let [mut a, b] = self.stakes;
        a.extend(b);
        a
    }
}

/// Which seats failed to produce a card.
enum Short {
    One(usize),
    Both,
}

/// Draws one card per seat in lockstep, committing whatever was drawn to the
/// pot.
fn draw_pair<R: Rng + ?Sized>(
    seats: &mut [&mut CardStack; 2],
    pot: &mut Pot,
    rng: &mut R,
    recycle: bool,
) -> Result<[Card; 2], Short> {
    let first = seats[0].draw(rng, recycle);
    let second = seats[1].draw(rng, recycle);
    if let Some(c) = first {
        pot.add(0, c);
    }
    if let Some(c) = second {
        pot.add(1, c);
    }
    match (first, second) {
        (Some(a), Some(b)) => Ok([a, b]),
        (Some(_), None) => Err(Short::One(1)),
        (None, Some(_)) => Err(Short::One(0)),
        (None, None) => Err(Short::Both),
    }
}

/// Resolves one turn of War between two stacks, including every war
/// escalation it triggers.
///
/// Each round both seats reveal a card. The higher rank collects the pot.
/// A tie starts a war: each seat places `rules.face_down` cards face-down and
/// reveals again, and the pot keeps growing until a round is decided. A seat
/// that cannot produce a required card loses and the opponent collects the
/// pot together with everything the loser still holds. When both seats run
/// dry on the same draw each takes back its own stake.
///
/// Once the game is over every remaining draw-stack card is swept onto its
/// owner's collected pile. The total number of cards across both stacks is
/// the same before and after the call.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
/// use warsim_engine::cards::{Card, Rank, Suit};
/// use warsim_engine::engine::resolve_turn;
/// use warsim_engine::rules::WarRules;
/// use warsim_engine::stack::CardStack;
///
/// let mut rng = ChaCha20Rng::seed_from_u64(7);
/// let mut a = CardStack::from_cards(vec![
///     Card::new(Rank::King, Suit::Hearts),
///     Card::new(Rank::Two, Suit::Hearts),
/// ]);
/// let mut b = CardStack::from_cards(vec![
///     Card::new(Rank::Four, Suit::Clubs),
///     Card::new(Rank::Three, Suit::Clubs),
/// ]);
///
/// let res = resolve_turn(&mut a, &mut b, &WarRules::default(), &mut rng);
/// assert_eq!(res.winner, Some(0));
/// assert_eq!(res.cards_won, 2);
/// assert_eq!(a.cards_taken(), 2);
/// assert_eq!(b.stack_size(), 1);
/// ```
pub fn resolve_turn<R: Rng + ?Sized>(
    first: &mut CardStack,
    second: &mut CardStack,
    rules: &WarRules,
    rng: &mut R,
) -> Resolution {
    let before = first.total() + second.total();
    let mut seats = [first, second];
    let res = play_rounds(&mut seats, rules, rng);
    if res.game_over.is_some() {
        for s in seats.iter_mut() {
            s.sweep();
        }
    }
    debug_assert_eq!(
        seats[0].total() + seats[1].total(),
        before,
        "cards must be conserved across a turn"
    );
    res
}

fn play_rounds<R: Rng + ?Sized>(
    seats: &mut [&mut CardStack; 2],
    rules: &WarRules,
    rng: &mut R,
) -> Resolution {
    let recycle = rules.recycle_collected;
    let mut pot = Pot::default();
    let mut reveals = Vec::new();
    let mut wars = 0u32;

    loop {
        let up = match draw_pair(seats, &mut pot, rng, recycle) {
            Ok(up) => up,
            Err(short) => {
                let reason = if wars == 0 {
                    EndReason::OutOfCards
                } else {
                    EndReason::OutOfCardsInWar
                };
                return settle_short(seats, pot, short, reveals, wars, reason);
            }
        };
        reveals.push(Reveal {
            first: up[0],
            second: up[1],
        });

        let winner = match up[0].rank.cmp(&up[1].rank) {
            Ordering::Greater => 0,
            Ordering::Less => 1,
            Ordering::Equal => {
                wars += 1;
                tracing::trace!(wars, pot = pot.len(), "war");
                for _ in 0..rules.face_down {
                    if let Err(short) = draw_pair(seats, &mut pot, rng, recycle) {
                        return settle_short(
                            seats,
                            pot,
                            short,
                            reveals,
                            wars,
                            EndReason::OutOfCardsInWar,
                        );
                    }
                }
                continue;
            }
        };

        let cards_won = pot.len();
        seats[winner].collect(pot.into_cards());
        let loser = 1 - winner;
        let game_over = if seats[loser].is_empty()
            || (!recycle && seats[0].stack_size() == 0 && seats[1].stack_size() == 0)
        {
            Some(EndReason::OutOfCards)
        } else {
            None
        };
        return Resolution {
            reveals,
            wars,
            winner: Some(winner),
            cards_won,
            game_over,
        };
    }
}

fn settle_short(
    seats: &mut [&mut CardStack; 2],
    pot: Pot,
    short: Short,
    reveals: Vec<Reveal>,
    wars: u32,
    reason: EndReason,
) -> Resolution {
    match short {
        Short::One(loser) => {
            let winner = 1 - loser;
            let mut won = pot.into_cards();
            won.extend(seats[loser].take_all());
            let cards_won = won.len();
            seats[winner].collect(won);
            Resolution {
                reveals,
                wars,
                winner: Some(winner),
                cards_won,
                game_over: Some(reason),
            }
        }
        Short::Both => {
            let cards_won = pot.len();
            let [a, b] = pot.stakes;
            seats[0].collect(a);
            seats[1].collect(b);
            Resolution {
                reveals,
                wars,
                winner: None,
                cards_won,
                game_over: Some(EndReason::BothOutOfCards),
            }
        }
    }
}

/// Ends a game that hit the turn cap: the seat holding more cards takes
/// everything, equal holdings keep their own cards.
pub fn settle_by_count(first: &mut CardStack, second: &mut CardStack) -> Settlement {
    let leader = match first.total().cmp(&second.total()) {
        Ordering::Greater => Some(0),
        Ordering::Less => Some(1),
        Ordering::Equal => None,
    };
    let cards = match leader {
        Some(0) => {
            let rest = second.take_all();
            let n = rest.len();
            first.collect(rest);
            n
        }
        Some(_) => {
            let rest = first.take_all();
            let n = rest.len();
            second.collect(rest);
            n
        }
        None => 0,
    };
    first.sweep();
    second.sweep();
    Settlement { leader, cards }
}
