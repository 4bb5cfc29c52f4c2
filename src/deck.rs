//! The shared draw source for a session.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, RANKS, SUITS};

/// A single 52-card deck. The top of the deck is the end of the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds all 52 rank and suit combinations and shuffles them with `rng`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::Deck;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let deck = Deck::new(&mut rng);
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Self::ordered_cards();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Creates a deck from cards in stack order: the last card is drawn first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Creates a deck that deals `draws` front to back.
    #[must_use]
    pub fn from_draw_order(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    fn ordered_cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for rank in RANKS {
            for suit in SUITS {
                cards.push(Card::new(rank, suit));
            }
        }
        cards
    }

    /// Removes and returns the top card, or `None` if the deck is exhausted.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the remaining cards, top last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
