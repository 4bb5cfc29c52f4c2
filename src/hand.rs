//! Player and dealer hands.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DealError;
use crate::score::{self, compute_score};

/// Identifier reserved for the dealer. Players are numbered from 1.
pub const DEALER_ID: u8 = 0;

/// Index of the dealer card kept face down until the reveal.
const HOLE_CARD_INDEX: usize = 0;

/// Who a hand belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// A seated player.
    Player,
    /// The house.
    Dealer,
}

/// How a card is shown to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFace {
    /// The card is visible.
    Up(Card),
    /// The card is hidden (the dealer's hole card before the reveal).
    Down,
}

/// A hand of cards with its cached score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Player number, or [`DEALER_ID`].
    id: u8,
    /// Player or dealer.
    role: Role,
    /// Cards in draw order.
    cards: Vec<Card>,
    /// Score of `cards`, refreshed on every change.
    score: u16,
    /// Whether the dealer's hole card is visible.
    hole_revealed: bool,
}

impl Hand {
    /// Creates an empty hand for player `number`.
    #[must_use]
    pub const fn player(number: u8) -> Self {
        Self {
            id: number,
            role: Role::Player,
            cards: Vec::new(),
            score: 0,
            hole_revealed: false,
        }
    }

    /// Creates an empty dealer hand.
    #[must_use]
    pub const fn dealer() -> Self {
        Self {
            id: DEALER_ID,
            role: Role::Dealer,
            cards: Vec::new(),
            score: 0,
            hole_revealed: false,
        }
    }

    /// Draws the two opening cards from the shared deck.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::AlreadyDealt`] if the hand already holds cards and
    /// [`DealError::NotEnoughCards`] if the deck has fewer than two cards. No
    /// card is drawn in either case.
    pub fn init_draw(&mut self, deck: &mut Deck) -> Result<(), DealError> {
        if !self.cards.is_empty() {
            return Err(DealError::AlreadyDealt);
        }
        if deck.len() < 2 {
            return Err(DealError::NotEnoughCards);
        }

        for _ in 0..2 {
            if let Some(card) = deck.draw_one() {
                self.add_card(card);
            }
        }
        Ok(())
    }

    /// Draws one card from the shared deck.
    ///
    /// Returns `None` and leaves the hand untouched if the deck is exhausted.
    pub fn hit(&mut self, deck: &mut Deck) -> Option<Card> {
        let Some(card) = deck.draw_one() else {
            log::warn!("deck exhausted, no card for hand {}", self.id);
            return None;
        };
        self.add_card(card);
        Some(card)
    }

    /// Adds a card to the hand and refreshes the score.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.compute_score();
    }

    /// Recomputes the score from the cards and stores it.
    pub fn compute_score(&mut self) -> u16 {
        self.score = compute_score(&self.cards);
        self.score
    }

    /// Returns the current score.
    #[must_use]
    pub const fn score(&self) -> u16 {
        self.score
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        score::is_bust_score(self.score)
    }

    /// Returns whether the hand holds an ace counted as 11.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        score::is_soft(&self.cards)
    }

    /// Returns the cards in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the player number, or [`DEALER_ID`] for the dealer.
    #[must_use]
    pub const fn id(&self) -> u8 {
        self.id
    }

    /// Returns the role of the hand.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns whether this is the dealer's hand.
    #[must_use]
    pub const fn is_dealer(&self) -> bool {
        matches!(self.role, Role::Dealer)
    }

    /// Reveals the dealer's hole card. No effect on player hands.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Returns whether the hole card has been revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Returns whether the card at `index` is shown face up.
    #[must_use]
    pub const fn is_face_up(&self, index: usize) -> bool {
        !(self.is_dealer() && !self.hole_revealed && index == HOLE_CARD_INDEX)
    }

    /// Returns every card as the table sees it.
    #[must_use]
    pub fn faces(&self) -> Vec<CardFace> {
        self.cards
            .iter()
            .enumerate()
            .map(|(index, &card)| {
                if self.is_face_up(index) {
                    CardFace::Up(card)
                } else {
                    CardFace::Down
                }
            })
            .collect()
    }

    /// Score of the face-up cards only.
    #[must_use]
    pub fn visible_score(&self) -> u16 {
        let visible: Vec<Card> = self
            .cards
            .iter()
            .enumerate()
            .filter(|&(index, _)| self.is_face_up(index))
            .map(|(_, &card)| card)
            .collect();
        compute_score(&visible)
    }
}
