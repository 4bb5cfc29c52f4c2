//! Session engine and turn sequencing.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE};
use crate::deck::Deck;
use crate::error::SessionError;
use crate::hand::{CardFace, Hand};
use crate::options::TableOptions;
use crate::result::{OutcomeRecord, RoundResult};

mod actions;
mod deal;
mod dealer;
pub mod state;

pub use state::GameState;

/// A single blackjack session: one deck, the seated players and the dealer.
///
/// The game owns the deck and hands it to a [`Hand`] only for the duration of
/// a draw. All randomness comes from one generator seeded at construction, so
/// a session replays identically for the same seed and commands.
#[derive(Debug, Clone)]
pub struct Game {
    /// The shared draw source.
    deck: Deck,
    /// Player hands in seat order. Seat `i` is player number `i + 1`.
    players: Vec<Hand>,
    /// The dealer's hand.
    dealer: Hand,
    /// Current turn state.
    state: GameState,
    /// Table options.
    options: TableOptions,
    /// Cards the dealer drew during its turn.
    dealer_draws: Vec<Card>,
    /// Outcome of the round, once resolved.
    result: Option<RoundResult>,
    /// Random number generator for dealer decisions.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new session with a freshly shuffled deck.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no players, if one deck cannot deal
    /// every seat and the dealer, or if the risk hit probability is outside
    /// `0.0..=1.0`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Game, GameState, TableOptions};
    ///
    /// let game = Game::new(TableOptions::default().with_players(2), 42).unwrap();
    /// assert_eq!(game.state(), GameState::WaitingToDeal);
    /// assert_eq!(game.cards_remaining(), 52);
    /// ```
    pub fn new(options: TableOptions, seed: u64) -> Result<Self, SessionError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::new(&mut rng);
        Self::build(options, deck, rng)
    }

    /// Creates a session for `num_players` players with the default rules.
    ///
    /// # Errors
    ///
    /// See [`Game::new`].
    pub fn start_session(num_players: u8, seed: u64) -> Result<Self, SessionError> {
        Self::new(TableOptions::default().with_players(num_players), seed)
    }

    /// Creates a session that draws from `deck` instead of a shuffled one.
    ///
    /// `seed` still drives the dealer's risk hit.
    ///
    /// # Errors
    ///
    /// See [`Game::new`].
    pub fn with_deck(options: TableOptions, deck: Deck, seed: u64) -> Result<Self, SessionError> {
        Self::build(options, deck, ChaCha8Rng::seed_from_u64(seed))
    }

    fn build(options: TableOptions, deck: Deck, rng: ChaCha8Rng) -> Result<Self, SessionError> {
        Self::validate(&options)?;

        let players = (1..=options.players).map(Hand::player).collect();
        log::info!(
            "session started: {} player(s), {} cards in deck",
            options.players,
            deck.len()
        );

        Ok(Self {
            deck,
            players,
            dealer: Hand::dealer(),
            state: GameState::WaitingToDeal,
            options,
            dealer_draws: Vec::new(),
            result: None,
            rng,
        })
    }

    fn validate(options: &TableOptions) -> Result<(), SessionError> {
        if options.players == 0 {
            return Err(SessionError::NoPlayers);
        }
        if Self::opening_cards(usize::from(options.players)) > DECK_SIZE {
            return Err(SessionError::TooManyPlayers);
        }
        if !(0.0..=1.0).contains(&options.risk_hit_probability) {
            return Err(SessionError::InvalidRiskProbability);
        }
        Ok(())
    }

    /// Cards needed to deal two to every player and the dealer.
    const fn opening_cards(players: usize) -> usize {
        2 * (players + 1)
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns whether the round has been resolved.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the seat index (0-based) whose turn it is.
    #[must_use]
    pub const fn current_player_index(&self) -> Option<usize> {
        self.state.player_index()
    }

    /// Returns the hand of the player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<&Hand> {
        self.current_player_index()
            .and_then(|index| self.players.get(index))
    }

    /// Returns the current player's score.
    #[must_use]
    pub fn current_score(&self) -> Option<u16> {
        self.current_player().map(Hand::score)
    }

    /// Returns whether the current player has busted.
    #[must_use]
    pub fn current_is_bust(&self) -> Option<bool> {
        self.current_player().map(Hand::is_bust)
    }

    /// Returns all player hands in seat order.
    #[must_use]
    pub fn players(&self) -> &[Hand] {
        &self.players
    }

    /// Returns the hand at seat `index`.
    #[must_use]
    pub fn player(&self, index: usize) -> Option<&Hand> {
        self.players.get(index)
    }

    /// Returns the number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the dealer's cards as the table sees them.
    #[must_use]
    pub fn dealer_faces(&self) -> Vec<CardFace> {
        self.dealer.faces()
    }

    /// Returns the cards the dealer drew during its turn.
    #[must_use]
    pub fn dealer_draws(&self) -> &[Card] {
        &self.dealer_draws
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the round result once the game is resolved.
    #[must_use]
    pub const fn result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    /// Returns the outcome records, empty until the game is resolved.
    #[must_use]
    pub fn outcomes(&self) -> &[OutcomeRecord] {
        match &self.result {
            Some(result) => &result.records,
            None => &[],
        }
    }
}
