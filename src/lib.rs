//! A multi-player, single-table blackjack engine with optional `no_std`
//! support.
//!
//! The crate provides a [`Game`] type that deals from one shared deck, walks
//! every seated player through hit and stand decisions, plays the dealer's
//! hand and resolves the round into a list of [`OutcomeRecord`]s. Rendering is
//! left to the caller: the game exposes hands, scores, the turn position and
//! the result, and takes commands through plain method calls.
//!
//! # Example
//!
//! ```
//! use bjtable::{Game, GameState};
//!
//! let mut game = Game::start_session(2, 42).unwrap();
//! game.deal_initial_hands().unwrap();
//!
//! while let GameState::PlayerTurn(_) = game.state() {
//!     game.stand_current_player().unwrap();
//! }
//!
//! assert!(game.is_finished());
//! assert!(!game.outcomes().is_empty());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod score;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANKS, Rank, SUITS, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError, SessionError};
pub use game::{Game, GameState};
pub use hand::{CardFace, DEALER_ID, Hand, Role};
pub use options::TableOptions;
pub use result::{OutcomeRecord, PlayerOutcome, RoundResult, resolve};
pub use score::{MAX_SCORE, compute_score};
