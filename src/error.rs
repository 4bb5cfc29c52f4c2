//! Error types for session and turn operations.
//!
//! Every error is a rejection: the game is left exactly as it was before the
//! call that returned it.

use thiserror::Error;

/// Errors that can occur when creating a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The table needs at least one player.
    #[error("at least one player is required")]
    NoPlayers,
    /// A single deck cannot deal two cards to every seat and the dealer.
    #[error("too many players for a single deck")]
    TooManyPlayers,
    /// The dealer risk-hit probability is outside `0.0..=1.0`.
    #[error("risk hit probability must be within 0.0..=1.0")]
    InvalidRiskProbability,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// The hand already holds cards.
    #[error("hand has already been dealt")]
    AlreadyDealt,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No player turn is in progress.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}
