//! Game state types.

/// Turn sequencing state of a session.
///
/// A session moves through `WaitingToDeal`, then `PlayerTurn(i)` for each
/// seat in order, then `DealerTurn`, and ends in `Resolved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// The opening cards have not been dealt.
    WaitingToDeal,
    /// Waiting for the player at this seat index (0-based) to act.
    PlayerTurn(usize),
    /// Dealer plays out their hand.
    DealerTurn,
    /// The round is over and the result is final.
    Resolved,
}

impl GameState {
    /// Returns the seat index whose turn it is, if a player is acting.
    #[must_use]
    pub const fn player_index(self) -> Option<usize> {
        match self {
            Self::PlayerTurn(index) => Some(index),
            _ => None,
        }
    }

    /// Returns whether the session is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Resolved)
    }
}
