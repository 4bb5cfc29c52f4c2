use crate::card::Card;
use crate::error::ActionError;

use super::{Game, GameState};

impl Game {
    fn ensure_player_turn(&self) -> Result<usize, ActionError> {
        self.state.player_index().ok_or(ActionError::InvalidState)
    }

    /// Passes the turn to the next seat, or to the dealer after the last one.
    fn advance_after_turn(&mut self, index: usize) {
        let next = index + 1;
        if next < self.players.len() {
            self.state = GameState::PlayerTurn(next);
        } else {
            self.state = GameState::DealerTurn;
            self.dealer_play();
        }
    }

    /// Player action: Hit (draw a card) for the player whose turn it is.
    ///
    /// A bust ends the player's turn.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] if no player turn is in progress
    /// and [`ActionError::NoCards`] if the deck is empty. The game is left
    /// unchanged in both cases; after `NoCards` the player can still stand.
    pub fn hit_current_player(&mut self) -> Result<Card, ActionError> {
        let index = self.ensure_player_turn()?;
        let hand = self
            .players
            .get_mut(index)
            .ok_or(ActionError::InvalidState)?;

        let card = hand.hit(&mut self.deck).ok_or(ActionError::NoCards)?;
        let bust = hand.is_bust();
        log::debug!(
            "player {} hits {card}, score {}{}",
            hand.id(),
            hand.score(),
            if bust { " (bust)" } else { "" }
        );

        if bust {
            self.advance_after_turn(index);
        }

        Ok(card)
    }

    /// Player action: Stand (keep the current hand) for the player whose turn
    /// it is.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] if no player turn is in progress.
    pub fn stand_current_player(&mut self) -> Result<(), ActionError> {
        let index = self.ensure_player_turn()?;
        if let Some(hand) = self.players.get(index) {
            log::debug!("player {} stands on {}", hand.id(), hand.score());
        }

        self.advance_after_turn(index);
        Ok(())
    }
}
