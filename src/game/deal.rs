use crate::error::DealError;

use super::{Game, GameState};

impl Game {
    /// Deals two cards to every player in seat order, then two to the dealer.
    ///
    /// The first player's turn starts once the cards are out.
    ///
    /// # Errors
    ///
    /// Returns an error if the hands were already dealt or the deck cannot
    /// cover every opening card. Nothing is drawn in either case.
    pub fn deal_initial_hands(&mut self) -> Result<(), DealError> {
        if self.state != GameState::WaitingToDeal {
            return Err(DealError::InvalidState);
        }

        if self.deck.len() < Self::opening_cards(self.players.len()) {
            return Err(DealError::NotEnoughCards);
        }

        for hand in &mut self.players {
            hand.init_draw(&mut self.deck)?;
            log::debug!("player {} dealt, score {}", hand.id(), hand.score());
        }
        self.dealer.init_draw(&mut self.deck)?;
        log::debug!("dealer dealt, {} cards left", self.deck.len());

        self.state = GameState::PlayerTurn(0);
        Ok(())
    }
}
