use rand::Rng;

use crate::result::resolve;

use super::{Game, GameState};

impl Game {
    /// Dealer plays their hand, then the round is resolved.
    ///
    /// The dealer reveals the hole card and draws while below
    /// `dealer_stands_at`. Landing inside the risk range then triggers at most
    /// one more card, taken with `risk_hit_probability`; the dealer never
    /// draws again after it, whatever the new score.
    pub(super) fn dealer_play(&mut self) {
        debug_assert_eq!(self.state, GameState::DealerTurn);

        self.dealer.reveal_hole();
        let mut score = self.dealer.compute_score();

        while score < self.options.dealer_stands_at {
            let Some(card) = self.dealer.hit(&mut self.deck) else {
                break;
            };
            self.dealer_draws.push(card);
            score = self.dealer.score();
            log::debug!("dealer draws {card}, score {score}");
        }

        if self.options.risk_range().contains(&score)
            && self.rng.random_bool(self.options.risk_hit_probability)
        {
            if let Some(card) = self.dealer.hit(&mut self.deck) {
                self.dealer_draws.push(card);
                log::debug!("dealer risk hit {card}, score {}", self.dealer.score());
            }
        }

        self.result = Some(resolve(&self.players, &self.dealer));
        self.state = GameState::Resolved;
    }
}
