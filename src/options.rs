//! Table configuration.

use core::ops::RangeInclusive;

/// Configuration options for a blackjack table.
///
/// The defaults reproduce the house rules: one player, the dealer draws
/// to 17, and at 17 through 19 takes one extra card half of the time.
///
/// ```
/// use bjtable::TableOptions;
///
/// let options = TableOptions::default()
///     .with_players(3)
///     .with_risk_hit_probability(0.25);
/// assert_eq!(options.players, 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    /// Number of seated players.
    pub players: u8,
    /// The dealer keeps drawing while below this score.
    pub dealer_stands_at: u16,
    /// Lowest dealer score eligible for the extra risk hit.
    pub risk_min: u16,
    /// Highest dealer score eligible for the extra risk hit.
    pub risk_max: u16,
    /// Probability of the extra risk hit (0 to disable).
    pub risk_hit_probability: f64,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            players: 1,
            dealer_stands_at: 17,
            risk_min: 17,
            risk_max: 19,
            risk_hit_probability: 0.5,
        }
    }
}

impl TableOptions {
    /// Sets the number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_players(4);
    /// assert_eq!(options.players, 4);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: u8) -> Self {
        self.players = players;
        self
    }

    /// Sets the score the dealer stops drawing at.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_stands_at(18);
    /// assert_eq!(options.dealer_stands_at, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_at(mut self, score: u16) -> Self {
        self.dealer_stands_at = score;
        self
    }

    /// Sets the dealer score range eligible for the risk hit.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_risk_range(17, 18);
    /// assert_eq!(options.risk_range(), 17..=18);
    /// ```
    #[must_use]
    pub const fn with_risk_range(mut self, min: u16, max: u16) -> Self {
        self.risk_min = min;
        self.risk_max = max;
        self
    }

    /// Sets the risk hit probability.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_risk_hit_probability(0.0);
    /// assert_eq!(options.risk_hit_probability, 0.0);
    /// ```
    #[must_use]
    pub const fn with_risk_hit_probability(mut self, probability: f64) -> Self {
        self.risk_hit_probability = probability;
        self
    }

    /// Dealer scores eligible for the risk hit.
    #[must_use]
    pub const fn risk_range(&self) -> RangeInclusive<u16> {
        self.risk_min..=self.risk_max
    }
}
