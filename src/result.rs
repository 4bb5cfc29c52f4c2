//! Outcome resolution for a finished round.

use alloc::string::String;
use alloc::vec::Vec;
use alloc::string::ToString;
use core::fmt;

use crate::hand::Hand;

/// One line of the round outcome, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeRecord {
    /// The player went over 21 and loses.
    PlayerBust {
        /// Player number.
        player: u8,
        /// Final score.
        score: u16,
    },
    /// The dealer went over 21.
    DealerBust {
        /// Dealer's final score.
        score: u16,
    },
    /// The player beats the dealer.
    PlayerWins {
        /// Player number.
        player: u8,
        /// Final score.
        score: u16,
    },
    /// The dealer lost to a top-scoring player.
    DealerLoses {
        /// Dealer's final score.
        score: u16,
    },
    /// The player matched the dealer.
    Tie {
        /// Player number.
        player: u8,
        /// Shared score.
        score: u16,
    },
    /// The player loses without busting.
    PlayerLoses {
        /// Player number.
        player: u8,
        /// Final score.
        score: u16,
    },
    /// The dealer beat a top-scoring player.
    DealerWins {
        /// Dealer's final score.
        score: u16,
    },
}

impl OutcomeRecord {
    /// Returns the player this record is about, if any.
    #[must_use]
    pub const fn player(&self) -> Option<u8> {
        match *self {
            Self::PlayerBust { player, .. }
            | Self::PlayerWins { player, .. }
            | Self::Tie { player, .. }
            | Self::PlayerLoses { player, .. } => Some(player),
            Self::DealerBust { .. } | Self::DealerLoses { .. } | Self::DealerWins { .. } => None,
        }
    }

    /// Returns the player outcome this record states, if it is about a player.
    #[must_use]
    pub const fn player_outcome(&self) -> Option<PlayerOutcome> {
        match self {
            Self::PlayerBust { .. } | Self::PlayerLoses { .. } => Some(PlayerOutcome::Lose),
            Self::PlayerWins { .. } => Some(PlayerOutcome::Win),
            Self::Tie { .. } => Some(PlayerOutcome::Tie),
            Self::DealerBust { .. } | Self::DealerLoses { .. } | Self::DealerWins { .. } => None,
        }
    }
}

impl fmt::Display for OutcomeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::PlayerBust { player, score } => {
                write!(f, "Player {player} busts and loses, Score {score}")
            }
            Self::DealerBust { score } => write!(f, "Dealer busts, Score {score}"),
            Self::PlayerWins { player, score } => write!(f, "Player {player} Wins, Score {score}"),
            Self::DealerLoses { score } => write!(f, "Dealer loses, Score {score}"),
            Self::Tie { player, score } => {
                write!(f, "Player {player} and Dealer tie, Score {score}")
            }
            Self::PlayerLoses { player, score } => {
                write!(f, "Player {player} loses, Score {score}")
            }
            Self::DealerWins { score } => write!(f, "Dealer wins, Score {score}"),
        }
    }
}

/// Final result of a single player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerOutcome {
    /// Player beats the dealer (or the dealer busts).
    Win,
    /// Player busts or is beaten.
    Lose,
    /// Player matches the dealer.
    Tie,
}

/// Result of the entire round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Outcome records in emission order.
    pub records: Vec<OutcomeRecord>,
    /// The dealer's final score.
    pub dealer_score: u16,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}

impl RoundResult {
    /// Returns the outcome for player `number`.
    #[must_use]
    pub fn outcome_for(&self, number: u8) -> Option<PlayerOutcome> {
        self.records
            .iter()
            .filter(|record| record.player() == Some(number))
            .find_map(OutcomeRecord::player_outcome)
    }

    /// Returns the records as newline separated text.
    #[must_use]
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, record) in self.records.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{record}")?;
        }
        Ok(())
    }
}

/// Resolves the round from the final player and dealer hands.
///
/// Busted players lose first. If the dealer busts every remaining player
/// wins. Otherwise only the players holding the best remaining score are
/// compared with the dealer; every other remaining player loses outright, even
/// when their own score would have beaten the dealer.
#[must_use]
pub fn resolve(players: &[Hand], dealer: &Hand) -> RoundResult {
    let dealer_score = dealer.score();
    let dealer_bust = dealer.is_bust();
    let (busted, active): (Vec<&Hand>, Vec<&Hand>) =
        players.iter().partition(|hand| hand.is_bust());

    let mut records: Vec<OutcomeRecord> = busted
        .iter()
        .map(|hand| OutcomeRecord::PlayerBust {
            player: hand.id(),
            score: hand.score(),
        })
        .collect();

    if dealer_bust {
        records.push(OutcomeRecord::DealerBust {
            score: dealer_score,
        });
        records.extend(active.iter().map(|hand| OutcomeRecord::PlayerWins {
            player: hand.id(),
            score: hand.score(),
        }));
    } else {
        let max_score = active.iter().map(|hand| hand.score()).max().unwrap_or(0);
        let (leaders, others): (Vec<&Hand>, Vec<&Hand>) = active
            .iter()
            .copied()
            .partition(|hand| hand.score() == max_score);

        for hand in leaders {
            let player = hand.id();
            let score = hand.score();
            if score > dealer_score {
                records.push(OutcomeRecord::PlayerWins { player, score });
                records.push(OutcomeRecord::DealerLoses {
                    score: dealer_score,
                });
            } else if score == dealer_score {
                records.push(OutcomeRecord::Tie { player, score });
            } else {
                records.push(OutcomeRecord::PlayerLoses { player, score });
                records.push(OutcomeRecord::DealerWins {
                    score: dealer_score,
                });
            }
        }

        records.extend(others.iter().map(|hand| OutcomeRecord::PlayerLoses {
            player: hand.id(),
            score: hand.score(),
        }));
    }

    log::info!(
        "round resolved: dealer {dealer_score}{}, {} record(s)",
        if dealer_bust { " (bust)" } else { "" },
        records.len()
    );

    RoundResult {
        records,
        dealer_score,
        dealer_bust,
    }
}
