//! Hand scoring with soft-ace resolution.

use crate::card::Card;

/// Highest score that is not a bust.
pub const MAX_SCORE: u16 = 21;

/// Value an Ace gains when it is counted as 11 instead of 1.
const ACE_UPGRADE: u16 = 10;

/// Returns the all-low total and the number of upgraded aces.
fn evaluate_cards(cards: &[Card]) -> (u16, usize) {
    let mut total: u16 = cards.iter().map(|card| card.rank.base_value()).sum();
    let mut aces = cards.iter().filter(|card| card.rank.is_ace()).count();
    let mut upgraded = 0;

    while aces > 0 && total + ACE_UPGRADE <= MAX_SCORE {
        total += ACE_UPGRADE;
        aces -= 1;
        upgraded += 1;
    }

    (total, upgraded)
}

/// Scores a hand.
///
/// Number cards count their face value, face cards count 10 and aces start at
/// 1. Aces are then upgraded to 11 one at a time while that keeps the total at
/// or below 21, so the result is the best score that does not bust, or the
/// all-low total when every upgrade would bust.
///
/// # Example
///
/// ```
/// use bjtable::{Card, Rank, Suit, score::compute_score};
///
/// let hand = [
///     Card::new(Rank::Nine, Suit::Hearts),
///     Card::new(Rank::Ace, Suit::Clubs),
///     Card::new(Rank::Ace, Suit::Spades),
/// ];
/// assert_eq!(compute_score(&hand), 21);
/// ```
#[must_use]
pub fn compute_score(cards: &[Card]) -> u16 {
    evaluate_cards(cards).0
}

/// Returns whether the hand holds an ace counted as 11.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1 > 0
}

/// Returns whether `score` is over 21.
#[must_use]
pub const fn is_bust_score(score: u16) -> bool {
    score > MAX_SCORE
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use proptest::prelude::*;

    use super::*;
    use crate::card::{RANKS, Rank, SUITS, Suit};

    fn hand(ranks: &[Rank]) -> Vec<Card> {
        ranks.iter().map(|&rank| Card::new(rank, Suit::Hearts)).collect()
    }

    #[test]
    fn known_hands() {
        assert_eq!(compute_score(&hand(&[Rank::King, Rank::Ace])), 21);
        assert_eq!(compute_score(&hand(&[Rank::King, Rank::Queen, Rank::Ace])), 21);
        assert_eq!(compute_score(&hand(&[Rank::Nine, Rank::Ace, Rank::Ace])), 21);
        assert_eq!(
            compute_score(&hand(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Seven])),
            20
        );
        assert_eq!(compute_score(&hand(&[Rank::Ten, Rank::Ten, Rank::Three])), 23);
        assert!(is_bust_score(23));
        assert_eq!(compute_score(&hand(&[Rank::Eight, Rank::Nine])), 17);
        assert_eq!(compute_score(&[]), 0);
    }

    #[test]
    fn softness_tracks_upgraded_aces() {
        assert!(is_soft(&hand(&[Rank::Ace, Rank::Six])));
        assert!(!is_soft(&hand(&[Rank::Ace, Rank::Six, Rank::Ten])));
        assert!(!is_soft(&hand(&[Rank::Ten, Rank::Seven])));
    }

    #[test]
    fn whole_deck_does_not_overflow() {
        let all: Vec<Card> = RANKS
            .iter()
            .flat_map(|&rank| SUITS.iter().map(move |&suit| Card::new(rank, suit)))
            .collect();
        assert_eq!(compute_score(&all), 340);
    }

    fn any_card() -> impl Strategy<Value = Card> {
        (0..RANKS.len(), 0..SUITS.len()).prop_map(|(r, s)| Card::new(RANKS[r], SUITS[s]))
    }

    proptest! {
        #[test]
        fn score_ignores_card_order(
            (cards, shuffled) in prop::collection::vec(any_card(), 0..12)
                .prop_flat_map(|cards| (Just(cards.clone()), Just(cards).prop_shuffle()))
        ) {
            prop_assert_eq!(compute_score(&cards), compute_score(&shuffled));
        }

        #[test]
        fn upgrade_never_causes_bust(cards in prop::collection::vec(any_card(), 0..12)) {
            let low: u16 = cards.iter().map(|c| c.rank.base_value()).sum();
            let score = compute_score(&cards);
            prop_assert_eq!(is_bust_score(score), low > MAX_SCORE);
            prop_assert!(score >= low);
        }
    }
}
