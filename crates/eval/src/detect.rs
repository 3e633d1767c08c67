// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand shape detectors.
//!
//! Each detector checks if a category can be formed from a hand and a subset
//! of the deck. All the deck cards are mandatory and must be part of the five
//! cards, the hand cards are optional and are only used to fill the remaining
//! slots.
use std::cmp::Reverse;

use crate::{
    Card, HAND_SIZE, Rank, Suit,
    features::{self, Histogram},
};

/// The cards that can form a flush.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlushCards<'a> {
    /// The flush suit.
    pub suit: Suit,
    /// The hand cards with the flush suit, may be more than needed.
    pub hand: Vec<Card>,
    /// The deck cards, all of them have the flush suit.
    pub deck: &'a [Card],
}

/// Checks if a flush can be formed, visiting suits in the order Clubs,
/// Diamonds, Hearts, Spades and returning the first match.
pub fn detect_flush<'a>(hand: &[Card], deck: &'a [Card]) -> Option<FlushCards<'a>> {
    let hand_suits = features::suits(hand);
    let deck_suits = features::suits(deck);

    Suit::suits().find_map(|suit| {
        let in_deck = deck_suits.get(&suit).copied().unwrap_or_default();

        // Deck cards cannot be dropped.
        if in_deck < deck.len() {
            return None;
        }

        let in_hand = hand_suits.get(&suit).copied().unwrap_or_default();
        (in_deck + in_hand >= HAND_SIZE).then(|| FlushCards {
            suit,
            hand: hand.iter().filter(|c| c.suit() == suit).copied().collect(),
            deck,
        })
    })
}

/// Checks if a straight can be formed.
///
/// Ranks are scanned from Ace down to Deuce and the Ace is never used as a
/// low card, so Ace-2-3-4-5 is not a straight.
pub fn is_straight(hand: &[Card], deck: &[Card]) -> bool {
    let hand_ranks = features::ranks(hand);
    let deck_ranks = features::ranks(deck);

    // Two deck cards with the same rank cannot be in a straight.
    if deck_ranks.values().any(|&count| count > 1) {
        return false;
    }

    let fillers = HAND_SIZE.saturating_sub(deck.len());
    let mut fillers_left = fillers;
    let mut run = 0;

    for rank in Rank::ranks().rev() {
        if deck_ranks.contains_key(&rank) {
            run += 1;
        } else if fillers_left > 0 && hand_ranks.contains_key(&rank) {
            fillers_left -= 1;
            run += 1;
        } else {
            run = 0;
            fillers_left = fillers;
        }

        if run == HAND_SIZE {
            return true;
        }
    }

    false
}

/// Groups of ranks by number of cards.
///
/// Maps a cards count to the number of ranks that have that many cards, only
/// counts greater than one are stored. A full house is `{3 => 1, 2 => 1}`,
/// two pairs are `{2 => 2}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountGroups(Histogram<usize>);

impl CountGroups {
    /// Number of ranks with exactly `count` cards.
    pub fn ranks_with(&self, count: usize) -> usize {
        self.0.get(&count).copied().unwrap_or_default()
    }

    /// Checks if there is at least one rank with exactly `count` cards.
    pub fn has(&self, count: usize) -> bool {
        self.ranks_with(count) > 0
    }

    /// Checks if there are no groups.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Computes the rank groups that can be formed.
///
/// All deck cards are counted, then the hand cards are allocated to the free
/// slots starting from the ranks that are already in the deck with the most
/// deck cards, followed by the ranks with the most hand cards. Ties go to the
/// higher rank.
pub fn count_groups(hand: &[Card], deck: &[Card]) -> CountGroups {
    let deck_ranks = features::ranks(deck);
    let hand_ranks = features::ranks(hand);

    let mut candidates = hand_ranks.into_iter().collect::<Vec<_>>();
    candidates.sort_unstable_by_key(|&(rank, in_hand)| {
        let in_deck = deck_ranks.get(&rank).copied().unwrap_or_default();
        Reverse((in_deck > 0, in_deck, in_hand, rank))
    });

    let mut totals = deck_ranks;
    let mut slots = HAND_SIZE.saturating_sub(deck.len());
    for (rank, in_hand) in candidates {
        if slots == 0 {
            break;
        }

        let taken = in_hand.min(slots);
        *totals.entry(rank).or_default() += taken;
        slots -= taken;
    }

    let mut groups = Histogram::default();
    for count in totals.into_values().filter(|&count| count > 1) {
        *groups.entry(count).or_default() += 1;
    }

    CountGroups(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    #[test]
    fn straight() {
        [
            ("QC JH KH QH AH", "TH", true),
            ("QC JH KH 2D 3S", "TH QH AH", true),
            ("2C 3H 4H 5D 7S", "JH TH QH AH KH", true),
            ("QH KH AH 2S 6S", "TH JH", true),
            ("2H 2S 4H 3S 3C", "2D 3D 5C", false),
            ("9C TD JH QS KD", "", true),
            ("9C TD JH QS 2D", "", false),
            ("", "6C 5D 4H 3S 2D", true),
        ]
        .into_iter()
        .for_each(|(hand, deck, expected)| {
            assert_eq!(
                is_straight(&cards(hand), &cards(deck)),
                expected,
                "is_straight({hand}, {deck})"
            );
        });
    }

    #[test]
    fn straight_no_wheel() {
        assert!(!is_straight(&cards("AH 2C 3D 4S 5H"), &[]));
        assert!(!is_straight(&cards("KS QS 9D 8D 7D"), &cards("AH 2C 3D 4S 5H")));
        assert!(!is_straight(&cards("AH 2C 3D KS QS"), &cards("4S 5H")));

        // Six high works.
        assert!(is_straight(&cards("AH 2C 3D KS 6S"), &cards("4S 5H")));
    }

    #[test]
    fn straight_mandatory_deck_cards() {
        // The deck deuce cannot be dropped.
        assert!(!is_straight(&cards("AH KC QD JS TH"), &cards("2S")));

        // Duplicate deck ranks.
        assert!(!is_straight(&cards("AH KC QD JS TH"), &cards("9S 9H")));

        // The ace takes a filler and the run breaks at the ten, the scan
        // doesn't restart from the king.
        assert!(!is_straight(&cards("AH KC QD JS TH"), &cards("9S")));

        // Not enough fillers to close the gap.
        assert!(!is_straight(&cards("AH 8C 2D 3S 4H"), &cards("QS JS TS")));
        assert!(is_straight(&cards("AH KC 2D 3S 4H"), &cards("QS JS TS")));
        assert!(is_straight(&cards("9H KC 2D 3S 4H"), &cards("QS JS TS")));
    }

    #[test]
    fn flush() {
        let hand = cards("2H JH KH QH AH");
        let deck = cards("TH");
        let flush = detect_flush(&hand, &deck).unwrap();
        assert_eq!(flush.suit, Suit::Hearts);
        assert_eq!(flush.hand, hand);
        assert_eq!(flush.deck, &deck[..]);

        let deck = cards("TC QC AC 2C 3C");
        let flush = detect_flush(&[], &deck).unwrap();
        assert_eq!(flush.suit, Suit::Clubs);
        assert!(flush.hand.is_empty());
        assert_eq!(flush.deck, &deck[..]);

        let hand = cards("TC QC AC 2C 3C");
        let flush = detect_flush(&hand, &[]).unwrap();
        assert_eq!(flush.hand, hand);
        assert!(flush.deck.is_empty());

        assert!(detect_flush(&[], &cards("TH QC AC 2C 3C")).is_none());
    }

    #[test]
    fn flush_filters_hand() {
        let hand = cards("2S JH KD QH AH");
        let deck = cards("TH 3H");
        let flush = detect_flush(&hand, &deck).unwrap();
        assert_eq!(flush.suit, Suit::Hearts);
        assert_eq!(flush.hand, cards("JH QH AH"));

        // Only two hearts in the hand.
        assert!(detect_flush(&cards("2S JH KD QH AS"), &deck).is_none());
    }

    #[test]
    fn flush_mixed_deck_suits() {
        let hand = cards("2H 3H 4H 5H 6H");
        assert!(detect_flush(&hand, &[]).is_some());
        assert!(detect_flush(&hand, &cards("7H")).is_some());
        assert!(detect_flush(&hand, &cards("7H 8S")).is_none());
        assert!(detect_flush(&hand, &cards("7C")).is_none());
    }

    #[test]
    fn flush_first_suit_wins() {
        let hand = cards("2C 3C 4C 5C 6C 2D 3D 4D 5D 6D");
        let flush = detect_flush(&hand, &[]).unwrap();
        assert_eq!(flush.suit, Suit::Clubs);
    }

    #[test]
    fn count_groups_hand_only() {
        let groups = count_groups(&cards("2H 2S 3H 3S 3C"), &[]);
        assert_eq!(groups.ranks_with(3), 1);
        assert_eq!(groups.ranks_with(2), 1);
        assert!(!groups.has(4));

        let groups = count_groups(&cards("2H 5S 3H 9S KC"), &[]);
        assert!(groups.is_empty());
    }

    #[test]
    fn count_groups_prefers_deck_ranks() {
        // The hand deuce joins the two deck deuces.
        let groups = count_groups(&cards("KS AH 2H 3C 4H"), &cards("KC 2C TC 2D"));
        assert_eq!(groups.ranks_with(3), 1);
        assert_eq!(groups.ranks_with(2), 0);

        // Hand pairs matching the deck cards make a four of a kind.
        let groups = count_groups(&cards("2H 2S 3H 3S 3C"), &cards("2D 3D"));
        assert_eq!(groups.ranks_with(4), 1);
        assert_eq!(groups.ranks_with(2), 0);
    }

    #[test]
    fn count_groups_prefers_hand_groups() {
        // No deck rank in the hand, the pairs fill the slots.
        let groups = count_groups(&cards("KS KH QC QD 2H"), &cards("AS"));
        assert_eq!(groups.ranks_with(2), 2);

        let groups = count_groups(&cards("KS KH KC QD 2H"), &cards("AS 7D"));
        assert_eq!(groups.ranks_with(3), 1);
        assert_eq!(groups.ranks_with(2), 0);
    }

    #[test]
    fn count_groups_deck_only() {
        let groups = count_groups(&cards("KS KH KC KD 2H"), &cards("2C 3D 3H 2S 3S"));
        assert_eq!(groups.ranks_with(3), 1);
        assert_eq!(groups.ranks_with(2), 1);
        assert!(!groups.has(4));
    }
}
