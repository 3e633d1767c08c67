// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best hand search.
use log::{debug, trace};
use std::{cell::OnceCell, ops::ControlFlow};

use crate::{
    Card, Deal, HAND_SIZE, HandCategory, MAX_DECK_SIZE,
    detect::{count_groups, detect_flush, is_straight},
};

/// The number of deck cards to reveal, no cards and all cards first as they
/// are the cheapest to check and then from the most to the fewest cards.
const DEPTHS: [usize; MAX_DECK_SIZE + 1] = [0, 5, 4, 3, 2, 1];

/// Finds the best category that can be formed using the hand and the first
/// n cards of the deck for any n from 0 to the deck size.
///
/// The hand must have five cards and the deck no more than five.
///
/// ```
/// # use psychic_eval::{best_hand, Card, HandCategory};
/// let cards = |s: &str| {
///     s.split_whitespace()
///         .map(|c| c.parse::<Card>().unwrap())
///         .collect::<Vec<_>>()
/// };
///
/// let hand = cards("2H 2S 3H 3S 3C");
/// let deck = cards("2D 9C 3D 6C TH");
/// assert_eq!(best_hand(&hand, &deck), HandCategory::FullHouse);
/// ```
pub fn best_hand(hand: &[Card], deck: &[Card]) -> HandCategory {
    debug_assert_eq!(hand.len(), HAND_SIZE, "hand must have {HAND_SIZE} cards");
    debug_assert!(deck.len() <= MAX_DECK_SIZE, "deck has {} cards", deck.len());

    let res = DEPTHS.iter().try_fold(HandCategory::HighestCard, |best, &depth| {
        let deck = &deck[..depth.min(deck.len())];

        let flush = detect_flush(hand, deck);
        if flush.as_ref().is_some_and(|f| is_straight(&f.hand, f.deck)) {
            trace!("Depth {depth}: {}", HandCategory::StraightFlush);
            return ControlFlow::Break(HandCategory::StraightFlush);
        }

        let category = category_at_depth(hand, deck, flush.is_some(), best);
        trace!("Depth {depth}: {category}");

        ControlFlow::Continue(best.max(category))
    });

    let best = match res {
        ControlFlow::Break(category) | ControlFlow::Continue(category) => category,
    };

    debug!("Hand {} deck {} best {best}", join(hand), join(deck));
    best
}

/// Finds the best category for a parsed deal.
pub fn best_deal(deal: &Deal) -> HandCategory {
    best_hand(&deal.hand, &deal.deck)
}

/// Returns the strongest category above `best` for one set of deck cards,
/// or `best` if there isn't one.
fn category_at_depth(
    hand: &[Card],
    deck: &[Card],
    has_flush: bool,
    best: HandCategory,
) -> HandCategory {
    use HandCategory::*;

    // Count groups are only needed if a count category is above best.
    let cell = OnceCell::new();
    let groups = || cell.get_or_init(|| count_groups(hand, deck));

    let checks: [(HandCategory, &dyn Fn() -> bool); 7] = [
        (FourOfAKind, &|| groups().has(4)),
        (FullHouse, &|| groups().has(3) && groups().has(2)),
        (Flush, &|| has_flush),
        (Straight, &|| is_straight(hand, deck)),
        (ThreeOfAKind, &|| groups().has(3)),
        (TwoPairs, &|| groups().ranks_with(2) == 2),
        (OnePair, &|| groups().ranks_with(2) == 1),
    ];

    checks
        .into_iter()
        .take_while(|(category, _)| *category > best)
        .find(|(_, check)| check())
        .map_or(best, |(category, _)| category)
}

fn join(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
