// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards features histograms.
use ahash::HashMap;
use std::hash::Hash;

use crate::{Card, Rank, Suit};

/// A mapping from a card feature to the number of cards that have it.
pub type Histogram<F> = HashMap<F, usize>;

/// Counts how many cards have each feature extracted by `extractor`.
///
/// ```
/// # use psychic_eval::{features, Card, Rank};
/// let cards = ["2H", "3C", "2D"].map(|c| c.parse::<Card>().unwrap());
/// let ranks = features::collect(&cards, Card::rank);
/// assert_eq!(ranks[&Rank::Deuce], 2);
/// assert_eq!(ranks[&Rank::Trey], 1);
/// ```
pub fn collect<F, E>(cards: &[Card], extractor: E) -> Histogram<F>
where
    F: Eq + Hash,
    E: Fn(&Card) -> F,
{
    let mut features = Histogram::default();
    for card in cards {
        *features.entry(extractor(card)).or_default() += 1;
    }
    features
}

/// Ranks histogram.
pub fn ranks(cards: &[Card]) -> Histogram<Rank> {
    collect(cards, Card::rank)
}

/// Suits histogram.
pub fn suits(cards: &[Card]) -> Histogram<Suit> {
    collect(cards, Card::suit)
}
