// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand categories.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A poker hand category, ordered from the weakest to the strongest.
///
/// The discriminant is the category rank, so categories can be compared
/// directly:
///
/// ```
/// # use psychic_eval::HandCategory;
/// assert!(HandCategory::Flush > HandCategory::Straight);
/// assert_eq!(HandCategory::StraightFlush.rank(), 8);
/// ```
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum HandCategory {
    /// No other category, the highest card plays.
    #[default]
    HighestCard = 0,
    /// Two cards of the same rank.
    OnePair = 1,
    /// Two different pairs.
    TwoPairs = 2,
    /// Three cards of the same rank.
    ThreeOfAKind = 3,
    /// Five consecutive ranks.
    Straight = 4,
    /// Five cards of the same suit.
    Flush = 5,
    /// Three of a kind and a pair.
    FullHouse = 6,
    /// Four cards of the same rank.
    FourOfAKind = 7,
    /// Five consecutive ranks of the same suit.
    StraightFlush = 8,
}

impl HandCategory {
    /// The number of categories.
    pub const COUNT: usize = 9;

    /// Returns all categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighestCard,
            OnePair,
            TwoPairs,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }

    /// The category rank, 0 for [HandCategory::HighestCard] up to 8 for
    /// [HandCategory::StraightFlush].
    #[inline]
    pub const fn rank(&self) -> u8 {
        *self as u8
    }

    /// The category label.
    pub const fn label(&self) -> &'static str {
        match self {
            HandCategory::HighestCard => "highest-card",
            HandCategory::OnePair => "one-pair",
            HandCategory::TwoPairs => "two-pairs",
            HandCategory::ThreeOfAKind => "three-of-a-kind",
            HandCategory::Straight => "straight",
            HandCategory::Flush => "flush",
            HandCategory::FullHouse => "full-house",
            HandCategory::FourOfAKind => "four-of-a-kind",
            HandCategory::StraightFlush => "straight-flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown category label.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown hand category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for HandCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HandCategory::categories()
            .find(|c| c.label() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
