// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Psychic Poker hand evaluator.
//!
//! Finds the best poker hand category that can be formed from a five cards
//! hand and a deck of up to five cards that can only be revealed from the top.
//! Using n deck cards means using the first n cards of the deck, all of them,
//! while the hand cards fill the remaining slots of the five cards hand.
//!
//! ```
//! # use psychic_eval::*;
//! let deal = "TH JH QC QD QS QH KH AH 2S 6S".parse::<Deal>().unwrap();
//! assert_eq!(best_deal(&deal), HandCategory::StraightFlush);
//!
//! let deal = "3D 5S 2H QD TD 6S KH 9H AD QH".parse::<Deal>().unwrap();
//! assert_eq!(best_deal(&deal), HandCategory::HighestCard);
//! ```
//!
//! The Ace is always a high card, a straight from Ace to Five is never
//! detected.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod category;
pub use category::{HandCategory, UnknownCategory};

pub mod detect;
pub mod features;

mod search;
pub use search::{best_deal, best_hand};

// Reexport cards types.
pub use psychic_cards::{Card, Deal, Pack, ParseError, Rank, Suit};

/// The number of cards in a poker hand.
pub const HAND_SIZE: usize = 5;

/// The maximum number of cards in the deck.
pub const MAX_DECK_SIZE: usize = 5;
