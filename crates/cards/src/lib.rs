// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Psychic Poker cards types.
//!
//! This crate define types to create and parse cards:
//!
//! ```
//! # use psychic_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td = "TD".parse::<Card>().unwrap();
//! assert_eq!(td.rank(), Rank::Ten);
//! assert_eq!(ah.to_string(), "AH");
//! ```
//!
//! a [Deal] type that parses a line of ten cards into a hand and a deck:
//!
//! ```
//! # use psychic_cards::Deal;
//! let deal = "2H 2S 3H 3S 3C 2D 3D 6C 9C TH".parse::<Deal>().unwrap();
//! assert_eq!(deal.hand.len(), 5);
//! assert_eq!(deal.deck.len(), 5);
//!
//! let err = "2H 2S 3H".parse::<Deal>().unwrap_err();
//! assert_eq!(err.to_string(), "Ten cards expected");
//! ```
//!
//! and a [Pack] type for shuffling and sampling random deals:
//!
//! ```
//! # use psychic_cards::{Deal, Pack};
//! let mut counter = 0;
//! Pack::default().sample(&mut rand::rng(), 10, 10, |cards| {
//!     assert!(Deal::from_cards(cards).is_some());
//!     counter += 1;
//! });
//! assert_eq!(counter, 10);
//! ```
//!
//! The **`parallel`** feature enables parallel sampling with a given number of
//! tasks, the closure `task_id` can be used to store per task data to reduce
//! contention:
//!
//! ```
//! # #[cfg(feature = "parallel")]
//! # fn par_sample() {
//! # use std::sync::atomic;
//! # use psychic_cards::Pack;
//! let counter = atomic::AtomicU64::new(0);
//! Pack::default().par_sample(4, 10, 10, |task_id, deal| {
//!     assert_eq!(deal.len(), 10);
//!     counter.fetch_add(1, atomic::Ordering::Relaxed);
//! });
//! assert_eq!(counter.load(atomic::Ordering::Relaxed), 40);
//! # }
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Pack, Rank, Suit};

mod parse;
pub use parse::{Deal, ParseError};
