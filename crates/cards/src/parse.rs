// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards tokens parsing.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use crate::{Card, Rank, Suit};

/// Errors returned when parsing cards.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input doesn't have ten cards.
    #[error("Ten cards expected")]
    CardCount(usize),
    /// A token that is not two characters long.
    #[error("Invalid card: {0}")]
    InvalidCard(String),
    /// A token with an unknown rank character.
    #[error("Unexpected card value: {0}")]
    UnexpectedRank(char),
    /// A token with an unknown suit character.
    #[error("Unexpected card suit: {0}")]
    UnexpectedSuit(char),
}

impl TryFrom<char> for Rank {
    type Error = ParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Rank::ranks()
            .find(|r| r.symbol() == c)
            .ok_or(ParseError::UnexpectedRank(c))
    }
}

impl TryFrom<char> for Suit {
    type Error = ParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Suit::suits()
            .find(|s| s.symbol() == c)
            .ok_or(ParseError::UnexpectedSuit(c))
    }
}

impl FromStr for Card {
    type Err = ParseError;

    /// Parses a two characters token like `TH` or `2C`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(rank), Some(suit), None) => {
                let rank = Rank::try_from(rank)?;
                let suit = Suit::try_from(suit)?;
                Ok(Card::new(rank, suit))
            }
            _ => Err(ParseError::InvalidCard(s.to_string())),
        }
    }
}

/// A deal of ten cards, five in the hand and five face down in the deck.
///
/// ```
/// # use psychic_cards::{Card, Deal, Rank, Suit};
/// let deal = "TH JH QC QD QS QH KH AH 2S 6S".parse::<Deal>().unwrap();
/// assert_eq!(deal.hand[0], Card::new(Rank::Ten, Suit::Hearts));
/// assert_eq!(deal.deck[4], Card::new(Rank::Six, Suit::Spades));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Deal {
    /// The cards in the hand.
    pub hand: [Card; Deal::HAND_SIZE],
    /// The deck cards in the order they are revealed.
    pub deck: [Card; Deal::DECK_SIZE],
}

impl Deal {
    /// Number of cards in the hand.
    pub const HAND_SIZE: usize = 5;

    /// Number of cards in the deck.
    pub const DECK_SIZE: usize = 5;

    /// Creates a deal from ten cards, the first five are the hand.
    ///
    /// Returns `None` if there are not exactly ten cards.
    pub fn from_cards(cards: &[Card]) -> Option<Self> {
        if cards.len() != Self::HAND_SIZE + Self::DECK_SIZE {
            return None;
        }

        let (hand, deck) = cards.split_at(Self::HAND_SIZE);
        Some(Deal {
            hand: hand.try_into().ok()?,
            deck: deck.try_into().ok()?,
        })
    }
}

impl FromStr for Deal {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = s.split_whitespace().collect::<Vec<_>>();
        if tokens.len() != Self::HAND_SIZE + Self::DECK_SIZE {
            return Err(ParseError::CardCount(tokens.len()));
        }

        let cards = tokens
            .into_iter()
            .map(Card::from_str)
            .collect::<Result<Vec<_>, _>>()?;

        Deal::from_cards(&cards).ok_or(ParseError::CardCount(cards.len()))
    }
}

impl fmt::Display for Deal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cards = self
            .hand
            .iter()
            .chain(self.deck.iter())
            .map(|c| c.to_string())
            .collect::<Vec<_>>();
        write!(f, "{}", cards.join(" "))
    }
}
