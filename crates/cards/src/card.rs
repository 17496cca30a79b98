// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, hash, str::FromStr};
use thiserror::Error;

/// Errors returned when parsing cards and hands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A card token that is not exactly two characters.
    #[error("malformed card {0:?}, expected a rank and a suit character")]
    MalformedToken(String),
    /// An unknown rank character.
    #[error("invalid rank {0:?}")]
    InvalidRank(char),
    /// An unknown suit character.
    #[error("invalid suit {0:?}")]
    InvalidSuit(char),
    /// A hand with the wrong number of cards.
    #[error("expected 5 cards, got {0}")]
    CardCount(usize),
    /// A numeric rank outside 1 <= rank <= 14.
    #[error("rank {0} out of range")]
    RankOutOfRange(u8),
}

/// A Poker card.
///
/// A card has a numeric rank and a suit, Jack, Queen, King are 11, 12, 13 and
/// an Ace is either 14 (ace high) or 1 (ace low).
///
/// Cards compare by rank only, two cards with the same rank and different
/// suits are equal:
///
/// ```
/// # use showdown_cards::Card;
/// let ah = Card::parse("AH", true).unwrap();
/// let ad = Card::parse("AD", true).unwrap();
/// let kd = Card::parse("KD", true).unwrap();
/// assert_eq!(ah, ad);
/// assert!(ah > kd);
/// ```
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "CardFields")]
pub struct Card {
    rank: u8,
    suit: Suit,
}

/// Unchecked card fields, validated before building a [Card].
#[derive(Deserialize)]
struct CardFields {
    rank: u8,
    suit: Suit,
}

impl TryFrom<CardFields> for Card {
    type Error = ParseError;

    fn try_from(fields: CardFields) -> Result<Self, Self::Error> {
        if (Card::ACE_LOW..=Card::ACE_HIGH).contains(&fields.rank) {
            Ok(Card {
                rank: fields.rank,
                suit: fields.suit,
            })
        } else {
            Err(ParseError::RankOutOfRange(fields.rank))
        }
    }
}

impl Card {
    /// The rank of an ace high.
    pub const ACE_HIGH: u8 = 14;

    /// The rank of an ace low.
    pub const ACE_LOW: u8 = 1;

    /// Create a card given a rank and a suit.
    ///
    /// Panics if rank is not 1 <= rank <= 14.
    pub fn new(rank: u8, suit: Suit) -> Card {
        assert!(
            (Self::ACE_LOW..=Self::ACE_HIGH).contains(&rank),
            "Invalid rank {rank}"
        );
        Card { rank, suit }
    }

    /// Parses a card from a rank and suit token like `AS` or `Td`.
    ///
    /// The `ace_high` flag selects the rank of an Ace.
    pub fn parse(token: &str, ace_high: bool) -> Result<Card, ParseError> {
        let mut chars = token.chars();
        let (Some(r), Some(s), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseError::MalformedToken(token.to_string()));
        };

        let rank = match r {
            '2'..='9' => r as u8 - b'0',
            'T' => 10,
            'J' => 11,
            'Q' => 12,
            'K' => 13,
            'A' if ace_high => Self::ACE_HIGH,
            'A' => Self::ACE_LOW,
            _ => return Err(ParseError::InvalidRank(r)),
        };

        let suit = Suit::from_char(s).ok_or(ParseError::InvalidSuit(s))?;

        Ok(Card { rank, suit })
    }

    /// Returns the card rank.
    pub fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Checks if this card is an Ace, high or low.
    pub fn is_ace(&self) -> bool {
        self.rank == Self::ACE_HIGH || self.rank == Self::ACE_LOW
    }

    fn rank_char(&self) -> char {
        match self.rank {
            2..=9 => (b'0' + self.rank) as char,
            10 => 'T',
            11 => 'J',
            12 => 'Q',
            13 => 'K',
            Self::ACE_LOW | Self::ACE_HIGH => 'A',
            _ => unreachable!("Invalid rank {}", self.rank),
        }
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for Card {}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl hash::Hash for Card {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
    }
}

impl FromStr for Card {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::parse(s, true)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_char(), self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{}, {})", self.rank_char(), self.suit, self.rank)
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// Parses a suit character ignoring case.
    pub fn from_char(c: char) -> Option<Suit> {
        match c.to_ascii_uppercase() {
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}
