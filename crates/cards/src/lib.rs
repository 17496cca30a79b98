// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate define types to parse cards from their text representation, a
//! rank character followed by a suit character:
//!
//! ```
//! # use showdown_cards::{Card, Suit};
//! let ah = Card::parse("AH", true).unwrap();
//! assert_eq!(ah.rank(), 14);
//! assert_eq!(ah.suit(), Suit::Hearts);
//!
//! // An ace low.
//! let al = Card::parse("AH", false).unwrap();
//! assert_eq!(al.rank(), 1);
//! ```
//!
//! and a [Deck] type for shuffling and dealing random hands:
//!
//! ```
//! # use showdown_cards::Deck;
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let hand = deck.deal_hand().unwrap();
//! assert_eq!(hand.split(' ').count(), 5);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
pub use card::{Card, ParseError, Suit};

mod deck;
pub use deck::Deck;
