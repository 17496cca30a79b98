// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Evaluates 5 cards poker hands to one of ten categories, from royal flush to
//! high card, and a tiebreaker to order hands with the same category. Aces
//! count both as high and low, a hand with aces is evaluated for each aces
//! combination and the best result is kept.
//!
//! To evaluate a hand parse it with [Hand::parse] and compare it with other
//! hands:
//!
//! ```
//! # use showdown_eval::*;
//! let flush = Hand::parse("AS 3S 4S 8S 2S").unwrap();
//! let full_house = Hand::parse("2S AH 2H AS AC").unwrap();
//! assert_eq!(flush.category_name(), "flush");
//! assert_eq!(full_house.category(), Category::FullHouse);
//! assert!(full_house > flush);
//! ```
//!
//! The [HandRanking] type exposes the single category probes for a given
//! ranks sequence and suits multiplicities:
//!
//! ```
//! # use showdown_eval::*;
//! let ranking = HandRanking::new(&[11, 11, 11, 11, 3], &[2, 1, 1, 1]);
//! assert!(ranking.four_of_a_kind().is_some());
//! assert!(ranking.royal_flush().is_none());
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod hand;
pub use hand::Hand;

pub mod ranking;
pub use ranking::{Category, HandRanking, PROBES, Probe, Tiebreaker};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, ParseError, Suit};
