// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A ranked 5 cards poker hand.
use log::{debug, trace};
use std::{cmp::Ordering, fmt, str::FromStr};

use crate::{Card, Category, HandRanking, PROBES, ParseError, Tiebreaker};

/// A 5 cards hand evaluated to its best category.
///
/// Aces count as high or low, a hand is evaluated for each combination of
/// aces values and the best category is kept with the cards that produced it.
///
/// Hands compare by category and then by tiebreaker, the cards suits never
/// break ties:
///
/// ```
/// # use showdown_eval::{Category, Hand};
/// let wheel = Hand::parse("AS 2S 3S 4S 5S").unwrap();
/// assert_eq!(wheel.category(), Category::StraightFlush);
///
/// let quads = Hand::parse("AS AD AC AH JD").unwrap();
/// assert!(wheel > quads);
/// ```
#[derive(Debug, Clone)]
pub struct Hand {
    cards: [Card; 5],
    category: Category,
    tiebreaker: Tiebreaker,
}

impl Hand {
    /// Parses and evaluates 5 cards separated by a single space.
    pub fn parse(text: &str) -> Result<Hand, ParseError> {
        let interpretations = Self::interpretations(text)?;
        let rankings = interpretations
            .iter()
            .map(HandRanking::from_cards)
            .collect::<Vec<_>>();

        for (category, probe) in &PROBES {
            let matched = rankings
                .iter()
                .zip(&interpretations)
                .find_map(|(ranking, cards)| probe(ranking).map(|t| (t, cards)));

            if let Some((tiebreaker, cards)) = matched {
                trace!("Hand {text} evaluated as {cards:?}");
                debug!("Hand {text} is {category} {:?}", tiebreaker.ranks());

                return Ok(Hand {
                    cards: *cards,
                    category: *category,
                    tiebreaker,
                });
            }
        }

        unreachable!("High card matches any hand {text}");
    }

    /// Expands a hand text into all the aces high and low combinations.
    ///
    /// Combinations are generated with the first card changing slowest and
    /// aces high before aces low, the first combination has all aces high.
    fn interpretations(text: &str) -> Result<Vec<[Card; 5]>, ParseError> {
        let tokens = text.split(' ').collect::<Vec<_>>();
        if tokens.len() != 5 {
            return Err(ParseError::CardCount(tokens.len()));
        }

        let mut choices = Vec::with_capacity(5);
        for token in tokens {
            let card = Card::parse(token, true)?;
            if card.is_ace() {
                choices.push(vec![card, Card::parse(token, false)?]);
            } else {
                choices.push(vec![card]);
            }
        }

        let total = choices.iter().map(Vec::len).product::<usize>();
        let interpretations = (0..total)
            .map(|mut n| {
                let mut cards = [choices[0][0]; 5];
                for (pos, choice) in choices.iter().enumerate().rev() {
                    cards[pos] = choice[n % choice.len()];
                    n /= choice.len();
                }
                cards
            })
            .collect();

        Ok(interpretations)
    }

    /// The cards that make up the hand category.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    /// The hand category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The hand category identifier, i.e. `full_house`.
    pub fn category_name(&self) -> &'static str {
        self.category.name()
    }

    /// The tiebreaker used to compare hands with the same category.
    pub fn tiebreaker(&self) -> &Tiebreaker {
        &self.tiebreaker
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Hand {}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.tiebreaker.cmp(&other.tiebreaker))
    }
}

impl FromStr for Hand {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hand::parse(s)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}
