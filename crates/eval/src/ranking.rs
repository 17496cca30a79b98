// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories and their tiebreakers.
//!
//! A [HandRanking] is built from the ranks and the suit multiplicities of a 5
//! cards hand and exposes one probe per [Category], a probe returns the
//! tiebreaker to compare two hands of the same category when the hand
//! matches the category.
//!
//! Probes are independent: a full house also matches `three_of_a_kind` and
//! `pair`, callers must try the categories in the [PROBES] order.
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::{cmp::Reverse, fmt};

use crate::Card;

/// A hand category.
///
/// Categories are ordered from worst to best so that a better category
/// compares greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// No combination.
    HighCard,
    /// Two cards of the same rank.
    Pair,
    /// Two pairs of different ranks.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five cards in sequence.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight of the same suit.
    StraightFlush,
    /// An ace high straight flush.
    RoyalFlush,
}

impl Category {
    /// Returns the categories from best to worst.
    pub fn categories() -> impl DoubleEndedIterator<Item = Category> {
        PROBES.iter().map(|(c, _)| *c)
    }

    /// The position of this category from best (0) to worst (9).
    pub fn ordinal(&self) -> usize {
        Category::RoyalFlush as usize - *self as usize
    }

    /// The category identifier.
    pub fn name(&self) -> &'static str {
        match self {
            Category::HighCard => "high_card",
            Category::Pair => "pair",
            Category::TwoPair => "two_pair",
            Category::ThreeOfAKind => "three_of_a_kind",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FullHouse => "full_house",
            Category::FourOfAKind => "four_of_a_kind",
            Category::StraightFlush => "straight_flush",
            Category::RoyalFlush => "royal_flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The ranks used to compare two hands of the same category.
///
/// Tiebreakers compare lexicographically, the first different rank decides.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tiebreaker(Vec<u8>);

impl Tiebreaker {
    /// The ranks in comparison order.
    pub fn ranks(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Tiebreaker {
    fn from(ranks: Vec<u8>) -> Self {
        Self(ranks)
    }
}

/// A category probe.
pub type Probe = fn(&HandRanking) -> Option<Tiebreaker>;

/// The category probes from best to worst.
pub static PROBES: [(Category, Probe); 10] = [
    (Category::RoyalFlush, HandRanking::royal_flush),
    (Category::StraightFlush, HandRanking::straight_flush),
    (Category::FourOfAKind, HandRanking::four_of_a_kind),
    (Category::FullHouse, HandRanking::full_house),
    (Category::Flush, HandRanking::flush),
    (Category::Straight, HandRanking::straight),
    (Category::ThreeOfAKind, HandRanking::three_of_a_kind),
    (Category::TwoPair, HandRanking::two_pair),
    (Category::Pair, HandRanking::pair),
    (Category::HighCard, HandRanking::high_card),
];

/// Evaluates the categories of a 5 cards hand.
#[derive(Debug, Clone)]
pub struct HandRanking {
    ranks: [u8; 5],
    rank_count: Vec<usize>,
    suit_count: Vec<usize>,
    high_card_order: Vec<u8>,
    grouped_order: Vec<u8>,
}

impl HandRanking {
    /// Creates a ranking for the given ranks and suit multiplicities.
    ///
    /// The suit multiplicities are the number of cards for each suit in the
    /// hand in any order, i.e. `[5]` for a flush or `[2, 1, 1, 1]`.
    ///
    /// Panics if there are not 5 ranks or if the suit counts don't add to 5.
    pub fn new(ranks: &[u8], suit_count: &[usize]) -> Self {
        assert_eq!(ranks.len(), 5, "Expected 5 ranks, got {ranks:?}");
        assert_eq!(
            suit_count.iter().sum::<usize>(),
            5,
            "Invalid suit counts {suit_count:?}"
        );

        let mut groups = AHashMap::<u8, usize>::with_capacity(5);
        for &rank in ranks {
            *groups.entry(rank).or_default() += 1;
        }

        let mut high_card_order = ranks.to_vec();
        high_card_order.sort_unstable_by_key(|&r| Reverse(r));

        let mut grouped_order = ranks.to_vec();
        grouped_order.sort_unstable_by_key(|r| (Reverse(groups[r]), Reverse(*r)));

        let mut sequence = [0; 5];
        sequence.copy_from_slice(ranks);

        Self {
            ranks: sequence,
            rank_count: groups.into_values().collect(),
            suit_count: suit_count.to_vec(),
            high_card_order,
            grouped_order,
        }
    }

    /// Creates a ranking from concrete cards.
    pub fn from_cards(cards: &[Card; 5]) -> Self {
        let mut suits = AHashMap::with_capacity(4);
        for card in cards {
            *suits.entry(card.suit()).or_insert(0usize) += 1;
        }

        let ranks = (*cards).map(|c| c.rank());
        let suit_count = suits.into_values().collect::<Vec<_>>();
        Self::new(&ranks, &suit_count)
    }

    /// Runs the probe for the given category.
    pub fn probe(&self, category: Category) -> Option<Tiebreaker> {
        let (_, probe) = PROBES[category.ordinal()];
        probe(self)
    }

    /// Matches a straight flush with an ace high.
    pub fn royal_flush(&self) -> Option<Tiebreaker> {
        let max = self.ranks.iter().max().copied();
        self.straight_flush()
            .filter(|_| max == Some(Card::ACE_HIGH))
            .map(|_| Tiebreaker(vec![0]))
    }

    /// Matches five cards in sequence of the same suit.
    pub fn straight_flush(&self) -> Option<Tiebreaker> {
        self.flush().and(self.straight())
    }

    /// Matches four cards of the same rank.
    pub fn four_of_a_kind(&self) -> Option<Tiebreaker> {
        self.has_group(4).then(|| self.by_group())
    }

    /// Matches three of a kind and a pair.
    pub fn full_house(&self) -> Option<Tiebreaker> {
        self.three_of_a_kind().and(self.pair())
    }

    /// Matches five cards of the same suit.
    pub fn flush(&self) -> Option<Tiebreaker> {
        self.suit_count.contains(&5).then(|| self.by_high_card())
    }

    /// Matches five cards with consecutive ranks.
    pub fn straight(&self) -> Option<Tiebreaker> {
        let mut sorted = self.ranks;
        sorted.sort_unstable();

        sorted
            .windows(2)
            .all(|w| w[1] == w[0] + 1)
            .then(|| self.by_high_card())
    }

    /// Matches three cards of the same rank.
    pub fn three_of_a_kind(&self) -> Option<Tiebreaker> {
        self.has_group(3).then(|| self.by_group())
    }

    /// Matches two pairs.
    pub fn two_pair(&self) -> Option<Tiebreaker> {
        let pairs = self.rank_count.iter().filter(|&&n| n == 2).count();
        (pairs == 2).then(|| self.by_group())
    }

    /// Matches two cards of the same rank, this doesn't check for other groups.
    pub fn pair(&self) -> Option<Tiebreaker> {
        self.has_group(2).then(|| self.by_group())
    }

    /// Matches any hand.
    pub fn high_card(&self) -> Option<Tiebreaker> {
        Some(self.by_high_card())
    }

    fn has_group(&self, n: usize) -> bool {
        self.rank_count.contains(&n)
    }

    fn by_high_card(&self) -> Tiebreaker {
        Tiebreaker(self.high_card_order.clone())
    }

    fn by_group(&self) -> Tiebreaker {
        Tiebreaker(self.grouped_order.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranks(r: &[u8]) -> Option<Vec<u8>> {
        Some(r.to_vec())
    }

    fn tb(t: Option<Tiebreaker>) -> Option<Vec<u8>> {
        t.map(|t| t.ranks().to_vec())
    }

    #[test]
    fn royal_flush() {
        // KS AS TS QS JS
        let h = HandRanking::new(&[13, 14, 10, 12, 11], &[5]);
        assert_eq!(tb(h.royal_flush()), ranks(&[0]));

        // JS JD JC JH 3D
        let h = HandRanking::new(&[11, 11, 11, 11, 3], &[2, 1, 1, 1]);
        assert!(h.royal_flush().is_none());

        // Same as the royal flush with an ace low.
        let h = HandRanking::new(&[13, 1, 10, 12, 11], &[5]);
        assert!(h.royal_flush().is_none());
        assert!(h.straight().is_none());

        // King high straight flush.
        let h = HandRanking::new(&[9, 13, 10, 12, 11], &[5]);
        assert!(h.royal_flush().is_none());
        assert_eq!(tb(h.straight_flush()), ranks(&[13, 12, 11, 10, 9]));
    }

    #[test]
    fn four_of_a_kind() {
        // JS JD JC JH 3D
        let h = HandRanking::new(&[11, 11, 11, 11, 3], &[2, 1, 1, 1]);
        assert_eq!(tb(h.four_of_a_kind()), ranks(&[11, 11, 11, 11, 3]));

        // Kicker is higher than the group.
        let h = HandRanking::new(&[2, 14, 2, 2, 2], &[1, 2, 1, 1]);
        assert_eq!(tb(h.four_of_a_kind()), ranks(&[2, 2, 2, 2, 14]));

        // KS AS TS QS JS
        let h = HandRanking::new(&[13, 14, 10, 12, 11], &[5]);
        assert!(h.four_of_a_kind().is_none());
    }

    #[test]
    fn full_house() {
        let h = HandRanking::new(&[2, 14, 2, 14, 14], &[2, 2, 1]);
        assert_eq!(tb(h.full_house()), ranks(&[14, 14, 14, 2, 2]));

        // A full house matches both three of a kind and pair.
        assert!(h.three_of_a_kind().is_some());
        assert!(h.pair().is_some());
        assert!(h.two_pair().is_none());

        let h = HandRanking::new(&[2, 14, 2, 14, 13], &[2, 2, 1]);
        assert!(h.full_house().is_none());
    }

    #[test]
    fn flush() {
        let h = HandRanking::new(&[14, 3, 4, 8, 2], &[5]);
        assert_eq!(tb(h.flush()), ranks(&[14, 8, 4, 3, 2]));
        assert!(h.straight_flush().is_none());

        let h = HandRanking::new(&[14, 3, 4, 8, 2], &[4, 1]);
        assert!(h.flush().is_none());
    }

    #[test]
    fn straight() {
        let h = HandRanking::new(&[6, 2, 4, 3, 5], &[2, 1, 1, 1]);
        assert_eq!(tb(h.straight()), ranks(&[6, 5, 4, 3, 2]));

        // Ace low.
        let h = HandRanking::new(&[1, 2, 3, 4, 5], &[2, 1, 1, 1]);
        assert_eq!(tb(h.straight()), ranks(&[5, 4, 3, 2, 1]));

        // No wraparound.
        let h = HandRanking::new(&[13, 14, 2, 3, 4], &[2, 1, 1, 1]);
        assert!(h.straight().is_none());

        // Gap.
        let h = HandRanking::new(&[2, 3, 4, 5, 7], &[2, 1, 1, 1]);
        assert!(h.straight().is_none());

        // Repeated rank.
        let h = HandRanking::new(&[2, 3, 4, 5, 5], &[2, 1, 1, 1]);
        assert!(h.straight().is_none());
    }

    #[test]
    fn groups() {
        let h = HandRanking::new(&[9, 4, 9, 13, 9], &[2, 1, 1, 1]);
        assert_eq!(tb(h.three_of_a_kind()), ranks(&[9, 9, 9, 13, 4]));
        assert!(h.full_house().is_none());
        assert!(h.pair().is_none());

        let h = HandRanking::new(&[5, 12, 5, 3, 12], &[2, 1, 1, 1]);
        assert_eq!(tb(h.two_pair()), ranks(&[12, 12, 5, 5, 3]));
        assert_eq!(tb(h.pair()), ranks(&[12, 12, 5, 5, 3]));

        let h = HandRanking::new(&[5, 12, 5, 3, 14], &[2, 1, 1, 1]);
        assert!(h.two_pair().is_none());
        assert_eq!(tb(h.pair()), ranks(&[5, 5, 14, 12, 3]));
    }

    #[test]
    fn high_card() {
        let h = HandRanking::new(&[5, 12, 7, 3, 14], &[2, 1, 1, 1]);
        assert_eq!(tb(h.high_card()), ranks(&[14, 12, 7, 5, 3]));
        assert!(h.pair().is_none());
        assert!(h.straight().is_none());
    }

    #[test]
    fn from_cards() {
        let cards = ["2S", "AH", "2H", "AS", "AC"].map(|t| t.parse::<Card>().unwrap());
        let h = HandRanking::from_cards(&cards);
        assert_eq!(tb(h.probe(Category::FullHouse)), ranks(&[14, 14, 14, 2, 2]));
        assert!(h.probe(Category::Flush).is_none());
    }

    #[test]
    fn categories_order() {
        let categories = Category::categories().collect::<Vec<_>>();
        assert_eq!(categories.len(), 10);
        assert_eq!(categories[0], Category::RoyalFlush);
        assert_eq!(categories[9], Category::HighCard);

        for (ordinal, pair) in categories.windows(2).enumerate() {
            assert!(pair[0] > pair[1]);
            assert_eq!(pair[0].ordinal(), ordinal);
        }
    }

    #[test]
    fn category_names() {
        assert_eq!(Category::RoyalFlush.to_string(), "royal_flush");
        assert_eq!(Category::ThreeOfAKind.name(), "three_of_a_kind");
        assert_eq!(Category::HighCard.name(), "high_card");
    }

    #[test]
    #[should_panic]
    fn wrong_ranks_count() {
        HandRanking::new(&[2, 3, 4, 5], &[4]);
    }

    #[test]
    #[should_panic]
    fn wrong_suits_count() {
        HandRanking::new(&[2, 3, 4, 5, 6], &[4]);
    }
}
