// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown CLI, ranks poker hands from the command line.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result, bail};
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use std::io::Write;

use showdown_eval::{Deck, Hand};

/// Example hands sorted from best to worst.
pub static DEMO_HANDS: &[&str] = &[
    "KS AS TS QS JS",
    "2H 3H 4H 5H 6H",
    "AS AD AC AH JD",
    "JS JD JC JH 3D",
    "2S AH 2H AS AC",
    "AS 3S 4S 8S 2S",
];

/// The CLI configuration.
#[derive(Debug, Default)]
pub struct Config {
    /// Hands given on the command line.
    pub hands: Vec<String>,
    /// Add the example hands.
    pub demo: bool,
    /// Number of random hands to deal.
    pub random: usize,
    /// Seed for dealing random hands.
    pub seed: Option<u64>,
}

/// Ranks the configured hands and writes them from best to worst.
pub fn run<W: Write>(config: Config, out: &mut W) -> Result<()> {
    let texts = hand_texts(&config)?;
    if texts.is_empty() {
        bail!("No hands to rank, pass some hands or use --demo or --random");
    }

    let hands = rank_hands(&texts)?;
    info!("Ranked {} hands", hands.len());

    for (pos, hand) in hands.iter().enumerate() {
        writeln!(out, "{:>3}. {}  {}", pos + 1, hand, hand.category_name())?;
    }

    Ok(())
}

/// Parses and sorts hands from best to worst.
pub fn rank_hands<S: AsRef<str>>(texts: &[S]) -> Result<Vec<Hand>> {
    let mut hands = texts
        .iter()
        .map(|text| {
            let text = text.as_ref();
            Hand::parse(text).with_context(|| format!("Invalid hand {text:?}"))
        })
        .collect::<Result<Vec<_>>>()?;

    hands.sort_by(|a, b| b.cmp(a));
    Ok(hands)
}

/// Collects the hands texts to rank from the configuration.
fn hand_texts(config: &Config) -> Result<Vec<String>> {
    let mut texts = config.hands.clone();

    if config.demo {
        texts.extend(DEMO_HANDS.iter().map(|h| h.to_string()));
    }

    if config.random > 0 {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut deck = Deck::new_and_shuffled(&mut rng);
        for _ in 0..config.random {
            // A deck has 10 hands, start a new one when empty.
            if deck.count() < 5 {
                deck = Deck::new_and_shuffled(&mut rng);
            }

            let hand = deck.deal_hand().context("Deck is empty")?;
            texts.push(hand);
        }
    }

    Ok(texts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_hands_are_sorted() {
        let hands = rank_hands(DEMO_HANDS).unwrap();
        let texts = hands.iter().map(|h| h.to_string()).collect::<Vec<_>>();
        assert_eq!(texts, DEMO_HANDS);

        // Sorting the reversed list gives back the same order.
        let reversed = DEMO_HANDS.iter().rev().collect::<Vec<_>>();
        let hands = rank_hands(&reversed).unwrap();
        let texts = hands.iter().map(|h| h.to_string()).collect::<Vec<_>>();
        assert_eq!(texts, DEMO_HANDS);
    }

    #[test]
    fn invalid_hand() {
        let err = rank_hands(&["AS KS QS JS TS", "AS KS QS JS"]).unwrap_err();
        assert!(err.to_string().contains("AS KS QS JS"));
    }

    #[test]
    fn run_demo() {
        let config = Config {
            demo: true,
            ..Default::default()
        };

        let mut out = Vec::new();
        run(config, &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), DEMO_HANDS.len());
        assert_eq!(lines[0], "  1. KS AS TS QS JS  royal_flush");
        assert_eq!(lines[5], "  6. AS 3S 4S 8S 2S  flush");
    }

    #[test]
    fn run_without_hands() {
        let mut out = Vec::new();
        assert!(run(Config::default(), &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn random_hands() {
        let config = Config {
            hands: vec!["2S 3D 4C 5H 7S".to_string()],
            random: 25,
            seed: Some(9),
            ..Default::default()
        };

        let texts = hand_texts(&config).unwrap();
        assert_eq!(texts.len(), 26);
        assert_eq!(texts[0], "2S 3D 4C 5H 7S");
        assert_eq!(rank_hands(&texts).unwrap().len(), 26);

        // Seeded hands are reproducible.
        assert_eq!(hand_texts(&config).unwrap(), texts);
    }
}
