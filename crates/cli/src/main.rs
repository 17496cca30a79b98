// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use clap::Parser;
use log::error;
use std::{io, process};

#[derive(Debug, Parser)]
struct Cli {
    /// Hands to rank, five cards separated by a space, i.e. "AS KS QS JS TS".
    hands: Vec<String>,
    /// Rank the example hands.
    #[clap(long, short)]
    demo: bool,
    /// Number of random hands to deal.
    #[clap(long, short, value_parser = clap::value_parser!(u16).range(1..=100))]
    random: Option<u16>,
    /// Seed for dealing random hands.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Enable debug logging.
    #[clap(long, short)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let config = showdown_cli::Config {
        hands: cli.hands,
        demo: cli.demo,
        random: cli.random.map_or(0, usize::from),
        seed: cli.seed,
    };

    if let Err(e) = showdown_cli::run(config, &mut io::stdout().lock()) {
        error!("{e:#}");
        process::exit(1);
    }
}
