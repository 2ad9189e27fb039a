// Copyright (C) 2025 Splitpot Developers
// SPDX-License-Identifier: Apache-2.0
//
// Run with the four rank table chunk files:
//
// ```bash
// $ cargo r --release --example eval_all7 -- chunk0.bin chunk1.bin chunk2.bin chunk3.bin
// ...
// Total hands      133784560
// Elapsed:         2.871s
// Hands/sec:       46598593
//
// High Card:       23294460
// Pair:            58627800
// Two Pair:        31433400
// Three of a Kind: 6461620
// Straight:        6180020
// Flush:           4047644
// Full House:      3473184
// Four of a Kind:  224848
// Straight Flush:  41584
// ```
use anyhow::Result;
use clap::Parser;
use std::{fs, path::PathBuf, time::Instant};

use splitpot_eval::*;

#[derive(Parser)]
#[command(about = "Evaluate all 133M 7-card hands through the rank table")]
struct Args {
    /// The rank table chunk files, in order.
    #[arg(num_args = 4, required = true)]
    chunks: Vec<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let chunks = args
        .chunks
        .iter()
        .map(fs::read)
        .collect::<Result<Vec<_>, _>>()?;
    let table = RankTable::from_chunks(chunks.iter().map(|c| c.as_slice()))?.install();

    // Evaluate all 133M hands.
    let now = Instant::now();
    let mut counts = [0usize; 9];

    Deck::default().for_each(7, |hand| {
        let rank = table.value(hand);
        counts[rank.category().unwrap() as usize] += 1;
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {elapsed:.3}s");
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for category in [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ] {
        println!("{:<16} {}", format!("{category}:"), counts[category as usize]);
    }

    Ok(())
}
