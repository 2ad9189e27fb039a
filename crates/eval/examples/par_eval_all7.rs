// Copyright (C) 2025 Splitpot Developers
// SPDX-License-Identifier: Apache-2.0
//
// Parallel version of eval_all7, run with:
//
// ```bash
// $ cargo r --release --features=parallel --example par_eval_all7 -- \
//       chunk0.bin chunk1.bin chunk2.bin chunk3.bin --tasks 8
// ```
use anyhow::Result;
use clap::Parser;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::{fs, path::PathBuf, time::Instant};

use splitpot_eval::*;

#[derive(Parser)]
#[command(about = "Evaluate all 133M 7-card hands in parallel")]
struct Args {
    /// The rank table chunk files, in order.
    #[arg(num_args = 4, required = true)]
    chunks: Vec<PathBuf>,

    /// Number of parallel tasks.
    #[arg(long, default_value_t = 8)]
    tasks: usize,
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

    let now = Instant::now();
    let counts: [AtomicUsize; 9] = std::array::from_fn(|_| AtomicUsize::new(0));

    Deck::default().par_for_each(args.tasks, 7, |_, hand| {
        let rank = table.value(hand);
        counts[rank.category().unwrap() as usize].fetch_add(1, Ordering::Relaxed);
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().map(|c| c.load(Ordering::Relaxed)).sum::<usize>();
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
        let count = counts[category as usize].load(Ordering::Relaxed);
        println!("{:<16} {count}", format!("{category}:"));
    }

    Ok(())
}
