// Copyright (C) 2025 Splitpot Developers
// SPDX-License-Identifier: Apache-2.0
//
// Deal and resolve a random showdown for any variant:
//
// ```bash
// $ cargo r --example showdown -- --variant omaha-hi-lo --players 4
// board: 7D TC 8H 2H 5C
// player 0: 4C 9C 6D QD | 8H 7D 6D 5C 4C (Straight)
//           low: 7D 6D 5C 4C 2H
// ...
// player 0 wins the hi side
// player 2 wins the lo side
// ```
use anyhow::{Result, ensure};
use clap::Parser;
use rand::prelude::*;

use splitpot_eval::*;

#[derive(Parser)]
#[command(about = "Deal and resolve a random showdown")]
struct Args {
    /// The game variant to deal.
    #[arg(long, default_value_t = Variant::Holdem)]
    variant: Variant,

    /// Number of players at the showdown.
    #[arg(long, default_value_t = 4)]
    players: usize,

    /// RNG seed for a reproducible deal.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let variant = args.variant;

    let pocket_size = *variant.pocket_range().end();
    let board_size = *variant.board_sizes().last().unwrap();
    ensure!(args.players >= 2, "a showdown takes at least two players");
    ensure!(
        args.players * pocket_size + board_size <= Deck::SIZE,
        "too many players for {variant}"
    );

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let mut deck = Deck::new_and_shuffled(&mut rng);

    let pockets: Vec<Vec<Card>> = (0..args.players)
        .map(|_| (0..pocket_size).map(|_| deck.deal()).collect())
        .collect();
    let board: Vec<Card> = (0..board_size).map(|_| deck.deal()).collect();

    if !board.is_empty() {
        println!("board: {}", join(&board));
    }

    let hands = pockets
        .iter()
        .map(|pocket| Hand::eval(variant, pocket, &board))
        .collect::<Result<Vec<_>>>()?;

    for (i, hand) in hands.iter().enumerate() {
        let category = match hand.hi_category() {
            Some(category) => category.to_string(),
            None => format!("{}-card badugi", hand.hi_best().len()),
        };
        println!(
            "player {i}: {} | {} ({category})",
            join(hand.pocket()),
            join(hand.hi_best()),
        );

        if hand.has_low() {
            println!("          low: {}", join(hand.lo_best()));
        }
    }

    let win = resolve_win(&hands, true);
    if win.is_scoop() {
        println!("player {} scoops", win.hi_order()[0]);
        return Ok(());
    }

    println!("{} {} the hi side", players(win.hi().winners()), win.hi_kind());
    if let Some(kind) = win.lo_kind() {
        let side = if win.uses_low() { "lo side" } else { "second board" };
        println!("{} {} the {side}", players(win.lo().winners()), kind);
    }

    Ok(())
}

fn join(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn players(indices: &[usize]) -> String {
    indices
        .iter()
        .map(|i| format!("player {i}"))
        .collect::<Vec<_>>()
        .join(", ")
}
