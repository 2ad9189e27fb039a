// Copyright (C) 2025 Splitpot Developers
// SPDX-License-Identifier: Apache-2.0

//! Agreement between the rank table and the combinatorial fallback.
//!
//! Needs the real rank table asset, run with:
//!
//! ```bash
//! $ SPLITPOT_TABLE_CHUNKS="c0.bin:c1.bin:c2.bin:c3.bin" \
//!       cargo test --release --test lookup_asset -- --ignored
//! ```
use splitpot_eval::*;

#[test]
#[ignore = "needs the rank table asset chunks"]
fn lookup_matches_the_fallback() {
    let paths = std::env::var("SPLITPOT_TABLE_CHUNKS").expect("SPLITPOT_TABLE_CHUNKS not set");
    let chunks = paths
        .split(':')
        .map(|p| std::fs::read(p).expect("readable chunk file"))
        .collect::<Vec<_>>();

    let mut samples = Vec::new();
    Deck::default().sample(500, 7, |cards| samples.push(cards.to_vec()));

    // Evaluate every sample before the install: this takes the fallback
    // path through the generated five card classes.
    let fallback = samples
        .iter()
        .map(|cards| Hand::eval(Variant::Stud, cards, &[]).unwrap())
        .collect::<Vec<_>>();

    let table = RankTable::from_chunks(chunks.iter().map(|c| c.as_slice()))
        .unwrap()
        .install();

    // The lookup path must select the same best five and the same rank, and
    // the single walk must agree with both.
    for (cards, fallback) in samples.iter().zip(&fallback) {
        let lookup = Hand::eval(Variant::Stud, cards, &[]).unwrap();
        assert_eq!(lookup.hi_rank(), fallback.hi_rank(), "{cards:?}");
        assert_eq!(lookup.hi_best(), fallback.hi_best(), "{cards:?}");
        assert_eq!(table.value(cards), fallback.hi_rank(), "{cards:?}");
    }
}
