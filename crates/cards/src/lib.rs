// Copyright (C) 2025 Splitpot Developers
// SPDX-License-Identifier: Apache-2.0

//! Splitpot Poker cards types.
//!
//! This crate defines the card types used by the Splitpot hand evaluator:
//!
//! ```
//! # use splitpot_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "KD".parse().unwrap();
//! assert!(ah > kd);
//! ```
//!
//! a [Deck] type for shuffling, sampling, and iterating hands:
//!
//! ```
//! # use splitpot_cards::Deck;
//! // Iterate through all 5 cards hands.
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
//!
//! and the [combos] module with the k-subset enumeration primitives the
//! evaluator shares with the deck:
//!
//! ```
//! # use splitpot_cards::combos;
//! let mut subsets = Vec::new();
//! combos::for_each_combination(4, 2, |s| subsets.push(s.to_vec()));
//! assert_eq!(subsets.len(), combos::nck(4, 2));
//! assert_eq!(subsets[0], [0, 1]);
//! ```
//!
//! The **`parallel`** feature enables parallel sampling and iteration with a
//! given number of tasks, see `Deck::par_for_each` and `Deck::par_sample`.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod combos;
mod deck;
pub use deck::{Card, Deck, Rank, Suit};

#[cfg(feature = "parallel")]
mod parallel;
