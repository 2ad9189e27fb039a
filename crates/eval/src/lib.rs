// Copyright (C) 2025 Splitpot Developers
// SPDX-License-Identifier: Apache-2.0

//! Splitpot Poker hand evaluator.
//!
//! Multi-variant hand evaluation engine: given the pocket and board cards of
//! a showdown it computes a canonical strength rank for each hand, selects
//! the best qualifying five cards (and the low hand for split-pot variants),
//! and resolves multi-way comparisons into winners, splits, pushes, and
//! scoops.
//!
//! To evaluate a hand pick a [Variant] and call [Hand::eval]:
//!
//! ```
//! # use splitpot_eval::*;
//! # fn main() -> anyhow::Result<()> {
//! let pocket = [Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::Ace, Suit::Hearts)];
//! let board = ["KS", "KH", "7D", "2C", "2H"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect::<Vec<Card>>();
//!
//! let hand = Hand::eval(Variant::Holdem, &pocket, &board)?;
//! assert_eq!(hand.hi_category(), Some(Category::TwoPair));
//! # Ok(())
//! # }
//! ```
//!
//! and to resolve a multi-way showdown use [resolve_win]:
//!
//! ```
//! # use splitpot_eval::*;
//! # fn main() -> anyhow::Result<()> {
//! let board = ["QS", "JS", "9H", "5D", "2C"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect::<Vec<Card>>();
//! let hands = vec![
//!     Hand::eval(Variant::Holdem, &["QD".parse().unwrap(), "QH".parse().unwrap()], &board)?,
//!     Hand::eval(Variant::Holdem, &["AS".parse().unwrap(), "KS".parse().unwrap()], &board)?,
//! ];
//!
//! let win = resolve_win(&hands, true);
//! assert_eq!(win.hi_order(), [0, 1]);
//! assert_eq!(win.hi_pivot(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! Seven card hands of the standard high variants are served by an optional
//! precomputed [RankTable] loaded from an external binary asset; without an
//! installed table the evaluator falls back to the in-memory five card class
//! maps and produces identical ranks.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod badugi;
mod hand;
mod rank;
mod scale;
mod showdown;
mod table;
mod variant;

pub use hand::Hand;
pub use rank::{Category, HandRank};
pub use showdown::{
    SideOrder, Win, WinKind, compare_hi, compare_lo, order_hi, order_lo, resolve_win,
};
pub use table::{RankTable, TABLE_CHUNK_RECORDS, TABLE_RECORDS};
pub use variant::Variant;

// Reexport cards types.
pub use splitpot_cards::{Card, Deck, Rank, Suit, combos};
