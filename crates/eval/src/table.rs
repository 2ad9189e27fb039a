// Copyright (C) 2025 Splitpot Developers
// SPDX-License-Identifier: Apache-2.0

//! Precomputed rank table for the standard high ordering.
//!
//! The table is a directed walk: each state is a row of 53 `u32` slots, one
//! per card plus the closing slot, and folding a card moves to the state
//! stored at `state + row(card)`. After seven cards the walk lands on a
//! packed terminal value; five and six card walks read one closing slot to
//! terminate. Walking a hand therefore costs one array lookup per card and
//! no comparisons.
//!
//! The table is built offline and shipped as a fixed-layout binary asset of
//! little-endian `u32` records, split into [TABLE_CHUNK_RECORDS] chunks.
//! Loading verifies every chunk length and the total record count exactly;
//! any mismatch means a corrupted deployment and fails construction. How the
//! bytes reach the process (files, embedding, network) is the caller's
//! concern, the table only accepts raw bytes.
//!
//! A terminal value packs a category code in its high bits (1 = high card up
//! to 9 = straight flush) and a 1-based tiebreak in its low 12 bits, larger
//! is stronger. [RankTable] decodes terminals into the [HandRank] scale with
//! `((9 - code) << 12) | (category_size - tiebreak)`, which matches the
//! generated five card classes bit for bit.
use anyhow::{Result, ensure};
use log::{info, warn};
use std::sync::OnceLock;
use xxhash_rust::xxh3::Xxh3;

use splitpot_cards::{Card, Suit};

use crate::rank::{Category, HIGH_CATEGORY_SIZES, HandRank};

/// Total number of records in the rank table asset.
pub const TABLE_RECORDS: usize = 32_487_834;

/// Number of records in each chunk of the rank table asset.
pub const TABLE_CHUNK_RECORDS: [usize; 4] = [8_121_959, 8_121_959, 8_121_958, 8_121_958];

/// The reserved row the card walk starts from; rows 1..=52 are the cards,
/// row 0 is unused.
const ROOT_STATE: usize = 53;

static TABLE: OnceLock<RankTable> = OnceLock::new();

/// The process-wide rank lookup table.
///
/// Immutable once constructed; after [RankTable::install] it is shared
/// lock-free by any number of concurrent evaluations.
#[derive(Debug)]
pub struct RankTable {
    records: Vec<u32>,
    checksum: u64,
}

impl RankTable {
    /// Builds the table from the concatenated asset bytes.
    ///
    /// Fails if the byte length does not match [TABLE_RECORDS] records
    /// exactly.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        ensure!(
            bytes.len() == TABLE_RECORDS * 4,
            "rank table asset is {} bytes, expected {}",
            bytes.len(),
            TABLE_RECORDS * 4
        );

        let mut hasher = Xxh3::new();
        hasher.update(bytes);

        let records = bytes
            .chunks_exact(4)
            .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
            .collect();

        Ok(Self {
            records,
            checksum: hasher.digest(),
        })
    }

    /// Builds the table from its asset chunks, in order.
    ///
    /// Fails if the chunk count or any chunk's byte length does not match
    /// [TABLE_CHUNK_RECORDS] exactly.
    pub fn from_chunks<'a, I>(chunks: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        let mut records = Vec::with_capacity(TABLE_RECORDS);
        let mut hasher = Xxh3::new();
        let mut count = 0;

        for (i, chunk) in chunks.into_iter().enumerate() {
            ensure!(
                i < TABLE_CHUNK_RECORDS.len(),
                "rank table asset has more than {} chunks",
                TABLE_CHUNK_RECORDS.len()
            );
            let expected = TABLE_CHUNK_RECORDS[i] * 4;
            ensure!(
                chunk.len() == expected,
                "rank table chunk {i} is {} bytes, expected {expected}",
                chunk.len()
            );

            hasher.update(chunk);
            records.extend(
                chunk
                    .chunks_exact(4)
                    .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]])),
            );
            count += 1;
        }

        ensure!(
            count == TABLE_CHUNK_RECORDS.len(),
            "rank table asset has {count} chunks, expected {}",
            TABLE_CHUNK_RECORDS.len()
        );

        Ok(Self {
            records,
            checksum: hasher.digest(),
        })
    }

    /// The xxh3 checksum of the asset bytes, computed at construction.
    pub fn checksum(&self) -> u64 {
        self.checksum
    }

    /// Installs this table as the process-wide lookup table.
    ///
    /// The first install wins; later calls drop their table and return the
    /// installed one, so concurrent first use builds exactly once.
    pub fn install(self) -> &'static RankTable {
        let checksum = self.checksum;
        match TABLE.set(self) {
            Ok(()) => {
                info!("rank table installed: {TABLE_RECORDS} records, checksum {checksum:016x}")
            }
            Err(_) => warn!("rank table already installed, dropping checksum {checksum:016x}"),
        }

        TABLE.get().expect("rank table just installed")
    }

    /// Returns the installed process-wide table, if any.
    pub fn installed() -> Option<&'static RankTable> {
        TABLE.get()
    }

    /// Evaluates a 5 to 7 card hand in a single walk.
    ///
    /// Panics on corrupt table contents; corruption that escapes the length
    /// checks at load time is not recoverable.
    pub fn value(&self, cards: &[Card]) -> HandRank {
        assert!(
            (5..=7).contains(&cards.len()),
            "the rank table evaluates 5 to 7 cards, got {}",
            cards.len()
        );

        let mut state = ROOT_STATE;
        for &card in cards {
            state = self.records[state + Self::row(card)] as usize;
        }

        // Shorter walks need one closing step to reach a terminal value.
        if cards.len() < 7 {
            state = self.records[state] as usize;
        }

        Self::decode(state as u32)
    }

    /// The table row of a card: rank-major, suit-minor, rows 1..=52.
    fn row(card: Card) -> usize {
        let suit = match card.suit() {
            Suit::Clubs => 0,
            Suit::Diamonds => 1,
            Suit::Hearts => 2,
            Suit::Spades => 3,
        };

        1 + card.rank() as usize * 4 + suit
    }

    /// Decodes a terminal value into the [HandRank] scale.
    fn decode(value: u32) -> HandRank {
        let code = value >> 12;
        let tiebreak = value & 0xfff;
        assert!(
            (1..=9).contains(&code),
            "corrupt rank table terminal {value:#010x}"
        );

        let category = Category::from_code(9 - code).expect("code in 1..=9");
        let size = HIGH_CATEGORY_SIZES[(9 - code) as usize];
        assert!(
            tiebreak >= 1 && tiebreak <= size,
            "corrupt rank table terminal {value:#010x}"
        );

        HandRank::from_parts(category, size - tiebreak)
    }

    #[cfg(test)]
    fn from_raw_records(records: Vec<u32>) -> Self {
        Self {
            records,
            checksum: 0,
        }
    }
}
