// Copyright (C) 2025 Splitpot Developers
// SPDX-License-Identifier: Apache-2.0

//! Five card rank scales.
//!
//! A scale maps every five card hand to a [HandRank]. The maps are generated
//! on first use by enumerating all rank multisets, ordering them by strength
//! under the scale rules, and numbering each category's classes from
//! strongest to weakest. Three scales cover all variants:
//!
//! - [HIGH]: the standard ordering, ace high, the wheel is the lowest
//!   straight. Bit-for-bit the decode target of the rank table asset.
//! - [DEUCE_TO_SEVEN]: ace high but A-5-4-3-2 is no straight; the ordering
//!   deuce-to-seven lowball inverts at compare time.
//! - [ACE_TO_FIVE]: ace low, straights and flushes do not rank; the ordering
//!   razz, ace-to-five lowball, and eight-or-better lows invert at compare
//!   time.
use ahash::AHashMap;
use std::sync::LazyLock;

use splitpot_cards::{Card, Rank};

use crate::rank::{Category, HandRank};

/// Rules that shape a five card scale.
#[derive(Debug, Clone, Copy)]
struct Rules {
    /// Ace plays low in kicker comparisons.
    ace_low: bool,
    /// Straights and flushes rank as their own categories.
    straights_and_flushes: bool,
    /// A-2-3-4-5 counts as the lowest straight.
    wheel: bool,
}

/// The standard high ordering.
pub(crate) static HIGH: LazyLock<FiveScale> = LazyLock::new(|| {
    FiveScale::build(Rules {
        ace_low: false,
        straights_and_flushes: true,
        wheel: true,
    })
});

/// Ace high without the wheel, for deuce-to-seven lowball.
pub(crate) static DEUCE_TO_SEVEN: LazyLock<FiveScale> = LazyLock::new(|| {
    FiveScale::build(Rules {
        ace_low: false,
        straights_and_flushes: true,
        wheel: false,
    })
});

/// Ace low without straights and flushes, for the ace-to-five family.
pub(crate) static ACE_TO_FIVE: LazyLock<FiveScale> = LazyLock::new(|| {
    FiveScale::build(Rules {
        ace_low: true,
        straights_and_flushes: false,
        wheel: false,
    })
});

/// A generated five card scale.
pub(crate) struct FiveScale {
    rules: Rules,
    offsuit: AHashMap<u32, HandRank>,
    suited: AHashMap<u32, HandRank>,
}

impl FiveScale {
    fn build(rules: Rules) -> FiveScale {
        // One entry per class: category, count-major strength key, levels
        // signature, and whether it is the suited variant of the pattern.
        let mut entries: Vec<(Category, [u8; 5], u32, bool)> = Vec::new();

        // Enumerate all non increasing level 5-tuples; a level can appear at
        // most four times, once per suit.
        for a in (0..13u8).rev() {
            for b in (0..=a).rev() {
                for c in (0..=b).rev() {
                    for d in (0..=c).rev() {
                        for e in (0..=d).rev() {
                            if a == e {
                                continue;
                            }

                            let levels = [a, b, c, d, e];
                            let sig = signature(levels);
                            let (category, key, distinct) = classify(levels, rules);
                            entries.push((category, key, sig, false));

                            if distinct && rules.straights_and_flushes {
                                let suited_category = match category {
                                    Category::Straight => Category::StraightFlush,
                                    _ => Category::Flush,
                                };
                                entries.push((suited_category, key, sig, true));
                            }
                        }
                    }
                }
            }
        }

        // Stronger entries first: category order, then key descending.
        entries.sort_by(|x, y| {
            (x.0 as u32)
                .cmp(&(y.0 as u32))
                .then_with(|| y.1.cmp(&x.1))
        });

        let mut offsuit = AHashMap::with_capacity(entries.len());
        let mut suited = AHashMap::new();
        let mut tiebreaks = [0u32; 9];

        for (category, _, sig, is_suited) in entries {
            let rank = HandRank::from_parts(category, tiebreaks[category as usize]);
            tiebreaks[category as usize] += 1;

            if is_suited {
                suited.insert(sig, rank);
            } else {
                offsuit.insert(sig, rank);
            }
        }

        FiveScale {
            rules,
            offsuit,
            suited,
        }
    }

    /// The comparison level of a rank on this scale.
    pub(crate) fn level(&self, rank: Rank) -> u8 {
        if self.rules.ace_low {
            match rank {
                Rank::Ace => 0,
                _ => rank as u8 + 1,
            }
        } else {
            rank as u8
        }
    }

    /// Ranks a five card hand.
    pub(crate) fn rank_of(&self, cards: &[Card]) -> HandRank {
        assert_eq!(cards.len(), 5, "a five card scale ranks 5 cards");

        let mut levels = [0u8; 5];
        for (level, card) in levels.iter_mut().zip(cards) {
            *level = self.level(card.rank());
        }
        levels.sort_unstable_by(|x, y| y.cmp(x));

        let sig = signature(levels);
        let suited = self.rules.straights_and_flushes
            && cards.iter().all(|c| c.suit_bits() == cards[0].suit_bits());

        let map = if suited { &self.suited } else { &self.offsuit };
        *map.get(&sig)
            .unwrap_or_else(|| panic!("no five card class for signature {sig:#07x}"))
    }
}

/// Packs descending levels into a map key.
fn signature(levels: [u8; 5]) -> u32 {
    levels.iter().fold(0u32, |sig, &l| (sig << 4) | l as u32)
}

/// Classifies a descending level tuple into its category and count-major
/// strength key; the flag marks tuples of five distinct levels.
fn classify(levels: [u8; 5], rules: Rules) -> (Category, [u8; 5], bool) {
    // Group into (level, count) runs, then order count-major so kicker
    // comparisons read off the key left to right.
    let mut groups: Vec<(u8, u8)> = Vec::with_capacity(5);
    for &level in &levels {
        match groups.last_mut() {
            Some((l, n)) if *l == level => *n += 1,
            _ => groups.push((level, 1)),
        }
    }
    groups.sort_by(|x, y| y.1.cmp(&x.1).then_with(|| y.0.cmp(&x.0)));

    let mut key = [0u8; 5];
    let mut slot = 0;
    for &(level, count) in &groups {
        for _ in 0..count {
            key[slot] = level;
            slot += 1;
        }
    }

    let counts: Vec<u8> = groups.iter().map(|g| g.1).collect();
    match counts.as_slice() {
        [4, 1] => (Category::FourOfAKind, key, false),
        [3, 2] => (Category::FullHouse, key, false),
        [3, 1, 1] => (Category::ThreeOfAKind, key, false),
        [2, 2, 1] => (Category::TwoPair, key, false),
        [2, 1, 1, 1] => (Category::Pair, key, false),
        _ => match straight_high(levels, rules.wheel) {
            Some(high) if rules.straights_and_flushes => {
                (Category::Straight, [high, 0, 0, 0, 0], true)
            }
            _ => (Category::HighCard, key, true),
        },
    }
}

/// Returns the high level of a straight, `None` if the distinct levels are
/// not consecutive. The wheel ranks by its Five, not the Ace.
fn straight_high(levels: [u8; 5], wheel: bool) -> Option<u8> {
    if levels[0] - levels[4] == 4 {
        Some(levels[0])
    } else if wheel && levels == [12, 3, 2, 1, 0] {
        Some(3)
    } else {
        None
    }
}
