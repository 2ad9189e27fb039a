// Copyright (C) 2025 Splitpot Developers
// SPDX-License-Identifier: Apache-2.0

//! Badugi hand scoring.
//!
//! A badugi is the largest subset of the four pocket cards whose ranks and
//! suits are pairwise distinct; card count dominates, then lower cards win
//! with the ace low. Ranks encode as `((4 - count) << 16) | packed levels`
//! with the levels packed as descending nibbles, so the numeric order of the
//! bits is the hand order and no category projection applies.
use splitpot_cards::{Card, combos};

use crate::rank::HandRank;
use crate::scale;

/// Scores the best badugi of a four card pocket, returning its rank and the
/// cards that make it, strongest display order first.
pub(crate) fn best(pocket: &[Card]) -> (HandRank, Vec<Card>) {
    debug_assert_eq!(pocket.len(), 4);

    // A smaller badugi only plays when no larger subset qualifies; subsets
    // with a duplicated rank or suit are skipped, never scored.
    for count in (1..=pocket.len()).rev() {
        let mut best: Option<(HandRank, Vec<Card>)> = None;

        combos::for_each_combination(pocket.len(), count, |subset| {
            let mut cards: Vec<Card> = subset.iter().map(|&i| pocket[i]).collect();
            if !is_badugi(&cards) {
                return;
            }

            cards.sort_by_key(|c| std::cmp::Reverse(scale::ACE_TO_FIVE.level(c.rank())));
            let rank = encode(&cards);
            if best.as_ref().is_none_or(|(r, _)| rank < *r) {
                best = Some((rank, cards));
            }
        });

        if let Some(found) = best {
            return found;
        }
    }

    unreachable!("a single card is always a badugi")
}

/// Checks ranks and suits are pairwise distinct.
fn is_badugi(cards: &[Card]) -> bool {
    let mut ranks = 0u16;
    let mut suits = 0u8;
    for card in cards {
        ranks |= 1 << card.rank() as u16;
        suits |= card.suit_bits();
    }

    ranks.count_ones() as usize == cards.len() && suits.count_ones() as usize == cards.len()
}

/// Packs a descending-level badugi into its rank bits.
fn encode(cards: &[Card]) -> HandRank {
    let packed = cards.iter().fold(0u32, |bits, c| {
        (bits << 4) | scale::ACE_TO_FIVE.level(c.rank()) as u32
    });

    HandRank::from_bits(((4 - cards.len() as u32) << 16) | packed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pocket(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    #[test]
    fn four_card_badugi_beats_any_smaller() {
        // Distinct ranks and suits: the whole pocket plays.
        let (four, cards) = best(&pocket("AS 2H 3D 4C"));
        assert_eq!(cards.len(), 4);

        // A duplicated suit forces a three card badugi, strictly weaker.
        let (three, cards) = best(&pocket("AS 2H 3H 4C"));
        assert_eq!(cards.len(), 3);
        assert!(four < three);

        // A duplicated rank as well.
        let (three, _) = best(&pocket("AS 2H 2D 4C"));
        assert!(four < three);
    }

    #[test]
    fn lower_cards_win_within_a_size() {
        let (wheelish, _) = best(&pocket("AS 2H 3D 4C"));
        let (higher, _) = best(&pocket("2S 3H 4D 5C"));
        assert!(wheelish < higher);

        // The highest card decides first: A-2-3-5 beats 2-3-4-5.
        let (gap, _) = best(&pocket("AS 2H 3D 5C"));
        assert!(gap < higher);
    }

    #[test]
    fn monotone_pocket_degrades_to_one_card() {
        let (rank, cards) = best(&pocket("AS 5S 9S KS"));
        assert_eq!(cards.len(), 1);
        // The ace is the lowest card.
        assert_eq!(cards[0], "AS".parse().unwrap());
        assert_eq!(rank.bits() >> 16, 3);
    }

    #[test]
    fn three_card_choice_drops_the_high_duplicate() {
        // Hearts are duplicated; the best three cards keep the deuce and
        // drop the king.
        let (_, cards) = best(&pocket("AS 2H KH 4C"));
        assert_eq!(cards.len(), 3);
        assert!(!cards.contains(&"KH".parse().unwrap()));
    }

    #[test]
    fn display_order_is_high_card_first() {
        let (_, cards) = best(&pocket("2H AS 4C 3D"));
        let shown = cards.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        assert_eq!(shown, ["4C", "3D", "2H", "AS"]);
    }
}
