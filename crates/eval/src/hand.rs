// Copyright (C) 2025 Splitpot Developers
// SPDX-License-Identifier: Apache-2.0

//! Hand evaluation.
use ahash::AHashSet;
use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

use splitpot_cards::{Card, combos};

use crate::badugi;
use crate::rank::{Category, HandRank};
use crate::scale::{self, FiveScale};
use crate::table::RankTable;
use crate::variant::{HiScoring, SecondSide, Selection, Variant};

/// The evaluation result for one player in one showdown.
///
/// A hand is fully populated by [Hand::eval] and immutable afterwards. The
/// hi fields always hold the best qualifying combination; the lo fields are
/// populated when the variant has a second side, holding the qualifying low
/// hand ([Hand::lo_rank] is [HandRank::INVALID] when none qualifies) or the
/// second board's hand for double-board variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    variant: Variant,
    pocket: Vec<Card>,
    board: Vec<Card>,
    hi_rank: HandRank,
    hi_best: Vec<Card>,
    hi_unused: Vec<Card>,
    lo_rank: HandRank,
    lo_best: Vec<Card>,
    lo_unused: Vec<Card>,
}

impl Hand {
    /// Evaluates the pocket and board cards under a variant's rules.
    ///
    /// Fails on configuration errors: pocket or board cardinality outside
    /// the variant's shape, or a duplicated card. For any valid shape
    /// evaluation always succeeds; a missing low qualifier is a normal
    /// outcome, not an error.
    pub fn eval(variant: Variant, pocket: &[Card], board: &[Card]) -> Result<Hand> {
        validate(variant, pocket, board)?;

        let mut hand = Hand {
            variant,
            pocket: pocket.to_vec(),
            board: board.to_vec(),
            hi_rank: HandRank::INVALID,
            hi_best: Vec::new(),
            hi_unused: Vec::new(),
            lo_rank: HandRank::INVALID,
            lo_best: Vec::new(),
            lo_unused: Vec::new(),
        };

        if variant.selection() == Selection::Badugi {
            let (rank, best) = badugi::best(pocket);
            let mut unused = complement(pocket, &best);
            sort_display(&mut unused, &scale::ACE_TO_FIVE);
            hand.hi_rank = rank;
            hand.hi_best = best;
            hand.hi_unused = unused;
            return Ok(hand);
        }

        match variant.second_side() {
            Some(SecondSide::Board) => {
                let half = board.len() / 2;
                (hand.hi_rank, hand.hi_best, hand.hi_unused) =
                    best_five(variant, pocket, &board[..half]);
                (hand.lo_rank, hand.lo_best, hand.lo_unused) =
                    best_five(variant, pocket, &board[half..]);
            }
            Some(SecondSide::EightOrBetter) => {
                (hand.hi_rank, hand.hi_best, hand.hi_unused) = best_five(variant, pocket, board);
                if let Some((rank, best, unused)) = best_low(variant, pocket, board) {
                    (hand.lo_rank, hand.lo_best, hand.lo_unused) = (rank, best, unused);
                }
            }
            None => {
                (hand.hi_rank, hand.hi_best, hand.hi_unused) = best_five(variant, pocket, board);
            }
        }

        Ok(hand)
    }

    /// The variant this hand was evaluated under.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// The pocket cards.
    pub fn pocket(&self) -> &[Card] {
        &self.pocket
    }

    /// The board cards.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// The hi side rank.
    pub fn hi_rank(&self) -> HandRank {
        self.hi_rank
    }

    /// The best hi cards, strongest display order first.
    pub fn hi_best(&self) -> &[Card] {
        &self.hi_best
    }

    /// The candidate cards the hi side did not use, for display.
    pub fn hi_unused(&self) -> &[Card] {
        &self.hi_unused
    }

    /// The hi side category, `None` for badugi hands.
    pub fn hi_category(&self) -> Option<Category> {
        match self.variant.hi_scoring() {
            HiScoring::Badugi => None,
            _ => self.hi_rank.category(),
        }
    }

    /// The lo side rank; [HandRank::INVALID] when no low hand qualifies or
    /// the variant has no second side.
    pub fn lo_rank(&self) -> HandRank {
        self.lo_rank
    }

    /// The lo side category, `None` when there is no lo side rank.
    pub fn lo_category(&self) -> Option<Category> {
        self.lo_rank.category()
    }

    /// Checks the variant has a low side and this hand qualifies for it.
    pub fn has_low(&self) -> bool {
        self.variant.has_low() && self.lo_rank.is_valid()
    }

    /// The best lo cards, strongest display order first.
    pub fn lo_best(&self) -> &[Card] {
        &self.lo_best
    }

    /// The candidate cards the lo side did not use, for display.
    pub fn lo_unused(&self) -> &[Card] {
        &self.lo_unused
    }

    /// The hi comparison key: the rank bits with the variant's read-time
    /// inversion applied, smaller is better.
    pub(crate) fn hi_key(&self) -> u32 {
        if self.variant.hi_inverted() {
            u32::MAX - self.hi_rank.bits()
        } else {
            self.hi_rank.bits()
        }
    }

    /// The lo comparison key; hands without a second side or without a
    /// qualifying low take the weakest possible value so they sort last.
    pub(crate) fn lo_key(&self) -> u32 {
        match self.variant.second_side() {
            Some(SecondSide::Board) => self.lo_rank.bits(),
            Some(SecondSide::EightOrBetter) if self.lo_rank.is_valid() => {
                u32::MAX - self.lo_rank.bits()
            }
            _ => u32::MAX,
        }
    }
}

fn validate(variant: Variant, pocket: &[Card], board: &[Card]) -> Result<()> {
    let range = variant.pocket_range();
    ensure!(
        range.contains(&pocket.len()),
        "{variant} takes {}..={} pocket cards, got {}",
        range.start(),
        range.end(),
        pocket.len()
    );
    ensure!(
        variant.board_sizes().contains(&board.len()),
        "{variant} takes {:?} board cards, got {}",
        variant.board_sizes(),
        board.len()
    );

    let mut seen = AHashSet::with_capacity(pocket.len() + board.len());
    for card in pocket.iter().chain(board) {
        ensure!(seen.insert(card.id()), "duplicate card {card}");
    }

    Ok(())
}

/// Picks the hi side: the five card set with the best rank under the
/// variant's ordering, its cards display-sorted, and the unused complement.
fn best_five(variant: Variant, pocket: &[Card], board: &[Card]) -> (HandRank, Vec<Card>, Vec<Card>) {
    let scoring = variant.hi_scoring();
    let scale = scale_for(scoring);

    // The table serves the standard high ordering when installed; the
    // generated classes give identical ranks otherwise.
    let table = match scoring {
        HiScoring::High => RankTable::installed(),
        _ => None,
    };
    let score = |five: &[Card]| match table {
        Some(table) => table.value(five),
        None => scale.rank_of(five),
    };

    let inverted = variant.hi_inverted();
    let mut best: Option<(u32, HandRank, [Card; 5])> = None;
    for five in five_card_sets(variant.selection(), pocket, board) {
        let rank = score(&five);
        let key = if inverted {
            u32::MAX - rank.bits()
        } else {
            rank.bits()
        };

        // Strict comparison: the first set visited keeps ties, making the
        // selected cards reproducible.
        if best.as_ref().is_none_or(|(k, ..)| key < *k) {
            best = Some((key, rank, five));
        }
    }

    let (_, rank, five) = best.expect("at least one five card set");
    let (best, unused) = split_used(pocket, board, &five, scale);
    (rank, best, unused)
}

/// Picks the best qualifying eight-or-better low, if any.
fn best_low(
    variant: Variant,
    pocket: &[Card],
    board: &[Card],
) -> Option<(HandRank, Vec<Card>, Vec<Card>)> {
    let scale = &*scale::ACE_TO_FIVE;

    let mut best: Option<(u32, HandRank, [Card; 5])> = None;
    for five in five_card_sets(variant.selection(), pocket, board) {
        if !qualifies_eight_or_better(&five, scale) {
            continue;
        }

        // The weakest hand on the ace-to-five ordering is the best low.
        let rank = scale.rank_of(&five);
        let key = u32::MAX - rank.bits();
        if best.as_ref().is_none_or(|(k, ..)| key < *k) {
            best = Some((key, rank, five));
        }
    }

    let (_, rank, five) = best?;
    let (best, unused) = split_used(pocket, board, &five, scale);
    Some((rank, best, unused))
}

/// An eight-or-better low takes five distinct ranks at or below eight, ace
/// low.
fn qualifies_eight_or_better(five: &[Card], scale: &FiveScale) -> bool {
    let mut ranks = 0u16;
    for card in five {
        if scale.level(card.rank()) > 7 {
            return false;
        }
        ranks |= 1 << card.rank() as u16;
    }

    ranks.count_ones() == 5
}

/// Enumerates the five card sets a selection shape allows, in the fixed
/// order of the combination generator.
fn five_card_sets(selection: Selection, pocket: &[Card], board: &[Card]) -> Vec<[Card; 5]> {
    match selection {
        Selection::PocketFive => {
            vec![[pocket[0], pocket[1], pocket[2], pocket[3], pocket[4]]]
        }
        Selection::AnyFive => {
            let cards: Vec<Card> = pocket.iter().chain(board).copied().collect();
            let mut sets = Vec::with_capacity(combos::nck(cards.len(), 5));
            combos::for_each_combination(cards.len(), 5, |s| {
                sets.push([cards[s[0]], cards[s[1]], cards[s[2]], cards[s[3]], cards[s[4]]]);
            });
            sets
        }
        Selection::TwoPlusThree => {
            let mut sets =
                Vec::with_capacity(combos::nck(pocket.len(), 2) * combos::nck(board.len(), 3));
            combos::for_each_combination(pocket.len(), 2, |p| {
                let pair = [pocket[p[0]], pocket[p[1]]];
                combos::for_each_combination(board.len(), 3, |b| {
                    sets.push([pair[0], pair[1], board[b[0]], board[b[1]], board[b[2]]]);
                });
            });
            sets
        }
        Selection::Badugi => unreachable!("badugi hands are scored by the badugi module"),
    }
}

/// Splits the side's candidate cards into the display-sorted best five and
/// the unused complement.
fn split_used(
    pocket: &[Card],
    board: &[Card],
    five: &[Card; 5],
    scale: &FiveScale,
) -> (Vec<Card>, Vec<Card>) {
    let candidates: Vec<Card> = pocket.iter().chain(board).copied().collect();

    let mut best = five.to_vec();
    sort_display(&mut best, scale);

    let mut unused = complement(&candidates, five);
    sort_display(&mut unused, scale);

    (best, unused)
}

fn complement(all: &[Card], used: &[Card]) -> Vec<Card> {
    all.iter().copied().filter(|c| !used.contains(c)).collect()
}

/// Sorts cards for display, strongest first on the side's scale with the
/// suit as a deterministic tie-break.
fn sort_display(cards: &mut [Card], scale: &FiveScale) {
    cards.sort_by_key(|c| Reverse((scale.level(c.rank()), c.suit_bits())));
}

fn scale_for(scoring: HiScoring) -> &'static FiveScale {
    match scoring {
        HiScoring::High => &scale::HIGH,
        HiScoring::DeuceToSevenLow => &scale::DEUCE_TO_SEVEN,
        HiScoring::AceToFiveLow | HiScoring::Badugi => &scale::ACE_TO_FIVE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    fn shown(cards: &[Card]) -> Vec<String> {
        cards.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn holdem_picks_the_best_five() {
        let hand = Hand::eval(
            Variant::Holdem,
            &cards("AH KH"),
            &cards("QH JH TH 2C 3D"),
        )
        .unwrap();

        assert_eq!(hand.hi_category(), Some(Category::StraightFlush));
        assert_eq!(hand.hi_rank().bits(), 0);
        assert_eq!(shown(hand.hi_best()), ["AH", "KH", "QH", "JH", "TH"]);
        assert_eq!(shown(hand.hi_unused()), ["3D", "2C"]);
        assert!(!hand.has_low());
        assert!(!hand.lo_rank().is_valid());
    }

    #[test]
    fn holdem_plays_the_board() {
        let hand = Hand::eval(
            Variant::Holdem,
            &cards("2C 3D"),
            &cards("AS KS QS JS TS"),
        )
        .unwrap();

        assert_eq!(hand.hi_rank().bits(), 0);
        assert_eq!(shown(hand.hi_best()), ["AS", "KS", "QS", "JS", "TS"]);
        assert_eq!(shown(hand.hi_unused()), ["3D", "2C"]);
    }

    #[test]
    fn holdem_partial_board() {
        // Evaluating on the flop takes the only five card set there is.
        let hand = Hand::eval(Variant::Holdem, &cards("AS AH"), &cards("AD KC KS")).unwrap();
        assert_eq!(hand.hi_category(), Some(Category::FullHouse));
        assert!(hand.hi_unused().is_empty());
    }

    #[test]
    fn evaluation_is_idempotent() {
        let pocket = cards("AH KH");
        let board = cards("QH JH TH 2C 3D");

        let first = Hand::eval(Variant::Holdem, &pocket, &board).unwrap();
        let second = Hand::eval(Variant::Holdem, &pocket, &board).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_bad_shapes() {
        let err = Hand::eval(Variant::Holdem, &cards("AS KS QS"), &cards("2C 3C 4C"))
            .unwrap_err()
            .to_string();
        assert!(err.contains("pocket"), "{err}");

        let err = Hand::eval(Variant::Holdem, &cards("AS KS"), &cards("2C 3C"))
            .unwrap_err()
            .to_string();
        assert!(err.contains("board"), "{err}");

        let err = Hand::eval(Variant::Badugi, &cards("AS KS QS JS"), &cards("2C"))
            .unwrap_err()
            .to_string();
        assert!(err.contains("board"), "{err}");
    }

    #[test]
    fn rejects_duplicates() {
        let err = Hand::eval(Variant::Holdem, &cards("AS AS"), &cards("2C 3C 4C"))
            .unwrap_err()
            .to_string();
        assert!(err.contains("duplicate card AS"), "{err}");

        let err = Hand::eval(Variant::Holdem, &cards("AS 2C"), &cards("2C 3C 4C"))
            .unwrap_err()
            .to_string();
        assert!(err.contains("duplicate card 2C"), "{err}");
    }

    #[test]
    fn omaha_uses_exactly_two_pocket_cards() {
        let pocket = cards("AH KD 3S 4S");
        let board = cards("2H 5H 9H JH QC");

        // Four board hearts and one pocket heart make no Omaha flush.
        let omaha = Hand::eval(Variant::Omaha, &pocket, &board).unwrap();
        assert_eq!(omaha.hi_category(), Some(Category::HighCard));

        // The same cards in Hold'em do flush.
        let holdem = Hand::eval(Variant::Holdem, &cards("AH KD"), &board).unwrap();
        assert_eq!(holdem.hi_category(), Some(Category::Flush));
    }

    #[test]
    fn five_card_omaha() {
        let hand = Hand::eval(
            Variant::FiveCardOmaha,
            &cards("AH KD 3S 4S 5D"),
            &cards("2H 5H 9H JH QC"),
        )
        .unwrap();

        // The extra pocket card pairs the board five.
        assert_eq!(hand.hi_category(), Some(Category::Pair));
    }

    #[test]
    fn omaha_hi_lo_finds_both_sides() {
        let hand = Hand::eval(
            Variant::OmahaHiLo,
            &cards("4C 5C KS QD"),
            &cards("AH 2S 3D TH JH"),
        )
        .unwrap();

        // Broadway plays hi while the wheel cards make the nut low.
        assert_eq!(hand.hi_category(), Some(Category::Straight));
        assert!(hand.has_low());
        assert_eq!(hand.lo_category(), Some(Category::HighCard));
        assert_eq!(shown(hand.lo_best()), ["5C", "4C", "3D", "2S", "AH"]);
        assert_eq!(hand.lo_rank(), scale::ACE_TO_FIVE.rank_of(&cards("5C 4C 3D 2S AH")));
    }

    #[test]
    fn omaha_hi_lo_without_board_lows() {
        let hand = Hand::eval(
            Variant::OmahaHiLo,
            &cards("AC 2C 3H 4H"),
            &cards("9H TH JH KS KD"),
        )
        .unwrap();

        // Fewer than three low board cards: no low is possible.
        assert!(!hand.has_low());
        assert!(!hand.lo_rank().is_valid());
        assert!(hand.lo_best().is_empty());
    }

    #[test]
    fn stud_partial_hands() {
        let five = Hand::eval(Variant::Stud, &cards("AS AH KD QC JS"), &[]).unwrap();
        assert_eq!(five.hi_category(), Some(Category::Pair));

        let six = Hand::eval(Variant::Stud, &cards("AS AH KD QC JS AD"), &[]).unwrap();
        assert_eq!(six.hi_category(), Some(Category::ThreeOfAKind));
    }

    #[test]
    fn razz_prefers_the_unpaired_low() {
        let hand = Hand::eval(Variant::Razz, &cards("2S 2H 3D 4C 5S 3H KD"), &[]).unwrap();

        // K-5-4-3-2 unpaired beats any paired five cards.
        assert_eq!(hand.hi_category(), Some(Category::HighCard));
        assert_eq!(shown(hand.hi_best()), ["KD", "5S", "4C", "3D", "2S"]);
    }

    #[test]
    fn razz_takes_a_pair_when_forced() {
        let hand = Hand::eval(Variant::Razz, &cards("2S 2H 3D 3H 4C 4S 5D"), &[]).unwrap();

        // Only four ranks among seven cards: the lowest pair plays.
        assert_eq!(hand.hi_category(), Some(Category::Pair));
        assert_eq!(shown(hand.hi_best()), ["5D", "4C", "3D", "2H", "2S"]);
    }

    #[test]
    fn deuce_to_seven_wheel_is_no_straight() {
        let best = Hand::eval(Variant::DeuceToSeven, &cards("7S 5H 4D 3C 2S"), &[]).unwrap();
        assert_eq!(best.hi_category(), Some(Category::HighCard));

        let ace = Hand::eval(Variant::DeuceToSeven, &cards("AS 5H 4D 3C 2S"), &[]).unwrap();
        assert_eq!(ace.hi_category(), Some(Category::HighCard));

        // Seven-five low beats the ace high hand once inverted.
        assert!(best.hi_key() < ace.hi_key());
    }

    #[test]
    fn ace_to_five_lowball() {
        let wheel = Hand::eval(Variant::AceToFive, &cards("5H 4D 3C 2S AH"), &[]).unwrap();
        assert_eq!(wheel.hi_category(), Some(Category::HighCard));
        assert_eq!(shown(wheel.hi_best()), ["5H", "4D", "3C", "2S", "AH"]);

        let six = Hand::eval(Variant::AceToFive, &cards("6H 4D 3C 2S AH"), &[]).unwrap();
        assert!(wheel.hi_key() < six.hi_key());
    }

    #[test]
    fn badugi_hand() {
        let four = Hand::eval(Variant::Badugi, &cards("AS 2H 3D 4C"), &[]).unwrap();
        assert_eq!(four.hi_category(), None);
        assert_eq!(four.hi_best().len(), 4);
        assert!(four.hi_unused().is_empty());

        let three = Hand::eval(Variant::Badugi, &cards("AS 2H 3H 4C"), &[]).unwrap();
        assert_eq!(three.hi_best().len(), 3);
        assert_eq!(three.hi_unused().len(), 1);
        assert!(four.hi_key() < three.hi_key());
    }

    #[test]
    fn double_board_evaluates_both_boards() {
        let hand = Hand::eval(
            Variant::DoubleBoardHoldem,
            &cards("AH AD"),
            &cards("AS KS QS 2C 3C 4H 5H 6H 7C 8C"),
        )
        .unwrap();

        // Trip aces on the first board, the board straight on the second.
        assert_eq!(hand.hi_category(), Some(Category::ThreeOfAKind));
        assert_eq!(hand.lo_category(), Some(Category::Straight));
        assert!(!hand.has_low());
        assert_eq!(shown(hand.lo_best()), ["8C", "7C", "6H", "5H", "4H"]);
    }
}
