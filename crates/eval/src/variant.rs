// Copyright (C) 2025 Splitpot Developers
// SPDX-License-Identifier: Apache-2.0

//! Game variants and their evaluation capabilities.
use serde::{Deserialize, Serialize};
use std::{fmt, ops::RangeInclusive, str::FromStr};

/// A Poker game variant.
///
/// The variant fixes how many pocket and board cards a hand takes, how the
/// best five cards are selected, which ordering scores the hand, and whether
/// the pot has a second side (a qualifying low hand or a second board). The
/// set is closed: every capability is an exhaustive match, adding a variant
/// means deciding each one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// Texas Hold'em.
    Holdem,
    /// Texas Hold'em dealt with two boards, the pot splits between them.
    DoubleBoardHoldem,
    /// Omaha, exactly two pocket cards play.
    Omaha,
    /// Omaha with five pocket cards.
    FiveCardOmaha,
    /// Omaha split-pot with an eight-or-better low.
    OmahaHiLo,
    /// Seven card stud.
    Stud,
    /// Seven card stud split-pot with an eight-or-better low.
    StudHiLo,
    /// Seven card stud played for the ace-to-five low only.
    Razz,
    /// Five card draw.
    FiveCardDraw,
    /// Deuce-to-seven lowball.
    DeuceToSeven,
    /// Ace-to-five lowball.
    AceToFive,
    /// Badugi.
    Badugi,
}

/// How the best cards are selected from pocket and board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Selection {
    /// Best five of all candidate cards.
    AnyFive,
    /// Exactly two pocket cards and three board cards.
    TwoPlusThree,
    /// The five pocket cards are the hand.
    PocketFive,
    /// Largest pocket subset with pairwise distinct ranks and suits.
    Badugi,
}

/// The base ordering a variant's hi side is scored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HiScoring {
    /// Standard high ordering.
    High,
    /// Deuce-to-seven lowball: high ordering without the wheel, inverted.
    DeuceToSevenLow,
    /// Ace-to-five lowball: ace low, no straights or flushes, inverted.
    AceToFiveLow,
    /// Badugi ordering.
    Badugi,
}

/// The second side of a split pot, when the variant has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SecondSide {
    /// An ace-to-five low that must qualify with five distinct ranks at or
    /// below eight.
    EightOrBetter,
    /// The high ordering of the second board.
    Board,
}

impl Variant {
    /// All variants, in a fixed order usable by drivers and tools.
    pub fn all() -> [Variant; 12] {
        use Variant::*;
        [
            Holdem,
            DoubleBoardHoldem,
            Omaha,
            FiveCardOmaha,
            OmahaHiLo,
            Stud,
            StudHiLo,
            Razz,
            FiveCardDraw,
            DeuceToSeven,
            AceToFive,
            Badugi,
        ]
    }

    /// Accepted pocket cardinalities.
    pub fn pocket_range(&self) -> RangeInclusive<usize> {
        match self {
            Variant::Holdem | Variant::DoubleBoardHoldem => 2..=2,
            Variant::Omaha | Variant::OmahaHiLo | Variant::Badugi => 4..=4,
            Variant::FiveCardOmaha => 5..=5,
            Variant::Stud | Variant::StudHiLo | Variant::Razz => 5..=7,
            Variant::FiveCardDraw | Variant::DeuceToSeven | Variant::AceToFive => 5..=5,
        }
    }

    /// Accepted board cardinalities; variants with no board accept only 0.
    pub fn board_sizes(&self) -> &'static [usize] {
        match self {
            Variant::Holdem | Variant::Omaha | Variant::FiveCardOmaha | Variant::OmahaHiLo => {
                &[3, 4, 5]
            }
            // Two boards dealt street by street, always the same length.
            Variant::DoubleBoardHoldem => &[6, 8, 10],
            Variant::Stud
            | Variant::StudHiLo
            | Variant::Razz
            | Variant::FiveCardDraw
            | Variant::DeuceToSeven
            | Variant::AceToFive
            | Variant::Badugi => &[0],
        }
    }

    /// How the hi side picks its cards.
    pub(crate) fn selection(&self) -> Selection {
        match self {
            Variant::Holdem
            | Variant::DoubleBoardHoldem
            | Variant::Stud
            | Variant::StudHiLo
            | Variant::Razz => Selection::AnyFive,
            Variant::Omaha | Variant::FiveCardOmaha | Variant::OmahaHiLo => Selection::TwoPlusThree,
            Variant::FiveCardDraw | Variant::DeuceToSeven | Variant::AceToFive => {
                Selection::PocketFive
            }
            Variant::Badugi => Selection::Badugi,
        }
    }

    /// The ordering the hi side is scored on.
    pub(crate) fn hi_scoring(&self) -> HiScoring {
        match self {
            Variant::Razz | Variant::AceToFive => HiScoring::AceToFiveLow,
            Variant::DeuceToSeven => HiScoring::DeuceToSevenLow,
            Variant::Badugi => HiScoring::Badugi,
            _ => HiScoring::High,
        }
    }

    /// Whether hi comparisons invert the scored rank, so that the weakest
    /// hand on the base ordering wins.
    pub(crate) fn hi_inverted(&self) -> bool {
        matches!(
            self.hi_scoring(),
            HiScoring::DeuceToSevenLow | HiScoring::AceToFiveLow
        )
    }

    /// The second side of the pot, if the variant has one.
    pub(crate) fn second_side(&self) -> Option<SecondSide> {
        match self {
            Variant::OmahaHiLo | Variant::StudHiLo => Some(SecondSide::EightOrBetter),
            Variant::DoubleBoardHoldem => Some(SecondSide::Board),
            _ => None,
        }
    }

    /// Whether the variant has a qualifying low side.
    pub fn has_low(&self) -> bool {
        matches!(self.second_side(), Some(SecondSide::EightOrBetter))
    }

    /// Whether the variant is played across two boards.
    pub fn is_double_board(&self) -> bool {
        matches!(self.second_side(), Some(SecondSide::Board))
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variant::Holdem => "holdem",
            Variant::DoubleBoardHoldem => "double-board-holdem",
            Variant::Omaha => "omaha",
            Variant::FiveCardOmaha => "five-card-omaha",
            Variant::OmahaHiLo => "omaha-hi-lo",
            Variant::Stud => "stud",
            Variant::StudHiLo => "stud-hi-lo",
            Variant::Razz => "razz",
            Variant::FiveCardDraw => "five-card-draw",
            Variant::DeuceToSeven => "deuce-to-seven",
            Variant::AceToFive => "ace-to-five",
            Variant::Badugi => "badugi",
        };

        write!(f, "{name}")
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::all()
            .into_iter()
            .find(|v| v.to_string() == s)
            .ok_or_else(|| format!("unknown variant {s:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for variant in Variant::all() {
            assert_eq!(variant.to_string().parse::<Variant>(), Ok(variant));
        }

        assert!("seven-deuce".parse::<Variant>().is_err());
    }

    #[test]
    fn capabilities_are_consistent() {
        for variant in Variant::all() {
            assert!(!variant.pocket_range().is_empty());
            assert!(!variant.board_sizes().is_empty());

            // A variant has at most one kind of second side.
            assert!(!(variant.has_low() && variant.is_double_board()));

            // Board variants take at least three board cards, the rest none.
            if variant.selection() == Selection::TwoPlusThree {
                assert!(variant.board_sizes().iter().all(|&n| n >= 3));
            }
        }

        assert!(Variant::OmahaHiLo.has_low());
        assert!(Variant::StudHiLo.has_low());
        assert!(Variant::DoubleBoardHoldem.is_double_board());
        assert!(Variant::Razz.hi_inverted());
        assert!(Variant::DeuceToSeven.hi_inverted());
        assert!(Variant::AceToFive.hi_inverted());
        assert!(!Variant::Badugi.hi_inverted());
    }
}
