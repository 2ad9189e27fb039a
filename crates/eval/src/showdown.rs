// Copyright (C) 2025 Splitpot Developers
// SPDX-License-Identifier: Apache-2.0

//! Showdown ordering and win resolution.
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::hand::Hand;

/// Compares the hi sides of two hands of the same variant; `Less` means `a`
/// is the stronger hand.
pub fn compare_hi(a: &Hand, b: &Hand) -> Ordering {
    debug_assert_eq!(a.variant(), b.variant(), "hands of different variants");
    a.hi_key().cmp(&b.hi_key())
}

/// Compares the lo sides of two hands of the same variant; hands without a
/// qualifying low compare as the weakest possible value.
pub fn compare_lo(a: &Hand, b: &Hand) -> Ordering {
    debug_assert_eq!(a.variant(), b.variant(), "hands of different variants");
    a.lo_key().cmp(&b.lo_key())
}

/// One side's ordering of a showdown: the index permutation of the hands,
/// strongest first, and the pivot counting the hands tied for best.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideOrder {
    order: Vec<usize>,
    pivot: usize,
}

impl SideOrder {
    /// The hand indices sorted strongest first; equal hands keep their
    /// input order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Number of leading hands tied for best, 0 for an empty side.
    pub fn pivot(&self) -> usize {
        self.pivot
    }

    /// The indices of the hands tied for best.
    pub fn winners(&self) -> &[usize] {
        &self.order[..self.pivot]
    }
}

fn order_by_key<F>(hands: &[Hand], key: F) -> SideOrder
where
    F: Fn(&Hand) -> u32,
{
    let mut order: Vec<usize> = (0..hands.len()).collect();
    // Stable: hands with equal keys stay in input order.
    order.sort_by_key(|&i| key(&hands[i]));

    let pivot = match order.first() {
        Some(&first) => {
            let best = key(&hands[first]);
            order
                .iter()
                .take_while(|&&i| key(&hands[i]) == best)
                .count()
        }
        None => 0,
    };

    SideOrder { order, pivot }
}

/// Orders a showdown's hands by their hi side, strongest first.
///
/// Empty input yields an empty permutation and pivot 0.
pub fn order_hi(hands: &[Hand]) -> SideOrder {
    order_by_key(hands, Hand::hi_key)
}

/// Orders a showdown's hands by their lo side, strongest first.
///
/// Hands without a qualifying low sort last; if the best hand has no
/// qualifying low the pivot is forced to 0 regardless of how many hands tie
/// for it.
pub fn order_lo(hands: &[Hand]) -> SideOrder {
    let mut side = order_by_key(hands, Hand::lo_key);

    if let Some(&first) = side.order.first() {
        if hands[first].lo_key() == u32::MAX {
            side.pivot = 0;
        }
    }

    side
}

/// The verb class of a side's outcome, for human readable summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinKind {
    /// One hand wins outright.
    Wins,
    /// Two hands split.
    Splits,
    /// More than two hands push.
    Pushes,
    /// One hand takes both sides of the pot.
    Scoops,
}

impl WinKind {
    fn from_pivot(pivot: usize) -> WinKind {
        match pivot {
            0 | 1 => WinKind::Wins,
            2 => WinKind::Splits,
            _ => WinKind::Pushes,
        }
    }
}

impl fmt::Display for WinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            WinKind::Wins => "wins",
            WinKind::Splits => "splits",
            WinKind::Pushes => "pushes",
            WinKind::Scoops => "scoops",
        };

        write!(f, "{verb}")
    }
}

/// The resolved outcome of one showdown.
///
/// Payout math belongs to the caller; the win only fixes the orderings, the
/// winner counts, and the scoop flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Win {
    hi: SideOrder,
    lo: SideOrder,
    low: bool,
    scoop: bool,
}

impl Win {
    /// The hi side ordering.
    pub fn hi(&self) -> &SideOrder {
        &self.hi
    }

    /// The hi index permutation, strongest first.
    pub fn hi_order(&self) -> &[usize] {
        self.hi.order()
    }

    /// Number of hands tied for the hi side.
    pub fn hi_pivot(&self) -> usize {
        self.hi.pivot()
    }

    /// The second side ordering; empty when no low qualifies or the variant
    /// has a single side.
    pub fn lo(&self) -> &SideOrder {
        &self.lo
    }

    /// The lo index permutation, empty when the side is not won.
    pub fn lo_order(&self) -> &[usize] {
        self.lo.order()
    }

    /// Number of hands tied for the lo side, 0 when the side is not won.
    pub fn lo_pivot(&self) -> usize {
        self.lo.pivot()
    }

    /// Whether the second side is a true qualifying low, as opposed to the
    /// hi ordering of a second board or no side at all.
    pub fn uses_low(&self) -> bool {
        self.low
    }

    /// Whether a single hand takes the whole pot: it wins the hi side alone
    /// and either nobody qualifies for the low or it wins the second side
    /// alone too.
    pub fn is_scoop(&self) -> bool {
        self.scoop
    }

    /// The overall verb for a non-empty showdown.
    pub fn kind(&self) -> WinKind {
        if self.scoop {
            WinKind::Scoops
        } else {
            WinKind::from_pivot(self.hi.pivot())
        }
    }

    /// The hi side verb.
    pub fn hi_kind(&self) -> WinKind {
        WinKind::from_pivot(self.hi.pivot())
    }

    /// The lo side verb, `None` when the side is not won.
    pub fn lo_kind(&self) -> Option<WinKind> {
        (self.lo.pivot() > 0).then(|| WinKind::from_pivot(self.lo.pivot()))
    }
}

/// Resolves a showdown into its [Win].
///
/// `low` asks for the variant's second side (qualifying low or second
/// board) to be resolved as well; it is ignored for single-sided variants.
/// Empty input degrades to an empty win.
pub fn resolve_win(hands: &[Hand], low: bool) -> Win {
    let hi = order_hi(hands);

    let variant_low = hands.first().is_some_and(|h| h.variant().has_low());
    let second = low
        && hands
            .first()
            .is_some_and(|h| h.variant().has_low() || h.variant().is_double_board());

    let mut lo = if second {
        order_lo(hands)
    } else {
        SideOrder::default()
    };
    if lo.pivot == 0 {
        lo = SideOrder::default();
    }

    let uses_low = low && variant_low;
    let scoop = (uses_low && hi.pivot == 1 && lo.pivot == 0)
        || (hi.pivot == 1 && lo.pivot == 1 && hi.order[0] == lo.order[0]);

    Win {
        hi,
        lo,
        low: uses_low,
        scoop,
    }
}
