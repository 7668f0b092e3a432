//! Five-to-seven card hand evaluation.
//!
//! Every hand maps to a single [`Strength`] where lower is better. Two hands tie
//! exactly when their strengths are equal, so showdown only ever needs integer
//! comparison.

pub(crate) mod combinations;
pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::{Card, Rank};
use core::cmp::Ordering;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Spacing between categories in the strength scale.
pub const STRENGTH_MULTIPLIER: u32 = 1_000_000;

const KICKER_RADIX: u32 = 13;
const MAX_KICKERS: u32 = 5;

/// Exclusive upper bound of any kicker encoding (`13^5`).
pub const KICKER_SPAN: u32 = KICKER_RADIX.pow(MAX_KICKERS);

// Kicker encodings must never spill into the neighbouring category.
const _: () = assert!(KICKER_SPAN <= STRENGTH_MULTIPLIER);

/// Hand categories. The discriminant is the category rank used by the strength
/// formula: 10 for a royal flush down to 1 for high card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    pub const fn rank(self) -> u32 {
        self as u32
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }

    /// Upper-case wire token, e.g. `"FULL_HOUSE"`.
    pub const fn token(self) -> &'static str {
        match self {
            Category::HighCard => "HIGH_CARD",
            Category::OnePair => "ONE_PAIR",
            Category::TwoPair => "TWO_PAIR",
            Category::ThreeOfAKind => "THREE_OF_A_KIND",
            Category::Straight => "STRAIGHT",
            Category::Flush => "FLUSH",
            Category::FullHouse => "FULL_HOUSE",
            Category::FourOfAKind => "FOUR_OF_A_KIND",
            Category::StraightFlush => "STRAIGHT_FLUSH",
            Category::RoyalFlush => "ROYAL_FLUSH",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Comparable hand strength. Lower is better; a royal flush is 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Strength(u32);

impl Strength {
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// `(10 - category_rank) * M + kicker_value`, where the kicker value reads
    /// the deciding ranks as base-13 digits with Ace = 0 through Two = 12.
    pub fn from_parts(category: Category, kickers: &[Rank]) -> Self {
        debug_assert!(kickers.len() <= MAX_KICKERS as usize);
        let kicker_value = kickers.iter().fold(0u32, |acc, r| {
            acc * KICKER_RADIX + u32::from(Rank::Ace.value() - r.value())
        });
        Strength((Category::RoyalFlush.rank() - category.rank()) * STRENGTH_MULTIPLIER + kicker_value)
    }
}

/// Result of evaluating a hand.
///
/// Equality and ordering follow [`Strength`], so the smaller evaluation is the
/// stronger hand.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Evaluation {
    pub category: Category,
    /// The five cards that make the hand, in display order.
    pub best_five: [Card; 5],
    strength: Strength,
}

impl Evaluation {
    pub const fn strength(&self) -> Strength {
        self.strength
    }

    /// Human-readable description, e.g. "Full House, Kings full of Queens".
    pub fn description(&self) -> String {
        let r = |i: usize| self.best_five[i].rank();
        match self.category {
            Category::RoyalFlush => "Royal Flush".to_string(),
            Category::StraightFlush => format!("Straight Flush, {} high", r(0).name()),
            Category::FourOfAKind => format!("Four of a Kind, {}", r(0).plural()),
            Category::FullHouse => {
                format!("Full House, {} full of {}", r(0).plural(), r(3).plural())
            }
            Category::Flush => format!("Flush, {} high", r(0).name()),
            Category::Straight if r(0) == Rank::Five => "Straight, Five high (Wheel)".to_string(),
            Category::Straight => format!("Straight, {} high", r(0).name()),
            Category::ThreeOfAKind => format!("Three of a Kind, {}", r(0).plural()),
            Category::TwoPair => format!("Two Pair, {} and {}", r(0).plural(), r(2).plural()),
            Category::OnePair => format!("Pair of {}", r(0).plural()),
            Category::HighCard => format!("High Card, {}", r(0).name()),
        }
    }
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.strength.cmp(&other.strength)
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.strength == other.strength
    }
}

impl Eq for Evaluation {}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("invalid hand size: expected 5 to 7 cards, got {0}")]
    InvalidHandSize(usize),
}

/// Evaluate the best five-card hand from 5, 6 or 7 cards.
///
/// For more than five cards every five-card subset is tried; on equal strength
/// the first subset in lexicographic order is kept.
///
/// ```
/// use holdem_rs::cards::parse_cards;
/// use holdem_rs::evaluator::{evaluate, Category};
///
/// let cards = parse_cards("As Ah Qc Jd 9h 3s 2c").unwrap();
/// let eval = evaluate(&cards).unwrap();
/// assert_eq!(eval.category, Category::OnePair);
/// assert_eq!(eval.description(), "Pair of Aces");
/// ```
pub fn evaluate(cards: &[Card]) -> Result<Evaluation, EvalError> {
    use combinations::FiveCardSubsets;

    if !(5..=7).contains(&cards.len()) {
        return Err(EvalError::InvalidHandSize(cards.len()));
    }

    let mut best: Option<Evaluation> = None;
    for idx in FiveCardSubsets::new(cards.len()) {
        let hand = [cards[idx[0]], cards[idx[1]], cards[idx[2]], cards[idx[3]], cards[idx[4]]];
        let eval = evaluate_five(&hand);
        if best.map_or(true, |b| eval.strength < b.strength) {
            best = Some(eval);
        }
    }
    best.ok_or(EvalError::InvalidHandSize(cards.len()))
}

/// Evaluate exactly five cards.
pub fn evaluate_five(cards: &[Card; 5]) -> Evaluation {
    use detector::{HighCardDetector, DETECTORS};
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(cards);
    DETECTORS
        .iter()
        .find_map(|detector| detector.detect(&analysis))
        .unwrap_or_else(|| HighCardDetector::evaluation(&analysis))
}

/// Three-way comparison by strength. `Ordering::Less` means `a` is the stronger hand.
///
/// ```
/// use holdem_rs::cards::parse_cards;
/// use holdem_rs::evaluator::compare;
/// use std::cmp::Ordering;
///
/// let aces = parse_cards("As Ah Kd Qc Jd 9h 3s").unwrap();
/// let kings = parse_cards("Ks Kh Kd Qc Jd 9h 3s").unwrap();
/// assert_eq!(compare(&aces, &kings).unwrap(), Ordering::Greater);
/// ```
pub fn compare(a: &[Card], b: &[Card]) -> Result<Ordering, EvalError> {
    Ok(evaluate(a)?.strength.cmp(&evaluate(b)?.strength))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn eval(s: &str) -> Evaluation {
        evaluate(&parse_cards(s).unwrap()).unwrap()
    }

    #[test]
    fn royal_flush_is_strength_zero() {
        let e = eval("As Ks Qs Js Ts");
        assert_eq!(e.category, Category::RoyalFlush);
        assert_eq!(e.strength().raw(), 0);
    }

    #[test]
    fn worst_high_card_stays_inside_its_band() {
        let e = eval("7c 5d 4h 3s 2c");
        assert_eq!(e.category, Category::HighCard);
        assert!(e.strength().raw() < 10 * STRENGTH_MULTIPLIER);
        assert!(e.strength().raw() >= 9 * STRENGTH_MULTIPLIER);
    }

    #[test]
    fn invalid_sizes_are_rejected() {
        let four = parse_cards("As Ks Qs Js").unwrap();
        assert_eq!(evaluate(&four), Err(EvalError::InvalidHandSize(4)));
        let eight = parse_cards("As Ks Qs Js Ts 9s 8s 7s").unwrap();
        assert_eq!(evaluate(&eight), Err(EvalError::InvalidHandSize(8)));
    }

    #[test]
    fn best_five_uses_display_order() {
        let full = eval("Qc Kd Qh Ks Kh");
        let ranks: Vec<Rank> = full.best_five.iter().map(|c| c.rank()).collect();
        assert_eq!(ranks, vec![Rank::King, Rank::King, Rank::King, Rank::Queen, Rank::Queen]);

        let wheel = eval("Ah 2c 3d 4s 5h");
        assert_eq!(wheel.best_five[0].rank(), Rank::Five);
        assert_eq!(wheel.best_five[4].rank(), Rank::Ace);
    }

    #[test]
    fn descriptions_name_the_deciding_ranks() {
        assert_eq!(eval("As Ks Qs Js Ts").description(), "Royal Flush");
        assert_eq!(eval("9h 8h 7h 6h 5h").description(), "Straight Flush, Nine high");
        assert_eq!(eval("Kc Kd Ks Kh 2c").description(), "Four of a Kind, Kings");
        assert_eq!(eval("Qc Kd Qh Ks Kh").description(), "Full House, Kings full of Queens");
        assert_eq!(eval("Ad Jd 9d 5d 2d").description(), "Flush, Ace high");
        assert_eq!(eval("Ah 2c 3d 4s 5h").description(), "Straight, Five high (Wheel)");
        assert_eq!(eval("Th 9c 8d 7s 6h").description(), "Straight, Ten high");
        assert_eq!(eval("6h 6c 6d As 2h").description(), "Three of a Kind, Sixes");
        assert_eq!(eval("Ah Ac Kd Ks 2h").description(), "Two Pair, Aces and Kings");
        assert_eq!(eval("Jh Jc 9d 7s 3h").description(), "Pair of Jacks");
        assert_eq!(eval("Ah Kc Jd 9s 7h").description(), "High Card, Ace");
    }

    #[test]
    fn seven_cards_pick_the_strongest_subset() {
        let e = eval("2c 3c 4c 5c 6c Ac Ad");
        assert_eq!(e.category, Category::StraightFlush);
        assert_eq!(e.best_five[0].rank(), Rank::Six);
    }

    #[test]
    fn compare_reports_stronger_first_as_less() {
        let flush = parse_cards("Ad Jd 9d 5d 2d").unwrap();
        let straight = parse_cards("Th 9c 8d 7s 6h").unwrap();
        assert_eq!(compare(&flush, &straight).unwrap(), Ordering::Less);
        assert_eq!(compare(&straight, &straight).unwrap(), Ordering::Equal);
    }
}
