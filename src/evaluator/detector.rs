use super::hand_analysis::HandAnalysis;
use crate::cards::Rank;
use crate::evaluator::{Category, Evaluation};

/// Each detector recognises one category and, on a match, builds its evaluation
/// with the category's deciding ranks.
pub trait CategoryDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<Evaluation>;
}

/// Straight flush, promoted to royal flush when Ace-high.
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn detect(&self, a: &HandAnalysis) -> Option<Evaluation> {
        if !a.suit_info.is_flush() {
            return None;
        }
        let top = a.straight_info.top_rank?;
        let category = if top == Rank::Ace { Category::RoyalFlush } else { Category::StraightFlush };
        Some(a.build_evaluation(category, &[top]))
    }
}

pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn detect(&self, a: &HandAnalysis) -> Option<Evaluation> {
        a.rank_groups
            .has_quad()
            .then(|| a.build_evaluation(Category::FourOfAKind, &[a.ranks[0], a.ranks[4]]))
    }
}

pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn detect(&self, a: &HandAnalysis) -> Option<Evaluation> {
        a.rank_groups
            .has_full_house()
            .then(|| a.build_evaluation(Category::FullHouse, &[a.ranks[0], a.ranks[3]]))
    }
}

pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn detect(&self, a: &HandAnalysis) -> Option<Evaluation> {
        a.suit_info.is_flush().then(|| a.build_evaluation(Category::Flush, &a.ranks))
    }
}

pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn detect(&self, a: &HandAnalysis) -> Option<Evaluation> {
        let top = a.straight_info.top_rank?;
        Some(a.build_evaluation(Category::Straight, &[top]))
    }
}

pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn detect(&self, a: &HandAnalysis) -> Option<Evaluation> {
        a.rank_groups
            .has_trips()
            .then(|| a.build_evaluation(Category::ThreeOfAKind, &[a.ranks[0], a.ranks[3], a.ranks[4]]))
    }
}

pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn detect(&self, a: &HandAnalysis) -> Option<Evaluation> {
        (a.rank_groups.pair_count() == 2)
            .then(|| a.build_evaluation(Category::TwoPair, &[a.ranks[0], a.ranks[2], a.ranks[4]]))
    }
}

pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn detect(&self, a: &HandAnalysis) -> Option<Evaluation> {
        (a.rank_groups.pair_count() == 1).then(|| {
            a.build_evaluation(Category::OnePair, &[a.ranks[0], a.ranks[2], a.ranks[3], a.ranks[4]])
        })
    }
}

pub struct HighCardDetector;

impl HighCardDetector {
    pub fn evaluation(a: &HandAnalysis) -> Evaluation {
        a.build_evaluation(Category::HighCard, &a.ranks)
    }
}

impl CategoryDetector for HighCardDetector {
    fn detect(&self, a: &HandAnalysis) -> Option<Evaluation> {
        Some(Self::evaluation(a))
    }
}

/// Checked in order; the first match wins. Trips come after full house, so a
/// `has_trips` hit there is always plain three of a kind.
pub const DETECTORS: [&dyn CategoryDetector; 9] = [
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Card};

    fn analyse(s: &str) -> HandAnalysis {
        let v: Vec<Card> = parse_cards(s).unwrap();
        HandAnalysis::new(&[v[0], v[1], v[2], v[3], v[4]])
    }

    fn first_match(s: &str) -> Category {
        let a = analyse(s);
        DETECTORS.iter().find_map(|d| d.detect(&a)).unwrap().category
    }

    #[test]
    fn each_category_is_found_first() {
        assert_eq!(first_match("As Ks Qs Js Ts"), Category::RoyalFlush);
        assert_eq!(first_match("9h 8h 7h 6h 5h"), Category::StraightFlush);
        assert_eq!(first_match("5d 4d 3d 2d Ad"), Category::StraightFlush);
        assert_eq!(first_match("As Ah Ad Ac Ks"), Category::FourOfAKind);
        assert_eq!(first_match("Ks Kh Kd Qc Qs"), Category::FullHouse);
        assert_eq!(first_match("Ad Jd 9d 5d 2d"), Category::Flush);
        assert_eq!(first_match("9s 8h 7d 6c 5s"), Category::Straight);
        assert_eq!(first_match("Js Jh Jd 9c 7s"), Category::ThreeOfAKind);
        assert_eq!(first_match("As Ah Kd Kc Qs"), Category::TwoPair);
        assert_eq!(first_match("Js Jh 9d 7c 3s"), Category::OnePair);
        assert_eq!(first_match("As Kh Jd 9c 7s"), Category::HighCard);
    }

    #[test]
    fn straight_flush_also_satisfies_weaker_detectors() {
        let a = analyse("9h 8h 7h 6h 5h");
        assert!(FlushDetector.detect(&a).is_some());
        assert!(StraightDetector.detect(&a).is_some());
        assert!(TwoPairDetector.detect(&a).is_none());
    }

    #[test]
    fn kicker_decides_within_a_category() {
        let a = analyse("Js Jh Ad 7c 3s");
        let b = analyse("Jd Jc Kd 7h 3h");
        let ea = OnePairDetector.detect(&a).unwrap();
        let eb = OnePairDetector.detect(&b).unwrap();
        assert!(ea.strength() < eb.strength());
    }
}
