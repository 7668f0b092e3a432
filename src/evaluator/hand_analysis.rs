use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};
use crate::evaluator::{Category, Evaluation, Strength};

/// Pre-computed facts about a 5-card hand, shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    /// Cards in display order: larger groups first, then higher ranks. A wheel
    /// reads 5-4-3-2-A.
    pub ordered: [Card; 5],
    /// Ranks of `ordered`, position for position.
    pub ranks: [Rank; 5],
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        let mut rank_counts = [0u8; 13];
        for card in cards {
            rank_counts[card.rank().index() as usize] += 1;
        }
        let rank_groups = RankGroups::from_counts(&rank_counts);
        let straight_info = StraightInfo::detect(&rank_counts);
        let suit_info = SuitInfo::detect(cards);

        let mut ordered = *cards;
        ordered.sort_by(|a, b| {
            rank_groups
                .count_of(b.rank())
                .cmp(&rank_groups.count_of(a.rank()))
                .then(b.rank().cmp(&a.rank()))
                .then(b.suit().cmp(&a.suit()))
        });
        if straight_info.is_wheel() {
            ordered.rotate_left(1);
        }
        let ranks = ordered.map(|c| c.rank());

        Self { ordered, ranks, rank_groups, suit_info, straight_info }
    }

    /// Build an evaluation from a category and its deciding ranks, most significant first.
    pub fn build_evaluation(&self, category: Category, kickers: &[Rank]) -> Evaluation {
        Evaluation { category, best_five: self.ordered, strength: Strength::from_parts(category, kickers) }
    }
}
