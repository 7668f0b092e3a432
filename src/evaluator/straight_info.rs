use crate::cards::Rank;

const FIVE_IN_A_ROW: u16 = 0b1_1111;
/// A-2-3-4-5: Ace bit plus the four lowest.
const WHEEL: u16 = (1 << 12) | 0b1111;

/// Whether five ranks form a straight, and its top rank (Five for the wheel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    /// Detect from per-rank counts indexed by [`Rank::index`].
    pub fn detect(rank_counts: &[u8; 13]) -> Self {
        let mask = rank_counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .fold(0u16, |m, (i, _)| m | (1 << i));

        if mask.count_ones() != 5 {
            return StraightInfo { top_rank: None };
        }
        if mask == WHEEL {
            return StraightInfo { top_rank: Some(Rank::Five) };
        }
        let low = mask.trailing_zeros();
        let top_rank = (mask >> low == FIVE_IN_A_ROW)
            .then(|| Rank::from_index(low as u8 + 4))
            .flatten();
        StraightInfo { top_rank }
    }

    pub fn is_straight(&self) -> bool {
        self.top_rank.is_some()
    }

    pub fn is_wheel(&self) -> bool {
        self.top_rank == Some(Rank::Five)
    }
}
