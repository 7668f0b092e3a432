use crate::cards::Rank;

/// Ranks grouped by multiplicity, sorted by (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Build from per-rank counts indexed by [`Rank::index`].
    pub fn from_counts(rank_counts: &[u8; 13]) -> Self {
        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .map(|&r| (r, rank_counts[r.index() as usize]))
            .filter(|&(_, count)| count > 0)
            .collect();
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
        Self { groups }
    }

    /// Multiplicity of `rank` in the hand.
    pub fn count_of(&self, rank: Rank) -> u8 {
        self.groups.iter().find(|(r, _)| *r == rank).map_or(0, |(_, c)| *c)
    }

    /// The counts alone, largest first. A full house reads `[3, 2]`.
    pub fn shape(&self) -> Vec<u8> {
        self.groups.iter().map(|(_, c)| *c).collect()
    }

    pub fn has_quad(&self) -> bool {
        self.shape().first() == Some(&4)
    }

    pub fn has_full_house(&self) -> bool {
        self.shape() == [3, 2]
    }

    pub fn has_trips(&self) -> bool {
        self.shape().first() == Some(&3)
    }

    pub fn pair_count(&self) -> usize {
        self.groups.iter().filter(|(_, c)| *c == 2).count()
    }
}
