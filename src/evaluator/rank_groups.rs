use crate::cards::Rank;

/// Groups natural ranks by their frequency in a pool, sorted by (count desc, rank desc).
/// Jokers are never counted.
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Create RankGroups from a rank count array.
    /// The array should be indexed by rank value (2-14).
    pub fn from_counts(rank_counts: &[u8; 16]) -> Self {
        let mut groups = Vec::new();

        for rank in Rank::ALL.iter().copied() {
            let count = rank_counts[rank.value() as usize];
            if count > 0 {
                groups.push((rank, count));
            }
        }

        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { groups }
    }

    /// How many natural cards of `rank` the pool holds.
    pub fn count(&self, rank: Rank) -> u8 {
        self.groups.iter().find(|(r, _)| *r == rank).map_or(0, |(_, count)| *count)
    }

    /// Ranks holding at least `size` cards, highest rank first.
    pub fn at_least(&self, size: u8) -> Vec<Rank> {
        let mut ranks: Vec<Rank> =
            self.groups.iter().filter(|(_, count)| *count >= size).map(|(rank, _)| *rank).collect();
        ranks.sort_by(|a, b| b.cmp(a));
        ranks
    }

    /// Highest rank holding at least `size` cards.
    pub fn highest_at_least(&self, size: u8) -> Option<Rank> {
        self.at_least(size).first().copied()
    }

    /// Every rank present, highest first.
    pub fn ranks_desc(&self) -> Vec<Rank> {
        self.at_least(1)
    }

    /// Returns the internal groups for debugging/testing.
    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}
