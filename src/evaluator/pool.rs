use super::rank_groups::RankGroups;
use super::suit_info::SuitInfo;
use super::HAND_SIZE;
use crate::cards::{Card, Rank, Suit};

/// Owned snapshot of the player and table cards for one classifier call.
///
/// Naturals are sorted by rank descending; cards of equal rank keep their
/// pool order (player cards first, then table cards). Jokers keep pool order.
/// Any joker resolution left on an input card is dropped.
#[derive(Debug, Clone)]
pub struct Pool {
    naturals: Vec<Card>,
    jokers: Vec<Card>,
    rank_counts: [u8; 16],
}

impl Pool {
    pub fn new(player: &[Card], table: &[Card]) -> Self {
        let (mut naturals, jokers): (Vec<Card>, Vec<Card>) =
            player.iter().chain(table).map(|c| c.unresolved()).partition(|c| !c.is_joker());
        // stable: equal ranks stay in pool order
        naturals.sort_by(|a, b| b.rank().cmp(&a.rank()));

        let mut rank_counts = [0u8; 16];
        for card in &naturals {
            rank_counts[card.rank().value() as usize] += 1;
        }

        Self { naturals, jokers, rank_counts }
    }

    pub fn len(&self) -> usize {
        self.naturals.len() + self.jokers.len()
    }

    /// Enough cards to form a five-card hand.
    pub fn is_playable(&self) -> bool {
        self.len() >= HAND_SIZE
    }

    pub fn naturals(&self) -> &[Card] {
        &self.naturals
    }

    pub fn jokers(&self) -> &[Card] {
        &self.jokers
    }

    pub fn joker_count(&self) -> usize {
        self.jokers.len()
    }

    pub fn rank_groups(&self) -> RankGroups {
        RankGroups::from_counts(&self.rank_counts)
    }

    pub fn suit_info(&self) -> SuitInfo {
        SuitInfo::detect(&self.naturals)
    }

    /// Up to `n` naturals of `rank`, in pool order.
    pub fn take_rank(&self, rank: Rank, n: usize) -> Vec<Card> {
        self.naturals.iter().copied().filter(|c| c.rank() == rank).take(n).collect()
    }

    /// Up to `n` naturals of `suit`, highest first.
    pub fn take_suit(&self, suit: Suit, n: usize) -> Vec<Card> {
        self.naturals.iter().copied().filter(|c| c.suit() == suit).take(n).collect()
    }

    /// The first `n` jokers, each resolved to `rank`. The substitute suit is
    /// the joker's own color tag.
    pub fn jokers_as(&self, rank: Rank, n: usize) -> Vec<Card> {
        self.jokers.iter().take(n).map(|j| j.substituted(rank, j.suit())).collect()
    }

    /// Up to `n` naturals not already in `used`, highest first.
    pub fn kickers(&self, used: &[Card], n: usize) -> Vec<Card> {
        self.naturals.iter().copied().filter(|c| !used.contains(c)).take(n).collect()
    }
}

/// Sum of the ranks of `cards`, reading resolved jokers at their substitute rank.
pub fn rank_sum(cards: &[Card]) -> u32 {
    cards.iter().map(|c| c.effective_rank().value() as u32).sum()
}
