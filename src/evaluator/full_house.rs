use super::pool::Pool;
use super::{Category, Classifier, Evaluation};
use crate::cards::{Card, Rank};

/// Full House: three cards of one rank and two of another.
///
/// Jokers top up either group, but each group keeps at least one natural
/// card. Every (three, pair) rank combination the jokers can reach is scored
/// and the best one wins; on equal scores the higher three wins.
pub struct FullHouse;

impl Classifier for FullHouse {
    fn category(&self) -> Category {
        Category::FullHouse
    }

    fn check(&self, player: &[Card], table: &[Card]) -> Evaluation {
        let pool = Pool::new(player, table);
        if !pool.is_playable() {
            return Evaluation::no_match();
        }
        match best_shape(&pool) {
            Some(shape) => Evaluation::winning(Category::FullHouse, shape.value(), shape.cards(&pool)),
            None => Evaluation::no_match(),
        }
    }
}

/// A reachable full house: the two ranks and how many jokers each group borrows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Shape {
    three: Rank,
    pair: Rank,
    three_jokers: usize,
    pair_jokers: usize,
}

impl Shape {
    fn value(&self) -> u32 {
        let weighted = self.three.value() as u32 * 3 + self.pair.value() as u32 * 2;
        weighted * Category::FullHouse.rate()
    }

    fn jokers(&self) -> usize {
        self.three_jokers + self.pair_jokers
    }

    /// Three naturals then their jokers, pair naturals then theirs.
    fn cards(&self, pool: &Pool) -> Vec<Card> {
        let jokers = pool.jokers();
        let mut cards = pool.take_rank(self.three, 3 - self.three_jokers);
        cards.extend(jokers[..self.three_jokers].iter().map(|j| j.substituted(self.three, j.suit())));
        cards.extend(pool.take_rank(self.pair, 2 - self.pair_jokers));
        cards.extend(
            jokers[self.three_jokers..self.jokers()].iter().map(|j| j.substituted(self.pair, j.suit())),
        );
        cards
    }
}

fn best_shape(pool: &Pool) -> Option<Shape> {
    let groups = pool.rank_groups();
    let ranks = groups.ranks_desc();
    let available = pool.joker_count();

    let mut best: Option<Shape> = None;
    for &three in &ranks {
        for &pair in ranks.iter().filter(|&&r| r != three) {
            let three_jokers = 3usize.saturating_sub(groups.count(three) as usize);
            let pair_jokers = 2usize.saturating_sub(groups.count(pair) as usize);
            if three_jokers + pair_jokers > available {
                continue;
            }
            let shape = Shape { three, pair, three_jokers, pair_jokers };
            // threes run high to low, so the first of equal scores is kept
            if best.map_or(true, |b| shape.value() > b.value()) {
                best = Some(shape);
            }
        }
    }
    best
}
