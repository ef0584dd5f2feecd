use super::pool::{rank_sum, Pool};
use super::{Category, Classifier, Evaluation, HAND_SIZE};
use crate::cards::{Card, Rank};

/// One Pair: two cards of the same rank plus three kickers.
pub struct OnePair;

/// Three of a Kind: three cards of the same rank plus two kickers.
pub struct ThreeOfAKind;

/// Four of a Kind: four cards of the same rank plus one kicker.
pub struct FourOfAKind;

impl Classifier for OnePair {
    fn category(&self) -> Category {
        Category::OnePair
    }

    fn check(&self, player: &[Card], table: &[Card]) -> Evaluation {
        same_rank_group(&Pool::new(player, table), 2, Category::OnePair)
    }
}

impl Classifier for ThreeOfAKind {
    fn category(&self) -> Category {
        Category::ThreeOfAKind
    }

    fn check(&self, player: &[Card], table: &[Card]) -> Evaluation {
        same_rank_group(&Pool::new(player, table), 3, Category::ThreeOfAKind)
    }
}

impl Classifier for FourOfAKind {
    fn category(&self) -> Category {
        Category::FourOfAKind
    }

    fn check(&self, player: &[Card], table: &[Card]) -> Evaluation {
        same_rank_group(&Pool::new(player, table), 4, Category::FourOfAKind)
    }
}

/// Build a `size`-card group of one rank, then fill with the highest kickers.
///
/// The group takes up to `size` naturals of the highest rank that the jokers
/// can complete, and jokers only cover the shortfall. Kickers never share the
/// group's rank: they are the other naturals plus any spare joker, which
/// claims the highest rank absent from the pool so it cannot pair anything.
/// Score: `rank * size * rate + kicker ranks`.
fn same_rank_group(pool: &Pool, size: usize, category: Category) -> Evaluation {
    let jokers = pool.joker_count();
    if !pool.is_playable() || jokers >= size {
        return Evaluation::no_match();
    }
    let groups = pool.rank_groups();
    let Some(rank) = groups.highest_at_least((size - jokers) as u8) else {
        return Evaluation::no_match();
    };

    let naturals = (groups.count(rank) as usize).min(size);
    let mut cards = pool.take_rank(rank, naturals);
    cards.extend(pool.jokers_as(rank, size - naturals));

    let free_ranks =
        Rank::ALL.iter().rev().copied().filter(|&r| r != rank && groups.count(r) == 0);
    let spare = pool.jokers()[size - naturals..]
        .iter()
        .zip(free_ranks)
        .map(|(joker, r)| joker.substituted(r, joker.suit()));
    let mut kickers: Vec<Card> =
        pool.naturals().iter().copied().filter(|c| c.rank() != rank).chain(spare).collect();
    kickers.sort_by(|a, b| b.effective_rank().cmp(&a.effective_rank()));
    kickers.truncate(HAND_SIZE - size);
    if kickers.len() < HAND_SIZE - size {
        return Evaluation::no_match();
    }

    let group_value = rank.value() as u32 * size as u32 * category.rate();
    let value = group_value + rank_sum(&kickers);
    cards.extend(kickers);
    Evaluation::winning(category, value, cards)
}
