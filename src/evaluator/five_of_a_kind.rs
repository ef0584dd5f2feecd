use super::pool::Pool;
use super::{Category, Classifier, Evaluation, HAND_SIZE};
use crate::cards::Card;

/// Five of a Kind: a natural rank group completed to five by jokers.
///
/// Needs at least one joker. With two jokers a natural three is enough; four
/// naturals take a single joker and the other one sits out.
pub struct FiveOfAKind;

impl Classifier for FiveOfAKind {
    fn category(&self) -> Category {
        Category::FiveOfAKind
    }

    fn check(&self, player: &[Card], table: &[Card]) -> Evaluation {
        let pool = Pool::new(player, table);
        let jokers = pool.joker_count();
        if !pool.is_playable() || jokers == 0 {
            return Evaluation::no_match();
        }
        let groups = pool.rank_groups();
        let Some(rank) = groups.highest_at_least(HAND_SIZE.saturating_sub(jokers).max(1) as u8) else {
            return Evaluation::no_match();
        };

        let naturals = (groups.count(rank) as usize).min(HAND_SIZE - 1);
        let mut cards = pool.take_rank(rank, naturals);
        cards.extend(pool.jokers_as(rank, HAND_SIZE - naturals));
        let value = rank.value() as u32 * HAND_SIZE as u32 * Category::FiveOfAKind.rate();
        Evaluation::winning(Category::FiveOfAKind, value, cards)
    }
}
