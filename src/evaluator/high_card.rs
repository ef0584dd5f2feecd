use super::pool::{rank_sum, Pool};
use super::{Category, Classifier, Evaluation, HAND_SIZE};
use crate::cards::Card;

/// High Card: the five highest natural cards. Jokers never play here; a pool
/// holding one always makes at least a pair.
pub struct HighCard;

impl Classifier for HighCard {
    fn category(&self) -> Category {
        Category::HighCard
    }

    fn check(&self, player: &[Card], table: &[Card]) -> Evaluation {
        let pool = Pool::new(player, table);
        if pool.naturals().len() < HAND_SIZE {
            return Evaluation::no_match();
        }
        let cards = pool.naturals()[..HAND_SIZE].to_vec();
        let value = rank_sum(&cards) * Category::HighCard.rate();
        Evaluation::winning(Category::HighCard, value, cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::evaluator::test_support::hand;

    #[test]
    fn takes_top_five_descending() {
        let hole = parse_cards("3s Ah").unwrap();
        let board = parse_cards("5d Kc 9s 7h 2c").unwrap();
        let eval = HighCard.check(&hole, &board);
        assert_eq!(eval.category, Category::HighCard);
        assert_eq!(eval.value, 14 + 13 + 9 + 7 + 5);
        assert_eq!(eval.cards, hand("Ah Kc 9s 7h 5d"));
    }

    #[test]
    fn matches_even_with_pairs() {
        let hole = parse_cards("As Ah").unwrap();
        let board = parse_cards("Kd Kc 2s").unwrap();
        let eval = HighCard.check(&hole, &board);
        assert!(eval.is_winning_hand());
        assert_eq!(eval.value, 14 + 14 + 13 + 13 + 2);
    }

    #[test]
    fn needs_five_natural_cards() {
        let hole = parse_cards("As Xh").unwrap();
        let board = parse_cards("Kd 9c 2s").unwrap();
        assert!(!HighCard.check(&hole, &board).is_winning_hand());
    }
}
