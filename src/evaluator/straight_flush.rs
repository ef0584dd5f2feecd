use super::pool::Pool;
use super::straight;
use super::{Category, Classifier, Evaluation};
use crate::cards::{Card, Rank, Suit};

/// Straight Flush: the pool's best straight, when its natural cards share a suit.
///
/// Only the straight that [`Straight`](super::Straight) would pick is
/// considered; a lower suited run elsewhere in the pool does not count.
pub struct StraightFlush;

/// Royal Flush: a straight flush topped by an Ace.
pub struct RoyalFlush;

impl Classifier for StraightFlush {
    fn category(&self) -> Category {
        Category::StraightFlush
    }

    fn check(&self, player: &[Card], table: &[Card]) -> Evaluation {
        match suited_run(&Pool::new(player, table)) {
            Some((cards, rank_sum)) => Evaluation::winning(
                Category::StraightFlush,
                rank_sum * Category::StraightFlush.rate(),
                cards,
            ),
            None => Evaluation::no_match(),
        }
    }
}

impl Classifier for RoyalFlush {
    fn category(&self) -> Category {
        Category::RoyalFlush
    }

    fn check(&self, player: &[Card], table: &[Card]) -> Evaluation {
        match suited_run(&Pool::new(player, table)) {
            Some((cards, rank_sum)) if cards[0].effective_rank() == Rank::Ace => {
                Evaluation::winning(Category::RoyalFlush, rank_sum * Category::RoyalFlush.rate(), cards)
            }
            _ => Evaluation::no_match(),
        }
    }
}

/// The best straight with its jokers restamped in the shared suit, or `None`
/// if there is no straight or its naturals are mixed.
fn suited_run(pool: &Pool) -> Option<(Vec<Card>, u32)> {
    if !pool.is_playable() {
        return None;
    }
    let (cards, rank_sum) = straight::run(pool)?;
    let suit = shared_suit(&cards)?;
    let cards = cards.into_iter().map(|c| c.substituted(c.effective_rank(), suit)).collect();
    Some((cards, rank_sum))
}

fn shared_suit(cards: &[Card]) -> Option<Suit> {
    let mut naturals = cards.iter().filter(|c| !c.is_joker()).map(|c| c.suit());
    let first = naturals.next()?;
    naturals.all(|s| s == first).then_some(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::evaluator::test_support::hand;

    fn check(classifier: &dyn Classifier, player: &str, table: &str) -> Evaluation {
        classifier.check(&parse_cards(player).unwrap(), &parse_cards(table).unwrap())
    }

    #[test]
    fn natural_straight_flush() {
        let eval = check(&StraightFlush, "9h 8h", "7h 6h 5h Kd 2c");
        assert_eq!(eval.category, Category::StraightFlush);
        assert_eq!(eval.value, (9 + 8 + 7 + 6 + 5) * 180_000);
        assert_eq!(eval.cards, hand("9h 8h 7h 6h 5h"));
    }

    #[test]
    fn mixed_suits_fail() {
        assert!(!check(&StraightFlush, "9h 8h", "7h 6h 5c Kd 2c").is_winning_hand());
    }

    #[test]
    fn no_alternate_search_below_best_straight() {
        // 5-9 hearts exists, but the best straight is 6-T with a spade
        assert!(!check(&StraightFlush, "9h 8h", "7h 6h 5h Ts 2c").is_winning_hand());
    }

    #[test]
    fn steel_wheel() {
        let eval = check(&StraightFlush, "Ad 2d", "3d 4d 5d Kc 9s");
        assert_eq!(eval.value, 15 * 180_000);
        assert_eq!(eval.cards, hand("5d 4d 3d 2d Ad"));
        assert!(!check(&RoyalFlush, "Ad 2d", "3d 4d 5d Kc 9s").is_winning_hand());
    }

    #[test]
    fn joker_takes_the_flush_suit() {
        let eval = check(&StraightFlush, "9s Xh", "8s 6s 5s Kd 2c");
        let cards = eval.cards.unwrap();
        assert_eq!(cards[2].rank(), Rank::Joker);
        assert_eq!(cards[2].suit(), Suit::Hearts);
        assert_eq!(cards[2].substitute(), Some(Card::new(Rank::Seven, Suit::Spades)));
        assert_eq!(eval.value, 35 * 180_000);
    }

    #[test]
    fn suited_duplicate_is_chosen() {
        let eval = check(&StraightFlush, "7c 7h", "8h 9h Th Jh 2c");
        assert_eq!(eval.value, 45 * 180_000);
        assert_eq!(eval.cards, hand("Jh Th 9h 8h 7h"));
    }

    #[test]
    fn royal_flush() {
        let eval = check(&RoyalFlush, "As Ks", "Qs Js Ts 2d 3c");
        assert_eq!(eval.category, Category::RoyalFlush);
        assert_eq!(eval.value, 60 * 200_000);
        assert_eq!(eval.cards, hand("As Ks Qs Js Ts"));
    }

    #[test]
    fn royal_flush_with_joker_ace() {
        let eval = check(&RoyalFlush, "Xc Ks", "Qs Js Ts 2d 3c");
        let cards = eval.cards.unwrap();
        assert_eq!(cards[0].substitute(), Some(Card::new(Rank::Ace, Suit::Spades)));
        assert_eq!(eval.value, 60 * 200_000);
    }

    #[test]
    fn king_high_straight_flush_is_not_royal() {
        assert!(!check(&RoyalFlush, "9s Ks", "Qs Js Ts 2d 3c").is_winning_hand());
        assert!(check(&StraightFlush, "9s Ks", "Qs Js Ts 2d 3c").is_winning_hand());
    }
}
