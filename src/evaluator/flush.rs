use super::pool::{rank_sum, Pool};
use super::{Category, Classifier, Evaluation, HAND_SIZE};
use crate::cards::{Card, Rank};

/// Flush: five cards of the pool's majority suit.
///
/// Jokers take the suit and claim the highest ranks that suit is missing,
/// Ace first. The hand is the top five of those claims and the natural suited
/// cards, so a joker whose best free rank falls below five naturals stays out.
pub struct Flush;

impl Classifier for Flush {
    fn category(&self) -> Category {
        Category::Flush
    }

    fn check(&self, player: &[Card], table: &[Card]) -> Evaluation {
        let pool = Pool::new(player, table);
        if !pool.is_playable() {
            return Evaluation::no_match();
        }
        let Some((suit, count)) = pool.suit_info().majority() else {
            return Evaluation::no_match();
        };
        if count as usize + pool.joker_count() < HAND_SIZE {
            return Evaluation::no_match();
        }

        let suited = pool.take_suit(suit, usize::MAX);
        let free_ranks = Rank::ALL
            .iter()
            .rev()
            .copied()
            .filter(|&rank| !suited.iter().any(|c| c.rank() == rank));
        let claimed = pool.jokers().iter().zip(free_ranks).map(|(joker, rank)| joker.substituted(rank, suit));

        let mut cards: Vec<Card> = suited.iter().copied().chain(claimed).collect();
        cards.sort_by(|a, b| b.effective_rank().cmp(&a.effective_rank()));
        cards.truncate(HAND_SIZE);

        let value = rank_sum(&cards) * Category::Flush.rate();
        Evaluation::winning(Category::Flush, value, cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Suit};
    use crate::evaluator::test_support::hand;

    fn check(player: &str, table: &str) -> Evaluation {
        Flush.check(&parse_cards(player).unwrap(), &parse_cards(table).unwrap())
    }

    #[test]
    fn top_five_of_suit() {
        let eval = check("2h 9h", "Kh 4h Jh 7h Ac");
        assert_eq!(eval.category, Category::Flush);
        assert_eq!(eval.value, (13 + 11 + 9 + 7 + 4) * 1300);
        assert_eq!(eval.cards, hand("Kh Jh 9h 7h 4h"));
    }

    #[test]
    fn four_suited_without_joker_fails() {
        assert!(!check("2h 9h", "Kh 4h Jd 7c Ac").is_winning_hand());
    }

    #[test]
    fn joker_claims_ace_of_suit() {
        let eval = check("Xc 9s", "Ks 4s Js 7d 2c");
        assert_eq!(eval.value, (14 + 13 + 11 + 9 + 4) * 1300);
        let cards = eval.cards.unwrap();
        assert_eq!(cards[0].rank(), Rank::Joker);
        assert_eq!(cards[0].substitute(), Some(Card::new(Rank::Ace, Suit::Spades)));
        assert_eq!(cards[1], Card::new(Rank::King, Suit::Spades));
    }

    #[test]
    fn joker_skips_ranks_already_held() {
        let eval = check("Xh As", "Ks 4s Js 7d 2c");
        let cards = eval.cards.unwrap();
        assert_eq!(cards[2].substitute(), Some(Card::new(Rank::Queen, Suit::Spades)));
        assert_eq!(eval.value, (14 + 13 + 12 + 11 + 4) * 1300);
    }

    #[test]
    fn two_jokers_claim_descending() {
        let eval = check("Xh Xc", "8d 5d 3d Ks 2c");
        let cards = eval.cards.unwrap();
        assert_eq!(cards[0].substitute(), Some(Card::new(Rank::Ace, Suit::Diamonds)));
        assert_eq!(cards[1].substitute(), Some(Card::new(Rank::King, Suit::Diamonds)));
        assert_eq!(eval.value, (14 + 13 + 8 + 5 + 3) * 1300);
    }

    #[test]
    fn joker_left_out_when_suit_is_full_at_the_top() {
        let eval = check("Xh As", "Ks Qs Js Ts 2c");
        assert_eq!(eval.jokers().count(), 0);
        assert_eq!(eval.cards, hand("As Ks Qs Js Ts"));
    }
}
