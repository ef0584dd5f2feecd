use super::pool::Pool;
use super::straight_info::StraightInfo;
use super::{Category, Classifier, Evaluation};
use crate::cards::{Card, Rank};
use log::trace;

/// Straight: five consecutive ranks, suits ignored. The Ace plays high or low.
///
/// Jokers fill holes in the highest reachable run: an internal gap takes
/// exactly the missing rank, a King-topped run is completed with an Ace and an
/// Ace-topped run with a Ten. Cards are listed top rank first (the wheel as
/// 5-4-3-2-A) and the wheel's Ace scores as 1.
pub struct Straight;

impl Classifier for Straight {
    fn category(&self) -> Category {
        Category::Straight
    }

    fn check(&self, player: &[Card], table: &[Card]) -> Evaluation {
        let pool = Pool::new(player, table);
        if !pool.is_playable() {
            return Evaluation::no_match();
        }
        match run(&pool) {
            Some((cards, rank_sum)) => {
                Evaluation::winning(Category::Straight, rank_sum * Category::Straight.rate(), cards)
            }
            None => Evaluation::no_match(),
        }
    }
}

/// One card per rank, indexed by face value (1 mirrors the Ace).
///
/// Among duplicates the card of the pool's majority suit is preferred, so a
/// straight that can be suited comes out suited; otherwise the first card in
/// pool order stays.
fn representatives(pool: &Pool) -> [Option<Card>; 15] {
    let majority = pool.suit_info().majority().map(|(suit, _)| suit);
    let mut reps: [Option<Card>; 15] = [None; 15];
    for &card in pool.naturals() {
        let slot = &mut reps[card.rank().value() as usize];
        let replace = match *slot {
            None => true,
            Some(kept) => Some(kept.suit()) != majority && Some(card.suit()) == majority,
        };
        if replace {
            *slot = Some(card);
        }
    }
    reps[1] = reps[Rank::Ace.value() as usize];
    reps
}

/// The best straight in `pool`: its five cards, top first, and the rank sum
/// with a low Ace counted as 1.
pub(crate) fn run(pool: &Pool) -> Option<(Vec<Card>, u32)> {
    let reps = representatives(pool);
    let mut present = [false; 15];
    for (slot, rep) in present.iter_mut().zip(reps.iter()) {
        *slot = rep.is_some();
    }
    let info = StraightInfo::best(&present, pool.joker_count())?;
    trace!(
        "straight to {}{} fills {} hole(s)",
        info.top,
        if info.is_wheel() { " (wheel)" } else { "" },
        info.missing.len()
    );

    let mut jokers = pool.jokers().iter().copied();
    let mut cards = Vec::with_capacity(5);
    for v in info.values() {
        let card = match reps[v as usize] {
            Some(card) => card,
            None => {
                let joker = jokers.next()?;
                joker.substituted(Rank::from_value(v)?, joker.suit())
            }
        };
        cards.push(card);
    }
    let rank_sum = info.values().map(u32::from).sum();
    Some((cards, rank_sum))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Suit};
    use crate::evaluator::test_support::hand;

    fn check(player: &str, table: &str) -> Evaluation {
        Straight.check(&parse_cards(player).unwrap(), &parse_cards(table).unwrap())
    }

    fn ranks(eval: &Evaluation) -> Vec<Rank> {
        eval.cards.iter().flatten().map(|c| c.effective_rank()).collect()
    }

    #[test]
    fn broadway_from_seven() {
        let eval = check("Ac 4h", "Js Qd 8s Kd Tc");
        assert_eq!(eval.category, Category::Straight);
        assert_eq!(eval.value, (10 + 11 + 12 + 13 + 14) * 400);
        assert_eq!(eval.cards, hand("Ac Kd Qd Js Tc"));
    }

    #[test]
    fn wheel_counts_ace_low() {
        let eval = check("Ac 2h", "3s 4d 5s Kd 9c");
        assert_eq!(eval.value, (1 + 2 + 3 + 4 + 5) * 400);
        assert_eq!(eval.cards, hand("5s 4d 3s 2h Ac"));
    }

    #[test]
    fn duplicates_collapse() {
        let eval = check("7c 7h", "8s 9d Th Jd 2c");
        assert_eq!(eval.value, (7 + 8 + 9 + 10 + 11) * 400);
        assert_eq!(ranks(&eval), vec![Rank::Jack, Rank::Ten, Rank::Nine, Rank::Eight, Rank::Seven]);
    }

    #[test]
    fn duplicate_prefers_majority_suit() {
        let eval = check("7c 7h", "8h 9h Th Jh 2c");
        let cards = eval.cards.unwrap();
        assert_eq!(cards[4], Card::new(Rank::Seven, Suit::Hearts));
    }

    #[test]
    fn no_run_fails() {
        let eval = check("Ac Kh", "Qs Jd 9s 3d 2c");
        assert!(!eval.is_winning_hand());
        assert_eq!(eval.value, 0);
    }

    #[test]
    fn joker_fills_internal_gap() {
        let eval = check("9c Xh", "8s 6d 5h Kd 2c");
        assert_eq!(eval.value, (5 + 6 + 7 + 8 + 9) * 400);
        let cards = eval.cards.unwrap();
        assert_eq!(cards[2].rank(), Rank::Joker);
        assert_eq!(cards[2].substitute(), Some(Card::new(Rank::Seven, Suit::Hearts)));
    }

    #[test]
    fn joker_extends_king_run_to_ace() {
        let eval = check("Kc Xh", "Qs Jd Th 3d 2c");
        assert_eq!(eval.value, 60 * 400);
        let cards = eval.cards.unwrap();
        assert_eq!(cards[0].substitute().map(|c| c.rank()), Some(Rank::Ace));
    }

    #[test]
    fn joker_completes_ace_run_with_ten() {
        let eval = check("Ac Xh", "Ks Qd Jh 3d 2c");
        assert_eq!(eval.value, 60 * 400);
        let cards = eval.cards.unwrap();
        assert_eq!(cards[4].substitute().map(|c| c.rank()), Some(Rank::Ten));
    }

    #[test]
    fn joker_extends_run_upward() {
        let eval = check("9c Xh", "8s 7d 6h 5c 2c");
        assert_eq!(ranks(&eval), vec![Rank::Ten, Rank::Nine, Rank::Eight, Rank::Seven, Rank::Six]);
    }

    #[test]
    fn joker_prefers_six_high_over_wheel() {
        let eval = check("2c Xh", "3s 4d 5h Kd 9c");
        assert_eq!(eval.value, (2 + 3 + 4 + 5 + 6) * 400);
        let cards = eval.cards.unwrap();
        assert_eq!(cards[0].substitute().map(|c| c.rank()), Some(Rank::Six));
    }

    #[test]
    fn joker_completes_wheel() {
        let eval = check("2c Xh", "3s 4d Ad Kd 9c");
        assert_eq!(eval.value, 15 * 400);
        let cards = eval.cards.unwrap();
        assert_eq!(cards[0].substitute().map(|c| c.rank()), Some(Rank::Five));
        assert_eq!(cards[4], Card::new(Rank::Ace, Suit::Diamonds));
    }

    #[test]
    fn two_jokers_claim_highest_holes_in_pool_order() {
        let eval = check("Xs Qc", "Xd Td 9h 3d 2c");
        assert_eq!(eval.value, (9 + 10 + 11 + 12 + 13) * 400);
        let cards = eval.cards.unwrap();
        assert_eq!(cards[0].substitute(), Some(Card::new(Rank::King, Suit::Spades)));
        assert_eq!(cards[2].substitute(), Some(Card::new(Rank::Jack, Suit::Diamonds)));
    }

    #[test]
    fn spare_joker_is_left_out() {
        let eval = check("Ac Xh", "Ks Qd Jh Tc 2c");
        assert_eq!(eval.jokers().count(), 0);
        assert_eq!(eval.value, 60 * 400);
    }
}
