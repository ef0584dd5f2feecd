use super::pool::Pool;
use super::{Category, Classifier, Evaluation};
use crate::cards::{Card, Rank};

/// Two Pairs: two pairs of different ranks plus one kicker.
///
/// One joker either completes a second pair or, when two natural pairs are
/// already there, plays as an Ace kicker unless pairing a higher single scores
/// more. Two jokers never make two pairs: any pool holding them already forms
/// a stronger hand.
pub struct TwoPairs;

impl Classifier for TwoPairs {
    fn category(&self) -> Category {
        Category::TwoPairs
    }

    fn check(&self, player: &[Card], table: &[Card]) -> Evaluation {
        let pool = Pool::new(player, table);
        if !pool.is_playable() {
            return Evaluation::no_match();
        }
        let pairs = pool.rank_groups().at_least(2);
        let hand = match (pool.joker_count(), pairs.as_slice()) {
            (0, [high, low, ..]) => natural_pairs(&pool, *high, *low),
            (1, [pair]) => joker_second_pair(&pool, *pair),
            (1, [high, low, ..]) => joker_with_two_pairs(&pool, *high, *low),
            _ => None,
        };
        match hand {
            Some(hand) => Evaluation::winning(Category::TwoPairs, hand.value(), hand.cards()),
            None => Evaluation::no_match(),
        }
    }
}

/// A candidate hand: two pairs (either order) and the kicker.
#[derive(Debug, Clone)]
struct Candidate {
    pairs: [(Rank, Vec<Card>); 2],
    kicker: (Rank, Card),
}

impl Candidate {
    fn new(a: (Rank, Vec<Card>), b: (Rank, Vec<Card>), kicker: (Rank, Card)) -> Self {
        let pairs = if a.0 >= b.0 { [a, b] } else { [b, a] };
        Candidate { pairs, kicker }
    }

    fn value(&self) -> u32 {
        let pair_sum = self.pairs[0].0.value() as u32 + self.pairs[1].0.value() as u32;
        pair_sum * 2 * Category::TwoPairs.rate() + self.kicker.0.value() as u32
    }

    /// Higher pair, lower pair, kicker.
    fn cards(self) -> Vec<Card> {
        let [(_, high), (_, low)] = self.pairs;
        high.into_iter().chain(low).chain(std::iter::once(self.kicker.1)).collect()
    }
}

fn highest_kicker(pool: &Pool, used: &[Card]) -> Option<(Rank, Card)> {
    pool.kickers(used, 1).first().map(|c| (c.rank(), *c))
}

fn natural_pairs(pool: &Pool, high: Rank, low: Rank) -> Option<Candidate> {
    let first = pool.take_rank(high, 2);
    let second = pool.take_rank(low, 2);
    let used: Vec<Card> = first.iter().chain(&second).copied().collect();
    let kicker = highest_kicker(pool, &used)?;
    Some(Candidate::new((high, first), (low, second), kicker))
}

/// One natural pair: the joker pairs the highest other natural rank.
fn joker_second_pair(pool: &Pool, pair: Rank) -> Option<Candidate> {
    let joker = *pool.jokers().first()?;
    let partner = pool.naturals().iter().copied().find(|c| c.rank() != pair)?;
    let natural = pool.take_rank(pair, 2);
    let second = vec![partner, joker.substituted(partner.rank(), joker.suit())];
    let used: Vec<Card> = natural.iter().copied().chain(std::iter::once(partner)).collect();
    let kicker = highest_kicker(pool, &used)?;
    Some(Candidate::new((pair, natural), (partner.rank(), second), kicker))
}

/// Two natural pairs: the joker is an Ace kicker, unless the highest single
/// outranks the lower pair, in which case the joker pairs that single and the
/// lower pair gives up a kicker.
fn joker_with_two_pairs(pool: &Pool, high: Rank, low: Rank) -> Option<Candidate> {
    let joker = *pool.jokers().first()?;
    let high_cards = pool.take_rank(high, 2);
    let low_cards = pool.take_rank(low, 2);

    let ace_kicker = (Rank::Ace, joker.substituted(Rank::Ace, joker.suit()));
    let mut best = Candidate::new((high, high_cards.clone()), (low, low_cards), ace_kicker);

    let single = pool.naturals().iter().copied().find(|c| c.rank() != high && c.rank() != low);
    if let Some(single) = single.filter(|s| s.rank() > low) {
        let upgraded = vec![single, joker.substituted(single.rank(), joker.suit())];
        let used: Vec<Card> = high_cards.iter().copied().chain(std::iter::once(single)).collect();
        if let Some(kicker) = highest_kicker(pool, &used) {
            let candidate =
                Candidate::new((high, high_cards), (single.rank(), upgraded), kicker);
            if candidate.value() > best.value() {
                best = candidate;
            }
        }
    }
    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Suit};
    use crate::evaluator::test_support::hand;

    fn check(player: &str, table: &str) -> Evaluation {
        TwoPairs.check(&parse_cards(player).unwrap(), &parse_cards(table).unwrap())
    }

    #[test]
    fn natural_two_pairs_take_highest() {
        let eval = check("5s 5h", "Jd Jc 3s 3h Ac");
        assert_eq!(eval.category, Category::TwoPairs);
        assert_eq!(eval.value, (11 + 5) * 2 * 17 + 14);
        assert_eq!(eval.cards, hand("Jd Jc 5s 5h Ac"));
    }

    #[test]
    fn third_pair_can_be_kicker() {
        let eval = check("5s 5h", "Jd Jc 9s 9h 2c");
        assert_eq!(eval.value, (11 + 9) * 2 * 17 + 5);
        assert_eq!(eval.cards, hand("Jd Jc 9s 9h 5s"));
    }

    #[test]
    fn single_pair_fails_without_joker() {
        assert!(!check("5s 5h", "Jd 8c 3s 2h Ac").is_winning_hand());
    }

    #[test]
    fn joker_forms_second_pair_with_highest_other_card() {
        let eval = check("Xh 5h", "5d Kc 9s 7h 2c");
        assert_eq!(eval.value, (13 + 5) * 2 * 17 + 9);
        let cards = eval.cards.unwrap();
        assert_eq!(cards[0], Card::new(Rank::King, Suit::Clubs));
        assert_eq!(cards[1].substitute(), Some(Card::new(Rank::King, Suit::Hearts)));
        assert_eq!(cards[2].rank(), Rank::Five);
        assert_eq!(cards[3].rank(), Rank::Five);
        assert_eq!(cards[4], Card::new(Rank::Nine, Suit::Spades));
    }

    #[test]
    fn joker_is_ace_kicker_over_two_pairs() {
        let eval = check("Xc Qs", "Qd 8h 8c 4s 2d");
        assert_eq!(eval.value, (12 + 8) * 2 * 17 + 14);
        let cards = eval.cards.unwrap();
        assert_eq!(cards[4].substitute(), Some(Card::new(Rank::Ace, Suit::Clubs)));
    }

    #[test]
    fn joker_upgrades_lower_pair_when_single_is_higher() {
        let eval = check("Xc Qs", "Qd 4h 4c Ks 2d");
        // Q + K(joker) beat Q + 4 with an Ace kicker; the fours give the kicker
        assert_eq!(eval.value, (13 + 12) * 2 * 17 + 4);
        let cards = eval.cards.unwrap();
        assert_eq!(cards[0], Card::new(Rank::King, Suit::Spades));
        assert_eq!(cards[1].effective_rank(), Rank::King);
        assert_eq!(cards[2].rank(), Rank::Queen);
        assert_eq!(cards[4], Card::new(Rank::Four, Suit::Hearts));
    }

    #[test]
    fn joker_without_pair_fails() {
        assert!(!check("Xc Qs", "Jd 8h 6c 4s 2d").is_winning_hand());
    }

    #[test]
    fn two_jokers_fail() {
        assert!(!check("Xc Xh", "Qd Qh 6c 6s 2d").is_winning_hand());
    }
}
