use crate::cards::{Card, Rank, Suit};
use crate::hand::MAX_JOKERS;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Color tags given to jokers, in the order they are added to a deck.
pub const JOKER_COLORS: [Suit; MAX_JOKERS] = [Suit::Hearts, Suit::Clubs];

/// A 52-card deck, optionally extended with up to two jokers.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use joker_holdem::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52 + MAX_JOKERS);
        for s in Suit::ALL {
            for r in Rank::ALL {
                cards.push(Card::new(r, s));
            }
        }
        Self { cards }
    }

    /// Standard deck plus `jokers` jokers (clamped to two), red first.
    ///
    /// ```
    /// use joker_holdem::deck::Deck;
    ///
    /// let deck = Deck::with_jokers(2);
    /// assert_eq!(deck.len(), 54);
    /// ```
    pub fn with_jokers(jokers: usize) -> Self {
        let mut deck = Self::standard();
        deck.cards.extend(JOKER_COLORS.iter().take(jokers).map(|&color| Card::joker(color)));
        deck
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw `n` cards from the top of the deck.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).filter_map(|_| self.draw()).collect()
    }
}
