use crate::cards::{Card, Suit};

/// Per-suit counts of the natural cards in a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    counts: [u8; 4],
}

impl SuitInfo {
    /// Count suits over `cards`, skipping jokers (their suit is only a color tag).
    pub fn detect(cards: &[Card]) -> Self {
        let mut counts = [0u8; 4];
        for card in cards.iter().filter(|c| !c.is_joker()) {
            counts[card.suit().index()] += 1;
        }
        SuitInfo { counts }
    }

    pub fn count(&self, suit: Suit) -> u8 {
        self.counts[suit.index()]
    }

    /// Suit with the most cards; ties go to the earlier suit (C < D < H < S).
    pub fn majority(&self) -> Option<(Suit, u8)> {
        let mut best: Option<(Suit, u8)> = None;
        for suit in Suit::ALL {
            let n = self.count(suit);
            if n > 0 && best.map_or(true, |(_, m)| n > m) {
                best = Some((suit, n));
            }
        }
        best
    }
}
