use super::{
    Category, Evaluation, FiveOfAKind, Flush, FourOfAKind, FullHouse, HighCard, OnePair,
    RoyalFlush, Straight, StraightFlush, ThreeOfAKind, TwoPairs,
};
use crate::cards::Card;

/// Strategy pattern: each classifier decides whether the pool holds its
/// category and, if so, builds the five-card hand and its score.
///
/// `player` and `table` are only read; every call works on its own copy of
/// the pool, so the same slices can be handed to every classifier in turn.
pub trait Classifier {
    fn category(&self) -> Category;
    fn check(&self, player: &[Card], table: &[Card]) -> Evaluation;
}

// ============================================================================
// Static classifier list (in priority order)
// ============================================================================

pub const CLASSIFIERS: [&dyn Classifier; 11] = [
    &FiveOfAKind,
    &RoyalFlush,
    &StraightFlush,
    &FourOfAKind,
    &FullHouse,
    &Flush,
    &Straight,
    &ThreeOfAKind,
    &TwoPairs,
    &OnePair,
    &HighCard,
];

/// Look up the classifier for a category. `Category::None` has none.
pub fn classifier_for(category: Category) -> Option<&'static dyn Classifier> {
    CLASSIFIERS.iter().copied().find(|c| c.category() == category)
}
