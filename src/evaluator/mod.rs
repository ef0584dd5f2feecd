pub(crate) mod classifier;
pub(crate) mod five_of_a_kind;
pub(crate) mod flush;
pub(crate) mod full_house;
pub(crate) mod high_card;
pub(crate) mod of_a_kind;
pub(crate) mod pool;
pub(crate) mod rank_groups;
pub(crate) mod straight;
pub(crate) mod straight_flush;
pub(crate) mod straight_info;
pub(crate) mod suit_info;
pub(crate) mod two_pairs;


pub use classifier::{classifier_for, Classifier, CLASSIFIERS};
pub use five_of_a_kind::FiveOfAKind;
pub use flush::Flush;
pub use full_house::FullHouse;
pub use high_card::HighCard;
pub use of_a_kind::{FourOfAKind, OnePair, ThreeOfAKind};
pub use straight::Straight;
pub use straight_flush::{RoyalFlush, StraightFlush};
pub use two_pairs::TwoPairs;

use crate::cards::Card;
use crate::hand::{validate_holdem, Board, HandError, HoleCards};
use core::cmp::Ordering;
use core::fmt;
use log::{debug, trace};

/// Number of cards in a finished hand.
pub const HAND_SIZE: usize = 5;

/// Compact, comparable hand strength. Higher is better.
/// Category in the high half, the category score in the low half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub struct HandValue(u64);

impl HandValue {
    const CATEGORY_SHIFT: u32 = 32;

    pub const fn new(category: Category, value: u32) -> Self {
        HandValue(((category as u64) << Self::CATEGORY_SHIFT) | value as u64)
    }

    /// Return the packed comparable value.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Poker hand category from weakest to strongest. `None` marks a failed check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    None = 0,
    HighCard = 1,
    OnePair = 2,
    TwoPairs = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
    FiveOfAKind = 11,
}

impl Category {
    /// Every real category, strongest first.
    pub const DESCENDING: [Category; 11] = [
        Category::FiveOfAKind,
        Category::RoyalFlush,
        Category::StraightFlush,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::Flush,
        Category::Straight,
        Category::ThreeOfAKind,
        Category::TwoPairs,
        Category::OnePair,
        Category::HighCard,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Score multiplier applied to the weighted rank sum of the defining cards.
    pub const fn rate(self) -> u32 {
        match self {
            Category::None => 0,
            Category::HighCard => 1,
            Category::OnePair => 5,
            Category::TwoPairs => 17,
            Category::ThreeOfAKind => 170,
            Category::Straight => 400,
            Category::Flush => 1300,
            Category::FullHouse => 6700,
            Category::FourOfAKind => 60000,
            Category::StraightFlush => 180000,
            Category::RoyalFlush => 200000,
            Category::FiveOfAKind => 300000,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::None => "None",
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPairs => "Two Pairs",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
            Category::FiveOfAKind => "Five of a Kind",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of one classifier (or of the orchestrator).
///
/// A winning evaluation carries exactly five cards; a failed one has
/// `Category::None`, a zero value and no cards. Equality is structural;
/// ordering goes through [`HandValue`] first, so hands of different categories
/// always compare category-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct Evaluation {
    pub category: Category,
    pub value: u32,
    pub cards: Option<[Card; HAND_SIZE]>,
}

impl Evaluation {
    pub const fn no_match() -> Self {
        Evaluation { category: Category::None, value: 0, cards: None }
    }

    /// Build a winning evaluation. Anything but exactly five cards reports no match.
    pub(crate) fn winning(category: Category, value: u32, cards: Vec<Card>) -> Self {
        debug_assert_eq!(cards.len(), HAND_SIZE, "{category} built a {}-card hand", cards.len());
        match <[Card; HAND_SIZE]>::try_from(cards) {
            Ok(cards) => Evaluation { category, value, cards: Some(cards) },
            Err(_) => Evaluation::no_match(),
        }
    }

    pub const fn is_winning_hand(&self) -> bool {
        self.cards.is_some()
    }

    /// Return the packed comparable value for ordering/caching.
    pub const fn strength(&self) -> HandValue {
        HandValue::new(self.category, self.value)
    }

    /// Jokers played in the hand, each carrying its substitute.
    pub fn jokers(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().flatten().copied().filter(|c| c.is_joker())
    }
}

impl Default for Evaluation {
    fn default() -> Self {
        Self::no_match()
    }
}

/// Strength first; equal strengths fall back to the cards so the order agrees
/// with `==`. Use [`Evaluation::strength`] to detect a tie between hands.
impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.strength().cmp(&other.strength()).then_with(|| self.cards.cmp(&other.cards))
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum EvalError {
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
    #[error("not enough cards to evaluate")]
    NotEnoughCards,
}

/// Run the classifiers from Five of a Kind down to High Card and return the
/// first match. Pools with fewer than five cards never match.
///
/// ```
/// use joker_holdem::cards::parse_cards;
/// use joker_holdem::evaluator::{evaluate, Category};
///
/// let hole = parse_cards("2d 7c").unwrap();
/// let board = parse_cards("8c 7h 7s Xh Xc").unwrap();
/// let eval = evaluate(&hole, &board);
/// assert_eq!(eval.category, Category::FiveOfAKind);
/// assert_eq!(eval.value, 10_500_000);
/// ```
pub fn evaluate(player: &[Card], table: &[Card]) -> Evaluation {
    for classifier in CLASSIFIERS {
        let eval = classifier.check(player, table);
        if eval.is_winning_hand() {
            debug!("pool matched {} with value {}", eval.category, eval.value);
            return eval;
        }
        trace!("{} did not match", classifier.category());
    }
    debug!("no category matched a pool of {} cards", player.len() + table.len());
    Evaluation::no_match()
}

/// Evaluate a Hold'em hand from the flop on.
/// Validates inputs (including the joker limit) before classifying; a pool
/// short of five cards is [`EvalError::NotEnoughCards`].
///
/// ```
/// use joker_holdem::evaluator::{evaluate_holdem, Category};
/// use joker_holdem::hand::{Board, HoleCards};
///
/// let hole: HoleCards = "As Ah".parse().unwrap();
/// let board: Board = "Qc Jd 9h 3s 2c".parse().unwrap();
/// let eval = evaluate_holdem(&hole, &board).unwrap();
/// assert_eq!(eval.category, Category::OnePair);
/// ```
pub fn evaluate_holdem(hole: &HoleCards, board: &Board) -> Result<Evaluation, EvalError> {
    validate_holdem(hole, board)?;
    if hole.as_array().len() + board.len() < HAND_SIZE {
        return Err(EvalError::NotEnoughCards);
    }
    Ok(evaluate(&hole.as_array(), board.as_slice()))
}

/// Compare two Hold'em hands on a shared board. Returns the ordering or a validation error.
///
/// ```
/// use joker_holdem::evaluator::compare_holdem;
/// use joker_holdem::hand::{Board, HoleCards};
/// use std::cmp::Ordering;
///
/// let board: Board = "Qc Jd 9h 3s 2c".parse().unwrap();
/// let a: HoleCards = "As Ah".parse().unwrap();
/// let b: HoleCards = "Ks Xh".parse().unwrap();
/// assert_eq!(compare_holdem(&a, &b, &board).unwrap(), Ordering::Less);
/// ```
pub fn compare_holdem(a: &HoleCards, b: &HoleCards, board: &Board) -> Result<Ordering, EvalError> {
    let va = evaluate_holdem(a, board)?;
    let vb = evaluate_holdem(b, board)?;
    Ok(va.strength().cmp(&vb.strength()))
}
