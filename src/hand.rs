//! Validated Hold'em inputs: two hole cards and up to five board cards.
//!
//! Cards entering these types are stripped of any joker resolution, so a
//! hand dealt from an earlier evaluation starts fresh.

use crate::cards::{parse_cards, Card, CardParseError};
use std::collections::HashSet;
use std::str::FromStr;

/// Most jokers a single pool may hold.
pub const MAX_JOKERS: usize = 2;

/// Most cards on a board (flop, turn, river).
pub const MAX_BOARD: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("hole cards repeat a card")]
    DuplicateHoleCards,
    #[error("board holds {0} cards, at most five allowed")]
    TooManyBoardCards(usize),
    #[error("board repeats a card")]
    DuplicateBoardCards,
    #[error("a hole card is also on the board")]
    Overlap,
    #[error("expected exactly two hole cards, got {0}")]
    HoleCount(usize),
    #[error("pool holds {0} jokers, at most two allowed")]
    TooManyJokers(usize),
    #[error(transparent)]
    CardParse(#[from] CardParseError),
}

fn all_distinct<'a>(cards: impl IntoIterator<Item = &'a Card>) -> bool {
    let mut seen = HashSet::new();
    cards.into_iter().all(|c| seen.insert(c.unresolved()))
}

/// A player's two private hole cards. Either may be a joker.
///
/// ```
/// use joker_holdem::cards::{Card, Rank, Suit};
/// use joker_holdem::hand::HoleCards;
///
/// let hole = HoleCards::try_new(
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::joker(Suit::Hearts),
/// ).unwrap();
/// assert_eq!(hole.jokers(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleCards([Card; 2]);

impl HoleCards {
    pub fn try_new(a: Card, b: Card) -> Result<Self, HandError> {
        let cards = [a.unresolved(), b.unresolved()];
        if !all_distinct(&cards) {
            return Err(HandError::DuplicateHoleCards);
        }
        Ok(Self(cards))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        match *slice {
            [a, b] => Self::try_new(a, b),
            _ => Err(HandError::HoleCount(slice.len())),
        }
    }

    pub fn first(&self) -> Card {
        self.0[0]
    }

    pub fn second(&self) -> Card {
        self.0[1]
    }

    pub fn as_array(&self) -> [Card; 2] {
        self.0
    }

    /// Number of jokers among the two cards.
    pub fn jokers(&self) -> usize {
        self.0.iter().filter(|c| c.is_joker()).count()
    }
}

impl FromStr for HoleCards {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(&parse_cards(s)?)
    }
}

/// Community cards, 0 to [`MAX_BOARD`] of them.
///
/// ```
/// use joker_holdem::cards::{Card, Rank, Suit};
/// use joker_holdem::hand::Board;
///
/// let board = Board::try_new(vec![
///     Card::new(Rank::Two, Suit::Clubs),
///     Card::new(Rank::Three, Suit::Clubs),
///     Card::joker(Suit::Clubs),
/// ]).unwrap();
/// assert_eq!(board.len(), 3);
/// assert_eq!(board.jokers(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// Unchecked construction; [`validate_holdem`] still catches a bad board.
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards: cards.into_iter().map(Card::unresolved).collect() }
    }

    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        let board = Self::new(cards);
        board.check()?;
        Ok(board)
    }

    fn check(&self) -> Result<(), HandError> {
        if self.cards.len() > MAX_BOARD {
            return Err(HandError::TooManyBoardCards(self.cards.len()));
        }
        if !all_distinct(&self.cards) {
            return Err(HandError::DuplicateBoardCards);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Number of jokers on the board.
    pub fn jokers(&self) -> usize {
        self.cards.iter().filter(|c| c.is_joker()).count()
    }
}

impl FromStr for Board {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_new(parse_cards(s)?)
    }
}

/// Check that hole and board form one legal pool: a board of at most five
/// distinct cards, no card shared with the hole, and at most [`MAX_JOKERS`]
/// jokers overall. Short boards are accepted.
///
/// ```
/// use joker_holdem::hand::{validate_holdem, Board, HoleCards, HandError};
///
/// let hole: HoleCards = "As Xh".parse().unwrap();
/// let board: Board = "2c 3c Xc".parse().unwrap();
/// assert!(validate_holdem(&hole, &board).is_ok());
///
/// let board: Board = "2c As Xc".parse().unwrap();
/// assert_eq!(validate_holdem(&hole, &board), Err(HandError::Overlap));
/// ```
pub fn validate_holdem(hole: &HoleCards, board: &Board) -> Result<(), HandError> {
    board.check()?;
    if !all_distinct(&hole.0) {
        return Err(HandError::DuplicateHoleCards);
    }
    if !all_distinct(hole.0.iter().chain(board.as_slice())) {
        return Err(HandError::Overlap);
    }
    let jokers = hole.jokers() + board.jokers();
    if jokers > MAX_JOKERS {
        return Err(HandError::TooManyJokers(jokers));
    }
    Ok(())
}
