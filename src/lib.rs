//! joker-holdem: Hold'em hand classification with joker wildcards
//!
//! Goals:
//! - Eleven category classifiers, Five of a Kind down to High Card, each a pure
//!   function of the player and table cards
//! - Up to two jokers per pool, recorded in the winning hand with the card they play as
//! - Comparable scores: each category has a fixed rate and [`evaluator::HandValue`]
//!   orders hands category-first
//!
//! ## Quick start: evaluate a Hold'em hand
//! ```
//! use joker_holdem::cards::{Card, Rank, Suit};
//! use joker_holdem::evaluator::{evaluate_holdem, Category};
//! use joker_holdem::hand::{Board, HoleCards};
//!
//! let hole = HoleCards::try_new(
//!     Card::new(Rank::Seven, Suit::Spades),
//!     Card::joker(Suit::Hearts),
//! ).unwrap();
//! let board = Board::try_new(vec![
//!     Card::new(Rank::Seven, Suit::Clubs),
//!     Card::new(Rank::Seven, Suit::Diamonds),
//!     Card::new(Rank::Jack, Suit::Hearts),
//!     Card::new(Rank::Three, Suit::Spades),
//!     Card::new(Rank::Two, Suit::Clubs),
//! ]).unwrap();
//!
//! let eval = evaluate_holdem(&hole, &board).unwrap();
//! assert_eq!(eval.category, Category::FourOfAKind);
//! let joker = eval.jokers().next().unwrap();
//! assert_eq!(joker.effective_rank(), Rank::Seven);
//! ```
//!
//! ## Single classifiers
//! ```
//! use joker_holdem::cards::parse_cards;
//! use joker_holdem::evaluator::{Classifier, ThreeOfAKind};
//!
//! let player = parse_cards("4d 4c").unwrap();
//! let table = parse_cards("4s 7c Qc Kc Ac").unwrap();
//! let eval = ThreeOfAKind.check(&player, &table);
//! assert_eq!(eval.value, 2067);
//! ```
//!
//! ## TUI
//! Run the hand explorer with:
//! ```sh
//! cargo run --bin joker-holdem
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
