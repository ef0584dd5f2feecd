use joker_holdem::cards::Card;
use joker_holdem::deck::{Deck, JOKER_COLORS};
use joker_holdem::evaluator::{evaluate_holdem, Category, EvalError};
use joker_holdem::hand::{validate_holdem, Board, HandError, HoleCards};

#[test]
fn overlap_between_hole_and_board_is_rejected() {
    let hole: HoleCards = "As Kd".parse().unwrap();
    let board: Board = "As 9c 7h 4d 2c".parse().unwrap();
    assert!(matches!(validate_holdem(&hole, &board), Err(HandError::Overlap)));
    assert!(matches!(
        evaluate_holdem(&hole, &board),
        Err(EvalError::InvalidHand(HandError::Overlap))
    ));
}

#[test]
fn two_jokers_are_allowed() {
    let hole: HoleCards = "Xh 9s".parse().unwrap();
    let board: Board = "Xc 9c 7h 4d 2c".parse().unwrap();
    assert!(validate_holdem(&hole, &board).is_ok());
    assert!(evaluate_holdem(&hole, &board).unwrap().is_winning_hand());
}

#[test]
fn flop_board_is_evaluated() {
    let hole: HoleCards = "As Kd".parse().unwrap();
    let board: Board = "9c 7h 4d".parse().unwrap();
    assert!(validate_holdem(&hole, &board).is_ok());
    let eval = evaluate_holdem(&hole, &board).unwrap();
    assert_eq!(eval.category, Category::HighCard);
    assert_eq!(eval.value, 14 + 13 + 9 + 7 + 4);
}

#[test]
fn pool_short_of_five_is_not_evaluable() {
    let hole: HoleCards = "As Kd".parse().unwrap();
    let board: Board = "9c 7h".parse().unwrap();
    assert!(validate_holdem(&hole, &board).is_ok());
    assert!(matches!(evaluate_holdem(&hole, &board), Err(EvalError::NotEnoughCards)));
}

#[test]
fn parse_errors_surface_as_hand_errors() {
    assert!(matches!("As".parse::<HoleCards>(), Err(HandError::HoleCount(1))));
    assert!(matches!("As Zz".parse::<HoleCards>(), Err(HandError::CardParse(_))));
    assert!(matches!("As Kd Qh Jc Ts 9d".parse::<Board>(), Err(HandError::TooManyBoardCards(6))));
}

#[test]
fn every_dealt_pool_validates() {
    for seed in 0..50 {
        let mut deck = Deck::with_jokers(2);
        deck.shuffle_seeded(seed);
        let hole = HoleCards::from_slice(&deck.draw_n(2)).unwrap();
        let board = Board::try_new(deck.draw_n(5)).unwrap();
        assert!(validate_holdem(&hole, &board).is_ok(), "seed {seed}");
    }
}

#[test]
fn joker_deck_uses_fixed_colors() {
    let mut deck = Deck::with_jokers(2);
    let jokers: Vec<Card> = deck.draw_n(54).into_iter().filter(|c| c.is_joker()).collect();
    assert_eq!(jokers.len(), 2);
    for color in JOKER_COLORS {
        assert!(jokers.contains(&Card::joker(color)));
    }
}
