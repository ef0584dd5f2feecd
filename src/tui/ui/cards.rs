use crate::cards::{Card, Rank, Suit};
use ratatui::prelude::*;

fn suit_glyph_and_style(s: Suit) -> (char, Style) {
    match s {
        Suit::Hearts => ('♥', Style::default().fg(Color::Red)),
        Suit::Diamonds => ('♦', Style::default().fg(Color::Red)),
        Suit::Spades => ('♠', Style::default().fg(Color::White)),
        Suit::Clubs => ('♣', Style::default().fg(Color::White)),
    }
}

fn rank_label(r: Rank) -> &'static str {
    match r {
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "10",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
        Rank::Joker => "JK",
    }
}

fn joker_style() -> Style {
    Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
}

/// Spans for one card. A joker shows its color tag and, once resolved, the
/// card it plays as: `JK♥=7♠`.
pub(super) fn card_spans(card: Card) -> Vec<Span<'static>> {
    let (glyph, style) = suit_glyph_and_style(card.suit());
    if !card.is_joker() {
        return vec![Span::styled(format!("{}{glyph}", rank_label(card.rank())), style)];
    }
    let mut spans = vec![Span::styled(format!("JK{glyph}"), joker_style())];
    if let Some(sub) = card.substitute() {
        let (sub_glyph, sub_style) = suit_glyph_and_style(sub.suit());
        spans.push(Span::styled("=", joker_style()));
        spans.push(Span::styled(format!("{}{sub_glyph}", rank_label(sub.rank())), sub_style));
    }
    spans
}

/// A row of cards separated by spaces.
pub(super) fn cards_line(cards: &[Card]) -> Line<'static> {
    let mut spans = Vec::with_capacity(cards.len() * 2);
    for (i, &card) in cards.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.extend(card_spans(card));
    }
    Line::from(spans)
}
