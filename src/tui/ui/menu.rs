use crate::cards::Card;
use crate::deck::JOKER_COLORS;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::cards::cards_line;
use super::layout::{centered_rect, inner};

const LOGO: &str = r#"
     _       _               _   _       _     _
    | | ___ | | _____ _ __  | | | | ___ | | __| | ___ _ __ ___
 _  | |/ _ \| |/ / _ \ '__| | |_| |/ _ \| |/ _` |/ _ \ '_ ` _ \
| |_| | (_) |   <  __/ |    |  _  | (_) | | (_| |  __/ | | | | |
 \___/ \___/|_|\_\___|_|    |_| |_|\___/|_|\__,_|\___|_| |_| |_|
                                                   hand explorer"#;

pub(super) fn draw_menu(f: &mut Frame, app: &AppState) {
    let area = centered_rect(80, 80, f.area());
    f.render_widget(Clear, area);
    f.render_widget(Block::bordered().title(" joker-holdem "), area);

    let logo: Vec<Line> = LOGO.lines().map(|l| Line::styled(l, Color::Cyan)).collect();
    let [logo_area, settings_area, deck_area, hint_area] = Layout::vertical([
        Constraint::Length(logo.len() as u16 + 1),
        Constraint::Length(5),
        Constraint::Length(3),
        Constraint::Min(1),
    ])
    .areas(inner(area));

    f.render_widget(Paragraph::new(logo).alignment(Alignment::Center), logo_area);

    let items: Vec<ListItem> = app.menu_items_display().into_iter().map(ListItem::new).collect();
    let list = List::new(items)
        .block(Block::bordered().title(" deal settings "))
        .highlight_style(Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(app.menu_index));
    f.render_stateful_widget(list, centered_rect(50, 100, settings_area), &mut state);

    // deck preview for the pending joker count
    let jokers: Vec<Card> = JOKER_COLORS.iter().take(app.cfg_jokers).map(|&c| Card::joker(c)).collect();
    let mut deck = vec![Line::from(format!("deck: 52 naturals + {} joker(s)", jokers.len()))];
    if !jokers.is_empty() {
        deck.push(cards_line(&jokers));
    }
    f.render_widget(Paragraph::new(deck).alignment(Alignment::Center), deck_area);

    let hint = Line::styled(
        "[Enter] Deal table  [Q] Quit  [Esc] Cancel  [↑/↓] Move  [+/-] Adjust",
        Style::new().add_modifier(Modifier::DIM),
    );
    f.render_widget(Paragraph::new(hint).alignment(Alignment::Center), hint_area);
}
