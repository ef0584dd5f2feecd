use crate::tui::app::{AppState, ClassifierRow};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::cards::{card_spans, cards_line};
use super::layout::{centered_rect, inner};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),  // header
            Constraint::Length(4),  // pool
            Constraint::Min(13),    // classifiers
            Constraint::Length(5),  // selected row detail
            Constraint::Length(3),  // status bar
        ])
        .split(size);

    let header_lines = vec![
        Line::from(format!(
            "Jokers: {}   Board: {} cards   Seed: {}",
            app.jokers, app.board_size, app.seed
        )),
        Line::from(if app.has_dealt() {
            format!("Hand #{}   Hand seed: {}", app.hands_dealt, app.hand_seed())
        } else {
            String::from("No hand dealt yet")
        }),
    ];
    let header = Paragraph::new(header_lines)
        .block(Block::default().title("joker-holdem").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    draw_pool(f, chunks[1], app);
    draw_rows(f, chunks[2], app);
    draw_detail(f, chunks[3], app);

    let status = Paragraph::new(Line::from(vec![
        Span::styled("Space", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" deal • "),
        Span::styled("↑/↓", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" select • ? help • M menu • Q quit"),
    ]))
    .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[4]);

    if app.help_open() {
        draw_help(f);
    }
}

fn draw_pool(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default().title("Pool").borders(Borders::ALL);
    let lines = if app.has_dealt() {
        let mut hole = vec![Span::styled("Hole:  ", Style::default().add_modifier(Modifier::DIM))];
        hole.extend(cards_line(app.hole()).spans);
        let mut board = vec![Span::styled("Board: ", Style::default().add_modifier(Modifier::DIM))];
        board.extend(cards_line(app.board()).spans);
        vec![Line::from(hole), Line::from(board)]
    } else {
        vec![Line::from("Press Space to deal.")]
    };
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_rows(f: &mut Frame, area: Rect, app: &AppState) {
    let best = app.best().category;
    let rows = app.rows().iter().enumerate().map(|(i, row)| {
        let mut style = Style::default();
        if !row.eval.is_winning_hand() {
            style = style.add_modifier(Modifier::DIM);
        }
        if row.category == best && row.eval.is_winning_hand() {
            style = style.fg(Color::Green).add_modifier(Modifier::BOLD);
        }
        if i == app.selected {
            style = style.bg(Color::DarkGray);
        }
        let marker = if row.category == best { "▶" } else { " " };
        let value =
            if row.eval.is_winning_hand() { row.eval.value.to_string() } else { String::from("--") };
        let cards = match row.eval.cards {
            Some(cards) => cards_line(&cards),
            None => Line::from(Span::styled("no match", Style::default().add_modifier(Modifier::DIM))),
        };
        Row::new(vec![
            Cell::from(marker),
            Cell::from(row.category.name()),
            Cell::from(value),
            Cell::from(cards),
        ])
        .style(style)
    });
    let widths = [
        Constraint::Length(2),
        Constraint::Length(16),
        Constraint::Length(10),
        Constraint::Min(20),
    ];
    let table = Table::new(rows, widths)
        .header(
            Row::new(vec!["", "Category", "Value", "Cards"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().title("Classifiers").borders(Borders::ALL));
    f.render_widget(table, area);
}

fn draw_detail(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default().title("Selected").borders(Borders::ALL);
    let Some(row) = app.selected_row() else {
        f.render_widget(block, area);
        return;
    };
    let lines = detail_lines(row);
    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
}

fn detail_lines(row: &ClassifierRow) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(format!(
        "{}: rate {}   value {}   strength {:#x}",
        row.category.name(),
        row.category.rate(),
        row.eval.value,
        row.eval.strength().raw(),
    ))];
    let mut jokers: Vec<Span> = vec![Span::raw("Jokers: ")];
    let mut any = false;
    for joker in row.eval.jokers() {
        if any {
            jokers.push(Span::raw(", "));
        }
        jokers.extend(card_spans(joker));
        any = true;
    }
    if !any {
        jokers.push(Span::styled("none played", Style::default().add_modifier(Modifier::DIM)));
    }
    lines.push(Line::from(jokers));
    lines
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(60, 60, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let lines = vec![
        Line::from(Span::styled("Table:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Space: deal the next seeded pool"),
        Line::from("- Up / Down: select a classifier"),
        Line::from("- ▶ marks the category the evaluator picks"),
        Line::from("- JK♥=7♠: joker with a heart tag playing as 7♠"),
        Line::from(""),
        Line::from(Span::styled("Menu:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- M: open / close menu"),
        Line::from("- Up / Down: move selection"),
        Line::from("- + / -: adjust value"),
        Line::from("- Enter: apply"),
        Line::from("- Esc: cancel"),
        Line::from("- Q: quit"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}
