use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use crate::{tui::app::App, utils::format_fiat};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let summary = app.full_table();

    render_stat(
        frame,
        chunks[0],
        "Accounts",
        app.account_count().to_string(),
        app.theme.primary,
    );

    render_stat(
        frame,
        chunks[1],
        "Favorites",
        app.favorite_count().to_string(),
        app.theme.accent,
    );

    render_stat(
        frame,
        chunks[2],
        "Total Value",
        format_fiat(summary.grand_total, summary.fiat),
        app.theme.success,
    );
}

fn render_stat(frame: &mut Frame, area: Rect, label: &str, value: String, color: Color) {
    let text = vec![
        Line::from(Span::styled(label, Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
