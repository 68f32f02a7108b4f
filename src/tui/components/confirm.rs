use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::{table::DeleteOverlay, tui::theme::Theme};

pub fn render(frame: &mut Frame, area: Rect, overlay: &DeleteOverlay, theme: &Theme) {
    let popup = centered_rect(60, 30, area);

    let text = vec![
        Line::from(Span::styled(
            overlay.prompt.as_str(),
            Style::default().fg(theme.foreground),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "[y] Delete",
                Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("[n] Cancel", Style::default().fg(theme.muted)),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Delete Account")
                .border_style(Style::default().fg(theme.error)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}

/// A rectangle of `percent_x` × `percent_y` centered in `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
