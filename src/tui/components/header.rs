use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use crate::tui::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let title = vec![
        Span::styled("◆ ", Style::default().fg(app.theme.accent)),
        Span::styled(
            "Wallet Accounts",
            Style::default()
                .fg(app.theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled(
            format!("Currency: {}", app.config.display.fiat.code()),
            Style::default().fg(app.theme.success),
        ),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.primary));

    let paragraph = Paragraph::new(Line::from(title))
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
