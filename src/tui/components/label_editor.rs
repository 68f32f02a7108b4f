use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tui_input::Input;

use crate::tui::{components::confirm::centered_rect, theme::Theme};

pub fn render(frame: &mut Frame, area: Rect, input: &Input, theme: &Theme) {
    let popup = centered_rect(50, 20, area);
    let popup = Rect { height: 3, ..popup };

    let width = popup.width.saturating_sub(2) as usize;
    let scroll = input.visual_scroll(width);

    let paragraph = Paragraph::new(input.value())
        .style(Style::default().fg(theme.foreground))
        .scroll((0, scroll as u16))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Edit Label (Enter: save, Esc: cancel)")
                .border_style(Style::default().fg(theme.accent)),
        );

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
    frame.set_cursor(
        popup.x + 1 + (input.visual_cursor().max(scroll) - scroll) as u16,
        popup.y + 1,
    );
}
