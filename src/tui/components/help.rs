use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::tui::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
    let keybindings = vec![
        ("Tab / Shift+Tab", "Next / Previous screen"),
        ("↑ / ↓", "Navigate accounts"),
        ("1 2 3 4", "Sort by label / address / network / value"),
        ("e", "Edit label"),
        ("d", "Delete account"),
        ("f", "Toggle favorite (Dashboard)"),
        ("c", "Copy address"),
        ("q / Esc", "Quit"),
    ];

    let items: Vec<ListItem> = keybindings
        .iter()
        .map(|(key, desc)| {
            let content = vec![
                Span::styled(
                    format!("{:15}", key),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" - "),
                Span::styled(*desc, Style::default().fg(theme.foreground)),
            ];
            ListItem::new(Line::from(content))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Keybindings")
            .border_style(Style::default().fg(theme.primary)),
    );

    frame.render_widget(list, area);
}
