use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};
use crate::tui::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let config = &app.config;
    let settings = vec![
        ("Snapshot", config.data.snapshot_path.clone()),
        ("Currency", config.display.fiat.code().to_string()),
        ("Dashboard Rows", config.display.dashboard_rows.to_string()),
        ("Deletable", config.table.deletable.to_string()),
        ("Favoritable", config.table.favoritable.to_string()),
        ("Copyable", config.table.copyable.to_string()),
        ("Tick Rate (ms)", config.tui.tick_rate_ms.to_string()),
        ("Theme", config.tui.theme.clone()),
    ];

    let items: Vec<ListItem> = settings
        .into_iter()
        .map(|(key, value)| {
            let content = vec![
                Span::styled(format!("{:20}", key), Style::default().fg(app.theme.accent)),
                Span::raw(": "),
                Span::styled(value, Style::default().fg(app.theme.foreground)),
            ];
            ListItem::new(Line::from(content))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Configuration")
            .border_style(Style::default().fg(app.theme.primary)),
    );

    frame.render_widget(list, area);
}
