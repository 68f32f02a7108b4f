use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};
use crate::tui::{app::App, components};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),      // Stats
            Constraint::Percentage(55), // Favorites preview
            Constraint::Min(0),         // Activity
        ])
        .split(area);

    components::stats::render(frame, chunks[0], app);

    let table = app.table();
    components::accounts_table::render(
        frame,
        chunks[1],
        &table,
        app.selected_index,
        "Top Accounts",
        &app.theme,
    );

    components::logs::render(frame, chunks[2], app);
}
