use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};
use crate::tui::{app::App, components};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(70), // Accounts table
            Constraint::Percentage(30), // Keybindings
        ])
        .split(area);

    let table = app.table();
    components::accounts_table::render(
        frame,
        chunks[0],
        &table,
        app.selected_index,
        "Accounts",
        &app.theme,
    );

    components::help::render(frame, chunks[1], &app.theme);
}
