use std::{io, time::Duration};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use tracing::info;

use crate::{
    error::{Result, TableError},
    tui::{
        app::{App, Mode, Screen},
        components,
        event::{Event, EventHandler},
        screens,
    },
};

/// Run the dashboard until the user quits. The terminal is restored even
/// when drawing fails.
pub async fn run_tui(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut events = EventHandler::new(Duration::from_millis(app.config.tui.tick_rate_ms));
    info!("Dashboard started");

    let result = loop {
        if let Err(e) = terminal.draw(|frame| render_ui(frame, &app)) {
            break Err(TableError::from(e));
        }

        match events.next().await {
            Some(Event::Key(key)) => app.handle_key(key),
            Some(Event::Tick) | Some(Event::Resize(_, _)) => {}
            None => break Ok(()),
        }

        if app.should_quit {
            break Ok(());
        }
    };

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    info!("Dashboard closed");

    result
}

pub fn render_ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Status bar
        ])
        .split(frame.size());

    components::header::render(frame, chunks[0], app);

    match app.current_screen {
        Screen::Dashboard => screens::dashboard::render(frame, chunks[1], app),
        Screen::Accounts => screens::accounts::render(frame, chunks[1], app),
        Screen::Settings => screens::settings::render(frame, chunks[1], app),
    }

    render_status_bar(frame, chunks[2], app);

    let screen = frame.size();
    match &app.mode {
        Mode::ConfirmDelete => {
            if let Some(overlay) = app.table().overlay {
                components::confirm::render(frame, screen, &overlay, &app.theme);
            }
        }
        Mode::EditingLabel { input, .. } => {
            components::label_editor::render(frame, screen, input, &app.theme);
        }
        Mode::Browse => {}
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let status_text = app
        .status_message
        .clone()
        .unwrap_or_else(|| "Ready".to_string());

    let text = Line::from(vec![
        Span::styled(
            format!(" {} ", app.current_screen.title()),
            Style::default()
                .fg(Color::Black)
                .bg(app.theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(status_text, Style::default().fg(Color::Gray)),
        Span::raw(" | "),
        Span::styled("Tab: Next Screen", Style::default().fg(app.theme.accent)),
        Span::raw(" | "),
        Span::styled("q: Quit", Style::default().fg(app.theme.error)),
    ]);

    let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}
