use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::{
    table::{BodyCell, HeaderCell, SortColumn, SortDirection, TableDescriptor},
    tui::theme::Theme,
};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    table: &TableDescriptor,
    selected: usize,
    title: &str,
    theme: &Theme,
) {
    let header_cells = table
        .head
        .iter()
        .map(|h| Cell::from(header_text(h)).style(Style::default().fg(theme.accent)));

    let header = Row::new(header_cells)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .height(1)
        .bottom_margin(1);

    let rows = table.body.iter().enumerate().map(|(position, row)| {
        let cells = row.cells.iter().map(|cell| body_cell(cell, theme));
        let style = if table.overlay_rows.contains(&position) {
            Style::default().fg(theme.error).add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default()
        };
        Row::new(cells).style(style).height(1)
    });

    let widths: Vec<Constraint> = table.head.iter().map(column_width).collect();

    let widget = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} · {}", title, table.fiat.code()))
                .border_style(Style::default().fg(theme.primary)),
        )
        .highlight_style(
            Style::default()
                .bg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    let mut state = TableState::default();
    if !table.body.is_empty() {
        state.select(Some(selected.min(table.body.len() - 1)));
    }

    frame.render_stateful_widget(widget, area, &mut state);
}

fn header_text(cell: &HeaderCell) -> String {
    let hotkey = match cell.column {
        Some(SortColumn::Label) => "1",
        Some(SortColumn::Address) => "2",
        Some(SortColumn::Network) => "3",
        Some(SortColumn::Value) => "4",
        None => return cell.title.clone(),
    };
    let arrow = match cell.indicator {
        Some(SortDirection::Ascending) => " ▲",
        Some(SortDirection::Descending) => " ▼",
        None => "",
    };
    format!("[{}] {}{}", hotkey, cell.title, arrow)
}

fn column_width(cell: &HeaderCell) -> Constraint {
    match cell.column {
        Some(SortColumn::Label) => Constraint::Percentage(25),
        Some(SortColumn::Address) => Constraint::Min(16),
        Some(SortColumn::Network) => Constraint::Percentage(13),
        Some(SortColumn::Value) => Constraint::Percentage(17),
        None if cell.title.is_empty() => Constraint::Length(3),
        None => Constraint::Length(8),
    }
}

fn body_cell<'a>(cell: &'a BodyCell, theme: &Theme) -> Cell<'a> {
    match cell {
        BodyCell::FavoriteToggle { favorite } => {
            if *favorite {
                Cell::from("★").style(Style::default().fg(theme.accent))
            } else {
                Cell::from("☆").style(Style::default().fg(theme.muted))
            }
        }
        BodyCell::Label { text, wallet_type, known } => {
            let style = if *known {
                Style::default().fg(theme.foreground)
            } else {
                Style::default().fg(theme.muted).add_modifier(Modifier::ITALIC)
            };
            Cell::from(format!("{} ({})", text, wallet_type)).style(style)
        }
        BodyCell::Address { display, copyable, .. } => {
            let style = if *copyable {
                Style::default().add_modifier(Modifier::UNDERLINED)
            } else {
                Style::default()
            };
            Cell::from(display.as_str()).style(style)
        }
        BodyCell::Network { name } => Cell::from(name.as_str()).style(Style::default().fg(theme.info)),
        BodyCell::Value { formatted, .. } => {
            Cell::from(formatted.as_str()).style(Style::default().fg(theme.success))
        }
        BodyCell::DeleteTrigger => Cell::from("✗ [d]").style(Style::default().fg(theme.error)),
    }
}
