use chrono::{DateTime, Local};
use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use tui_input::{backend::crossterm::EventHandler, Input};

use crate::{
    config::Config,
    error::Result,
    storage::{InMemoryAccounts, InMemoryAddressBook, RateTable, Stores, SummingTotals},
    table::{AccountTableBuilder, RowSources, SortColumn, TableDescriptor, TableRow},
    tui::theme::Theme,
};

const MAX_LOGS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen {
    Dashboard,
    Accounts,
    Settings,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Accounts => "Accounts",
            Screen::Settings => "Settings",
        }
    }
}

/// What keystrokes currently drive.
pub enum Mode {
    Browse,
    EditingLabel { row: usize, input: Input },
    ConfirmDelete,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: LogLevel,
    pub message: String,
}

pub struct App {
    // UI State
    pub current_screen: Screen,
    pub should_quit: bool,
    pub selected_index: usize,
    pub status_message: Option<String>,
    pub mode: Mode,
    pub theme: Theme,
    pub logs: Vec<LogEntry>,

    // Data
    pub config: Config,
    accounts: InMemoryAccounts,
    address_book: InMemoryAddressBook,
    rates: RateTable,
    totals: SummingTotals,

    // Tables
    accounts_table: AccountTableBuilder,
    dashboard_table: AccountTableBuilder,
}

impl App {
    pub fn new(config: Config, stores: Stores) -> Self {
        let theme = Theme::from_name(&config.tui.theme);
        let accounts_table = AccountTableBuilder::new(config.accounts_table_flags());
        let dashboard_table = AccountTableBuilder::new(config.dashboard_table_flags());

        let mut app = Self {
            current_screen: Screen::Dashboard,
            should_quit: false,
            selected_index: 0,
            status_message: None,
            mode: Mode::Browse,
            theme,
            logs: Vec::new(),
            config,
            accounts: stores.accounts,
            address_book: stores.address_book,
            rates: stores.rates,
            totals: SummingTotals,
            accounts_table,
            dashboard_table,
        };
        app.add_log(
            LogLevel::Info,
            &format!("Loaded {} accounts", app.accounts.accounts().len()),
        );
        app
    }

    fn sources(&self) -> RowSources<'_> {
        RowSources {
            address_book: &self.address_book,
            totals: &self.totals,
            rates: &self.rates,
        }
    }

    fn builder(&self) -> &AccountTableBuilder {
        match self.current_screen {
            Screen::Accounts => &self.accounts_table,
            _ => &self.dashboard_table,
        }
    }

    /// Sorted rows for the current screen. The dashboard only previews the top rows.
    pub fn rows(&self) -> Vec<TableRow> {
        match self.current_screen {
            Screen::Accounts => self.accounts_table.rows(self.accounts.accounts(), &self.sources()),
            Screen::Dashboard => {
                let mut rows = self.dashboard_table.rows(self.accounts.accounts(), &self.sources());
                rows.truncate(self.config.display.dashboard_rows);
                rows
            }
            Screen::Settings => Vec::new(),
        }
    }

    pub fn table(&self) -> TableDescriptor {
        self.builder().describe(&self.rows(), &self.config)
    }

    pub fn account_count(&self) -> usize {
        self.accounts.accounts().len()
    }

    pub fn favorite_count(&self) -> usize {
        self.accounts.accounts().iter().filter(|a| a.favorite).count()
    }

    /// Summary over every account, not just the dashboard preview.
    pub fn full_table(&self) -> TableDescriptor {
        self.dashboard_table
            .describe(&self.dashboard_table.rows(self.accounts.accounts(), &self.sources()), &self.config)
    }

    // Navigation
    pub fn next_screen(&mut self) {
        self.current_screen = match self.current_screen {
            Screen::Dashboard => Screen::Accounts,
            Screen::Accounts => Screen::Settings,
            Screen::Settings => Screen::Dashboard,
        };
        self.selected_index = 0;
    }

    pub fn previous_screen(&mut self) {
        self.current_screen = match self.current_screen {
            Screen::Dashboard => Screen::Settings,
            Screen::Settings => Screen::Accounts,
            Screen::Accounts => Screen::Dashboard,
        };
        self.selected_index = 0;
    }

    pub fn next_item(&mut self) {
        let len = self.rows().len();
        if len > 0 {
            self.selected_index = (self.selected_index + 1) % len;
        }
    }

    pub fn previous_item(&mut self) {
        let len = self.rows().len();
        if len > 0 {
            if self.selected_index == 0 {
                self.selected_index = len - 1;
            } else {
                self.selected_index -= 1;
            }
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.rows().len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    // Actions
    pub fn toggle_sort(&mut self, column: SortColumn) {
        let builder = match self.current_screen {
            Screen::Accounts => &mut self.accounts_table,
            Screen::Dashboard => &mut self.dashboard_table,
            Screen::Settings => return,
        };
        builder.toggle_sort(column);
        let active = builder.sorting().active();
        self.status_message = Some(format!("Sorted by {}", active));
    }

    pub fn begin_edit(&mut self) {
        let rows = self.rows();
        if let Some(row) = rows.get(self.selected_index) {
            let current = if row.entry.is_some() { row.label.clone() } else { String::new() };
            self.mode = Mode::EditingLabel {
                row: self.selected_index,
                input: Input::new(current),
            };
            self.status_message = Some("Editing label: Enter to save, Esc to cancel".to_string());
        }
    }

    pub fn commit_edit(&mut self) -> Result<()> {
        let Mode::EditingLabel { row, input } = std::mem::replace(&mut self.mode, Mode::Browse) else {
            return Ok(());
        };
        let text = input.value().trim().to_string();

        let rows = self.rows();
        let builder = match self.current_screen {
            Screen::Accounts => &self.accounts_table,
            _ => &self.dashboard_table,
        };
        builder.commit_label(&rows, row, &text, &mut self.address_book)?;
        self.add_log(LogLevel::Success, &format!("Label saved: {}", text));
        self.status_message = Some(format!("Saved label \"{}\"", text));
        Ok(())
    }

    pub fn request_delete(&mut self) -> Result<()> {
        if !self.builder().flags().deletable {
            self.add_log(LogLevel::Warning, "Delete ignored: table is not deletable");
            self.status_message = Some("Deleting is disabled on this screen".to_string());
            return Ok(());
        }
        let rows = self.rows();
        if rows.is_empty() {
            return Ok(());
        }
        self.accounts_table.request_delete(&rows, self.selected_index)?;
        self.mode = Mode::ConfirmDelete;
        Ok(())
    }

    pub fn confirm_delete(&mut self) -> Result<()> {
        self.mode = Mode::Browse;
        let rows = self.rows();
        let deleted = self.accounts_table.confirm_delete(&rows, &mut self.accounts)?;
        self.add_log(LogLevel::Success, &format!("Deleted account {}", deleted.address));
        self.status_message = Some("Account deleted".to_string());
        self.clamp_selection();
        Ok(())
    }

    pub fn cancel_delete(&mut self) {
        self.mode = Mode::Browse;
        self.accounts_table.cancel_delete();
        self.status_message = Some("Delete cancelled".to_string());
    }

    pub fn toggle_favorite(&mut self) -> Result<()> {
        let rows = self.rows();
        if rows.is_empty() {
            return Ok(());
        }
        let builder = match self.current_screen {
            Screen::Accounts => &self.accounts_table,
            _ => &self.dashboard_table,
        };
        if !builder.flags().favoritable || builder.flags().deletable {
            self.status_message = Some("Favorites are managed on the Dashboard".to_string());
            return Ok(());
        }
        let favorite = builder.toggle_favorite(&rows, self.selected_index, &mut self.accounts)?;
        self.status_message = Some(if favorite { "Added to favorites" } else { "Removed from favorites" }.to_string());
        Ok(())
    }

    pub fn copy_address(&mut self) -> Result<()> {
        let rows = self.rows();
        if rows.is_empty() {
            return Ok(());
        }
        let copied = self.builder().copy_address(&rows, self.selected_index)?;
        match copied {
            Some(address) => {
                self.add_log(LogLevel::Info, &format!("Copied {}", address));
                self.status_message = Some(format!("Copied {}", address));
            }
            None => self.status_message = Some("Copying is disabled".to_string()),
        }
        Ok(())
    }

    /// Route a key press according to the current mode.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let outcome = match self.mode {
            Mode::EditingLabel { .. } => self.handle_edit_key(key),
            Mode::ConfirmDelete => match key.code {
                KeyCode::Char('y') | KeyCode::Enter => self.confirm_delete(),
                KeyCode::Char('n') | KeyCode::Esc => {
                    self.cancel_delete();
                    Ok(())
                }
                _ => Ok(()),
            },
            Mode::Browse => self.handle_browse_key(key),
        };

        if let Err(e) = outcome {
            self.add_log(LogLevel::Error, &e.to_string());
            self.status_message = Some(format!("Error: {}", e));
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Enter => self.commit_edit(),
            KeyCode::Esc => {
                self.mode = Mode::Browse;
                self.status_message = Some("Edit cancelled".to_string());
                Ok(())
            }
            _ => {
                if let Mode::EditingLabel { input, .. } = &mut self.mode {
                    input.handle_event(&CrosstermEvent::Key(key));
                }
                Ok(())
            }
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.should_quit = true,
            KeyCode::Tab => self.next_screen(),
            KeyCode::BackTab => self.previous_screen(),
            KeyCode::Down | KeyCode::Char('j') => self.next_item(),
            KeyCode::Up | KeyCode::Char('k') => self.previous_item(),
            KeyCode::Char('1') => self.toggle_sort(SortColumn::Label),
            KeyCode::Char('2') => self.toggle_sort(SortColumn::Address),
            KeyCode::Char('3') => self.toggle_sort(SortColumn::Network),
            KeyCode::Char('4') => self.toggle_sort(SortColumn::Value),
            KeyCode::Char('e') => self.begin_edit(),
            KeyCode::Char('d') => self.request_delete()?,
            KeyCode::Char('f') => self.toggle_favorite()?,
            KeyCode::Char('c') => self.copy_address()?,
            _ => {}
        }
        Ok(())
    }

    pub fn add_log(&mut self, level: LogLevel, message: &str) {
        self.logs.push(LogEntry {
            timestamp: Local::now(),
            level,
            message: message.to_string(),
        });
        if self.logs.len() > MAX_LOGS {
            self.logs.remove(0);
        }
    }
}
