use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    error::{Result, TableError},
    storage::models::{Account, Fiat, NewAddressBookEntry},
    table::{
        cells::{BodyCell, BodyRow, DeleteOverlay, HeaderCell, TableConfig, TableDescriptor},
        projection::{project_rows, RowSources, TableRow},
        sorting::{SortColumn, SortKey, SortingState},
    },
    traits::{AccountStore, AddressBook, Settings},
    utils::{format_fiat, shorten_address},
};

/// Feature switches for one table instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableFlags {
    pub deletable: bool,
    pub favoritable: bool,
    pub copyable: bool,
    pub dashboard: bool,
}

pub const DELETE_HEADER: &str = "Delete";

/// Everything the builder reads while assembling a table.
pub struct TableContext<'a> {
    pub sources: RowSources<'a>,
    pub settings: &'a dyn Settings,
}

/// View-model for the account list: sort state, pending delete and the
/// operations a renderer wires its events to.
#[derive(Debug, Clone, Default)]
pub struct AccountTableBuilder {
    flags: TableFlags,
    sorting: SortingState,
    pending_delete: Option<Uuid>,
}

impl AccountTableBuilder {
    pub fn new(flags: TableFlags) -> Self {
        Self {
            flags,
            sorting: SortingState::default(),
            pending_delete: None,
        }
    }

    pub fn with_sort(mut self, key: SortKey) -> Self {
        self.sorting = SortingState::with_active(key);
        self
    }

    pub fn flags(&self) -> TableFlags {
        self.flags
    }

    pub fn sorting(&self) -> SortingState {
        self.sorting
    }

    pub fn pending_delete(&self) -> Option<Uuid> {
        self.pending_delete
    }

    pub fn toggle_sort(&mut self, column: SortColumn) {
        self.sorting = self.sorting.toggle(column);
        debug!("Sort is now {}", self.sorting.active());
    }

    /// Project `accounts` and order them by the active sort.
    pub fn rows(&self, accounts: &[Account], sources: &RowSources<'_>) -> Vec<TableRow> {
        let mut rows = project_rows(accounts, sources);
        self.sorting.sort(&mut rows);
        rows
    }

    pub fn build(&self, accounts: &[Account], ctx: &TableContext<'_>) -> TableDescriptor {
        let rows = self.rows(accounts, &ctx.sources);
        self.describe(&rows, ctx.settings)
    }

    /// Assemble a descriptor from rows that are already sorted.
    pub fn describe(&self, rows: &[TableRow], settings: &dyn Settings) -> TableDescriptor {
        let fiat = settings.fiat();

        let body = rows
            .iter()
            .map(|row| BodyRow {
                account: row.account.uuid,
                cells: self.row_cells(row, fiat),
            })
            .collect();

        let (overlay, overlay_rows) = match self.pending_position(rows) {
            Some(position) => (Some(delete_overlay(&rows[position])), vec![position]),
            None => (None, Vec::new()),
        };

        TableDescriptor {
            head: self.head(),
            body,
            overlay,
            overlay_rows,
            config: TableConfig {
                primary_column: SortColumn::Label.title().to_string(),
            },
            fiat,
            grand_total: rows.iter().map(|r| r.total).sum::<Decimal>(),
        }
    }

    fn head(&self) -> Vec<HeaderCell> {
        let active = self.sorting.active();
        let mut head: Vec<HeaderCell> = SortColumn::ALL
            .iter()
            .map(|column| HeaderCell {
                title: column.title().to_string(),
                column: Some(*column),
                indicator: (active.column() == *column).then(|| active.direction()),
            })
            .collect();

        if self.flags.deletable {
            head.push(HeaderCell {
                title: DELETE_HEADER.to_string(),
                column: None,
                indicator: None,
            });
        } else if self.flags.favoritable {
            head.insert(
                0,
                HeaderCell {
                    title: String::new(),
                    column: None,
                    indicator: None,
                },
            );
        }

        head
    }

    fn row_cells(&self, row: &TableRow, fiat: Fiat) -> Vec<BodyCell> {
        let address = &row.account.address;
        let mut cells = vec![
            BodyCell::Label {
                text: row.label.clone(),
                wallet_type: row.account.wallet_type,
                known: row.entry.is_some(),
            },
            BodyCell::Address {
                display: if self.flags.dashboard {
                    shorten_address(address)
                } else {
                    address.clone()
                },
                full: address.clone(),
                copyable: self.flags.copyable,
            },
            BodyCell::Network {
                name: row.account.network.clone(),
            },
            BodyCell::Value {
                amount: row.total,
                formatted: format_fiat(row.total, fiat),
            },
        ];

        if self.flags.deletable {
            cells.push(BodyCell::DeleteTrigger);
        } else if self.flags.favoritable {
            cells.insert(
                0,
                BodyCell::FavoriteToggle {
                    favorite: row.account.favorite,
                },
            );
        }

        cells
    }

    fn pending_position(&self, rows: &[TableRow]) -> Option<usize> {
        let pending = self.pending_delete?;
        rows.iter().position(|r| r.account.uuid == pending)
    }

    /// Mark the account shown at `row` for deletion.
    pub fn request_delete(&mut self, rows: &[TableRow], row: usize) -> Result<()> {
        let target = row_at(rows, row)?;
        info!("Delete requested for {}", target.account.address);
        self.pending_delete = Some(target.account.uuid);
        Ok(())
    }

    /// Delete the pending account and clear the overlay.
    pub fn confirm_delete(&mut self, rows: &[TableRow], store: &mut dyn AccountStore) -> Result<Account> {
        let pending = self.pending_delete.take().ok_or(TableError::NoPendingDelete)?;
        let target = rows
            .iter()
            .find(|r| r.account.uuid == pending)
            .ok_or(TableError::AccountNotFound(pending))?;

        store.delete_account(&target.account)?;
        info!("Deleted account {}", target.account.address);
        Ok(target.account.clone())
    }

    pub fn cancel_delete(&mut self) {
        if self.pending_delete.take().is_some() {
            debug!("Delete cancelled");
        }
    }

    /// Save an edited label: update the resolved entry, or create one.
    pub fn commit_label(
        &self,
        rows: &[TableRow],
        row: usize,
        text: &str,
        address_book: &mut dyn AddressBook,
    ) -> Result<()> {
        let target = row_at(rows, row)?;

        match &target.entry {
            Some(entry) => {
                let mut updated = entry.clone();
                updated.label = text.to_string();
                address_book.update_entry(updated)?;
                info!("Relabelled {} as {:?}", target.account.address, text);
            }
            None => {
                let created = address_book.create_entry(NewAddressBookEntry {
                    label: text.to_string(),
                    address: target.account.address.clone(),
                    network: target.account.network.clone(),
                    notes: String::new(),
                })?;
                info!("Created address book entry {} for {}", created.uuid, created.address);
            }
        }

        Ok(())
    }

    /// Flip the favorite flag of the account at `row`.
    pub fn toggle_favorite(&self, rows: &[TableRow], row: usize, store: &mut dyn AccountStore) -> Result<bool> {
        if !self.flags.favoritable || self.flags.deletable {
            warn!("Favorite toggle ignored: table is not favoritable");
            return Ok(row_at(rows, row)?.account.favorite);
        }

        let mut account = row_at(rows, row)?.account.clone();
        account.favorite = !account.favorite;
        let favorite = account.favorite;
        store.update_account(account)?;
        Ok(favorite)
    }

    /// Full address of `row`, or `None` when the table is not copyable.
    pub fn copy_address(&self, rows: &[TableRow], row: usize) -> Result<Option<String>> {
        let target = row_at(rows, row)?;
        Ok(self.flags.copyable.then(|| target.account.address.clone()))
    }
}

fn row_at(rows: &[TableRow], row: usize) -> Result<&TableRow> {
    rows.get(row).ok_or(TableError::RowOutOfRange {
        row,
        len: rows.len(),
    })
}

fn delete_overlay(row: &TableRow) -> DeleteOverlay {
    let label = row
        .entry
        .as_ref()
        .map(|e| e.label.clone())
        .unwrap_or_default();
    let address = row.account.address.clone();
    let prompt = if label.is_empty() {
        format!("Are you sure you want to delete {}?", address)
    } else {
        format!("Are you sure you want to delete {} ({})?", label, address)
    };

    DeleteOverlay {
        account: row.account.uuid,
        label,
        address,
        prompt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        storage::{
            memory::{InMemoryAddressBook, RateTable},
            models::AddressBookEntry,
        },
        traits::{FiatTotals, RateLookup},
    };
    use std::collections::HashMap;

    /// Totals come straight from a map keyed by address.
    struct FixedTotals(HashMap<String, Decimal>);

    impl FiatTotals for FixedTotals {
        fn total(&self, account: &Account, _rates: &dyn RateLookup) -> Decimal {
            self.0.get(&account.address).copied().unwrap_or_default()
        }
    }

    struct FixedSettings(Fiat);

    impl Settings for FixedSettings {
        fn fiat(&self) -> Fiat {
            self.0
        }
    }

    #[derive(Default)]
    struct RecordingStore {
        deleted: Vec<Account>,
        updated: Vec<Account>,
    }

    impl AccountStore for RecordingStore {
        fn delete_account(&mut self, account: &Account) -> Result<()> {
            self.deleted.push(account.clone());
            Ok(())
        }

        fn update_account(&mut self, account: Account) -> Result<()> {
            self.updated.push(account);
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingBook {
        entries: Vec<AddressBookEntry>,
        created: Vec<NewAddressBookEntry>,
        updated: Vec<AddressBookEntry>,
    }

    impl AddressBook for RecordingBook {
        fn lookup(&self, address: &str) -> Option<AddressBookEntry> {
            self.entries.iter().find(|e| e.address == address).cloned()
        }

        fn update_entry(&mut self, entry: AddressBookEntry) -> Result<()> {
            self.updated.push(entry);
            Ok(())
        }

        fn create_entry(&mut self, entry: NewAddressBookEntry) -> Result<AddressBookEntry> {
            self.created.push(entry.clone());
            Ok(entry.with_id(Uuid::new_v4()))
        }
    }

    struct Fixture {
        accounts: Vec<Account>,
        book: InMemoryAddressBook,
        totals: FixedTotals,
        rates: RateTable,
        settings: FixedSettings,
    }

    impl Fixture {
        /// A(total=10, labelled "Alpha"), B(5, unlabelled), C(20, labelled "Charlie").
        fn new() -> Self {
            let accounts = vec![
                Account::sample("0xA", "Ethereum"),
                Account::sample("0xB", "Goerli"),
                Account::sample("0xC", "Ethereum"),
            ];
            let totals = [("0xA", 10), ("0xB", 5), ("0xC", 20)]
                .into_iter()
                .map(|(a, t)| (a.to_string(), Decimal::new(t, 0)))
                .collect();
            let book = InMemoryAddressBook::new(vec![
                entry("0xA", "Alpha"),
                entry("0xC", "Charlie"),
            ]);

            Self {
                accounts,
                book,
                totals: FixedTotals(totals),
                rates: RateTable::default(),
                settings: FixedSettings(Fiat::Usd),
            }
        }

        fn sources(&self) -> RowSources<'_> {
            RowSources {
                address_book: &self.book,
                totals: &self.totals,
                rates: &self.rates,
            }
        }

        fn ctx(&self) -> TableContext<'_> {
            TableContext {
                sources: self.sources(),
                settings: &self.settings,
            }
        }
    }

    fn entry(address: &str, label: &str) -> AddressBookEntry {
        AddressBookEntry {
            uuid: Uuid::new_v4(),
            label: label.to_string(),
            address: address.to_string(),
            network: "Ethereum".to_string(),
            notes: String::new(),
        }
    }

    fn addresses(rows: &[TableRow]) -> Vec<&str> {
        rows.iter().map(|r| r.account.address.as_str()).collect()
    }

    #[test]
    fn test_default_order_is_value_descending() {
        let fx = Fixture::new();
        let builder = AccountTableBuilder::default();
        let rows = builder.rows(&fx.accounts, &fx.sources());
        assert_eq!(addresses(&rows), vec!["0xC", "0xA", "0xB"]);
    }

    #[test]
    fn test_toggle_value_reverses_order() {
        let fx = Fixture::new();
        let mut builder = AccountTableBuilder::default();
        builder.toggle_sort(SortColumn::Value);
        let rows = builder.rows(&fx.accounts, &fx.sources());
        assert_eq!(addresses(&rows), vec!["0xB", "0xA", "0xC"]);
    }

    #[test]
    fn test_unknown_label_sorts_by_fallback_text() {
        let fx = Fixture::new();
        let builder = AccountTableBuilder::default().with_sort(SortKey::Label);
        let rows = builder.rows(&fx.accounts, &fx.sources());
        let labels: Vec<_> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Alpha", "Charlie", "Unknown Account"]);
    }

    #[test]
    fn test_network_sort() {
        let fx = Fixture::new();
        let builder = AccountTableBuilder::default().with_sort(SortKey::NetworkReverse);
        let rows = builder.rows(&fx.accounts, &fx.sources());
        assert_eq!(rows[0].account.network, "Goerli");
    }

    #[test]
    fn test_row_shape_depends_on_flags() {
        let fx = Fixture::new();
        let plain = AccountTableBuilder::new(TableFlags::default()).build(&fx.accounts, &fx.ctx());
        let deletable = AccountTableBuilder::new(TableFlags { deletable: true, ..Default::default() })
            .build(&fx.accounts, &fx.ctx());
        let favoritable = AccountTableBuilder::new(TableFlags { favoritable: true, ..Default::default() })
            .build(&fx.accounts, &fx.ctx());

        assert_eq!(plain.body[0].cells.len(), 4);
        assert_eq!(deletable.body[0].cells.len(), plain.body[0].cells.len() + 1);
        assert_eq!(deletable.head.len(), 5);
        assert_eq!(deletable.head[4].title, DELETE_HEADER);
        assert!(matches!(deletable.body[0].cells.last(), Some(BodyCell::DeleteTrigger)));
        assert!(matches!(favoritable.body[0].cells.first(), Some(BodyCell::FavoriteToggle { .. })));
        assert_eq!(favoritable.head.len(), favoritable.body[0].cells.len());
    }

    #[test]
    fn test_deletable_wins_over_favoritable() {
        let fx = Fixture::new();
        let flags = TableFlags { deletable: true, favoritable: true, ..Default::default() };
        let table = AccountTableBuilder::new(flags).build(&fx.accounts, &fx.ctx());

        for row in &table.body {
            assert_eq!(row.cells.len(), 5);
            assert!(!row.cells.iter().any(|c| matches!(c, BodyCell::FavoriteToggle { .. })));
        }
    }

    #[test]
    fn test_head_marks_active_column() {
        let fx = Fixture::new();
        let table = AccountTableBuilder::default().build(&fx.accounts, &fx.ctx());
        let marked: Vec<_> = table.head.iter().filter(|h| h.indicator.is_some()).collect();
        assert_eq!(marked.len(), 1);
        assert_eq!(marked[0].column, Some(SortColumn::Value));
        assert_eq!(table.config.primary_column, "Label");
        assert_eq!(table.grand_total, Decimal::new(35, 0));
    }

    #[test]
    fn test_delete_confirm_flow() {
        let fx = Fixture::new();
        let mut builder = AccountTableBuilder::new(TableFlags { deletable: true, ..Default::default() });
        let rows = builder.rows(&fx.accounts, &fx.sources());
        let mut store = RecordingStore::default();

        builder.request_delete(&rows, 1).unwrap();
        let table = builder.describe(&rows, &fx.settings);
        assert_eq!(table.overlay_rows, vec![1]);
        let overlay = table.overlay.expect("overlay");
        assert_eq!(overlay.label, "Alpha");
        assert_eq!(overlay.address, "0xA");

        let deleted = builder.confirm_delete(&rows, &mut store).unwrap();
        assert_eq!(deleted.address, "0xA");
        assert_eq!(store.deleted.len(), 1);
        assert_eq!(store.deleted[0].uuid, rows[1].account.uuid);

        let table = builder.describe(&rows, &fx.settings);
        assert!(table.overlay_rows.is_empty());
        assert!(table.overlay.is_none());
    }

    #[test]
    fn test_delete_cancel_only_clears() {
        let fx = Fixture::new();
        let mut builder = AccountTableBuilder::new(TableFlags { deletable: true, ..Default::default() });
        let rows = builder.rows(&fx.accounts, &fx.sources());
        let mut store = RecordingStore::default();

        builder.request_delete(&rows, 2).unwrap();
        builder.cancel_delete();

        assert!(builder.describe(&rows, &fx.settings).overlay_rows.is_empty());
        assert!(store.deleted.is_empty());
        assert!(matches!(
            builder.confirm_delete(&rows, &mut store),
            Err(TableError::NoPendingDelete)
        ));
    }

    #[test]
    fn test_overlay_label_empty_when_unresolved() {
        let fx = Fixture::new();
        let mut builder = AccountTableBuilder::new(TableFlags { deletable: true, ..Default::default() });
        let rows = builder.rows(&fx.accounts, &fx.sources());

        builder.request_delete(&rows, 2).unwrap();
        let overlay = builder.describe(&rows, &fx.settings).overlay.unwrap();
        assert_eq!(overlay.label, "");
        assert_eq!(overlay.address, "0xB");
        assert_eq!(overlay.prompt, "Are you sure you want to delete 0xB?");
    }

    #[test]
    fn test_request_delete_out_of_range() {
        let fx = Fixture::new();
        let mut builder = AccountTableBuilder::default();
        let rows = builder.rows(&fx.accounts, &fx.sources());

        assert!(matches!(
            builder.request_delete(&rows, 3),
            Err(TableError::RowOutOfRange { row: 3, len: 3 })
        ));
        assert!(builder.pending_delete().is_none());
    }

    #[test]
    fn test_commit_label_creates_entry_when_unresolved() {
        let account = Account::sample("0xNew", "Goerli");
        let mut book = RecordingBook::default();
        let totals = FixedTotals(HashMap::new());
        let rates = RateTable::default();
        let builder = AccountTableBuilder::default();
        let rows = builder.rows(
            std::slice::from_ref(&account),
            &RowSources { address_book: &book, totals: &totals, rates: &rates },
        );

        builder.commit_label(&rows, 0, "Test Wallet", &mut book).unwrap();

        assert_eq!(
            book.created,
            vec![NewAddressBookEntry {
                label: "Test Wallet".to_string(),
                address: "0xNew".to_string(),
                network: "Goerli".to_string(),
                notes: String::new(),
            }]
        );
        assert!(book.updated.is_empty());
    }

    #[test]
    fn test_commit_label_updates_resolved_entry() {
        let account = Account::sample("0xOld", "Ethereum");
        let existing = entry("0xOld", "Before");
        let mut book = RecordingBook { entries: vec![existing.clone()], ..Default::default() };
        let totals = FixedTotals(HashMap::new());
        let rates = RateTable::default();
        let builder = AccountTableBuilder::default();
        let rows = builder.rows(
            std::slice::from_ref(&account),
            &RowSources { address_book: &book, totals: &totals, rates: &rates },
        );

        builder.commit_label(&rows, 0, "After", &mut book).unwrap();

        assert!(book.created.is_empty());
        assert_eq!(book.updated.len(), 1);
        assert_eq!(book.updated[0].uuid, existing.uuid);
        assert_eq!(book.updated[0].label, "After");
    }

    #[test]
    fn test_toggle_favorite() {
        let fx = Fixture::new();
        let builder = AccountTableBuilder::new(TableFlags { favoritable: true, ..Default::default() });
        let rows = builder.rows(&fx.accounts, &fx.sources());
        let mut store = RecordingStore::default();

        assert!(builder.toggle_favorite(&rows, 0, &mut store).unwrap());
        assert_eq!(store.updated.len(), 1);
        assert_eq!(store.updated[0].uuid, rows[0].account.uuid);
        assert!(store.updated[0].favorite);

        let readonly = AccountTableBuilder::new(TableFlags { deletable: true, favoritable: true, ..Default::default() });
        assert!(!readonly.toggle_favorite(&rows, 0, &mut store).unwrap());
        assert_eq!(store.updated.len(), 1);
    }

    #[test]
    fn test_copy_and_dashboard_address() {
        let mut fx = Fixture::new();
        fx.accounts[0].address = "0x82D69476357A03415E92B5780C89e5E9e972Ce75".to_string();
        let builder = AccountTableBuilder::new(TableFlags { copyable: true, dashboard: true, ..Default::default() })
            .with_sort(SortKey::Address);
        let rows = builder.rows(&fx.accounts, &fx.sources());
        let table = builder.describe(&rows, &fx.settings);

        match &table.body[0].cells[1] {
            BodyCell::Address { display, full, copyable } => {
                assert_eq!(display, "0x82D6…Ce75");
                assert_eq!(full, "0x82D69476357A03415E92B5780C89e5E9e972Ce75");
                assert!(copyable);
            }
            other => panic!("unexpected cell {:?}", other),
        }
        assert_eq!(
            builder.copy_address(&rows, 0).unwrap().as_deref(),
            Some("0x82D69476357A03415E92B5780C89e5E9e972Ce75")
        );
        assert_eq!(AccountTableBuilder::default().copy_address(&rows, 0).unwrap(), None);
    }
}
