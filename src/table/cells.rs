use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::{
    storage::models::{Fiat, WalletType},
    table::sorting::{SortColumn, SortDirection},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderCell {
    pub title: String,
    /// Set for sortable headers; a click toggles this column.
    pub column: Option<SortColumn>,
    /// Present only on the active column.
    pub indicator: Option<SortDirection>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BodyCell {
    FavoriteToggle { favorite: bool },
    Label { text: String, wallet_type: WalletType, known: bool },
    Address { display: String, full: String, copyable: bool },
    Network { name: String },
    Value { amount: Decimal, formatted: String },
    DeleteTrigger,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyRow {
    pub account: Uuid,
    pub cells: Vec<BodyCell>,
}

/// Confirmation shown over a row that is about to be deleted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteOverlay {
    pub account: Uuid,
    /// Address-book label, empty when the account has none.
    pub label: String,
    pub address: String,
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableConfig {
    pub primary_column: String,
}

/// Everything a renderer needs to draw the account table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableDescriptor {
    pub head: Vec<HeaderCell>,
    pub body: Vec<BodyRow>,
    pub overlay: Option<DeleteOverlay>,
    pub overlay_rows: Vec<usize>,
    pub config: TableConfig,
    pub fiat: Fiat,
    pub grand_total: Decimal,
}
