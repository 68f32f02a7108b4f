use rust_decimal::Decimal;

use crate::{
    storage::models::{Account, AddressBookEntry},
    traits::{AddressBook, FiatTotals, RateLookup},
};

/// Label shown for accounts that have no address-book entry.
pub const UNKNOWN_ACCOUNT_LABEL: &str = "Unknown Account";

/// One account joined with everything the table shows for it.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub account: Account,
    /// Position of the account in the input list.
    pub index: usize,
    pub label: String,
    pub total: Decimal,
    pub entry: Option<AddressBookEntry>,
}

/// Read-only collaborators needed to project rows.
pub struct RowSources<'a> {
    pub address_book: &'a dyn AddressBook,
    pub totals: &'a dyn FiatTotals,
    pub rates: &'a dyn RateLookup,
}

pub fn project_rows(accounts: &[Account], sources: &RowSources<'_>) -> Vec<TableRow> {
    accounts
        .iter()
        .enumerate()
        .map(|(index, account)| project_row(index, account, sources))
        .collect()
}

fn project_row(index: usize, account: &Account, sources: &RowSources<'_>) -> TableRow {
    let entry = sources.address_book.lookup(&account.address);
    let label = entry
        .as_ref()
        .map(|e| e.label.clone())
        .unwrap_or_else(|| UNKNOWN_ACCOUNT_LABEL.to_string());

    TableRow {
        account: account.clone(),
        index,
        label,
        total: sources.totals.total(account, sources.rates),
        entry,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{
        memory::{InMemoryAddressBook, RateTable, SummingTotals},
        models::AssetBalance,
    };
    use std::collections::HashMap;
    use uuid::Uuid;

    #[test]
    fn test_labels_resolve_or_fall_back() {
        let known = Account::sample("0xKnown", "Ethereum");
        let unknown = Account::sample("0xUnknown", "Ethereum");
        let book = InMemoryAddressBook::new(vec![AddressBookEntry {
            uuid: Uuid::new_v4(),
            label: "Treasury".to_string(),
            address: "0xknown".to_string(),
            network: "Ethereum".to_string(),
            notes: String::new(),
        }]);
        let rates = RateTable::default();
        let sources = RowSources { address_book: &book, totals: &SummingTotals, rates: &rates };

        let rows = project_rows(&[known, unknown], &sources);

        assert_eq!(rows[0].label, "Treasury");
        assert!(rows[0].entry.is_some());
        assert_eq!(rows[1].label, UNKNOWN_ACCOUNT_LABEL);
        assert!(rows[1].entry.is_none());
        assert_eq!(rows[1].index, 1);
    }

    #[test]
    fn test_totals_use_rate_lookup() {
        let mut account = Account::sample("0x1", "Ethereum");
        account.assets.push(AssetBalance { ticker: "ETH".to_string(), amount: Decimal::new(2, 0) });
        let mut map = HashMap::new();
        map.insert("ETH".to_string(), Decimal::new(1500, 0));
        let rates = RateTable::new(map);
        let book = InMemoryAddressBook::default();
        let sources = RowSources { address_book: &book, totals: &SummingTotals, rates: &rates };

        let rows = project_rows(&[account], &sources);
        assert_eq!(rows[0].total, Decimal::new(3000, 0));
    }
}
