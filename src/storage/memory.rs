use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::{
    error::{Result, TableError},
    storage::models::{Account, AddressBookEntry, NewAddressBookEntry},
    traits::{AccountStore, AddressBook, FiatTotals, RateLookup},
};

/// Session-only account store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccounts {
    accounts: Vec<Account>,
}

impl InMemoryAccounts {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }
}

impl AccountStore for InMemoryAccounts {
    fn delete_account(&mut self, account: &Account) -> Result<()> {
        let before = self.accounts.len();
        self.accounts.retain(|a| a.uuid != account.uuid);
        if self.accounts.len() == before {
            return Err(TableError::AccountNotFound(account.uuid));
        }
        debug!("Deleted account {}", account.uuid);
        Ok(())
    }

    fn update_account(&mut self, account: Account) -> Result<()> {
        let slot = self
            .accounts
            .iter_mut()
            .find(|a| a.uuid == account.uuid)
            .ok_or(TableError::AccountNotFound(account.uuid))?;
        *slot = account;
        Ok(())
    }
}

/// Session-only address book. Addresses match case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAddressBook {
    entries: Vec<AddressBookEntry>,
}

impl InMemoryAddressBook {
    pub fn new(entries: Vec<AddressBookEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[AddressBookEntry] {
        &self.entries
    }
}

impl AddressBook for InMemoryAddressBook {
    fn lookup(&self, address: &str) -> Option<AddressBookEntry> {
        self.entries
            .iter()
            .find(|e| e.address.eq_ignore_ascii_case(address))
            .cloned()
    }

    fn update_entry(&mut self, entry: AddressBookEntry) -> Result<()> {
        match self.entries.iter_mut().find(|e| e.uuid == entry.uuid) {
            Some(slot) => {
                *slot = entry;
                Ok(())
            }
            None => Err(TableError::Other(anyhow::anyhow!(
                "Address book entry not found: {}",
                entry.uuid
            ))),
        }
    }

    fn create_entry(&mut self, entry: NewAddressBookEntry) -> Result<AddressBookEntry> {
        let entry = entry.with_id(Uuid::new_v4());
        self.entries.push(entry.clone());
        Ok(entry)
    }
}

/// Rates keyed by upper-case asset ticker.
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    rates: HashMap<String, Decimal>,
}

impl RateTable {
    pub fn new(rates: HashMap<String, Decimal>) -> Self {
        Self {
            rates: rates
                .into_iter()
                .map(|(k, v)| (k.to_ascii_uppercase(), v))
                .collect(),
        }
    }
}

impl RateLookup for RateTable {
    fn rate(&self, ticker: &str) -> Option<Decimal> {
        self.rates.get(&ticker.to_ascii_uppercase()).copied()
    }
}

/// Sums balance × rate over every asset. Assets without a rate count as zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummingTotals;

impl FiatTotals for SummingTotals {
    fn total(&self, account: &Account, rates: &dyn RateLookup) -> Decimal {
        account
            .assets
            .iter()
            .filter_map(|asset| rates.rate(&asset.ticker).map(|rate| asset.amount * rate))
            .sum()
    }
}
