use std::{collections::HashMap, fs, path::Path};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::{
    error::Result,
    storage::{
        memory::{InMemoryAccounts, InMemoryAddressBook, RateTable},
        models::{Account, AddressBookEntry, AssetBalance, WalletType},
    },
};

/// JSON seed data for the in-memory stores.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub address_book: Vec<AddressBookEntry>,
    #[serde(default)]
    pub rates: HashMap<String, Decimal>,
}

pub struct Stores {
    pub accounts: InMemoryAccounts,
    pub address_book: InMemoryAddressBook,
    pub rates: RateTable,
}

impl Snapshot {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let snapshot: Snapshot = serde_json::from_str(&raw)?;
        info!(
            "Loaded {} accounts and {} address book entries from {}",
            snapshot.accounts.len(),
            snapshot.address_book.len(),
            path.display()
        );
        Ok(snapshot)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn into_stores(self) -> Stores {
        Stores {
            accounts: InMemoryAccounts::new(self.accounts),
            address_book: InMemoryAddressBook::new(self.address_book),
            rates: RateTable::new(self.rates),
        }
    }

    /// A small data set for `init` and first runs.
    pub fn sample() -> Self {
        let account = |address: &str, network: &str, wallet_type, favorite, assets: &[(&str, i64, u32)]| Account {
            uuid: Uuid::new_v4(),
            address: address.to_string(),
            network: network.to_string(),
            wallet_type,
            favorite,
            assets: assets
                .iter()
                .map(|(ticker, num, scale)| AssetBalance {
                    ticker: ticker.to_string(),
                    amount: Decimal::new(*num, *scale),
                })
                .collect(),
        };

        let accounts = vec![
            account(
                "0x82D69476357A03415E92B5780C89e5E9e972Ce75",
                "Ethereum",
                WalletType::Ledger,
                true,
                &[("ETH", 1250, 3), ("DAI", 420, 0)],
            ),
            account(
                "0x4bbeEB066eD09B7AEd07bF39EEe0460DFa261520",
                "Ethereum",
                WalletType::Mnemonic,
                false,
                &[("ETH", 35, 2)],
            ),
            account(
                "0xfE5443FaC29fA621cFc33D41D1927fd0f5E0bB7c",
                "Goerli",
                WalletType::ViewOnly,
                false,
                &[],
            ),
            account(
                "0x1f9840a85d5aF5bf1D1762F925BDADdC4201F984",
                "Ethereum",
                WalletType::Web3,
                false,
                &[("UNI", 3000, 1), ("ETH", 2, 1)],
            ),
        ];

        let address_book = vec![
            AddressBookEntry {
                uuid: Uuid::new_v4(),
                label: "Hardware Vault".to_string(),
                address: accounts[0].address.clone(),
                network: accounts[0].network.clone(),
                notes: "Cold storage".to_string(),
            },
            AddressBookEntry {
                uuid: Uuid::new_v4(),
                label: "Daily Spending".to_string(),
                address: accounts[1].address.clone(),
                network: accounts[1].network.clone(),
                notes: String::new(),
            },
        ];

        let rates = [("ETH", 1850, 0), ("DAI", 1, 0), ("UNI", 625, 2)]
            .into_iter()
            .map(|(ticker, num, scale)| (ticker.to_string(), Decimal::new(num, scale)))
            .collect();

        Self { accounts, address_book, rates }
    }
}
