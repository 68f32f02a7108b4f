use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A wallet address tracked by the application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub uuid: Uuid,
    pub address: String,
    pub network: String,
    pub wallet_type: WalletType,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub assets: Vec<AssetBalance>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetBalance {
    pub ticker: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum WalletType {
    Web3,
    Ledger,
    Trezor,
    Mnemonic,
    PrivateKey,
    Keystore,
    ViewOnly,
}

impl std::fmt::Display for WalletType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WalletType::Web3 => write!(f, "Web3"),
            WalletType::Ledger => write!(f, "Ledger"),
            WalletType::Trezor => write!(f, "Trezor"),
            WalletType::Mnemonic => write!(f, "Mnemonic"),
            WalletType::PrivateKey => write!(f, "Private Key"),
            WalletType::Keystore => write!(f, "Keystore"),
            WalletType::ViewOnly => write!(f, "View Only"),
        }
    }
}

/// User-assigned label and notes, keyed by address and network.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddressBookEntry {
    pub uuid: Uuid,
    pub label: String,
    pub address: String,
    pub network: String,
    #[serde(default)]
    pub notes: String,
}

/// An address-book entry that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAddressBookEntry {
    pub label: String,
    pub address: String,
    pub network: String,
    pub notes: String,
}

impl NewAddressBookEntry {
    pub fn with_id(self, uuid: Uuid) -> AddressBookEntry {
        AddressBookEntry {
            uuid,
            label: self.label,
            address: self.address,
            network: self.network,
            notes: self.notes,
        }
    }
}

/// Display currency selected in settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Fiat {
    #[default]
    Usd,
    Eur,
    Gbp,
    Jpy,
    Chf,
}

impl Fiat {
    pub fn code(&self) -> &'static str {
        match self {
            Fiat::Usd => "USD",
            Fiat::Eur => "EUR",
            Fiat::Gbp => "GBP",
            Fiat::Jpy => "JPY",
            Fiat::Chf => "CHF",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Fiat::Usd => "$",
            Fiat::Eur => "€",
            Fiat::Gbp => "£",
            Fiat::Jpy => "¥",
            Fiat::Chf => "CHF ",
        }
    }
}

impl Account {
    #[cfg(test)]
    pub fn sample(address: &str, network: &str) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            address: address.to_string(),
            network: network.to_string(),
            wallet_type: WalletType::ViewOnly,
            favorite: false,
            assets: Vec::new(),
        }
    }
}
