pub mod memory;
pub mod models;
pub mod snapshot;

pub use memory::{InMemoryAccounts, InMemoryAddressBook, RateTable, SummingTotals};
pub use models::{Account, AddressBookEntry, AssetBalance, Fiat, NewAddressBookEntry, WalletType};
pub use snapshot::{Snapshot, Stores};
