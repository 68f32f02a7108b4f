//! Collaborator seams for the account table.
//!
//! The table never owns application state. Everything it reads or mutates
//! goes through one of these traits.

pub mod account_store;
pub mod address_book;
pub mod rates;
pub mod settings;

pub use account_store::AccountStore;
pub use address_book::AddressBook;
pub use rates::{FiatTotals, RateLookup};
pub use settings::Settings;
