use crate::{
    error::Result,
    storage::models::{AddressBookEntry, NewAddressBookEntry},
};

/// Read and mutation access to the address book.
pub trait AddressBook {
    /// Find the entry recorded for an address, if any.
    fn lookup(&self, address: &str) -> Option<AddressBookEntry>;

    fn update_entry(&mut self, entry: AddressBookEntry) -> Result<()>;

    fn create_entry(&mut self, entry: NewAddressBookEntry) -> Result<AddressBookEntry>;
}
