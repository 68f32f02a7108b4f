use crate::{error::Result, storage::models::Account};

/// Mutation callbacks into the account store.
pub trait AccountStore {
    /// Remove an account from the store.
    fn delete_account(&mut self, account: &Account) -> Result<()>;

    /// Replace the stored account that has the same uuid.
    fn update_account(&mut self, account: Account) -> Result<()>;
}
