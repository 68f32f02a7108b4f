use rust_decimal::Decimal;

use crate::storage::models::Account;

/// Exchange rate source for the selected fiat currency.
pub trait RateLookup {
    /// Fiat value of one unit of `ticker`, if a rate is known.
    fn rate(&self, ticker: &str) -> Option<Decimal>;
}

/// Converts an account's holdings into a single fiat total.
pub trait FiatTotals {
    fn total(&self, account: &Account, rates: &dyn RateLookup) -> Decimal;
}
