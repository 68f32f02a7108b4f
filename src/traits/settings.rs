use crate::storage::models::Fiat;

pub trait Settings {
    /// Currency totals are displayed in.
    fn fiat(&self) -> Fiat;
}
