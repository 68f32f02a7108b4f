//! Column sort state and comparator dispatch.
//!
//! Every sortable column remembers its own direction. Toggling a column
//! flips that column only and makes it the active sort.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::{error::TableError, table::projection::TableRow, utils::locale_compare};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    Label,
    Address,
    Network,
    Value,
}

impl SortColumn {
    pub const ALL: [SortColumn; 4] = [
        SortColumn::Label,
        SortColumn::Address,
        SortColumn::Network,
        SortColumn::Value,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SortColumn::Label => "Label",
            SortColumn::Address => "Address",
            SortColumn::Network => "Network",
            SortColumn::Value => "Value",
        }
    }

    fn slot(&self) -> usize {
        match self {
            SortColumn::Label => 0,
            SortColumn::Address => 1,
            SortColumn::Network => 2,
            SortColumn::Value => 3,
        }
    }
}

/// Direction token for one column: its base form or its `-reverse` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    Label,
    LabelReverse,
    Address,
    AddressReverse,
    Network,
    NetworkReverse,
    Value,
    ValueReverse,
}

/// Which way rows run for a given key, as shown next to a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

pub type Comparator = fn(&TableRow, &TableRow) -> Ordering;

impl SortKey {
    pub fn base(column: SortColumn) -> Self {
        match column {
            SortColumn::Label => SortKey::Label,
            SortColumn::Address => SortKey::Address,
            SortColumn::Network => SortKey::Network,
            SortColumn::Value => SortKey::Value,
        }
    }

    pub fn column(&self) -> SortColumn {
        match self {
            SortKey::Label | SortKey::LabelReverse => SortColumn::Label,
            SortKey::Address | SortKey::AddressReverse => SortColumn::Address,
            SortKey::Network | SortKey::NetworkReverse => SortColumn::Network,
            SortKey::Value | SortKey::ValueReverse => SortColumn::Value,
        }
    }

    pub fn is_reverse(&self) -> bool {
        matches!(
            self,
            SortKey::LabelReverse
                | SortKey::AddressReverse
                | SortKey::NetworkReverse
                | SortKey::ValueReverse
        )
    }

    /// The other token of the same column.
    pub fn flipped(&self) -> Self {
        match self {
            SortKey::Label => SortKey::LabelReverse,
            SortKey::LabelReverse => SortKey::Label,
            SortKey::Address => SortKey::AddressReverse,
            SortKey::AddressReverse => SortKey::Address,
            SortKey::Network => SortKey::NetworkReverse,
            SortKey::NetworkReverse => SortKey::Network,
            SortKey::Value => SortKey::ValueReverse,
            SortKey::ValueReverse => SortKey::Value,
        }
    }

    /// `value` lists the largest totals first; every text column lists A→Z first.
    pub fn direction(&self) -> SortDirection {
        match self {
            SortKey::Value => SortDirection::Descending,
            SortKey::ValueReverse => SortDirection::Ascending,
            key if key.is_reverse() => SortDirection::Descending,
            _ => SortDirection::Ascending,
        }
    }

    pub fn comparator(&self) -> Comparator {
        match self {
            SortKey::Value => |a, b| b.total.cmp(&a.total),
            SortKey::ValueReverse => |a, b| a.total.cmp(&b.total),
            SortKey::Label => |a, b| locale_compare(&a.label, &b.label),
            SortKey::LabelReverse => |a, b| locale_compare(&b.label, &a.label),
            SortKey::Address => |a, b| locale_compare(&a.account.address, &b.account.address),
            SortKey::AddressReverse => |a, b| locale_compare(&b.account.address, &a.account.address),
            SortKey::Network => |a, b| locale_compare(&a.account.network, &b.account.network),
            SortKey::NetworkReverse => |a, b| locale_compare(&b.account.network, &a.account.network),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Label => "label",
            SortKey::LabelReverse => "label-reverse",
            SortKey::Address => "address",
            SortKey::AddressReverse => "address-reverse",
            SortKey::Network => "network",
            SortKey::NetworkReverse => "network-reverse",
            SortKey::Value => "value",
            SortKey::ValueReverse => "value-reverse",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortKey {
    type Err = TableError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "label" => Ok(SortKey::Label),
            "label-reverse" => Ok(SortKey::LabelReverse),
            "address" => Ok(SortKey::Address),
            "address-reverse" => Ok(SortKey::AddressReverse),
            "network" => Ok(SortKey::Network),
            "network-reverse" => Ok(SortKey::NetworkReverse),
            "value" => Ok(SortKey::Value),
            "value-reverse" => Ok(SortKey::ValueReverse),
            other => Err(TableError::InvalidSortKey(other.to_string())),
        }
    }
}

/// Per-column directions plus the active key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortingState {
    directions: [SortKey; 4],
    active: SortKey,
}

impl Default for SortingState {
    fn default() -> Self {
        Self {
            directions: SortColumn::ALL.map(SortKey::base),
            active: SortKey::Value,
        }
    }
}

impl SortingState {
    /// Start with every column in its base form and `key` active.
    pub fn with_active(key: SortKey) -> Self {
        let mut state = Self::default();
        state.directions[key.column().slot()] = key;
        state.active = key;
        state
    }

    pub fn active(&self) -> SortKey {
        self.active
    }

    pub fn direction_of(&self, column: SortColumn) -> SortKey {
        self.directions[column.slot()]
    }

    /// Flip `column` and make it active. Other columns keep their direction.
    #[must_use]
    pub fn toggle(self, column: SortColumn) -> Self {
        let mut next = self;
        let flipped = self.direction_of(column).flipped();
        next.directions[column.slot()] = flipped;
        next.active = flipped;
        next
    }

    pub fn sort(&self, rows: &mut [TableRow]) {
        rows.sort_by(self.active.comparator());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::models::Account;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn row(address: &str, label: &str, total: i64) -> TableRow {
        TableRow {
            account: Account::sample(address, "Ethereum"),
            index: 0,
            label: label.to_string(),
            total: Decimal::new(total, 0),
            entry: None,
        }
    }

    fn active_matches_exactly_one(state: &SortingState) -> bool {
        SortColumn::ALL
            .iter()
            .filter(|c| state.direction_of(**c) == state.active())
            .count()
            == 1
    }

    #[test]
    fn test_default_state() {
        let state = SortingState::default();
        assert_eq!(state.active(), SortKey::Value);
        for column in SortColumn::ALL {
            assert_eq!(state.direction_of(column), SortKey::base(column));
        }
        assert!(active_matches_exactly_one(&state));
    }

    #[test]
    fn test_toggle_flips_only_that_column() {
        let state = SortingState::default().toggle(SortColumn::Label);
        assert_eq!(state.active(), SortKey::LabelReverse);
        assert_eq!(state.direction_of(SortColumn::Label), SortKey::LabelReverse);
        assert_eq!(state.direction_of(SortColumn::Value), SortKey::Value);
        assert_eq!(state.direction_of(SortColumn::Address), SortKey::Address);
    }

    #[test]
    fn test_columns_remember_their_direction() {
        let state = SortingState::default()
            .toggle(SortColumn::Value)
            .toggle(SortColumn::Network)
            .toggle(SortColumn::Value);

        assert_eq!(state.direction_of(SortColumn::Network), SortKey::NetworkReverse);
        assert_eq!(state.active(), SortKey::Value);
    }

    #[test]
    fn test_default_sort_orders_by_value_descending() {
        let mut rows = vec![row("0xa", "A", 10), row("0xb", "B", 5), row("0xc", "C", 20)];
        SortingState::default().sort(&mut rows);
        let labels: Vec<_> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_label_sort_is_case_insensitive() {
        let mut rows = vec![row("0x1", "bravo", 0), row("0x2", "Alpha", 0), row("0x3", "charlie", 0)];
        SortingState::with_active(SortKey::Label).sort(&mut rows);
        let labels: Vec<_> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Alpha", "bravo", "charlie"]);

        SortingState::with_active(SortKey::LabelReverse).sort(&mut rows);
        let labels: Vec<_> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["charlie", "bravo", "Alpha"]);
    }

    #[test]
    fn test_every_key_orders_its_column() {
        let shuffled = || {
            let mut charlie = row("0xb", "Charlie", 10);
            charlie.account.network = "Arbitrum".to_string();
            let mut alpha = row("0xc", "Alpha", 30);
            alpha.account.network = "Base".to_string();
            let mut bravo = row("0xa", "Bravo", 5);
            bravo.account.network = "Optimism".to_string();
            vec![charlie, alpha, bravo]
        };
        let sorted_by = |key: SortKey| {
            let mut rows = shuffled();
            SortingState::with_active(key).sort(&mut rows);
            rows.into_iter().map(|r| r.label).collect::<Vec<_>>()
        };

        let cases = [
            (SortKey::Label, ["Alpha", "Bravo", "Charlie"]),
            (SortKey::Address, ["Bravo", "Charlie", "Alpha"]),
            (SortKey::Network, ["Charlie", "Alpha", "Bravo"]),
            (SortKey::Value, ["Alpha", "Charlie", "Bravo"]),
        ];
        for (key, expected) in cases {
            assert_eq!(sorted_by(key), expected, "{}", key);

            let mut reversed = expected.to_vec();
            reversed.reverse();
            assert_eq!(sorted_by(key.flipped()), reversed, "{}", key.flipped());
        }
    }

    #[test]
    fn test_parse_sort_key() {
        assert_eq!("network-reverse".parse::<SortKey>().unwrap(), SortKey::NetworkReverse);
        assert!(matches!(
            "balance".parse::<SortKey>(),
            Err(TableError::InvalidSortKey(_))
        ));
    }

    #[test]
    fn test_header_directions() {
        assert_eq!(SortKey::Value.direction(), SortDirection::Descending);
        assert_eq!(SortKey::ValueReverse.direction(), SortDirection::Ascending);
        assert_eq!(SortKey::Label.direction(), SortDirection::Ascending);
        assert_eq!(SortKey::AddressReverse.direction(), SortDirection::Descending);
    }

    fn column_strategy() -> impl Strategy<Value = SortColumn> {
        prop::sample::select(SortColumn::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_toggle_twice_restores_direction(
            history in prop::collection::vec(column_strategy(), 0..12),
            column in column_strategy(),
        ) {
            let state = history.into_iter().fold(SortingState::default(), SortingState::toggle);
            let twice = state.toggle(column).toggle(column);
            prop_assert_eq!(twice.direction_of(column), state.direction_of(column));
            prop_assert!(active_matches_exactly_one(&twice));
        }

        #[test]
        fn prop_value_sort_is_monotone(totals in prop::collection::vec(-1_000_000i64..1_000_000, 0..40)) {
            let mut rows: Vec<_> = totals.iter().map(|t| row("0x0", "x", *t)).collect();

            SortingState::default().sort(&mut rows);
            prop_assert!(rows.windows(2).all(|w| w[0].total >= w[1].total));

            SortingState::with_active(SortKey::ValueReverse).sort(&mut rows);
            prop_assert!(rows.windows(2).all(|w| w[0].total <= w[1].total));
        }
    }
}
