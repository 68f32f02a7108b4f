pub mod builder;
pub mod cells;
pub mod projection;
pub mod sorting;

pub use builder::{AccountTableBuilder, TableContext, TableFlags};
pub use cells::{BodyCell, BodyRow, DeleteOverlay, HeaderCell, TableConfig, TableDescriptor};
pub use projection::{RowSources, TableRow, UNKNOWN_ACCOUNT_LABEL};
pub use sorting::{SortColumn, SortDirection, SortKey, SortingState};
