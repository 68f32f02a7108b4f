pub mod config;
pub mod error;
pub mod storage;
pub mod table;
pub mod traits;
pub mod tui;
pub mod utils;

pub use config::Config;
pub use error::{Result, TableError};
pub use table::{AccountTableBuilder, TableDescriptor, TableFlags};
