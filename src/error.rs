use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Row {row} is out of range (table has {len} rows)")]
    RowOutOfRange { row: usize, len: usize },

    #[error("Account not found: {0}")]
    AccountNotFound(Uuid),

    #[error("No delete is pending")]
    NoPendingDelete,

    #[error("Unknown sort key: {0}")]
    InvalidSortKey(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, TableError>;
