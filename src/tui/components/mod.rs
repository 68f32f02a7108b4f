pub mod accounts_table;
pub mod confirm;
pub mod header;
pub mod help;
pub mod label_editor;
pub mod logs;
pub mod stats;
