pub mod accounts;
pub mod dashboard;
pub mod settings;
