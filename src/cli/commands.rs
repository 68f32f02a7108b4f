use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "wallet-table")]
#[command(about = "Sortable wallet account table with fiat totals and inline labels")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Override the snapshot file from the configuration
    #[arg(short, long, global = true)]
    pub snapshot: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch interactive TUI dashboard
    Tui,

    /// Print the account table
    List {
        /// Sort key: label, address, network, value (each with optional -reverse)
        #[arg(long, default_value = "value")]
        sort: String,

        /// Output format: table or json
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Shorten addresses as on the dashboard
        #[arg(short, long)]
        dashboard: bool,
    },

    /// Write a sample snapshot and default configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },
}
