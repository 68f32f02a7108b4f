mod cli;

use std::path::Path;

use clap::Parser;
use cli::{Cli, Commands};
use colored::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use wallet_account_table::{
    error::{Result, TableError},
    storage::{Snapshot, SummingTotals},
    table::{
        AccountTableBuilder, BodyCell, RowSources, SortDirection, SortKey, TableContext, TableDescriptor,
    },
    tui::{run_tui, App},
    utils, Config,
};

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("wallet_account_table=info,wallet_table=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match Config::load(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(path) = cli.snapshot {
        config.data.snapshot_path = path;
    }

    let result = match cli.command {
        Commands::Tui => run_dashboard(config).await,

        Commands::List { sort, format, dashboard } => list_accounts(&config, &sort, &format, dashboard),

        Commands::Init { force } => {
            info!("Initializing...");
            initialize(&config, force)
        }
    };

    if let Err(e) = result {
        error!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

async fn run_dashboard(config: Config) -> Result<()> {
    let snapshot = Snapshot::load(&config.data.snapshot_path)?;
    let app = App::new(config, snapshot.into_stores());
    run_tui(app).await
}

fn list_accounts(config: &Config, sort: &str, format: &str, dashboard: bool) -> Result<()> {
    let key: SortKey = sort.parse()?;
    let stores = Snapshot::load(&config.data.snapshot_path)?.into_stores();

    let mut flags = config.accounts_table_flags();
    flags.dashboard = dashboard;
    let builder = AccountTableBuilder::new(flags).with_sort(key);

    let ctx = TableContext {
        sources: RowSources {
            address_book: &stores.address_book,
            totals: &SummingTotals,
            rates: &stores.rates,
        },
        settings: config,
    };
    let table = builder.build(stores.accounts.accounts(), &ctx);

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&table)?),
        "table" => print_table(&table),
        other => {
            return Err(TableError::Config(format!(
                "unknown output format '{}', expected table or json",
                other
            )))
        }
    }

    Ok(())
}

fn print_table(table: &TableDescriptor) {
    const WIDTHS: [usize; 4] = [28, 44, 12, 18];

    println!("{}", "=== Accounts ===".cyan().bold());
    utils::print_table_border(110);
    let head: Vec<String> = table
        .head
        .iter()
        .filter(|h| h.column.is_some())
        .map(|h| match h.indicator {
            Some(SortDirection::Ascending) => format!("{} ▲", h.title),
            Some(SortDirection::Descending) => format!("{} ▼", h.title),
            None => h.title.clone(),
        })
        .collect();
    let head: Vec<&str> = head.iter().map(String::as_str).collect();
    utils::print_table_row(&head, &WIDTHS);
    utils::print_table_border(110);

    for row in &table.body {
        let mut columns: Vec<String> = Vec::with_capacity(4);
        for cell in &row.cells {
            match cell {
                BodyCell::Label { text, .. } => columns.push(text.clone()),
                BodyCell::Address { display, .. } => columns.push(display.clone()),
                BodyCell::Network { name } => columns.push(name.clone()),
                BodyCell::Value { formatted, .. } => columns.push(formatted.clone()),
                BodyCell::FavoriteToggle { .. } | BodyCell::DeleteTrigger => {}
            }
        }
        let columns: Vec<&str> = columns.iter().map(String::as_str).collect();
        utils::print_table_row(&columns, &WIDTHS);
    }
    utils::print_table_border(110);

    println!(
        "{} accounts, total {}",
        table.body.len(),
        utils::format_fiat_colored(table.grand_total, table.fiat)
    );
}

fn initialize(config: &Config, force: bool) -> Result<()> {
    println!("{}", "Initializing wallet account table...".green());

    let snapshot_path = Path::new(&config.data.snapshot_path);
    if snapshot_path.exists() && !force {
        println!("{}", format!("✓ Snapshot already exists at {}", snapshot_path.display()).yellow());
    } else {
        Snapshot::sample().save(snapshot_path)?;
        println!("{}", format!("✓ Sample snapshot written to {}", snapshot_path.display()).green());
    }

    let config_path = Path::new(DEFAULT_CONFIG_PATH);
    if config_path.exists() && !force {
        println!("{}", format!("✓ Configuration already exists at {}", DEFAULT_CONFIG_PATH).yellow());
    } else {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let rendered = toml::to_string_pretty(config)
            .map_err(|e| TableError::Config(e.to_string()))?;
        std::fs::write(config_path, rendered)?;
        println!("{}", format!("✓ Configuration written to {}", DEFAULT_CONFIG_PATH).green());
    }

    println!("\n{}", "Configuration:".cyan());
    println!("  Snapshot:     {}", config.data.snapshot_path);
    println!("  Currency:     {}", config.display.fiat.code());
    println!("  Deletable:    {}", config.table.deletable);
    println!("  Favoritable:  {}", config.table.favoritable);
    println!("  Copyable:     {}", config.table.copyable);

    println!("\n{}", "Ready to use! Try running:".cyan());
    println!("  {} to print the table", "wallet-table list".yellow());
    println!("  {} to sort by label", "wallet-table list --sort label".yellow());
    println!("  {} to launch the dashboard", "wallet-table tui".yellow());
    Ok(())
}
