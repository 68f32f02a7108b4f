use serde::{Deserialize, Serialize};

use crate::{storage::models::Fiat, table::TableFlags, traits::Settings};

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub display: DisplayConfig,
    /// Flags for the full Accounts screen. The dashboard preview always
    /// runs favoritable in dashboard mode.
    pub table: TableFlags,
    pub tui: TuiConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DataConfig {
    pub snapshot_path: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub fiat: Fiat,
    pub dashboard_rows: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TuiConfig {
    pub tick_rate_ms: u64,
    /// `default` or `dark`
    pub theme: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            snapshot_path: "data/accounts.json".to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            fiat: Fiat::Usd,
            dashboard_rows: 5,
        }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            theme: "default".to_string(),
        }
    }
}

impl Config {
    /// Layer `config/default`, the file passed on the command line and
    /// `WALLET_TABLE__*` environment variables, in that order.
    pub fn load(path: Option<&str>) -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false));

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(true));
        }

        let config = builder
            .add_source(config::Environment::with_prefix("WALLET_TABLE").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    pub fn accounts_table_flags(&self) -> TableFlags {
        TableFlags {
            dashboard: false,
            ..self.table
        }
    }

    pub fn dashboard_table_flags(&self) -> TableFlags {
        TableFlags {
            deletable: false,
            favoritable: true,
            copyable: self.table.copyable,
            dashboard: true,
        }
    }
}

impl Settings for Config {
    fn fiat(&self) -> Fiat {
        self.display.fiat
    }
}
