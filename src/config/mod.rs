//! # Configuration Management Module
//!
//! Startup configuration for the `reelslots` binary, loaded from a TOML file.
//!
//! ## Configuration Structure
//!
//! - [`MachineConfig`] - Which reel and payout tables to use, and an optional RNG seed
//! - [`SpinConfig`] - Defaults for the `spin` command
//! - [`LoggingConfig`] - Log level and optional log file
//!
//! ## Usage
//!
//! ```rust,no_run
//! use reelslots::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml").await?;
//!     let machine = config.machine.build_machine()?;
//!     println!("{} combinations", machine.lookup_table().combinations());
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration File Format
//!
//! ```toml
//! [machine]
//! lookup_table = "data/tables/lookup_table.json"
//! payout_table = "data/tables/payout_table.json"
//! tables_dir = "data/tables"
//!
//! [spin]
//! bet = 1
//! count = 1
//!
//! [logging]
//! level = "info"
//! ```
//!
//! Both table entries are optional; a missing entry means the built-in default table.
//! CLI arguments take precedence over the file.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::slots::{tables, SlotError, SlotMachine};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub machine: MachineConfig,
    #[serde(default)]
    pub spin: SpinConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineConfig {
    /// JSON reel strips replacing the default lookup table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lookup_table: Option<String>,
    /// JSON rules replacing the default payout schedule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_table: Option<String>,
    /// Seed for reproducible spins. Unset means the thread-local generator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Where `init` writes the default tables.
    #[serde(default = "default_tables_dir")]
    pub tables_dir: String,
}

fn default_tables_dir() -> String {
    "data/tables".to_string()
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            lookup_table: None,
            payout_table: None,
            seed: None,
            tables_dir: default_tables_dir(),
        }
    }
}

impl MachineConfig {
    /// Build a machine, loading whichever tables are overridden.
    pub fn build_machine(&self) -> Result<SlotMachine, SlotError> {
        let mut builder = SlotMachine::builder();
        if let Some(path) = &self.lookup_table {
            builder = builder.lookup_table(tables::load_lookup_table(path)?);
            log::info!("Loaded lookup table from {}", path);
        }
        if let Some(path) = &self.payout_table {
            builder = builder.payout_schedule(tables::load_payout_schedule(path)?);
            log::info!("Loaded payout table from {}", path);
        }
        Ok(builder.build())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpinConfig {
    /// Credits wagered per spin.
    #[serde(default = "default_bet")]
    pub bet: u32,
    /// Spins per `spin` invocation.
    #[serde(default = "default_count")]
    pub count: u32,
}

fn default_bet() -> u32 {
    1
}

fn default_count() -> u32 {
    1
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            bet: default_bet(),
            count: default_count(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parsed level; unknown names fall back to info.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or_else(|_| {
            eprintln!("Invalid log level '{}', defaulting to info", self.level);
            log::LevelFilter::Info
        })
    }
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        if config.spin.bet == 0 {
            return Err(anyhow!(
                "Invalid config file {}: spin.bet must be positive",
                path
            ));
        }

        Ok(config)
    }

    /// Create a default configuration file
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }
}
