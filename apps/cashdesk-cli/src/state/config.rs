//! # Configuration
//!
//! Startup configuration, parsed from the command line.
//!
//! ## Configuration Sources
//! 1. Command-line arguments (`cashdesk [CATALOG] --log-level <FILTER>`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after startup.

use std::path::PathBuf;

use clap::Parser;

/// Catalog file read when no path is given.
pub const DEFAULT_CATALOG_PATH: &str = "products.csv";

/// Log filter used when `--log-level` is not given.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "cashdesk", version, about = "Console cash register")]
pub struct Cli {
    /// Product catalog: one `name,code,price` record per line
    #[arg(value_name = "CATALOG", default_value = DEFAULT_CATALOG_PATH)]
    pub catalog: PathBuf,

    /// Diagnostic log filter, e.g. `info` or `cashdesk_core=debug`
    #[arg(long, value_name = "FILTER", default_value = DEFAULT_LOG_FILTER)]
    pub log_level: String,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Path of the product catalog file.
    pub catalog_path: PathBuf,

    /// `tracing` filter directive for stderr diagnostics.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        AppConfig {
            catalog_path: cli.catalog,
            log_filter: cli.log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["cashdesk"]).unwrap();
        assert_eq!(AppConfig::from(cli), AppConfig::default());
    }

    #[test]
    fn test_catalog_and_log_level() {
        let cli =
            Cli::try_parse_from(["cashdesk", "shop.csv", "--log-level", "debug"]).unwrap();
        let config = AppConfig::from(cli);

        assert_eq!(config.catalog_path, PathBuf::from("shop.csv"));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_rejects_extra_arguments() {
        assert!(Cli::try_parse_from(["cashdesk", "a.csv", "b.csv"]).is_err());
    }
}
