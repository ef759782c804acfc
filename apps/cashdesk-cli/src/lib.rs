//! # Cashdesk CLI Library
//!
//! The console front end of the cash register. `main.rs` only parses
//! arguments and calls [`run`].
//!
//! ## Module Organization
//! ```text
//! cashdesk_cli/
//! ├── lib.rs          ◄─── You are here (logging setup & run)
//! ├── console.rs      ◄─── Prompts, retry loops, stdout/stderr
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── Command-line configuration
//! │   └── till.rs     ◄─── Catalog + shift manager
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command loop
//! │   ├── catalog.rs  ◄─── Catalog file loading
//! │   ├── shift.rs    ◄─── Open / close shift
//! │   └── sale.rs     ◄─── Sale and payment
//! └── error.rs        ◄─── App error type for commands
//! ```

pub mod commands;
pub mod console;
pub mod error;
pub mod state;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use console::Console;
use state::{AppConfig, Till, DEFAULT_LOG_FILTER};

/// Runs the cash register on the process's stdin and stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber to stderr, filter from --log-level             │
/// │     • Default: warn                                                     │
/// │                                                                         │
/// │  2. Load Catalog ─────────────────────────────────────────────────────► │
/// │     • Unreadable file: fatal, exit code 1                               │
/// │     • Bad lines: reported and skipped                                   │
/// │                                                                         │
/// │  3. Command Loop ─────────────────────────────────────────────────────► │
/// │     • Until `exit` or end of input                                      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(config: AppConfig) -> anyhow::Result<()> {
    init_tracing(&config.log_filter);

    info!(catalog = %config.catalog_path.display(), "Starting cashdesk");

    let mut console = Console::stdio();
    let catalog = commands::catalog::load_catalog(&config.catalog_path, &mut console)
        .context("failed to start the cash register")?;

    let mut till = Till::new(catalog);
    console.print(&commands::welcome_text())?;
    commands::run_session(&mut till, &mut console)?;

    Ok(())
}

/// Initializes the tracing subscriber for diagnostics on stderr.
///
/// ## Log Levels
/// - `--log-level debug` - Show every rejected catalog line and added item
/// - `--log-level cashdesk_core=info` - Shift and settlement events only
/// - Default: WARN level
///
/// An unparsable filter falls back to the default.
fn init_tracing(filter: &str) {
    let (env_filter, invalid) = match EnvFilter::try_new(filter) {
        Ok(env_filter) => (env_filter, false),
        Err(_) => (EnvFilter::new(DEFAULT_LOG_FILTER), true),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    if invalid {
        warn!(filter, "Invalid log filter, using the default");
    }
}
