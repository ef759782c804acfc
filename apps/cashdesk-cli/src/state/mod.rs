//! # Session State
//!
//! State owned by the running session.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  AppConfig (read-only)            Till (mutated by commands)            │
//! │  ────────────────────             ──────────────────────────            │
//! │  • catalog path                   • Catalog (loaded once)               │
//! │  • log filter                     • ShiftManager (closed / open)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod till;

pub use config::{AppConfig, Cli, DEFAULT_CATALOG_PATH, DEFAULT_LOG_FILTER};
pub use till::Till;
