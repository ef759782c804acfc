//! # Cashdesk Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cashdesk Console                                 │
//! │                                                                         │
//! │  main.rs ──────► Parses arguments (clap)                                │
//! │                                                                         │
//! │  lib.rs ───────► Logging, catalog load, command loop                    │
//! │                                                                         │
//! │  commands/ ────► open, close, sale                                      │
//! │                                                                         │
//! │  state/ ───────► AppConfig, Till                                        │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                         cashdesk-core                            │  │
//! │  │  Catalog, ShiftManager, SaleDraft, Tender, report rendering      │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A fatal startup error is returned from `main`, which prints it and exits
//! with status 1.

use cashdesk_cli::state::Cli;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    cashdesk_cli::run(Cli::parse().into())
}
