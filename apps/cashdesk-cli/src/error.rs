//! # App Error Type
//!
//! Unified error type for console commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Console Till                       │
//! │                                                                         │
//! │  Prompt input invalid ──► ValidationError ──► message, ask again        │
//! │                            (never reaches this type)                    │
//! │                                                                         │
//! │  Command fails ──► AppError::Core ──► "Error: ..." on stderr,           │
//! │                                       command loop continues            │
//! │                                                                         │
//! │  stdin closed ──► AppError::InputClosed ──► sale abandoned,             │
//! │                                             session ends                │
//! │                                                                         │
//! │  Catalog unreadable ──► AppError::CatalogUnavailable ──► exit code 1    │
//! │  Console write fails ──► AppError::Io ──────────────────► exit code 1   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::path::PathBuf;

use cashdesk_core::CoreError;
use thiserror::Error;

/// Errors raised by the console layer.
#[derive(Debug, Error)]
pub enum AppError {
    /// The catalog file could not be opened or read at startup.
    #[error("cannot open product catalog {}", .path.display())]
    CatalogUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Standard input reached end of file.
    #[error("input closed")]
    InputClosed,

    /// Reading or writing the console failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),

    /// A business rule refused the operation.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl AppError {
    /// Whether the command loop can carry on after reporting this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::Core(_))
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_are_shown_verbatim() {
        let err: AppError = CoreError::ShiftAlreadyOpen.into();
        assert_eq!(err.to_string(), "A shift is already open");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_catalog_error_names_the_file() {
        let err = AppError::CatalogUnavailable {
            path: PathBuf::from("missing.csv"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "cannot open product catalog missing.csv");
        assert!(!err.is_recoverable());
        assert!(!AppError::InputClosed.is_recoverable());
    }
}
