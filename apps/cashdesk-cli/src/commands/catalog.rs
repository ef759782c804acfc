//! # Catalog Loading

use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use cashdesk_core::Catalog;
use tracing::{info, warn};

use crate::console::Console;
use crate::error::{AppError, AppResult};

/// Reads the catalog file and reports what was loaded.
///
/// Bytes that are not valid UTF-8 are replaced, so one bad line cannot
/// block the whole file.
///
/// ## Errors
/// `CatalogUnavailable` if the file cannot be opened or read.
pub fn load_catalog<R: BufRead, W: Write, E: Write>(
    path: &Path,
    console: &mut Console<R, W, E>,
) -> AppResult<Catalog> {
    let bytes = fs::read(path).map_err(|source| AppError::CatalogUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);

    let load = Catalog::parse(&text);
    for rejected in &load.rejected {
        console.warn(format_args!(
            "Error in line {}: {}",
            rejected.line_number, rejected.reason
        ))?;
    }

    console.say(format_args!(
        "Loaded {} products from {} lines",
        load.loaded(),
        load.total_lines
    ))?;
    if load.skipped() > 0 {
        console.warn(format_args!("Skipped {} malformed lines", load.skipped()))?;
        warn!(path = %path.display(), skipped = load.skipped(), "Catalog has malformed lines");
    }

    info!(
        path = %path.display(),
        loaded = load.loaded(),
        lines = load.total_lines,
        "Catalog loaded"
    );

    Ok(load.catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::testing::scripted;
    use std::path::PathBuf;

    fn write_catalog(name: &str, contents: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "cashdesk-{}-{}.csv",
            std::process::id(),
            name
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_reports_bad_lines() {
        let path = write_catalog(
            "mixed",
            b"Milk,1234567890123,2.50\nBread,12345,1.00\nCheese,9876543210987,abc\n",
        );
        let mut console = scripted(&[]);

        let catalog = load_catalog(&path, &mut console).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(console.output(), "Loaded 1 products from 3 lines\n");

        let errors = console.errors();
        assert!(errors.contains("Error in line 2: code '12345' must be exactly 13 characters"));
        assert!(errors.contains("Error in line 3: bad price"));
        assert!(errors.contains("Skipped 2 malformed lines"));
    }

    #[test]
    fn test_load_replaces_invalid_utf8() {
        let path = write_catalog("latin1", b"Caf\xe9,1234567890123,3.00\n");
        let mut console = scripted(&[]);

        let catalog = load_catalog(&path, &mut console).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.products()[0].name, "Caf\u{FFFD}");
        assert!(console.errors().is_empty());
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let path = std::env::temp_dir().join("cashdesk-definitely-missing.csv");
        let mut console = scripted(&[]);

        let err = load_catalog(&path, &mut console).unwrap_err();
        assert!(matches!(err, AppError::CatalogUnavailable { .. }));
        assert!(!err.is_recoverable());
    }
}
