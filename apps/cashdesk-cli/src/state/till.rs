//! # Till State
//!
//! Everything the command loop works on: the loaded catalog and the shift
//! manager. One `Till` lives for the whole session and is handed to each
//! command by mutable reference.

use cashdesk_core::{Catalog, ShiftManager};

/// The register: products for sale plus the shift lifecycle.
#[derive(Debug, Default)]
pub struct Till {
    pub catalog: Catalog,
    pub shifts: ShiftManager,
}

impl Till {
    /// A till with no shift open.
    pub fn new(catalog: Catalog) -> Self {
        Till {
            catalog,
            shifts: ShiftManager::new(),
        }
    }
}
