//! Snapshot sources for the promotion statistics engine.
//!
//! The engine never talks to storage directly. A [`SnapshotSource`] hands it
//! the full roster as of "now"; every report computation loads its own
//! snapshot.
//!
//! # Example
//!
//! ```
//! use promotion_stats::snapshot::{InMemorySnapshot, SnapshotSource};
//!
//! let source = InMemorySnapshot::new("empty", vec![]);
//! assert!(source.load().unwrap().is_empty());
//! ```

mod json_file;
mod memory;

pub use json_file::JsonFileSnapshot;
pub use memory::InMemorySnapshot;

use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeRecord, EmployeeRow};

/// Supplies a complete, ordered employee snapshot.
pub trait SnapshotSource: Send + Sync {
    /// A short name used in logs and error messages.
    fn name(&self) -> &str;

    /// Loads the full snapshot.
    ///
    /// Loading is all-or-nothing: any unreadable source or unusable row fails
    /// the whole load.
    fn load(&self) -> EngineResult<Vec<EmployeeRecord>>;
}

/// Converts storage rows into typed records, stopping at the first bad row.
pub fn records_from_rows(rows: Vec<EmployeeRow>) -> EngineResult<Vec<EmployeeRecord>> {
    rows.into_iter()
        .map(EmployeeRecord::try_from)
        .collect::<Result<Vec<_>, EngineError>>()
}
