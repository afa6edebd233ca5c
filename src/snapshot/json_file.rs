//! JSON file snapshot source.
//!
//! Reads a JSON array of employee rows, the format the roster export
//! produces.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeRecord, EmployeeRow};

use super::{SnapshotSource, records_from_rows};

/// A snapshot read from a JSON file on every load.
///
/// # Example
///
/// ```no_run
/// use promotion_stats::snapshot::{JsonFileSnapshot, SnapshotSource};
///
/// let source = JsonFileSnapshot::new("./data/employees.json");
/// let records = source.load()?;
/// println!("{} employees", records.len());
/// # Ok::<(), promotion_stats::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileSnapshot {
    path: PathBuf,
    name: String,
}

impl JsonFileSnapshot {
    /// Creates a source reading from `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path.display().to_string();
        Self { path, name }
    }

    /// Returns the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_rows(&self) -> EngineResult<Vec<EmployeeRow>> {
        let content =
            fs::read_to_string(&self.path).map_err(|e| EngineError::SnapshotUnavailable {
                source_name: self.name.clone(),
                message: e.to_string(),
            })?;

        serde_json::from_str(&content).map_err(|e| EngineError::SnapshotMalformed {
            source_name: self.name.clone(),
            message: e.to_string(),
        })
    }
}

impl SnapshotSource for JsonFileSnapshot {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> EngineResult<Vec<EmployeeRecord>> {
        let rows = self.read_rows()?;
        debug!(source = %self.name, rows = rows.len(), "Read snapshot rows");
        records_from_rows(rows)
    }
}
