//! In-memory snapshot source.

use crate::error::EngineResult;
use crate::models::{EmployeeRecord, EmployeeRow};

use super::{SnapshotSource, records_from_rows};

/// A snapshot held in memory as storage rows.
#[derive(Debug, Clone)]
pub struct InMemorySnapshot {
    name: String,
    rows: Vec<EmployeeRow>,
}

impl InMemorySnapshot {
    /// Creates a snapshot source over the given rows.
    pub fn new(name: impl Into<String>, rows: Vec<EmployeeRow>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Returns the rows in snapshot order.
    pub fn rows(&self) -> &[EmployeeRow] {
        &self.rows
    }
}

impl SnapshotSource for InMemorySnapshot {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> EngineResult<Vec<EmployeeRecord>> {
        records_from_rows(self.rows.clone())
    }
}
