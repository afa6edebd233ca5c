//! Application state for the promotion statistics API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::snapshot::SnapshotSource;

/// Shared application state.
///
/// Holds the snapshot source every request loads its own snapshot from.
#[derive(Clone)]
pub struct AppState {
    /// The employee snapshot source.
    snapshot: Arc<dyn SnapshotSource>,
}

impl AppState {
    /// Creates a new application state over the given snapshot source.
    pub fn new<S: SnapshotSource + 'static>(snapshot: S) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
        }
    }

    /// Returns a shared handle to the snapshot source.
    pub fn snapshot(&self) -> Arc<dyn SnapshotSource> {
        Arc::clone(&self.snapshot)
    }
}
