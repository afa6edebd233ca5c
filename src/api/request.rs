//! Request types for the promotion statistics API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Query parameters accepted by `GET /stats`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsQuery {
    /// The date to evaluate the snapshot against (`YYYY-MM-DD`).
    /// Defaults to today's local date.
    #[serde(default)]
    pub evaluation_date: Option<NaiveDate>,
}
