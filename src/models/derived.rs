//! Per-employee values derived for one evaluation date.

use rust_decimal::Decimal;
use serde::Serialize;

use super::EmployeeRecord;

/// An employee record enriched with the values the statistics depend on.
///
/// Produced by [`crate::calculation::derive_employee`] and discarded once the
/// report has been assembled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedEmployee {
    /// The originating snapshot record, unchanged.
    pub record: EmployeeRecord,
    /// Completed years since the birth date.
    pub age_years: u32,
    /// Completed years since the first appointment.
    pub seniority_years: u32,
    /// Days since the appointment to the current position.
    pub time_in_position_days: i64,
    /// Sum of the three point components.
    pub composite_score: Decimal,
    /// Whether the time in position reaches the eligibility threshold.
    pub eligible: bool,
}
