//! Calculation logic for the promotion statistics engine.
//!
//! This module contains the stages of the statistics pipeline: per-employee
//! derivation of age, seniority, time in position, composite score and
//! eligibility; ranking of eligible employees and promotion cohort selection;
//! aggregation into grouped counters and bracket histograms; and assembly of
//! the final report with its presentation rounding.

mod aggregation;
mod assembly;
mod derivation;
mod pipeline;
mod ranking;

pub use aggregation::{AggregationResult, Aggregates, aggregate};
pub use assembly::{POINTS_DECIMALS, RATE_DECIMALS, YEARS_DECIMALS, assemble_report};
pub use derivation::{
    DAYS_PER_MONTH, DerivationResult, ELIGIBILITY_MONTHS, ELIGIBILITY_THRESHOLD_DAYS,
    completed_years, derive_all, derive_employee, is_eligible,
};
pub use pipeline::{PipelineOutput, compute_report, run_pipeline};
pub use ranking::{CohortSelection, LEADERBOARD_SIZE, PROMOTION_QUOTA, cohort_size, select_cohort};
