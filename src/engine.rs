//! Statistics runs over a snapshot source.
//!
//! This is the entry point hosts use: it loads a snapshot, fixes the
//! evaluation date, runs the pipeline and wraps the report with run metadata
//! and an audit trace.

use std::time::Instant;

use chrono::{Local, NaiveDate, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::run_pipeline;
use crate::error::EngineResult;
use crate::models::{AuditTrace, StatisticsRun};
use crate::snapshot::SnapshotSource;

/// Returns today's local date, the default evaluation date.
///
/// Callers take this once per run and pass it down.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Loads a snapshot and computes its statistics for `evaluation_date`.
///
/// # Returns
///
/// A [`StatisticsRun`] on success, or the first error from the snapshot
/// source or the pipeline. No partial report is ever returned.
///
/// # Example
///
/// ```
/// use promotion_stats::engine::generate_statistics;
/// use promotion_stats::snapshot::InMemorySnapshot;
/// use chrono::NaiveDate;
///
/// let source = InMemorySnapshot::new("empty", vec![]);
/// let evaluation_date = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
/// let run = generate_statistics(&source, evaluation_date).unwrap();
///
/// assert_eq!(run.evaluation_date, evaluation_date);
/// assert_eq!(run.report.total_employees, 0);
/// assert_eq!(run.audit_trace.steps.len(), 4);
/// ```
pub fn generate_statistics(
    source: &dyn SnapshotSource,
    evaluation_date: NaiveDate,
) -> EngineResult<StatisticsRun> {
    let start_time = Instant::now();
    let calculation_id = Uuid::new_v4();

    let records = source.load().inspect_err(|err| {
        warn!(
            calculation_id = %calculation_id,
            source = source.name(),
            error = %err,
            "Snapshot load failed"
        );
    })?;

    let output = run_pipeline(&records, evaluation_date).inspect_err(|err| {
        warn!(
            calculation_id = %calculation_id,
            error = %err,
            "Statistics computation failed"
        );
    })?;

    for warning in &output.warnings {
        warn!(
            calculation_id = %calculation_id,
            code = %warning.code,
            "{}",
            warning.message
        );
    }

    let duration_us = start_time.elapsed().as_micros() as u64;
    info!(
        calculation_id = %calculation_id,
        source = source.name(),
        %evaluation_date,
        total = output.report.total_employees,
        eligible = output.report.eligible_employees,
        promoted = output.report.promoted_employees,
        duration_us,
        "Statistics computed"
    );

    Ok(StatisticsRun {
        calculation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        evaluation_date,
        report: output.report,
        audit_trace: AuditTrace {
            steps: output.steps,
            warnings: output.warnings,
            duration_us,
        },
    })
}
