//! The statistics pipeline: derivation, cohort selection, aggregation, assembly.

use std::collections::{BTreeSet, HashSet};

use chrono::NaiveDate;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{AuditStep, AuditWarning, DerivedEmployee, EmployeeRecord, Report};

use super::aggregation::aggregate;
use super::assembly::assemble_report;
use super::derivation::derive_all;
use super::ranking::select_cohort;

/// Everything one pass of the pipeline produces.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// The assembled report.
    pub report: Report,
    /// One audit step per stage, in execution order.
    pub steps: Vec<AuditStep>,
    /// Snapshot peculiarities that did not stop the computation.
    pub warnings: Vec<AuditWarning>,
}

/// Runs every stage over a snapshot for one evaluation date.
///
/// Fails without producing any output if a single record is unusable.
pub fn run_pipeline(
    records: &[EmployeeRecord],
    evaluation_date: NaiveDate,
) -> EngineResult<PipelineOutput> {
    let derivation = derive_all(records, evaluation_date, 1)?;
    let employees = derivation.employees;
    debug!(
        employees = employees.len(),
        %evaluation_date,
        "Derived employee snapshot"
    );

    let selection = select_cohort(&employees, 2);
    debug!(
        eligible = selection.eligible_count(),
        cohort_size = selection.cohort_size,
        "Selected promotion cohort"
    );

    let aggregation = aggregate(&employees, &selection.promoted(), 3);
    let warnings = snapshot_warnings(&employees);
    let report = assemble_report(&employees, &selection, aggregation.aggregates);

    let assembly_step = AuditStep {
        step_number: 4,
        rule_id: "report_assembly".to_string(),
        rule_name: "Report Assembly".to_string(),
        input: serde_json::json!({
            "total_employees": report.total_employees,
            "eligible_employees": report.eligible_employees,
            "promoted_employees": report.promoted_employees
        }),
        output: serde_json::json!({
            "promotion_rate": report.promotion_rate.to_string(),
            "eligibility_rate": report.detailed_analysis.eligibility_rate.to_string(),
            "top_performers": report.detailed_analysis.top_performers.len()
        }),
        reasoning: format!(
            "{} of {} employees promoted ({}%)",
            report.promoted_employees, report.total_employees, report.promotion_rate
        ),
    };

    Ok(PipelineOutput {
        report,
        steps: vec![
            derivation.audit_step,
            selection.audit_step,
            aggregation.audit_step,
            assembly_step,
        ],
        warnings,
    })
}

/// Computes the statistics report for a snapshot and evaluation date.
///
/// Deterministic: the same records in the same order with the same
/// evaluation date always produce an identical report.
///
/// # Examples
///
/// ```
/// use promotion_stats::calculation::compute_report;
/// use chrono::NaiveDate;
///
/// let evaluation_date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let report = compute_report(&[], evaluation_date).unwrap();
///
/// assert_eq!(report.total_employees, 0);
/// assert!(report.detailed_analysis.top_performers.is_empty());
/// ```
pub fn compute_report(
    records: &[EmployeeRecord],
    evaluation_date: NaiveDate,
) -> EngineResult<Report> {
    run_pipeline(records, evaluation_date).map(|output| output.report)
}

fn snapshot_warnings(employees: &[DerivedEmployee]) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();

    let mut seen = HashSet::new();
    let duplicates: BTreeSet<&str> = employees
        .iter()
        .map(|e| e.record.id.as_str())
        .filter(|id| !seen.insert(*id))
        .collect();
    if !duplicates.is_empty() {
        warnings.push(AuditWarning {
            code: "DUPLICATE_EMPLOYEE_ID".to_string(),
            message: format!(
                "Employee identifiers appear more than once: {}",
                duplicates.into_iter().collect::<Vec<_>>().join(", ")
            ),
            severity: "medium".to_string(),
        });
    }

    let under_twenty = employees.iter().filter(|e| e.age_years < 20).count();
    if under_twenty > 0 {
        warnings.push(AuditWarning {
            code: "AGE_BELOW_LOWEST_BRACKET".to_string(),
            message: format!(
                "{} employees are younger than 20 and were counted in the 20-29 bracket",
                under_twenty
            ),
            severity: "low".to_string(),
        });
    }

    warnings
}
