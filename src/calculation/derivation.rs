//! Per-employee derivation: age, seniority, time in position, score and eligibility.
//!
//! Every value is computed against a single evaluation date supplied by the
//! caller, so one snapshot always yields mutually comparable results.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, DerivedEmployee, EmployeeRecord};

/// Minimum number of months in the current position before promotion.
pub const ELIGIBILITY_MONTHS: i64 = 24;

/// Length of an eligibility month in days.
pub const DAYS_PER_MONTH: i64 = 30;

/// Minimum days in the current position before promotion (24 x 30).
pub const ELIGIBILITY_THRESHOLD_DAYS: i64 = ELIGIBILITY_MONTHS * DAYS_PER_MONTH;

/// The employees derived from one snapshot, with the audit step documenting it.
#[derive(Debug, Clone)]
pub struct DerivationResult {
    /// One derived employee per snapshot record, in snapshot order.
    pub employees: Vec<DerivedEmployee>,
    /// The audit step recording this derivation.
    pub audit_step: AuditStep,
}

/// Returns true when `time_in_position_days` reaches the eligibility threshold.
///
/// # Examples
///
/// ```
/// use promotion_stats::calculation::is_eligible;
///
/// assert!(is_eligible(720));
/// assert!(!is_eligible(719));
/// ```
pub fn is_eligible(time_in_position_days: i64) -> bool {
    time_in_position_days >= ELIGIBILITY_THRESHOLD_DAYS
}

/// Returns the number of completed years between `since` and `evaluation_date`.
///
/// Month and day are taken into account, so the count only increases on the
/// anniversary. Returns `None` when `since` is after `evaluation_date`.
///
/// # Examples
///
/// ```
/// use promotion_stats::calculation::completed_years;
/// use chrono::NaiveDate;
///
/// let birth = NaiveDate::from_ymd_opt(1990, 6, 15).unwrap();
/// let day_before = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
/// let anniversary = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
///
/// assert_eq!(completed_years(birth, day_before), Some(34));
/// assert_eq!(completed_years(birth, anniversary), Some(35));
/// ```
pub fn completed_years(since: NaiveDate, evaluation_date: NaiveDate) -> Option<u32> {
    evaluation_date.years_since(since)
}

fn check_points(record: &EmployeeRecord) -> EngineResult<()> {
    let components = [
        ("position_seniority_points", record.position_seniority_points),
        ("director_points", record.director_points),
        ("training_points", record.training_points),
    ];

    for (field, value) in components {
        if value < Decimal::ZERO {
            return Err(EngineError::data_integrity(
                &record.id,
                field,
                format!("point component must not be negative, got {}", value),
            ));
        }
    }

    Ok(())
}

fn composite_score(record: &EmployeeRecord) -> EngineResult<Decimal> {
    record.composite_score().ok_or_else(|| {
        EngineError::data_integrity(
            &record.id,
            "points",
            "sum of point components exceeds the decimal range",
        )
    })
}

/// Derives the statistics inputs for one employee.
///
/// # Arguments
///
/// * `record` - The snapshot record
/// * `evaluation_date` - The date all durations are measured against
///
/// # Returns
///
/// Returns the [`DerivedEmployee`], or a `DataIntegrity` error if:
/// - The birth date lies after the evaluation date
/// - Any point component is negative
/// - The point components do not sum within the decimal range
///
/// A first appointment after the evaluation date counts as zero years of
/// seniority. A current appointment after it gives a negative day count,
/// which is never eligible.
///
/// # Examples
///
/// ```
/// use promotion_stats::calculation::derive_employee;
/// use promotion_stats::models::EmployeeRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let record = EmployeeRecord {
///     id: "EMP-001".to_string(),
///     name: "Amina Benali".to_string(),
///     birth_date: NaiveDate::from_ymd_opt(1985, 4, 12).unwrap(),
///     first_appointment_date: NaiveDate::from_ymd_opt(2008, 9, 1).unwrap(),
///     current_appointment_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
///     position: "Engineer".to_string(),
///     grade: 7,
///     position_seniority_points: Decimal::new(20, 0),
///     director_points: Decimal::new(15, 0),
///     training_points: Decimal::new(5, 0),
/// };
///
/// let evaluation_date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let derived = derive_employee(&record, evaluation_date).unwrap();
///
/// assert_eq!(derived.age_years, 39);
/// assert_eq!(derived.seniority_years, 16);
/// assert_eq!(derived.time_in_position_days, 731);
/// assert_eq!(derived.composite_score, Decimal::new(40, 0));
/// assert!(derived.eligible);
/// ```
pub fn derive_employee(
    record: &EmployeeRecord,
    evaluation_date: NaiveDate,
) -> EngineResult<DerivedEmployee> {
    check_points(record)?;
    let composite_score = composite_score(record)?;

    let age_years = completed_years(record.birth_date, evaluation_date).ok_or_else(|| {
        EngineError::data_integrity(
            &record.id,
            "birth_date",
            format!(
                "{} is after the evaluation date {}",
                record.birth_date, evaluation_date
            ),
        )
    })?;
    let seniority_years =
        completed_years(record.first_appointment_date, evaluation_date).unwrap_or(0);

    let time_in_position_days = evaluation_date
        .signed_duration_since(record.current_appointment_date)
        .num_days();

    Ok(DerivedEmployee {
        record: record.clone(),
        age_years,
        seniority_years,
        time_in_position_days,
        composite_score,
        eligible: is_eligible(time_in_position_days),
    })
}

/// Derives every record of a snapshot, failing on the first bad record.
///
/// The output preserves snapshot order. No derived employees are returned
/// when any record fails.
pub fn derive_all(
    records: &[EmployeeRecord],
    evaluation_date: NaiveDate,
    step_number: u32,
) -> EngineResult<DerivationResult> {
    let employees = records
        .iter()
        .map(|record| derive_employee(record, evaluation_date))
        .collect::<EngineResult<Vec<_>>>()?;

    let eligible = employees.iter().filter(|e| e.eligible).count();
    let total_points = employees.iter().try_fold(Decimal::ZERO, |total, employee| {
        total.checked_add(employee.composite_score).ok_or_else(|| {
            EngineError::data_integrity(
                &employee.record.id,
                "points",
                "snapshot point total exceeds the decimal range",
            )
        })
    })?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "employee_derivation".to_string(),
        rule_name: "Employee Derivation".to_string(),
        input: serde_json::json!({
            "records": records.len(),
            "evaluation_date": evaluation_date.to_string(),
            "eligibility_threshold_days": ELIGIBILITY_THRESHOLD_DAYS
        }),
        output: serde_json::json!({
            "derived": employees.len(),
            "eligible": eligible,
            "total_points": total_points.normalize().to_string()
        }),
        reasoning: format!(
            "{} of {} employees have at least {} days ({} x {}-day months) in their current position on {}",
            eligible,
            employees.len(),
            ELIGIBILITY_THRESHOLD_DAYS,
            ELIGIBILITY_MONTHS,
            DAYS_PER_MONTH,
            evaluation_date
        ),
    };

    Ok(DerivationResult {
        employees,
        audit_step,
    })
}
