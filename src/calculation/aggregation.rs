//! Single-pass aggregation of derived employees into grouped counters.

use std::collections::{BTreeMap, HashSet};

use rust_decimal::Decimal;

use crate::models::{AgeBracket, AuditStep, DerivedEmployee, GroupStat, SeniorityBracket};

/// Grouped counters and running totals over one snapshot.
///
/// Totals are kept at full precision; rounding belongs to report assembly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregates {
    /// Employees folded in.
    pub total_employees: usize,
    /// Eligible employees folded in.
    pub eligible_employees: usize,
    /// Employees folded in as cohort members.
    pub promoted_employees: usize,
    /// Counters keyed by position label.
    pub position_stats: BTreeMap<String, GroupStat>,
    /// Counters keyed by grade.
    pub degree_stats: BTreeMap<u8, GroupStat>,
    /// Head count per age bracket.
    pub age_group_stats: BTreeMap<AgeBracket, usize>,
    /// Head count per seniority bracket.
    pub seniority_stats: BTreeMap<SeniorityBracket, usize>,
    /// Sum of ages in years.
    pub total_age: u64,
    /// Sum of seniorities in years.
    pub total_seniority: u64,
    /// Sum of composite scores.
    pub total_points: Decimal,
}

impl Aggregates {
    /// Folds one employee into every dimension.
    pub fn add(&mut self, employee: &DerivedEmployee, promoted: bool) {
        self.total_employees += 1;
        self.total_age += u64::from(employee.age_years);
        self.total_seniority += u64::from(employee.seniority_years);
        // derive_all rejects snapshots whose point total overflows
        self.total_points = self.total_points.saturating_add(employee.composite_score);
        if employee.eligible {
            self.eligible_employees += 1;
        }
        if promoted {
            self.promoted_employees += 1;
        }

        let position = self
            .position_stats
            .entry(employee.record.position.clone())
            .or_default();
        count(position, employee.eligible, promoted);

        let degree = self.degree_stats.entry(employee.record.grade).or_default();
        count(degree, employee.eligible, promoted);

        *self
            .age_group_stats
            .entry(AgeBracket::for_age(employee.age_years))
            .or_insert(0) += 1;
        *self
            .seniority_stats
            .entry(SeniorityBracket::for_seniority(employee.seniority_years))
            .or_insert(0) += 1;
    }
}

fn count(stat: &mut GroupStat, eligible: bool, promoted: bool) {
    stat.total += 1;
    if eligible {
        stat.eligible += 1;
    }
    if promoted {
        stat.promoted += 1;
    }
}

/// The aggregates of one snapshot, with the audit step documenting them.
#[derive(Debug, Clone)]
pub struct AggregationResult {
    /// The accumulated counters and totals.
    pub aggregates: Aggregates,
    /// The audit step recording this aggregation.
    pub audit_step: AuditStep,
}

/// Aggregates all derived employees by position, grade, age and seniority.
///
/// # Arguments
///
/// * `employees` - All derived employees of the snapshot
/// * `promoted` - Indices into `employees` of the promotion cohort
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use promotion_stats::calculation::aggregate;
/// use std::collections::HashSet;
///
/// let result = aggregate(&[], &HashSet::new(), 1);
/// assert_eq!(result.aggregates.total_employees, 0);
/// assert!(result.aggregates.position_stats.is_empty());
/// ```
pub fn aggregate(
    employees: &[DerivedEmployee],
    promoted: &HashSet<usize>,
    step_number: u32,
) -> AggregationResult {
    let mut aggregates = Aggregates::default();
    for (index, employee) in employees.iter().enumerate() {
        aggregates.add(employee, promoted.contains(&index));
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: "group_aggregation".to_string(),
        rule_name: "Group Aggregation".to_string(),
        input: serde_json::json!({
            "employees": employees.len(),
            "promoted": promoted.len()
        }),
        output: serde_json::json!({
            "positions": aggregates.position_stats.len(),
            "degrees": aggregates.degree_stats.len(),
            "age_groups": aggregates.age_group_stats.len(),
            "seniority_groups": aggregates.seniority_stats.len()
        }),
        reasoning: format!(
            "{} employees grouped into {} positions and {} degrees",
            aggregates.total_employees,
            aggregates.position_stats.len(),
            aggregates.degree_stats.len()
        ),
    };

    AggregationResult {
        aggregates,
        audit_step,
    }
}
