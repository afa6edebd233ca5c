//! Ranking of eligible employees, promotion cohort selection and leaderboard.

use std::collections::HashSet;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::{AuditStep, DerivedEmployee};

/// Share of eligible employees selected for promotion (60%).
pub const PROMOTION_QUOTA: Decimal = Decimal::from_parts(6, 0, 0, false, 1);

/// Maximum number of entries on the leaderboard.
pub const LEADERBOARD_SIZE: usize = 10;

/// The ranked eligible employees and the cohort drawn from them.
///
/// Entries are indices into the derived employee slice the selection was
/// made from, best score first.
#[derive(Debug, Clone)]
pub struct CohortSelection {
    /// Indices of all eligible employees, sorted by composite score descending.
    /// Equal scores keep their snapshot order.
    pub ranked: Vec<usize>,
    /// Number of leading `ranked` entries selected for promotion.
    pub cohort_size: usize,
    /// The audit step recording this selection.
    pub audit_step: AuditStep,
}

impl CohortSelection {
    /// Returns the number of eligible employees.
    pub fn eligible_count(&self) -> usize {
        self.ranked.len()
    }

    /// Returns the promotion cohort, best first.
    pub fn cohort(&self) -> &[usize] {
        &self.ranked[..self.cohort_size]
    }

    /// Returns the leaderboard: up to [`LEADERBOARD_SIZE`] best eligible employees.
    ///
    /// The leaderboard does not depend on the cohort size.
    pub fn leaderboard(&self) -> &[usize] {
        &self.ranked[..self.ranked.len().min(LEADERBOARD_SIZE)]
    }

    /// Returns the cohort as a membership set.
    pub fn promoted(&self) -> HashSet<usize> {
        self.cohort().iter().copied().collect()
    }
}

/// Returns `floor(eligible_count * 0.6)`, clamped to `eligible_count`.
///
/// # Examples
///
/// ```
/// use promotion_stats::calculation::cohort_size;
///
/// let sizes: Vec<usize> = (0..=5).map(cohort_size).collect();
/// assert_eq!(sizes, vec![0, 0, 1, 1, 2, 3]);
/// ```
pub fn cohort_size(eligible_count: usize) -> usize {
    (Decimal::from(eligible_count) * PROMOTION_QUOTA)
        .floor()
        .to_usize()
        .unwrap_or(0)
        .min(eligible_count)
}

/// Ranks the eligible employees and selects the promotion cohort.
///
/// # Arguments
///
/// * `employees` - All derived employees of the snapshot, in snapshot order
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// A [`CohortSelection`] over indices into `employees`. The input is not
/// modified.
pub fn select_cohort(employees: &[DerivedEmployee], step_number: u32) -> CohortSelection {
    let mut ranked: Vec<usize> = employees
        .iter()
        .enumerate()
        .filter(|(_, employee)| employee.eligible)
        .map(|(index, _)| index)
        .collect();

    // sort_by is stable: equal scores stay in snapshot order
    ranked.sort_by(|&a, &b| {
        employees[b]
            .composite_score
            .cmp(&employees[a].composite_score)
    });

    let cohort_size = cohort_size(ranked.len());
    let cutoff_score = cohort_size
        .checked_sub(1)
        .map(|last| employees[ranked[last]].composite_score);

    let reasoning = match cutoff_score {
        Some(score) => format!(
            "{} of {} eligible employees selected at a {} quota; lowest selected score {}",
            cohort_size,
            ranked.len(),
            PROMOTION_QUOTA,
            score.normalize()
        ),
        None => format!(
            "No employee selected: a {} quota of {} eligible employees rounds down to zero",
            PROMOTION_QUOTA,
            ranked.len()
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "cohort_selection".to_string(),
        rule_name: "Promotion Cohort Selection".to_string(),
        input: serde_json::json!({
            "eligible": ranked.len(),
            "quota": PROMOTION_QUOTA.to_string()
        }),
        output: serde_json::json!({
            "cohort_size": cohort_size,
            "leaderboard_size": ranked.len().min(LEADERBOARD_SIZE),
            "cutoff_score": cutoff_score.map(|s| s.normalize().to_string())
        }),
        reasoning,
    };

    CohortSelection {
        ranked,
        cohort_size,
        audit_step,
    }
}
