//! The statistics report and its grouped tables.
//!
//! Field names serialize in camelCase and decimal values as JSON numbers, the
//! shape the roster front-end consumes.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use super::{AgeBracket, SeniorityBracket};

/// Counters for one group of employees (a position or a grade).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GroupStat {
    /// Employees in the group.
    pub total: usize,
    /// Eligible employees in the group.
    pub eligible: usize,
    /// Employees in the group selected for promotion.
    pub promoted: usize,
}

impl GroupStat {
    /// Returns `promoted / total * 100` at full precision, `0` for an empty group.
    ///
    /// # Example
    ///
    /// ```
    /// use promotion_stats::models::GroupStat;
    /// use rust_decimal::Decimal;
    ///
    /// let stat = GroupStat { total: 4, eligible: 3, promoted: 1 };
    /// assert_eq!(stat.promotion_rate(), Decimal::new(25, 0));
    /// assert_eq!(GroupStat::default().promotion_rate(), Decimal::ZERO);
    /// ```
    pub fn promotion_rate(&self) -> Decimal {
        percentage(self.promoted, self.total)
    }
}

/// Returns `part / whole * 100`, or zero when `whole` is zero.
pub fn percentage(part: usize, whole: usize) -> Decimal {
    if whole == 0 {
        return Decimal::ZERO;
    }
    Decimal::from(part) * Decimal::ONE_HUNDRED / Decimal::from(whole)
}

/// A leaderboard entry. Exposes the raw point components, not the score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopPerformer {
    /// Display name.
    pub name: String,
    /// Position label.
    pub position: String,
    /// Grade.
    pub degree: u8,
    /// Seniority-in-position points.
    #[serde(with = "rust_decimal::serde::float")]
    pub position_seniority_points: Decimal,
    /// Director points.
    #[serde(with = "rust_decimal::serde::float")]
    pub director_points: Decimal,
    /// Training points.
    #[serde(with = "rust_decimal::serde::float")]
    pub training_points: Decimal,
}

/// Promotion outcome for one position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionPromotion {
    /// Promotion rate in percent, two decimals.
    #[serde(with = "rust_decimal::serde::float")]
    pub rate: Decimal,
    /// Promoted employees holding the position.
    pub promoted: usize,
    /// Employees holding the position.
    pub total: usize,
}

/// Averages, rates and the leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedAnalysis {
    /// Mean age over all employees, one decimal.
    #[serde(with = "rust_decimal::serde::float")]
    pub average_age: Decimal,
    /// Mean seniority over all employees, one decimal.
    #[serde(with = "rust_decimal::serde::float")]
    pub average_seniority: Decimal,
    /// Mean composite score over all employees, two decimals.
    #[serde(with = "rust_decimal::serde::float")]
    pub average_points: Decimal,
    /// Eligible employees in percent of the roster, two decimals.
    #[serde(with = "rust_decimal::serde::float")]
    pub eligibility_rate: Decimal,
    /// Up to ten best-scoring eligible employees, best first.
    pub top_performers: Vec<TopPerformer>,
    /// Promotion outcome per position.
    pub promotions_by_position: BTreeMap<String, PositionPromotion>,
}

/// The complete statistics payload for one snapshot and evaluation date.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Employees in the snapshot.
    pub total_employees: usize,
    /// Employees meeting the time-in-position threshold.
    pub eligible_employees: usize,
    /// Size of the promotion cohort.
    pub promoted_employees: usize,
    /// Promoted employees in percent of the roster, two decimals.
    #[serde(with = "rust_decimal::serde::float")]
    pub promotion_rate: Decimal,
    /// Counters per position label.
    pub position_stats: BTreeMap<String, GroupStat>,
    /// Counters per grade.
    pub degree_stats: BTreeMap<u8, GroupStat>,
    /// Head count per age bracket.
    pub age_group_stats: BTreeMap<AgeBracket, usize>,
    /// Head count per seniority bracket.
    pub seniority_stats: BTreeMap<SeniorityBracket, usize>,
    /// Averages, rates and leaderboard.
    pub detailed_analysis: DetailedAnalysis,
}
