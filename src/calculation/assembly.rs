//! Report assembly: rates, averages, leaderboard and presentation rounding.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{
    DetailedAnalysis, DerivedEmployee, PositionPromotion, Report, TopPerformer, percentage,
};

use super::aggregation::Aggregates;
use super::ranking::CohortSelection;

/// Decimal places for every rate.
pub const RATE_DECIMALS: u32 = 2;

/// Decimal places for average age and average seniority.
pub const YEARS_DECIMALS: u32 = 1;

/// Decimal places for average points.
pub const POINTS_DECIMALS: u32 = 2;

/// Rounds half away from zero.
fn round(value: Decimal, decimals: u32) -> Decimal {
    value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
}

fn average(total: Decimal, count: usize) -> Decimal {
    if count == 0 {
        return Decimal::ZERO;
    }
    total / Decimal::from(count)
}

fn top_performer(employee: &DerivedEmployee) -> TopPerformer {
    let record = &employee.record;
    TopPerformer {
        name: record.name.clone(),
        position: record.position.clone(),
        degree: record.grade,
        position_seniority_points: record.position_seniority_points,
        director_points: record.director_points,
        training_points: record.training_points,
    }
}

/// Combines the ranking and the aggregates into the final report.
///
/// Rounding is applied here and only here.
///
/// # Arguments
///
/// * `employees` - The derived employees the selection indexes into
/// * `selection` - The ranked eligible employees and cohort
/// * `aggregates` - The grouped counters and running totals
pub fn assemble_report(
    employees: &[DerivedEmployee],
    selection: &CohortSelection,
    aggregates: Aggregates,
) -> Report {
    let total = aggregates.total_employees;

    let promotions_by_position = aggregates
        .position_stats
        .iter()
        .map(|(position, stat)| {
            (
                position.clone(),
                PositionPromotion {
                    rate: round(stat.promotion_rate(), RATE_DECIMALS),
                    promoted: stat.promoted,
                    total: stat.total,
                },
            )
        })
        .collect();

    let top_performers = selection
        .leaderboard()
        .iter()
        .map(|&index| top_performer(&employees[index]))
        .collect();

    let detailed_analysis = DetailedAnalysis {
        average_age: round(
            average(Decimal::from(aggregates.total_age), total),
            YEARS_DECIMALS,
        ),
        average_seniority: round(
            average(Decimal::from(aggregates.total_seniority), total),
            YEARS_DECIMALS,
        ),
        average_points: round(average(aggregates.total_points, total), POINTS_DECIMALS),
        eligibility_rate: round(
            percentage(aggregates.eligible_employees, total),
            RATE_DECIMALS,
        ),
        top_performers,
        promotions_by_position,
    };

    Report {
        total_employees: total,
        eligible_employees: selection.eligible_count(),
        promoted_employees: selection.cohort_size,
        promotion_rate: round(percentage(selection.cohort_size, total), RATE_DECIMALS),
        position_stats: aggregates.position_stats,
        degree_stats: aggregates.degree_stats,
        age_group_stats: aggregates.age_group_stats,
        seniority_stats: aggregates.seniority_stats,
        detailed_analysis,
    }
}
