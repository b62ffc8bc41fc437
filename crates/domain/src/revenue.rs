//! Revenue and margin calculator.
//!
//! Pure arithmetic over staffing assignments and contract records: a
//! day-granular overhead ramp, labor cost, and per-project /
//! per-associate rollups. Every function is total; degenerate inputs
//! (zero contract value, zero days, zero ramp) resolve to zeroed figures
//! rather than errors.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use praxis_core::{AssociateId, ProjectId, round_cents, round_percent};
use serde::Serialize;

use crate::staffing::{ProjectAssignment, ProjectRevenue};

/// Inclusive calendar-day count spanning `start` to `end`.
///
/// The single day-count definition used by both labor and overhead cost,
/// so the two stay consistent for the same assignment. A reversed range
/// (end before start) counts the same as the forward range; historical
/// cost totals depend on this, so callers must not "fix" it here.
#[must_use]
pub fn span_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days().abs() + 1
}

/// Overhead for assignment day `day` (1-indexed from the start).
///
/// Linear ramp from `initial_overhead` down to `final_overhead`, reached
/// at day `ramp_days`. The steady-state guard is evaluated first so a
/// zero-length ramp never divides by zero.
#[must_use]
pub fn overhead_for_day(
    day: i64,
    initial_overhead: f64,
    final_overhead: f64,
    ramp_days: f64,
) -> f64 {
    let day = day as f64;
    if day >= ramp_days {
        return final_overhead;
    }

    initial_overhead - ((initial_overhead - final_overhead) / ramp_days) * day
}

/// Derived cost figures for one staffing assignment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AssignmentCost {
    /// Rate × hours/day × days, rounded to cents.
    pub labor_cost: f64,
    /// Summed ramped overhead, rounded to cents.
    pub overhead_cost: f64,
    /// Labor plus overhead, rounded to cents.
    pub total_cost: f64,
    /// Inclusive staffed day count.
    pub days: i64,
    /// Hours/day × days.
    pub total_hours: f64,
}

/// Computes labor, overhead, and total cost for one assignment.
///
/// Intermediate per-day overhead values are not rounded; only the summed
/// totals are, at return.
#[must_use]
pub fn assignment_cost(assignment: &ProjectAssignment) -> AssignmentCost {
    let days = span_days(assignment.start_date(), assignment.end_date());

    let labor = assignment.hourly_rate() * assignment.hours_per_day() * days as f64;

    let mut overhead = 0.0;
    for day in 1..=days {
        overhead += overhead_for_day(
            day,
            assignment.initial_overhead_per_day(),
            assignment.final_overhead_per_day(),
            assignment.ramp_days(),
        );
    }

    let labor_cost = round_cents(labor);
    let overhead_cost = round_cents(overhead);

    AssignmentCost {
        labor_cost,
        overhead_cost,
        total_cost: round_cents(labor_cost + overhead_cost),
        days,
        total_hours: assignment.hours_per_day() * days as f64,
    }
}

/// Cost and margin rollup for one project's contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectRevenueSummary {
    /// Project under contract.
    pub project_id: ProjectId,
    /// Fixed contract value.
    pub contract_value: f64,
    /// Summed labor cost across the project's assignments.
    pub labor_cost: f64,
    /// Summed overhead cost across the project's assignments.
    pub overhead_cost: f64,
    /// Labor plus overhead.
    pub total_cost: f64,
    /// Contract value minus total cost.
    pub gross_margin: f64,
    /// Margin as a percentage of contract value, one decimal place.
    pub margin_percent: f64,
    /// Number of assignments included, for auditability.
    pub assignment_count: usize,
}

/// Rolls up cost and margin for a contract from a set of assignments.
///
/// Assignments for other projects are ignored. A zero contract value
/// yields a zero margin percentage rather than a division error.
#[must_use]
pub fn project_revenue_summary(
    revenue: &ProjectRevenue,
    assignments: &[ProjectAssignment],
) -> ProjectRevenueSummary {
    let mut labor = 0.0;
    let mut overhead = 0.0;
    let mut assignment_count = 0;

    for assignment in assignments
        .iter()
        .filter(|assignment| assignment.project_id() == revenue.project_id())
    {
        let cost = assignment_cost(assignment);
        labor += cost.labor_cost;
        overhead += cost.overhead_cost;
        assignment_count += 1;
    }

    let total = labor + overhead;
    let margin = revenue.contract_value() - total;
    let margin_percent = if revenue.contract_value() > 0.0 {
        margin / revenue.contract_value() * 100.0
    } else {
        0.0
    };

    ProjectRevenueSummary {
        project_id: revenue.project_id(),
        contract_value: revenue.contract_value(),
        labor_cost: round_cents(labor),
        overhead_cost: round_cents(overhead),
        total_cost: round_cents(total),
        gross_margin: round_cents(margin),
        margin_percent: round_percent(margin_percent),
        assignment_count,
    }
}

/// Workload and cost rollup for one associate across all projects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AssociateCostSummary {
    /// The associate rolled up.
    pub associate_id: AssociateId,
    /// Summed staffed days across assignments (overlaps count twice).
    pub total_days: i64,
    /// Summed staffed hours across assignments.
    pub total_hours: f64,
    /// Summed labor cost.
    pub labor_cost: f64,
    /// Summed overhead cost.
    pub overhead_cost: f64,
    /// Labor plus overhead.
    pub total_cost: f64,
    /// Total cost divided by total days, rounded to cents.
    pub avg_cost_per_day: f64,
    /// Distinct projects touched.
    pub project_count: usize,
    /// Number of assignments included.
    pub assignment_count: usize,
}

/// Rolls up one associate's staffing across every project.
///
/// Each assignment's cost is computed independently and summed;
/// overlapping or adjacent date ranges are never merged, since
/// assignments may run in parallel on different projects.
#[must_use]
pub fn associate_cost_summary(
    associate_id: AssociateId,
    assignments: &[ProjectAssignment],
) -> AssociateCostSummary {
    let mut total_days = 0;
    let mut total_hours = 0.0;
    let mut labor = 0.0;
    let mut overhead = 0.0;
    let mut assignment_count = 0;
    let mut projects = BTreeSet::new();

    for assignment in assignments
        .iter()
        .filter(|assignment| assignment.associate_id() == associate_id)
    {
        let cost = assignment_cost(assignment);
        total_days += cost.days;
        total_hours += cost.total_hours;
        labor += cost.labor_cost;
        overhead += cost.overhead_cost;
        assignment_count += 1;
        projects.insert(assignment.project_id());
    }

    let total = labor + overhead;
    let avg_cost_per_day = if total_days > 0 {
        total / total_days as f64
    } else {
        0.0
    };

    AssociateCostSummary {
        associate_id,
        total_days,
        total_hours,
        labor_cost: round_cents(labor),
        overhead_cost: round_cents(overhead),
        total_cost: round_cents(total),
        avg_cost_per_day: round_cents(avg_cost_per_day),
        project_count: projects.len(),
        assignment_count,
    }
}
