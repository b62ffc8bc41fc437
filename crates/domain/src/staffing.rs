use std::str::FromStr;

use chrono::NaiveDate;
use praxis_core::{
    AppError, AppResult, AssignmentId, AssociateId, NonEmptyString, ProjectId, RevenueId,
};
use serde::{Deserialize, Serialize};

/// One staffing line: an associate's staffed duration on one project.
///
/// Costs are always derived from these fields, never stored. Numeric
/// configuration is taken as entered; the calculator stays total for any
/// values (see `revenue`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectAssignment {
    id: AssignmentId,
    project_id: ProjectId,
    associate_id: AssociateId,
    role_label: NonEmptyString,
    hourly_rate: f64,
    hours_per_day: f64,
    start_date: NaiveDate,
    end_date: NaiveDate,
    initial_overhead_per_day: f64,
    final_overhead_per_day: f64,
    ramp_days: f64,
}

impl ProjectAssignment {
    /// Creates a staffing assignment.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: AssignmentId,
        project_id: ProjectId,
        associate_id: AssociateId,
        role_label: impl Into<String>,
        hourly_rate: f64,
        hours_per_day: f64,
        start_date: NaiveDate,
        end_date: NaiveDate,
        initial_overhead_per_day: f64,
        final_overhead_per_day: f64,
        ramp_days: f64,
    ) -> AppResult<Self> {
        Ok(Self {
            id,
            project_id,
            associate_id,
            role_label: NonEmptyString::new(role_label)?,
            hourly_rate,
            hours_per_day,
            start_date,
            end_date,
            initial_overhead_per_day,
            final_overhead_per_day,
            ramp_days,
        })
    }

    /// Returns the assignment identifier.
    #[must_use]
    pub fn id(&self) -> AssignmentId {
        self.id
    }

    /// Returns the staffed project.
    #[must_use]
    pub fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the staffed associate.
    #[must_use]
    pub fn associate_id(&self) -> AssociateId {
        self.associate_id
    }

    /// Returns the role label for this staffing line.
    #[must_use]
    pub fn role_label(&self) -> &NonEmptyString {
        &self.role_label
    }

    /// Returns the billed rate per hour.
    #[must_use]
    pub fn hourly_rate(&self) -> f64 {
        self.hourly_rate
    }

    /// Returns the staffed hours per day.
    #[must_use]
    pub fn hours_per_day(&self) -> f64 {
        self.hours_per_day
    }

    /// Returns the first staffed calendar day.
    #[must_use]
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Returns the last staffed calendar day (inclusive).
    #[must_use]
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Returns the overhead per day at the start of the ramp.
    #[must_use]
    pub fn initial_overhead_per_day(&self) -> f64 {
        self.initial_overhead_per_day
    }

    /// Returns the steady-state overhead per day.
    #[must_use]
    pub fn final_overhead_per_day(&self) -> f64 {
        self.final_overhead_per_day
    }

    /// Returns the number of days until overhead reaches steady state.
    #[must_use]
    pub fn ramp_days(&self) -> f64 {
        self.ramp_days
    }
}

/// Lifecycle status of a contract record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevenueStatus {
    /// Contract in force.
    Active,
    /// Contract closed out.
    Closed,
}

impl RevenueStatus {
    /// Returns a stable storage value for this status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Closed => "closed",
        }
    }
}

impl FromStr for RevenueStatus {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "active" => Ok(Self::Active),
            "closed" => Ok(Self::Closed),
            _ => Err(AppError::Validation(format!(
                "unknown revenue status '{value}'"
            ))),
        }
    }
}

/// The contract agreed with the client for one project.
///
/// Drives the revenue side of the margin calculation; one record per
/// project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRevenue {
    id: RevenueId,
    project_id: ProjectId,
    contract_value: f64,
    start_date: NaiveDate,
    end_date: NaiveDate,
    status: RevenueStatus,
}

impl ProjectRevenue {
    /// Creates a contract record.
    #[must_use]
    pub fn new(
        id: RevenueId,
        project_id: ProjectId,
        contract_value: f64,
        start_date: NaiveDate,
        end_date: NaiveDate,
        status: RevenueStatus,
    ) -> Self {
        Self {
            id,
            project_id,
            contract_value,
            start_date,
            end_date,
            status,
        }
    }

    /// Returns the record identifier.
    #[must_use]
    pub fn id(&self) -> RevenueId {
        self.id
    }

    /// Returns the project under contract.
    #[must_use]
    pub fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the fixed contract value.
    #[must_use]
    pub fn contract_value(&self) -> f64 {
        self.contract_value
    }

    /// Returns the contract start date.
    #[must_use]
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Returns the contract end date (inclusive).
    #[must_use]
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Returns the contract status.
    #[must_use]
    pub fn status(&self) -> RevenueStatus {
        self.status
    }

    /// Marks the contract closed.
    pub fn close(&mut self) {
        self.status = RevenueStatus::Closed;
    }
}
