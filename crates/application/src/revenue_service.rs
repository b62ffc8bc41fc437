use std::sync::Arc;

use chrono::NaiveDate;
use praxis_core::{AppResult, AssignmentId, AssociateId, ProjectId, RevenueId};
use praxis_domain::{
    AssociateCostSummary, AuditAction, Permission, ProjectAssignment, ProjectRevenue,
    ProjectRevenueSummary, RevenueStatus, UserAccount, associate_cost_summary,
    project_revenue_summary,
};

use crate::{AuditEvent, AuditRepository, AuthorizationService, StaffingRepository};

/// Input for recording a project contract.
#[derive(Debug, Clone)]
pub struct RecordContractInput {
    /// Fixed contract value agreed with the client.
    pub contract_value: f64,
    /// Contract start date.
    pub start_date: NaiveDate,
    /// Contract end date (inclusive).
    pub end_date: NaiveDate,
    /// Contract status.
    pub status: RevenueStatus,
}

/// Input for recording a staffing assignment.
#[derive(Debug, Clone)]
pub struct RecordAssignmentInput {
    /// Staffed associate.
    pub associate_id: AssociateId,
    /// Role label for this staffing line.
    pub role_label: String,
    /// Billed rate per hour.
    pub hourly_rate: f64,
    /// Staffed hours per day.
    pub hours_per_day: f64,
    /// First staffed day.
    pub start_date: NaiveDate,
    /// Last staffed day (inclusive).
    pub end_date: NaiveDate,
    /// Overhead per day at the start of the ramp.
    pub initial_overhead_per_day: f64,
    /// Steady-state overhead per day.
    pub final_overhead_per_day: f64,
    /// Days until overhead reaches steady state.
    pub ramp_days: f64,
}

/// Application service for contracts, staffing, and margin rollups.
#[derive(Clone)]
pub struct RevenueService {
    authorization: AuthorizationService,
    staffing: Arc<dyn StaffingRepository>,
    audit: Arc<dyn AuditRepository>,
}

impl RevenueService {
    /// Creates the service from its ports.
    #[must_use]
    pub fn new(
        authorization: AuthorizationService,
        staffing: Arc<dyn StaffingRepository>,
        audit: Arc<dyn AuditRepository>,
    ) -> Self {
        Self {
            authorization,
            staffing,
            audit,
        }
    }

    /// Records (or replaces) the contract for a project.
    pub async fn record_contract(
        &self,
        actor: &UserAccount,
        project_id: ProjectId,
        input: RecordContractInput,
    ) -> AppResult<ProjectRevenue> {
        self.authorization
            .require_permission(actor, Permission::RevenueManage)?;
        self.authorization
            .ensure_can_view_project(actor, project_id)
            .await?;

        let revenue = ProjectRevenue::new(
            RevenueId::new(),
            project_id,
            input.contract_value,
            input.start_date,
            input.end_date,
            input.status,
        );
        self.staffing.save_revenue(revenue.clone()).await?;

        self.audit
            .append_event(AuditEvent {
                actor: actor.id(),
                action: AuditAction::RevenueRecorded,
                resource_type: "project_revenue".to_owned(),
                resource_id: project_id.to_string(),
                detail: Some(format!("contract value {:.2}", input.contract_value)),
            })
            .await?;

        Ok(revenue)
    }

    /// Records a staffing assignment on a project.
    pub async fn record_assignment(
        &self,
        actor: &UserAccount,
        project_id: ProjectId,
        input: RecordAssignmentInput,
    ) -> AppResult<ProjectAssignment> {
        self.authorization
            .require_permission(actor, Permission::RevenueManage)?;
        self.authorization
            .ensure_can_view_project(actor, project_id)
            .await?;

        let assignment = ProjectAssignment::new(
            AssignmentId::new(),
            project_id,
            input.associate_id,
            input.role_label,
            input.hourly_rate,
            input.hours_per_day,
            input.start_date,
            input.end_date,
            input.initial_overhead_per_day,
            input.final_overhead_per_day,
            input.ramp_days,
        )?;
        self.staffing.save_assignment(assignment.clone()).await?;

        self.audit
            .append_event(AuditEvent {
                actor: actor.id(),
                action: AuditAction::AssignmentRecorded,
                resource_type: "project_assignment".to_owned(),
                resource_id: assignment.id().to_string(),
                detail: Some(format!(
                    "associate '{}' on project '{project_id}'",
                    input.associate_id
                )),
            })
            .await?;

        Ok(assignment)
    }

    /// Lists the staffing assignments on a project.
    pub async fn list_assignments(
        &self,
        actor: &UserAccount,
        project_id: ProjectId,
    ) -> AppResult<Vec<ProjectAssignment>> {
        self.authorization
            .require_permission(actor, Permission::RevenueView)?;
        self.authorization
            .ensure_can_view_project(actor, project_id)
            .await?;
        self.staffing.list_assignments_for_project(project_id).await
    }

    /// Rolls up cost and margin for a project.
    ///
    /// A project without a recorded contract is summarized against a zero
    /// contract value: costs still total up and the margin percentage is
    /// zero, matching the dashboard's "no contract yet" presentation.
    pub async fn project_summary(
        &self,
        actor: &UserAccount,
        project_id: ProjectId,
    ) -> AppResult<ProjectRevenueSummary> {
        self.authorization
            .require_permission(actor, Permission::RevenueView)?;
        self.authorization
            .ensure_can_view_project(actor, project_id)
            .await?;

        let revenue = match self.staffing.find_revenue_for_project(project_id).await? {
            Some(revenue) => revenue,
            None => placeholder_contract(project_id),
        };
        let assignments = self.staffing.list_assignments_for_project(project_id).await?;

        Ok(project_revenue_summary(&revenue, &assignments))
    }

    /// Rolls up one associate's staffing cost across all projects.
    pub async fn associate_summary(
        &self,
        actor: &UserAccount,
        associate_id: AssociateId,
    ) -> AppResult<AssociateCostSummary> {
        self.authorization
            .require_permission(actor, Permission::RevenueView)?;

        let assignments = self
            .staffing
            .list_assignments_for_associate(associate_id)
            .await?;

        Ok(associate_cost_summary(associate_id, &assignments))
    }
}

/// Zero-value stand-in for projects with no recorded contract.
fn placeholder_contract(project_id: ProjectId) -> ProjectRevenue {
    let epoch = NaiveDate::default();
    ProjectRevenue::new(
        RevenueId::new(),
        project_id,
        0.0,
        epoch,
        epoch,
        RevenueStatus::Active,
    )
}
