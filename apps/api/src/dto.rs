//! JSON request and response types for the API surface.

use chrono::{DateTime, NaiveDate, Utc};
use praxis_application::{PortfolioSnapshot, StageCount};
use praxis_domain::{
    Associate, AssociateCostSummary, Client, CostingRequest, Project, ProjectAssignment,
    ProjectDocument, ProjectNote, ProjectRevenue, ProjectRevenueSummary, UserAccount,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Health response payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// API representation of a user account.
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub id: Uuid,
    pub display_name: String,
    pub email: String,
    pub role: String,
    pub associate_id: Option<Uuid>,
    pub active: bool,
}

impl From<UserAccount> for AccountResponse {
    fn from(value: UserAccount) -> Self {
        Self {
            id: value.id().as_uuid(),
            display_name: value.display_name().as_str().to_owned(),
            email: value.email().as_str().to_owned(),
            role: value.role().as_str().to_owned(),
            associate_id: value.associate_id().map(|id| id.as_uuid()),
            active: value.is_active(),
        }
    }
}

/// Incoming payload for account creation.
#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub display_name: String,
    pub email: String,
    pub role: String,
    pub associate_id: Option<Uuid>,
}

/// Incoming payload for a role change.
#[derive(Debug, Deserialize)]
pub struct ChangeRoleRequest {
    pub role: String,
}

/// API representation of an associate.
#[derive(Debug, Serialize)]
pub struct AssociateResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub job_title: String,
    pub weekly_capacity_hours: f64,
    pub active: bool,
}

impl From<Associate> for AssociateResponse {
    fn from(value: Associate) -> Self {
        Self {
            id: value.id().as_uuid(),
            name: value.name().as_str().to_owned(),
            email: value.email().as_str().to_owned(),
            job_title: value.job_title().as_str().to_owned(),
            weekly_capacity_hours: value.weekly_capacity_hours(),
            active: value.is_active(),
        }
    }
}

/// Incoming payload for associate creation.
#[derive(Debug, Deserialize)]
pub struct CreateAssociateRequest {
    pub name: String,
    pub email: String,
    pub job_title: String,
    pub weekly_capacity_hours: f64,
}

/// API representation of a client.
#[derive(Debug, Serialize)]
pub struct ClientResponse {
    pub id: Uuid,
    pub name: String,
    pub industry: String,
    pub contact_name: String,
    pub contact_email: String,
    pub active: bool,
}

impl From<Client> for ClientResponse {
    fn from(value: Client) -> Self {
        Self {
            id: value.id().as_uuid(),
            name: value.name().as_str().to_owned(),
            industry: value.industry().as_str().to_owned(),
            contact_name: value.contact_name().as_str().to_owned(),
            contact_email: value.contact_email().as_str().to_owned(),
            active: value.is_active(),
        }
    }
}

/// Incoming payload for client creation.
#[derive(Debug, Deserialize)]
pub struct CreateClientRequest {
    pub name: String,
    pub industry: String,
    pub contact_name: String,
    pub contact_email: String,
}

/// API representation of a project.
#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub id: Uuid,
    pub client_id: Uuid,
    pub name: String,
    pub stage: String,
    pub health: String,
    pub owner_id: Uuid,
    pub assigned_associates: Vec<Uuid>,
}

impl From<Project> for ProjectResponse {
    fn from(value: Project) -> Self {
        Self {
            id: value.id().as_uuid(),
            client_id: value.client_id().as_uuid(),
            name: value.name().as_str().to_owned(),
            stage: value.stage().as_str().to_owned(),
            health: value.health().as_str().to_owned(),
            owner_id: value.owner_id().as_uuid(),
            assigned_associates: value
                .assigned_associates()
                .iter()
                .map(|id| id.as_uuid())
                .collect(),
        }
    }
}

/// Incoming payload for project creation.
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub client_id: Uuid,
    pub name: String,
    pub stage: String,
    pub health: String,
    pub owner_id: Uuid,
    #[serde(default)]
    pub assigned_associates: Vec<Uuid>,
}

/// Incoming payload for project detail updates.
#[derive(Debug, Deserialize)]
pub struct UpdateProjectRequest {
    pub name: Option<String>,
    pub health: Option<String>,
    pub owner_id: Option<Uuid>,
    pub assigned_associates: Option<Vec<Uuid>>,
}

/// Incoming payload for a stage change.
#[derive(Debug, Deserialize)]
pub struct ChangeStageRequest {
    pub stage: String,
}

/// API representation of a project note.
#[derive(Debug, Serialize)]
pub struct NoteResponse {
    pub id: Uuid,
    pub project_id: Uuid,
    pub author: Uuid,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl From<ProjectNote> for NoteResponse {
    fn from(value: ProjectNote) -> Self {
        Self {
            id: value.id().as_uuid(),
            project_id: value.project_id().as_uuid(),
            author: value.author().as_uuid(),
            body: value.body().as_str().to_owned(),
            created_at: value.created_at(),
        }
    }
}

/// Incoming payload for writing a note.
#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    pub body: String,
}

/// API representation of a document record.
#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    pub id: Uuid,
    pub project_id: Uuid,
    pub kind: String,
    pub file_name: String,
    pub amount: Option<f64>,
    pub uploaded_by: Uuid,
    pub uploaded_at: DateTime<Utc>,
}

impl From<ProjectDocument> for DocumentResponse {
    fn from(value: ProjectDocument) -> Self {
        Self {
            id: value.id().as_uuid(),
            project_id: value.project_id().as_uuid(),
            kind: value.kind().as_str().to_owned(),
            file_name: value.file_name().as_str().to_owned(),
            amount: value.amount(),
            uploaded_by: value.uploaded_by().as_uuid(),
            uploaded_at: value.uploaded_at(),
        }
    }
}

/// Incoming payload for recording a document upload.
#[derive(Debug, Deserialize)]
pub struct RecordDocumentRequest {
    pub kind: String,
    pub file_name: String,
    pub amount: Option<f64>,
}

/// API representation of a costing request.
#[derive(Debug, Serialize)]
pub struct CostingRequestResponse {
    pub id: Uuid,
    pub project_id: Uuid,
    pub requested_by: Uuid,
    pub description: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<CostingRequest> for CostingRequestResponse {
    fn from(value: CostingRequest) -> Self {
        Self {
            id: value.id().as_uuid(),
            project_id: value.project_id().as_uuid(),
            requested_by: value.requested_by().as_uuid(),
            description: value.description().as_str().to_owned(),
            status: value.status().as_str().to_owned(),
            created_at: value.created_at(),
        }
    }
}

/// Incoming payload for raising a costing request.
#[derive(Debug, Deserialize)]
pub struct RaiseCostingRequest {
    pub description: String,
}

/// API representation of a contract record.
#[derive(Debug, Serialize)]
pub struct ContractResponse {
    pub project_id: Uuid,
    pub contract_value: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
}

impl From<ProjectRevenue> for ContractResponse {
    fn from(value: ProjectRevenue) -> Self {
        Self {
            project_id: value.project_id().as_uuid(),
            contract_value: value.contract_value(),
            start_date: value.start_date(),
            end_date: value.end_date(),
            status: value.status().as_str().to_owned(),
        }
    }
}

/// Incoming payload for recording a contract.
#[derive(Debug, Deserialize)]
pub struct RecordContractRequest {
    pub contract_value: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
}

/// API representation of a staffing assignment.
#[derive(Debug, Serialize)]
pub struct AssignmentResponse {
    pub id: Uuid,
    pub project_id: Uuid,
    pub associate_id: Uuid,
    pub role_label: String,
    pub hourly_rate: f64,
    pub hours_per_day: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub initial_overhead_per_day: f64,
    pub final_overhead_per_day: f64,
    pub ramp_days: f64,
}

impl From<ProjectAssignment> for AssignmentResponse {
    fn from(value: ProjectAssignment) -> Self {
        Self {
            id: value.id().as_uuid(),
            project_id: value.project_id().as_uuid(),
            associate_id: value.associate_id().as_uuid(),
            role_label: value.role_label().as_str().to_owned(),
            hourly_rate: value.hourly_rate(),
            hours_per_day: value.hours_per_day(),
            start_date: value.start_date(),
            end_date: value.end_date(),
            initial_overhead_per_day: value.initial_overhead_per_day(),
            final_overhead_per_day: value.final_overhead_per_day(),
            ramp_days: value.ramp_days(),
        }
    }
}

/// Incoming payload for recording a staffing assignment.
#[derive(Debug, Deserialize)]
pub struct RecordAssignmentRequest {
    pub associate_id: Uuid,
    pub role_label: String,
    pub hourly_rate: f64,
    pub hours_per_day: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub initial_overhead_per_day: f64,
    pub final_overhead_per_day: f64,
    pub ramp_days: f64,
}

/// API representation of a project cost and margin rollup.
#[derive(Debug, Serialize)]
pub struct RevenueSummaryResponse {
    pub project_id: Uuid,
    pub contract_value: f64,
    pub labor_cost: f64,
    pub overhead_cost: f64,
    pub total_cost: f64,
    pub gross_margin: f64,
    pub margin_percent: f64,
    pub assignment_count: usize,
}

impl From<ProjectRevenueSummary> for RevenueSummaryResponse {
    fn from(value: ProjectRevenueSummary) -> Self {
        Self {
            project_id: value.project_id.as_uuid(),
            contract_value: value.contract_value,
            labor_cost: value.labor_cost,
            overhead_cost: value.overhead_cost,
            total_cost: value.total_cost,
            gross_margin: value.gross_margin,
            margin_percent: value.margin_percent,
            assignment_count: value.assignment_count,
        }
    }
}

/// API representation of an associate cost rollup.
#[derive(Debug, Serialize)]
pub struct AssociateSummaryResponse {
    pub associate_id: Uuid,
    pub total_days: i64,
    pub total_hours: f64,
    pub labor_cost: f64,
    pub overhead_cost: f64,
    pub total_cost: f64,
    pub avg_cost_per_day: f64,
    pub project_count: usize,
    pub assignment_count: usize,
}

impl From<AssociateCostSummary> for AssociateSummaryResponse {
    fn from(value: AssociateCostSummary) -> Self {
        Self {
            associate_id: value.associate_id.as_uuid(),
            total_days: value.total_days,
            total_hours: value.total_hours,
            labor_cost: value.labor_cost,
            overhead_cost: value.overhead_cost,
            total_cost: value.total_cost,
            avg_cost_per_day: value.avg_cost_per_day,
            project_count: value.project_count,
            assignment_count: value.assignment_count,
        }
    }
}

/// One stage bucket on the dashboard.
#[derive(Debug, Serialize)]
pub struct StageCountResponse {
    pub stage: String,
    pub count: usize,
}

impl From<StageCount> for StageCountResponse {
    fn from(value: StageCount) -> Self {
        Self {
            stage: value.stage.as_str().to_owned(),
            count: value.count,
        }
    }
}

/// API representation of the portfolio dashboard.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub total_projects: usize,
    pub stage_counts: Vec<StageCountResponse>,
    pub on_track: usize,
    pub at_risk: usize,
    pub critical: usize,
    pub needs_attention: usize,
    pub active_clients: usize,
    pub staffed_associates: usize,
}

impl From<PortfolioSnapshot> for DashboardResponse {
    fn from(value: PortfolioSnapshot) -> Self {
        Self {
            total_projects: value.total_projects,
            stage_counts: value
                .stage_counts
                .into_iter()
                .map(StageCountResponse::from)
                .collect(),
            on_track: value.on_track,
            at_risk: value.at_risk,
            critical: value.critical,
            needs_attention: value.needs_attention,
            active_clients: value.active_clients,
            staffed_associates: value.staffed_associates,
        }
    }
}
