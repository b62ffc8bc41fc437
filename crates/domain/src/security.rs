use std::str::FromStr;

use praxis_core::AppError;
use serde::{Deserialize, Serialize};

/// Access roles assignable to dashboard accounts.
///
/// The role is immutable for the duration of a session; changing it is an
/// administrative operation on the account itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Firm leadership with unrestricted access.
    Executive,
    /// Portfolio manager across all clients and projects.
    Manager,
    /// Lead restricted to projects they own.
    EngagementLead,
    /// Staff member restricted to projects they are assigned to.
    Associate,
}

impl Role {
    /// Returns a stable storage value for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Executive => "executive",
            Self::Manager => "manager",
            Self::EngagementLead => "engagement_lead",
            Self::Associate => "associate",
        }
    }

    /// Returns all known roles.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Role] = &[
            Role::Executive,
            Role::Manager,
            Role::EngagementLead,
            Role::Associate,
        ];

        ALL
    }

    /// Returns the static permission table for this role.
    ///
    /// The match is exhaustive: adding a role does not compile until its
    /// table is defined.
    #[must_use]
    pub fn permissions(&self) -> &'static [Permission] {
        match self {
            Self::Executive => EXECUTIVE_PERMISSIONS,
            Self::Manager => MANAGER_PERMISSIONS,
            Self::EngagementLead => ENGAGEMENT_LEAD_PERMISSIONS,
            Self::Associate => ASSOCIATE_PERMISSIONS,
        }
    }

    /// Returns whether this role's table grants the permission.
    #[must_use]
    pub fn grants(&self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "executive" => Ok(Self::Executive),
            "manager" => Ok(Self::Manager),
            "engagement_lead" => Ok(Self::EngagementLead),
            "associate" => Ok(Self::Associate),
            _ => Err(AppError::Validation(format!("unknown role value '{value}'"))),
        }
    }
}

/// Permissions enforced by application policy checks.
///
/// The set is closed: navigation sections and CRUD actions are enumerated
/// here, so an unknown permission key is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Allows viewing the portfolio dashboard.
    DashboardView,
    /// Allows viewing client records.
    ClientView,
    /// Allows creating and editing client records.
    ClientManage,
    /// Allows viewing the projects section.
    ProjectView,
    /// Allows creating projects.
    ProjectCreate,
    /// Allows editing project details and lifecycle stage.
    ProjectEdit,
    /// Allows deleting projects.
    ProjectDelete,
    /// Visibility scope: every project in the portfolio.
    ProjectViewAll,
    /// Visibility scope: only projects owned by the linked associate.
    ProjectViewOwned,
    /// Visibility scope: only projects the linked associate is assigned to.
    ProjectViewAssigned,
    /// Allows viewing associate records.
    AssociateView,
    /// Allows creating and editing associate records.
    AssociateManage,
    /// Allows viewing uploaded document records.
    DocumentView,
    /// Allows recording document uploads (quotes and invoices).
    DocumentUpload,
    /// Allows viewing project notes.
    NoteView,
    /// Allows writing project notes.
    NoteCreate,
    /// Allows viewing costing requests.
    CostingView,
    /// Allows raising costing requests.
    CostingRequest,
    /// Allows viewing revenue and margin figures.
    RevenueView,
    /// Allows recording contracts and staffing assignments.
    RevenueManage,
    /// Allows administering user accounts.
    UserManage,
}

impl Permission {
    /// Returns all known permissions.
    #[must_use]
    pub fn all() -> &'static [Self] {
        // Kept in sync with the executive table, which grants everything.
        EXECUTIVE_PERMISSIONS
    }

    /// Returns a stable storage value for this permission.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DashboardView => "dashboard.view",
            Self::ClientView => "client.view",
            Self::ClientManage => "client.manage",
            Self::ProjectView => "project.view",
            Self::ProjectCreate => "project.create",
            Self::ProjectEdit => "project.edit",
            Self::ProjectDelete => "project.delete",
            Self::ProjectViewAll => "project.scope.all",
            Self::ProjectViewOwned => "project.scope.owned",
            Self::ProjectViewAssigned => "project.scope.assigned",
            Self::AssociateView => "associate.view",
            Self::AssociateManage => "associate.manage",
            Self::DocumentView => "document.view",
            Self::DocumentUpload => "document.upload",
            Self::NoteView => "note.view",
            Self::NoteCreate => "note.create",
            Self::CostingView => "costing.view",
            Self::CostingRequest => "costing.request",
            Self::RevenueView => "revenue.view",
            Self::RevenueManage => "revenue.manage",
            Self::UserManage => "user.manage",
        }
    }
}

impl FromStr for Permission {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "dashboard.view" => Ok(Self::DashboardView),
            "client.view" => Ok(Self::ClientView),
            "client.manage" => Ok(Self::ClientManage),
            "project.view" => Ok(Self::ProjectView),
            "project.create" => Ok(Self::ProjectCreate),
            "project.edit" => Ok(Self::ProjectEdit),
            "project.delete" => Ok(Self::ProjectDelete),
            "project.scope.all" => Ok(Self::ProjectViewAll),
            "project.scope.owned" => Ok(Self::ProjectViewOwned),
            "project.scope.assigned" => Ok(Self::ProjectViewAssigned),
            "associate.view" => Ok(Self::AssociateView),
            "associate.manage" => Ok(Self::AssociateManage),
            "document.view" => Ok(Self::DocumentView),
            "document.upload" => Ok(Self::DocumentUpload),
            "note.view" => Ok(Self::NoteView),
            "note.create" => Ok(Self::NoteCreate),
            "costing.view" => Ok(Self::CostingView),
            "costing.request" => Ok(Self::CostingRequest),
            "revenue.view" => Ok(Self::RevenueView),
            "revenue.manage" => Ok(Self::RevenueManage),
            "user.manage" => Ok(Self::UserManage),
            _ => Err(AppError::Validation(format!(
                "unknown permission value '{value}'"
            ))),
        }
    }
}

const EXECUTIVE_PERMISSIONS: &[Permission] = &[
    Permission::DashboardView,
    Permission::ClientView,
    Permission::ClientManage,
    Permission::ProjectView,
    Permission::ProjectCreate,
    Permission::ProjectEdit,
    Permission::ProjectDelete,
    Permission::ProjectViewAll,
    Permission::ProjectViewOwned,
    Permission::ProjectViewAssigned,
    Permission::AssociateView,
    Permission::AssociateManage,
    Permission::DocumentView,
    Permission::DocumentUpload,
    Permission::NoteView,
    Permission::NoteCreate,
    Permission::CostingView,
    Permission::CostingRequest,
    Permission::RevenueView,
    Permission::RevenueManage,
    Permission::UserManage,
];

const MANAGER_PERMISSIONS: &[Permission] = &[
    Permission::DashboardView,
    Permission::ClientView,
    Permission::ClientManage,
    Permission::ProjectView,
    Permission::ProjectCreate,
    Permission::ProjectEdit,
    Permission::ProjectViewAll,
    Permission::AssociateView,
    Permission::AssociateManage,
    Permission::DocumentView,
    Permission::DocumentUpload,
    Permission::NoteView,
    Permission::NoteCreate,
    Permission::CostingView,
    Permission::CostingRequest,
    Permission::RevenueView,
    Permission::RevenueManage,
];

const ENGAGEMENT_LEAD_PERMISSIONS: &[Permission] = &[
    Permission::DashboardView,
    Permission::ClientView,
    Permission::ProjectView,
    Permission::ProjectEdit,
    Permission::ProjectViewOwned,
    Permission::AssociateView,
    Permission::DocumentView,
    Permission::DocumentUpload,
    Permission::NoteView,
    Permission::NoteCreate,
    Permission::CostingView,
    Permission::CostingRequest,
    Permission::RevenueView,
];

const ASSOCIATE_PERMISSIONS: &[Permission] = &[
    Permission::DashboardView,
    Permission::ProjectView,
    Permission::ProjectViewAssigned,
    Permission::DocumentView,
    Permission::NoteView,
    Permission::NoteCreate,
];

/// Stable audit actions emitted by application use-cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// Emitted when a client record is created.
    ClientCreated,
    /// Emitted when a project is created.
    ProjectCreated,
    /// Emitted when project details change.
    ProjectUpdated,
    /// Emitted when a project moves to another lifecycle stage.
    ProjectStageChanged,
    /// Emitted when a project is deleted.
    ProjectDeleted,
    /// Emitted when a note is written.
    NoteCreated,
    /// Emitted when a document upload is recorded.
    DocumentRecorded,
    /// Emitted when a costing request is raised.
    CostingRequested,
    /// Emitted when a contract value is recorded.
    RevenueRecorded,
    /// Emitted when a staffing assignment is recorded.
    AssignmentRecorded,
    /// Emitted when a user account is created.
    UserCreated,
    /// Emitted when an account's role changes.
    UserRoleChanged,
    /// Emitted when an account is deactivated.
    UserDeactivated,
    /// Emitted when an associate record is created.
    AssociateCreated,
}

impl AuditAction {
    /// Returns a stable storage value for this action.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClientCreated => "client.created",
            Self::ProjectCreated => "project.created",
            Self::ProjectUpdated => "project.updated",
            Self::ProjectStageChanged => "project.stage_changed",
            Self::ProjectDeleted => "project.deleted",
            Self::NoteCreated => "note.created",
            Self::DocumentRecorded => "document.recorded",
            Self::CostingRequested => "costing.requested",
            Self::RevenueRecorded => "revenue.recorded",
            Self::AssignmentRecorded => "assignment.recorded",
            Self::UserCreated => "user.created",
            Self::UserRoleChanged => "user.role_changed",
            Self::UserDeactivated => "user.deactivated",
            Self::AssociateCreated => "associate.created",
        }
    }
}
