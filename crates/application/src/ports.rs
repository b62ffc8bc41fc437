//! Repository ports the application services depend on.
//!
//! Implementations live in the infrastructure crate; tests use in-file
//! fakes. The services never reach past these traits.

use async_trait::async_trait;
use praxis_core::{AppResult, AssociateId, ClientId, ProjectId, UserId};
use praxis_domain::{
    Associate, AuditAction, Client, CostingRequest, Project, ProjectAssignment, ProjectDocument,
    ProjectNote, ProjectRevenue, UserAccount,
};

/// One audit log entry appended by a mutating use-case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    /// Account that performed the action.
    pub actor: UserId,
    /// Stable action tag.
    pub action: AuditAction,
    /// Kind of resource acted on.
    pub resource_type: String,
    /// Identifier of the resource acted on.
    pub resource_id: String,
    /// Optional human-readable context.
    pub detail: Option<String>,
}

/// Append-only audit sink.
#[async_trait]
pub trait AuditRepository: Send + Sync {
    /// Appends one event to the audit log.
    async fn append_event(&self, event: AuditEvent) -> AppResult<()>;
}

/// Port for user account storage.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a new account; conflicts on an existing id.
    async fn save_account(&self, account: UserAccount) -> AppResult<()>;

    /// Replaces an existing account; errors if it does not exist.
    async fn update_account(&self, account: UserAccount) -> AppResult<()>;

    /// Finds an account by id.
    async fn find_account(&self, user_id: UserId) -> AppResult<Option<UserAccount>>;

    /// Lists all accounts ordered by display name.
    async fn list_accounts(&self) -> AppResult<Vec<UserAccount>>;
}

/// Port for associate storage.
#[async_trait]
pub trait AssociateRepository: Send + Sync {
    /// Stores a new associate; conflicts on an existing id.
    async fn save_associate(&self, associate: Associate) -> AppResult<()>;

    /// Finds an associate by id.
    async fn find_associate(&self, associate_id: AssociateId) -> AppResult<Option<Associate>>;

    /// Lists all associates ordered by name.
    async fn list_associates(&self) -> AppResult<Vec<Associate>>;
}

/// Port for client storage.
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Stores a new client; conflicts on an existing id.
    async fn save_client(&self, client: Client) -> AppResult<()>;

    /// Finds a client by id.
    async fn find_client(&self, client_id: ClientId) -> AppResult<Option<Client>>;

    /// Lists all clients ordered by name.
    async fn list_clients(&self) -> AppResult<Vec<Client>>;
}

/// Port for project storage.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Stores a new project; conflicts on an existing id.
    async fn save_project(&self, project: Project) -> AppResult<()>;

    /// Replaces an existing project; errors if it does not exist.
    async fn update_project(&self, project: Project) -> AppResult<()>;

    /// Finds a project by id.
    async fn find_project(&self, project_id: ProjectId) -> AppResult<Option<Project>>;

    /// Lists all projects ordered by name.
    async fn list_projects(&self) -> AppResult<Vec<Project>>;

    /// Removes a project; errors if it does not exist.
    async fn delete_project(&self, project_id: ProjectId) -> AppResult<()>;
}

/// Port for staffing assignments and contract records.
#[async_trait]
pub trait StaffingRepository: Send + Sync {
    /// Stores a staffing assignment.
    async fn save_assignment(&self, assignment: ProjectAssignment) -> AppResult<()>;

    /// Lists assignments staffed on one project.
    async fn list_assignments_for_project(
        &self,
        project_id: ProjectId,
    ) -> AppResult<Vec<ProjectAssignment>>;

    /// Lists one associate's assignments across all projects.
    async fn list_assignments_for_associate(
        &self,
        associate_id: AssociateId,
    ) -> AppResult<Vec<ProjectAssignment>>;

    /// Stores or replaces the contract record for a project.
    async fn save_revenue(&self, revenue: ProjectRevenue) -> AppResult<()>;

    /// Finds the contract record for a project.
    async fn find_revenue_for_project(
        &self,
        project_id: ProjectId,
    ) -> AppResult<Option<ProjectRevenue>>;
}

/// Port for the records attached to projects as work progresses.
#[async_trait]
pub trait WorkstreamRepository: Send + Sync {
    /// Stores a note.
    async fn save_note(&self, note: ProjectNote) -> AppResult<()>;

    /// Lists a project's notes, oldest first.
    async fn list_notes_for_project(&self, project_id: ProjectId) -> AppResult<Vec<ProjectNote>>;

    /// Stores a document record.
    async fn save_document(&self, document: ProjectDocument) -> AppResult<()>;

    /// Lists a project's document records, oldest first.
    async fn list_documents_for_project(
        &self,
        project_id: ProjectId,
    ) -> AppResult<Vec<ProjectDocument>>;

    /// Stores a costing request.
    async fn save_costing_request(&self, request: CostingRequest) -> AppResult<()>;

    /// Lists a project's costing requests, oldest first.
    async fn list_costing_requests_for_project(
        &self,
        project_id: ProjectId,
    ) -> AppResult<Vec<CostingRequest>>;
}
