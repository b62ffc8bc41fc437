use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::Utc;
use praxis_core::{
    AppResult, AssociateId, ClientId, CostingRequestId, DocumentId, NoteId, ProjectId,
};
use praxis_domain::{
    AuditAction, CostingRequest, DocumentKind, LifecycleStage, Permission, Project,
    ProjectDocument, ProjectHealth, ProjectNote, UserAccount, can_view_project,
};

use crate::{
    AuditEvent, AuditRepository, AuthorizationService, ProjectRepository, WorkstreamRepository,
};

/// Input for project creation.
#[derive(Debug, Clone)]
pub struct CreateProjectInput {
    /// Client the engagement belongs to.
    pub client_id: ClientId,
    /// Project name.
    pub name: String,
    /// Starting lifecycle stage.
    pub stage: LifecycleStage,
    /// Starting health flag.
    pub health: ProjectHealth,
    /// Owning engagement lead.
    pub owner_id: AssociateId,
    /// Initially staffed associates.
    pub assigned_associates: BTreeSet<AssociateId>,
}

/// Input for project detail updates. Unset fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateProjectInput {
    /// New project name.
    pub name: Option<String>,
    /// New health flag.
    pub health: Option<ProjectHealth>,
    /// New owning engagement lead.
    pub owner_id: Option<AssociateId>,
    /// Replacement staffed set.
    pub assigned_associates: Option<BTreeSet<AssociateId>>,
}

/// Input for recording a document upload.
#[derive(Debug, Clone)]
pub struct RecordDocumentInput {
    /// Quote or invoice.
    pub kind: DocumentKind,
    /// Uploaded file name.
    pub file_name: String,
    /// Captured amount, if any.
    pub amount: Option<f64>,
}

/// Application service for projects and their attached records.
#[derive(Clone)]
pub struct ProjectService {
    authorization: AuthorizationService,
    projects: Arc<dyn ProjectRepository>,
    workstream: Arc<dyn WorkstreamRepository>,
    audit: Arc<dyn AuditRepository>,
}

impl ProjectService {
    /// Creates the service from its ports.
    #[must_use]
    pub fn new(
        authorization: AuthorizationService,
        projects: Arc<dyn ProjectRepository>,
        workstream: Arc<dyn WorkstreamRepository>,
        audit: Arc<dyn AuditRepository>,
    ) -> Self {
        Self {
            authorization,
            projects,
            workstream,
            audit,
        }
    }

    /// Creates a project.
    pub async fn create_project(
        &self,
        actor: &UserAccount,
        input: CreateProjectInput,
    ) -> AppResult<Project> {
        self.authorization
            .require_permission(actor, Permission::ProjectCreate)?;

        let project = Project::new(
            ProjectId::new(),
            input.client_id,
            input.name,
            input.stage,
            input.health,
            input.owner_id,
            input.assigned_associates,
        )?;
        self.projects.save_project(project.clone()).await?;

        self.audit
            .append_event(AuditEvent {
                actor: actor.id(),
                action: AuditAction::ProjectCreated,
                resource_type: "project".to_owned(),
                resource_id: project.id().to_string(),
                detail: Some(format!("stage '{}'", project.stage().as_str())),
            })
            .await?;

        Ok(project)
    }

    /// Lists the projects the account may view.
    ///
    /// The full list is filtered through the domain evaluator, so each
    /// role sees exactly its scope: all, owned, or assigned.
    pub async fn list_visible_projects(&self, actor: &UserAccount) -> AppResult<Vec<Project>> {
        self.authorization
            .require_permission(actor, Permission::ProjectView)?;

        Ok(self
            .projects
            .list_projects()
            .await?
            .into_iter()
            .filter(|project| can_view_project(Some(actor), &project.access()))
            .collect())
    }

    /// Loads one project the account may view.
    pub async fn get_project(&self, actor: &UserAccount, project_id: ProjectId) -> AppResult<Project> {
        self.authorization
            .ensure_can_view_project(actor, project_id)
            .await
    }

    /// Applies detail updates to a project the account may edit.
    pub async fn update_project(
        &self,
        actor: &UserAccount,
        project_id: ProjectId,
        input: UpdateProjectInput,
    ) -> AppResult<Project> {
        let mut project = self
            .authorization
            .ensure_can_edit_project(actor, project_id)
            .await?;

        if let Some(name) = input.name {
            project.rename(name)?;
        }
        if let Some(health) = input.health {
            project.change_health(health);
        }
        if let Some(assigned) = input.assigned_associates {
            for associate_id in project.assigned_associates().clone() {
                project.unassign_associate(associate_id);
            }
            for associate_id in assigned {
                project.assign_associate(associate_id);
            }
        }
        if let Some(owner_id) = input.owner_id {
            project.change_owner(owner_id);
        }

        self.projects.update_project(project.clone()).await?;

        self.audit
            .append_event(AuditEvent {
                actor: actor.id(),
                action: AuditAction::ProjectUpdated,
                resource_type: "project".to_owned(),
                resource_id: project_id.to_string(),
                detail: None,
            })
            .await?;

        Ok(project)
    }

    /// Moves a project to another lifecycle stage.
    pub async fn change_stage(
        &self,
        actor: &UserAccount,
        project_id: ProjectId,
        stage: LifecycleStage,
    ) -> AppResult<Project> {
        let mut project = self
            .authorization
            .ensure_can_edit_project(actor, project_id)
            .await?;

        let previous = project.stage();
        project.change_stage(stage);
        self.projects.update_project(project.clone()).await?;

        self.audit
            .append_event(AuditEvent {
                actor: actor.id(),
                action: AuditAction::ProjectStageChanged,
                resource_type: "project".to_owned(),
                resource_id: project_id.to_string(),
                detail: Some(format!(
                    "stage '{}' -> '{}'",
                    previous.as_str(),
                    stage.as_str()
                )),
            })
            .await?;

        Ok(project)
    }

    /// Deletes a project.
    pub async fn delete_project(
        &self,
        actor: &UserAccount,
        project_id: ProjectId,
    ) -> AppResult<()> {
        self.authorization
            .require_permission(actor, Permission::ProjectDelete)?;
        // Load through the view check so the not-found case surfaces
        // before deletion is attempted.
        self.authorization
            .ensure_can_view_project(actor, project_id)
            .await?;

        self.projects.delete_project(project_id).await?;

        self.audit
            .append_event(AuditEvent {
                actor: actor.id(),
                action: AuditAction::ProjectDeleted,
                resource_type: "project".to_owned(),
                resource_id: project_id.to_string(),
                detail: None,
            })
            .await
    }

    /// Lists a project's notes.
    pub async fn list_notes(
        &self,
        actor: &UserAccount,
        project_id: ProjectId,
    ) -> AppResult<Vec<ProjectNote>> {
        self.authorization
            .require_permission(actor, Permission::NoteView)?;
        self.authorization
            .ensure_can_view_project(actor, project_id)
            .await?;
        self.workstream.list_notes_for_project(project_id).await
    }

    /// Writes a note on a project the account may view.
    pub async fn add_note(
        &self,
        actor: &UserAccount,
        project_id: ProjectId,
        body: impl Into<String>,
    ) -> AppResult<ProjectNote> {
        self.authorization
            .require_permission(actor, Permission::NoteCreate)?;
        self.authorization
            .ensure_can_view_project(actor, project_id)
            .await?;

        let note = ProjectNote::new(NoteId::new(), project_id, actor.id(), body, Utc::now())?;
        self.workstream.save_note(note.clone()).await?;

        self.audit
            .append_event(AuditEvent {
                actor: actor.id(),
                action: AuditAction::NoteCreated,
                resource_type: "project_note".to_owned(),
                resource_id: note.id().to_string(),
                detail: None,
            })
            .await?;

        Ok(note)
    }

    /// Lists a project's document records.
    pub async fn list_documents(
        &self,
        actor: &UserAccount,
        project_id: ProjectId,
    ) -> AppResult<Vec<ProjectDocument>> {
        self.authorization
            .require_permission(actor, Permission::DocumentView)?;
        self.authorization
            .ensure_can_view_project(actor, project_id)
            .await?;
        self.workstream.list_documents_for_project(project_id).await
    }

    /// Records an uploaded quote or invoice.
    pub async fn record_document(
        &self,
        actor: &UserAccount,
        project_id: ProjectId,
        input: RecordDocumentInput,
    ) -> AppResult<ProjectDocument> {
        self.authorization
            .require_permission(actor, Permission::DocumentUpload)?;
        self.authorization
            .ensure_can_view_project(actor, project_id)
            .await?;

        let document = ProjectDocument::new(
            DocumentId::new(),
            project_id,
            input.kind,
            input.file_name,
            input.amount,
            actor.id(),
            Utc::now(),
        )?;
        self.workstream.save_document(document.clone()).await?;

        self.audit
            .append_event(AuditEvent {
                actor: actor.id(),
                action: AuditAction::DocumentRecorded,
                resource_type: "project_document".to_owned(),
                resource_id: document.id().to_string(),
                detail: Some(format!("kind '{}'", document.kind().as_str())),
            })
            .await?;

        Ok(document)
    }

    /// Lists a project's costing requests.
    pub async fn list_costing_requests(
        &self,
        actor: &UserAccount,
        project_id: ProjectId,
    ) -> AppResult<Vec<CostingRequest>> {
        self.authorization
            .require_permission(actor, Permission::CostingView)?;
        self.authorization
            .ensure_can_view_project(actor, project_id)
            .await?;
        self.workstream
            .list_costing_requests_for_project(project_id)
            .await
    }

    /// Raises a costing request on a project the account may view.
    pub async fn raise_costing_request(
        &self,
        actor: &UserAccount,
        project_id: ProjectId,
        description: impl Into<String>,
    ) -> AppResult<CostingRequest> {
        self.authorization
            .require_permission(actor, Permission::CostingRequest)?;
        self.authorization
            .ensure_can_view_project(actor, project_id)
            .await?;

        let request = CostingRequest::new(
            CostingRequestId::new(),
            project_id,
            actor.id(),
            description,
            Utc::now(),
        )?;
        self.workstream.save_costing_request(request.clone()).await?;

        self.audit
            .append_event(AuditEvent {
                actor: actor.id(),
                action: AuditAction::CostingRequested,
                resource_type: "costing_request".to_owned(),
                resource_id: request.id().to_string(),
                detail: None,
            })
            .await?;

        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashMap};
    use std::sync::Arc;

    use async_trait::async_trait;
    use praxis_core::{AppError, AppResult, AssociateId, ClientId, ProjectId, UserId};
    use praxis_domain::{
        CostingRequest, EmailAddress, LifecycleStage, Project, ProjectDocument, ProjectHealth,
        ProjectNote, Role, UserAccount,
    };
    use tokio::sync::Mutex;

    use super::{CreateProjectInput, ProjectService};
    use crate::{
        AuditEvent, AuditRepository, AuthorizationService, ProjectRepository, WorkstreamRepository,
    };

    #[derive(Default)]
    struct FakeAuditRepository {
        events: Mutex<Vec<AuditEvent>>,
    }

    #[async_trait]
    impl AuditRepository for FakeAuditRepository {
        async fn append_event(&self, event: AuditEvent) -> AppResult<()> {
            self.events.lock().await.push(event);
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeProjectRepository {
        map: Mutex<HashMap<ProjectId, Project>>,
    }

    #[async_trait]
    impl ProjectRepository for FakeProjectRepository {
        async fn save_project(&self, project: Project) -> AppResult<()> {
            self.map.lock().await.insert(project.id(), project);
            Ok(())
        }

        async fn update_project(&self, project: Project) -> AppResult<()> {
            self.map.lock().await.insert(project.id(), project);
            Ok(())
        }

        async fn find_project(&self, project_id: ProjectId) -> AppResult<Option<Project>> {
            Ok(self.map.lock().await.get(&project_id).cloned())
        }

        async fn list_projects(&self) -> AppResult<Vec<Project>> {
            Ok(self.map.lock().await.values().cloned().collect())
        }

        async fn delete_project(&self, project_id: ProjectId) -> AppResult<()> {
            self.map.lock().await.remove(&project_id);
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeWorkstreamRepository {
        notes: Mutex<Vec<ProjectNote>>,
        documents: Mutex<Vec<ProjectDocument>>,
        costing_requests: Mutex<Vec<CostingRequest>>,
    }

    #[async_trait]
    impl WorkstreamRepository for FakeWorkstreamRepository {
        async fn save_note(&self, note: ProjectNote) -> AppResult<()> {
            self.notes.lock().await.push(note);
            Ok(())
        }

        async fn list_notes_for_project(
            &self,
            project_id: ProjectId,
        ) -> AppResult<Vec<ProjectNote>> {
            Ok(self
                .notes
                .lock()
                .await
                .iter()
                .filter(|note| note.project_id() == project_id)
                .cloned()
                .collect())
        }

        async fn save_document(&self, document: ProjectDocument) -> AppResult<()> {
            self.documents.lock().await.push(document);
            Ok(())
        }

        async fn list_documents_for_project(
            &self,
            project_id: ProjectId,
        ) -> AppResult<Vec<ProjectDocument>> {
            Ok(self
                .documents
                .lock()
                .await
                .iter()
                .filter(|document| document.project_id() == project_id)
                .cloned()
                .collect())
        }

        async fn save_costing_request(&self, request: CostingRequest) -> AppResult<()> {
            self.costing_requests.lock().await.push(request);
            Ok(())
        }

        async fn list_costing_requests_for_project(
            &self,
            project_id: ProjectId,
        ) -> AppResult<Vec<CostingRequest>> {
            Ok(self
                .costing_requests
                .lock()
                .await
                .iter()
                .filter(|request| request.project_id() == project_id)
                .cloned()
                .collect())
        }
    }

    fn account(role: Role, associate_id: Option<AssociateId>) -> UserAccount {
        let email = EmailAddress::new("member@firm.example").unwrap_or_else(|_| unreachable!());
        UserAccount::new(UserId::new(), "Member", email, role, associate_id)
            .unwrap_or_else(|_| unreachable!())
    }

    fn service(
        projects: Arc<FakeProjectRepository>,
        audit: Arc<FakeAuditRepository>,
    ) -> ProjectService {
        ProjectService::new(
            AuthorizationService::new(projects.clone()),
            projects,
            Arc::new(FakeWorkstreamRepository::default()),
            audit,
        )
    }

    async fn seed_project(
        projects: &FakeProjectRepository,
        owner: AssociateId,
        assigned: BTreeSet<AssociateId>,
    ) -> Project {
        let project = Project::new(
            ProjectId::new(),
            ClientId::new(),
            "Operating Model Redesign",
            LifecycleStage::Execution,
            ProjectHealth::OnTrack,
            owner,
            assigned,
        )
        .unwrap_or_else(|_| unreachable!());
        let saved = projects.save_project(project.clone()).await;
        assert!(saved.is_ok());
        project
    }

    #[tokio::test]
    async fn visible_list_is_scoped_per_role() {
        let projects = Arc::new(FakeProjectRepository::default());
        let audit = Arc::new(FakeAuditRepository::default());

        let owner = AssociateId::new();
        let staffed = AssociateId::new();
        seed_project(&projects, owner, BTreeSet::from([staffed])).await;
        seed_project(&projects, AssociateId::new(), BTreeSet::new()).await;

        let service = service(projects, audit);

        let manager_view = service
            .list_visible_projects(&account(Role::Manager, None))
            .await;
        assert_eq!(manager_view.unwrap_or_default().len(), 2);

        let lead_view = service
            .list_visible_projects(&account(Role::EngagementLead, Some(owner)))
            .await;
        assert_eq!(lead_view.unwrap_or_default().len(), 1);

        let associate_view = service
            .list_visible_projects(&account(Role::Associate, Some(staffed)))
            .await;
        assert_eq!(associate_view.unwrap_or_default().len(), 1);

        let unlinked_view = service
            .list_visible_projects(&account(Role::Associate, None))
            .await;
        assert_eq!(unlinked_view.unwrap_or_default().len(), 0);
    }

    #[tokio::test]
    async fn associates_cannot_create_projects() {
        let projects = Arc::new(FakeProjectRepository::default());
        let audit = Arc::new(FakeAuditRepository::default());
        let service = service(projects, audit);

        let denied = service
            .create_project(
                &account(Role::Associate, None),
                CreateProjectInput {
                    client_id: ClientId::new(),
                    name: "Shadow Project".to_owned(),
                    stage: LifecycleStage::NewBusiness,
                    health: ProjectHealth::OnTrack,
                    owner_id: AssociateId::new(),
                    assigned_associates: BTreeSet::new(),
                },
            )
            .await;
        assert!(matches!(denied, Err(AppError::Forbidden(_))));
    }

    #[tokio::test]
    async fn stage_change_is_audited_with_both_stages() {
        let projects = Arc::new(FakeProjectRepository::default());
        let audit = Arc::new(FakeAuditRepository::default());
        let owner = AssociateId::new();
        let project = seed_project(&projects, owner, BTreeSet::new()).await;
        let service = service(projects, audit.clone());

        let moved = service
            .change_stage(
                &account(Role::Manager, None),
                project.id(),
                LifecycleStage::Closure,
            )
            .await;
        assert!(moved.is_ok());
        assert_eq!(
            moved.unwrap_or_else(|_| unreachable!()).stage(),
            LifecycleStage::Closure
        );

        let events = audit.events.lock().await;
        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0].detail.as_deref(),
            Some("stage 'execution' -> 'closure'")
        );
    }

    #[tokio::test]
    async fn notes_on_foreign_projects_are_forbidden() {
        let projects = Arc::new(FakeProjectRepository::default());
        let audit = Arc::new(FakeAuditRepository::default());
        let project = seed_project(&projects, AssociateId::new(), BTreeSet::new()).await;
        let service = service(projects, audit);

        // The associate holds note.create but has no view on this project.
        let denied = service
            .add_note(
                &account(Role::Associate, Some(AssociateId::new())),
                project.id(),
                "status update",
            )
            .await;
        assert!(matches!(denied, Err(AppError::Forbidden(_))));
    }

    #[tokio::test]
    async fn delete_requires_the_executive_grant() {
        let projects = Arc::new(FakeProjectRepository::default());
        let audit = Arc::new(FakeAuditRepository::default());
        let project = seed_project(&projects, AssociateId::new(), BTreeSet::new()).await;
        let service = service(projects.clone(), audit);

        let denied = service
            .delete_project(&account(Role::Manager, None), project.id())
            .await;
        assert!(matches!(denied, Err(AppError::Forbidden(_))));

        let deleted = service
            .delete_project(&account(Role::Executive, None), project.id())
            .await;
        assert!(deleted.is_ok());

        let remaining = projects.list_projects().await.unwrap_or_default();
        assert!(remaining.is_empty());
    }
}
