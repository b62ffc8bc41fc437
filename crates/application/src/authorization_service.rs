use std::sync::Arc;

use praxis_core::{AppError, AppResult, ProjectId};
use praxis_domain::{Permission, Project, UserAccount, can_edit_project, can_view_project};

use crate::ProjectRepository;

/// Application service translating domain access decisions into errors.
///
/// The domain evaluator answers with booleans; use-cases need a loaded
/// project and an `AppError::Forbidden` on denial, which this service
/// provides.
#[derive(Clone)]
pub struct AuthorizationService {
    projects: Arc<dyn ProjectRepository>,
}

impl AuthorizationService {
    /// Creates the service from a project repository.
    #[must_use]
    pub fn new(projects: Arc<dyn ProjectRepository>) -> Self {
        Self { projects }
    }

    /// Ensures the account holds a permission.
    pub fn require_permission(
        &self,
        account: &UserAccount,
        permission: Permission,
    ) -> AppResult<()> {
        if praxis_domain::has_permission(Some(account), permission) {
            return Ok(());
        }

        Err(AppError::Forbidden(format!(
            "account '{}' is missing permission '{}'",
            account.id(),
            permission.as_str()
        )))
    }

    /// Loads a project the account may view.
    ///
    /// Missing project resolves to `NotFound` before any access decision,
    /// so a caller cannot probe for hidden ids.
    pub async fn ensure_can_view_project(
        &self,
        account: &UserAccount,
        project_id: ProjectId,
    ) -> AppResult<Project> {
        let project = self.load_project(project_id).await?;

        if can_view_project(Some(account), &project.access()) {
            return Ok(project);
        }

        Err(AppError::Forbidden(format!(
            "account '{}' may not view project '{project_id}'",
            account.id()
        )))
    }

    /// Loads a project the account may edit.
    pub async fn ensure_can_edit_project(
        &self,
        account: &UserAccount,
        project_id: ProjectId,
    ) -> AppResult<Project> {
        let project = self.load_project(project_id).await?;

        if can_edit_project(Some(account), &project.access()) {
            return Ok(project);
        }

        Err(AppError::Forbidden(format!(
            "account '{}' may not edit project '{project_id}'",
            account.id()
        )))
    }

    async fn load_project(&self, project_id: ProjectId) -> AppResult<Project> {
        self.projects
            .find_project(project_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("project '{project_id}' does not exist")))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashMap};
    use std::sync::Arc;

    use async_trait::async_trait;
    use praxis_core::{AppError, AppResult, AssociateId, ClientId, ProjectId, UserId};
    use praxis_domain::{
        EmailAddress, LifecycleStage, Permission, Project, ProjectHealth, Role, UserAccount,
    };
    use tokio::sync::Mutex;

    use super::AuthorizationService;
    use crate::ProjectRepository;

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

    fn account(role: Role, associate_id: Option<AssociateId>) -> UserAccount {
        let email = EmailAddress::new("member@firm.example").unwrap_or_else(|_| unreachable!());
        UserAccount::new(UserId::new(), "Member", email, role, associate_id)
            .unwrap_or_else(|_| unreachable!())
    }

    fn project(owner: AssociateId) -> Project {
        Project::new(
            ProjectId::new(),
            ClientId::new(),
            "Pricing Study",
            LifecycleStage::Execution,
            ProjectHealth::OnTrack,
            owner,
            BTreeSet::new(),
        )
        .unwrap_or_else(|_| unreachable!())
    }

    #[test]
    fn missing_permission_is_forbidden() {
        let service = AuthorizationService::new(Arc::new(FakeProjectRepository::default()));
        let member = account(Role::Associate, None);

        let result = service.require_permission(&member, Permission::ProjectCreate);
        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    #[tokio::test]
    async fn unknown_project_is_not_found_before_access_is_decided() {
        let service = AuthorizationService::new(Arc::new(FakeProjectRepository::default()));
        let executive = account(Role::Executive, None);

        let result = service
            .ensure_can_view_project(&executive, ProjectId::new())
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn engagement_lead_edits_owned_project_only() {
        let repository = Arc::new(FakeProjectRepository::default());
        let owner = AssociateId::new();
        let owned = project(owner);
        let foreign = project(AssociateId::new());
        let save = repository.save_project(owned.clone()).await;
        assert!(save.is_ok());
        let save = repository.save_project(foreign.clone()).await;
        assert!(save.is_ok());

        let service = AuthorizationService::new(repository);
        let lead = account(Role::EngagementLead, Some(owner));

        let allowed = service.ensure_can_edit_project(&lead, owned.id()).await;
        assert!(allowed.is_ok());

        let denied = service.ensure_can_edit_project(&lead, foreign.id()).await;
        assert!(matches!(denied, Err(AppError::Forbidden(_))));
    }
}
