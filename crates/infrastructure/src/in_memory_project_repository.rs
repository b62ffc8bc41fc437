use std::collections::HashMap;

use async_trait::async_trait;
use praxis_application::ProjectRepository;
use praxis_core::{AppError, AppResult, ProjectId};
use praxis_domain::Project;
use tokio::sync::RwLock;

/// In-memory project repository.
#[derive(Debug, Default)]
pub struct InMemoryProjectRepository {
    projects: RwLock<HashMap<ProjectId, Project>>,
}

impl InMemoryProjectRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            projects: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn save_project(&self, project: Project) -> AppResult<()> {
        let mut projects = self.projects.write().await;

        if projects.contains_key(&project.id()) {
            return Err(AppError::Conflict(format!(
                "project '{}' already exists",
                project.id()
            )));
        }

        projects.insert(project.id(), project);
        Ok(())
    }

    async fn update_project(&self, project: Project) -> AppResult<()> {
        let mut projects = self.projects.write().await;

        if !projects.contains_key(&project.id()) {
            return Err(AppError::NotFound(format!(
                "project '{}' does not exist",
                project.id()
            )));
        }

        projects.insert(project.id(), project);
        Ok(())
    }

    async fn find_project(&self, project_id: ProjectId) -> AppResult<Option<Project>> {
        Ok(self.projects.read().await.get(&project_id).cloned())
    }

    async fn list_projects(&self) -> AppResult<Vec<Project>> {
        let projects = self.projects.read().await;

        let mut listed: Vec<Project> = projects.values().cloned().collect();
        listed.sort_by(|left, right| left.name().as_str().cmp(right.name().as_str()));

        Ok(listed)
    }

    async fn delete_project(&self, project_id: ProjectId) -> AppResult<()> {
        let removed = self.projects.write().await.remove(&project_id);

        if removed.is_none() {
            return Err(AppError::NotFound(format!(
                "project '{project_id}' does not exist"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use praxis_application::ProjectRepository;
    use praxis_core::{AssociateId, ClientId, ProjectId};
    use praxis_domain::{LifecycleStage, Project, ProjectHealth};

    use super::InMemoryProjectRepository;

    fn project(name: &str) -> Project {
        Project::new(
            ProjectId::new(),
            ClientId::new(),
            name,
            LifecycleStage::Onboarding,
            ProjectHealth::OnTrack,
            AssociateId::new(),
            BTreeSet::new(),
        )
        .unwrap_or_else(|_| unreachable!())
    }

    #[tokio::test]
    async fn update_round_trips_changed_stage() {
        let repository = InMemoryProjectRepository::new();
        let mut stored = project("Warehouse Automation");
        assert!(repository.save_project(stored.clone()).await.is_ok());

        stored.change_stage(LifecycleStage::Execution);
        assert!(repository.update_project(stored.clone()).await.is_ok());

        let found = repository.find_project(stored.id()).await.unwrap_or_default();
        assert_eq!(found.map(|project| project.stage()), Some(LifecycleStage::Execution));
    }

    #[tokio::test]
    async fn deleting_missing_project_is_not_found() {
        let repository = InMemoryProjectRepository::new();
        assert!(repository.delete_project(ProjectId::new()).await.is_err());
    }

    #[tokio::test]
    async fn listing_orders_by_name() {
        let repository = InMemoryProjectRepository::new();
        assert!(repository.save_project(project("Pricing Study")).await.is_ok());
        assert!(repository.save_project(project("Cost Takeout")).await.is_ok());

        let listed = repository.list_projects().await.unwrap_or_default();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].name().as_str(), "Cost Takeout");
    }
}
