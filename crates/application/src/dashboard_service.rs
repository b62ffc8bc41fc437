use std::collections::BTreeSet;
use std::sync::Arc;

use praxis_core::AppResult;
use praxis_domain::{
    LifecycleStage, Permission, ProjectHealth, UserAccount, can_view_project,
};
use serde::Serialize;

use crate::{AuthorizationService, ClientRepository, ProjectRepository};

/// Project count for one lifecycle stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageCount {
    /// The stage counted.
    pub stage: LifecycleStage,
    /// Number of visible projects in that stage.
    pub count: usize,
}

/// Aggregates for the portfolio dashboard, computed over exactly the
/// projects the requesting account may view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortfolioSnapshot {
    /// Total visible projects.
    pub total_projects: usize,
    /// Per-stage counts in lifecycle order, zeroes included.
    pub stage_counts: Vec<StageCount>,
    /// Visible projects tracking to plan.
    pub on_track: usize,
    /// Visible projects flagged at risk.
    pub at_risk: usize,
    /// Visible projects escalated to critical.
    pub critical: usize,
    /// At-risk plus critical, the dashboard's attention counter.
    pub needs_attention: usize,
    /// Active clients across the whole firm.
    pub active_clients: usize,
    /// Distinct associates staffed on visible projects.
    pub staffed_associates: usize,
}

/// Application service deriving dashboard aggregates.
#[derive(Clone)]
pub struct DashboardService {
    authorization: AuthorizationService,
    projects: Arc<dyn ProjectRepository>,
    clients: Arc<dyn ClientRepository>,
}

impl DashboardService {
    /// Creates the service from its ports.
    #[must_use]
    pub fn new(
        authorization: AuthorizationService,
        projects: Arc<dyn ProjectRepository>,
        clients: Arc<dyn ClientRepository>,
    ) -> Self {
        Self {
            authorization,
            projects,
            clients,
        }
    }

    /// Computes the dashboard snapshot for the requesting account.
    pub async fn portfolio_snapshot(&self, actor: &UserAccount) -> AppResult<PortfolioSnapshot> {
        self.authorization
            .require_permission(actor, Permission::DashboardView)?;

        let visible: Vec<_> = self
            .projects
            .list_projects()
            .await?
            .into_iter()
            .filter(|project| can_view_project(Some(actor), &project.access()))
            .collect();

        let mut stage_counts: Vec<StageCount> = LifecycleStage::all()
            .iter()
            .map(|stage| StageCount {
                stage: *stage,
                count: 0,
            })
            .collect();
        let mut on_track = 0;
        let mut at_risk = 0;
        let mut critical = 0;
        let mut staffed = BTreeSet::new();

        for project in &visible {
            if let Some(entry) = stage_counts
                .iter_mut()
                .find(|entry| entry.stage == project.stage())
            {
                entry.count += 1;
            }

            match project.health() {
                ProjectHealth::OnTrack => on_track += 1,
                ProjectHealth::AtRisk => at_risk += 1,
                ProjectHealth::Critical => critical += 1,
            }

            staffed.extend(project.assigned_associates().iter().copied());
        }

        let active_clients = self
            .clients
            .list_clients()
            .await?
            .iter()
            .filter(|client| client.is_active())
            .count();

        Ok(PortfolioSnapshot {
            total_projects: visible.len(),
            stage_counts,
            on_track,
            at_risk,
            critical,
            needs_attention: at_risk + critical,
            active_clients,
            staffed_associates: staffed.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashMap};
    use std::sync::Arc;

    use async_trait::async_trait;
    use praxis_core::{AppResult, AssociateId, ClientId, ProjectId, UserId};
    use praxis_domain::{
        Client, EmailAddress, LifecycleStage, Project, ProjectHealth, Role, UserAccount,
    };
    use tokio::sync::Mutex;

    use super::DashboardService;
    use crate::{AuthorizationService, ClientRepository, ProjectRepository};

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
    struct FakeClientRepository {
        map: Mutex<HashMap<ClientId, Client>>,
    }

    #[async_trait]
    impl ClientRepository for FakeClientRepository {
        async fn save_client(&self, client: Client) -> AppResult<()> {
            self.map.lock().await.insert(client.id(), client);
            Ok(())
        }

        async fn find_client(&self, client_id: ClientId) -> AppResult<Option<Client>> {
            Ok(self.map.lock().await.get(&client_id).cloned())
        }

        async fn list_clients(&self) -> AppResult<Vec<Client>> {
            Ok(self.map.lock().await.values().cloned().collect())
        }
    }

    fn account(role: Role, associate_id: Option<AssociateId>) -> UserAccount {
        let email = EmailAddress::new("member@firm.example").unwrap_or_else(|_| unreachable!());
        UserAccount::new(UserId::new(), "Member", email, role, associate_id)
            .unwrap_or_else(|_| unreachable!())
    }

    async fn seed_project(
        projects: &FakeProjectRepository,
        stage: LifecycleStage,
        health: ProjectHealth,
        owner: AssociateId,
        assigned: BTreeSet<AssociateId>,
    ) {
        let project = Project::new(
            ProjectId::new(),
            ClientId::new(),
            "Engagement",
            stage,
            health,
            owner,
            assigned,
        )
        .unwrap_or_else(|_| unreachable!());
        let saved = projects.save_project(project).await;
        assert!(saved.is_ok());
    }

    #[tokio::test]
    async fn snapshot_counts_stages_health_and_staffing() {
        let projects = Arc::new(FakeProjectRepository::default());
        let clients = Arc::new(FakeClientRepository::default());
        let shared = AssociateId::new();

        seed_project(
            &projects,
            LifecycleStage::Execution,
            ProjectHealth::OnTrack,
            AssociateId::new(),
            BTreeSet::from([shared]),
        )
        .await;
        seed_project(
            &projects,
            LifecycleStage::Execution,
            ProjectHealth::AtRisk,
            AssociateId::new(),
            BTreeSet::from([shared, AssociateId::new()]),
        )
        .await;
        seed_project(
            &projects,
            LifecycleStage::Learnings,
            ProjectHealth::Critical,
            AssociateId::new(),
            BTreeSet::new(),
        )
        .await;

        let contact = EmailAddress::new("cfo@acme.example").unwrap_or_else(|_| unreachable!());
        let client = Client::new(ClientId::new(), "Acme", "Manufacturing", "R. Vale", contact)
            .unwrap_or_else(|_| unreachable!());
        assert!(clients.save_client(client).await.is_ok());

        let service = DashboardService::new(
            AuthorizationService::new(projects.clone()),
            projects,
            clients,
        );

        let snapshot = service
            .portfolio_snapshot(&account(Role::Executive, None))
            .await;
        assert!(snapshot.is_ok());

        let snapshot = snapshot.unwrap_or_else(|_| unreachable!());
        assert_eq!(snapshot.total_projects, 3);
        assert_eq!(snapshot.on_track, 1);
        assert_eq!(snapshot.at_risk, 1);
        assert_eq!(snapshot.critical, 1);
        assert_eq!(snapshot.needs_attention, 2);
        assert_eq!(snapshot.active_clients, 1);
        assert_eq!(snapshot.staffed_associates, 2);

        let execution = snapshot
            .stage_counts
            .iter()
            .find(|entry| entry.stage == LifecycleStage::Execution);
        assert_eq!(execution.map(|entry| entry.count), Some(2));
        // Every stage appears even when empty.
        assert_eq!(snapshot.stage_counts.len(), LifecycleStage::all().len());
    }

    #[tokio::test]
    async fn snapshot_is_scoped_to_the_viewer() {
        let projects = Arc::new(FakeProjectRepository::default());
        let clients = Arc::new(FakeClientRepository::default());
        let owner = AssociateId::new();

        seed_project(
            &projects,
            LifecycleStage::Execution,
            ProjectHealth::AtRisk,
            owner,
            BTreeSet::new(),
        )
        .await;
        seed_project(
            &projects,
            LifecycleStage::Onboarding,
            ProjectHealth::OnTrack,
            AssociateId::new(),
            BTreeSet::new(),
        )
        .await;

        let service = DashboardService::new(
            AuthorizationService::new(projects.clone()),
            projects,
            clients,
        );

        let snapshot = service
            .portfolio_snapshot(&account(Role::EngagementLead, Some(owner)))
            .await;
        assert!(snapshot.is_ok());

        let snapshot = snapshot.unwrap_or_else(|_| unreachable!());
        assert_eq!(snapshot.total_projects, 1);
        assert_eq!(snapshot.needs_attention, 1);
    }
}
