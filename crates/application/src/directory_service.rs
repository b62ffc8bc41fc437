use std::sync::Arc;

use praxis_core::{AppError, AppResult, AssociateId, UserId};
use praxis_domain::{
    Associate, AuditAction, EmailAddress, Permission, Role, UserAccount,
};

use crate::{AssociateRepository, AuditEvent, AuditRepository, AuthorizationService, UserRepository};

/// Input for account creation.
#[derive(Debug, Clone)]
pub struct CreateAccountInput {
    /// Display name for the new account.
    pub display_name: String,
    /// Email address for the new account.
    pub email: String,
    /// Role the account starts with.
    pub role: Role,
    /// Optional link to an associate record.
    pub associate_id: Option<AssociateId>,
}

/// Input for associate creation.
#[derive(Debug, Clone)]
pub struct CreateAssociateInput {
    /// Associate name.
    pub name: String,
    /// Associate email address.
    pub email: String,
    /// Job title.
    pub job_title: String,
    /// Staffable hours per week.
    pub weekly_capacity_hours: f64,
}

/// Application service for the staff directory: user accounts and
/// associates.
#[derive(Clone)]
pub struct DirectoryService {
    authorization: AuthorizationService,
    users: Arc<dyn UserRepository>,
    associates: Arc<dyn AssociateRepository>,
    audit: Arc<dyn AuditRepository>,
}

impl DirectoryService {
    /// Creates the service from its ports.
    #[must_use]
    pub fn new(
        authorization: AuthorizationService,
        users: Arc<dyn UserRepository>,
        associates: Arc<dyn AssociateRepository>,
        audit: Arc<dyn AuditRepository>,
    ) -> Self {
        Self {
            authorization,
            users,
            associates,
            audit,
        }
    }

    /// Resolves the acting identity for a request.
    ///
    /// Unknown or deactivated accounts resolve to `Unauthorized`; a stale
    /// identity must not keep acting after deactivation.
    pub async fn resolve_identity(&self, user_id: UserId) -> AppResult<UserAccount> {
        let account = self
            .users
            .find_account(user_id)
            .await?
            .ok_or_else(|| AppError::Unauthorized(format!("unknown account '{user_id}'")))?;

        if !account.is_active() {
            return Err(AppError::Unauthorized(format!(
                "account '{user_id}' is deactivated"
            )));
        }

        Ok(account)
    }

    /// Lists the active accounts available to the demo role picker.
    ///
    /// Deliberately unauthenticated: the source system's login screen is a
    /// role picker over seeded accounts.
    pub async fn demo_directory(&self) -> AppResult<Vec<UserAccount>> {
        Ok(self
            .users
            .list_accounts()
            .await?
            .into_iter()
            .filter(UserAccount::is_active)
            .collect())
    }

    /// Lists every account, including deactivated ones.
    pub async fn list_accounts(&self, actor: &UserAccount) -> AppResult<Vec<UserAccount>> {
        self.authorization
            .require_permission(actor, Permission::UserManage)?;
        self.users.list_accounts().await
    }

    /// Creates an account.
    pub async fn create_account(
        &self,
        actor: &UserAccount,
        input: CreateAccountInput,
    ) -> AppResult<UserAccount> {
        self.authorization
            .require_permission(actor, Permission::UserManage)?;

        let account = UserAccount::new(
            UserId::new(),
            input.display_name,
            EmailAddress::new(input.email)?,
            input.role,
            input.associate_id,
        )?;
        self.users.save_account(account.clone()).await?;

        self.audit
            .append_event(AuditEvent {
                actor: actor.id(),
                action: AuditAction::UserCreated,
                resource_type: "user_account".to_owned(),
                resource_id: account.id().to_string(),
                detail: Some(format!("role '{}'", account.role().as_str())),
            })
            .await?;

        Ok(account)
    }

    /// Replaces an account's role.
    pub async fn change_role(
        &self,
        actor: &UserAccount,
        user_id: UserId,
        role: Role,
    ) -> AppResult<UserAccount> {
        self.authorization
            .require_permission(actor, Permission::UserManage)?;

        let mut account = self
            .users
            .find_account(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("account '{user_id}' does not exist")))?;

        let previous = account.role();
        account.change_role(role);
        self.users.update_account(account.clone()).await?;

        self.audit
            .append_event(AuditEvent {
                actor: actor.id(),
                action: AuditAction::UserRoleChanged,
                resource_type: "user_account".to_owned(),
                resource_id: user_id.to_string(),
                detail: Some(format!(
                    "role '{}' -> '{}'",
                    previous.as_str(),
                    role.as_str()
                )),
            })
            .await?;

        Ok(account)
    }

    /// Deactivates an account. Accounts are never hard deleted.
    pub async fn deactivate_account(
        &self,
        actor: &UserAccount,
        user_id: UserId,
    ) -> AppResult<UserAccount> {
        self.authorization
            .require_permission(actor, Permission::UserManage)?;

        let mut account = self
            .users
            .find_account(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("account '{user_id}' does not exist")))?;

        account.deactivate();
        self.users.update_account(account.clone()).await?;

        self.audit
            .append_event(AuditEvent {
                actor: actor.id(),
                action: AuditAction::UserDeactivated,
                resource_type: "user_account".to_owned(),
                resource_id: user_id.to_string(),
                detail: None,
            })
            .await?;

        Ok(account)
    }

    /// Lists associates.
    pub async fn list_associates(&self, actor: &UserAccount) -> AppResult<Vec<Associate>> {
        self.authorization
            .require_permission(actor, Permission::AssociateView)?;
        self.associates.list_associates().await
    }

    /// Creates an associate record.
    pub async fn create_associate(
        &self,
        actor: &UserAccount,
        input: CreateAssociateInput,
    ) -> AppResult<Associate> {
        self.authorization
            .require_permission(actor, Permission::AssociateManage)?;

        let associate = Associate::new(
            AssociateId::new(),
            input.name,
            EmailAddress::new(input.email)?,
            input.job_title,
            input.weekly_capacity_hours,
        )?;
        self.associates.save_associate(associate.clone()).await?;

        self.audit
            .append_event(AuditEvent {
                actor: actor.id(),
                action: AuditAction::AssociateCreated,
                resource_type: "associate".to_owned(),
                resource_id: associate.id().to_string(),
                detail: None,
            })
            .await?;

        Ok(associate)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use async_trait::async_trait;
    use praxis_core::{AppError, AppResult, AssociateId, ProjectId, UserId};
    use praxis_domain::{Associate, EmailAddress, Project, Role, UserAccount};
    use tokio::sync::Mutex;

    use super::{CreateAccountInput, DirectoryService};
    use crate::{
        AssociateRepository, AuditEvent, AuditRepository, AuthorizationService, ProjectRepository,
        UserRepository,
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
    struct FakeUserRepository {
        map: Mutex<HashMap<UserId, UserAccount>>,
    }

    #[async_trait]
    impl UserRepository for FakeUserRepository {
        async fn save_account(&self, account: UserAccount) -> AppResult<()> {
            self.map.lock().await.insert(account.id(), account);
            Ok(())
        }

        async fn update_account(&self, account: UserAccount) -> AppResult<()> {
            self.map.lock().await.insert(account.id(), account);
            Ok(())
        }

        async fn find_account(&self, user_id: UserId) -> AppResult<Option<UserAccount>> {
            Ok(self.map.lock().await.get(&user_id).cloned())
        }

        async fn list_accounts(&self) -> AppResult<Vec<UserAccount>> {
            Ok(self.map.lock().await.values().cloned().collect())
        }
    }

    #[derive(Default)]
    struct FakeAssociateRepository {
        map: Mutex<HashMap<AssociateId, Associate>>,
    }

    #[async_trait]
    impl AssociateRepository for FakeAssociateRepository {
        async fn save_associate(&self, associate: Associate) -> AppResult<()> {
            self.map.lock().await.insert(associate.id(), associate);
            Ok(())
        }

        async fn find_associate(&self, associate_id: AssociateId) -> AppResult<Option<Associate>> {
            Ok(self.map.lock().await.get(&associate_id).cloned())
        }

        async fn list_associates(&self) -> AppResult<Vec<Associate>> {
            Ok(self.map.lock().await.values().cloned().collect())
        }
    }

    struct EmptyProjectRepository;

    #[async_trait]
    impl ProjectRepository for EmptyProjectRepository {
        async fn save_project(&self, _project: Project) -> AppResult<()> {
            Ok(())
        }

        async fn update_project(&self, _project: Project) -> AppResult<()> {
            Ok(())
        }

        async fn find_project(&self, _project_id: ProjectId) -> AppResult<Option<Project>> {
            Ok(None)
        }

        async fn list_projects(&self) -> AppResult<Vec<Project>> {
            Ok(Vec::new())
        }

        async fn delete_project(&self, _project_id: ProjectId) -> AppResult<()> {
            Ok(())
        }
    }

    fn account(role: Role) -> UserAccount {
        let email = EmailAddress::new("admin@firm.example").unwrap_or_else(|_| unreachable!());
        UserAccount::new(UserId::new(), "Admin", email, role, None)
            .unwrap_or_else(|_| unreachable!())
    }

    fn service(users: Arc<FakeUserRepository>, audit: Arc<FakeAuditRepository>) -> DirectoryService {
        DirectoryService::new(
            AuthorizationService::new(Arc::new(EmptyProjectRepository)),
            users,
            Arc::new(FakeAssociateRepository::default()),
            audit,
        )
    }

    #[tokio::test]
    async fn deactivated_identity_does_not_resolve() {
        let users = Arc::new(FakeUserRepository::default());
        let audit = Arc::new(FakeAuditRepository::default());
        let directory = service(users.clone(), audit);

        let mut stale = account(Role::Manager);
        stale.deactivate();
        let saved = users.save_account(stale.clone()).await;
        assert!(saved.is_ok());

        let resolved = directory.resolve_identity(stale.id()).await;
        assert!(matches!(resolved, Err(AppError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn create_account_requires_user_manage_and_audits() {
        let users = Arc::new(FakeUserRepository::default());
        let audit = Arc::new(FakeAuditRepository::default());
        let directory = service(users, audit.clone());

        let input = CreateAccountInput {
            display_name: "New Lead".to_owned(),
            email: "lead@firm.example".to_owned(),
            role: Role::EngagementLead,
            associate_id: Some(AssociateId::new()),
        };

        let denied = directory
            .create_account(&account(Role::Manager), input.clone())
            .await;
        assert!(matches!(denied, Err(AppError::Forbidden(_))));

        let created = directory
            .create_account(&account(Role::Executive), input)
            .await;
        assert!(created.is_ok());
        assert_eq!(audit.events.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn demo_directory_hides_deactivated_accounts() {
        let users = Arc::new(FakeUserRepository::default());
        let audit = Arc::new(FakeAuditRepository::default());
        let directory = service(users.clone(), audit);

        let active = account(Role::Executive);
        let mut gone = account(Role::Associate);
        gone.deactivate();
        assert!(users.save_account(active.clone()).await.is_ok());
        assert!(users.save_account(gone).await.is_ok());

        let listed = directory.demo_directory().await;
        assert!(listed.is_ok());

        let listed = listed.unwrap_or_default();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id(), active.id());
    }

    #[tokio::test]
    async fn role_change_records_previous_and_next_role() {
        let users = Arc::new(FakeUserRepository::default());
        let audit = Arc::new(FakeAuditRepository::default());
        let directory = service(users.clone(), audit.clone());

        let target = account(Role::Associate);
        assert!(users.save_account(target.clone()).await.is_ok());

        let changed = directory
            .change_role(&account(Role::Executive), target.id(), Role::Manager)
            .await;
        assert!(changed.is_ok());
        assert_eq!(
            changed.unwrap_or_else(|_| unreachable!()).role(),
            Role::Manager
        );

        let events = audit.events.lock().await;
        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0].detail.as_deref(),
            Some("role 'associate' -> 'manager'")
        );
    }
}
