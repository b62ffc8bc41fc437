use std::sync::Arc;

use praxis_core::{AppResult, ClientId};
use praxis_domain::{AuditAction, Client, EmailAddress, Permission, UserAccount};

use crate::{AuditEvent, AuditRepository, AuthorizationService, ClientRepository};

/// Input for client creation.
#[derive(Debug, Clone)]
pub struct CreateClientInput {
    /// Client name.
    pub name: String,
    /// Industry label.
    pub industry: String,
    /// Primary contact name.
    pub contact_name: String,
    /// Primary contact email.
    pub contact_email: String,
}

/// Application service for client records.
#[derive(Clone)]
pub struct ClientService {
    authorization: AuthorizationService,
    clients: Arc<dyn ClientRepository>,
    audit: Arc<dyn AuditRepository>,
}

impl ClientService {
    /// Creates the service from its ports.
    #[must_use]
    pub fn new(
        authorization: AuthorizationService,
        clients: Arc<dyn ClientRepository>,
        audit: Arc<dyn AuditRepository>,
    ) -> Self {
        Self {
            authorization,
            clients,
            audit,
        }
    }

    /// Lists clients.
    pub async fn list_clients(&self, actor: &UserAccount) -> AppResult<Vec<Client>> {
        self.authorization
            .require_permission(actor, Permission::ClientView)?;
        self.clients.list_clients().await
    }

    /// Creates a client record.
    pub async fn create_client(
        &self,
        actor: &UserAccount,
        input: CreateClientInput,
    ) -> AppResult<Client> {
        self.authorization
            .require_permission(actor, Permission::ClientManage)?;

        let client = Client::new(
            ClientId::new(),
            input.name,
            input.industry,
            input.contact_name,
            EmailAddress::new(input.contact_email)?,
        )?;
        self.clients.save_client(client.clone()).await?;

        self.audit
            .append_event(AuditEvent {
                actor: actor.id(),
                action: AuditAction::ClientCreated,
                resource_type: "client".to_owned(),
                resource_id: client.id().to_string(),
                detail: None,
            })
            .await?;

        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use async_trait::async_trait;
    use praxis_core::{AppError, AppResult, ClientId, ProjectId, UserId};
    use praxis_domain::{Client, EmailAddress, Project, Role, UserAccount};
    use tokio::sync::Mutex;

    use super::{ClientService, CreateClientInput};
    use crate::{
        AuditEvent, AuditRepository, AuthorizationService, ClientRepository, ProjectRepository,
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
        let email = EmailAddress::new("member@firm.example").unwrap_or_else(|_| unreachable!());
        UserAccount::new(UserId::new(), "Member", email, role, None)
            .unwrap_or_else(|_| unreachable!())
    }

    fn service(audit: Arc<FakeAuditRepository>) -> ClientService {
        ClientService::new(
            AuthorizationService::new(Arc::new(EmptyProjectRepository)),
            Arc::new(FakeClientRepository::default()),
            audit,
        )
    }

    #[tokio::test]
    async fn associates_cannot_list_clients() {
        let clients = service(Arc::new(FakeAuditRepository::default()));

        let listed = clients.list_clients(&account(Role::Associate)).await;
        assert!(matches!(listed, Err(AppError::Forbidden(_))));
    }

    #[tokio::test]
    async fn manager_creates_client_and_event_is_audited() {
        let audit = Arc::new(FakeAuditRepository::default());
        let clients = service(audit.clone());

        let created = clients
            .create_client(
                &account(Role::Manager),
                CreateClientInput {
                    name: "Acme Industrial".to_owned(),
                    industry: "Manufacturing".to_owned(),
                    contact_name: "R. Vale".to_owned(),
                    contact_email: "r.vale@acme.example".to_owned(),
                },
            )
            .await;
        assert!(created.is_ok());
        assert_eq!(audit.events.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn invalid_contact_email_is_rejected() {
        let clients = service(Arc::new(FakeAuditRepository::default()));

        let created = clients
            .create_client(
                &account(Role::Executive),
                CreateClientInput {
                    name: "Acme Industrial".to_owned(),
                    industry: "Manufacturing".to_owned(),
                    contact_name: "R. Vale".to_owned(),
                    contact_email: "not-an-email".to_owned(),
                },
            )
            .await;
        assert!(matches!(created, Err(AppError::Validation(_))));
    }
}
