use std::collections::HashMap;

use async_trait::async_trait;
use praxis_application::ClientRepository;
use praxis_core::{AppError, AppResult, ClientId};
use praxis_domain::Client;
use tokio::sync::RwLock;

/// In-memory client repository.
#[derive(Debug, Default)]
pub struct InMemoryClientRepository {
    clients: RwLock<HashMap<ClientId, Client>>,
}

impl InMemoryClientRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            clients: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl ClientRepository for InMemoryClientRepository {
    async fn save_client(&self, client: Client) -> AppResult<()> {
        let mut clients = self.clients.write().await;

        if clients.contains_key(&client.id()) {
            return Err(AppError::Conflict(format!(
                "client '{}' already exists",
                client.id()
            )));
        }

        clients.insert(client.id(), client);
        Ok(())
    }

    async fn find_client(&self, client_id: ClientId) -> AppResult<Option<Client>> {
        Ok(self.clients.read().await.get(&client_id).cloned())
    }

    async fn list_clients(&self) -> AppResult<Vec<Client>> {
        let clients = self.clients.read().await;

        let mut listed: Vec<Client> = clients.values().cloned().collect();
        listed.sort_by(|left, right| left.name().as_str().cmp(right.name().as_str()));

        Ok(listed)
    }
}

#[cfg(test)]
mod tests {
    use praxis_application::ClientRepository;
    use praxis_core::ClientId;
    use praxis_domain::{Client, EmailAddress};

    use super::InMemoryClientRepository;

    fn client(name: &str) -> Client {
        let email = EmailAddress::new("contact@client.example").unwrap_or_else(|_| unreachable!());
        Client::new(ClientId::new(), name, "Logistics", "A. Contact", email)
            .unwrap_or_else(|_| unreachable!())
    }

    #[tokio::test]
    async fn duplicate_client_id_conflicts() {
        let repository = InMemoryClientRepository::new();
        let stored = client("Northwind Logistics");

        assert!(repository.save_client(stored.clone()).await.is_ok());
        assert!(repository.save_client(stored).await.is_err());
    }

    #[tokio::test]
    async fn listing_orders_by_name() {
        let repository = InMemoryClientRepository::new();
        assert!(repository.save_client(client("Northwind Logistics")).await.is_ok());
        assert!(repository.save_client(client("Acme Industrial")).await.is_ok());

        let listed = repository.list_clients().await.unwrap_or_default();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].name().as_str(), "Acme Industrial");
    }
}
