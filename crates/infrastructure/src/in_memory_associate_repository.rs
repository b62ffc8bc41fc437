use std::collections::HashMap;

use async_trait::async_trait;
use praxis_application::AssociateRepository;
use praxis_core::{AppError, AppResult, AssociateId};
use praxis_domain::Associate;
use tokio::sync::RwLock;

/// In-memory associate repository.
#[derive(Debug, Default)]
pub struct InMemoryAssociateRepository {
    associates: RwLock<HashMap<AssociateId, Associate>>,
}

impl InMemoryAssociateRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            associates: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl AssociateRepository for InMemoryAssociateRepository {
    async fn save_associate(&self, associate: Associate) -> AppResult<()> {
        let mut associates = self.associates.write().await;

        if associates.contains_key(&associate.id()) {
            return Err(AppError::Conflict(format!(
                "associate '{}' already exists",
                associate.id()
            )));
        }

        associates.insert(associate.id(), associate);
        Ok(())
    }

    async fn find_associate(&self, associate_id: AssociateId) -> AppResult<Option<Associate>> {
        Ok(self.associates.read().await.get(&associate_id).cloned())
    }

    async fn list_associates(&self) -> AppResult<Vec<Associate>> {
        let associates = self.associates.read().await;

        let mut listed: Vec<Associate> = associates.values().cloned().collect();
        listed.sort_by(|left, right| left.name().as_str().cmp(right.name().as_str()));

        Ok(listed)
    }
}

#[cfg(test)]
mod tests {
    use praxis_application::AssociateRepository;
    use praxis_core::AssociateId;
    use praxis_domain::{Associate, EmailAddress};

    use super::InMemoryAssociateRepository;

    fn associate(name: &str) -> Associate {
        let email = EmailAddress::new("staff@firm.example").unwrap_or_else(|_| unreachable!());
        Associate::new(AssociateId::new(), name, email, "Consultant", 40.0)
            .unwrap_or_else(|_| unreachable!())
    }

    #[tokio::test]
    async fn save_and_find_associate() {
        let repository = InMemoryAssociateRepository::new();
        let stored = associate("Dana Reyes");

        assert!(repository.save_associate(stored.clone()).await.is_ok());

        let found = repository.find_associate(stored.id()).await;
        assert!(found.is_ok());
        assert_eq!(found.unwrap_or_default(), Some(stored));
    }

    #[tokio::test]
    async fn listing_orders_by_name() {
        let repository = InMemoryAssociateRepository::new();
        assert!(repository.save_associate(associate("Priya Raman")).await.is_ok());
        assert!(repository.save_associate(associate("Dana Reyes")).await.is_ok());

        let listed = repository.list_associates().await.unwrap_or_default();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].name().as_str(), "Dana Reyes");
    }
}
