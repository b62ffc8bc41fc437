use async_trait::async_trait;
use praxis_application::{AuditEvent, AuditRepository};
use praxis_core::AppResult;
use tokio::sync::RwLock;

/// Append-only in-memory audit log.
#[derive(Debug, Default)]
pub struct InMemoryAuditLog {
    events: RwLock<Vec<AuditEvent>>,
}

impl InMemoryAuditLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: RwLock::new(Vec::new()),
        }
    }

    /// Returns a copy of all appended events, oldest first.
    pub async fn events(&self) -> Vec<AuditEvent> {
        self.events.read().await.clone()
    }
}

#[async_trait]
impl AuditRepository for InMemoryAuditLog {
    async fn append_event(&self, event: AuditEvent) -> AppResult<()> {
        self.events.write().await.push(event);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use praxis_application::{AuditEvent, AuditRepository};
    use praxis_core::UserId;
    use praxis_domain::AuditAction;

    use super::InMemoryAuditLog;

    #[tokio::test]
    async fn events_are_kept_in_append_order() {
        let log = InMemoryAuditLog::new();
        let actor = UserId::new();

        for action in [AuditAction::ProjectCreated, AuditAction::ProjectStageChanged] {
            let appended = log
                .append_event(AuditEvent {
                    actor,
                    action,
                    resource_type: "project".to_owned(),
                    resource_id: "p-1".to_owned(),
                    detail: None,
                })
                .await;
            assert!(appended.is_ok());
        }

        let events = log.events().await;
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].action, AuditAction::ProjectCreated);
    }
}
