use std::collections::HashMap;

use async_trait::async_trait;
use praxis_application::WorkstreamRepository;
use praxis_core::{AppResult, CostingRequestId, DocumentId, NoteId, ProjectId};
use praxis_domain::{CostingRequest, ProjectDocument, ProjectNote};
use tokio::sync::RwLock;

/// In-memory store for notes, document records, and costing requests.
#[derive(Debug, Default)]
pub struct InMemoryWorkstreamRepository {
    notes: RwLock<HashMap<NoteId, ProjectNote>>,
    documents: RwLock<HashMap<DocumentId, ProjectDocument>>,
    costing_requests: RwLock<HashMap<CostingRequestId, CostingRequest>>,
}

impl InMemoryWorkstreamRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            notes: RwLock::new(HashMap::new()),
            documents: RwLock::new(HashMap::new()),
            costing_requests: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl WorkstreamRepository for InMemoryWorkstreamRepository {
    async fn save_note(&self, note: ProjectNote) -> AppResult<()> {
        self.notes.write().await.insert(note.id(), note);
        Ok(())
    }

    async fn list_notes_for_project(&self, project_id: ProjectId) -> AppResult<Vec<ProjectNote>> {
        let notes = self.notes.read().await;

        let mut listed: Vec<ProjectNote> = notes
            .values()
            .filter(|note| note.project_id() == project_id)
            .cloned()
            .collect();
        listed.sort_by(|left, right| {
            left.created_at()
                .cmp(&right.created_at())
                .then_with(|| left.id().cmp(&right.id()))
        });

        Ok(listed)
    }

    async fn save_document(&self, document: ProjectDocument) -> AppResult<()> {
        self.documents.write().await.insert(document.id(), document);
        Ok(())
    }

    async fn list_documents_for_project(
        &self,
        project_id: ProjectId,
    ) -> AppResult<Vec<ProjectDocument>> {
        let documents = self.documents.read().await;

        let mut listed: Vec<ProjectDocument> = documents
            .values()
            .filter(|document| document.project_id() == project_id)
            .cloned()
            .collect();
        listed.sort_by(|left, right| {
            left.uploaded_at()
                .cmp(&right.uploaded_at())
                .then_with(|| left.id().cmp(&right.id()))
        });

        Ok(listed)
    }

    async fn save_costing_request(&self, request: CostingRequest) -> AppResult<()> {
        self.costing_requests
            .write()
            .await
            .insert(request.id(), request);
        Ok(())
    }

    async fn list_costing_requests_for_project(
        &self,
        project_id: ProjectId,
    ) -> AppResult<Vec<CostingRequest>> {
        let costing_requests = self.costing_requests.read().await;

        let mut listed: Vec<CostingRequest> = costing_requests
            .values()
            .filter(|request| request.project_id() == project_id)
            .cloned()
            .collect();
        listed.sort_by(|left, right| {
            left.created_at()
                .cmp(&right.created_at())
                .then_with(|| left.id().cmp(&right.id()))
        });

        Ok(listed)
    }
}
