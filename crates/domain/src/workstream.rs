//! Records attached to a project as work progresses: document uploads,
//! notes, and costing requests.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use praxis_core::{
    AppError, AppResult, CostingRequestId, DocumentId, NonEmptyString, NoteId, ProjectId, UserId,
};
use serde::{Deserialize, Serialize};

/// Kind of uploaded commercial document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Quote sent to the client.
    Quote,
    /// Invoice issued to the client.
    Invoice,
}

impl DocumentKind {
    /// Returns a stable storage value for this kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Quote => "quote",
            Self::Invoice => "invoice",
        }
    }
}

impl FromStr for DocumentKind {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "quote" => Ok(Self::Quote),
            "invoice" => Ok(Self::Invoice),
            _ => Err(AppError::Validation(format!(
                "unknown document kind '{value}'"
            ))),
        }
    }
}

/// Metadata record of an uploaded quote or invoice.
///
/// Storage of the file itself is an external concern; the dashboard keeps
/// only this record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDocument {
    id: DocumentId,
    project_id: ProjectId,
    kind: DocumentKind,
    file_name: NonEmptyString,
    amount: Option<f64>,
    uploaded_by: UserId,
    uploaded_at: DateTime<Utc>,
}

impl ProjectDocument {
    /// Creates a document record.
    pub fn new(
        id: DocumentId,
        project_id: ProjectId,
        kind: DocumentKind,
        file_name: impl Into<String>,
        amount: Option<f64>,
        uploaded_by: UserId,
        uploaded_at: DateTime<Utc>,
    ) -> AppResult<Self> {
        Ok(Self {
            id,
            project_id,
            kind,
            file_name: NonEmptyString::new(file_name)?,
            amount,
            uploaded_by,
            uploaded_at,
        })
    }

    /// Returns the record identifier.
    #[must_use]
    pub fn id(&self) -> DocumentId {
        self.id
    }

    /// Returns the project the document belongs to.
    #[must_use]
    pub fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the document kind.
    #[must_use]
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// Returns the uploaded file name.
    #[must_use]
    pub fn file_name(&self) -> &NonEmptyString {
        &self.file_name
    }

    /// Returns the document amount, if one was captured.
    #[must_use]
    pub fn amount(&self) -> Option<f64> {
        self.amount
    }

    /// Returns who recorded the upload.
    #[must_use]
    pub fn uploaded_by(&self) -> UserId {
        self.uploaded_by
    }

    /// Returns when the upload was recorded.
    #[must_use]
    pub fn uploaded_at(&self) -> DateTime<Utc> {
        self.uploaded_at
    }
}

/// A free-text note on a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectNote {
    id: NoteId,
    project_id: ProjectId,
    author: UserId,
    body: NonEmptyString,
    created_at: DateTime<Utc>,
}

impl ProjectNote {
    /// Creates a note.
    pub fn new(
        id: NoteId,
        project_id: ProjectId,
        author: UserId,
        body: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> AppResult<Self> {
        Ok(Self {
            id,
            project_id,
            author,
            body: NonEmptyString::new(body)?,
            created_at,
        })
    }

    /// Returns the note identifier.
    #[must_use]
    pub fn id(&self) -> NoteId {
        self.id
    }

    /// Returns the project the note belongs to.
    #[must_use]
    pub fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the note author.
    #[must_use]
    pub fn author(&self) -> UserId {
        self.author
    }

    /// Returns the note body.
    #[must_use]
    pub fn body(&self) -> &NonEmptyString {
        &self.body
    }

    /// Returns when the note was written.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Progress status of a costing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostingStatus {
    /// Raised, not yet picked up.
    Pending,
    /// Being worked.
    InProgress,
    /// Done.
    Completed,
}

impl CostingStatus {
    /// Returns a stable storage value for this status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

impl FromStr for CostingStatus {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(AppError::Validation(format!(
                "unknown costing status '{value}'"
            ))),
        }
    }
}

/// A request for a costing exercise on a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostingRequest {
    id: CostingRequestId,
    project_id: ProjectId,
    requested_by: UserId,
    description: NonEmptyString,
    status: CostingStatus,
    created_at: DateTime<Utc>,
}

impl CostingRequest {
    /// Creates a pending costing request.
    pub fn new(
        id: CostingRequestId,
        project_id: ProjectId,
        requested_by: UserId,
        description: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> AppResult<Self> {
        Ok(Self {
            id,
            project_id,
            requested_by,
            description: NonEmptyString::new(description)?,
            status: CostingStatus::Pending,
            created_at,
        })
    }

    /// Returns the request identifier.
    #[must_use]
    pub fn id(&self) -> CostingRequestId {
        self.id
    }

    /// Returns the project the request is for.
    #[must_use]
    pub fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns who raised the request.
    #[must_use]
    pub fn requested_by(&self) -> UserId {
        self.requested_by
    }

    /// Returns the request description.
    #[must_use]
    pub fn description(&self) -> &NonEmptyString {
        &self.description
    }

    /// Returns the progress status.
    #[must_use]
    pub fn status(&self) -> CostingStatus {
        self.status
    }

    /// Returns when the request was raised.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Moves the request to another status.
    pub fn change_status(&mut self, status: CostingStatus) {
        self.status = status;
    }
}
