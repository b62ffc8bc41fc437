use std::collections::BTreeSet;
use std::str::FromStr;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use praxis_application::{CreateProjectInput, RecordDocumentInput, UpdateProjectInput};
use praxis_core::{AssociateId, ClientId, ProjectId};
use praxis_domain::{DocumentKind, LifecycleStage, ProjectHealth, UserAccount};
use uuid::Uuid;

use crate::dto::{
    ChangeStageRequest, CostingRequestResponse, CreateNoteRequest, CreateProjectRequest,
    DocumentResponse, NoteResponse, ProjectResponse, RaiseCostingRequest, RecordDocumentRequest,
    UpdateProjectRequest,
};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_projects_handler(
    State(state): State<AppState>,
    Extension(account): Extension<UserAccount>,
) -> ApiResult<Json<Vec<ProjectResponse>>> {
    let projects = state
        .project_service
        .list_visible_projects(&account)
        .await?
        .into_iter()
        .map(ProjectResponse::from)
        .collect();

    Ok(Json(projects))
}

pub async fn create_project_handler(
    State(state): State<AppState>,
    Extension(account): Extension<UserAccount>,
    Json(payload): Json<CreateProjectRequest>,
) -> ApiResult<(StatusCode, Json<ProjectResponse>)> {
    let project = state
        .project_service
        .create_project(
            &account,
            CreateProjectInput {
                client_id: ClientId::from_uuid(payload.client_id),
                name: payload.name,
                stage: LifecycleStage::from_str(payload.stage.as_str())?,
                health: ProjectHealth::from_str(payload.health.as_str())?,
                owner_id: AssociateId::from_uuid(payload.owner_id),
                assigned_associates: payload
                    .assigned_associates
                    .into_iter()
                    .map(AssociateId::from_uuid)
                    .collect::<BTreeSet<_>>(),
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ProjectResponse::from(project))))
}

pub async fn get_project_handler(
    State(state): State<AppState>,
    Extension(account): Extension<UserAccount>,
    Path(project_id): Path<Uuid>,
) -> ApiResult<Json<ProjectResponse>> {
    let project = state
        .project_service
        .get_project(&account, ProjectId::from_uuid(project_id))
        .await?;

    Ok(Json(ProjectResponse::from(project)))
}

pub async fn update_project_handler(
    State(state): State<AppState>,
    Extension(account): Extension<UserAccount>,
    Path(project_id): Path<Uuid>,
    Json(payload): Json<UpdateProjectRequest>,
) -> ApiResult<Json<ProjectResponse>> {
    let health = payload
        .health
        .map(|value| ProjectHealth::from_str(value.as_str()))
        .transpose()?;

    let project = state
        .project_service
        .update_project(
            &account,
            ProjectId::from_uuid(project_id),
            UpdateProjectInput {
                name: payload.name,
                health,
                owner_id: payload.owner_id.map(AssociateId::from_uuid),
                assigned_associates: payload.assigned_associates.map(|assigned| {
                    assigned
                        .into_iter()
                        .map(AssociateId::from_uuid)
                        .collect::<BTreeSet<_>>()
                }),
            },
        )
        .await?;

    Ok(Json(ProjectResponse::from(project)))
}

pub async fn change_stage_handler(
    State(state): State<AppState>,
    Extension(account): Extension<UserAccount>,
    Path(project_id): Path<Uuid>,
    Json(payload): Json<ChangeStageRequest>,
) -> ApiResult<Json<ProjectResponse>> {
    let project = state
        .project_service
        .change_stage(
            &account,
            ProjectId::from_uuid(project_id),
            LifecycleStage::from_str(payload.stage.as_str())?,
        )
        .await?;

    Ok(Json(ProjectResponse::from(project)))
}

pub async fn delete_project_handler(
    State(state): State<AppState>,
    Extension(account): Extension<UserAccount>,
    Path(project_id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state
        .project_service
        .delete_project(&account, ProjectId::from_uuid(project_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_notes_handler(
    State(state): State<AppState>,
    Extension(account): Extension<UserAccount>,
    Path(project_id): Path<Uuid>,
) -> ApiResult<Json<Vec<NoteResponse>>> {
    let notes = state
        .project_service
        .list_notes(&account, ProjectId::from_uuid(project_id))
        .await?
        .into_iter()
        .map(NoteResponse::from)
        .collect();

    Ok(Json(notes))
}

pub async fn create_note_handler(
    State(state): State<AppState>,
    Extension(account): Extension<UserAccount>,
    Path(project_id): Path<Uuid>,
    Json(payload): Json<CreateNoteRequest>,
) -> ApiResult<(StatusCode, Json<NoteResponse>)> {
    let note = state
        .project_service
        .add_note(&account, ProjectId::from_uuid(project_id), payload.body)
        .await?;

    Ok((StatusCode::CREATED, Json(NoteResponse::from(note))))
}

pub async fn list_documents_handler(
    State(state): State<AppState>,
    Extension(account): Extension<UserAccount>,
    Path(project_id): Path<Uuid>,
) -> ApiResult<Json<Vec<DocumentResponse>>> {
    let documents = state
        .project_service
        .list_documents(&account, ProjectId::from_uuid(project_id))
        .await?
        .into_iter()
        .map(DocumentResponse::from)
        .collect();

    Ok(Json(documents))
}

pub async fn record_document_handler(
    State(state): State<AppState>,
    Extension(account): Extension<UserAccount>,
    Path(project_id): Path<Uuid>,
    Json(payload): Json<RecordDocumentRequest>,
) -> ApiResult<(StatusCode, Json<DocumentResponse>)> {
    let document = state
        .project_service
        .record_document(
            &account,
            ProjectId::from_uuid(project_id),
            RecordDocumentInput {
                kind: DocumentKind::from_str(payload.kind.as_str())?,
                file_name: payload.file_name,
                amount: payload.amount,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(DocumentResponse::from(document))))
}

pub async fn list_costing_requests_handler(
    State(state): State<AppState>,
    Extension(account): Extension<UserAccount>,
    Path(project_id): Path<Uuid>,
) -> ApiResult<Json<Vec<CostingRequestResponse>>> {
    let requests = state
        .project_service
        .list_costing_requests(&account, ProjectId::from_uuid(project_id))
        .await?
        .into_iter()
        .map(CostingRequestResponse::from)
        .collect();

    Ok(Json(requests))
}

pub async fn raise_costing_request_handler(
    State(state): State<AppState>,
    Extension(account): Extension<UserAccount>,
    Path(project_id): Path<Uuid>,
    Json(payload): Json<RaiseCostingRequest>,
) -> ApiResult<(StatusCode, Json<CostingRequestResponse>)> {
    let request = state
        .project_service
        .raise_costing_request(
            &account,
            ProjectId::from_uuid(project_id),
            payload.description,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CostingRequestResponse::from(request)),
    ))
}
