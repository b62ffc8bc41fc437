use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use praxis_application::CreateAssociateInput;
use praxis_core::AssociateId;
use praxis_domain::UserAccount;
use uuid::Uuid;

use crate::dto::{AssociateResponse, AssociateSummaryResponse, CreateAssociateRequest};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_associates_handler(
    State(state): State<AppState>,
    Extension(account): Extension<UserAccount>,
) -> ApiResult<Json<Vec<AssociateResponse>>> {
    let associates = state
        .directory_service
        .list_associates(&account)
        .await?
        .into_iter()
        .map(AssociateResponse::from)
        .collect();

    Ok(Json(associates))
}

pub async fn create_associate_handler(
    State(state): State<AppState>,
    Extension(account): Extension<UserAccount>,
    Json(payload): Json<CreateAssociateRequest>,
) -> ApiResult<(StatusCode, Json<AssociateResponse>)> {
    let associate = state
        .directory_service
        .create_associate(
            &account,
            CreateAssociateInput {
                name: payload.name,
                email: payload.email,
                job_title: payload.job_title,
                weekly_capacity_hours: payload.weekly_capacity_hours,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AssociateResponse::from(associate)),
    ))
}

pub async fn associate_revenue_handler(
    State(state): State<AppState>,
    Extension(account): Extension<UserAccount>,
    Path(associate_id): Path<Uuid>,
) -> ApiResult<Json<AssociateSummaryResponse>> {
    let summary = state
        .revenue_service
        .associate_summary(&account, AssociateId::from_uuid(associate_id))
        .await?;

    Ok(Json(AssociateSummaryResponse::from(summary)))
}
