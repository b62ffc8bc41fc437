use std::str::FromStr;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use praxis_application::{RecordAssignmentInput, RecordContractInput};
use praxis_core::{AssociateId, ProjectId};
use praxis_domain::{RevenueStatus, UserAccount};
use uuid::Uuid;

use crate::dto::{
    AssignmentResponse, ContractResponse, RecordAssignmentRequest, RecordContractRequest,
    RevenueSummaryResponse,
};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn project_revenue_handler(
    State(state): State<AppState>,
    Extension(account): Extension<UserAccount>,
    Path(project_id): Path<Uuid>,
) -> ApiResult<Json<RevenueSummaryResponse>> {
    let summary = state
        .revenue_service
        .project_summary(&account, ProjectId::from_uuid(project_id))
        .await?;

    Ok(Json(RevenueSummaryResponse::from(summary)))
}

pub async fn record_contract_handler(
    State(state): State<AppState>,
    Extension(account): Extension<UserAccount>,
    Path(project_id): Path<Uuid>,
    Json(payload): Json<RecordContractRequest>,
) -> ApiResult<Json<ContractResponse>> {
    let contract = state
        .revenue_service
        .record_contract(
            &account,
            ProjectId::from_uuid(project_id),
            RecordContractInput {
                contract_value: payload.contract_value,
                start_date: payload.start_date,
                end_date: payload.end_date,
                status: RevenueStatus::from_str(payload.status.as_str())?,
            },
        )
        .await?;

    Ok(Json(ContractResponse::from(contract)))
}

pub async fn list_assignments_handler(
    State(state): State<AppState>,
    Extension(account): Extension<UserAccount>,
    Path(project_id): Path<Uuid>,
) -> ApiResult<Json<Vec<AssignmentResponse>>> {
    let assignments = state
        .revenue_service
        .list_assignments(&account, ProjectId::from_uuid(project_id))
        .await?
        .into_iter()
        .map(AssignmentResponse::from)
        .collect();

    Ok(Json(assignments))
}

pub async fn record_assignment_handler(
    State(state): State<AppState>,
    Extension(account): Extension<UserAccount>,
    Path(project_id): Path<Uuid>,
    Json(payload): Json<RecordAssignmentRequest>,
) -> ApiResult<(StatusCode, Json<AssignmentResponse>)> {
    let assignment = state
        .revenue_service
        .record_assignment(
            &account,
            ProjectId::from_uuid(project_id),
            RecordAssignmentInput {
                associate_id: AssociateId::from_uuid(payload.associate_id),
                role_label: payload.role_label,
                hourly_rate: payload.hourly_rate,
                hours_per_day: payload.hours_per_day,
                start_date: payload.start_date,
                end_date: payload.end_date,
                initial_overhead_per_day: payload.initial_overhead_per_day,
                final_overhead_per_day: payload.final_overhead_per_day,
                ramp_days: payload.ramp_days,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AssignmentResponse::from(assignment)),
    ))
}
