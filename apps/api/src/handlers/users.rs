use std::str::FromStr;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use praxis_application::CreateAccountInput;
use praxis_core::{AssociateId, UserId};
use praxis_domain::{Role, UserAccount};
use uuid::Uuid;

use crate::dto::{AccountResponse, ChangeRoleRequest, CreateAccountRequest};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_users_handler(
    State(state): State<AppState>,
    Extension(account): Extension<UserAccount>,
) -> ApiResult<Json<Vec<AccountResponse>>> {
    let accounts = state
        .directory_service
        .list_accounts(&account)
        .await?
        .into_iter()
        .map(AccountResponse::from)
        .collect();

    Ok(Json(accounts))
}

pub async fn create_user_handler(
    State(state): State<AppState>,
    Extension(account): Extension<UserAccount>,
    Json(payload): Json<CreateAccountRequest>,
) -> ApiResult<(StatusCode, Json<AccountResponse>)> {
    let created = state
        .directory_service
        .create_account(
            &account,
            CreateAccountInput {
                display_name: payload.display_name,
                email: payload.email,
                role: Role::from_str(payload.role.as_str())?,
                associate_id: payload.associate_id.map(AssociateId::from_uuid),
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(AccountResponse::from(created))))
}

pub async fn change_role_handler(
    State(state): State<AppState>,
    Extension(account): Extension<UserAccount>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<ChangeRoleRequest>,
) -> ApiResult<Json<AccountResponse>> {
    let changed = state
        .directory_service
        .change_role(
            &account,
            UserId::from_uuid(user_id),
            Role::from_str(payload.role.as_str())?,
        )
        .await?;

    Ok(Json(AccountResponse::from(changed)))
}

pub async fn deactivate_user_handler(
    State(state): State<AppState>,
    Extension(account): Extension<UserAccount>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<AccountResponse>> {
    let deactivated = state
        .directory_service
        .deactivate_account(&account, UserId::from_uuid(user_id))
        .await?;

    Ok(Json(AccountResponse::from(deactivated)))
}
