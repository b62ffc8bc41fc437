use axum::extract::State;
use axum::{Extension, Json};
use praxis_domain::UserAccount;

use crate::dto::AccountResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// Lists the seeded accounts the demo role picker can sign in as.
pub async fn demo_users_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<AccountResponse>>> {
    let accounts = state
        .directory_service
        .demo_directory()
        .await?
        .into_iter()
        .map(AccountResponse::from)
        .collect();

    Ok(Json(accounts))
}

pub async fn me_handler(Extension(account): Extension<UserAccount>) -> Json<AccountResponse> {
    Json(AccountResponse::from(account))
}
