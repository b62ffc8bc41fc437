use axum::extract::State;
use axum::{Extension, Json};
use praxis_domain::UserAccount;

use crate::dto::DashboardResponse;
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn dashboard_handler(
    State(state): State<AppState>,
    Extension(account): Extension<UserAccount>,
) -> ApiResult<Json<DashboardResponse>> {
    let snapshot = state
        .dashboard_service
        .portfolio_snapshot(&account)
        .await?;

    Ok(Json(DashboardResponse::from(snapshot)))
}
