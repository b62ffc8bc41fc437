use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use praxis_core::{AppError, UserId};
use uuid::Uuid;

use crate::error::ApiResult;
use crate::state::AppState;

/// Header carrying the acting account id.
///
/// Stands in for the source system's role-picker login: the client picks
/// an account from `/auth/demo-users` and sends its id on every request.
pub const IDENTITY_HEADER: &str = "x-user-id";

pub async fn require_identity(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let header = request
        .headers()
        .get(IDENTITY_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized(format!("{IDENTITY_HEADER} header is required")))?;

    let user_id = Uuid::parse_str(header)
        .map(UserId::from_uuid)
        .map_err(|_| AppError::Unauthorized(format!("invalid account id '{header}'")))?;

    let account = state.directory_service.resolve_identity(user_id).await?;
    request.extensions_mut().insert(account);
    Ok(next.run(request).await)
}
