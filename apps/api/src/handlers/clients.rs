use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use praxis_application::CreateClientInput;
use praxis_domain::UserAccount;

use crate::dto::{ClientResponse, CreateClientRequest};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_clients_handler(
    State(state): State<AppState>,
    Extension(account): Extension<UserAccount>,
) -> ApiResult<Json<Vec<ClientResponse>>> {
    let clients = state
        .client_service
        .list_clients(&account)
        .await?
        .into_iter()
        .map(ClientResponse::from)
        .collect();

    Ok(Json(clients))
}

pub async fn create_client_handler(
    State(state): State<AppState>,
    Extension(account): Extension<UserAccount>,
    Json(payload): Json<CreateClientRequest>,
) -> ApiResult<(StatusCode, Json<ClientResponse>)> {
    let client = state
        .client_service
        .create_client(
            &account,
            CreateClientInput {
                name: payload.name,
                industry: payload.industry,
                contact_name: payload.contact_name,
                contact_email: payload.contact_email,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ClientResponse::from(client))))
}
