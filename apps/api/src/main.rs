//! Praxis API composition root.

#![forbid(unsafe_code)]

mod dto;
mod error;
mod handlers;
mod middleware;
mod state;

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;

use axum::Router;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, Method};
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post, put};
use praxis_application::{
    AuthorizationService, ClientService, DashboardService, DirectoryService, ProjectService,
    RevenueService,
};
use praxis_core::AppError;
use praxis_infrastructure::{
    InMemoryAssociateRepository, InMemoryAuditLog, InMemoryClientRepository,
    InMemoryProjectRepository, InMemoryStaffingRepository, InMemoryUserRepository,
    InMemoryWorkstreamRepository, seed_demo_data,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let api_host = env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
    let api_port = env::var("API_PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(3001);
    let frontend_url =
        env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned());

    // In-memory stores; the dashboard holds all state in process.
    let user_repository = Arc::new(InMemoryUserRepository::new());
    let associate_repository = Arc::new(InMemoryAssociateRepository::new());
    let client_repository = Arc::new(InMemoryClientRepository::new());
    let project_repository = Arc::new(InMemoryProjectRepository::new());
    let staffing_repository = Arc::new(InMemoryStaffingRepository::new());
    let workstream_repository = Arc::new(InMemoryWorkstreamRepository::new());
    let audit_log = Arc::new(InMemoryAuditLog::new());

    seed_demo_data(
        user_repository.as_ref(),
        associate_repository.as_ref(),
        client_repository.as_ref(),
        project_repository.as_ref(),
        staffing_repository.as_ref(),
    )
    .await?;

    let authorization_service = AuthorizationService::new(project_repository.clone());
    let app_state = AppState {
        directory_service: DirectoryService::new(
            authorization_service.clone(),
            user_repository,
            associate_repository,
            audit_log.clone(),
        ),
        client_service: ClientService::new(
            authorization_service.clone(),
            client_repository.clone(),
            audit_log.clone(),
        ),
        project_service: ProjectService::new(
            authorization_service.clone(),
            project_repository.clone(),
            workstream_repository,
            audit_log.clone(),
        ),
        revenue_service: RevenueService::new(
            authorization_service.clone(),
            staffing_repository,
            audit_log,
        ),
        dashboard_service: DashboardService::new(
            authorization_service,
            project_repository,
            client_repository,
        ),
    };

    let protected_routes = Router::new()
        .route("/auth/me", get(handlers::auth::me_handler))
        .route("/api/dashboard", get(handlers::dashboard::dashboard_handler))
        .route(
            "/api/clients",
            get(handlers::clients::list_clients_handler)
                .post(handlers::clients::create_client_handler),
        )
        .route(
            "/api/projects",
            get(handlers::projects::list_projects_handler)
                .post(handlers::projects::create_project_handler),
        )
        .route(
            "/api/projects/{project_id}",
            get(handlers::projects::get_project_handler)
                .put(handlers::projects::update_project_handler)
                .delete(handlers::projects::delete_project_handler),
        )
        .route(
            "/api/projects/{project_id}/stage",
            put(handlers::projects::change_stage_handler),
        )
        .route(
            "/api/projects/{project_id}/notes",
            get(handlers::projects::list_notes_handler)
                .post(handlers::projects::create_note_handler),
        )
        .route(
            "/api/projects/{project_id}/documents",
            get(handlers::projects::list_documents_handler)
                .post(handlers::projects::record_document_handler),
        )
        .route(
            "/api/projects/{project_id}/costing-requests",
            get(handlers::projects::list_costing_requests_handler)
                .post(handlers::projects::raise_costing_request_handler),
        )
        .route(
            "/api/projects/{project_id}/revenue",
            get(handlers::revenue::project_revenue_handler)
                .put(handlers::revenue::record_contract_handler),
        )
        .route(
            "/api/projects/{project_id}/assignments",
            get(handlers::revenue::list_assignments_handler)
                .post(handlers::revenue::record_assignment_handler),
        )
        .route(
            "/api/associates",
            get(handlers::associates::list_associates_handler)
                .post(handlers::associates::create_associate_handler),
        )
        .route(
            "/api/associates/{associate_id}/revenue",
            get(handlers::associates::associate_revenue_handler),
        )
        .route(
            "/api/users",
            get(handlers::users::list_users_handler).post(handlers::users::create_user_handler),
        )
        .route(
            "/api/users/{user_id}/role",
            put(handlers::users::change_role_handler),
        )
        .route(
            "/api/users/{user_id}/deactivate",
            post(handlers::users::deactivate_user_handler),
        )
        .route_layer(from_fn_with_state(
            app_state.clone(),
            middleware::require_identity,
        ));

    let cors_layer = CorsLayer::new()
        .allow_origin(
            HeaderValue::from_str(&frontend_url)
                .map_err(|error| AppError::Internal(format!("invalid FRONTEND_URL: {error}")))?,
        )
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static(middleware::IDENTITY_HEADER)]);

    let app = Router::new()
        .route("/health", get(handlers::health::health_handler))
        .route("/auth/demo-users", get(handlers::auth::demo_users_handler))
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(app_state);

    let host = IpAddr::from_str(&api_host)
        .map_err(|error| AppError::Internal(format!("invalid API_HOST '{api_host}': {error}")))?;
    let address = SocketAddr::from((host, api_port));

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(%address, "praxis-api listening");

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("api server error: {error}")))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}
