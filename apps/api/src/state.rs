use praxis_application::{
    ClientService, DashboardService, DirectoryService, ProjectService, RevenueService,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub directory_service: DirectoryService,
    pub client_service: ClientService,
    pub project_service: ProjectService,
    pub revenue_service: RevenueService,
    pub dashboard_service: DashboardService,
}
