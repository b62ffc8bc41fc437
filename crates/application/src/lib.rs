//! Application services and ports.

#![forbid(unsafe_code)]

mod authorization_service;
mod client_service;
mod dashboard_service;
mod directory_service;
mod ports;
mod project_service;
mod revenue_service;

pub use authorization_service::AuthorizationService;
pub use client_service::{ClientService, CreateClientInput};
pub use dashboard_service::{DashboardService, PortfolioSnapshot, StageCount};
pub use directory_service::{CreateAccountInput, CreateAssociateInput, DirectoryService};
pub use ports::{
    AssociateRepository, AuditEvent, AuditRepository, ClientRepository, ProjectRepository,
    StaffingRepository, UserRepository, WorkstreamRepository,
};
pub use project_service::{
    CreateProjectInput, ProjectService, RecordDocumentInput, UpdateProjectInput,
};
pub use revenue_service::{RecordAssignmentInput, RecordContractInput, RevenueService};
