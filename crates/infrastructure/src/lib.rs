//! In-memory adapters for the application ports.
//!
//! The dashboard keeps all state in memory; these repositories are the
//! production implementations, not test doubles.

#![forbid(unsafe_code)]

mod in_memory_associate_repository;
mod in_memory_audit_log;
mod in_memory_client_repository;
mod in_memory_project_repository;
mod in_memory_staffing_repository;
mod in_memory_user_repository;
mod in_memory_workstream_repository;
mod seed;

pub use in_memory_associate_repository::InMemoryAssociateRepository;
pub use in_memory_audit_log::InMemoryAuditLog;
pub use in_memory_client_repository::InMemoryClientRepository;
pub use in_memory_project_repository::InMemoryProjectRepository;
pub use in_memory_staffing_repository::InMemoryStaffingRepository;
pub use in_memory_user_repository::InMemoryUserRepository;
pub use in_memory_workstream_repository::InMemoryWorkstreamRepository;
pub use seed::seed_demo_data;
