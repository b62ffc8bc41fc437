//! Demo dataset for the in-memory stores.
//!
//! The source system ships with seeded accounts (one per role), clients,
//! projects, and staffing so the role-picker login has something to show.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use praxis_application::{
    AssociateRepository, ClientRepository, ProjectRepository, StaffingRepository, UserRepository,
};
use praxis_core::{
    AppError, AppResult, AssignmentId, AssociateId, ClientId, ProjectId, RevenueId, UserId,
};
use praxis_domain::{
    Associate, Client, EmailAddress, LifecycleStage, Project, ProjectAssignment, ProjectHealth,
    ProjectRevenue, RevenueStatus, Role, UserAccount,
};
use tracing::info;

fn date(year: i32, month: u32, day: u32) -> AppResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| AppError::Internal(format!("invalid seed date {year}-{month}-{day}")))
}

/// Installs the demo dataset into empty repositories.
#[allow(clippy::too_many_lines)]
pub async fn seed_demo_data(
    users: &dyn UserRepository,
    associates: &dyn AssociateRepository,
    clients: &dyn ClientRepository,
    projects: &dyn ProjectRepository,
    staffing: &dyn StaffingRepository,
) -> AppResult<()> {
    // Associates.
    let priya_id = AssociateId::new();
    let dana_id = AssociateId::new();
    let marcus_id = AssociateId::new();
    let elena_id = AssociateId::new();

    let roster = [
        Associate::new(
            priya_id,
            "Priya Raman",
            EmailAddress::new("priya.raman@praxis.example")?,
            "Engagement Lead",
            40.0,
        )?,
        Associate::new(
            dana_id,
            "Dana Reyes",
            EmailAddress::new("dana.reyes@praxis.example")?,
            "Analyst",
            40.0,
        )?,
        Associate::new(
            marcus_id,
            "Marcus Webb",
            EmailAddress::new("marcus.webb@praxis.example")?,
            "Senior Consultant",
            40.0,
        )?,
        Associate::new(
            elena_id,
            "Elena Castillo",
            EmailAddress::new("elena.castillo@praxis.example")?,
            "Consultant",
            32.0,
        )?,
    ];
    for associate in roster {
        associates.save_associate(associate).await?;
    }

    // One account per role for the demo picker.
    let accounts = [
        UserAccount::new(
            UserId::new(),
            "Victoria Ashford",
            EmailAddress::new("victoria.ashford@praxis.example")?,
            Role::Executive,
            None,
        )?,
        UserAccount::new(
            UserId::new(),
            "Owen Park",
            EmailAddress::new("owen.park@praxis.example")?,
            Role::Manager,
            None,
        )?,
        UserAccount::new(
            UserId::new(),
            "Priya Raman",
            EmailAddress::new("priya.raman@praxis.example")?,
            Role::EngagementLead,
            Some(priya_id),
        )?,
        UserAccount::new(
            UserId::new(),
            "Dana Reyes",
            EmailAddress::new("dana.reyes@praxis.example")?,
            Role::Associate,
            Some(dana_id),
        )?,
    ];
    for account in accounts {
        users.save_account(account).await?;
    }

    // Clients.
    let acme_id = ClientId::new();
    let northwind_id = ClientId::new();
    let helios_id = ClientId::new();

    let book = [
        Client::new(
            acme_id,
            "Acme Industrial",
            "Manufacturing",
            "R. Vale",
            EmailAddress::new("r.vale@acme.example")?,
        )?,
        Client::new(
            northwind_id,
            "Northwind Logistics",
            "Logistics",
            "S. Okafor",
            EmailAddress::new("s.okafor@northwind.example")?,
        )?,
        Client::new(
            helios_id,
            "Helios Energy",
            "Energy",
            "J. Lindqvist",
            EmailAddress::new("j.lindqvist@helios.example")?,
        )?,
    ];
    for client in book {
        clients.save_client(client).await?;
    }

    // Projects across the lifecycle.
    let cost_takeout_id = ProjectId::new();
    let network_redesign_id = ProjectId::new();
    let market_entry_id = ProjectId::new();
    let procurement_id = ProjectId::new();

    let portfolio = [
        Project::new(
            cost_takeout_id,
            acme_id,
            "Acme Cost Takeout",
            LifecycleStage::Execution,
            ProjectHealth::OnTrack,
            priya_id,
            BTreeSet::from([dana_id, marcus_id]),
        )?,
        Project::new(
            network_redesign_id,
            northwind_id,
            "Northwind Network Redesign",
            LifecycleStage::Onboarding,
            ProjectHealth::AtRisk,
            marcus_id,
            BTreeSet::from([elena_id]),
        )?,
        Project::new(
            market_entry_id,
            helios_id,
            "Helios Market Entry",
            LifecycleStage::NewBusiness,
            ProjectHealth::OnTrack,
            priya_id,
            BTreeSet::new(),
        )?,
        Project::new(
            procurement_id,
            acme_id,
            "Acme Procurement Diagnostic",
            LifecycleStage::Closure,
            ProjectHealth::Critical,
            marcus_id,
            BTreeSet::from([dana_id]),
        )?,
    ];
    for project in portfolio {
        projects.save_project(project).await?;
    }

    // Contracts.
    staffing
        .save_revenue(ProjectRevenue::new(
            RevenueId::new(),
            cost_takeout_id,
            120_000.0,
            date(2025, 1, 6)?,
            date(2025, 6, 27)?,
            RevenueStatus::Active,
        ))
        .await?;
    staffing
        .save_revenue(ProjectRevenue::new(
            RevenueId::new(),
            procurement_id,
            45_000.0,
            date(2024, 9, 2)?,
            date(2024, 12, 20)?,
            RevenueStatus::Closed,
        ))
        .await?;

    // Staffing with ramped overhead.
    let lines = [
        ProjectAssignment::new(
            AssignmentId::new(),
            cost_takeout_id,
            dana_id,
            "Analyst",
            95.0,
            8.0,
            date(2025, 1, 6)?,
            date(2025, 3, 28)?,
            180.0,
            60.0,
            15.0,
        )?,
        ProjectAssignment::new(
            AssignmentId::new(),
            cost_takeout_id,
            marcus_id,
            "Workstream Lead",
            140.0,
            6.0,
            date(2025, 1, 6)?,
            date(2025, 5, 30)?,
            150.0,
            50.0,
            10.0,
        )?,
        ProjectAssignment::new(
            AssignmentId::new(),
            network_redesign_id,
            elena_id,
            "Consultant",
            110.0,
            8.0,
            date(2025, 2, 3)?,
            date(2025, 4, 25)?,
            200.0,
            50.0,
            20.0,
        )?,
        ProjectAssignment::new(
            AssignmentId::new(),
            procurement_id,
            dana_id,
            "Analyst",
            90.0,
            8.0,
            date(2024, 9, 2)?,
            date(2024, 12, 20)?,
            160.0,
            55.0,
            12.0,
        )?,
    ];
    let assignment_count = lines.len();
    for assignment in lines {
        staffing.save_assignment(assignment).await?;
    }

    info!(
        accounts = 4,
        associates = 4,
        clients = 3,
        projects = 4,
        assignments = assignment_count,
        contracts = 2,
        "demo dataset seeded"
    );

    Ok(())
}
