use std::collections::HashMap;

use async_trait::async_trait;
use praxis_application::StaffingRepository;
use praxis_core::{AppResult, AssignmentId, AssociateId, ProjectId};
use praxis_domain::{ProjectAssignment, ProjectRevenue};
use tokio::sync::RwLock;

/// In-memory store for staffing assignments and contract records.
///
/// Contract records are keyed by project: recording a contract for a
/// project replaces any earlier record, keeping the 1:1 relation.
#[derive(Debug, Default)]
pub struct InMemoryStaffingRepository {
    assignments: RwLock<HashMap<AssignmentId, ProjectAssignment>>,
    revenues: RwLock<HashMap<ProjectId, ProjectRevenue>>,
}

impl InMemoryStaffingRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            assignments: RwLock::new(HashMap::new()),
            revenues: RwLock::new(HashMap::new()),
        }
    }
}

fn sort_assignments(listed: &mut [ProjectAssignment]) {
    listed.sort_by(|left, right| {
        left.start_date()
            .cmp(&right.start_date())
            .then_with(|| left.id().cmp(&right.id()))
    });
}

#[async_trait]
impl StaffingRepository for InMemoryStaffingRepository {
    async fn save_assignment(&self, assignment: ProjectAssignment) -> AppResult<()> {
        self.assignments
            .write()
            .await
            .insert(assignment.id(), assignment);
        Ok(())
    }

    async fn list_assignments_for_project(
        &self,
        project_id: ProjectId,
    ) -> AppResult<Vec<ProjectAssignment>> {
        let assignments = self.assignments.read().await;

        let mut listed: Vec<ProjectAssignment> = assignments
            .values()
            .filter(|assignment| assignment.project_id() == project_id)
            .cloned()
            .collect();
        sort_assignments(&mut listed);

        Ok(listed)
    }

    async fn list_assignments_for_associate(
        &self,
        associate_id: AssociateId,
    ) -> AppResult<Vec<ProjectAssignment>> {
        let assignments = self.assignments.read().await;

        let mut listed: Vec<ProjectAssignment> = assignments
            .values()
            .filter(|assignment| assignment.associate_id() == associate_id)
            .cloned()
            .collect();
        sort_assignments(&mut listed);

        Ok(listed)
    }

    async fn save_revenue(&self, revenue: ProjectRevenue) -> AppResult<()> {
        self.revenues
            .write()
            .await
            .insert(revenue.project_id(), revenue);
        Ok(())
    }

    async fn find_revenue_for_project(
        &self,
        project_id: ProjectId,
    ) -> AppResult<Option<ProjectRevenue>> {
        Ok(self.revenues.read().await.get(&project_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use praxis_application::StaffingRepository;
    use praxis_core::{AssignmentId, AssociateId, ProjectId, RevenueId};
    use praxis_domain::{ProjectAssignment, ProjectRevenue, RevenueStatus};

    use super::InMemoryStaffingRepository;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(|| unreachable!())
    }

    fn assignment(
        project_id: ProjectId,
        associate_id: AssociateId,
        start: NaiveDate,
    ) -> ProjectAssignment {
        ProjectAssignment::new(
            AssignmentId::new(),
            project_id,
            associate_id,
            "Consultant",
            120.0,
            8.0,
            start,
            start,
            150.0,
            40.0,
            10.0,
        )
        .unwrap_or_else(|_| unreachable!())
    }

    #[tokio::test]
    async fn project_listing_filters_and_orders_by_start_date() {
        let repository = InMemoryStaffingRepository::new();
        let project_id = ProjectId::new();

        let later = assignment(project_id, AssociateId::new(), date(2025, 2, 1));
        let earlier = assignment(project_id, AssociateId::new(), date(2025, 1, 1));
        let unrelated = assignment(ProjectId::new(), AssociateId::new(), date(2025, 1, 1));

        for staffed in [&later, &earlier, &unrelated] {
            assert!(repository.save_assignment(staffed.clone()).await.is_ok());
        }

        let listed = repository
            .list_assignments_for_project(project_id)
            .await
            .unwrap_or_default();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id(), earlier.id());
    }

    #[tokio::test]
    async fn recording_a_contract_replaces_the_previous_one() {
        let repository = InMemoryStaffingRepository::new();
        let project_id = ProjectId::new();

        let first = ProjectRevenue::new(
            RevenueId::new(),
            project_id,
            8000.0,
            date(2025, 1, 1),
            date(2025, 6, 30),
            RevenueStatus::Active,
        );
        let second = ProjectRevenue::new(
            RevenueId::new(),
            project_id,
            12_000.0,
            date(2025, 1, 1),
            date(2025, 6, 30),
            RevenueStatus::Active,
        );

        assert!(repository.save_revenue(first).await.is_ok());
        assert!(repository.save_revenue(second).await.is_ok());

        let found = repository
            .find_revenue_for_project(project_id)
            .await
            .unwrap_or_default();
        assert_eq!(found.map(|revenue| revenue.contract_value()), Some(12_000.0));
    }
}
