use std::collections::BTreeSet;
use std::str::FromStr;

use praxis_core::{AppError, AppResult, AssociateId, ClientId, NonEmptyString, ProjectId};
use serde::{Deserialize, Serialize};

use crate::access::ProjectAccess;

/// Stages of the engagement lifecycle.
///
/// Projects move freely between stages; the transition is audited rather
/// than constrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleStage {
    /// Pursuit and proposal work before a signed engagement.
    NewBusiness,
    /// Signed engagement being set up and staffed.
    Onboarding,
    /// Active delivery.
    Execution,
    /// Wrap-up and handover.
    Closure,
    /// Retrospective and knowledge capture.
    Learnings,
}

impl LifecycleStage {
    /// Returns a stable storage value for this stage.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NewBusiness => "new_business",
            Self::Onboarding => "onboarding",
            Self::Execution => "execution",
            Self::Closure => "closure",
            Self::Learnings => "learnings",
        }
    }

    /// Returns all stages in lifecycle order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[LifecycleStage] = &[
            LifecycleStage::NewBusiness,
            LifecycleStage::Onboarding,
            LifecycleStage::Execution,
            LifecycleStage::Closure,
            LifecycleStage::Learnings,
        ];

        ALL
    }
}

impl FromStr for LifecycleStage {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "new_business" => Ok(Self::NewBusiness),
            "onboarding" => Ok(Self::Onboarding),
            "execution" => Ok(Self::Execution),
            "closure" => Ok(Self::Closure),
            "learnings" => Ok(Self::Learnings),
            _ => Err(AppError::Validation(format!(
                "unknown lifecycle stage '{value}'"
            ))),
        }
    }
}

/// Delivery health flag surfaced on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectHealth {
    /// Tracking to plan.
    OnTrack,
    /// Needs attention.
    AtRisk,
    /// Escalated.
    Critical,
}

impl ProjectHealth {
    /// Returns a stable storage value for this health flag.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnTrack => "on_track",
            Self::AtRisk => "at_risk",
            Self::Critical => "critical",
        }
    }

    /// Returns whether the flag counts toward the dashboard risk total.
    #[must_use]
    pub fn needs_attention(&self) -> bool {
        matches!(self, Self::AtRisk | Self::Critical)
    }
}

impl FromStr for ProjectHealth {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "on_track" => Ok(Self::OnTrack),
            "at_risk" => Ok(Self::AtRisk),
            "critical" => Ok(Self::Critical),
            _ => Err(AppError::Validation(format!(
                "unknown project health '{value}'"
            ))),
        }
    }
}

/// An engagement for a client, led by one associate and staffed by others.
///
/// `owner_id` marks the engagement lead; membership in
/// `assigned_associates` is a separate relation and neither implies the
/// other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    client_id: ClientId,
    name: NonEmptyString,
    stage: LifecycleStage,
    health: ProjectHealth,
    owner_id: AssociateId,
    assigned_associates: BTreeSet<AssociateId>,
}

impl Project {
    /// Creates a project record.
    pub fn new(
        id: ProjectId,
        client_id: ClientId,
        name: impl Into<String>,
        stage: LifecycleStage,
        health: ProjectHealth,
        owner_id: AssociateId,
        assigned_associates: BTreeSet<AssociateId>,
    ) -> AppResult<Self> {
        Ok(Self {
            id,
            client_id,
            name: NonEmptyString::new(name)?,
            stage,
            health,
            owner_id,
            assigned_associates,
        })
    }

    /// Returns the project identifier.
    #[must_use]
    pub fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the client the engagement belongs to.
    #[must_use]
    pub fn client_id(&self) -> ClientId {
        self.client_id
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &NonEmptyString {
        &self.name
    }

    /// Returns the current lifecycle stage.
    #[must_use]
    pub fn stage(&self) -> LifecycleStage {
        self.stage
    }

    /// Returns the current health flag.
    #[must_use]
    pub fn health(&self) -> ProjectHealth {
        self.health
    }

    /// Returns the owning engagement lead.
    #[must_use]
    pub fn owner_id(&self) -> AssociateId {
        self.owner_id
    }

    /// Returns the staffed associates.
    #[must_use]
    pub fn assigned_associates(&self) -> &BTreeSet<AssociateId> {
        &self.assigned_associates
    }

    /// Renames the project.
    pub fn rename(&mut self, name: impl Into<String>) -> AppResult<()> {
        self.name = NonEmptyString::new(name)?;
        Ok(())
    }

    /// Moves the project to another lifecycle stage.
    pub fn change_stage(&mut self, stage: LifecycleStage) {
        self.stage = stage;
    }

    /// Hands the project to another engagement lead.
    pub fn change_owner(&mut self, owner_id: AssociateId) {
        self.owner_id = owner_id;
    }

    /// Updates the health flag.
    pub fn change_health(&mut self, health: ProjectHealth) {
        self.health = health;
    }

    /// Adds an associate to the staffed set. Idempotent.
    pub fn assign_associate(&mut self, associate_id: AssociateId) {
        self.assigned_associates.insert(associate_id);
    }

    /// Removes an associate from the staffed set.
    pub fn unassign_associate(&mut self, associate_id: AssociateId) {
        self.assigned_associates.remove(&associate_id);
    }

    /// Returns the authorization-relevant view of this project.
    #[must_use]
    pub fn access(&self) -> ProjectAccess {
        ProjectAccess::new(self.owner_id, self.assigned_associates.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::str::FromStr;

    use praxis_core::{AssociateId, ClientId, ProjectId};

    use super::{LifecycleStage, Project, ProjectHealth};

    fn project(owner: AssociateId, assigned: BTreeSet<AssociateId>) -> Project {
        Project::new(
            ProjectId::new(),
            ClientId::new(),
            "Supply Chain Review",
            LifecycleStage::Execution,
            ProjectHealth::OnTrack,
            owner,
            assigned,
        )
        .unwrap_or_else(|_| unreachable!())
    }

    #[test]
    fn stage_roundtrip_storage_value() {
        for stage in LifecycleStage::all() {
            let restored = LifecycleStage::from_str(stage.as_str());
            assert!(restored.is_ok());
            assert_eq!(restored.unwrap_or(LifecycleStage::NewBusiness), *stage);
        }
    }

    #[test]
    fn critical_health_needs_attention() {
        assert!(ProjectHealth::Critical.needs_attention());
        assert!(ProjectHealth::AtRisk.needs_attention());
        assert!(!ProjectHealth::OnTrack.needs_attention());
    }

    #[test]
    fn assignment_is_idempotent() {
        let owner = AssociateId::new();
        let staffed = AssociateId::new();
        let mut project = project(owner, BTreeSet::new());

        project.assign_associate(staffed);
        project.assign_associate(staffed);
        assert_eq!(project.assigned_associates().len(), 1);

        project.unassign_associate(staffed);
        assert!(project.assigned_associates().is_empty());
    }

    #[test]
    fn access_view_reflects_owner_and_staffed_set() {
        let owner = AssociateId::new();
        let staffed = AssociateId::new();
        let project = project(owner, BTreeSet::from([staffed]));

        let access = project.access();
        assert_eq!(access.owner_id(), owner);
        assert!(access.is_assigned(staffed));
        assert!(!access.is_assigned(owner));
    }
}
