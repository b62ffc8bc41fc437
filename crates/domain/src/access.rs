//! Access-control evaluator.
//!
//! Pure decisions over an optional account and a project's
//! ownership/assignment data. Absence of identity (no account, inactive
//! account, unset associate link) always resolves to deny, never to an
//! error.

use std::collections::BTreeSet;

use praxis_core::AssociateId;
use serde::{Deserialize, Serialize};

use crate::security::{Permission, Role};
use crate::user::UserAccount;

/// The authorization-relevant slice of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectAccess {
    owner_id: AssociateId,
    assigned_associates: BTreeSet<AssociateId>,
}

impl ProjectAccess {
    /// Creates an access view from owner and staffed set.
    #[must_use]
    pub fn new(owner_id: AssociateId, assigned_associates: BTreeSet<AssociateId>) -> Self {
        Self {
            owner_id,
            assigned_associates,
        }
    }

    /// Returns the owning engagement lead.
    #[must_use]
    pub fn owner_id(&self) -> AssociateId {
        self.owner_id
    }

    /// Returns whether the associate is staffed on the project.
    #[must_use]
    pub fn is_assigned(&self, associate_id: AssociateId) -> bool {
        self.assigned_associates.contains(&associate_id)
    }
}

/// Returns whether the account holds a permission.
///
/// Signed-out (`None`) and deactivated accounts are denied every
/// permission; otherwise this is a lookup in the static role table.
#[must_use]
pub fn has_permission(account: Option<&UserAccount>, permission: Permission) -> bool {
    match account {
        Some(account) if account.is_active() => account.role().grants(permission),
        _ => false,
    }
}

/// Decides whether the account may view the project.
///
/// First match wins: the view-all scope dominates the owned scope, which
/// dominates the assigned scope. A role whose scope requires an associate
/// link is denied when the link is unset.
#[must_use]
pub fn can_view_project(account: Option<&UserAccount>, access: &ProjectAccess) -> bool {
    let Some(account) = account else {
        return false;
    };

    if !account.is_active() {
        return false;
    }

    let role = account.role();
    if role.grants(Permission::ProjectViewAll) {
        return true;
    }

    if role.grants(Permission::ProjectViewOwned) {
        return account.associate_id() == Some(access.owner_id());
    }

    if role.grants(Permission::ProjectViewAssigned) {
        return account
            .associate_id()
            .is_some_and(|associate_id| access.is_assigned(associate_id));
    }

    false
}

/// Decides whether the account may edit the project.
///
/// Requires the generic edit permission; engagement leads must
/// additionally own the project. Other roles holding the edit permission
/// are not further constrained.
#[must_use]
pub fn can_edit_project(account: Option<&UserAccount>, access: &ProjectAccess) -> bool {
    let Some(account) = account else {
        return false;
    };

    if !has_permission(Some(account), Permission::ProjectEdit) {
        return false;
    }

    if account.role() == Role::EngagementLead {
        return account.associate_id() == Some(access.owner_id());
    }

    true
}
