use praxis_core::{AppError, AppResult, AssociateId, NonEmptyString};
use serde::{Deserialize, Serialize};

use crate::user::EmailAddress;

/// A staff member who can own projects and be staffed on assignments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Associate {
    id: AssociateId,
    name: NonEmptyString,
    email: EmailAddress,
    job_title: NonEmptyString,
    weekly_capacity_hours: f64,
    active: bool,
}

impl Associate {
    /// Creates an active associate record.
    pub fn new(
        id: AssociateId,
        name: impl Into<String>,
        email: EmailAddress,
        job_title: impl Into<String>,
        weekly_capacity_hours: f64,
    ) -> AppResult<Self> {
        if weekly_capacity_hours <= 0.0 {
            return Err(AppError::Validation(
                "weekly capacity hours must be positive".to_owned(),
            ));
        }

        Ok(Self {
            id,
            name: NonEmptyString::new(name)?,
            email,
            job_title: NonEmptyString::new(job_title)?,
            weekly_capacity_hours,
            active: true,
        })
    }

    /// Returns the associate identifier.
    #[must_use]
    pub fn id(&self) -> AssociateId {
        self.id
    }

    /// Returns the associate name.
    #[must_use]
    pub fn name(&self) -> &NonEmptyString {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the job title.
    #[must_use]
    pub fn job_title(&self) -> &NonEmptyString {
        &self.job_title
    }

    /// Returns the staffable hours per week.
    #[must_use]
    pub fn weekly_capacity_hours(&self) -> f64 {
        self.weekly_capacity_hours
    }

    /// Returns whether the associate is staffable.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Marks the associate as no longer staffable. Idempotent.
    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use praxis_core::AssociateId;

    use super::Associate;
    use crate::user::EmailAddress;

    fn email() -> EmailAddress {
        EmailAddress::new("staff@firm.example").unwrap_or_else(|_| unreachable!())
    }

    #[test]
    fn non_positive_capacity_is_rejected() {
        let associate = Associate::new(AssociateId::new(), "Dana Reyes", email(), "Analyst", 0.0);
        assert!(associate.is_err());
    }

    #[test]
    fn new_associate_is_active() {
        let associate = Associate::new(AssociateId::new(), "Dana Reyes", email(), "Analyst", 40.0);
        assert!(associate.is_ok());
        assert!(associate.unwrap_or_else(|_| unreachable!()).is_active());
    }
}
