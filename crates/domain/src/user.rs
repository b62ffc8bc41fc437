//! User accounts and the identity data access decisions depend on.

use praxis_core::{AppError, AppResult, AssociateId, NonEmptyString, UserId};
use serde::{Deserialize, Serialize};

use crate::security::Role;

/// Validated email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// Performs basic structural validation: non-empty, contains exactly one
    /// `@`, local part and domain are non-empty, domain contains at least
    /// one `.`.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        let trimmed = value.trim().to_lowercase();

        if trimmed.is_empty() {
            return Err(AppError::Validation(
                "email address must not be empty".to_owned(),
            ));
        }

        let parts: Vec<&str> = trimmed.splitn(2, '@').collect();
        if parts.len() != 2 {
            return Err(AppError::Validation(
                "email address must contain exactly one '@'".to_owned(),
            ));
        }

        let local = parts[0];
        let domain = parts[1];

        if local.is_empty() {
            return Err(AppError::Validation(
                "email local part must not be empty".to_owned(),
            ));
        }

        if domain.is_empty() || !domain.contains('.') {
            return Err(AppError::Validation(
                "email domain must contain at least one '.'".to_owned(),
            ));
        }

        if trimmed.len() > 254 {
            return Err(AppError::Validation(
                "email address must not exceed 254 characters".to_owned(),
            ));
        }

        Ok(Self(trimmed))
    }

    /// Returns the validated email string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

/// A dashboard account: identity, role, and the optional associate link.
///
/// The associate link is a weak reference: it carries no ownership and is
/// only compared for equality during authorization. Accounts are never hard
/// deleted; deactivation flips the `active` flag and revokes all access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    id: UserId,
    display_name: NonEmptyString,
    email: EmailAddress,
    role: Role,
    associate_id: Option<AssociateId>,
    active: bool,
}

impl UserAccount {
    /// Creates an active account.
    pub fn new(
        id: UserId,
        display_name: impl Into<String>,
        email: EmailAddress,
        role: Role,
        associate_id: Option<AssociateId>,
    ) -> AppResult<Self> {
        Ok(Self {
            id,
            display_name: NonEmptyString::new(display_name)?,
            email,
            role,
            associate_id,
            active: true,
        })
    }

    /// Returns the account identifier.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn display_name(&self) -> &NonEmptyString {
        &self.display_name
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the account role.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the linked associate, if the account is staff.
    #[must_use]
    pub fn associate_id(&self) -> Option<AssociateId> {
        self.associate_id
    }

    /// Returns whether the account may sign in and act.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Replaces the account role.
    pub fn change_role(&mut self, role: Role) {
        self.role = role;
    }

    /// Deactivates the account. Idempotent.
    pub fn deactivate(&mut self) {
        self.active = false;
    }
}
