use praxis_core::{AppResult, ClientId, NonEmptyString};
use serde::{Deserialize, Serialize};

use crate::user::EmailAddress;

/// A client the firm runs engagements for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    id: ClientId,
    name: NonEmptyString,
    industry: NonEmptyString,
    contact_name: NonEmptyString,
    contact_email: EmailAddress,
    active: bool,
}

impl Client {
    /// Creates an active client record.
    pub fn new(
        id: ClientId,
        name: impl Into<String>,
        industry: impl Into<String>,
        contact_name: impl Into<String>,
        contact_email: EmailAddress,
    ) -> AppResult<Self> {
        Ok(Self {
            id,
            name: NonEmptyString::new(name)?,
            industry: NonEmptyString::new(industry)?,
            contact_name: NonEmptyString::new(contact_name)?,
            contact_email,
            active: true,
        })
    }

    /// Returns the client identifier.
    #[must_use]
    pub fn id(&self) -> ClientId {
        self.id
    }

    /// Returns the client name.
    #[must_use]
    pub fn name(&self) -> &NonEmptyString {
        &self.name
    }

    /// Returns the industry label.
    #[must_use]
    pub fn industry(&self) -> &NonEmptyString {
        &self.industry
    }

    /// Returns the primary contact name.
    #[must_use]
    pub fn contact_name(&self) -> &NonEmptyString {
        &self.contact_name
    }

    /// Returns the primary contact email.
    #[must_use]
    pub fn contact_email(&self) -> &EmailAddress {
        &self.contact_email
    }

    /// Returns whether the client relationship is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}
