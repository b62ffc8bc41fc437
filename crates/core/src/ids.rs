use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an identifier from an existing UUID value.
            #[must_use]
            pub fn from_uuid(value: Uuid) -> Self {
                Self(value)
            }

            /// Returns the underlying UUID value.
            #[must_use]
            pub fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(formatter, "{}", self.0)
            }
        }
    };
}

define_id! {
    /// Unique identifier for a user account.
    UserId
}

define_id! {
    /// Unique identifier for an associate (staff member).
    AssociateId
}

define_id! {
    /// Unique identifier for a client.
    ClientId
}

define_id! {
    /// Unique identifier for a project.
    ProjectId
}

define_id! {
    /// Unique identifier for a staffing assignment.
    AssignmentId
}

define_id! {
    /// Unique identifier for a project revenue record.
    RevenueId
}

define_id! {
    /// Unique identifier for an uploaded document record.
    DocumentId
}

define_id! {
    /// Unique identifier for a project note.
    NoteId
}

define_id! {
    /// Unique identifier for a costing request.
    CostingRequestId
}

#[cfg(test)]
mod tests {
    use super::{AssociateId, ProjectId};

    #[test]
    fn identifiers_format_as_uuid() {
        let id = ProjectId::new();
        assert_eq!(id.to_string().len(), 36);
    }

    #[test]
    fn uuid_round_trips_through_identifier() {
        let raw = uuid::Uuid::new_v4();
        let id = AssociateId::from_uuid(raw);
        assert_eq!(id.as_uuid(), raw);
    }
}
