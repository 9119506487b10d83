//! The authenticated actor behind a request.

use serde::Serialize;

use crate::role::Role;
use crate::types::{OrganisationId, UserId};

/// An authenticated principal.
///
/// Built once per request from store-backed identity data and never mutated
/// afterwards. Only agents carry an organisation; for any other role the
/// affiliation is dropped at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Principal {
    id: UserId,
    role: Role,
    organisation_id: Option<OrganisationId>,
}

impl Principal {
    #[must_use]
    pub const fn new(id: UserId, role: Role, organisation_id: Option<OrganisationId>) -> Self {
        let organisation_id = match role {
            Role::Agent => organisation_id,
            Role::Student | Role::Admin => None,
        };
        Self {
            id,
            role,
            organisation_id,
        }
    }

    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub const fn organisation_id(&self) -> Option<OrganisationId> {
        self.organisation_id
    }

    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }

    /// Returns `true` if `user_id` refers to this principal.
    #[must_use]
    pub const fn is_self(&self, user_id: UserId) -> bool {
        self.id == user_id
    }

    /// Returns `true` only when the principal has an organisation and it is
    /// `organisation_id`. A missing affiliation never matches.
    #[must_use]
    pub const fn belongs_to(&self, organisation_id: OrganisationId) -> bool {
        matches!(self.organisation_id, Some(own) if own == organisation_id)
    }
}

impl std::fmt::Display for Principal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.role, self.id)
    }
}
