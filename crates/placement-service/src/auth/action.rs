//! Guarded operations.
//!
//! Each action carries the facts its predicate needs about the target, so an
//! `Authorizer` can decide it without further input from the caller.

use placement_core::{ApplicationRef, OrganisationId, Role, UserId, VacancyRef};

/// An operation the caller wants to perform on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Read another user's profile.
    ViewUser(UserId),
    /// Update or delete a user.
    ModifyUser(UserId),
    /// Post a vacancy on behalf of an organisation.
    CreateVacancy { employer_id: OrganisationId },
    /// Update or delete a vacancy.
    ModifyVacancy(VacancyRef),
    /// Read one application. `vacancy_employer_id` owns the vacancy applied to.
    ViewApplication {
        application: ApplicationRef,
        vacancy_employer_id: OrganisationId,
    },
    /// Update or withdraw an application.
    ModifyApplication(ApplicationRef),
    /// Update an organisation's details.
    ModifyOrganisation { organisation_id: OrganisationId },
    /// Register a new organisation.
    CreateOrganisation,
    /// Administer user accounts and roles.
    ManageUsers,
}

impl Action {
    /// The role gate applied before the per-resource predicate, if any.
    #[must_use]
    pub const fn minimum_role(&self) -> Option<Role> {
        match self {
            Self::CreateVacancy { .. }
            | Self::ModifyVacancy(_)
            | Self::ModifyOrganisation { .. } => Some(Role::Agent),
            Self::CreateOrganisation | Self::ManageUsers => Some(Role::Admin),
            Self::ViewUser(_)
            | Self::ModifyUser(_)
            | Self::ViewApplication { .. }
            | Self::ModifyApplication(_) => None,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ViewUser(_) => "view_user",
            Self::ModifyUser(_) => "modify_user",
            Self::CreateVacancy { .. } => "create_vacancy",
            Self::ModifyVacancy(_) => "modify_vacancy",
            Self::ViewApplication { .. } => "view_application",
            Self::ModifyApplication(_) => "modify_application",
            Self::ModifyOrganisation { .. } => "modify_organisation",
            Self::CreateOrganisation => "create_organisation",
            Self::ManageUsers => "manage_users",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
