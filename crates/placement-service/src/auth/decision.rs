//! Authorization predicates.
//!
//! One predicate per (action, resource type) pair, each a function of the
//! principal and the facts about the target. Checks short-circuit in the
//! order admin, self reference, role-specific relational rule, deny. Nothing
//! here caches: every call reads the facts it needs again.

use placement_core::{
    ApplicationRef, OrganisationId, Principal, Role, UserId, VacancyRef, has_minimum_role,
};
use placement_db::db::query::application::ApplicationScope;

use super::resolver::RelationshipResolver;
use crate::error::{ServiceError, ServiceResult};

/// Outcome of a single authorization predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Allowed,
    Denied,
}

impl Verdict {
    /// `Allowed` when `allowed` holds, `Denied` otherwise.
    #[must_use]
    pub const fn from_bool(allowed: bool) -> Self {
        if allowed { Self::Allowed } else { Self::Denied }
    }

    /// Returns `true` if access is allowed.
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Convert to a `Result`.
    ///
    /// ## Errors
    ///
    /// Returns `Forbidden` if access is denied.
    pub const fn require(self) -> ServiceResult<()> {
        match self {
            Self::Allowed => Ok(()),
            Self::Denied => Err(ServiceError::Forbidden),
        }
    }
}

/// ## Summary
/// Coarse gate: the principal's role must rank at least `minimum`.
///
/// ## Errors
/// Returns `Forbidden` if the principal ranks lower.
pub fn require_role(principal: &Principal, minimum: Role) -> ServiceResult<()> {
    if has_minimum_role(principal.role(), minimum) {
        Ok(())
    } else {
        tracing::debug!(
            principal_id = principal.id(),
            role = %principal.role(),
            required = %minimum,
            "Role gate denied"
        );
        Err(ServiceError::Forbidden)
    }
}

/// ## Summary
/// Coarse gate for agent-and-above operation classes.
///
/// ## Errors
/// Returns `Forbidden` for students.
pub fn require_agent(principal: &Principal) -> ServiceResult<()> {
    require_role(principal, Role::Agent)
}

/// ## Summary
/// Coarse gate for admin-only operation classes.
///
/// ## Errors
/// Returns `Forbidden` for anyone but admins.
pub fn require_admin(principal: &Principal) -> ServiceResult<()> {
    require_role(principal, Role::Admin)
}

/// ## Summary
/// Whether `principal` may see the profile of `target`.
///
/// Admins see everyone and everyone sees themselves. An agent also sees a
/// student who applied to at least one vacancy of the agent's organisation.
/// An agent without an organisation sees nobody else, and no lookup is made.
///
/// ## Errors
/// Returns `StoreUnavailable` if a relational fact cannot be read.
pub async fn can_view_user<R>(
    principal: &Principal,
    target: UserId,
    resolver: &R,
) -> ServiceResult<Verdict>
where
    R: RelationshipResolver + ?Sized,
{
    if principal.is_admin() || principal.is_self(target) {
        return Ok(Verdict::Allowed);
    }

    let (Role::Agent, Some(organisation_id)) = (principal.role(), principal.organisation_id())
    else {
        return Ok(Verdict::Denied);
    };

    if !resolver.is_student(target).await? {
        tracing::trace!(target_user = target, "View target is not a student");
        return Ok(Verdict::Denied);
    }

    let applied = resolver
        .applied_to_organisation_vacancy(target, organisation_id)
        .await?;

    tracing::trace!(
        target_user = target,
        organisation_id,
        applied,
        "Agent visibility resolved"
    );

    Ok(Verdict::from_bool(applied))
}

/// ## Summary
/// Whether `principal` may update or delete the user `target`.
///
/// Seeing a user does not imply being allowed to change it: only the user
/// themselves and admins may.
#[must_use]
pub const fn can_modify_user(principal: &Principal, target: UserId) -> Verdict {
    Verdict::from_bool(principal.is_admin() || principal.is_self(target))
}

/// ## Summary
/// Whether `principal` may update or delete `vacancy`.
#[must_use]
pub const fn can_modify_vacancy(principal: &Principal, vacancy: VacancyRef) -> Verdict {
    match principal.role() {
        Role::Admin => Verdict::Allowed,
        Role::Agent => Verdict::from_bool(principal.belongs_to(vacancy.employer_id)),
        Role::Student => Verdict::Denied,
    }
}

/// ## Summary
/// Whether `principal` may update or withdraw `application`.
///
/// Agents may read applications to their organisation's vacancies but never
/// modify them.
#[must_use]
pub const fn can_modify_application(principal: &Principal, application: ApplicationRef) -> Verdict {
    match principal.role() {
        Role::Admin => Verdict::Allowed,
        Role::Student => Verdict::from_bool(principal.is_self(application.user_id)),
        Role::Agent => Verdict::Denied,
    }
}

/// ## Summary
/// Whether `principal` may update the organisation `organisation_id`.
#[must_use]
pub const fn can_modify_organisation(
    principal: &Principal,
    organisation_id: OrganisationId,
) -> Verdict {
    match principal.role() {
        Role::Admin => Verdict::Allowed,
        Role::Agent => Verdict::from_bool(principal.belongs_to(organisation_id)),
        Role::Student => Verdict::Denied,
    }
}

/// ## Summary
/// Whether `principal` may read one application.
///
/// `employer_id` is the organisation owning the application's vacancy. This
/// is the single-item form of [`application_scope`].
#[must_use]
pub const fn can_view_application(
    principal: &Principal,
    application: ApplicationRef,
    employer_id: OrganisationId,
) -> Verdict {
    if principal.is_admin() || principal.is_self(application.user_id) {
        return Verdict::Allowed;
    }
    match principal.role() {
        Role::Agent => Verdict::from_bool(principal.belongs_to(employer_id)),
        Role::Student | Role::Admin => Verdict::Denied,
    }
}

/// ## Summary
/// The set of applications a listing may show to `principal`.
///
/// Admins see all, agents see applications to their organisation's
/// vacancies, students see their own. An agent without an organisation sees
/// nothing.
#[must_use]
pub const fn application_scope(principal: &Principal) -> ApplicationScope {
    match (principal.role(), principal.organisation_id()) {
        (Role::Admin, _) => ApplicationScope::All,
        (Role::Agent, Some(organisation_id)) => ApplicationScope::Employer(organisation_id),
        (Role::Agent, None) => ApplicationScope::Nothing,
        (Role::Student, _) => ApplicationScope::Applicant(principal.id()),
    }
}
