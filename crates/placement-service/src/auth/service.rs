//! Authorization service for centralized access control.
//!
//! Handlers ask the `Authorizer` before touching a resource. It applies the
//! action's role gate, then the per-resource predicate, and logs the outcome.
//! Callers only ever learn allowed or denied.

use std::future::Future;

use placement_core::{Principal, has_minimum_role};

use crate::error::{ServiceError, ServiceResult};

use super::{
    action::Action,
    decision::{self, Verdict},
    resolver::RelationshipResolver,
};

/// Authorization service for checking permissions.
///
/// ## Usage
///
/// ```ignore
/// let authz = Authorizer::new(DbResolver::new(pool));
/// authz.require(Some(&principal), &Action::ViewUser(target)).await?;
/// ```
pub struct Authorizer<R> {
    resolver: R,
}

impl<R: RelationshipResolver> Authorizer<R> {
    #[must_use]
    pub const fn new(resolver: R) -> Self {
        Self { resolver }
    }

    #[must_use]
    pub const fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Decide whether `principal` may perform `action`.
    ///
    /// The role gate runs first. Relational facts are only looked up when the
    /// gate passes and the predicate needs them.
    ///
    /// ## Errors
    ///
    /// Returns `StoreUnavailable` if a relational fact cannot be read.
    pub async fn check(&self, principal: &Principal, action: &Action) -> ServiceResult<Verdict> {
        tracing::debug!(
            principal = %principal,
            action = %action,
            "Authorization check started"
        );

        if let Some(minimum) = action
            .minimum_role()
            .filter(|&minimum| !has_minimum_role(principal.role(), minimum))
        {
            tracing::debug!(
                principal = %principal,
                action = %action,
                required = %minimum,
                "Authorization denied by role gate"
            );
            return Ok(Verdict::Denied);
        }

        let verdict = match *action {
            Action::ViewUser(target) => {
                decision::can_view_user(principal, target, &self.resolver).await?
            }
            Action::ModifyUser(target) => decision::can_modify_user(principal, target),
            Action::CreateVacancy { employer_id } => {
                decision::can_modify_organisation(principal, employer_id)
            }
            Action::ModifyVacancy(vacancy) => decision::can_modify_vacancy(principal, vacancy),
            Action::ViewApplication {
                application,
                vacancy_employer_id,
            } => decision::can_view_application(principal, application, vacancy_employer_id),
            Action::ModifyApplication(application) => {
                decision::can_modify_application(principal, application)
            }
            Action::ModifyOrganisation { organisation_id } => {
                decision::can_modify_organisation(principal, organisation_id)
            }
            Action::CreateOrganisation | Action::ManageUsers => Verdict::Allowed,
        };

        tracing::debug!(
            principal = %principal,
            action = %action,
            allowed = verdict.is_allowed(),
            "Authorization check finished"
        );

        Ok(verdict)
    }

    /// Check and require permission, returning an error if denied.
    ///
    /// ## Errors
    ///
    /// - Returns `Unauthenticated` if there is no caller.
    /// - Returns `Forbidden` if access is denied.
    /// - Returns `StoreUnavailable` if a relational fact cannot be read.
    pub async fn require(
        &self,
        caller: Option<&Principal>,
        action: &Action,
    ) -> ServiceResult<()> {
        let Some(principal) = caller else {
            tracing::debug!(action = %action, "Unauthenticated caller rejected");
            return Err(ServiceError::Unauthenticated);
        };

        let verdict = self.check(principal, action).await?;
        if !verdict.is_allowed() {
            tracing::warn!(
                principal = %principal,
                action = %action,
                "Access denied"
            );
        }
        verdict.require()
    }

    /// Run `op` only if `caller` may perform `action`.
    ///
    /// ## Errors
    ///
    /// Returns the errors of [`Self::require`] without running `op`, or
    /// whatever `op` itself returns.
    pub async fn guarded<T, F, Fut>(
        &self,
        caller: Option<&Principal>,
        action: &Action,
        op: F,
    ) -> ServiceResult<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ServiceResult<T>>,
    {
        self.require(caller, action).await?;
        op().await
    }
}
