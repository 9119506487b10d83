//! Relational facts that authorization decisions depend on.
//!
//! A resolver answers membership-style questions about the store. An id that
//! does not exist answers `false` (or `None`); only a failure to reach the
//! store is an error.

use futures::future::BoxFuture;
use placement_core::{OrganisationId, Principal, Role, UserId};
use placement_db::db::{DbProvider, query};

use crate::error::ServiceResult;

/// Source of relational facts.
///
/// Implementations must not cache across calls: every answer is read fresh.
pub trait RelationshipResolver: Send + Sync {
    /// Role of an arbitrary user, or `None` if the user does not exist.
    fn role_of(&self, user_id: UserId) -> BoxFuture<'_, ServiceResult<Option<Role>>>;

    /// Whether `student_id` has applied to at least one vacancy owned by
    /// `organisation_id`.
    fn applied_to_organisation_vacancy(
        &self,
        student_id: UserId,
        organisation_id: OrganisationId,
    ) -> BoxFuture<'_, ServiceResult<bool>>;

    /// Whether the principal is affiliated with `organisation_id`.
    ///
    /// This is about the organisation relation only; admins get no special
    /// treatment here.
    fn owns_organisation(&self, principal: &Principal, organisation_id: OrganisationId) -> bool {
        principal.belongs_to(organisation_id)
    }

    fn is_student(&self, user_id: UserId) -> BoxFuture<'_, ServiceResult<bool>> {
        Box::pin(async move { Ok(self.role_of(user_id).await? == Some(Role::Student)) })
    }

    fn is_admin(&self, user_id: UserId) -> BoxFuture<'_, ServiceResult<bool>> {
        Box::pin(async move { Ok(self.role_of(user_id).await? == Some(Role::Admin)) })
    }
}

/// Resolver backed by the database.
///
/// Each fact checks out its own connection and runs a single statement.
pub struct DbResolver<P> {
    provider: P,
}

impl<P: DbProvider> DbResolver<P> {
    #[must_use]
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }
}

impl<P: DbProvider> RelationshipResolver for DbResolver<P> {
    fn role_of(&self, user_id: UserId) -> BoxFuture<'_, ServiceResult<Option<Role>>> {
        Box::pin(async move {
            let mut conn = self.provider.get_connection().await?;
            let role = query::user::role_of(&mut conn, user_id).await?;

            tracing::trace!(user_id, role = ?role, "Resolved user role");

            Ok(role.map(Role::from))
        })
    }

    fn applied_to_organisation_vacancy(
        &self,
        student_id: UserId,
        organisation_id: OrganisationId,
    ) -> BoxFuture<'_, ServiceResult<bool>> {
        Box::pin(async move {
            let mut conn = self.provider.get_connection().await?;
            Ok(query::application::applied_to_employer(&mut conn, student_id, organisation_id).await?)
        })
    }
}
