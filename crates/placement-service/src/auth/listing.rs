//! Listings filtered by visibility.
//!
//! A listing never loads rows it would then hide: the principal's scope is
//! pushed into the query itself.

use placement_core::{Principal, VacancyId};
use placement_db::{
    db::{connection::DbConnection, query},
    model::application::Application,
};

use super::decision::application_scope;
use crate::error::ServiceResult;

/// ## Summary
/// Lists every application `principal` may see, oldest first.
///
/// ## Errors
/// Returns `StoreUnavailable` if the query fails.
#[tracing::instrument(skip(conn, principal), fields(principal = %principal))]
pub async fn list_visible_applications(
    conn: &mut DbConnection<'_>,
    principal: &Principal,
) -> ServiceResult<Vec<Application>> {
    let scope = application_scope(principal);
    let applications = query::application::list_visible(conn, scope).await?;

    tracing::debug!(scope = ?scope, count = applications.len(), "Listed visible applications");

    Ok(applications)
}

/// ## Summary
/// Lists the applications against `vacancy_id` that `principal` may see.
///
/// An agent listing another organisation's vacancy gets an empty list rather
/// than an error, the same as for a vacancy with no applications.
///
/// ## Errors
/// Returns `StoreUnavailable` if the query fails.
#[tracing::instrument(skip(conn, principal), fields(principal = %principal))]
pub async fn list_vacancy_applications(
    conn: &mut DbConnection<'_>,
    principal: &Principal,
    vacancy_id: VacancyId,
) -> ServiceResult<Vec<Application>> {
    let scope = application_scope(principal);
    let applications = query::application::list_for_vacancy(conn, vacancy_id, scope).await?;

    tracing::debug!(
        scope = ?scope,
        vacancy_id,
        count = applications.len(),
        "Listed vacancy applications"
    );

    Ok(applications)
}
