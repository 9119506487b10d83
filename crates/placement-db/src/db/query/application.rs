//! Application queries, including the application-to-vacancy relation that
//! gives agents visibility into students.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use placement_core::{ApplicationId, OrganisationId, UserId, VacancyId};

use crate::db::{
    connection::DbConnection,
    schema::{application, vacancy},
};
use crate::error::DbResult;
use crate::model::application::Application;

/// Which applications a listing may return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApplicationScope {
    /// Every application.
    All,
    /// Applications to vacancies owned by an organisation.
    Employer(OrganisationId),
    /// Applications submitted by one user.
    Applicant(UserId),
    /// No application at all.
    Nothing,
}

/// ## Summary
/// Returns a query to select all applications.
#[must_use]
pub fn all() -> application::BoxedQuery<'static, diesel::pg::Pg> {
    application::table.into_boxed()
}

/// ## Summary
/// Returns a query to find an application by ID.
#[must_use]
pub fn by_id(id: ApplicationId) -> application::BoxedQuery<'static, diesel::pg::Pg> {
    all().filter(application::id.eq(id))
}

/// ## Summary
/// Returns a query to find the applications a user submitted.
#[must_use]
pub fn by_applicant(user_id: UserId) -> application::BoxedQuery<'static, diesel::pg::Pg> {
    all().filter(application::user_id.eq(user_id))
}

/// ## Summary
/// Returns a query to find the applications against one vacancy.
#[must_use]
pub fn by_vacancy(vacancy_id: VacancyId) -> application::BoxedQuery<'static, diesel::pg::Pg> {
    all().filter(application::vacancy_id.eq(vacancy_id))
}

/// ## Summary
/// Returns a query to find applications whose target vacancy is owned by
/// `employer_id`.
///
/// The vacancy relation is resolved inside the same statement.
#[must_use]
pub fn by_employer(
    employer_id: OrganisationId,
) -> application::BoxedQuery<'static, diesel::pg::Pg> {
    all().filter(
        application::vacancy_id.eq_any(
            vacancy::table
                .filter(vacancy::employer_id.eq(employer_id))
                .select(vacancy::id),
        ),
    )
}

/// ## Summary
/// Returns a query to find the applications `user_id` made to vacancies of
/// `employer_id`.
#[must_use]
pub fn by_applicant_at_employer(
    user_id: UserId,
    employer_id: OrganisationId,
) -> application::BoxedQuery<'static, diesel::pg::Pg> {
    by_employer(employer_id).filter(application::user_id.eq(user_id))
}

/// ## Summary
/// Returns a query restricted to `scope`, or `None` when the scope admits
/// nothing and no query needs to run.
#[must_use]
pub fn visible_in(
    scope: ApplicationScope,
) -> Option<application::BoxedQuery<'static, diesel::pg::Pg>> {
    match scope {
        ApplicationScope::All => Some(all()),
        ApplicationScope::Employer(employer_id) => Some(by_employer(employer_id)),
        ApplicationScope::Applicant(user_id) => Some(by_applicant(user_id)),
        ApplicationScope::Nothing => None,
    }
}

/// ## Summary
/// Returns `true` if `user_id` has at least one application to a vacancy
/// owned by `employer_id`.
///
/// Runs as one `EXISTS` statement, so the answer reflects a single snapshot.
/// Unknown user or organisation ids simply yield `false`.
///
/// ## Errors
/// Returns database errors if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn applied_to_employer(
    conn: &mut DbConnection<'_>,
    user_id: UserId,
    employer_id: OrganisationId,
) -> DbResult<bool> {
    let applied = diesel::select(diesel::dsl::exists(by_applicant_at_employer(
        user_id,
        employer_id,
    )))
    .get_result::<bool>(conn)
    .await?;

    tracing::trace!(user_id, employer_id, applied, "Application relation checked");

    Ok(applied)
}

/// ## Summary
/// Loads an application together with the owning organisation of its vacancy.
///
/// ## Errors
/// Returns database errors if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn find_with_employer(
    conn: &mut DbConnection<'_>,
    id: ApplicationId,
) -> DbResult<Option<(Application, OrganisationId)>> {
    Ok(application::table
        .inner_join(vacancy::table)
        .filter(application::id.eq(id))
        .select((Application::as_select(), vacancy::employer_id))
        .first::<(Application, OrganisationId)>(conn)
        .await
        .optional()?)
}

/// ## Summary
/// Lists the applications visible within `scope`, oldest first.
///
/// ## Errors
/// Returns database errors if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn list_visible(
    conn: &mut DbConnection<'_>,
    scope: ApplicationScope,
) -> DbResult<Vec<Application>> {
    let Some(query) = visible_in(scope) else {
        return Ok(Vec::new());
    };

    Ok(query
        .select(Application::as_select())
        .order(application::id.asc())
        .load::<Application>(conn)
        .await?)
}

/// ## Summary
/// Lists the applications against one vacancy that are visible within `scope`.
///
/// ## Errors
/// Returns database errors if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn list_for_vacancy(
    conn: &mut DbConnection<'_>,
    vacancy_id: VacancyId,
    scope: ApplicationScope,
) -> DbResult<Vec<Application>> {
    let Some(query) = visible_in(scope) else {
        return Ok(Vec::new());
    };

    Ok(query
        .filter(application::vacancy_id.eq(vacancy_id))
        .select(Application::as_select())
        .order(application::id.asc())
        .load::<Application>(conn)
        .await?)
}
