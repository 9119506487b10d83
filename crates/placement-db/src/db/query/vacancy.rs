use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use placement_core::{OrganisationId, VacancyId, VacancyRef};

use crate::db::{connection::DbConnection, schema::vacancy};
use crate::error::DbResult;
use crate::model::vacancy::Vacancy;

/// ## Summary
/// Returns a query to select all vacancies.
#[must_use]
pub fn all() -> vacancy::BoxedQuery<'static, diesel::pg::Pg> {
    vacancy::table.into_boxed()
}

/// ## Summary
/// Returns a query to find a vacancy by ID.
#[must_use]
pub fn by_id(id: VacancyId) -> vacancy::BoxedQuery<'static, diesel::pg::Pg> {
    all().filter(vacancy::id.eq(id))
}

/// ## Summary
/// Returns a query to find the vacancies an organisation owns.
#[must_use]
pub fn by_employer(employer_id: OrganisationId) -> vacancy::BoxedQuery<'static, diesel::pg::Pg> {
    all().filter(vacancy::employer_id.eq(employer_id))
}

/// ## Summary
/// Loads a vacancy row, or `None` if no such vacancy exists.
///
/// ## Errors
/// Returns database errors if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn find(conn: &mut DbConnection<'_>, id: VacancyId) -> DbResult<Option<Vacancy>> {
    Ok(by_id(id)
        .select(Vacancy::as_select())
        .first::<Vacancy>(conn)
        .await
        .optional()?)
}

/// ## Summary
/// Loads only the authorization-relevant facts of a vacancy.
///
/// ## Errors
/// Returns database errors if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn find_ref(conn: &mut DbConnection<'_>, id: VacancyId) -> DbResult<Option<VacancyRef>> {
    Ok(find(conn, id).await?.as_ref().map(VacancyRef::from))
}
