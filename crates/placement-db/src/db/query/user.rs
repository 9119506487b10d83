use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use placement_core::UserId;

use crate::db::{connection::DbConnection, enums::UserRole, schema::user};
use crate::error::DbResult;
use crate::model::user::User;

/// ## Summary
/// Returns a query to select all users.
#[must_use]
pub fn all() -> user::BoxedQuery<'static, diesel::pg::Pg> {
    user::table.into_boxed()
}

/// ## Summary
/// Returns a query to find a user by ID.
#[must_use]
pub fn by_id(id: UserId) -> user::BoxedQuery<'static, diesel::pg::Pg> {
    all().filter(user::id.eq(id))
}

/// ## Summary
/// Loads a user row, or `None` if no such user exists.
///
/// ## Errors
/// Returns database errors if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn find(conn: &mut DbConnection<'_>, id: UserId) -> DbResult<Option<User>> {
    Ok(by_id(id)
        .select(User::as_select())
        .first::<User>(conn)
        .await
        .optional()?)
}

/// ## Summary
/// Looks up the role of an arbitrary user, or `None` if no such user exists.
///
/// ## Errors
/// Returns database errors if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn role_of(conn: &mut DbConnection<'_>, id: UserId) -> DbResult<Option<UserRole>> {
    Ok(by_id(id)
        .select(user::role)
        .first::<UserRole>(conn)
        .await
        .optional()?)
}
