use placement_core::{Principal, UserId};
use placement_db::db::{connection::DbConnection, query};

use crate::error::{ServiceError, ServiceResult};

/// ## Summary
/// Builds the principal for a verified user id.
///
/// Role and organisation always come from the store, never from the
/// credential that carried the id.
///
/// ## Errors
/// - Returns `Unauthenticated` if the user no longer exists.
/// - Returns `StoreUnavailable` if the lookup fails.
#[tracing::instrument(skip(conn))]
pub async fn load_principal(
    conn: &mut DbConnection<'_>,
    user_id: UserId,
) -> ServiceResult<Principal> {
    let Some(user) = query::user::find(conn, user_id).await? else {
        tracing::debug!(user_id, "Verified user id has no user row");
        return Err(ServiceError::Unauthenticated);
    };

    let principal = user.to_principal();
    tracing::debug!(principal = %principal, "Principal loaded");

    Ok(principal)
}
