//! Depot helpers for carrying authorization context through Salvo requests.
//!
//! Credential verification happens upstream and leaves a verified user id in
//! the depot. `PrincipalLoader` turns that id into a store-backed
//! `Principal`; handlers then build an `Authorizer` from the depot.

use std::sync::Arc;

use placement_core::{Principal, UserId};
use placement_db::db::DbProvider;

use crate::error::{ServiceError, ServiceResult};

use super::{authenticate::load_principal, resolver::DbResolver, service::Authorizer};

pub mod depot_keys {
    pub const VERIFIED_USER_ID: &str = "__verified_user_id";
    pub const AUTHENTICATED_PRINCIPAL: &str = "__authenticated_principal";
}

/// Store handle as injected into the depot.
pub type SharedStore = Arc<dyn DbProvider + Send + Sync>;

/// Injects a store handle into every request's depot.
pub struct StoreHandler<P: DbProvider + Clone> {
    pub provider: P,
}

#[salvo::async_trait]
impl<P: DbProvider + Clone + 'static> salvo::Handler for StoreHandler<P> {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        let provider: SharedStore = Arc::new(self.provider.clone());
        depot.inject(provider);
    }
}

/// ## Summary
/// Retrieves the store handle from the depot.
///
/// ## Errors
/// Returns `InvariantViolation` if no `StoreHandler` ran for this request.
pub fn store_from_depot(depot: &salvo::Depot) -> ServiceResult<SharedStore> {
    depot
        .obtain::<SharedStore>()
        .cloned()
        .map_err(|_err| ServiceError::InvariantViolation("Store not found in depot"))
}

/// ## Summary
/// Loads the principal for the verified user id, if any, into the depot.
///
/// A request without a verified id is left anonymous.
///
/// ## Errors
/// - Returns `Unauthenticated` if the verified id has no user behind it.
/// - Returns `StoreUnavailable` if the store cannot be reached.
/// - Returns `InvariantViolation` if no store handle is in the depot.
pub async fn attach_principal(depot: &mut salvo::Depot) -> ServiceResult<()> {
    let Ok(&user_id) = depot.get::<UserId>(depot_keys::VERIFIED_USER_ID) else {
        tracing::trace!("No verified user id, request stays anonymous");
        return Ok(());
    };

    let store = store_from_depot(depot)?;
    let principal = {
        let mut conn = store.get_connection().await?;
        load_principal(&mut conn, user_id).await?
    };

    depot.insert(depot_keys::AUTHENTICATED_PRINCIPAL, principal);
    Ok(())
}

/// ## Summary
/// Middleware that resolves the request principal.
///
/// A verified id with no user behind it leaves the request anonymous, so
/// guarded operations later fail with `Unauthenticated`. Store failures end
/// the request with 503.
pub struct PrincipalLoader;

#[salvo::async_trait]
impl salvo::Handler for PrincipalLoader {
    #[tracing::instrument(skip(self, req, depot, res, ctrl), fields(
        method = %req.method(),
        path = %req.uri().path()
    ))]
    async fn handle(
        &self,
        req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        res: &mut salvo::Response,
        ctrl: &mut salvo::FlowCtrl,
    ) {
        match attach_principal(depot).await {
            Ok(()) => {}
            Err(ServiceError::Unauthenticated) => {
                tracing::debug!("Verified user id is stale, treating request as anonymous");
            }
            Err(ServiceError::StoreUnavailable(e)) => {
                tracing::error!(error = %e, "Store unavailable while loading principal");
                res.status_code(salvo::http::StatusCode::SERVICE_UNAVAILABLE);
                ctrl.skip_rest();
            }
            Err(e) => {
                tracing::error!(error = ?e, "Failed to load principal");
                res.status_code(salvo::http::StatusCode::INTERNAL_SERVER_ERROR);
                ctrl.skip_rest();
            }
        }
    }
}

/// ## Summary
/// Get the authenticated principal from the depot.
///
/// ## Errors
/// Returns `Unauthenticated` if no principal was loaded for this request.
pub fn principal_from_depot(depot: &salvo::Depot) -> ServiceResult<&Principal> {
    depot
        .get::<Principal>(depot_keys::AUTHENTICATED_PRINCIPAL)
        .map_err(|_e| ServiceError::Unauthenticated)
}

/// ## Summary
/// Create an authorizer backed by the depot's store handle.
///
/// ## Errors
/// Returns `InvariantViolation` if no store handle is in the depot.
pub fn authorizer_from_depot(
    depot: &salvo::Depot,
) -> ServiceResult<Authorizer<DbResolver<SharedStore>>> {
    Ok(Authorizer::new(DbResolver::new(store_from_depot(depot)?)))
}
