//! Request middleware wired to a live store.

use salvo::http::StatusCode;
use salvo::test::{ResponseExt, TestClient};
use salvo::{Depot, FlowCtrl, Handler, Request, Response, Router};

use placement_test::component::auth::depot::depot_keys;
use placement_test::component::auth::{
    Action, PrincipalLoader, StoreHandler, authorizer_from_depot, principal_from_depot,
};
use placement_test::component::error::ServiceError;

use super::helpers::*;

/// Marks the request as carrying a verified user id.
struct VerifiedId(UserId);

#[salvo::async_trait]
impl Handler for VerifiedId {
    async fn handle(
        &self,
        _req: &mut Request,
        depot: &mut Depot,
        _res: &mut Response,
        _ctrl: &mut FlowCtrl,
    ) {
        depot.insert(depot_keys::VERIFIED_USER_ID, self.0);
    }
}

/// Renders the principal the loader attached, if any.
struct WhoAmI;

#[salvo::async_trait]
impl Handler for WhoAmI {
    async fn handle(
        &self,
        _req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        _ctrl: &mut FlowCtrl,
    ) {
        match principal_from_depot(depot) {
            Ok(principal) => res.render(principal.to_string()),
            Err(_) => res.render("anonymous"),
        }
    }
}

/// Guards a profile read with the depot's authorizer.
struct ViewProfile(UserId);

#[salvo::async_trait]
impl Handler for ViewProfile {
    async fn handle(
        &self,
        _req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        _ctrl: &mut FlowCtrl,
    ) {
        let result = match authorizer_from_depot(depot) {
            Ok(authz) => {
                authz
                    .require(principal_from_depot(depot).ok(), &Action::ViewUser(self.0))
                    .await
            }
            Err(e) => Err(e),
        };
        match result {
            Ok(()) => res.render("profile"),
            Err(ServiceError::Unauthenticated) => {
                res.status_code(StatusCode::UNAUTHORIZED);
            }
            Err(ServiceError::Forbidden) => {
                res.status_code(StatusCode::FORBIDDEN);
            }
            Err(_) => {
                res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            }
        }
    }
}

fn router(db: &TestDb, verified: UserId, goal: impl Handler) -> Router {
    Router::new()
        .hoop(StoreHandler {
            provider: db.provider(),
        })
        .hoop(VerifiedId(verified))
        .hoop(PrincipalLoader)
        .goal(goal)
}

#[test_log::test(tokio::test)]
async fn loader_attaches_stored_principal() {
    let db = TestDb::new().await.expect("Failed to create test database");
    let market = Marketplace::seed(&db).await.expect("Failed to seed marketplace");

    let mut res = TestClient::get("http://127.0.0.1:5800/")
        .send(router(&db, market.agent, WhoAmI))
        .await;

    let body = res.take_string().await.expect("Failed to read body");
    assert_eq!(body, format!("agent:{}", market.agent));
}

#[test_log::test(tokio::test)]
async fn stale_user_id_leaves_request_anonymous() {
    let db = TestDb::new().await.expect("Failed to create test database");

    let mut res = TestClient::get("http://127.0.0.1:5800/")
        .send(router(&db, -1, WhoAmI))
        .await;

    assert_ne!(res.status_code, Some(StatusCode::SERVICE_UNAVAILABLE));
    let body = res.take_string().await.expect("Failed to read body");
    assert_eq!(body, "anonymous");
}

#[test_log::test(tokio::test)]
async fn depot_authorizer_guards_handlers() {
    let db = TestDb::new().await.expect("Failed to create test database");
    let market = Marketplace::seed(&db).await.expect("Failed to seed marketplace");

    let mut allowed = TestClient::get("http://127.0.0.1:5800/")
        .send(router(&db, market.agent, ViewProfile(market.applicant)))
        .await;
    assert_eq!(
        allowed.take_string().await.expect("Failed to read body"),
        "profile"
    );

    let denied = TestClient::get("http://127.0.0.1:5800/")
        .send(router(&db, market.agent, ViewProfile(market.bystander)))
        .await;
    assert_eq!(denied.status_code, Some(StatusCode::FORBIDDEN));

    let anonymous = TestClient::get("http://127.0.0.1:5800/")
        .send(router(&db, -1, ViewProfile(market.applicant)))
        .await;
    assert_eq!(anonymous.status_code, Some(StatusCode::UNAUTHORIZED));
}
