//! Application listings filtered by the caller's scope.

use placement_test::component::auth::{list_vacancy_applications, list_visible_applications};
use placement_test::component::db::query;

use super::helpers::*;

fn ids(applications: &[placement_test::component::model::application::Application]) -> Vec<i32> {
    applications.iter().map(|application| application.id).collect()
}

#[test_log::test(tokio::test)]
async fn each_role_lists_its_own_scope() {
    let db = TestDb::new().await.expect("Failed to create test database");
    let market = Marketplace::seed(&db).await.expect("Failed to seed marketplace");
    let elsewhere = db
        .seed_application(market.bystander, market.other_vacancy)
        .await
        .expect("Failed to seed application");

    let agent = db.principal(market.agent).await.expect("Failed to load principal");
    let applicant = db.principal(market.applicant).await.expect("Failed to load principal");
    let bystander = db.principal(market.bystander).await.expect("Failed to load principal");
    let admin = db.principal(market.admin).await.expect("Failed to load principal");

    let mut conn = db.get_conn().await.expect("Failed to get connection");

    let agent_view = list_visible_applications(&mut conn, &agent)
        .await
        .expect("Listing failed");
    assert_eq!(ids(&agent_view), vec![market.application.id]);

    let applicant_view = list_visible_applications(&mut conn, &applicant)
        .await
        .expect("Listing failed");
    assert_eq!(ids(&applicant_view), vec![market.application.id]);

    let bystander_view = list_visible_applications(&mut conn, &bystander)
        .await
        .expect("Listing failed");
    assert_eq!(ids(&bystander_view), vec![elsewhere.id]);

    let admin_view = list_visible_applications(&mut conn, &admin)
        .await
        .expect("Listing failed");
    assert_eq!(ids(&admin_view), vec![market.application.id, elsewhere.id]);
}

#[test_log::test(tokio::test)]
async fn agent_without_organisation_lists_nothing() {
    let db = TestDb::new().await.expect("Failed to create test database");
    let market = Marketplace::seed(&db).await.expect("Failed to seed marketplace");
    let loose_agent_id = db
        .seed_user(Role::Agent, None)
        .await
        .expect("Failed to seed agent");
    let loose_agent = db.principal(loose_agent_id).await.expect("Failed to load principal");

    let mut conn = db.get_conn().await.expect("Failed to get connection");

    let visible = list_visible_applications(&mut conn, &loose_agent)
        .await
        .expect("Listing failed");
    assert!(visible.is_empty());

    let for_vacancy = list_vacancy_applications(&mut conn, &loose_agent, market.vacancy.id)
        .await
        .expect("Listing failed");
    assert!(for_vacancy.is_empty());
}

#[test_log::test(tokio::test)]
async fn vacancy_listing_respects_scope() {
    let db = TestDb::new().await.expect("Failed to create test database");
    let market = Marketplace::seed(&db).await.expect("Failed to seed marketplace");
    let second = db
        .seed_application(market.bystander, market.vacancy)
        .await
        .expect("Failed to seed application");

    let agent = db.principal(market.agent).await.expect("Failed to load principal");
    let applicant = db.principal(market.applicant).await.expect("Failed to load principal");

    let other_agent_id = db
        .seed_user(Role::Agent, Some(market.other_employer))
        .await
        .expect("Failed to seed agent");
    let other_agent = db.principal(other_agent_id).await.expect("Failed to load principal");

    let mut conn = db.get_conn().await.expect("Failed to get connection");

    let agent_view = list_vacancy_applications(&mut conn, &agent, market.vacancy.id)
        .await
        .expect("Listing failed");
    assert_eq!(ids(&agent_view), vec![market.application.id, second.id]);

    let applicant_view = list_vacancy_applications(&mut conn, &applicant, market.vacancy.id)
        .await
        .expect("Listing failed");
    assert_eq!(ids(&applicant_view), vec![market.application.id]);

    let foreign_view = list_vacancy_applications(&mut conn, &other_agent, market.vacancy.id)
        .await
        .expect("Listing failed");
    assert!(foreign_view.is_empty());
}

#[test_log::test(tokio::test)]
async fn application_is_found_with_its_employer() {
    let db = TestDb::new().await.expect("Failed to create test database");
    let market = Marketplace::seed(&db).await.expect("Failed to seed marketplace");
    let mut conn = db.get_conn().await.expect("Failed to get connection");

    let found = query::application::find_with_employer(&mut conn, market.application.id)
        .await
        .expect("Query failed");
    let (application, employer_id) = found.expect("Application should exist");
    assert_eq!(application.user_id, market.applicant);
    assert_eq!(employer_id, market.employer);

    let missing = query::application::find_with_employer(&mut conn, -1)
        .await
        .expect("Query failed");
    assert!(missing.is_none());

    let vacancy = query::vacancy::find_ref(&mut conn, market.vacancy.id)
        .await
        .expect("Query failed");
    assert_eq!(vacancy, Some(market.vacancy));
}
