//! The production pool built from loaded settings.

use std::collections::HashMap;

use placement_test::component::config::{
    DATABASE_MAX_CONNECTIONS_VAR, DATABASE_URL_VAR, Settings,
};
use placement_test::component::db::connection::create_pool;
use placement_test::component::db::query;

use super::helpers::*;

#[test_log::test(tokio::test)]
async fn pool_from_settings_serves_queries() {
    let url = database_url();
    migrate_once(&url).await.expect("Failed to migrate");

    let vars = HashMap::from([
        (DATABASE_URL_VAR.to_string(), url),
        (DATABASE_MAX_CONNECTIONS_VAR.to_string(), "2".to_string()),
    ]);
    let settings = Settings::load_from(&vars).expect("Failed to load settings");
    assert_eq!(settings.database.max_connections, 2);

    let pool = create_pool(&settings.database)
        .await
        .expect("Failed to create pool");
    let mut conn = pool.get().await.expect("Failed to get connection");

    let missing = query::vacancy::find_ref(&mut conn, -1)
        .await
        .expect("Query failed");
    assert!(missing.is_none());
}
