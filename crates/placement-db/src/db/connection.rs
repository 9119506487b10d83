use std::sync::Arc;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};
use placement_core::config::DatabaseConfig;

use crate::db::DbProvider;
use crate::error::DbResult;

pub type DbPool = Pool<AsyncPgConnection>;
pub type DbConnection<'pool> = PooledConnection<'pool, AsyncPgConnection>;

/// ## Summary
/// Creates a new database connection pool from configuration.
///
/// ## Errors
/// Returns an error if the pool cannot be created with the configured database URL.
pub async fn create_pool(config: &DatabaseConfig) -> anyhow::Result<DbPool> {
    let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(&config.url);
    create_pool_with_manager(config.max_connections, manager).await
}

/// ## Summary
/// Creates a connection pool over a prepared connection manager.
///
/// Used when connections need custom setup before the pool hands them out.
///
/// ## Errors
/// Returns an error if the pool cannot open its initial connections.
#[tracing::instrument(skip(manager))]
pub async fn create_pool_with_manager(
    max_connections: u8,
    manager: AsyncDieselConnectionManager<AsyncPgConnection>,
) -> anyhow::Result<DbPool> {
    tracing::debug!("Creating database connection pool");

    let size = u32::from(max_connections);
    let pool = Pool::builder()
        .max_size(size)
        .test_on_check_out(false)
        .build(manager)
        .await?;

    tracing::info!(
        pool_size = size,
        "Database connection pool created successfully"
    );

    Ok(pool)
}

impl DbProvider for DbPool {
    #[tracing::instrument(skip(self))]
    fn get_connection<'a>(
        &'a self,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = DbResult<DbConnection<'a>>> + Send + 'a>>
    {
        Box::pin(async move {
            let conn = self.get().await.inspect_err(|e| {
                tracing::warn!(error = %e, "Failed to check out database connection");
            })?;
            Ok(conn)
        })
    }
}

impl<P: DbProvider + ?Sized> DbProvider for Arc<P> {
    fn get_connection<'a>(
        &'a self,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = DbResult<DbConnection<'a>>> + Send + 'a>>
    {
        (**self).get_connection()
    }
}
