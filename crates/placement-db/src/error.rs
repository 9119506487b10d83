use thiserror::Error;

/// Database layer errors
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Query failed: {0}")]
    Query(#[from] diesel::result::Error),

    #[error("Pool error: {0}")]
    Pool(#[from] diesel_async::pooled_connection::bb8::RunError),
}

pub type DbResult<T> = std::result::Result<T, DbError>;
