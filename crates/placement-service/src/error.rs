use thiserror::Error;

/// Service layer errors.
///
/// `Forbidden` never says why access was refused; the reason only reaches
/// the logs.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Not authorized")]
    Forbidden,

    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] placement_db::error::DbError),

    #[error("Invariant violation: {0}")]
    InvariantViolation(&'static str),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
