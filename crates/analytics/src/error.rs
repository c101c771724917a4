use catalog_store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Invalid instructor ID format")]
    InvalidIdentifier,

    #[error("Instructor not found")]
    NotFound,

    #[error("Entity store error: {0}")]
    Store(#[from] StoreError),

    #[error("An unexpected error occurred during aggregation: {0}")]
    Internal(String),
}
