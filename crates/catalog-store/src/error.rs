use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("The entity store is unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to read or write a catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}
