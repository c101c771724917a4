use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid entity id '{0}': expected 24 hexadecimal characters")]
    InvalidId(String),
}
