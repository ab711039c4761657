use models::errors::ModelError;
use thiserror::Error;

/// Errors surfaced by repositories. Handlers log them and fall back to zero values.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The row vanished between lookup and write.
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error(transparent)]
    Model(#[from] ModelError),
}
