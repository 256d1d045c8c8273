use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod admin;
pub mod auth;
pub mod bookings;
pub mod main;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("not found")]
    NotFound,
    #[error("{0}")]
    Form(String),
    #[error("internal error: {0}")]
    Internal(String),
    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}
