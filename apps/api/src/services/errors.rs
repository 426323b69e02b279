use thiserror::Error;

use crate::domain::repositories::{ClientError, StoreError};

/// Errors surfaced by the team-data services
///
/// Upstream failures keep their classification so the HTTP layer can pick
/// a status code; anything else collapses into `SyncFailed`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("Resource not found")]
    NotFound,

    #[error("Access forbidden - check API key")]
    Forbidden,

    #[error("External API unavailable: {0}")]
    Unavailable(String),

    #[error("External API error: {status_code}")]
    UpstreamError { status_code: u16 },

    #[error("{cause}")]
    SyncFailed { cause: String },

    #[error("Nenhum dado encontrado. Execute POST /importar primeiro.")]
    NoDataYet,
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    /// Prefixes the cause of a `SyncFailed`; typed failures pass unchanged
    pub fn context(self, context: &str) -> Self {
        match self {
            ServiceError::SyncFailed { cause } => ServiceError::SyncFailed {
                cause: format!("{}: {}", context, cause),
            },
            other => other,
        }
    }
}

impl From<ClientError> for ServiceError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NotFound => ServiceError::NotFound,
            ClientError::Forbidden => ServiceError::Forbidden,
            ClientError::Unavailable(reason) => ServiceError::Unavailable(reason),
            ClientError::UpstreamError { status_code } => {
                ServiceError::UpstreamError { status_code }
            }
            decode @ ClientError::Decode(_) => ServiceError::SyncFailed {
                cause: decode.to_string(),
            },
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        ServiceError::SyncFailed {
            cause: err.to_string(),
        }
    }
}
