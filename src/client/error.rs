use thiserror::Error;

use crate::studio::result::ShapeError;

pub type Result<T> = std::result::Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request to parser service failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("parser service did not answer within {0:?}")]
    Timeout(std::time::Duration),

    #[error("invalid parser service URL: {0}")]
    InvalidUrl(String),

    #[error("parser service returned HTTP {status}: {body}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("malformed response body: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("unexpected response shape: {0}")]
    InvalidShape(#[from] ShapeError),

    /// The service understood the request and refused it.
    #[error("{0}")]
    Rejected(String),
}

impl ServiceError {
    /// Everything except an explicit rejection from the service.
    pub fn is_transport(&self) -> bool {
        !matches!(self, ServiceError::Rejected(_))
    }
}
