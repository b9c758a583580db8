use thiserror::Error;

/// Failure talking to the film database
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
}

pub type ApiResult<T> = Result<T, ApiError>;
