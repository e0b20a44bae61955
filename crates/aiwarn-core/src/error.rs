use thiserror::Error;

#[derive(Debug, Error)]
pub enum AiwarnError {
    #[error("sidecar error: {0}")]
    Sidecar(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AiwarnResult<T> = Result<T, AiwarnError>;
