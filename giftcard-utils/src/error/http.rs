#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("Invalid header")]
    InvalidHeader,
    #[error("request error {0}")]
    ReqError(#[from] reqwest::Error),
    #[error("Received a non-success status: {0}")]
    NonSuccessStatus(reqwest::StatusCode),
}
