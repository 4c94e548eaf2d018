use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorrectorError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Server returned error status {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Response contained no structure text")]
    EmptyResponse,
}
