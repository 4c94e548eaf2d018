use crate::materializer::MaterializeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    Materialize(#[from] MaterializeError),

    #[error("Failed to parse JSON structure: {0}")]
    Json(#[from] serde_json::Error),
}
