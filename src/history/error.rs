use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("History record {0} not found")]
    NotFound(i64),

    #[error("History record {id} does not belong to {owner}")]
    Unauthorized { id: i64, owner: String },

    #[error("Invalid timestamp on history record {id}: {value}")]
    Timestamp { id: i64, value: String },

    #[error("History storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}
