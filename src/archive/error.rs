use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("Failed to walk tree: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write ZIP archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Failed to write ZIP entry: {0}")]
    Io(#[from] std::io::Error),
}
