use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScratchError {
    #[error("Failed to create scratch directory {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
