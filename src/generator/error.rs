use crate::archive::ArchiveError;
use crate::builder::BuildError;
use crate::scratch::ScratchError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Scratch(#[from] ScratchError),

    #[error("Failed to build structure: {0}")]
    Build(#[from] BuildError),

    #[error("Failed to archive structure: {0}")]
    Archive(#[from] ArchiveError),

    #[error("Failed to list structure: {0}")]
    Listing(#[from] walkdir::Error),
}
