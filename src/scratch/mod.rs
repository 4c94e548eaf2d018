mod error;

#[cfg(test)]
mod tests;

pub use error::ScratchError;

use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;
use walkdir::WalkDir;

/// Default prefix for scratch directory names
pub const DEFAULT_PREFIX: &str = "file-structure-";

/// A private, uniquely named directory owned by one generation request.
///
/// The directory and everything beneath it is removed when the value is
/// dropped, whether the request succeeded, failed or panicked.
#[derive(Debug)]
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    /// Create a fresh directory under the system temp dir
    pub fn new() -> Result<Self, ScratchError> {
        Self::new_in(std::env::temp_dir(), DEFAULT_PREFIX)
    }

    /// Create a fresh directory named `<prefix><uuid>` under `parent`
    pub fn new_in(parent: impl AsRef<Path>, prefix: &str) -> Result<Self, ScratchError> {
        let parent = parent.as_ref();
        fs::create_dir_all(parent).map_err(|source| ScratchError::Create {
            path: parent.to_path_buf(),
            source,
        })?;

        let path = parent.join(format!("{}{}", prefix, Uuid::new_v4().simple()));
        create_private_dir(&path).map_err(|source| ScratchError::Create {
            path: path.clone(),
            source,
        })?;

        debug!("Created scratch directory {}", path.display());
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Best-effort recursive delete, deepest entries first.
    ///
    /// Returns the number of entries that could not be removed. Failures are
    /// logged and never escalated.
    pub fn cleanup(&self) -> usize {
        if !self.path.exists() {
            return 0;
        }

        let mut failures = 0;
        for entry in WalkDir::new(&self.path).contents_first(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Failed to walk scratch entry: {}", e);
                    failures += 1;
                    continue;
                }
            };

            let result = if entry.file_type().is_dir() {
                fs::remove_dir(entry.path())
            } else {
                fs::remove_file(entry.path())
            };

            if let Err(e) = result {
                warn!("Failed to delete path {}: {}", entry.path().display(), e);
                failures += 1;
            }
        }

        if failures == 0 {
            debug!("Removed scratch directory {}", self.path.display());
        }
        failures
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Run `f` inside a fresh scratch directory under `parent`.
///
/// The directory is deleted before this returns. The result is whatever `f`
/// returned; cleanup problems are only logged.
pub fn with_scratch_dir<T, E, F>(parent: &Path, prefix: &str, f: F) -> Result<T, E>
where
    F: FnOnce(&Path) -> Result<T, E>,
    E: From<ScratchError>,
{
    let scratch = ScratchDir::new_in(parent, prefix)?;
    let result = f(scratch.path());
    drop(scratch);
    result
}

#[cfg(unix)]
fn create_private_dir(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().mode(0o700).create(path)
}

#[cfg(not(unix))]
fn create_private_dir(path: &Path) -> std::io::Result<()> {
    fs::DirBuilder::new().create(path)
}
