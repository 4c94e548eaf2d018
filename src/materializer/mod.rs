mod boilerplate;
mod error;


pub use boilerplate::{boilerplate_for, extension_of, known_extensions};
pub use error::MaterializeError;

use log::debug;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Outcome of a materialize call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Materialized {
    Created,
    AlreadyExists,
}

/// Create the file at `path` with extension boilerplate.
///
/// Ancestors are created as needed. An existing entry is never touched, so
/// calling this twice for the same path leaves the first content in place.
pub fn materialize(path: &Path) -> Result<Materialized, MaterializeError> {
    materialize_with(path, None)
}

/// Like [`materialize`], but `content` replaces the boilerplate when given.
pub fn materialize_with(
    path: &Path,
    content: Option<&str>,
) -> Result<Materialized, MaterializeError> {
    ensure_dir(path.parent().unwrap_or(Path::new("")))?;

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!("Skipping existing entry {}", path.display());
            return Ok(Materialized::AlreadyExists);
        }
        Err(source) => {
            return Err(MaterializeError::CreateFile {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let body = match content {
        Some(text) => text.to_string(),
        None => {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            boilerplate_for(&file_name)
        }
    };

    if !body.is_empty() {
        file.write_all(body.as_bytes())
            .map_err(|source| MaterializeError::Write {
                path: path.to_path_buf(),
                source,
            })?;
    }

    Ok(Materialized::Created)
}

/// Create `dir` and all of its ancestors
pub fn ensure_dir(dir: &Path) -> Result<(), MaterializeError> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|source| MaterializeError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}
