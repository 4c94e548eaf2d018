use std::path::{Component, Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PathError {
    #[error("Empty name")]
    Empty,

    #[error("Parent directory traversal not allowed: {0}")]
    Traversal(String),

    #[error("No valid components: {0}")]
    NoComponents(String),

    #[error("Invalid UTF-8 in name: {0}")]
    InvalidUtf8(String),

    #[error("Control character in name: {0:?}")]
    ControlCharacter(String),

    #[error("Name segment longer than 255 bytes: {0}")]
    SegmentTooLong(String),
}

/// Longest single path segment most filesystems accept, in bytes
pub const MAX_SEGMENT_LEN: usize = 255;

pub struct PathSanitizer;

impl PathSanitizer {
    /// Sanitize a user-authored entry name so it can only resolve beneath
    /// the directory it is joined onto:
    /// - `\` is treated as a separator on every platform
    /// - leading roots and drive prefixes are stripped (`/src` -> `src`)
    /// - `.` components are dropped
    /// - any `..` component rejects the whole name
    /// - control characters (including NUL) and segments longer than
    ///   [`MAX_SEGMENT_LEN`] bytes reject the whole name
    ///
    /// Returns the normalized relative name joined with forward slashes.
    pub fn sanitize(raw: &str) -> Result<String, PathError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PathError::Empty);
        }

        if trimmed.chars().any(char::is_control) {
            return Err(PathError::ControlCharacter(raw.to_string()));
        }

        let unified = trimmed.replace('\\', "/");
        let mut components = Vec::new();

        for component in Path::new(&unified).components() {
            match component {
                Component::Prefix(_) | Component::RootDir | Component::CurDir => continue,
                Component::ParentDir => {
                    return Err(PathError::Traversal(raw.to_string()));
                }
                Component::Normal(part) => {
                    let part_str = part
                        .to_str()
                        .ok_or_else(|| PathError::InvalidUtf8(format!("{:?}", part)))?;
                    let part_str = part_str.trim();
                    if part_str.len() > MAX_SEGMENT_LEN {
                        return Err(PathError::SegmentTooLong(raw.to_string()));
                    }
                    if !part_str.is_empty() {
                        components.push(part_str);
                    }
                }
            }
        }

        if components.is_empty() {
            return Err(PathError::NoComponents(raw.to_string()));
        }

        Ok(components.join("/"))
    }

    /// Sanitize `raw` and join it onto `base`.
    pub fn resolve(base: &Path, raw: &str) -> Result<PathBuf, PathError> {
        let relative = Self::sanitize(raw)?;
        Ok(relative.split('/').fold(base.to_path_buf(), |acc, part| acc.join(part)))
    }

    /// Render `path` relative to `root` with forward slashes, or `None` when
    /// `path` is not beneath `root` (or is `root` itself).
    pub fn relative_name(root: &Path, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(root).ok()?;
        let parts: Vec<String> = relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join("/"))
        }
    }
}
