mod entry;
mod error;

#[cfg(test)]
mod tests;

pub use entry::ArchiveEntry;
pub use error::ArchiveError;

use crate::security::PathSanitizer;
use chrono::{Datelike, Timelike};
use log::{debug, info};
use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;
use walkdir::WalkDir;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// ZIP bytes plus the number of entries written
#[derive(Debug, Clone)]
pub struct Archived {
    pub bytes: Vec<u8>,
    pub entry_count: usize,
}

/// Walk `root` and zip everything beneath it, empty directories included
pub fn archive(root: &Path) -> Result<Archived, ArchiveError> {
    let entries = collect_entries(root)?;
    let bytes = write_zip(&entries)?;
    info!(
        "Archived {} entries from {} ({} bytes)",
        entries.len(),
        root.display(),
        bytes.len()
    );
    Ok(Archived {
        bytes,
        entry_count: entries.len(),
    })
}

/// Every directory and regular file under `root` (not `root` itself).
///
/// Entries come in walk order with siblings sorted by name, so a directory
/// always precedes its children.
pub fn collect_entries(root: &Path) -> Result<Vec<ArchiveEntry>, ArchiveError> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        let Some(name) = PathSanitizer::relative_name(root, entry.path()) else {
            continue;
        };

        let file_type = entry.file_type();
        if file_type.is_dir() {
            entries.push(ArchiveEntry::directory(&name));
        } else if file_type.is_file() {
            let bytes = fs::read(entry.path()).map_err(|source| ArchiveError::Read {
                path: entry.path().to_path_buf(),
                source,
            })?;
            entries.push(ArchiveEntry::file(name, bytes));
        } else {
            debug!("Skipping special file {}", entry.path().display());
        }
    }

    Ok(entries)
}

/// Serialize entries into an in-memory ZIP
pub fn write_zip(entries: &[ArchiveEntry]) -> Result<Vec<u8>, ArchiveError> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    let now = chrono::Local::now();
    let modified = zip::DateTime::from_date_and_time(
        now.year() as u16,
        now.month() as u8,
        now.day() as u8,
        now.hour() as u8,
        now.minute() as u8,
        now.second() as u8,
    )
    .unwrap_or_default();

    let file_options: FileOptions<'_, ()> = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o644)
        .last_modified_time(modified);
    let dir_options: FileOptions<'_, ()> = FileOptions::default()
        .unix_permissions(0o755)
        .last_modified_time(modified);

    for entry in entries {
        if entry.is_directory {
            zip.add_directory(entry.relative_path.clone(), dir_options)?;
        } else {
            zip.start_file(entry.relative_path.clone(), file_options)?;
            if let Some(bytes) = &entry.bytes {
                zip.write_all(bytes)?;
            }
        }
    }

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}
