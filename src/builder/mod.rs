mod error;
mod json;
mod text;


pub use error::BuildError;
pub use json::JsonTreeBuilder;
pub use text::{IndentStyle, TextTreeBuilder};

use crate::format::Format;
use crate::materializer::{self, Materialized};
use crate::security::PathSanitizer;
use log::warn;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Turns one structure description into real entries under a root directory
pub trait TreeBuilder {
    /// Build the tree described by `input` beneath `root`
    fn build(&self, input: &str, root: &Path) -> Result<BuildStats, BuildError>;
}

/// Options shared by both builder variants
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    pub indent: IndentStyle,
    pub inline_json_content: bool,
}

/// Pick the builder for a detected format
pub fn builder_for(format: Format, options: BuildOptions) -> Box<dyn TreeBuilder> {
    match format {
        Format::Json => Box::new(JsonTreeBuilder::new().inline_content(options.inline_json_content)),
        Format::IndentedText => Box::new(TextTreeBuilder::new(options.indent)),
    }
}

/// Counters for one build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BuildStats {
    pub directories: usize,
    pub files: usize,
    /// File declarations that named an existing entry
    pub duplicates: usize,
    /// Names rejected by sanitization or blocked by an existing file
    pub skipped: usize,
}

/// What a bare name most likely denotes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// Guess whether `name` is a file or a directory.
///
/// A trailing `/` or `\` forces a directory. Otherwise a `.` in the last
/// segment means a file. Dotted directory names such as `com.example.app`
/// are therefore read as files unless written with a trailing slash.
pub fn classify(name: &str) -> EntryKind {
    let name = name.trim();
    if name.ends_with('/') || name.ends_with('\\') {
        return EntryKind::Directory;
    }

    let last = name
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or(name);

    if last.contains('.') {
        EntryKind::File
    } else {
        EntryKind::Directory
    }
}

/// Writes entries for a builder, confined to `root`, and keeps the counters
pub(crate) struct TreeWriter<'a> {
    root: &'a Path,
    stats: BuildStats,
}

impl<'a> TreeWriter<'a> {
    pub(crate) fn new(root: &'a Path) -> Self {
        Self {
            root,
            stats: BuildStats::default(),
        }
    }

    /// Sanitize `raw` and join it onto `parent`; `None` means skip it
    pub(crate) fn resolve(&mut self, parent: &Path, raw: &str) -> Option<PathBuf> {
        match PathSanitizer::resolve(parent, raw) {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("Skipping entry {:?}: {}", raw, e);
                self.stats.skipped += 1;
                None
            }
        }
    }

    /// Create a directory. Returns `false` when an existing file is in the way.
    pub(crate) fn directory(&mut self, path: &Path) -> Result<bool, BuildError> {
        if let Some(blocker) = self.file_in_chain(path) {
            warn!(
                "Skipping directory {}: {} is a file",
                path.display(),
                blocker.display()
            );
            self.stats.skipped += 1;
            return Ok(false);
        }

        materializer::ensure_dir(path)?;
        self.stats.directories += 1;
        Ok(true)
    }

    /// Materialize a file, optionally with explicit content
    pub(crate) fn file(&mut self, path: &Path, content: Option<&str>) -> Result<(), BuildError> {
        let parent = path.parent().unwrap_or(self.root);
        if let Some(blocker) = self.file_in_chain(parent) {
            warn!(
                "Skipping file {}: {} is a file",
                path.display(),
                blocker.display()
            );
            self.stats.skipped += 1;
            return Ok(());
        }

        match materializer::materialize_with(path, content)? {
            Materialized::Created => self.stats.files += 1,
            Materialized::AlreadyExists => self.stats.duplicates += 1,
        }
        Ok(())
    }

    pub(crate) fn finish(self) -> BuildStats {
        self.stats
    }

    /// First existing non-directory between `dir` (inclusive) and the root
    fn file_in_chain(&self, dir: &Path) -> Option<PathBuf> {
        dir.ancestors()
            .take_while(|a| *a != self.root && a.starts_with(self.root))
            .find(|a| a.is_file())
            .map(Path::to_path_buf)
    }
}
