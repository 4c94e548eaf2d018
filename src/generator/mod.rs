mod error;


pub use error::GenerateError;

use crate::archive;
use crate::builder::{builder_for, BuildOptions, BuildStats, IndentStyle};
use crate::format::{Format, StructureDescription};
use crate::listing;
use crate::scratch::{self, DEFAULT_PREFIX};
use log::info;
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// Archive bytes plus what went into them
#[derive(Debug, Clone)]
pub struct GeneratedArchive {
    pub bytes: Vec<u8>,
    pub format: Format,
    pub stats: BuildStats,
    pub entry_count: usize,
    /// Hex SHA-256 of `bytes`
    pub sha256: String,
}

/// Materialized tree rendered without archiving
#[derive(Debug, Clone)]
pub struct Preview {
    pub format: Format,
    pub stats: BuildStats,
    pub listing: Value,
    pub text: String,
}

/// Compiles structure descriptions into archives.
///
/// Every call works in its own scratch directory, which is gone again by the
/// time the call returns.
#[derive(Debug, Clone)]
pub struct Generator {
    scratch_parent: PathBuf,
    scratch_prefix: String,
    options: BuildOptions,
}

/// Builder for configuring a [`Generator`]
#[derive(Debug, Clone)]
pub struct GeneratorBuilder {
    scratch_parent: PathBuf,
    scratch_prefix: String,
    options: BuildOptions,
}

impl GeneratorBuilder {
    /// Defaults: system temp dir, space = 1 unit, tab = 4 units, boilerplate only
    pub fn new() -> Self {
        Self {
            scratch_parent: std::env::temp_dir(),
            scratch_prefix: DEFAULT_PREFIX.to_string(),
            options: BuildOptions::default(),
        }
    }

    /// Directory under which per-request scratch directories are created
    pub fn scratch_parent(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_parent = dir.into();
        self
    }

    pub fn scratch_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.scratch_prefix = prefix.into();
        self
    }

    pub fn indent(mut self, indent: IndentStyle) -> Self {
        self.options.indent = indent;
        self
    }

    /// Use non-empty JSON string values as file content
    pub fn inline_json_content(mut self, enabled: bool) -> Self {
        self.options.inline_json_content = enabled;
        self
    }

    pub fn build(self) -> Generator {
        Generator {
            scratch_parent: self.scratch_parent,
            scratch_prefix: self.scratch_prefix,
            options: self.options,
        }
    }
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Generator {
    fn default() -> Self {
        GeneratorBuilder::new().build()
    }
}

impl Generator {
    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::new()
    }

    /// Compile `text` into a ZIP archive
    pub fn generate(&self, text: &str) -> Result<GeneratedArchive, GenerateError> {
        let description = StructureDescription::new(strip_bom(text));
        info!("Generating structure from {} input", description.format());

        self.in_scratch(|root| {
            let stats = self.build_into(&description, root)?;
            let archived = archive::archive(root)?;
            let sha256 = hex::encode(Sha256::digest(&archived.bytes));
            info!("Archive sha256 {}", sha256);

            Ok(GeneratedArchive {
                bytes: archived.bytes,
                format: description.format(),
                stats,
                entry_count: archived.entry_count,
                sha256,
            })
        })
    }

    /// Materialize `text` and describe the result instead of archiving it
    pub fn preview(&self, text: &str) -> Result<Preview, GenerateError> {
        let description = StructureDescription::new(strip_bom(text));

        self.in_scratch(|root| {
            let stats = self.build_into(&description, root)?;
            Ok(Preview {
                format: description.format(),
                stats,
                listing: listing::tree_to_json(root)?,
                text: listing::render_tree(root)?,
            })
        })
    }

    fn build_into(
        &self,
        description: &StructureDescription,
        root: &Path,
    ) -> Result<BuildStats, GenerateError> {
        let builder = builder_for(description.format(), self.options);
        let stats = builder.build(description.text(), root)?;
        info!(
            "Built {} directories and {} files ({} duplicates, {} skipped)",
            stats.directories, stats.files, stats.duplicates, stats.skipped
        );
        Ok(stats)
    }

    fn in_scratch<T>(
        &self,
        f: impl FnOnce(&Path) -> Result<T, GenerateError>,
    ) -> Result<T, GenerateError> {
        scratch::with_scratch_dir(&self.scratch_parent, &self.scratch_prefix, f)
    }
}

/// Compile `text` into ZIP bytes with the default configuration
pub fn generate(text: &str) -> Result<Vec<u8>, GenerateError> {
    Generator::default().generate(text).map(|archive| archive.bytes)
}

fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}
