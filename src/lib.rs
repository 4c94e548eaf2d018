// Public API exports
pub mod archive;
pub mod builder;
pub mod corrector;
pub mod format;
pub mod generator;
pub mod history;
pub mod listing;
pub mod materializer;
pub mod request;
pub mod scratch;
pub mod security;
pub mod templates;

// Re-export main types for convenience
pub use format::{detect, Format, StructureDescription};
pub use generator::{
    generate, GenerateError, GeneratedArchive, Generator, GeneratorBuilder, Preview,
};
pub use security::PathSanitizer;

pub use builder::{
    builder_for, classify, BuildOptions, BuildStats, EntryKind, IndentStyle, TreeBuilder,
};

pub use corrector::{correct_or_fallback, BasicCorrector, RemoteCorrector, StructureCorrector};

pub use history::{HistoryError, HistoryRecord, HistoryStore};

pub use request::{handle, Download, RequestContext, RequestError, StructureRequest};

pub use templates::Template;
