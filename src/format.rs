use serde::{Deserialize, Serialize};
use std::fmt;

/// Input family of a structure description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    Json,
    IndentedText,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::IndentedText => "text",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Classify `input` as JSON or indented text.
///
/// Any document `serde_json` accepts counts as JSON, including bare scalars
/// and arrays. This never fails: anything else is indented text.
pub fn detect(input: &str) -> Format {
    match serde_json::from_str::<serde_json::Value>(input) {
        Ok(_) => Format::Json,
        Err(_) => Format::IndentedText,
    }
}

/// Raw input plus the format it was classified as
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureDescription {
    text: String,
    format: Format,
}

impl StructureDescription {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let format = detect(&text);
        Self { text, format }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn format(&self) -> Format {
        self.format
    }
}
