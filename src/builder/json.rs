use super::{BuildError, BuildStats, TreeBuilder, TreeWriter};
use log::{debug, warn};
use serde_json::{Map, Value};
use std::path::Path;

/// Builds a tree from a JSON document.
///
/// Objects become directories, arrays become directories of the files named
/// by their string elements, everything else becomes a file.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonTreeBuilder {
    inline_content: bool,
}

impl JsonTreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write non-empty string values as file content instead of boilerplate
    pub fn inline_content(mut self, enabled: bool) -> Self {
        self.inline_content = enabled;
        self
    }

    /// Build from an already parsed document.
    ///
    /// A top-level value that is not an object builds nothing.
    pub fn build_value(&self, node: &Value, root: &Path) -> Result<BuildStats, BuildError> {
        let mut writer = TreeWriter::new(root);

        match node {
            Value::Object(fields) => self.walk(fields, root, &mut writer)?,
            other => warn!(
                "Top-level JSON is {} rather than an object; nothing to build",
                kind_of(other)
            ),
        }

        Ok(writer.finish())
    }

    fn walk(
        &self,
        fields: &Map<String, Value>,
        dir: &Path,
        writer: &mut TreeWriter<'_>,
    ) -> Result<(), BuildError> {
        for (name, value) in fields {
            let Some(path) = writer.resolve(dir, name) else {
                continue;
            };

            match value {
                Value::Object(children) => {
                    if writer.directory(&path)? {
                        self.walk(children, &path, writer)?;
                    }
                }
                Value::Array(items) => {
                    if !writer.directory(&path)? {
                        continue;
                    }
                    for item in items {
                        match item {
                            Value::String(file_name) => {
                                if let Some(file_path) = writer.resolve(&path, file_name) {
                                    writer.file(&file_path, None)?;
                                }
                            }
                            other => debug!(
                                "Ignoring {} element in array {:?}",
                                kind_of(other),
                                name
                            ),
                        }
                    }
                }
                Value::String(text) if self.inline_content && !text.is_empty() => {
                    writer.file(&path, Some(text))?;
                }
                _ => writer.file(&path, None)?,
            }
        }

        Ok(())
    }
}

impl TreeBuilder for JsonTreeBuilder {
    fn build(&self, input: &str, root: &Path) -> Result<BuildStats, BuildError> {
        let document: Value = serde_json::from_str(input)?;
        self.build_value(&document, root)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
