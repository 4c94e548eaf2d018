use super::{CorrectorError, StructureCorrector};
use crate::format::{detect, Format};

/// Offline correction used when no remote service is configured.
///
/// Adds a root `README.md` and `.gitignore` to text structures that look like
/// software projects. JSON input is returned unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicCorrector;

impl StructureCorrector for BasicCorrector {
    fn correct(&self, text: &str) -> Result<String, CorrectorError> {
        if detect(text) == Format::Json {
            return Ok(text.to_string());
        }

        let mut improved = text.to_string();

        if !improved.contains("README.md")
            && (improved.contains("src/") || improved.contains("package.json"))
        {
            append_line(&mut improved, "README.md");
        }

        if !improved.contains(".gitignore")
            && (improved.contains("src/") || improved.contains("node_modules"))
        {
            append_line(&mut improved, ".gitignore");
        }

        Ok(improved)
    }
}

fn append_line(text: &mut String, line: &str) {
    if !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
    text.push_str(line);
}
