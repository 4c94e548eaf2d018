/// One record in the output archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Path relative to the archived root, `/`-separated. Directories end in `/`.
    pub relative_path: String,
    pub is_directory: bool,
    /// File contents; `None` for directories
    pub bytes: Option<Vec<u8>>,
}

impl ArchiveEntry {
    pub fn directory(relative_path: &str) -> Self {
        Self {
            relative_path: format!("{}/", relative_path.trim_end_matches('/')),
            is_directory: true,
            bytes: None,
        }
    }

    pub fn file(relative_path: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            relative_path: relative_path.into(),
            is_directory: false,
            bytes: Some(bytes),
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.as_ref().map_or(0, Vec::len)
    }
}
