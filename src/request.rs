use crate::corrector::{correct_or_fallback, StructureCorrector};
use crate::generator::{GenerateError, GeneratedArchive, Generator};
use crate::history::{HistoryError, HistoryStore};
use chrono::Utc;
use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Structure content must not be empty")]
    EmptyContent,

    #[error(transparent)]
    History(#[from] HistoryError),

    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// A submitted structure description, optionally named
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StructureRequest {
    #[serde(default)]
    pub name: Option<String>,
    pub content: String,
}

impl StructureRequest {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            name: None,
            content: content.into(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Given name, or `generated-structure-<unix millis>` when missing or blank
    pub fn resolved_name(&self) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("generated-structure-{}", Utc::now().timestamp_millis()),
        }
    }
}

/// Collaborators a request runs against
pub struct RequestContext<'a> {
    pub generator: &'a Generator,
    pub history: Option<&'a HistoryStore>,
    pub corrector: Option<&'a dyn StructureCorrector>,
}

impl<'a> RequestContext<'a> {
    pub fn new(generator: &'a Generator) -> Self {
        Self {
            generator,
            history: None,
            corrector: None,
        }
    }

    pub fn with_history(mut self, history: &'a HistoryStore) -> Self {
        self.history = Some(history);
        self
    }

    pub fn with_corrector(mut self, corrector: &'a dyn StructureCorrector) -> Self {
        self.corrector = Some(corrector);
        self
    }
}

/// Archive ready to hand back, with its download name
#[derive(Debug, Clone)]
pub struct Download {
    pub file_name: String,
    pub archive: GeneratedArchive,
    pub history_id: Option<i64>,
}

/// Validate, record, correct and compile one request
pub fn handle(
    request: &StructureRequest,
    owner: &str,
    ctx: &RequestContext<'_>,
) -> Result<Download, RequestError> {
    if request.content.trim().is_empty() {
        return Err(RequestError::EmptyContent);
    }

    let name = request.resolved_name();

    let history_id = match ctx.history {
        Some(history) => Some(history.record(&name, &request.content, owner)?),
        None => None,
    };

    let content = match ctx.corrector {
        Some(corrector) => correct_or_fallback(corrector, &request.content),
        None => request.content.clone(),
    };

    let archive = ctx.generator.generate(&content)?;
    info!("Prepared {} for {}", name, owner);

    Ok(Download {
        file_name: download_name(&name),
        archive,
        history_id,
    })
}

/// `<name>.zip`, with path separators replaced so the name stays a single segment
pub fn download_name(name: &str) -> String {
    let safe: String = name
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '-' } else { c })
        .collect();
    format!("{}.zip", safe)
}
