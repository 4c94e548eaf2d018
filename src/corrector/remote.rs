use super::types::{GenerateRequest, GenerateResponse, GenerationConfig};
use super::{CorrectorError, StructureCorrector};
use log::info;
use reqwest::blocking::Client;
use std::time::Duration;

/// Default generate-content endpoint
pub const DEFAULT_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";

/// Asks a hosted text-completion model to repair a structure description
pub struct RemoteCorrector {
    http: Client,
    endpoint: String,
    api_key: String,
    config: GenerationConfig,
}

impl RemoteCorrector {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, CorrectorError> {
        Self::with_timeout(endpoint, api_key, Duration::from_secs(60))
    }

    pub fn with_timeout(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, CorrectorError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            config: GenerationConfig::default(),
        })
    }
}

impl StructureCorrector for RemoteCorrector {
    fn correct(&self, text: &str) -> Result<String, CorrectorError> {
        info!("Requesting structure correction from {}", self.endpoint);
        let request = GenerateRequest::for_prompt(validation_prompt(text), self.config);

        let response = self
            .http
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(CorrectorError::ServerError {
                status: status.as_u16(),
                body,
            });
        }

        let body: GenerateResponse = response.json()?;
        body.first_text().ok_or(CorrectorError::EmptyResponse)
    }
}

/// Prompt asking the model to validate and tidy `structure`
pub fn validation_prompt(structure: &str) -> String {
    format!(
        r#"You validate and repair file/folder structure descriptions.

The input below is either an indented text tree or a JSON document, or only a
short project idea.

- If it is only an idea, produce a realistic structure for it.
- Fix invalid characters, syntax errors and broken nesting.
- Group related files logically and add common project files such as
  README.md, .gitignore or a package manifest where they fit.
- Keep the input's format: indented text stays indented text (two spaces per
  level, directories ending in "/"), JSON stays valid JSON.

Return only the structure, with no explanation, markdown or code fences.

Input:
{}
"#,
        structure
    )
}
