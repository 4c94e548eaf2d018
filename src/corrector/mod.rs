mod basic;
mod error;
mod remote;
mod types;


pub use basic::BasicCorrector;
pub use error::CorrectorError;
pub use remote::{validation_prompt, RemoteCorrector, DEFAULT_ENDPOINT};
pub use types::{GenerateRequest, GenerateResponse, GenerationConfig};

use crate::format::detect;
use log::{info, warn};

/// Optional collaborator that rewrites a structure description before it is
/// built. Implementations must keep the input's format family.
pub trait StructureCorrector {
    fn correct(&self, text: &str) -> Result<String, CorrectorError>;
}

/// Run `corrector`, falling back to `text` unchanged when the result is an
/// error, empty, or no longer in the same format as the input
pub fn correct_or_fallback(corrector: &dyn StructureCorrector, text: &str) -> String {
    match corrector.correct(text) {
        Ok(corrected) if corrected.trim().is_empty() => {
            warn!("Corrector returned an empty structure; using the original");
            text.to_string()
        }
        Ok(corrected) => {
            let (before, after) = (detect(text), detect(&corrected));
            if before != after {
                warn!(
                    "Corrector changed format from {} to {}; using the original",
                    before, after
                );
                text.to_string()
            } else {
                info!("Structure corrected");
                corrected
            }
        }
        Err(e) => {
            warn!("Structure correction failed: {}; using the original", e);
            text.to_string()
        }
    }
}

/// Remote service when an API key is configured, offline heuristics otherwise
pub fn corrector_for(
    api_key: Option<&str>,
    endpoint: Option<&str>,
) -> Result<Box<dyn StructureCorrector>, CorrectorError> {
    match api_key.map(str::trim).filter(|key| !key.is_empty()) {
        Some(key) => {
            let endpoint = endpoint.unwrap_or(DEFAULT_ENDPOINT);
            Ok(Box::new(RemoteCorrector::new(endpoint, key)?))
        }
        None => {
            warn!("No correction API key configured; using basic improvements");
            Ok(Box::new(BasicCorrector))
        }
    }
}
