use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::GenerationConfig;
use crate::error::{Error, Result};

/// Request body for the generate route.
#[derive(Clone, Debug, Serialize)]
pub struct GenerateRequest {
    pub prompt: Arc<str>,
    pub max_new_tokens: u32,
    pub auto_max_new_tokens: bool,
    pub max_tokens_second: u32,
}

impl GenerateRequest {
    pub fn new(prompt: impl Into<Arc<str>>, config: &GenerationConfig) -> Self {
        GenerateRequest {
            prompt: prompt.into(),
            max_new_tokens: config.max_new_tokens,
            auto_max_new_tokens: config.auto_max_new_tokens,
            max_tokens_second: config.max_tokens_second,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    results: Vec<GenerationResult>,
}

#[derive(Debug, Deserialize)]
struct GenerationResult {
    text: Vec<Choice>,
}

/// One generated candidate.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Choice {
    pub text: String,
}

/// Decode a raw response body into its generated choices.
///
/// Choices live under the first `results` entry; a body that decodes to
/// anything else is a shape error, and no partial list survives one.
pub fn parse_choices(body: &str) -> Result<Vec<Choice>> {
    let response: GenerateResponse =
        serde_json::from_str(body).map_err(|source| Error::ResponseShape { source })?;

    response
        .results
        .into_iter()
        .next()
        .map(|result| result.text)
        .ok_or(Error::EmptyResults)
}
