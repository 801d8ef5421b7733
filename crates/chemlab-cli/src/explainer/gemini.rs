use super::Explainer;
use crate::config::ExplanationSettings;
use crate::error::{CliError, Result};
use async_trait::async_trait;
use chemlab::engine::explain::{ExplanationRequest, UnavailableReason};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Client for the `generateContent` endpoint of the Gemini API.
pub struct GeminiExplainer {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    language: String,
    api_key: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize, Debug, Default)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize, Debug)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate, or `None` when it has no text.
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|part| part.text).collect();
        let trimmed = text.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

impl GeminiExplainer {
    pub fn new(settings: &ExplanationSettings, api_key: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()?;
        Ok(Self {
            client,
            endpoint: settings.endpoint.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            language: settings.language.clone(),
            api_key,
        })
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    async fn generate(&self, prompt: &str) -> Result<Option<String>> {
        let body = GenerateRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
        };
        debug!("POST {}", self.url());
        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        let parsed: GenerateResponse = response.json().await.map_err(CliError::Network)?;
        Ok(parsed.into_text())
    }
}

#[async_trait]
impl Explainer for GeminiExplainer {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn explain(&self, request: &ExplanationRequest) -> String {
        match self.generate(&request.prompt(&self.language)).await {
            Ok(Some(text)) => text,
            Ok(None) => {
                warn!("Explanation service returned no text for '{}'.", request.subject());
                request.fallback(UnavailableReason::EmptyResponse).to_string()
            }
            Err(e) => {
                warn!("Explanation request for '{}' failed: {}", request.subject(), e);
                request.fallback(UnavailableReason::Failed).to_string()
            }
        }
    }
}
