use std::future::Future;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::{ProviderError, ProviderErrorKind};

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Seam between the generation pipeline and the outbound provider. The
/// pipeline only ever needs prompt-in, text-out, which keeps it testable with
/// a canned double.
pub trait TextGenerator {
    fn generate_text(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<String, ProviderError>> + Send;
}

/// Thin client for the Gemini `generateContent` REST endpoint. One request
/// per call, no retries; retry policy belongs to whoever invokes the
/// pipeline.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read credentials and model selection from the environment. The two key
    /// names match what the frontend deployment already configures.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = dotenvy::var("GOOGLE_GENERATIVE_AI_API_KEY")
            .or_else(|_| dotenvy::var("GEMINI_API"))
            .map_err(|_| anyhow!("set GOOGLE_GENERATIVE_AI_API_KEY or GEMINI_API"))?;
        let model = dotenvy::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base_url =
            dotenvy::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self::new(api_key, model, base_url))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn request_completion(&self, prompt: &str) -> Result<String, ProviderError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                ProviderError::classified(
                    format!("gemini request failed: {e}"),
                    ProviderErrorKind::Transport,
                )
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let text = response.text().await.unwrap_or_default();
            return Err(ProviderError::rate_limited(format!(
                "gemini returned 429 Too Many Requests: {text}"
            )));
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ProviderError::classified(
                format!("gemini returned {status}: {text}"),
                ProviderErrorKind::Unknown,
            ));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            ProviderError::classified(
                format!("gemini response body unreadable: {e}"),
                ProviderErrorKind::Unknown,
            )
        })?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(ProviderError::classified(
                "gemini returned no candidate text",
                ProviderErrorKind::Unknown,
            ));
        }

        Ok(text)
    }
}

impl TextGenerator for GeminiClient {
    async fn generate_text(&self, prompt: &str) -> Result<String, ProviderError> {
        self.request_completion(prompt).await
    }
}

// -----------------------------
// Wire shapes
// -----------------------------

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
}

#[derive(Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_text_is_concatenated_across_parts() {
        let raw = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "{\"a\""}, {"text": ": 1}"}]}}
            ]
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        let text: String = parsed.candidates[0]
            .content
            .parts
            .iter()
            .filter_map(|p| p.text.clone())
            .collect();
        assert_eq!(text, "{\"a\": 1}");
    }

    #[test]
    fn missing_candidates_deserialize_to_empty() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.candidates.is_empty());
    }
}
