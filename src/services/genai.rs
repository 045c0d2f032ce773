// SPDX-License-Identifier: MIT

//! Generative-language API client.
//!
//! Thin typed wrapper over the `generateContent` endpoint. One attempt
//! per call, no retry: callers substitute fallback data on failure.

use crate::error::AppError;
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Generative-language API client.
#[derive(Clone)]
pub struct ModelClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl ModelClient {
    /// Create a client. Without an API key the client is disabled and
    /// every call reports `ModelApi`, pushing callers onto the fallback
    /// path.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// A client with no credentials, for tests and keyless deployments.
    pub fn new_disabled() -> Self {
        Self::new(None)
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    /// Submit a prompt and return the model's raw text output.
    pub async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        let Some(api_key) = &self.api_key else {
            return Err(AppError::ModelApi("No API key configured".to_string()));
        };

        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let payload = GenerateRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
        };

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::ModelApi(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            if status.as_u16() == 429 {
                tracing::warn!("Model API rate limit hit (429)");
            }
            return Err(AppError::ModelApi(format!("HTTP {}: {}", status, body)));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| AppError::ModelApi(format!("JSON parse error: {}", e)))?;

        body.candidates
            .unwrap_or_default()
            .into_iter()
            .find_map(Candidate::into_text)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| AppError::ModelApi("Empty response from model".to_string()))
    }
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

#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl Candidate {
    fn into_text(self) -> Option<String> {
        self.content.and_then(|content| {
            content.parts.unwrap_or_default().into_iter().find_map(|p| {
                p.text
                    .map(|text| text.trim().to_string())
                    .filter(|text| !text.is_empty())
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_client_reports_model_error() {
        let client = ModelClient::new_disabled();
        assert!(!client.is_enabled());

        let err = client.generate("hello").await.unwrap_err();
        assert!(matches!(err, AppError::ModelApi(_)));
    }

    #[test]
    fn test_candidate_text_extraction() {
        let raw = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "  {\"a\":1}  "}]}}
            ]
        }"#;
        let parsed: GenerateResponse = serde_json::from_str(raw).unwrap();
        let text = parsed
            .candidates
            .unwrap()
            .into_iter()
            .find_map(Candidate::into_text)
            .unwrap();
        assert_eq!(text, "{\"a\":1}");
    }
}
