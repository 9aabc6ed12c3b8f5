use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Instruction prepended to every user question
pub const SYSTEM_INSTRUCTION: &str = "You are a helpful assistant for a government internship scheme. \
Only answer questions about the internship scheme: eligibility, the application process, skills, \
sectors, locations, stipends and duration. If a question is unrelated, politely say you can only \
help with the internship scheme. Keep answers short, friendly and factual.";

/// Default endpoints, tried in order
pub const DEFAULT_ENDPOINTS: [&str; 3] = [
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent",
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent",
    "https://generativelanguage.googleapis.com/v1/models/gemini-pro:generateContent",
];

pub const DEFAULT_TIMEOUT_SECS: u64 = 8;

/// Errors that can occur when calling the generative API
#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("No API key configured")]
    MissingCredential,

    #[error("No endpoints configured")]
    NoEndpoints,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// `candidates[0].content.parts[0].text`
    fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
            .filter(|t| !t.trim().is_empty())
    }
}

/// Client for a Gemini-style `generateContent` API
///
/// Holds an ordered list of endpoints. Each is tried once with the
/// configured timeout; the first successful answer wins.
pub struct GeminiClient {
    api_key: String,
    endpoints: Vec<String>,
    client: Client,
}

impl GeminiClient {
    /// Create a new client
    pub fn new(api_key: String, endpoints: Vec<String>, timeout: Duration) -> Result<Self, GeminiError> {
        if api_key.trim().is_empty() {
            return Err(GeminiError::MissingCredential);
        }
        if endpoints.is_empty() {
            return Err(GeminiError::NoEndpoints);
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            api_key,
            endpoints,
            client,
        })
    }

    pub fn endpoints(&self) -> &[String] {
        &self.endpoints
    }

    /// Ask the model a question, trying each endpoint in turn
    pub async fn generate(&self, message: &str) -> Result<String, GeminiError> {
        let prompt = format!("{}\n\nUser question: {}", SYSTEM_INSTRUCTION, message);
        let mut last_error = GeminiError::NoEndpoints;

        for endpoint in &self.endpoints {
            match self.call_endpoint(endpoint, &prompt).await {
                Ok(text) => {
                    tracing::debug!("Generative reply from {}", endpoint);
                    return Ok(text);
                }
                Err(e) => {
                    tracing::warn!("Generative endpoint {} failed: {}", endpoint, e);
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }

    async fn call_endpoint(&self, endpoint: &str, prompt: &str) -> Result<String, GeminiError> {
        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GeminiError::ApiError(format!(
                "Generate request failed: {}",
                response.status()
            )));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::InvalidResponse(e.to_string()))?;

        parsed
            .into_text()
            .ok_or_else(|| GeminiError::InvalidResponse("Missing candidates[0].content.parts[0].text".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_requires_credential() {
        let result = GeminiClient::new(
            "  ".to_string(),
            vec![DEFAULT_ENDPOINTS[0].to_string()],
            Duration::from_secs(1),
        );
        assert!(matches!(result, Err(GeminiError::MissingCredential)));
    }

    #[test]
    fn test_client_requires_endpoints() {
        let result = GeminiClient::new("key".to_string(), vec![], Duration::from_secs(1));
        assert!(matches!(result, Err(GeminiError::NoEndpoints)));
    }

    #[test]
    fn test_extracts_nested_text() {
        let json = r#"{"candidates":[{"content":{"parts":[{"text":"Register online."}]}}]}"#;
        let parsed: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.into_text().as_deref(), Some("Register online."));
    }

    #[test]
    fn test_missing_text_is_none() {
        let parsed: GenerateResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(parsed.into_text().is_none());

        let parsed: GenerateResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[{"text":"  "}]}}]}"#).unwrap();
        assert!(parsed.into_text().is_none());
    }
}
