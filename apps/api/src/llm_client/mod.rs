/// LLM Client — the single point of entry for text-generation calls.
///
/// No other module may call the generation API directly; the suggestion pass
/// reaches it through the `SuggestionProvider` trait, which `LlmClient`
/// implements.
///
/// Model: gemini-1.5-flash (hardcoded — do not make configurable to prevent drift)
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// The model used for all generation calls.
pub const MODEL: &str = "gemini-1.5-flash";

/// Sampling parameters sent with every request.
pub const TEMPERATURE: f32 = 0.7;
pub const TOP_P: f32 = 0.9;
pub const TOP_K: u32 = 50;
pub const MAX_OUTPUT_TOKENS: u32 = 150;
const RESPONSE_MIME_TYPE: &str = "text/plain";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("GEMINI_API_KEY is not configured")]
    MissingApiKey,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
    top_k: u32,
    max_output_tokens: u32,
    response_mime_type: &'static str,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: TEMPERATURE,
            top_p: TOP_P,
            top_k: TOP_K,
            max_output_tokens: MAX_OUTPUT_TOKENS,
            response_mime_type: RESPONSE_MIME_TYPE,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
pub struct ContentPart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usage {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl LlmResponse {
    /// Concatenated text of the first candidate's parts.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// The single LLM client used by the service.
/// Wraps the Gemini `generateContent` API. Calls are bounded by the configured
/// timeout and are never retried.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: Option<String>,
}

impl LlmClient {
    pub fn new(api_key: Option<String>, timeout: Duration) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
        })
    }

    /// Makes a raw call to the generation API, returning the full response object.
    pub async fn call(&self, prompt: &str) -> Result<LlmResponse, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let request_body = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig::default(),
        };

        let response = self
            .client
            .post(format!("{GEMINI_API_BASE}/{MODEL}:generateContent"))
            .header("x-goog-api-key", api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: parse_error_message(body),
            });
        }

        let llm_response: LlmResponse = serde_json::from_str(&response.text().await?)?;

        if let Some(usage) = &llm_response.usage_metadata {
            debug!(
                "LLM call succeeded: prompt_tokens={}, output_tokens={}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        Ok(llm_response)
    }

    /// Calls the LLM and returns the generated text.
    pub async fn generate_text(&self, prompt: &str) -> Result<String, LlmError> {
        self.call(prompt).await?.text().ok_or(LlmError::EmptyContent)
    }
}

/// Extracts `error.message` from an API error body, falling back to the raw body.
fn parse_error_message(body: String) -> String {
    serde_json::from_str::<GeminiError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_camel_case_generation_config() {
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: "hi" }],
            }],
            generation_config: GenerationConfig::default(),
        };
        let value = serde_json::to_value(&body).unwrap();
        let config = &value["generationConfig"];
        assert_eq!(config["topK"], 50);
        assert_eq!(config["maxOutputTokens"], 150);
        assert_eq!(config["responseMimeType"], "text/plain");
        assert!((config["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
        assert!((config["topP"].as_f64().unwrap() - 0.9).abs() < 1e-6);
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hi");
    }

    #[test]
    fn test_response_text_joins_parts() {
        let json = r#"{
            "candidates": [{"content": {"parts": [{"text": "- one\n"}, {"text": "- two"}]}}],
            "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 8}
        }"#;
        let response: LlmResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text().as_deref(), Some("- one\n- two"));
        assert_eq!(response.usage_metadata.unwrap().prompt_token_count, 12);
    }

    #[test]
    fn test_response_without_candidates_has_no_text() {
        let response: LlmResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(response.text().is_none());

        let blocked: LlmResponse =
            serde_json::from_str(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#).unwrap();
        assert!(blocked.text().is_none());
    }

    #[test]
    fn test_parse_error_message() {
        let body = r#"{"error": {"code": 429, "message": "Quota exceeded"}}"#.to_string();
        assert_eq!(parse_error_message(body), "Quota exceeded");
        assert_eq!(parse_error_message("bad gateway".to_string()), "bad gateway");
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_without_network() {
        let client = LlmClient::new(None, Duration::from_secs(1)).unwrap();
        assert!(matches!(
            client.generate_text("prompt").await,
            Err(LlmError::MissingApiKey)
        ));
    }
}
