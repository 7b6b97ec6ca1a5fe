/// LLM Client — the single point of entry for external text-completion calls in HireMind.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// Everything goes through a `CompletionProvider`, and every call resolves to a
/// `ProviderOutcome` instead of a panic or a bubbled-up error.
///
/// There is deliberately no retry here: a single failure hands control back to
/// the caller, which falls back to the local heuristics.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

pub mod prompts;

const GENERATE_CONTENT_PATH: &str = "/v1beta/models";
const MAX_OUTPUT_TOKENS: u32 = 2048;

#[derive(Debug, Error)]
pub enum ProviderFailure {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("provider returned empty content")]
    EmptyContent,
}

/// Result of one completion attempt. Exactly two variants, so the set of
/// fallback triggers is explicit at every call site.
#[derive(Debug)]
pub enum ProviderOutcome {
    Success(String),
    Failure(ProviderFailure),
}

/// A black-box text-completion provider.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Human-readable model identifier, reported by `/health`.
    fn model(&self) -> &str;

    async fn complete(&self, prompt: &str) -> ProviderOutcome;
}

// ────────────────────────────────────────────────────────────────────────────
// Gemini wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
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
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl GenerateContentResponse {
    /// Extracts the text of the first candidate's first non-empty text part.
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.iter().find_map(|p| p.text.as_deref()))
            .filter(|t| !t.trim().is_empty())
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

// ────────────────────────────────────────────────────────────────────────────
// GeminiClient
// ────────────────────────────────────────────────────────────────────────────

/// Google Gemini `generateContent` client.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(
        api_key: String,
        base_url: String,
        model: String,
        timeout: std::time::Duration,
    ) -> Result<Self, ProviderFailure> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        })
    }

    /// Builds a client when the config carries a credential; `None` otherwise.
    pub fn from_config(config: &Config) -> Result<Option<Self>, ProviderFailure> {
        let Some(api_key) = config.gemini_api_key.clone() else {
            return Ok(None);
        };
        Self::new(
            api_key,
            config.gemini_base_url.clone(),
            config.gemini_model.clone(),
            config.provider_timeout,
        )
        .map(Some)
    }

    fn endpoint(&self) -> String {
        format!(
            "{}{}/{}:generateContent",
            self.base_url, GENERATE_CONTENT_PATH, self.model
        )
    }

    async fn generate(&self, prompt: &str) -> Result<String, ProviderFailure> {
        let request_body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(ProviderFailure::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;

        if let Some(usage) = &parsed.usage_metadata {
            debug!(
                "Gemini call succeeded: prompt_tokens={}, output_tokens={}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        parsed
            .text()
            .map(str::to_string)
            .ok_or(ProviderFailure::EmptyContent)
    }
}

#[async_trait]
impl CompletionProvider for GeminiClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, prompt: &str) -> ProviderOutcome {
        match self.generate(prompt).await {
            Ok(text) => ProviderOutcome::Success(text),
            Err(e) => ProviderOutcome::Failure(e),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Response helpers
// ────────────────────────────────────────────────────────────────────────────

/// Returns the body of the first ```json ... ``` or ``` ... ``` block in `text`,
/// or the whole trimmed text when there is no fenced block.
pub fn extract_fenced_block(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(open) = trimmed.find("```") else {
        return trimmed;
    };

    let after_fence = &trimmed[open + 3..];
    let body = after_fence.strip_prefix("json").unwrap_or(after_fence);

    match body.find("```") {
        Some(close) => body[..close].trim(),
        None => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const ENDPOINT: &str = "/v1beta/models/gemini-1.5-flash:generateContent";

    fn client_for(server: &MockServer) -> GeminiClient {
        GeminiClient::new(
            "test-key".to_string(),
            server.uri(),
            "gemini-1.5-flash".to_string(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn test_extract_fenced_block_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(extract_fenced_block(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_extract_fenced_block_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(extract_fenced_block(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_extract_fenced_block_no_fences() {
        let input = "  {\"key\": \"value\"}\n";
        assert_eq!(extract_fenced_block(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_extract_fenced_block_with_surrounding_prose() {
        let input = "Here you go:\n```json\n{\"score\": 7}\n```\nGood luck!";
        assert_eq!(extract_fenced_block(input), "{\"score\": 7}");
    }

    #[test]
    fn test_extract_fenced_block_unterminated_returns_text() {
        let input = "```json\n{\"score\": 7}";
        assert_eq!(extract_fenced_block(input), input);
    }

    #[test]
    fn test_response_text_skips_empty_candidates() {
        let parsed: GenerateContentResponse =
            serde_json::from_value(json!({ "candidates": [] })).unwrap();
        assert!(parsed.text().is_none());

        let parsed: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": "   " }] } }]
        }))
        .unwrap();
        assert!(parsed.text().is_none());
    }

    #[tokio::test]
    async fn test_complete_returns_first_text_part() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .and(header("x-goog-api-key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": { "role": "model", "parts": [{ "text": "hello" }] }
                }],
                "usageMetadata": { "promptTokenCount": 3, "candidatesTokenCount": 1 }
            })))
            .expect(1)
            .mount(&server)
            .await;

        match client_for(&server).complete("say hello").await {
            ProviderOutcome::Success(text) => assert_eq!(text, "hello"),
            ProviderOutcome::Failure(e) => panic!("expected success, got {e}"),
        }
    }

    #[tokio::test]
    async fn test_complete_does_not_retry_server_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(503).set_body_json(json!({
                "error": { "code": 503, "message": "overloaded", "status": "UNAVAILABLE" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        match client_for(&server).complete("prompt").await {
            ProviderOutcome::Failure(ProviderFailure::Api { status, message }) => {
                assert_eq!(status, 503);
                assert_eq!(message, "overloaded");
            }
            other => panic!("expected API failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_complete_without_text_is_empty_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&server)
            .await;

        assert!(matches!(
            client_for(&server).complete("prompt").await,
            ProviderOutcome::Failure(ProviderFailure::EmptyContent)
        ));
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_http_failure() {
        let client = GeminiClient::new(
            "test-key".to_string(),
            "http://127.0.0.1:1".to_string(),
            "gemini-1.5-flash".to_string(),
            Duration::from_secs(2),
        )
        .unwrap();

        assert!(matches!(
            client.complete("prompt").await,
            ProviderOutcome::Failure(ProviderFailure::Http(_))
        ));
    }
}
