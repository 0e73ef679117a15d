/// LLM Client — the single point of entry for all completion calls in Resuscan.
///
/// ARCHITECTURAL RULE: No other module may call the completion API directly.
/// All LLM interactions MUST go through this module.
///
/// Speaks the OpenAI-compatible chat-completions protocol; the default
/// endpoint and model (Groq, llama3-8b-8192) come from `Config`.
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

/// Upper bound on a single completion request. The LLM is the dominant
/// latency source in a scoring request; anything slower is treated as failed.
const REQUEST_TIMEOUT_SECS: u64 = 10;
/// Total attempts for rate-limit-class failures. Everything else is terminal
/// on first occurrence.
const MAX_ATTEMPTS: u32 = 3;
/// Fixed delay between rate-limited attempts.
const RETRY_DELAY_SECS: u64 = 15;
const MAX_TOKENS: u32 = 1024;

/// Sentinel embedded in responses when the upstream keeps rate-limiting us.
pub const RATE_LIMIT_SENTINEL: &str = "Rate limit exceeded.";
/// Sentinel embedded in responses on any other completion failure.
pub const ERROR_SENTINEL: &str = "Error generating suggestion.";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Request timed out")]
    Timeout,

    #[error("Rate limited after {attempts} attempts")]
    RateLimited { attempts: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UpstreamError {
    error: UpstreamErrorBody,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    message: String,
}

/// The single LLM client used by all services in Resuscan.
/// Wraps an OpenAI-compatible completions API with bounded retry.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl LlmClient {
    pub fn new(api_key: String, base_url: String, model: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            base_url,
            model,
        }
    }

    /// Makes a completion call and returns the assistant text.
    ///
    /// 429 responses are retried up to MAX_ATTEMPTS with a fixed async delay;
    /// timeouts, transport errors, and non-429 API errors are returned
    /// immediately without retry.
    pub async fn call(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };
        let url = completions_url(&self.base_url);

        for attempt in 1..=MAX_ATTEMPTS {
            if attempt > 1 {
                warn!(
                    "LLM rate limited, retrying after {}s (attempt {}/{})",
                    RETRY_DELAY_SECS, attempt, MAX_ATTEMPTS
                );
                tokio::time::sleep(std::time::Duration::from_secs(RETRY_DELAY_SECS)).await;
            }

            let response = match self
                .client
                .post(&url)
                .bearer_auth(&self.api_key)
                .json(&request_body)
                .send()
                .await
            {
                Ok(r) => r,
                Err(e) if e.is_timeout() => return Err(LlmError::Timeout),
                Err(e) => return Err(LlmError::Http(e)),
            };

            let status = response.status();

            if status.as_u16() == 429 {
                let body = response.text().await.unwrap_or_default();
                warn!("LLM API rate limited (attempt {attempt}/{MAX_ATTEMPTS}): {body}");
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<UpstreamError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let chat: ChatResponse = match response.json().await {
                Ok(c) => c,
                Err(e) if e.is_timeout() => return Err(LlmError::Timeout),
                Err(e) => return Err(LlmError::Http(e)),
            };

            let content = chat
                .choices
                .into_iter()
                .next()
                .and_then(|c| c.message.content)
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .ok_or(LlmError::EmptyContent)?;

            debug!("LLM call succeeded ({} chars)", content.len());
            return Ok(content);
        }

        Err(LlmError::RateLimited {
            attempts: MAX_ATTEMPTS,
        })
    }

    /// Lenient wrapper for handlers that embed feedback inside a scored
    /// response: failures degrade to fixed sentinel strings so the scores
    /// still reach the client.
    pub async fn complete_lenient(&self, prompt: &str, system: &str) -> String {
        match self.call(prompt, system).await {
            Ok(text) => text,
            Err(LlmError::RateLimited { attempts }) => {
                warn!("LLM rate limited after {attempts} attempts, returning sentinel");
                RATE_LIMIT_SENTINEL.to_string()
            }
            Err(e) => {
                tracing::error!("LLM suggestion failed: {e}");
                ERROR_SENTINEL.to_string()
            }
        }
    }
}

fn completions_url(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completions_url_joins_path() {
        assert_eq!(
            completions_url("https://api.groq.com/openai/v1"),
            "https://api.groq.com/openai/v1/chat/completions"
        );
    }

    #[test]
    fn test_completions_url_tolerates_trailing_slash() {
        assert_eq!(
            completions_url("http://localhost:11434/v1/"),
            "http://localhost:11434/v1/chat/completions"
        );
    }

    #[test]
    fn test_chat_response_parses_openai_shape() {
        let json = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "Looks solid."}}
            ]
        }"#;
        let parsed: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed.choices[0].message.content.as_deref(),
            Some("Looks solid.")
        );
    }

    #[test]
    fn test_upstream_error_parses_message() {
        let json = r#"{"error": {"message": "model not found", "type": "invalid_request_error"}}"#;
        let parsed: UpstreamError = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.error.message, "model not found");
    }

    #[test]
    fn test_sentinels_are_distinct() {
        assert_ne!(RATE_LIMIT_SENTINEL, ERROR_SENTINEL);
    }
}
