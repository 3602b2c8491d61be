//! OpenAI Completion Provider
//!
//! Implementation of `CompletionProvider` for the OpenAI chat-completions
//! API (and compatible gateways via `OPENAI_BASE_URL`).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use seo_core::{
    error::{Result, SeoError},
    message::Message,
    provider::{Completion, CompletionProvider, GenerationOptions, TokenUsage},
};

/// OpenAI provider configuration
#[derive(Clone, Debug)]
pub struct OpenAiConfig {
    /// API credential (required)
    pub api_key: String,

    /// API base URL
    pub base_url: String,

    /// Default model
    pub model: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl OpenAiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: "https://api.openai.com/v1".into(),
            model: "gpt-3.5-turbo".into(),
            timeout_secs: 30,
        }
    }

    /// Load configuration from the environment.
    ///
    /// A missing `OPENAI_API_KEY` is a configuration error the caller
    /// decides how to handle; nothing here panics or exits.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            SeoError::Config(
                "OpenAI API key is not configured. Set OPENAI_API_KEY in your environment or .env file."
                    .into(),
            )
        })?;

        let mut config = Self::new(api_key);
        if let Ok(base_url) = std::env::var("OPENAI_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(model) = std::env::var("OPENAI_MODEL") {
            config.model = model;
        }

        Ok(config)
    }
}

/// OpenAI completion provider
pub struct OpenAiProvider {
    client: reqwest::Client,
    config: OpenAiConfig,
}

impl OpenAiProvider {
    /// Create from configuration
    pub fn from_config(config: OpenAiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SeoError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_config(OpenAiConfig::from_env()?)
    }

    /// Default model from configuration
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Convert engine messages to wire format (role + content only)
    fn convert_messages(messages: &[Message]) -> Vec<WireMessage> {
        messages
            .iter()
            .map(|m| WireMessage {
                role: m.role.to_string(),
                content: m.content.clone(),
            })
            .collect()
    }

    /// Map a non-success HTTP status to the engine error taxonomy
    fn error_for_status(status: u16, body: String) -> SeoError {
        if status == 429 {
            SeoError::RateLimited
        } else {
            SeoError::Provider {
                message: if body.is_empty() {
                    format!("HTTP {status}")
                } else {
                    body
                },
                status: Some(status),
            }
        }
    }

    /// Convert a parsed API response to an engine completion
    fn convert_completion(response: ChatResponse, model: &str) -> Completion {
        Completion {
            // Empty content passes through; the generator owns that check
            content: response
                .choices
                .into_iter()
                .next()
                .map(|c| c.message.content)
                .unwrap_or_default(),
            model: response.model.unwrap_or_else(|| model.to_string()),
            usage: response.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            }),
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/models", self.config.base_url);
        match self
            .client
            .get(&url)
            .bearer_auth(&self.config.api_key)
            .send()
            .await
        {
            Ok(response) => Ok(response.status().is_success()),
            Err(e) => {
                tracing::warn!("OpenAI health check failed: {}", e);
                Ok(false)
            }
        }
    }

    async fn complete(
        &self,
        messages: &[Message],
        options: &GenerationOptions,
    ) -> Result<Completion> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let request = ChatRequest {
            model: &options.model,
            messages: Self::convert_messages(messages),
            temperature: options.temperature,
            max_tokens: options.max_tokens,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| SeoError::Provider {
                message: e.to_string(),
                status: e.status().map(|s| s.as_u16()),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::error_for_status(status.as_u16(), body));
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| SeoError::Provider {
            message: format!("malformed completion response: {e}"),
            status: None,
        })?;

        Ok(Self::convert_completion(parsed, &options.model))
    }
}

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    usage: Option<WireUsage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: WireMessage,
}

#[derive(Debug, Deserialize)]
struct WireUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = OpenAiConfig::new("sk-test");
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_message_conversion_drops_timestamps() {
        let messages = vec![
            Message::system("You are an SEO expert."),
            Message::user("Analyze this content for SEO optimization: hello"),
        ];

        let converted = OpenAiProvider::convert_messages(&messages);
        assert_eq!(converted.len(), 2);
        assert_eq!(converted[0].role, "system");
        assert_eq!(converted[1].role, "user");

        let json = serde_json::to_value(&converted[0]).unwrap();
        assert!(json.get("timestamp").is_none());
    }

    #[test]
    fn test_request_body_shape() {
        let options = GenerationOptions::default();
        let request = ChatRequest {
            model: &options.model,
            messages: OpenAiProvider::convert_messages(&[Message::user("hi")]),
            temperature: options.temperature,
            max_tokens: options.max_tokens,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["messages"][0]["content"], "hi");
        assert_eq!(json["max_tokens"], 1024);
    }

    #[test]
    fn test_rate_limit_status_maps_to_rate_limited() {
        let err = OpenAiProvider::error_for_status(429, "slow down".into());
        assert!(matches!(err, SeoError::RateLimited));

        let err = OpenAiProvider::error_for_status(500, "server exploded".into());
        assert!(matches!(
            err,
            SeoError::Provider {
                status: Some(500),
                ..
            }
        ));
    }

    #[test]
    fn test_response_parsing() {
        let raw = r#"{
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "model": "gpt-3.5-turbo-0125",
            "choices": [
                {
                    "index": 0,
                    "message": {"role": "assistant", "content": "Use more keywords"},
                    "finish_reason": "stop"
                }
            ],
            "usage": {"prompt_tokens": 30, "completion_tokens": 5, "total_tokens": 35}
        }"#;

        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        let completion = OpenAiProvider::convert_completion(parsed, "gpt-3.5-turbo");

        assert_eq!(completion.content, "Use more keywords");
        assert_eq!(completion.model, "gpt-3.5-turbo-0125");
        assert_eq!(completion.usage.unwrap().total_tokens, 35);
    }

    #[test]
    fn test_empty_choices_yield_empty_content() {
        let parsed: ChatResponse = serde_json::from_str("{}").unwrap();
        let completion = OpenAiProvider::convert_completion(parsed, "gpt-3.5-turbo");
        assert_eq!(completion.content, "");
    }
}
