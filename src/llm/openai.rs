// OpenAI-compatible chat-completions implementation.
//
// Sends the text with a fixed instruction prompt and asks for a JSON object
// with summary, title, topics and sentiment. Works with any server that
// speaks the /chat/completions wire format (OpenAI, Azure-style proxies,
// local inference servers). Point OPENAI_BASE_URL at it.
//
// API docs: https://platform.openai.com/docs/api-reference/chat

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::rate_limiter::RateLimiter;
use super::response::{parse_analysis, validate_input};
use super::traits::{LlmAnalysis, LlmError, TextAnalyzer};
use crate::config::Config;
use crate::output::truncate_chars;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

const SYSTEM_PROMPT: &str = "You are a helpful assistant that analyzes text and extracts \
structured information. Always respond with valid JSON.";
const MAX_TOKENS: u32 = 500;
const TEMPERATURE: f32 = 0.3;

/// Chat-completions backed text analyzer.
pub struct OpenAiAnalyzer {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    rate_limiter: Option<RateLimiter>,
}

impl OpenAiAnalyzer {
    /// Create an analyzer for the given endpoint and model.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            rate_limiter: None,
        })
    }

    /// Build from the loaded configuration, including the optional rate limit.
    pub fn from_config(config: &Config) -> Result<Self> {
        let analyzer = Self::new(
            config.openai_api_key.clone(),
            config.openai_base_url.clone(),
            config.llm_model.clone(),
            Duration::from_secs(config.llm_timeout_secs),
        )?;
        Ok(match config.llm_requests_per_second {
            Some(rps) => analyzer.with_rate_limit(rps),
            None => analyzer,
        })
    }

    /// Space requests to at most `requests_per_second`.
    pub fn with_rate_limit(mut self, requests_per_second: f64) -> Self {
        self.rate_limiter = RateLimiter::new(requests_per_second);
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, text: &str) -> Result<String, LlmError> {
        if let Some(limiter) = &self.rate_limiter {
            limiter.acquire().await;
        }

        let prompt = build_prompt(text);
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(match status {
                StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimited(body),
                StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
                    LlmError::Timeout(body)
                }
                _ => LlmError::Api {
                    status: status.as_u16(),
                    body,
                },
            });
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                LlmError::Timeout(e.to_string())
            } else {
                LlmError::InvalidResponse(e.to_string())
            }
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| LlmError::InvalidResponse("no message content in response".to_string()))
    }
}

#[async_trait]
impl TextAnalyzer for OpenAiAnalyzer {
    async fn analyze(&self, text: &str) -> Result<LlmAnalysis, LlmError> {
        validate_input(text)?;

        let content = self.complete(text).await?;
        let analysis = parse_analysis(&content);

        debug!(
            model = %self.model,
            topics = analysis.topics.len(),
            sentiment = %analysis.sentiment,
            confidence = analysis.confidence_score,
            text_preview = %truncate_chars(text, 50),
            "Analyzed text"
        );

        Ok(analysis)
    }
}

/// The user prompt sent alongside the system instruction.
pub fn build_prompt(text: &str) -> String {
    format!(
        "Analyze the following text and provide a structured response in JSON format:\n\
         \n\
         Text: {text}\n\
         \n\
         Please provide:\n\
         1. A 1-2 sentence summary\n\
         2. A title (if one can be inferred, otherwise null)\n\
         3. Three key topics that best describe the content\n\
         4. Sentiment analysis (positive, neutral, or negative)\n\
         \n\
         Return your response as a JSON object with these exact keys:\n\
         {{\n\
         \x20   \"summary\": \"1-2 sentence summary here\",\n\
         \x20   \"title\": \"title or null\",\n\
         \x20   \"topics\": [\"topic1\", \"topic2\", \"topic3\"],\n\
         \x20   \"sentiment\": \"positive/neutral/negative\"\n\
         }}"
    )
}

fn classify_transport_error(e: reqwest::Error) -> LlmError {
    if e.is_timeout() {
        LlmError::Timeout(e.to_string())
    } else {
        LlmError::Transport(e.to_string())
    }
}

// --- Chat-completions request/response types ---

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}
