//! Direct REST client for the Gemini `generateContent` API.
//!
//! The request pins a JSON response schema so the model answers with a
//! `HydrationInsight` object instead of free-form prose.

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::AiError;
use crate::insight_model::HydrationInsight;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";
const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Provider seam for insight generation. The live implementation talks to
/// Gemini; tests substitute a fake.
#[async_trait]
pub trait InsightProviderTrait: Send + Sync {
    async fn generate_insight(&self, prompt: &str) -> Result<HydrationInsight, AiError>;
}

/// Insight provider that calls the Gemini REST API directly.
#[derive(Clone)]
pub struct GeminiInsightProvider {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiInsightProvider {
    /// Creates a provider with the given API key and the default model.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
        }
    }

    /// Creates a provider from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self, AiError> {
        match std::env::var("GEMINI_API_KEY") {
            Ok(key) if !key.is_empty() => Ok(Self::new(key)),
            _ => Err(AiError::MissingApiKey("gemini".to_string())),
        }
    }

    /// Overrides the model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn request_body(prompt: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: insight_schema(),
            },
        }
    }

    async fn send_request(&self, body: &GenerateContentRequest) -> Result<String, AiError> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            BASE_URL, self.model, self.api_key
        );

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|err| AiError::provider(format!("Gemini API request failed: {}", err)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|err| {
            AiError::invalid_response(format!("Failed to parse Gemini response: {}", err))
        })?;

        extract_text_response(parsed)
    }
}

#[async_trait]
impl InsightProviderTrait for GeminiInsightProvider {
    async fn generate_insight(&self, prompt: &str) -> Result<HydrationInsight, AiError> {
        debug!("Requesting hydration insight from model {}", self.model);
        let body = Self::request_body(prompt);
        let text = self.send_request(&body).await?;
        parse_insight(&text)
    }
}

/// Response schema forcing a status/message/advice object.
fn insight_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "status": {
                "type": "STRING",
                "enum": ["excellent", "good", "average", "dehydrated"]
            },
            "message": { "type": "STRING" },
            "advice": { "type": "STRING" }
        },
        "required": ["status", "message", "advice"]
    })
}

/// Parses the provider's JSON payload, tolerating a markdown code fence
/// around it.
fn parse_insight(text: &str) -> Result<HydrationInsight, AiError> {
    let cleaned = strip_code_fence(text);
    serde_json::from_str(cleaned)
        .map_err(|err| AiError::invalid_response(format!("Malformed insight payload: {}", err)))
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    match trimmed.strip_prefix("```") {
        None => trimmed,
        Some(rest) => {
            let rest = rest.strip_prefix("json").unwrap_or(rest);
            let rest = rest.strip_suffix("```").unwrap_or(rest);
            rest.trim()
        }
    }
}

fn extract_text_response(response: GenerateContentResponse) -> Result<String, AiError> {
    response
        .candidates
        .and_then(|mut candidates| candidates.pop())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .ok_or_else(|| AiError::invalid_response("Gemini returned no text in the response"))
}

fn map_http_error(status: StatusCode, body: String) -> AiError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{}: {}", status_text, msg)
            }
        })
        .unwrap_or_else(|_| body.clone());

    AiError::provider(format!(
        "Gemini API returned {}: {}",
        status.as_u16(),
        message
    ))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}
