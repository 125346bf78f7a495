// api interaction module - handles openrouter api communication

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::prompts::{construct_user_prompt, get_system_prompt};
use crate::config::CONNECT_TIMEOUT;
use crate::error::{ReleaseNotesError, Result};
use crate::Config;

// longest slice of an error body kept in HttpStatus messages
const MAX_ERROR_BODY_CHARS: usize = 500;

// openrouter api structures
#[derive(Debug, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl CompletionResponse {
    /// content of the first choice, if present and non-empty
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .filter(|content| !content.is_empty())
    }
}

/// build the chat completion request for a release
pub fn build_request(config: &Config) -> CompletionRequest {
    CompletionRequest {
        model: config.model.clone(),
        messages: vec![
            Message {
                role: "system".to_string(),
                content: get_system_prompt().to_string(),
            },
            Message {
                role: "user".to_string(),
                content: construct_user_prompt(config),
            },
        ],
    }
}

/// make api request to openrouter and return the generated text
pub async fn request_completion(config: &Config, request: &CompletionRequest) -> Result<String> {
    let client = reqwest::Client::builder()
        .timeout(config.timeout)
        .connect_timeout(CONNECT_TIMEOUT)
        .build()
        .map_err(ReleaseNotesError::Client)?;

    info!(endpoint = %config.endpoint, model = %request.model, "sending release notes request");

    let response = client
        .post(&config.endpoint)
        .header("Authorization", format!("Bearer {}", config.api_key))
        .header("Content-Type", "application/json")
        .header("HTTP-Referer", config.site_url.as_str())
        .header("X-Title", config.site_name.as_str())
        .json(request)
        .send()
        .await
        .map_err(ReleaseNotesError::Network)?;

    let status = response.status();
    debug!(%status, "openrouter api responded");

    let body = response
        .text()
        .await
        .map_err(ReleaseNotesError::Network)?;

    if !status.is_success() {
        return Err(ReleaseNotesError::HttpStatus {
            status,
            body: truncate_body(&body),
        });
    }

    extract_content(&body)
}

/// pull `choices[0].message.content` out of a successful response body
pub fn extract_content(body: &str) -> Result<String> {
    let response: CompletionResponse = serde_json::from_str(body)?;
    response
        .first_content()
        .map(str::to_string)
        .ok_or(ReleaseNotesError::MissingContent)
}

fn truncate_body(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return "empty response body".to_string();
    }
    if body.chars().count() <= MAX_ERROR_BODY_CHARS {
        return body.to_string();
    }
    let truncated: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
    format!("{truncated}...")
}
