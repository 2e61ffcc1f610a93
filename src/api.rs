//! OpenAI Responses API client (blocking).
//!
//! One endpoint, one request shape: `{ model, instructions, input }`.
//! The caller is responsible for splitting off frontmatter first; only the
//! Markdown body ever goes over the wire.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{MdstitchError, Result};

/// Fast and cheap, with good instruction following.
pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";

const RESPONSES_URL: &str = "https://api.openai.com/v1/responses";

const USER_AGENT: &str = concat!("mdstitch/", env!("CARGO_PKG_VERSION"));

#[derive(Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    instructions: &'a str,
    input: &'a str,
}

#[derive(Deserialize)]
struct ResponsesReply {
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Deserialize)]
struct OutputItem {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    content: Vec<ContentItem>,
}

#[derive(Deserialize)]
struct ContentItem {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<ErrorDetail>,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

/// Blocking client for the Responses API.
pub struct ResponsesClient {
    http: reqwest::blocking::Client,
    api_key: String,
}

impl ResponsesClient {
    /// Build a client from an API key. An empty or whitespace-only key is
    /// rejected up front so no request is ever sent unauthenticated.
    pub fn new(api_key: &str) -> Result<Self> {
        let key = api_key.trim();
        if key.is_empty() {
            return Err(MdstitchError::ApiKeyMissing);
        }
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(180))
            .build()?;
        Ok(Self {
            http,
            api_key: key.to_string(),
        })
    }

    /// Send `input` with the given instructions and return the concatenated
    /// `output_text` of the reply.
    pub fn transform(&self, model: &str, instructions: &str, input: &str) -> Result<String> {
        let response = self
            .http
            .post(RESPONSES_URL)
            .bearer_auth(&self.api_key)
            .json(&ResponsesRequest {
                model,
                instructions,
                input,
            })
            .send()?;

        let status = response.status();
        let raw = response.text()?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&raw)
                .ok()
                .and_then(|body| body.error)
                .and_then(|detail| detail.message)
                .unwrap_or_else(|| "Unknown API error".to_string());
            return Err(MdstitchError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let reply: ResponsesReply =
            serde_json::from_str(&raw).map_err(|e| MdstitchError::ApiRequestFailed {
                reason: format!("API returned invalid JSON: {e}"),
            })?;

        let text = extract_output_text(&reply);
        if text.is_empty() {
            return Err(MdstitchError::ApiEmptyOutput);
        }
        Ok(text)
    }
}

/// Collect the `output_text` chunks of every `message` item, trimmed.
fn extract_output_text(reply: &ResponsesReply) -> String {
    let mut out = String::new();
    for item in &reply.output {
        if item.kind != "message" {
            continue;
        }
        for chunk in &item.content {
            if chunk.kind == "output_text" {
                out.push_str(&chunk.text);
            }
        }
    }
    out.trim().to_string()
}
