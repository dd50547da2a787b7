//! OpenRouter chat-completions client: one request, one reply, no streaming.

mod error;

pub use error::CompletionError;

use serde::Deserialize;
use serde_json::json;
use tokio_util::sync::CancellationToken;

use crate::core::app;
use crate::core::config::Config;

/// Maximum output tokens sent with every request.
const MAX_TOKENS: u32 = 1000;

/// Substituted when the vendor returns zero choices or an empty message
/// (soft-failure policy: populate the panel instead of erroring).
pub const NO_RESPONSE_FALLBACK: &str = "No response from AI";

/// Fallback for non-success responses whose body lacks a vendor message.
const GENERIC_API_ERROR: &str = "API request failed";

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Send `input` verbatim as a single user-role message and return the first
/// choice's content.
///
/// The request authenticates with a bearer token and identifies the
/// application through the `HTTP-Referer`/`X-Title` pair (vendor
/// attribution). No retry and no timeout beyond the transport defaults;
/// `cancel` aborts the request from the caller's side.
pub async fn complete(
    config: &Config,
    input: &str,
    cancel: Option<&CancellationToken>,
) -> Result<String, CompletionError> {
    let api_key = config
        .api_key
        .as_deref()
        .ok_or(CompletionError::MissingCredential)?;

    let body = json!({
        "model": config.model_id,
        "messages": [{ "role": "user", "content": input }],
        "max_tokens": MAX_TOKENS,
    });

    let request = reqwest::Client::new()
        .post(format!("{}/chat/completions", config.base_url))
        .bearer_auth(api_key)
        .header("HTTP-Referer", app::REFERER)
        .header("X-Title", app::TITLE)
        .json(&body)
        .send();

    let response = match cancel {
        Some(token) => tokio::select! {
            _ = token.cancelled() => return Err(CompletionError::Cancelled),
            r = request => r?,
        },
        None => request.await?,
    };

    let status = response.status();
    let text = response.text().await?;
    if !status.is_success() {
        return Err(upstream_error(&text));
    }
    extract_content(&text)
}

/// Best-effort extraction of `error.message` from a non-success body.
fn upstream_error(body: &str) -> CompletionError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|e| e.error)
        .and_then(|e| e.message)
        .unwrap_or_else(|| GENERIC_API_ERROR.to_string());
    CompletionError::Upstream(message)
}

/// Read `choices[0].message.content` from a success body, substituting the
/// fallback text when the vendor returned no usable choice.
fn extract_content(body: &str) -> Result<String, CompletionError> {
    let parsed: ChatCompletion = serde_json::from_str(body).map_err(CompletionError::Malformed)?;
    Ok(parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        .unwrap_or_else(|| NO_RESPONSE_FALLBACK.to_string()))
}
