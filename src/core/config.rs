//! Configuration from environment variables (with the API key file fallback).

use std::env;

use crate::core::api_key;

/// Model used when OPENROUTER_MODEL is not set.
pub const DEFAULT_MODEL: &str = "openai/gpt-4o";

/// OpenRouter API base URL used when OPENROUTER_BASE_URL is not set.
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    /// API key from OPENROUTER_API_KEY or the key file. `None` is not a
    /// startup failure: the completion trigger reports it when the user
    /// actually asks.
    pub api_key: Option<String>,
    pub model_id: String,
}

impl Config {
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Load configuration from the environment. Never fails.
pub fn load() -> Config {
    let base_url =
        env::var("OPENROUTER_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    let api_key = env::var("OPENROUTER_API_KEY")
        .ok()
        .filter(|k| !k.trim().is_empty())
        .or_else(api_key::load_api_key);

    let model_id = env::var("OPENROUTER_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

    Config {
        base_url,
        api_key,
        model_id,
    }
}
