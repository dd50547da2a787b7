//! Completion request error taxonomy.

/// Errors from the completion request lifecycle. None is fatal; the caller
/// returns the panel to Idle and shows the message.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// No API key configured; no network call was made.
    #[error("OPENROUTER_API_KEY is not set")]
    MissingCredential,
    /// Vendor returned a non-success status. Carries the vendor's message
    /// when the body had one, else a generic fallback.
    #[error("{0}")]
    Upstream(String),
    /// Network-level failure (unreachable host, broken connection).
    #[error("Failed to get AI response")]
    Transport(#[from] reqwest::Error),
    /// Success status but the body did not parse as a chat completion.
    #[error("Failed to get AI response")]
    Malformed(#[source] serde_json::Error),
    /// The request was cancelled by the user.
    #[error("Request cancelled")]
    Cancelled,
}

impl CompletionError {
    /// Underlying cause for the diagnostic log; the user-visible Display is
    /// deliberately generic for transport-level failures.
    pub fn log_detail(&self) -> String {
        match self {
            CompletionError::Transport(e) => format!("transport error: {}", e),
            CompletionError::Malformed(e) => format!("unparseable response body: {}", e),
            other => other.to_string(),
        }
    }
}
