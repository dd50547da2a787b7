//! Panel state container: the two panels' fields plus the request flag,
//! with one transition function per user action.
//!
//! The TUI and the one-shot CLI both drive this container; it owns every
//! invariant the panels rely on (the one-way mirror, the cleared output at
//! request start, the single in-flight request).

use crate::core::scrub::{self, ScrubError};

/// Whether a completion request is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight,
}

/// A rejected action. Every variant is recoverable: the container is left
/// exactly as it was.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error(transparent)]
    Scrub(#[from] ScrubError),
    #[error("No text to copy")]
    NothingToCopy,
    #[error("Please enter some text for the AI")]
    NoCompletionInput,
    #[error("OPENROUTER_API_KEY is not set")]
    MissingCredential,
    #[error("A request is already in progress")]
    RequestInFlight,
}

#[derive(Debug, Default)]
pub struct PanelState {
    /// User-entered source text (left panel).
    pub source_text: String,
    /// Literal text to remove (left panel).
    pub removal_pattern: String,
    /// Output of the last removal; read-only in the UI.
    pub transformed_text: String,
    /// Editable buffer sent to the model; overwritten with `transformed_text`
    /// each time a removal succeeds (one-way mirror).
    pub completion_input: String,
    /// The model's last reply. `None` until a request succeeds; cleared at
    /// the start of each new request.
    pub completion_output: Option<String>,
    request: RequestState,
}

impl PanelState {
    pub fn request_state(&self) -> RequestState {
        self.request
    }

    pub fn is_in_flight(&self) -> bool {
        self.request == RequestState::InFlight
    }

    /// Apply the removal transform. On success the result replaces
    /// `transformed_text` entirely and is mirrored into `completion_input`,
    /// discarding any edits made there since the last removal.
    pub fn remove_text(&mut self) -> Result<(), ActionError> {
        let out = scrub::remove_literal(&self.source_text, &self.removal_pattern)?;
        self.completion_input = out.clone();
        self.transformed_text = out;
        Ok(())
    }

    /// Text to export to the clipboard. Fails when there is nothing to copy;
    /// no clipboard interaction is attempted in that case.
    pub fn copy_payload(&self) -> Result<&str, ActionError> {
        if self.transformed_text.is_empty() {
            return Err(ActionError::NothingToCopy);
        }
        Ok(&self.transformed_text)
    }

    /// Begin a completion request: validate, clear the previous output, and
    /// transition to InFlight. Returns the prompt to send.
    ///
    /// Re-entrant only from Idle: a second trigger while a request is
    /// outstanding is rejected here, in the container itself, so even a
    /// caller that bypasses the UI cannot overlap requests.
    pub fn begin_request(&mut self, credential_present: bool) -> Result<String, ActionError> {
        if self.is_in_flight() {
            return Err(ActionError::RequestInFlight);
        }
        if self.completion_input.is_empty() {
            return Err(ActionError::NoCompletionInput);
        }
        if !credential_present {
            return Err(ActionError::MissingCredential);
        }
        self.completion_output = None;
        self.request = RequestState::InFlight;
        Ok(self.completion_input.clone())
    }

    /// Request finished with a reply: populate the output and return to Idle.
    pub fn complete_request(&mut self, content: String) {
        self.completion_output = Some(content);
        self.request = RequestState::Idle;
    }

    /// Request failed or was cancelled: output stays absent, back to Idle.
    pub fn fail_request(&mut self) {
        self.request = RequestState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(source: &str, pattern: &str) -> PanelState {
        PanelState {
            source_text: source.to_string(),
            removal_pattern: pattern.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn remove_text_mirrors_into_completion_input() {
        let mut s = state_with("say foo twice: foo", "foo");
        s.completion_input = "hand-typed input".to_string();
        s.remove_text().unwrap();
        assert_eq!(s.transformed_text, "say  twice: ");
        // Prior independent edits are discarded by the mirror.
        assert_eq!(s.completion_input, s.transformed_text);
    }

    #[test]
    fn mirror_applies_even_when_result_is_empty() {
        let mut s = state_with("foo", "foo");
        s.completion_input = "leftover".to_string();
        s.remove_text().unwrap();
        assert_eq!(s.transformed_text, "");
        assert_eq!(s.completion_input, "");
    }

    #[test]
    fn failed_removal_mutates_nothing() {
        let mut s = state_with("", "foo");
        s.transformed_text = "previous result".to_string();
        s.completion_input = "previous input".to_string();
        assert!(matches!(
            s.remove_text(),
            Err(ActionError::Scrub(ScrubError::EmptySource))
        ));
        assert_eq!(s.transformed_text, "previous result");
        assert_eq!(s.completion_input, "previous input");

        s.source_text = "text".to_string();
        s.removal_pattern.clear();
        assert!(matches!(
            s.remove_text(),
            Err(ActionError::Scrub(ScrubError::EmptyPattern))
        ));
        assert_eq!(s.transformed_text, "previous result");
    }

    #[test]
    fn copy_requires_a_transformed_text() {
        let mut s = PanelState::default();
        assert!(matches!(s.copy_payload(), Err(ActionError::NothingToCopy)));
        s.transformed_text = "result".to_string();
        assert_eq!(s.copy_payload().unwrap(), "result");
    }

    #[test]
    fn begin_request_validates_input_and_credential() {
        let mut s = PanelState::default();
        assert!(matches!(
            s.begin_request(true),
            Err(ActionError::NoCompletionInput)
        ));
        assert!(!s.is_in_flight());

        s.completion_input = "analyze this".to_string();
        assert!(matches!(
            s.begin_request(false),
            Err(ActionError::MissingCredential)
        ));
        assert!(!s.is_in_flight());
    }

    #[test]
    fn begin_request_clears_previous_output_and_goes_in_flight() {
        let mut s = PanelState::default();
        s.completion_input = "analyze this".to_string();
        s.completion_output = Some("old reply".to_string());
        let prompt = s.begin_request(true).unwrap();
        assert_eq!(prompt, "analyze this");
        assert_eq!(s.completion_output, None);
        assert_eq!(s.request_state(), RequestState::InFlight);
    }

    #[test]
    fn overlapping_requests_are_rejected() {
        let mut s = PanelState::default();
        s.completion_input = "prompt".to_string();
        s.begin_request(true).unwrap();
        assert!(matches!(
            s.begin_request(true),
            Err(ActionError::RequestInFlight)
        ));
        s.complete_request("reply".to_string());
        // Re-entrant from Idle again once the request resolved.
        assert!(s.begin_request(true).is_ok());
    }

    #[test]
    fn complete_request_populates_output_and_returns_to_idle() {
        let mut s = PanelState::default();
        s.completion_input = "prompt".to_string();
        s.begin_request(true).unwrap();
        s.complete_request("the reply".to_string());
        assert_eq!(s.completion_output.as_deref(), Some("the reply"));
        assert_eq!(s.request_state(), RequestState::Idle);
    }

    #[test]
    fn failed_request_leaves_output_absent() {
        let mut s = PanelState::default();
        s.completion_input = "prompt".to_string();
        s.begin_request(true).unwrap();
        s.fail_request();
        assert_eq!(s.completion_output, None);
        assert_eq!(s.request_state(), RequestState::Idle);
    }
}
