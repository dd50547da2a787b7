//! TUI application state: the panel state container plus presentation state
//! (focus, notices, scroll).

use std::time::Instant;

use crate::core::state::PanelState;

use super::constants;

/// Which field has keyboard focus. Only editable fields are in the cycle;
/// the derived fields (Updated Text, AI Response) are read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Source,
    Pattern,
    AiInput,
}

impl Focus {
    pub(crate) fn next(self) -> Self {
        match self {
            Focus::Source => Focus::Pattern,
            Focus::Pattern => Focus::AiInput,
            Focus::AiInput => Focus::Source,
        }
    }

    pub(crate) fn prev(self) -> Self {
        match self {
            Focus::Source => Focus::AiInput,
            Focus::Pattern => Focus::Source,
            Focus::AiInput => Focus::Pattern,
        }
    }
}

/// Notice severity: confirmations green, warnings/errors red.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient toast shown top-right until its deadline.
pub(crate) struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub until: Instant,
}

pub struct App {
    /// The data model both panels operate on.
    pub state: PanelState,
    pub(crate) focus: Focus,
    pub(crate) notice: Option<Notice>,
    /// Scroll offset into the AI response paragraph.
    pub(crate) response_scroll: u16,
    /// Model ID displayed in the header (e.g. "openai/gpt-4o").
    pub model_name: String,
}

impl App {
    pub fn new(model_name: String) -> Self {
        Self {
            state: PanelState::default(),
            focus: Focus::Source,
            notice: None,
            response_scroll: 0,
            model_name,
        }
    }

    pub(crate) fn notify_success(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            kind: NoticeKind::Success,
            text: text.into(),
            until: Instant::now() + constants::NOTICE_DURATION,
        });
    }

    pub(crate) fn notify_error(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            kind: NoticeKind::Error,
            text: text.into(),
            until: Instant::now() + constants::NOTICE_DURATION,
        });
    }

    /// Drop the notice once its deadline passed. Called each draw.
    pub(crate) fn expire_notice(&mut self) {
        if self.notice.as_ref().is_some_and(|n| n.until <= Instant::now()) {
            self.notice = None;
        }
    }

    /// The buffer the current focus edits.
    pub(crate) fn focused_buffer_mut(&mut self) -> &mut String {
        match self.focus {
            Focus::Source => &mut self.state.source_text,
            Focus::Pattern => &mut self.state.removal_pattern,
            Focus::AiInput => &mut self.state.completion_input,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycle_covers_all_editable_fields() {
        let mut f = Focus::Source;
        let mut seen = vec![f];
        for _ in 0..2 {
            f = f.next();
            seen.push(f);
        }
        assert_eq!(seen, vec![Focus::Source, Focus::Pattern, Focus::AiInput]);
        assert_eq!(f.next(), Focus::Source);
        assert_eq!(Focus::Source.prev(), Focus::AiInput);
    }

    #[test]
    fn focused_buffer_follows_focus() {
        let mut app = App::new("openai/gpt-4o".to_string());
        app.focus = Focus::Pattern;
        app.focused_buffer_mut().push('x');
        assert_eq!(app.state.removal_pattern, "x");
        assert!(app.state.source_text.is_empty());
    }
}
