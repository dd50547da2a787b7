//! Event handlers for the TUI: keyboard dispatch and panel actions.

mod ask_spawn;
mod input;

use std::sync::Arc;
use std::sync::mpsc;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

use crate::core::clipboard;
use crate::core::config::Config;
use crate::core::llm;

use super::app::App;
use super::constants;

pub(crate) use ask_spawn::spawn_ask;

/// Holds the receiver and cancellation token for a request in progress.
pub(crate) struct PendingAsk {
    pub result_rx: mpsc::Receiver<Result<String, llm::CompletionError>>,
    /// Token to cancel the in-flight request (Esc).
    pub cancel_token: CancellationToken,
}

/// Result of handling an event: continue the loop or exit.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum HandleResult {
    Continue,
    Break,
}

/// Context for key event handling. Bundles mutable state to reduce parameter count.
pub(crate) struct HandleKeyContext<'a> {
    pub app: &'a mut App,
    pub config: &'a Arc<Config>,
    pub pending_ask: &'a mut Option<PendingAsk>,
    pub rt: &'a Arc<Runtime>,
}

/// Handle a key event. Returns HandleResult::Break to exit the main loop.
pub(crate) fn handle_key(key: KeyEvent, ctx: HandleKeyContext<'_>) -> HandleResult {
    let HandleKeyContext {
        app,
        config,
        pending_ask,
        rt,
    } = ctx;

    if key.kind != KeyEventKind::Press {
        return HandleResult::Continue;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => HandleResult::Break,
        (KeyCode::Esc, _) => {
            // Cancel the in-flight request if any; otherwise a no-op.
            if let Some(pa) = pending_ask.as_ref() {
                pa.cancel_token.cancel();
            }
            HandleResult::Continue
        }
        (KeyCode::BackTab, _) | (KeyCode::Tab, KeyModifiers::SHIFT) => {
            app.focus = app.focus.prev();
            HandleResult::Continue
        }
        (KeyCode::Tab, _) => {
            app.focus = app.focus.next();
            HandleResult::Continue
        }
        (KeyCode::Char('r'), KeyModifiers::CONTROL) => {
            remove_text(app);
            HandleResult::Continue
        }
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => {
            copy_text(app);
            HandleResult::Continue
        }
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => {
            ask_ai(app, config, pending_ask, rt);
            HandleResult::Continue
        }
        (KeyCode::Up, _) => {
            app.response_scroll = app.response_scroll.saturating_sub(constants::SCROLL_LINES_SMALL);
            HandleResult::Continue
        }
        (KeyCode::Down, _) => {
            app.response_scroll = app.response_scroll.saturating_add(constants::SCROLL_LINES_SMALL);
            HandleResult::Continue
        }
        _ => input::handle_edit(key.code, key.modifiers, app),
    }
}

/// Remove Text trigger: run the transform, mirror the output, toast the outcome.
fn remove_text(app: &mut App) {
    match app.state.remove_text() {
        Ok(()) => app.notify_success("Text removed successfully"),
        Err(e) => app.notify_error(e.to_string()),
    }
}

/// Copy trigger: export the transformed text to the system clipboard.
fn copy_text(app: &mut App) {
    match app.state.copy_payload() {
        Ok(payload) => {
            clipboard::copy_text(payload);
            app.notify_success("Text copied to clipboard");
        }
        Err(e) => app.notify_error(e.to_string()),
    }
}

/// Ask AI trigger: validate through the state container, then spawn the
/// request. While one is in flight the container rejects the trigger.
fn ask_ai(
    app: &mut App,
    config: &Arc<Config>,
    pending_ask: &mut Option<PendingAsk>,
    rt: &Arc<Runtime>,
) {
    if pending_ask.is_some() {
        // Trigger is disabled while a request is outstanding.
        return;
    }
    match app.state.begin_request(config.has_credential()) {
        Ok(prompt) => {
            app.response_scroll = 0;
            *pending_ask = Some(spawn_ask(rt, Arc::clone(config), prompt));
        }
        Err(e) => app.notify_error(e.to_string()),
    }
}
