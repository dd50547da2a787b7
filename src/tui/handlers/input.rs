//! Text editing for the focused field.

use crossterm::event::{KeyCode, KeyModifiers};

use super::super::app::{App, Focus};
use super::HandleResult;

/// Edit keys for the focused buffer. The pattern field is single-line;
/// Enter there runs the removal, matching the panel's primary action.
pub(crate) fn handle_edit(
    key_code: KeyCode,
    key_modifiers: KeyModifiers,
    app: &mut App,
) -> HandleResult {
    match key_code {
        KeyCode::Enter => {
            if app.focus == Focus::Pattern {
                match app.state.remove_text() {
                    Ok(()) => app.notify_success("Text removed successfully"),
                    Err(e) => app.notify_error(e.to_string()),
                }
            } else {
                app.focused_buffer_mut().push('\n');
            }
            HandleResult::Continue
        }
        KeyCode::Backspace => {
            app.focused_buffer_mut().pop();
            HandleResult::Continue
        }
        KeyCode::Char(c) => {
            // Ignore Alt/Ctrl+key: user likely intended a shortcut
            if key_modifiers.contains(KeyModifiers::ALT)
                || key_modifiers.contains(KeyModifiers::CONTROL)
            {
                return HandleResult::Continue;
            }
            app.focused_buffer_mut().push(c);
            HandleResult::Continue
        }
        _ => HandleResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_goes_to_the_focused_buffer() {
        let mut app = App::new("m".to_string());
        for c in "abc".chars() {
            handle_edit(KeyCode::Char(c), KeyModifiers::NONE, &mut app);
        }
        assert_eq!(app.state.source_text, "abc");
        handle_edit(KeyCode::Backspace, KeyModifiers::NONE, &mut app);
        assert_eq!(app.state.source_text, "ab");
    }

    #[test]
    fn enter_in_pattern_field_runs_removal() {
        let mut app = App::new("m".to_string());
        app.state.source_text = "foo bar".to_string();
        app.state.removal_pattern = "foo ".to_string();
        app.focus = Focus::Pattern;
        handle_edit(KeyCode::Enter, KeyModifiers::NONE, &mut app);
        assert_eq!(app.state.transformed_text, "bar");
        assert_eq!(app.state.completion_input, "bar");
    }

    #[test]
    fn enter_in_source_inserts_newline() {
        let mut app = App::new("m".to_string());
        app.state.source_text = "line".to_string();
        handle_edit(KeyCode::Enter, KeyModifiers::NONE, &mut app);
        assert_eq!(app.state.source_text, "line\n");
    }
}
