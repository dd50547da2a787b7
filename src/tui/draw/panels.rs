//! The two panels: Text Processor (left) and AI Assistant (right).

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::super::app::{App, Focus};
use super::super::constants::{ACCENT, ACCENT_SECONDARY, PATTERN_FIELD_HEIGHT};

pub(super) fn draw_panels(f: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_processor_panel(f, app, columns[0]);
    draw_assistant_panel(f, app, columns[1]);
}

fn bordered_block(title: String, focused: bool, accent: Color) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(accent)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title_style = if focused {
        Style::default().fg(accent)
    } else {
        Style::default().fg(Color::Gray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(format!(" {} ", title), title_style))
}

/// Editable text field.
fn edit_field<'a>(text: &'a str, title: &str, focused: bool, accent: Color) -> Paragraph<'a> {
    Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(bordered_block(title.to_string(), focused, accent))
}

/// Read-only derived field: dimmed placeholder while empty.
fn derived_field<'a>(
    text: Option<&'a str>,
    placeholder: &'a str,
    title: String,
    accent: Color,
) -> Paragraph<'a> {
    let content = match text {
        Some(t) => Text::raw(t),
        None => Text::styled(placeholder, Style::default().fg(Color::DarkGray)),
    };
    Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(bordered_block(title, false, accent))
}

/// Left panel: source text, removal pattern, derived updated text.
fn draw_processor_panel(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),
            Constraint::Length(PATTERN_FIELD_HEIGHT),
            Constraint::Min(4),
        ])
        .split(area);

    f.render_widget(
        edit_field(
            &app.state.source_text,
            "Original Text",
            app.focus == Focus::Source,
            ACCENT,
        ),
        rows[0],
    );
    f.render_widget(
        edit_field(
            &app.state.removal_pattern,
            "Text to Remove (Enter: remove)",
            app.focus == Focus::Pattern,
            ACCENT,
        ),
        rows[1],
    );
    f.render_widget(
        derived_field(
            (!app.state.transformed_text.is_empty()).then_some(app.state.transformed_text.as_str()),
            "Processed text will appear here...",
            "Updated Text (Ctrl+Y: copy)".to_string(),
            ACCENT,
        ),
        rows[2],
    );
}

/// Right panel: mirrored editable input and the derived response view.
fn draw_assistant_panel(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    f.render_widget(
        edit_field(
            &app.state.completion_input,
            "Text to Analyze (Ctrl+S: ask)",
            app.focus == Focus::AiInput,
            ACCENT_SECONDARY,
        ),
        rows[0],
    );

    let (title, text) = if app.state.is_in_flight() {
        (format!("AI Response {}", super::spinner_frame()), None)
    } else {
        (
            "AI Response".to_string(),
            app.state.completion_output.as_deref(),
        )
    };
    let placeholder = if app.state.is_in_flight() {
        "Processing..."
    } else {
        "The AI reply will appear here..."
    };
    f.render_widget(
        derived_field(text, placeholder, title, ACCENT_SECONDARY)
            .scroll((app.response_scroll, 0)),
        rows[1],
    );
}
