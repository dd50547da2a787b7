//! Bottom bar: app version on the left, keyboard shortcuts on the right.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::app;

use super::super::app::App;
use super::super::constants::ACCENT;

pub(super) fn draw_bottom_bar(f: &mut Frame, app_state: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Min(70)])
        .split(area);

    let version = Line::from(Span::styled(
        format!("{} v{}", app::NAME, app::VERSION),
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(
        Paragraph::new(version).alignment(ratatui::layout::Alignment::Left),
        chunks[0],
    );

    f.render_widget(
        Paragraph::new(shortcut_line(app_state.state.is_in_flight()))
            .alignment(ratatui::layout::Alignment::Right),
        chunks[1],
    );
}

fn shortcut_line(in_flight: bool) -> Line<'static> {
    let key = Style::default().fg(ACCENT);
    let label = Style::default().fg(Color::DarkGray);
    let mut spans = vec![
        Span::styled("Tab", key),
        Span::styled(" focus  ", label),
        Span::styled("Ctrl+R", key),
        Span::styled(" remove  ", label),
        Span::styled("Ctrl+Y", key),
        Span::styled(" copy  ", label),
        Span::styled("Ctrl+S", key),
        Span::styled(" ask  ", label),
    ];
    if in_flight {
        spans.push(Span::styled("Esc", key));
        spans.push(Span::styled(" cancel  ", label));
    }
    spans.push(Span::styled("Ctrl+C", key));
    spans.push(Span::styled(" quit ", label));
    Line::from(spans)
}
