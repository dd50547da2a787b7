//! TUI rendering: header, the two panels, bottom bar, notice toast.

mod bar;
mod panels;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use std::sync::OnceLock;
use std::time::Instant;

use super::app::{App, NoticeKind};
use super::constants::{ACCENT, SPINNER};

/// Start time for the spinner animation phase.
static SPINNER_START: OnceLock<Instant> = OnceLock::new();

pub(super) fn draw(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(f, app, chunks[0]);
    panels::draw_panels(f, app, chunks[1]);
    bar::draw_bottom_bar(f, app, chunks[2]);

    draw_notice_toast(f, app, area);
}

/// Current spinner frame while a request is in flight.
pub(super) fn spinner_frame() -> &'static str {
    let start = SPINNER_START.get_or_init(Instant::now);
    let phase = start.elapsed().as_millis() as usize;
    SPINNER[(phase / 80) % SPINNER.len()]
}

/// Header: spinner/logo on the left, centered title, model name on the right.
fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(28),
        ])
        .split(area);

    let logo_symbol = if app.state.is_in_flight() {
        spinner_frame()
    } else {
        "◆"
    };
    let logo = Line::from(Span::styled(
        format!(" {}", logo_symbol),
        Style::default().fg(ACCENT),
    ));
    f.render_widget(Paragraph::new(logo), header_chunks[0]);

    let title_str = format!("{} ", crate::core::app::NAME);
    let title_len = title_str.len() as u16;
    let title_area = Rect {
        x: area.x + area.width.saturating_sub(title_len) / 2,
        y: area.y,
        width: title_len.min(area.width),
        height: area.height,
    };
    let title = Line::from(Span::styled(
        title_str,
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    ));
    f.render_widget(Paragraph::new(title), title_area);

    let model = Line::from(Span::styled(
        app.model_name.clone(),
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(
        Paragraph::new(model).alignment(ratatui::layout::Alignment::Right),
        header_chunks[2],
    );
}

/// Toast: top right, below the header. Opaque background so it reads over
/// the panels.
fn draw_notice_toast(f: &mut Frame, app: &mut App, area: Rect) {
    app.expire_notice();
    let Some(notice) = &app.notice else { return };

    const HEADER_HEIGHT: u16 = 2;
    let color = match notice.kind {
        NoticeKind::Success => ACCENT,
        NoticeKind::Error => Color::Red,
    };
    let text = format!(" {} ", notice.text);
    let toast_width = (text.chars().count() as u16 + 2).min(area.width);
    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(toast_width).saturating_sub(1),
        y: area.y + HEADER_HEIGHT,
        width: toast_width,
        height: 3,
    };
    f.render_widget(Clear, toast_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(Color::Black));
    let para = Paragraph::new(Line::from(text))
        .block(block)
        .style(Style::default().fg(color).bg(Color::Black));
    f.render_widget(para, toast_area);
}
