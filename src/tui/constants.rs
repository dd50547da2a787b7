//! TUI constants: colors, timing, spinner frames.

use ratatui::style::Color;
use std::time::Duration;

/// Accent green color (#98FB98).
pub(super) const ACCENT: Color = Color::Rgb(152, 251, 152);

/// Secondary accent — soft cyan (#7EC8E3) for the AI panel.
pub(super) const ACCENT_SECONDARY: Color = Color::Rgb(126, 200, 227);

/// Event poll timeout in milliseconds (main loop).
pub(crate) const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// How long a notice toast stays on screen.
pub(crate) const NOTICE_DURATION: Duration = Duration::from_secs(3);

/// Scroll amount for arrow keys and mouse wheel in the response view.
pub(crate) const SCROLL_LINES_SMALL: u16 = 3;

/// Spinner frames while a completion request is in flight.
pub(super) const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸"];

/// Height of the pattern entry field (one line plus borders).
pub(super) const PATTERN_FIELD_HEIGHT: u16 = 3;
