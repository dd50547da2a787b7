//! TUI: the two-panel interface (Text Processor / AI Assistant).

mod app;
mod constants;
mod draw;
mod handlers;

pub use app::App;

use crossterm::event::{self, Event};
use crossterm::execute;
use std::io;
use std::sync::Arc;

use tokio::runtime::Runtime;

use crate::core::config::Config;
use crate::core::llm::CompletionError;

use draw::draw;
use handlers::{HandleResult, PendingAsk};

/// Guard that restores terminal state on drop (including on panic).
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Self {
        Self
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
    }
}

/// Run the TUI loop. Uses a dedicated Tokio runtime for the async
/// completion calls.
pub fn run(config: Arc<Config>) -> io::Result<()> {
    use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, enable_raw_mode};
    use ratatui::Terminal;
    use ratatui::backend::CrosstermBackend;

    let _guard = TerminalGuard::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    execute!(stdout, Clear(ClearType::All))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let rt = Arc::new(
        Runtime::new().map_err(|e| io::Error::other(format!("Failed to create runtime: {}", e)))?,
    );

    let mut app = App::new(config.model_id.clone());
    let mut pending_ask: Option<PendingAsk> = None;

    loop {
        // Resolve a finished completion request before drawing.
        if let Some(ref pending) = pending_ask
            && let Ok(result) = pending.result_rx.try_recv()
        {
            match result {
                Ok(content) => {
                    app.state.complete_request(content);
                    app.notify_success("AI response received");
                }
                Err(e) => {
                    log::error!("completion request failed: {}", e.log_detail());
                    app.state.fail_request();
                    match e {
                        CompletionError::Cancelled => app.notify_error("Request cancelled"),
                        other => app.notify_error(other.to_string()),
                    }
                }
            }
            pending_ask = None;
        }

        terminal.draw(|f| draw(f, &mut app, f.area()))?;

        if event::poll(std::time::Duration::from_millis(
            constants::EVENT_POLL_TIMEOUT_MS,
        ))? && let Event::Key(key) = event::read()?
        {
            let result = handlers::handle_key(
                key,
                handlers::HandleKeyContext {
                    app: &mut app,
                    config: &config,
                    pending_ask: &mut pending_ask,
                    rt: &rt,
                },
            );
            if result == HandleResult::Break {
                break;
            }
        }
    }

    terminal.show_cursor()?;
    Ok(())
}
