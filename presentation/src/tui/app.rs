//! TUI application — terminal lifecycle and the main event loop
//!
//! ```text
//! TuiApp (select! loop)
//!   ├─ crossterm EventStream ── KeyHandler ── action_handler::apply
//!   └─ tick_interval ────────── flash expiry
//! ```
//!
//! Everything is synchronous state manipulation; the async loop exists
//! only to multiplex terminal events with the tick timer.

use super::action_handler;
use super::mode::{Action, KeyHandler};
use super::state::TuiState;
use super::widgets::{
    MainLayout, confirm::ConfirmWidget, editor::EditorWidget, header::HeaderWidget,
    help::HelpWidget, question_list::QuestionListWidget, result::ResultWidget,
    status_bar::StatusBarWidget,
};
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use kokoro_domain::Questionnaire;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::debug;

const FLASH_MAX_AGE: Duration = Duration::from_secs(4);

/// Runtime options for the TUI, sourced from the config file
#[derive(Debug, Clone)]
pub struct TuiOptions {
    /// Tick interval for timers and flash expiry
    pub tick_ms: u64,
    /// Open the help overlay on startup
    pub show_help_on_start: bool,
}

impl Default for TuiOptions {
    fn default() -> Self {
        Self {
            tick_ms: 250,
            show_help_on_start: false,
        }
    }
}

/// Main TUI application
pub struct TuiApp {
    state: TuiState,
    options: TuiOptions,
}

impl TuiApp {
    pub fn new(engine: Questionnaire, options: TuiOptions) -> Self {
        let mut state = TuiState::new(engine);
        state.show_help = options.show_help_on_start;
        Self { state, options }
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(self.options.tick_ms.max(16)));

        loop {
            terminal.draw(|frame| {
                render(frame, &self.state);
            })?;

            if self.state.should_quit {
                break;
            }

            tokio::select! {
                Some(Ok(term_event)) = event_stream.next() => {
                    self.handle_terminal_event(term_event);
                }

                _ = tick.tick() => {
                    self.state.expire_flash(FLASH_MAX_AGE);
                }
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    fn handle_terminal_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };
        // Windows terminals report both press and release
        if key.kind != KeyEventKind::Press {
            return;
        }

        let action = if self.state.overlay_open() {
            overlay_action(key.code, key.modifiers)
        } else {
            KeyHandler::handle(self.state.mode, key)
        };

        if action != Action::None {
            debug!(?action, mode = ?self.state.mode, "action");
        }
        action_handler::apply(&mut self.state, action);
    }
}

/// Key mapping while a modal overlay (help or result) is open
fn overlay_action(code: KeyCode, modifiers: KeyModifiers) -> Action {
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }
    match code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') => {
            Action::CloseOverlay
        }
        _ => Action::None,
    }
}

/// Render all widgets
fn render(frame: &mut ratatui::Frame, state: &TuiState) {
    let show_editor = state.editing_id.is_some();
    let layout = MainLayout::compute(frame.area(), show_editor);

    frame.render_widget(HeaderWidget::new(state), layout.header);
    frame.render_widget(QuestionListWidget::new(state), layout.list);
    if let Some(editor_area) = layout.editor {
        frame.render_widget(EditorWidget::new(state), editor_area);
    }
    frame.render_widget(StatusBarWidget::new(state), layout.status_bar);

    if state.show_help {
        let area = MainLayout::centered_overlay(70, 70, frame.area());
        frame.render_widget(ratatui::widgets::Clear, area);
        frame.render_widget(HelpWidget, area);
    }

    if let Some(score) = state.result {
        let area = MainLayout::centered_overlay(50, 40, frame.area());
        frame.render_widget(ratatui::widgets::Clear, area);
        frame.render_widget(ResultWidget::new(score), area);
    }

    if state.pending_confirmation() {
        let area = MainLayout::centered_overlay(50, 30, frame.area());
        frame.render_widget(ratatui::widgets::Clear, area);
        frame.render_widget(ConfirmWidget::new(state), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_keys_close() {
        assert_eq!(
            overlay_action(KeyCode::Esc, KeyModifiers::NONE),
            Action::CloseOverlay
        );
        assert_eq!(
            overlay_action(KeyCode::Char('q'), KeyModifiers::NONE),
            Action::CloseOverlay
        );
        assert_eq!(
            overlay_action(KeyCode::Char('j'), KeyModifiers::NONE),
            Action::None
        );
        assert_eq!(
            overlay_action(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Action::Quit
        );
    }

    #[test]
    fn test_options_default() {
        let options = TuiOptions::default();
        assert_eq!(options.tick_ms, 250);
        assert!(!options.show_help_on_start);
    }
}
