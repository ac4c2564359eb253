//! Header widget — title plus answering/editing status

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct HeaderWidget<'a> {
    state: &'a TuiState,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = Span::styled(
            " Kokoro Check ",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        );

        let status = if self.state.engine.is_editing() {
            Span::styled(
                "editing question set",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
            )
        } else {
            let answered = self.state.engine.answered_count();
            let total = self.state.engine.questions().len();
            let color = if self.state.engine.is_complete() {
                Color::Green
            } else {
                Color::DarkGray
            };
            Span::styled(format!("{answered}/{total} answered"), Style::default().fg(color))
        };

        let line = Line::from(vec![title, Span::raw(" — "), status]);

        Paragraph::new(line)
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }
}
