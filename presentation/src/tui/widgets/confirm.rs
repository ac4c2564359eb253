//! Confirmation dialog — delete and discard prompts

use crate::tui::mode::Mode;
use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct ConfirmWidget<'a> {
    state: &'a TuiState,
}

impl<'a> ConfirmWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn prompt(&self) -> String {
        match self.state.mode {
            Mode::ConfirmDelete => {
                let text = self
                    .state
                    .pending_delete
                    .and_then(|id| {
                        self.state
                            .engine
                            .visible()
                            .iter()
                            .find(|q| q.id == id)
                            .map(|q| q.text.clone())
                    })
                    .unwrap_or_else(|| "this question".to_string());
                format!("Delete \"{text}\"?")
            }
            _ => "Discard all edits?".to_string(),
        }
    }
}

impl<'a> Widget for ConfirmWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.prompt(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("y", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                Span::raw(" yes   "),
                Span::styled("n", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                Span::raw(" no"),
            ]),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Confirm ")
                    .style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }
}
