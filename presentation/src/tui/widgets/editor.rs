//! Editor widget — single-line text input with a block cursor
//!
//! Rendered only in Insert mode, below the question list.

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct EditorWidget<'a> {
    state: &'a TuiState,
}

impl<'a> EditorWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for EditorWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = &self.state.edit_input;
        let cursor = self.state.edit_cursor.min(text.len());
        let cursor_style = Style::default().fg(Color::Black).bg(Color::Green);

        let prompt = Span::styled(
            "> ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        );

        let mut spans = vec![prompt, Span::raw(text[..cursor].to_string())];
        let after = &text[cursor..];
        if after.is_empty() {
            // Cursor at end of line — block cursor on a space
            spans.push(Span::styled(" ", cursor_style));
        } else {
            let ch_len = after.chars().next().map(|c| c.len_utf8()).unwrap_or(1);
            spans.push(Span::styled(after[..ch_len].to_string(), cursor_style));
            if ch_len < after.len() {
                spans.push(Span::raw(after[ch_len..].to_string()));
            }
        }

        Paragraph::new(Line::from(spans))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Question text ")
                    .style(Style::default().fg(Color::Green)),
            )
            .render(area, buf);
    }
}
