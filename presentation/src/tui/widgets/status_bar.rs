//! Status bar — mode indicator, key hints, and flash messages

use crate::tui::mode::Mode;
use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn hints(&self) -> &'static str {
        if self.state.overlay_open() {
            return "esc close";
        }
        match self.state.mode {
            Mode::Answer => "y/n/x answer  j/k move  d diagnose  e edit  ? help  q quit",
            Mode::Edit => "i text  1-5/+/- points  a add  D delete  w save  esc discard",
            Mode::Insert => "enter apply  esc cancel",
            Mode::ConfirmDelete | Mode::ConfirmDiscard => "y yes  n no",
        }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mode = self.state.mode;
        let indicator = Span::styled(
            format!(" {} ", mode.indicator()),
            Style::default()
                .fg(Color::Black)
                .bg(mode.color())
                .add_modifier(Modifier::BOLD),
        );

        let mut spans = vec![indicator, Span::raw(" ")];

        if let Some((message, _)) = &self.state.flash_message {
            spans.push(Span::styled(
                message.clone(),
                Style::default().fg(Color::Yellow),
            ));
        } else {
            spans.push(Span::styled(
                self.hints(),
                Style::default().fg(Color::DarkGray),
            ));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
