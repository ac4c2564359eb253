//! Help overlay — keyboard reference

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct HelpWidget;

impl Widget for HelpWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let heading = |text: &'static str| {
            Line::from(Span::styled(
                text,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))
        };

        let lines = vec![
            heading("Keyboard Shortcuts"),
            Line::from(""),
            heading("Answer mode:"),
            Line::from("  j/k, arrows   Select a question"),
            Line::from("  y / n / x     Answer yes / no / not applicable"),
            Line::from("  d, Enter      Show the diagnosis (all answered)"),
            Line::from("  e             Edit the question set"),
            Line::from("  q, Ctrl-C     Quit"),
            Line::from(""),
            heading("Edit mode:"),
            Line::from("  i, Enter      Rewrite the prompt text"),
            Line::from("  1-5, +/-      Change the health points"),
            Line::from("  a             Add a question"),
            Line::from("  D             Delete the selected question"),
            Line::from("  w             Save changes"),
            Line::from("  Esc           Discard changes"),
            Line::from(""),
            Line::from(Span::styled(
                "Press Esc to close this help",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(" Help "))
            .render(area, buf);
    }
}
