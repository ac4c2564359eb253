//! Result overlay — the diagnosis dialog

use kokoro_domain::Score;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct ResultWidget {
    score: Score,
}

impl ResultWidget {
    pub fn new(score: Score) -> Self {
        Self { score }
    }

    fn verdict(&self) -> (&'static str, Color) {
        let value = self.score.value();
        if value >= 4.0 {
            ("Doing great — keep it up!", Color::Green)
        } else if value >= 2.5 {
            ("Holding steady.", Color::Yellow)
        } else {
            ("Be gentle with yourself today.", Color::Red)
        }
    }
}

impl Widget for ResultWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (verdict, color) = self.verdict();

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Your mental health score",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                self.score.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(verdict, Style::default().fg(color))),
            Line::from(""),
            Line::from(Span::styled(
                "Press Esc to close",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" Diagnosis "))
            .render(area, buf);
    }
}
