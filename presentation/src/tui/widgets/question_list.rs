//! Question list widget
//!
//! Renders the visible list (draft while editing, live otherwise) as two
//! rows per question: the prompt, then the answer markers and weight
//! hearts. Scrolls so the selected question stays in view.

use crate::tui::state::TuiState;
use kokoro_domain::{Answer, Question};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const ROWS_PER_QUESTION: usize = 3; // prompt, detail, spacer

pub struct QuestionListWidget<'a> {
    state: &'a TuiState,
}

impl<'a> QuestionListWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for QuestionListWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let editing = self.state.engine.is_editing();
        let questions = self.state.engine.visible();

        let title = if editing {
            " Questions (draft) "
        } else {
            " Questions "
        };
        let block = Block::default().borders(Borders::ALL).title(title);

        if questions.is_empty() {
            let hint = if editing {
                "No questions — press a to add one"
            } else {
                "No questions configured — press e to add some"
            };
            Paragraph::new(Line::from(Span::styled(
                hint,
                Style::default().fg(Color::DarkGray),
            )))
            .block(block)
            .render(area, buf);
            return;
        }

        let mut lines: Vec<Line> = Vec::with_capacity(questions.len() * ROWS_PER_QUESTION);
        for (index, question) in questions.iter().enumerate() {
            let selected = index == self.state.selected;
            lines.push(prompt_line(question, selected));
            lines.push(detail_line(question, editing));
            lines.push(Line::from(""));
        }

        // Keep the selected question's rows inside the viewport
        let inner_height = area.height.saturating_sub(2) as usize;
        let selected_top = self.state.selected * ROWS_PER_QUESTION;
        let scroll = if selected_top + ROWS_PER_QUESTION > inner_height {
            (selected_top + ROWS_PER_QUESTION - inner_height) as u16
        } else {
            0
        };

        Paragraph::new(lines)
            .block(block)
            .scroll((scroll, 0))
            .render(area, buf);
    }
}

fn prompt_line(question: &Question, selected: bool) -> Line<'static> {
    let marker = if selected { "> " } else { "  " };
    let style = if selected {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::styled(marker.to_string(), Style::default().fg(Color::Magenta)),
        Span::styled(question.text.clone(), style),
    ])
}

fn detail_line(question: &Question, editing: bool) -> Line<'static> {
    let mut spans = vec![Span::raw("    ")];

    if !editing {
        spans.extend(answer_markers(question.answer));
        spans.push(Span::raw("   "));
    }

    spans.push(Span::styled(
        "points: ".to_string(),
        Style::default().fg(Color::DarkGray),
    ));
    let weight = question.weight.get() as usize;
    spans.push(Span::styled(
        "\u{2665}".repeat(weight),
        Style::default().fg(Color::Magenta),
    ));
    spans.push(Span::styled(
        "\u{2661}".repeat(5 - weight),
        Style::default().fg(Color::DarkGray),
    ));

    Line::from(spans)
}

fn answer_markers(answer: Option<Answer>) -> Vec<Span<'static>> {
    let options = [
        (Answer::Yes, "yes"),
        (Answer::No, "no"),
        (Answer::NotApplicable, "n/a"),
    ];

    let mut spans = Vec::with_capacity(options.len() * 2);
    for (option, label) in options {
        let chosen = answer == Some(option);
        let mark = if chosen { "(o)" } else { "( )" };
        let style = if chosen {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("{mark} {label}"), style));
        spans.push(Span::raw("  "));
    }
    spans
}
