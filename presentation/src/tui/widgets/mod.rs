//! TUI widgets — ratatui components for the main layout
//!
//! Layout:
//! ┌── Header (3) ────────────────────────────────────┐
//! ├── Question list (flex) ──────────────────────────┤
//! ├── Editor (3, Insert mode only) ──────────────────┤
//! └── StatusBar (1) ─────────────────────────────────┘

pub mod confirm;
pub mod editor;
pub mod header;
pub mod help;
pub mod question_list;
pub mod result;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Compute the main layout regions from a terminal area
pub struct MainLayout {
    pub header: Rect,
    pub list: Rect,
    /// Present only while the text editor is open
    pub editor: Option<Rect>,
    pub status_bar: Rect,
}

impl MainLayout {
    /// Compute the layout; `show_editor` reserves a row for the text input
    pub fn compute(area: Rect, show_editor: bool) -> Self {
        let header_h: u16 = 3;
        let editor_h: u16 = if show_editor { 3 } else { 0 };
        let status_h: u16 = 1;

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(header_h),
                Constraint::Fill(1),
                Constraint::Length(editor_h),
                Constraint::Length(status_h),
            ])
            .split(area);

        Self {
            header: vertical[0],
            list: vertical[1],
            editor: show_editor.then_some(vertical[2]),
            status_bar: vertical[3],
        }
    }

    /// Centered overlay rectangle for dialogs
    pub fn centered_overlay(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vert = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(vert[1])[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_without_editor() {
        let layout = MainLayout::compute(Rect::new(0, 0, 80, 24), false);
        assert_eq!(layout.header.height, 3);
        assert!(layout.editor.is_none());
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.list.height, 20);
    }

    #[test]
    fn test_layout_with_editor() {
        let layout = MainLayout::compute(Rect::new(0, 0, 80, 24), true);
        let editor = layout.editor.unwrap();
        assert_eq!(editor.height, 3);
        assert_eq!(layout.list.height, 17);
    }

    #[test]
    fn test_centered_overlay_is_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let overlay = MainLayout::centered_overlay(60, 50, area);
        assert!(overlay.x >= 20 && overlay.width <= 60);
        assert!(overlay.y >= 10 && overlay.height <= 20);
    }
}
