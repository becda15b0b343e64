//! One-line progress bar whose fill is proportional to the deck position.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct ProgressBar {
    pub percent: f64,
}

impl ProgressBar {
    /// Number of filled cells for a bar `width` cells wide.
    pub fn filled_cells(&self, width: u16) -> u16 {
        let fraction = (self.percent / 100.0).clamp(0.0, 1.0);
        (fraction * f64::from(width)).round() as u16
    }
}

impl Component for ProgressBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let filled = self.filled_cells(area.width);
        let empty = area.width.saturating_sub(filled);
        let line = Line::from(vec![
            Span::styled("━".repeat(filled.into()), Style::default().fg(Color::Cyan)),
            Span::styled("─".repeat(empty.into()), Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(line, area);
    }
}
