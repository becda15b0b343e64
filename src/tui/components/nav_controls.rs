//! Bottom control row: `◀ Prev`, the slide counter, `Next ▶`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::components::{focus_outline, with_opacity};
use crate::tui::view::ButtonState;

pub const BUTTON_WIDTH: u16 = 10;

/// Split the control row into `[prev, counter, next]`.
pub fn control_areas(area: Rect) -> [Rect; 3] {
    Layout::horizontal([
        Constraint::Length(BUTTON_WIDTH),
        Constraint::Min(0),
        Constraint::Length(BUTTON_WIDTH),
    ])
    .areas(area)
}

pub struct NavButton {
    pub label: &'static str,
    pub state: ButtonState,
    pub focused: bool,
    /// Auto-hide opacity of the whole control row.
    pub row_opacity: f32,
}

impl NavButton {
    pub fn prev(state: ButtonState, focused: bool, row_opacity: f32) -> Self {
        Self {
            label: "◀ Prev",
            state,
            focused,
            row_opacity,
        }
    }

    pub fn next(state: ButtonState, focused: bool, row_opacity: f32) -> Self {
        Self {
            label: "Next ▶",
            state,
            focused,
            row_opacity,
        }
    }
}

impl Component for NavButton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let opacity = self.state.opacity().min(self.row_opacity);
        let mut style = with_opacity(
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            opacity,
        );
        if self.focused {
            style = focus_outline(style);
        }
        let button = Paragraph::new(self.label)
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(button, area);
    }
}

pub struct SlideCounter {
    pub text: String,
    pub opacity: f32,
}

impl Component for SlideCounter {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let counter = Paragraph::new(self.text.as_str())
            .style(with_opacity(Style::default(), self.opacity))
            .alignment(Alignment::Center);
        frame.render_widget(counter, area);
    }
}
