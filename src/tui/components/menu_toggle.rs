//! Hamburger button for the jump menu. Shows `☰` while the menu is closed
//! and morphs into `✕` while it is open.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::components::{focus_outline, with_opacity};

pub const HAMBURGER: &str = "☰";
pub const CLOSE: &str = "✕";

pub struct MenuToggle {
    pub open: bool,
    pub focused: bool,
    pub opacity: f32,
}

impl MenuToggle {
    pub fn glyph(&self) -> &'static str {
        if self.open { CLOSE } else { HAMBURGER }
    }
}

impl Component for MenuToggle {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut style = with_opacity(Style::default().fg(Color::Cyan), self.opacity);
        if self.focused {
            style = focus_outline(style);
        }
        let toggle = Paragraph::new(self.glyph())
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(toggle, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_morphs() {
        let mut toggle = MenuToggle {
            open: false,
            focused: false,
            opacity: 1.0,
        };
        assert_eq!(toggle.glyph(), HAMBURGER);
        toggle.open = true;
        assert_eq!(toggle.glyph(), CLOSE);
    }
}
