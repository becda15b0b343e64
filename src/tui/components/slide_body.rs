//! # Slide Body
//!
//! Draws the current slide's Markdown inside a scroll view. Long slides
//! scroll smoothly: Up/Down and the mouse wheel move a scroll *target*, and
//! each frame eases the drawn offset halfway toward it.
//!
//! While a slide is hidden (between the two phases of a transition) the
//! body area is left empty.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::text::Text;
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::tui::component::Component;

/// Lines moved per scroll step.
pub const SCROLL_STEP: i32 = 3;

/// Smooth scroll position for the slide body.
#[derive(Debug, Default)]
pub struct SlideScroll {
    offset: f32,
    target: f32,
    max: u16,
    state: ScrollViewState,
}

impl SlideScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the target by `lines` (negative = up), clamped to the content.
    pub fn scroll_by(&mut self, lines: i32) {
        self.target = (self.target + lines as f32).clamp(0.0, f32::from(self.max));
    }

    /// Jump back to the top without animating (used on slide change).
    pub fn reset(&mut self) {
        self.offset = 0.0;
        self.target = 0.0;
        self.state.set_offset(Position::new(0, 0));
    }

    /// Update the scrollable range after layout.
    pub fn set_max(&mut self, max: u16) {
        self.max = max;
        let max = f32::from(max);
        self.target = self.target.min(max);
        self.offset = self.offset.min(max);
    }

    /// Advance the easing one frame and return the offset to draw.
    pub fn step(&mut self) -> u16 {
        let remaining = self.target - self.offset;
        if remaining.abs() < 0.5 {
            self.offset = self.target;
        } else {
            self.offset += remaining * 0.5;
        }
        self.offset.round() as u16
    }

    pub fn is_animating(&self) -> bool {
        self.target != self.offset
    }

    pub fn target(&self) -> u16 {
        self.target as u16
    }
}

pub struct SlideBody<'a> {
    pub content: Text<'static>,
    pub visible: bool,
    pub scroll: &'a mut SlideScroll,
}

impl Component for SlideBody<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if !self.visible {
            return;
        }
        let block = Block::default().padding(Padding::new(2, 2, 1, 0));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Leave a column for the scrollbar
        let content_width = inner.width.saturating_sub(1);
        let paragraph = Paragraph::new(self.content.clone()).wrap(Wrap { trim: false });
        let content_height = paragraph.line_count(content_width) as u16;

        self.scroll
            .set_max(content_height.saturating_sub(inner.height));
        let offset = self.scroll.step();

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, content_height));

        self.scroll.state.set_offset(Position::new(0, offset));
        frame.render_stateful_widget(scroll_view, inner, &mut self.scroll.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_scroll_eases_toward_target() {
        let mut scroll = SlideScroll::new();
        scroll.set_max(20);
        scroll.scroll_by(8);
        assert!(scroll.is_animating());
        assert_eq!(scroll.step(), 4);
        assert_eq!(scroll.step(), 6);
        for _ in 0..10 {
            scroll.step();
        }
        assert!(!scroll.is_animating());
        assert_eq!(scroll.step(), 8);
    }

    #[test]
    fn test_scroll_target_clamped() {
        let mut scroll = SlideScroll::new();
        scroll.set_max(5);
        scroll.scroll_by(100);
        assert_eq!(scroll.target(), 5);
        scroll.scroll_by(-100);
        assert_eq!(scroll.target(), 0);
    }

    #[test]
    fn test_reset_is_immediate() {
        let mut scroll = SlideScroll::new();
        scroll.set_max(10);
        scroll.scroll_by(6);
        scroll.step();
        scroll.reset();
        assert!(!scroll.is_animating());
        assert_eq!(scroll.step(), 0);
    }

    #[test]
    fn test_hidden_body_draws_nothing() {
        let backend = TestBackend::new(20, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut scroll = SlideScroll::new();
        let mut body = SlideBody {
            content: Text::from("Hello"),
            visible: false,
            scroll: &mut scroll,
        };
        terminal.draw(|f| body.render(f, f.area())).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(!text.contains("Hello"));
    }

    #[test]
    fn test_visible_body_draws_content() {
        let backend = TestBackend::new(30, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut scroll = SlideScroll::new();
        let mut body = SlideBody {
            content: Text::from("Hello"),
            visible: true,
            scroll: &mut scroll,
        };
        terminal.draw(|f| body.render(f, f.area())).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Hello"));
    }
}
