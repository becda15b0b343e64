//! # TitleBar Component
//!
//! Top line: deck name, current slide title and an optional status message.
//!
//! Stateless. All three props come from `App`:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.deck.name.clone(), slide.display_title(), String::new());
//! title_bar.render(frame, area);
//! ```
//!
//! Formatting:
//!
//! 1. **Status message**: `" talk · Tokenization | Fullscreen unavailable"`
//! 2. **Default**: `" talk · Tokenization"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    pub deck_name: String,
    pub slide_title: String,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(deck_name: String, slide_title: String, status_message: String) -> Self {
        Self {
            deck_name,
            slide_title,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                format!(" {}", self.deck_name),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(" · ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                self.slide_title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status_message)));
        }
        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new("talk".to_string(), "Intro".to_string(), String::new());
        let text = rendered(&mut title_bar);
        assert!(text.contains("talk"));
        assert!(text.contains("Intro"));
        assert!(!text.contains('|'));
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new(
            "talk".to_string(),
            "Tokenization".to_string(),
            "Fullscreen unavailable".to_string(),
        );
        let text = rendered(&mut title_bar);
        assert!(text.contains("Tokenization"));
        assert!(text.contains("| Fullscreen unavailable"));
    }
}
