//! # Jump Prompt
//!
//! Single-line text entry for "go to slide N", opened with `g`. While it is
//! open it owns the keyboard: no other binding fires, not even `F`.
//!
//! The prompt only collects text. Turning it into a slide number is the
//! caller's job (`core::menu::parse_position`).

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const MAX_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JumpEvent {
    Submit(String),
    Cancel,
}

#[derive(Debug, Default)]
pub struct JumpPrompt {
    pub buffer: String,
}

impl JumpPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Small box anchored above the bottom of `area`.
    pub fn area(area: Rect) -> Rect {
        let width = 24.min(area.width);
        let height = 3.min(area.height);
        Rect::new(
            area.x + (area.width - width) / 2,
            area.y + area.height.saturating_sub(height + 2),
            width,
            height,
        )
    }
}

impl EventHandler for JumpPrompt {
    type Event = JumpEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<JumpEvent> {
        let TuiEvent::Key { code, modifiers } = event else {
            return None;
        };
        match code {
            KeyCode::Enter => Some(JumpEvent::Submit(self.buffer.clone())),
            KeyCode::Esc => Some(JumpEvent::Cancel),
            KeyCode::Backspace => {
                self.buffer.pop();
                None
            }
            KeyCode::Char(c)
                if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                    && self.buffer.chars().count() < MAX_LEN =>
            {
                self.buffer.push(*c);
                None
            }
            _ => None,
        }
    }
}

impl Component for JumpPrompt {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let prompt_area = Self::area(area);
        frame.render_widget(Clear, prompt_area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Go to slide ");
        let inner = block.inner(prompt_area);
        frame.render_widget(Paragraph::new(self.buffer.as_str()).block(block), prompt_area);

        let cursor_x = inner.x + (self.buffer.chars().count() as u16).min(inner.width);
        frame.set_cursor_position(Position::new(cursor_x, inner.y));
    }
}
