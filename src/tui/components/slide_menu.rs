//! # Slide Menu Component
//!
//! Side panel listing menu entries. Opened with `m` or the hamburger,
//! dismissed with Esc, the close control, or a click outside it.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SlideMenuState` lives in `TuiState`
//! - `SlideMenu` is created each frame with borrowed state
//!
//! Two kinds of marking are drawn: the *highlight* (the entry for the
//! current slide, computed by the render pass) and the *cursor* (keyboard
//! selection inside the open panel).

use crossterm::event::KeyCode;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};
use unicode_width::UnicodeWidthStr;

use crate::core::menu::MenuEntry;
use crate::tui::component::EventHandler;
use crate::tui::components::menu_toggle::CLOSE;
use crate::tui::event::TuiEvent;

/// Persistent state for the menu panel.
#[derive(Debug, Default)]
pub struct SlideMenuState {
    pub cursor: usize,
    pub len: usize,
    pub list_state: ListState,
}

impl SlideMenuState {
    pub fn new(len: usize) -> Self {
        let mut list_state = ListState::default();
        if len > 0 {
            list_state.select(Some(0));
        }
        Self {
            cursor: 0,
            len,
            list_state,
        }
    }

    /// Put the cursor on `index` (clamped), e.g. the highlighted entry on open.
    pub fn select(&mut self, index: usize) {
        if self.len == 0 {
            return;
        }
        self.cursor = index.min(self.len - 1);
        self.list_state.select(Some(self.cursor));
    }

    /// Scroll offset of the list, for hit testing.
    pub fn offset(&self) -> usize {
        self.list_state.offset()
    }
}

impl EventHandler for SlideMenuState {
    type Event = MenuEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<MenuEvent> {
        let TuiEvent::Key { code, .. } = event else {
            return None;
        };
        match code {
            KeyCode::Esc | KeyCode::Char('m') => Some(MenuEvent::Dismiss),
            KeyCode::Up => {
                self.select(self.cursor.saturating_sub(1));
                None
            }
            KeyCode::Down => {
                self.select(self.cursor + 1);
                None
            }
            KeyCode::Home => {
                self.select(0);
                None
            }
            KeyCode::End => {
                self.select(self.len.saturating_sub(1));
                None
            }
            KeyCode::Enter if self.len > 0 => Some(MenuEvent::Choose(self.cursor)),
            _ => None,
        }
    }
}

/// Events emitted by the menu panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Index into the menu entries.
    Choose(usize),
    Dismiss,
}

/// Transient render wrapper for the menu panel.
pub struct SlideMenu<'a> {
    pub state: &'a mut SlideMenuState,
    pub entries: &'a [MenuEntry],
    /// Per-entry highlight flags from the render pass.
    pub highlighted: Vec<bool>,
}

impl SlideMenu<'_> {
    pub fn render(&mut self, frame: &mut Frame, panel: Rect) {
        frame.render_widget(Clear, panel);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Slides ")
            .title_alignment(Alignment::Left)
            .title(Line::from(format!(" {CLOSE} ")).right_aligned())
            .title_bottom(Line::from(" ↑↓ Move  Enter Jump  Esc Close ").centered())
            .padding(Padding::horizontal(0));

        let inner_width = panel.width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let highlighted = self.highlighted.get(i).copied().unwrap_or(false);
                let marker = if highlighted { "▶ " } else { "  " };
                let label = truncate_str(&entry.label, inner_width.saturating_sub(2));
                let mut style = if highlighted {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                if i == self.state.cursor {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                ListItem::new(Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(label, style),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, panel, &mut self.state.list_state);
    }
}

/// Truncate to `max_width` display columns, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + w > max_width - 3 {
            break;
        }
        width += w;
        out.push(ch);
    }
    out.push_str("...");
    out
}
