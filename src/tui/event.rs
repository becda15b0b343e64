use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

/// TUI-specific input events.
///
/// Keys are passed through mostly raw; the binding table in
/// `input::keyboard` decides what they mean in the current context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// Ctrl+C, always quits
    ForceQuit,
    Key {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
    /// Left button pressed (start of click or swipe)
    MouseDown(u16, u16),
    /// Left button released (end of click or swipe)
    MouseUp(u16, u16),
    /// Pointer moved or dragged
    MouseMove(u16, u16),
    ScrollUp,
    ScrollDown,
    Resize,
}

impl TuiEvent {
    /// Unmodified key press.
    pub fn key(code: KeyCode) -> Self {
        TuiEvent::Key {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).unwrap_or(false) {
        return None;
    }
    match event::read().ok()? {
        Event::Key(key_event) => {
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (modifiers, code) => Some(TuiEvent::Key { code, modifiers }),
            }
        }
        Event::Mouse(mouse_event) => {
            let (col, row) = (mouse_event.column, mouse_event.row);
            match mouse_event.kind {
                MouseEventKind::Down(MouseButton::Left) => Some(TuiEvent::MouseDown(col, row)),
                MouseEventKind::Up(MouseButton::Left) => Some(TuiEvent::MouseUp(col, row)),
                MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                    Some(TuiEvent::MouseMove(col, row))
                }
                MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
                MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
                _ => None,
            }
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}
