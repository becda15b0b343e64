//! Keyboard binding table.
//!
//! Every key the presenter reacts to is listed once in [`BINDINGS`] together
//! with the context it is active in. Nothing here mutates state; the event
//! loop turns a resolved [`Binding`] into actions.

use crossterm::event::{KeyCode, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    Next,
    Previous,
    First,
    Last,
    CloseMenu,
    ToggleFullscreen,
    ToggleMenu,
    OpenJumpPrompt,
    FocusNext,
    FocusPrevious,
    Activate,
    ScrollUp,
    ScrollDown,
    Quit,
}

/// When a binding is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    /// Menu closed and no text entry focused.
    Navigation,
    /// Anywhere except inside a text entry.
    OutsideTextEntry,
}

struct KeyBinding {
    code: KeyCode,
    binding: Binding,
    scope: Scope,
}

const fn nav(code: KeyCode, binding: Binding) -> KeyBinding {
    KeyBinding {
        code,
        binding,
        scope: Scope::Navigation,
    }
}

const fn anywhere(code: KeyCode, binding: Binding) -> KeyBinding {
    KeyBinding {
        code,
        binding,
        scope: Scope::OutsideTextEntry,
    }
}

const BINDINGS: &[KeyBinding] = &[
    nav(KeyCode::Right, Binding::Next),
    nav(KeyCode::Char(' '), Binding::Next),
    nav(KeyCode::PageDown, Binding::Next),
    nav(KeyCode::Left, Binding::Previous),
    nav(KeyCode::PageUp, Binding::Previous),
    nav(KeyCode::Home, Binding::First),
    nav(KeyCode::End, Binding::Last),
    nav(KeyCode::Esc, Binding::CloseMenu),
    nav(KeyCode::Tab, Binding::FocusNext),
    nav(KeyCode::BackTab, Binding::FocusPrevious),
    nav(KeyCode::Enter, Binding::Activate),
    nav(KeyCode::Up, Binding::ScrollUp),
    nav(KeyCode::Down, Binding::ScrollDown),
    anywhere(KeyCode::Char('f'), Binding::ToggleFullscreen),
    anywhere(KeyCode::Char('F'), Binding::ToggleFullscreen),
    nav(KeyCode::Char('m'), Binding::ToggleMenu),
    nav(KeyCode::Char('g'), Binding::OpenJumpPrompt),
    nav(KeyCode::Char('q'), Binding::Quit),
];

/// Where keyboard focus currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyContext {
    pub menu_open: bool,
    pub text_entry_focused: bool,
}

/// Look up the binding for a key press in the given context.
///
/// Chords with Ctrl, Alt, Super or Meta never match; the terminal and
/// window manager keep those. Shift is allowed (`F`, BackTab).
pub fn resolve(code: KeyCode, modifiers: KeyModifiers, ctx: KeyContext) -> Option<Binding> {
    if ctx.text_entry_focused {
        return None;
    }
    if modifiers.intersects(
        KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER | KeyModifiers::META,
    ) {
        return None;
    }

    BINDINGS
        .iter()
        .filter(|kb| kb.code == code)
        .find(|kb| match kb.scope {
            Scope::Navigation => !ctx.menu_open,
            Scope::OutsideTextEntry => true,
        })
        .map(|kb| kb.binding)
}
