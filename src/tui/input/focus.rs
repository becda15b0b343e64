//! Keyboard focus between on-screen controls.
//!
//! Tab / Shift+Tab walk the controls that currently exist; Enter activates
//! the focused one. Only keyboard focus draws an outline, so a mouse click
//! clears it.

use crate::core::action::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    PrevButton,
    NextButton,
    MenuToggle,
}

impl FocusTarget {
    pub fn action(self) -> Action {
        match self {
            FocusTarget::PrevButton => Action::PreviousSlide,
            FocusTarget::NextButton => Action::NextSlide,
            FocusTarget::MenuToggle => Action::ToggleMenu,
        }
    }
}

#[derive(Debug, Default)]
pub struct FocusRing {
    focused: Option<FocusTarget>,
}

impl FocusRing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> Option<FocusTarget> {
        self.focused
    }

    pub fn is_focused(&self, target: FocusTarget) -> bool {
        self.focused == Some(target)
    }

    pub fn clear(&mut self) {
        self.focused = None;
    }

    /// Move to the next available control, wrapping around.
    pub fn advance(&mut self, available: &[FocusTarget]) {
        self.focused = self.step(available, true);
    }

    /// Move to the previous available control, wrapping around.
    pub fn retreat(&mut self, available: &[FocusTarget]) {
        self.focused = self.step(available, false);
    }

    fn step(&self, available: &[FocusTarget], forward: bool) -> Option<FocusTarget> {
        let len = available.len();
        if len == 0 {
            return None;
        }
        let position = self
            .focused
            .and_then(|f| available.iter().position(|a| *a == f));
        let index = match (position, forward) {
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
            // First Tab lands on the first control, first Shift+Tab on the last
            (None, true) => 0,
            (None, false) => len - 1,
        };
        Some(available[index])
    }

    /// Action for Enter on the focused control.
    pub fn activate(&self) -> Option<Action> {
        self.focused.map(FocusTarget::action)
    }
}
