//! Pointer hit testing and click routing.
//!
//! The menu panel is tested first and swallows every click that lands on
//! it, so a click inside the panel never reaches the outside-click closer.

use ratatui::layout::{Position, Rect};

use crate::core::action::Action;
use crate::core::state::App;
use crate::tui::ui::ScreenLayout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    PrevButton,
    NextButton,
    MenuToggle,
    MenuClose,
    /// Index into `App::menu`.
    MenuEntry(usize),
    /// Inside the panel but not on an entry or the close control.
    MenuPanel,
    Outside,
}

fn inside(rect: Option<Rect>, col: u16, row: u16) -> bool {
    rect.is_some_and(|r| r.contains(Position::new(col, row)))
}

/// Find what is under a cell. `menu_offset` is the menu list's scroll offset.
pub fn hit_test(
    layout: &ScreenLayout,
    col: u16,
    row: u16,
    menu_offset: usize,
    menu_len: usize,
) -> Hit {
    if inside(layout.menu_panel, col, row) {
        if inside(layout.menu_close, col, row) {
            return Hit::MenuClose;
        }
        if let Some(entries) = layout.menu_entries
            && inside(Some(entries), col, row)
        {
            let index = menu_offset + usize::from(row - entries.y);
            if index < menu_len {
                return Hit::MenuEntry(index);
            }
        }
        return Hit::MenuPanel;
    }
    if inside(layout.menu_toggle, col, row) {
        return Hit::MenuToggle;
    }
    if inside(layout.prev_button, col, row) {
        return Hit::PrevButton;
    }
    if inside(layout.next_button, col, row) {
        return Hit::NextButton;
    }
    Hit::Outside
}

/// Actions for a click. Prev/next are outside the menu, so with the menu
/// open they both navigate and close it.
pub fn click_actions(hit: Hit, app: &App) -> Vec<Action> {
    let close_if_open = |mut actions: Vec<Action>| {
        if app.menu_open {
            actions.push(Action::CloseMenu);
        }
        actions
    };
    match hit {
        Hit::PrevButton => close_if_open(vec![Action::PreviousSlide]),
        Hit::NextButton => close_if_open(vec![Action::NextSlide]),
        Hit::MenuToggle => vec![Action::ToggleMenu],
        Hit::MenuClose => vec![Action::CloseMenu],
        Hit::MenuEntry(index) => match app.menu.get(index).and_then(|e| e.position()) {
            Some(position) => vec![Action::GoToSlide(position), Action::CloseMenu],
            None => {
                log::debug!("Menu entry {} has no numeric target", index);
                Vec::new()
            }
        },
        Hit::MenuPanel => Vec::new(),
        Hit::Outside => close_if_open(Vec::new()),
    }
}
