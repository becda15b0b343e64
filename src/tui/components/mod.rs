//! # TUI Components
//!
//! Every visible part of the presenter.
//!
//! ## Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: deck name and current slide title
//! - `MenuToggle`: hamburger that morphs into a close icon
//! - `NavButton`, `SlideCounter`: the bottom control row
//! - `ProgressBar`: proportional fill for the current position
//!
//! ## Stateful Components
//!
//! - `SlideBody`: Markdown slide content with smooth scrolling
//! - `SlideMenu`: jump menu panel with its own cursor
//! - `JumpPrompt`: single-line "go to slide" text entry
//!
//! Components receive everything they draw as props. None of them read
//! `App` or `PresentationView` directly; `ui::draw_ui` wires the props up.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs
//! ├── menu_toggle.rs
//! ├── nav_controls.rs
//! ├── progress_bar.rs
//! ├── slide_body.rs
//! ├── slide_menu.rs
//! └── jump_prompt.rs
//! ```

use ratatui::style::{Color, Modifier, Style};

pub mod jump_prompt;
pub mod menu_toggle;
pub mod nav_controls;
pub mod progress_bar;
pub mod slide_body;
pub mod slide_menu;
mod title_bar;

pub use jump_prompt::{JumpEvent, JumpPrompt};
pub use menu_toggle::MenuToggle;
pub use nav_controls::{NavButton, SlideCounter};
pub use progress_bar::ProgressBar;
pub use slide_body::{SlideBody, SlideScroll};
pub use slide_menu::{MenuEvent, SlideMenu, SlideMenuState};
pub use title_bar::TitleBar;

/// Terminals have no alpha channel: anything below full opacity is drawn
/// dim, and anything at half or less is also greyed out.
pub fn with_opacity(style: Style, opacity: f32) -> Style {
    if opacity >= 1.0 {
        style
    } else if opacity > 0.5 {
        style.add_modifier(Modifier::DIM)
    } else {
        style.fg(Color::DarkGray).add_modifier(Modifier::DIM)
    }
}

/// Outline style for the keyboard-focused control.
pub fn focus_outline(style: Style) -> Style {
    style.add_modifier(Modifier::REVERSED | Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_opacity_unchanged() {
        let base = Style::default().fg(Color::Cyan);
        assert_eq!(with_opacity(base, 1.0), base);
    }

    #[test]
    fn test_partial_opacity_dims() {
        let styled = with_opacity(Style::default().fg(Color::Cyan), 0.7);
        assert!(styled.add_modifier.contains(Modifier::DIM));
        assert_eq!(styled.fg, Some(Color::Cyan));
    }

    #[test]
    fn test_half_opacity_greys_out() {
        let styled = with_opacity(Style::default().fg(Color::Cyan), 0.5);
        assert_eq!(styled.fg, Some(Color::DarkGray));
    }
}
