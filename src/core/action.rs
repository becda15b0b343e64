//! # Actions
//!
//! Everything that can happen in a presentation becomes an `Action`.
//! User presses Right? That's `Action::NextSlide`.
//! An image probe finishes? That's `Action::ImageProbed { .. }`.
//!
//! `update()` applies an action to the state and returns an `Effect` telling
//! the adapter what follow-up work is needed. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, warn};
use std::path::PathBuf;

use crate::core::state::{App, ImageStatus};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    NextSlide,
    PreviousSlide,
    /// Jump to a 1-based position. Out-of-range targets are ignored.
    GoToSlide(usize),
    FirstSlide,
    LastSlide,
    ToggleMenu,
    CloseMenu,
    ToggleFullscreen,
    ImageProbed { path: PathBuf, loaded: bool },
    Quit,
}

/// Follow-up work for the adapter after `update()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Run a full render pass. Sent for every accepted move, including a
    /// jump to the slide already showing.
    Render,
    /// The menu panel opened or closed.
    MenuChanged,
    /// Enter (`true`) or leave (`false`) fullscreen.
    Fullscreen(bool),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::NextSlide => {
            let before = app.navigation.current();
            moved(before, app.navigation.next())
        }
        Action::PreviousSlide => {
            let before = app.navigation.current();
            moved(before, app.navigation.previous())
        }
        Action::GoToSlide(target) => {
            if app.navigation.go_to(target) {
                Effect::Render
            } else {
                debug!(
                    "Ignoring jump to {} (current {}, total {})",
                    target,
                    app.navigation.current(),
                    app.navigation.total()
                );
                Effect::None
            }
        }
        Action::FirstSlide => render_if(app.navigation.first()),
        Action::LastSlide => render_if(app.navigation.last()),
        Action::ToggleMenu => {
            app.menu_open = !app.menu_open;
            Effect::MenuChanged
        }
        Action::CloseMenu => {
            if app.menu_open {
                app.menu_open = false;
                Effect::MenuChanged
            } else {
                Effect::None
            }
        }
        Action::ToggleFullscreen => {
            app.fullscreen = !app.fullscreen;
            Effect::Fullscreen(app.fullscreen)
        }
        Action::ImageProbed { path, loaded } => {
            let status = if loaded {
                ImageStatus::Loaded
            } else {
                warn!("Image failed to load: {}", path.display());
                let name = path.file_name().unwrap_or(path.as_os_str());
                app.status_message = format!("Missing image: {}", name.to_string_lossy());
                ImageStatus::Failed
            };
            app.images.insert(path, status);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn moved(before: usize, after: usize) -> Effect {
    render_if(before != after)
}

fn render_if(changed: bool) -> Effect {
    if changed { Effect::Render } else { Effect::None }
}
