//! # Application State
//!
//! Core presentation state. Domain data only, no TUI types. View state
//! (visibility, timers, focus) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── deck: Deck                       // slide content (read-only)
//! ├── navigation: NavigationState      // current position
//! ├── menu: Vec<MenuEntry>             // jump menu entries
//! ├── menu_open: bool                  // jump menu panel visible
//! ├── fullscreen: bool                 // chrome collapsed
//! ├── images: HashMap<PathBuf, ImageStatus>
//! └── status_message: String           // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::core::config::ResolvedConfig;
use crate::core::deck::{Deck, Slide};
use crate::core::menu::{self, MenuEntry};
use crate::core::navigation::NavigationState;

/// Load state of a referenced image file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageStatus {
    /// Not probed yet, or probe in flight. Drawn hidden.
    Loading,
    Loaded,
    Failed,
}

impl ImageStatus {
    pub fn opacity(self) -> f32 {
        match self {
            ImageStatus::Loading => 0.0,
            ImageStatus::Loaded => 1.0,
            ImageStatus::Failed => 0.8,
        }
    }
}

pub struct App {
    pub deck: Deck,
    pub navigation: NavigationState,
    pub menu: Vec<MenuEntry>,
    pub menu_open: bool,
    pub fullscreen: bool,
    pub images: HashMap<PathBuf, ImageStatus>,
    pub status_message: String,
}

impl App {
    /// Build state for `deck`. An empty `menu` means one entry per slide.
    pub fn new(deck: Deck, menu: Vec<MenuEntry>, start_slide: usize) -> Self {
        let menu = if menu.is_empty() {
            menu::entries_for_deck(&deck)
        } else {
            menu
        };
        let navigation = NavigationState::starting_at(deck.len(), start_slide);
        Self {
            deck,
            navigation,
            menu,
            menu_open: false,
            fullscreen: false,
            images: HashMap::new(),
            status_message: String::new(),
        }
    }

    pub fn from_config(deck: Deck, config: &ResolvedConfig) -> Self {
        Self::new(deck, config.menu.clone(), config.start_slide)
    }

    pub fn current_slide(&self) -> usize {
        self.navigation.current()
    }

    pub fn total_slides(&self) -> usize {
        self.navigation.total()
    }

    /// The slide at the current position.
    pub fn slide(&self) -> Option<&Slide> {
        self.deck.slide(self.navigation.current())
    }

    /// Status of an image by its Markdown destination. Remote images are
    /// never probed and count as loaded.
    pub fn image_status(&self, dest_url: &str) -> ImageStatus {
        match self.deck.resolve_image(dest_url) {
            Some(path) => self.image_status_at(&path),
            None => ImageStatus::Loaded,
        }
    }

    pub fn image_status_at(&self, path: &Path) -> ImageStatus {
        self.images
            .get(path)
            .copied()
            .unwrap_or(ImageStatus::Loading)
    }
}
