//! # Presentation View
//!
//! Keeps every piece of position-dependent UI in step with
//! `NavigationState`. A render pass runs after each transition that moved
//! the position (and once at startup) and updates:
//!
//! 1. slide visibility: hide all now, reveal the current slide after the
//!    reveal delay (a scheduled continuation in [`Timers`])
//! 2. counter text
//! 3. progress percentage
//! 4. prev/next enabled state
//! 5. menu highlight
//! 6. the live region announcement
//!
//! Drawing reads this model; it never recomputes any of it. Elements that
//! are switched off in `ChromeConfig` are `None` here and their update is
//! skipped.

use log::debug;
use std::time::{Duration, Instant};

use crate::core::config::ChromeConfig;
use crate::core::state::App;
use crate::tui::announcer::{Announcer, LiveRegion, announcement_text};
use crate::tui::timers::Timers;

/// Opacity of a disabled prev/next button.
pub const DISABLED_OPACITY: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonState {
    pub disabled: bool,
}

impl ButtonState {
    pub fn opacity(self) -> f32 {
        if self.disabled { DISABLED_OPACITY } else { 1.0 }
    }
}

pub fn counter_text(current: usize, total: usize) -> String {
    format!("Slide {current} of {total}")
}

pub fn progress_percent(current: usize, total: usize) -> f64 {
    current as f64 / total as f64 * 100.0
}

pub struct PresentationView {
    chrome: ChromeConfig,
    reveal_delay: Duration,
    /// One flag per slide, index 0 = slide 1.
    slide_visibility: Vec<bool>,
    counter: Option<String>,
    progress: Option<f64>,
    prev: Option<ButtonState>,
    next: Option<ButtonState>,
    /// One flag per menu entry.
    menu_highlight: Vec<bool>,
    live_region: Option<LiveRegion>,
}

impl PresentationView {
    pub fn new(chrome: ChromeConfig, reveal_delay: Duration) -> Self {
        Self {
            chrome,
            reveal_delay,
            slide_visibility: Vec::new(),
            counter: None,
            progress: None,
            prev: None,
            next: None,
            menu_highlight: Vec::new(),
            live_region: None,
        }
    }

    pub fn chrome(&self) -> ChromeConfig {
        self.chrome
    }

    /// Bring all dependent UI in line with the current position.
    pub fn render_pass(
        &mut self,
        app: &App,
        timers: &mut Timers,
        announcer: &mut dyn Announcer,
        now: Instant,
    ) {
        let current = app.navigation.current();
        let total = app.navigation.total();
        debug!("Render pass: slide {} of {}", current, total);

        // Hide everything now, reveal later
        self.slide_visibility.clear();
        self.slide_visibility.resize(total, false);
        if let Some(superseded) = timers.schedule_reveal(current, now, self.reveal_delay) {
            debug!("Superseded pending reveal of slide {}", superseded.slide);
        }

        if self.chrome.counter {
            self.counter = Some(counter_text(current, total));
        }
        if self.chrome.progress {
            self.progress = Some(progress_percent(current, total));
        }
        if self.chrome.controls {
            self.prev = Some(ButtonState {
                disabled: current == 1,
            });
            self.next = Some(ButtonState {
                disabled: current == total,
            });
        }

        self.menu_highlight = app
            .menu
            .iter()
            .map(|entry| entry.position() == Some(current))
            .collect();

        let title = app.slide().and_then(|s| s.title.as_deref());
        let text = announcement_text(title, current, total);
        self.live_region
            .get_or_insert_with(LiveRegion::new)
            .replace(text, announcer);
    }

    /// Second phase of a transition: mark `slide` as the visible one.
    pub fn reveal(&mut self, slide: usize) {
        if let Some(index) = slide.checked_sub(1)
            && index < self.slide_visibility.len()
        {
            self.slide_visibility.iter_mut().for_each(|v| *v = false);
            self.slide_visibility[index] = true;
            debug!("Revealed slide {}", slide);
        }
    }

    pub fn is_visible(&self, slide: usize) -> bool {
        slide
            .checked_sub(1)
            .and_then(|i| self.slide_visibility.get(i))
            .copied()
            .unwrap_or(false)
    }

    /// Positions of all slides currently marked visible.
    pub fn visible_slides(&self) -> Vec<usize> {
        self.slide_visibility
            .iter()
            .enumerate()
            .filter(|(_, v)| **v)
            .map(|(i, _)| i + 1)
            .collect()
    }

    pub fn counter_text(&self) -> Option<&str> {
        self.counter.as_deref()
    }

    pub fn progress_percent(&self) -> Option<f64> {
        self.progress
    }

    pub fn prev_button(&self) -> Option<ButtonState> {
        self.prev
    }

    pub fn next_button(&self) -> Option<ButtonState> {
        self.next
    }

    pub fn is_highlighted(&self, entry: usize) -> bool {
        self.menu_highlight.get(entry).copied().unwrap_or(false)
    }

    pub fn live_region(&self) -> Option<&LiveRegion> {
        self.live_region.as_ref()
    }
}
