//! # Live Region
//!
//! Screen-reader announcements. The live region holds the latest
//! announcement text; every replacement is pushed to an [`Announcer`] sink.
//!
//! In the terminal the sink is the window title: it sits outside the drawn
//! frame, and assistive technology reads it without moving focus.

use crossterm::execute;
use crossterm::terminal::SetTitle;
use log::{info, warn};
use std::io::stdout;

/// Destination for live-region announcements.
pub trait Announcer {
    fn announce(&mut self, text: &str);
}

/// Writes announcements to the terminal title and the log.
pub struct TerminalTitleAnnouncer;

impl Announcer for TerminalTitleAnnouncer {
    fn announce(&mut self, text: &str) {
        info!("Announce: {}", text);
        if let Err(e) = execute!(stdout(), SetTitle(text)) {
            warn!("Failed to set terminal title: {}", e);
        }
    }
}

/// Announcement text for a slide. Falls back to `Slide {current}` without a title.
pub fn announcement_text(title: Option<&str>, current: usize, total: usize) -> String {
    match title {
        Some(title) => format!("{title}, slide {current} of {total}"),
        None => format!("Slide {current}, slide {current} of {total}"),
    }
}

/// The persistent live region. Content is replaced, never appended.
#[derive(Debug, Default)]
pub struct LiveRegion {
    text: String,
    announcements: usize,
}

impl LiveRegion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the region's text and announce it.
    pub fn replace(&mut self, text: String, sink: &mut dyn Announcer) {
        self.text = text;
        self.announcements += 1;
        sink.announce(&self.text);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of announcements made since the region was created.
    pub fn announcements(&self) -> usize {
        self.announcements
    }
}
