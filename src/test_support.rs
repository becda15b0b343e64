//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::path::PathBuf;

use crate::core::deck::Deck;
use crate::core::state::App;
use crate::tui::announcer::Announcer;

/// Deck whose slides carry the given H1 titles.
pub fn deck_with_titles(titles: &[&str]) -> Deck {
    let source = titles
        .iter()
        .map(|t| format!("# {t}\n\nBody of {t}.\n"))
        .collect::<Vec<_>>()
        .join("---\n");
    Deck::parse(&source, "test-deck".to_string(), PathBuf::from("/decks")).unwrap()
}

/// Deck of `total` slides titled `Topic 1`, `Topic 2`, ...
pub fn deck_of(total: usize) -> Deck {
    let titles: Vec<String> = (1..=total).map(|i| format!("Topic {i}")).collect();
    let refs: Vec<&str> = titles.iter().map(String::as_str).collect();
    deck_with_titles(&refs)
}

/// App over a generated deck of `total` slides, starting on slide 1.
pub fn test_app(total: usize) -> App {
    App::new(deck_of(total), Vec::new(), 1)
}

/// Announcer that records every announcement instead of touching the terminal.
#[derive(Default)]
pub struct RecordingAnnouncer {
    pub announcements: Vec<String>,
}

impl Announcer for RecordingAnnouncer {
    fn announce(&mut self, text: &str) {
        self.announcements.push(text.to_string());
    }
}
