//! # Jump Menu Entries
//!
//! A menu entry pairs a label with a textual slide position. The position
//! stays a string until someone clicks it: parsing happens at the input
//! boundary via [`parse_position`], so a bad `slide = "intro"` in the config
//! file simply never jumps anywhere.

use serde::{Deserialize, Serialize};

use crate::core::deck::Deck;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MenuEntry {
    pub label: String,
    /// Raw position attribute, e.g. `"3"`.
    #[serde(rename = "slide")]
    pub target: String,
}

impl MenuEntry {
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }

    /// Parsed target, or `None` if the attribute is not a number.
    pub fn position(&self) -> Option<usize> {
        parse_position(&self.target)
    }
}

/// Parse a slide position attribute. Non-numeric input yields `None`.
///
/// Range checking is left to `NavigationState::go_to`. Parsing is strict
/// on purpose: a trailing suffix like `"3abc"` is rejected, not read as 3.
pub fn parse_position(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok()
}

/// One entry per slide, labelled with its display title.
pub fn entries_for_deck(deck: &Deck) -> Vec<MenuEntry> {
    deck.slides()
        .iter()
        .map(|slide| MenuEntry::new(slide.display_title(), slide.position.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_position_accepts_numbers() {
        assert_eq!(parse_position("3"), Some(3));
        assert_eq!(parse_position(" 12 "), Some(12));
        assert_eq!(parse_position("0"), Some(0));
    }

    #[test]
    fn test_parse_position_rejects_non_numeric() {
        assert_eq!(parse_position(""), None);
        assert_eq!(parse_position("intro"), None);
        assert_eq!(parse_position("-1"), None);
        assert_eq!(parse_position("2.5"), None);
        assert_eq!(parse_position("3abc"), None);
    }

    #[test]
    fn test_entries_for_deck_uses_titles() {
        let deck = Deck::parse(
            "# Intro\n---\nno heading\n",
            "d".to_string(),
            PathBuf::from("."),
        )
        .unwrap();
        let entries = entries_for_deck(&deck);
        assert_eq!(
            entries,
            vec![MenuEntry::new("Intro", "1"), MenuEntry::new("Slide 2", "2")]
        );
        assert_eq!(entries[1].position(), Some(2));
    }

    #[test]
    fn test_entry_deserializes_slide_field() {
        let entry: MenuEntry = toml::from_str("label = \"Demo\"\nslide = \"4\"").unwrap();
        assert_eq!(entry.target, "4");
        assert_eq!(entry.position(), Some(4));
    }
}
