//! # Slide Deck
//!
//! Loads a Markdown file and splits it into slides. A line consisting of
//! exactly `---` separates slides, except inside fenced code blocks.
//!
//! ```text
//! # Intro           ─┐
//! Welcome!           │ slide 1
//! ---               ─┘
//! # Tokenization    ─┐
//! ![chart](a.png)    │ slide 2
//! ```
//!
//! Slide content is read-only to the rest of the app. Navigation only ever
//! holds an index into it.

use log::{debug, info};
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// One addressable unit of presentation content.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    /// 1-based position in the deck.
    pub position: usize,
    /// Text of the first level-1 heading, if any.
    pub title: Option<String>,
    /// Raw Markdown body.
    pub body: String,
    /// Local image files referenced by the slide, resolved against the deck directory.
    pub images: Vec<PathBuf>,
}

impl Slide {
    /// Title used in menus and announcements: the heading, or `Slide {n}`.
    pub fn display_title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("Slide {}", self.position))
    }
}

#[derive(Debug, Clone)]
pub struct Deck {
    pub name: String,
    pub base_dir: PathBuf,
    slides: Vec<Slide>,
}

/// Serializable outline row for `--outline`.
#[derive(Debug, Serialize, PartialEq)]
pub struct OutlineEntry {
    pub position: usize,
    pub title: Option<String>,
}

#[derive(Debug)]
pub enum DeckError {
    Io(std::io::Error),
    Empty,
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::Io(e) => write!(f, "deck I/O error: {e}"),
            DeckError::Empty => write!(f, "deck contains no slides"),
        }
    }
}

impl std::error::Error for DeckError {}

impl Deck {
    /// Read and parse a deck file.
    pub fn load(path: &Path) -> Result<Self, DeckError> {
        let source = fs::read_to_string(path).map_err(DeckError::Io)?;
        let base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "deck".to_string());
        let deck = Self::parse(&source, name, base_dir)?;
        info!("Loaded {} slides from {}", deck.len(), path.display());
        Ok(deck)
    }

    /// Parse deck source. Whitespace-only chunks are dropped; a deck with no
    /// remaining slides is an error.
    pub fn parse(source: &str, name: String, base_dir: PathBuf) -> Result<Self, DeckError> {
        let slides: Vec<Slide> = split_slides(source)
            .into_iter()
            .filter(|chunk| !chunk.trim().is_empty())
            .enumerate()
            .map(|(index, body)| Slide {
                position: index + 1,
                title: extract_title(&body),
                images: extract_images(&body, &base_dir),
                body,
            })
            .collect();

        if slides.is_empty() {
            return Err(DeckError::Empty);
        }
        debug!("Parsed deck '{}' with {} slides", name, slides.len());
        Ok(Self {
            name,
            base_dir,
            slides,
        })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Slide at a 1-based position.
    pub fn slide(&self, position: usize) -> Option<&Slide> {
        position.checked_sub(1).and_then(|i| self.slides.get(i))
    }

    pub fn outline(&self) -> Vec<OutlineEntry> {
        self.slides
            .iter()
            .map(|s| OutlineEntry {
                position: s.position,
                title: s.title.clone(),
            })
            .collect()
    }

    /// Resolve an image destination from slide Markdown. Remote URLs return `None`.
    pub fn resolve_image(&self, dest_url: &str) -> Option<PathBuf> {
        resolve_local(dest_url, &self.base_dir)
    }
}

/// Split on `---` separator lines, ignoring separators inside fenced code.
fn split_slides(source: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut fence: Option<&str> = None;

    for line in source.lines() {
        let trimmed = line.trim_start();
        match fence {
            Some(marker) if trimmed.starts_with(marker) => fence = None,
            Some(_) => {}
            None if trimmed.starts_with("```") => fence = Some("```"),
            None if trimmed.starts_with("~~~") => fence = Some("~~~"),
            None if line.trim_end() == "---" => {
                chunks.push(std::mem::take(&mut current));
                continue;
            }
            None => {}
        }
        current.push_str(line);
        current.push('\n');
    }
    chunks.push(current);
    chunks
}

fn extract_title(body: &str) -> Option<String> {
    let mut in_title = false;
    let mut title = String::new();

    for event in Parser::new(body) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => in_title = true,
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => break,
            Event::Text(t) | Event::Code(t) if in_title => title.push_str(&t),
            Event::SoftBreak | Event::HardBreak if in_title => title.push(' '),
            _ => {}
        }
    }

    let title = title.trim();
    (!title.is_empty()).then(|| title.to_string())
}

fn extract_images(body: &str, base_dir: &Path) -> Vec<PathBuf> {
    let mut images = Vec::new();
    for event in Parser::new(body) {
        if let Event::Start(Tag::Image { dest_url, .. }) = event
            && let Some(path) = resolve_local(&dest_url, base_dir)
            && !images.contains(&path)
        {
            images.push(path);
        }
    }
    images
}

fn resolve_local(dest_url: &str, base_dir: &Path) -> Option<PathBuf> {
    if dest_url.is_empty() || dest_url.contains("://") || dest_url.starts_with("data:") {
        return None;
    }
    Some(base_dir.join(dest_url))
}
