//! Slide Markdown → ratatui `Text`.
//!
//! A slide is laid out as a stack of blocks separated by one blank line:
//! a centered title (`#`), centered subtitles (`##`), plain section
//! headings, paragraphs, bullet lists, quotes and framed code. Headings lose
//! their `#` markers; on a slide the hierarchy is carried by placement and
//! colour instead.
//!
//! Terminals cannot show pictures, so an image becomes a `[🖼 alt]`
//! placeholder whose look follows the file's load status: hidden while the
//! probe is in flight, shown once the file is readable, dimmed if it failed.

use std::sync::LazyLock;

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::core::state::ImageStatus;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

const TAB: &str = "    ";

/// Styles for each kind of slide block.
#[derive(Debug, Clone)]
pub struct SlideTheme {
    pub body: Style,
    pub title: Style,
    pub subtitle: Style,
    pub heading: Style,
    pub bullet: Style,
    pub quote: Style,
    pub quote_bar: Style,
    pub frame: Style,
    pub inline_code: Style,
    pub link: Style,
    pub image: Style,
    /// syntect theme name for fenced code.
    pub syntax_theme: &'static str,
}

impl Default for SlideTheme {
    fn default() -> Self {
        Self {
            body: Style::default().fg(Color::White),
            title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            subtitle: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::ITALIC),
            heading: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            bullet: Style::default().fg(Color::Cyan),
            quote: Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
            quote_bar: Style::default().fg(Color::DarkGray),
            frame: Style::default().fg(Color::DarkGray),
            inline_code: Style::default().fg(Color::LightGreen),
            link: Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::UNDERLINED),
            image: Style::default().fg(Color::Magenta),
            syntax_theme: "base16-ocean.dark",
        }
    }
}

/// Lay out a slide body. `image_status` maps an image destination, as
/// written in the Markdown, to its current load status.
pub fn render<F>(content: &str, theme: &SlideTheme, image_status: F) -> Text<'static>
where
    F: Fn(&str) -> ImageStatus,
{
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    opts.insert(Options::ENABLE_TASKLISTS);

    let mut slide = SlideWriter::new(theme, image_status);
    for event in Parser::new_ext(content, opts) {
        slide.event(event);
    }
    slide.finish()
}

enum Container {
    Quote,
    List { next: Option<u64> },
}

struct LinkRef {
    dest: String,
    shown: String,
}

struct ImageRef {
    dest: String,
    alt: String,
}

/// Fenced code being written. `None` highlighter means plain text.
struct CodeFence {
    highlighter: Option<HighlightLines<'static>>,
}

struct SlideWriter<'t, F> {
    theme: &'t SlideTheme,
    image_status: F,
    lines: Vec<Line<'static>>,
    /// Line under construction.
    line: Option<Line<'static>>,
    containers: Vec<Container>,
    /// Style of the enclosing block; inline modifiers apply on top.
    block_style: Style,
    modifiers: Vec<Modifier>,
    code: Option<CodeFence>,
    link: Option<LinkRef>,
    image: Option<ImageRef>,
    /// A list item whose bullet has been written but no content yet.
    bare_item: bool,
    /// The next block starts after a blank line.
    gap: bool,
}

impl<'t, F> SlideWriter<'t, F>
where
    F: Fn(&str) -> ImageStatus,
{
    fn new(theme: &'t SlideTheme, image_status: F) -> Self {
        Self {
            theme,
            image_status,
            lines: Vec::new(),
            line: None,
            containers: Vec::new(),
            block_style: theme.body,
            modifiers: Vec::new(),
            code: None,
            link: None,
            image: None,
            bare_item: false,
            gap: false,
        }
    }

    fn finish(mut self) -> Text<'static> {
        self.end_line();
        Text::from(self.lines)
    }

    // ── Lines ───────────────────────────────────────────────────────────

    fn end_line(&mut self) {
        if let Some(line) = self.line.take() {
            self.lines.push(line);
        }
    }

    /// Open a fresh line carrying the quote bars of the enclosing blocks.
    fn begin_line(&mut self, alignment: Option<Alignment>) {
        self.end_line();
        let bars: Vec<Span<'static>> = self
            .containers
            .iter()
            .filter(|c| matches!(c, Container::Quote))
            .map(|_| Span::styled("▎ ", self.theme.quote_bar))
            .collect();
        let mut line = Line::from(bars);
        if let Some(alignment) = alignment {
            line = line.alignment(alignment);
        }
        self.line = Some(line);
    }

    fn push(&mut self, span: Span<'static>) {
        if self.line.is_none() {
            self.begin_line(None);
        }
        if let Some(line) = self.line.as_mut() {
            line.push_span(span);
        }
        self.bare_item = false;
    }

    /// Close the current line and honour a pending gap.
    fn begin_block(&mut self) {
        self.end_line();
        if self.gap && !self.lines.is_empty() {
            self.lines.push(Line::default());
        }
        self.gap = false;
    }

    fn inline_style(&self) -> Style {
        let mut style = self
            .modifiers
            .iter()
            .fold(self.block_style, |s, m| s.add_modifier(*m));
        if self.link.is_some() {
            style = style.patch(self.theme.link);
        }
        style
    }

    fn in_list(&self) -> bool {
        self.containers
            .iter()
            .any(|c| matches!(c, Container::List { .. }))
    }

    // ── Events ──────────────────────────────────────────────────────────

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => {
                if let Some(link) = self.link.as_mut() {
                    link.shown.push_str(&code);
                }
                self.push(Span::styled(code.to_string(), self.theme.inline_code));
            }
            Event::SoftBreak => self.text(" "),
            Event::HardBreak => self.begin_line(None),
            Event::Rule => {
                self.begin_block();
                self.begin_line(Some(Alignment::Center));
                self.push(Span::styled("·  ·  ·", self.theme.frame));
                self.end_line();
                self.gap = true;
            }
            Event::TaskListMarker(done) => {
                let mark = if done { "☑ " } else { "☐ " };
                self.push(Span::styled(mark, self.theme.bullet));
            }
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                if !self.bare_item {
                    self.begin_block();
                    self.begin_line(None);
                }
            }
            Tag::Heading { level, .. } => {
                self.begin_block();
                let (style, alignment) = match level {
                    HeadingLevel::H1 => (self.theme.title, Some(Alignment::Center)),
                    HeadingLevel::H2 => (self.theme.subtitle, Some(Alignment::Center)),
                    _ => (self.theme.heading, None),
                };
                self.block_style = style;
                self.begin_line(alignment);
            }
            Tag::BlockQuote(_) => {
                self.begin_block();
                self.containers.push(Container::Quote);
                self.block_style = self.theme.quote;
            }
            Tag::CodeBlock(kind) => {
                self.begin_block();
                let lang = match &kind {
                    CodeBlockKind::Fenced(info) => info.split_whitespace().next().unwrap_or(""),
                    CodeBlockKind::Indented => "",
                };
                self.begin_line(None);
                if lang.is_empty() {
                    self.push(Span::styled("┌─", self.theme.frame));
                } else {
                    self.push(Span::styled(format!("┌─ {lang} "), self.theme.frame));
                }
                self.end_line();
                self.code = Some(CodeFence {
                    highlighter: highlighter_for(lang, self.theme.syntax_theme),
                });
            }
            Tag::List(start) => {
                if !self.in_list() {
                    self.begin_block();
                }
                self.containers.push(Container::List { next: start });
            }
            Tag::Item => self.start_item(),
            Tag::Emphasis => self.modifiers.push(Modifier::ITALIC),
            Tag::Strong => self.modifiers.push(Modifier::BOLD),
            Tag::Strikethrough => self.modifiers.push(Modifier::CROSSED_OUT),
            Tag::Link { dest_url, .. } => {
                self.link = Some(LinkRef {
                    dest: dest_url.to_string(),
                    shown: String::new(),
                });
            }
            Tag::Image { dest_url, .. } => {
                self.image = Some(ImageRef {
                    dest: dest_url.to_string(),
                    alt: String::new(),
                });
            }
            _ => {}
        }
    }

    fn start_item(&mut self) {
        self.begin_block();
        let depth = self
            .containers
            .iter()
            .filter(|c| matches!(c, Container::List { .. }))
            .count();
        let marker = match self.containers.last_mut() {
            Some(Container::List { next: Some(n) }) => {
                let marker = format!("{n}. ");
                *n += 1;
                marker
            }
            _ if depth > 1 => "◦ ".to_string(),
            _ => "• ".to_string(),
        };
        self.begin_line(None);
        self.push(Span::raw("  ".repeat(depth.saturating_sub(1))));
        self.push(Span::styled(marker, self.theme.bullet));
        self.bare_item = true;
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => {
                self.end_line();
                self.gap = true;
            }
            TagEnd::Heading(_) => {
                self.end_line();
                self.block_style = self.theme.body;
                self.gap = true;
            }
            TagEnd::BlockQuote(_) => {
                self.end_line();
                self.containers.pop();
                if !self
                    .containers
                    .iter()
                    .any(|c| matches!(c, Container::Quote))
                {
                    self.block_style = self.theme.body;
                }
                self.gap = true;
            }
            TagEnd::CodeBlock => {
                self.code = None;
                self.begin_line(None);
                self.push(Span::styled("└─", self.theme.frame));
                self.end_line();
                self.gap = true;
            }
            TagEnd::List(_) => {
                self.end_line();
                self.containers.pop();
                if !self.in_list() {
                    self.gap = true;
                }
            }
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough => {
                self.modifiers.pop();
            }
            TagEnd::Link => {
                if let Some(link) = self.link.take()
                    && link.shown != link.dest
                {
                    self.push(Span::styled(format!(" <{}>", link.dest), self.theme.frame));
                }
            }
            TagEnd::Image => {
                if let Some(image) = self.image.take() {
                    let status = (self.image_status)(&image.dest);
                    let label = if image.alt.is_empty() {
                        image.dest
                    } else {
                        image.alt
                    };
                    self.push(Span::styled(
                        format!("[🖼 {label}]"),
                        image_style(self.theme.image, status),
                    ));
                }
            }
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        if let Some(image) = self.image.as_mut() {
            image.alt.push_str(text);
            return;
        }
        if self.code.is_some() {
            self.code_text(text);
            return;
        }
        if let Some(link) = self.link.as_mut() {
            link.shown.push_str(text);
        }
        let style = self.inline_style();
        self.push(Span::styled(text.replace('\t', TAB), style));
    }

    fn code_text(&mut self, text: &str) {
        for source_line in LinesWithEndings::from(text) {
            let highlighted = self
                .code
                .as_mut()
                .and_then(|fence| fence.highlighter.as_mut())
                .and_then(|hl| hl.highlight_line(source_line, &SYNTAX_SET).ok())
                .map(|ranges| {
                    ranges
                        .into_iter()
                        .filter_map(|(style, frag)| {
                            code_span(frag, Style::default().fg(rgb(style.foreground)))
                        })
                        .collect::<Vec<_>>()
                });
            let spans = highlighted.unwrap_or_else(|| {
                code_span(source_line, self.theme.body).into_iter().collect()
            });

            self.begin_line(None);
            self.push(Span::styled("│ ", self.theme.frame));
            for span in spans {
                self.push(span);
            }
            self.end_line();
        }
    }
}

fn highlighter_for(lang: &str, theme_name: &str) -> Option<HighlightLines<'static>> {
    if lang.is_empty() {
        return None;
    }
    let syntax = SYNTAX_SET.find_syntax_by_token(lang)?;
    let theme = THEME_SET.themes.get(theme_name)?;
    Some(HighlightLines::new(syntax, theme))
}

/// A code fragment without its line ending, tabs expanded. Empty fragments
/// are dropped.
fn code_span(fragment: &str, style: Style) -> Option<Span<'static>> {
    let content = fragment.trim_end_matches(['\n', '\r']).replace('\t', TAB);
    (!content.is_empty()).then(|| Span::styled(content, style))
}

fn rgb(color: syntect::highlighting::Color) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

fn image_style(base: Style, status: ImageStatus) -> Style {
    match status {
        ImageStatus::Loading => base.add_modifier(Modifier::HIDDEN),
        ImageStatus::Loaded => base,
        ImageStatus::Failed => base.add_modifier(Modifier::DIM),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(_: &str) -> ImageStatus {
        ImageStatus::Loaded
    }

    fn slide(source: &str) -> Text<'static> {
        render(source, &SlideTheme::default(), loaded)
    }

    fn rows(text: &Text<'_>) -> Vec<String> {
        text.lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn title_is_centered_without_marker() {
        let text = slide("# Tokenization");
        let line = &text.lines[0];
        assert_eq!(line.alignment, Some(Alignment::Center));
        assert_eq!(rows(&text), vec!["Tokenization"]);
        assert_eq!(line.spans[0].style, SlideTheme::default().title);
    }

    #[test]
    fn subtitle_centered_and_section_heading_left() {
        let text = slide("## Why\n\n### Details");
        assert_eq!(rows(&text), vec!["Why", "", "Details"]);
        assert_eq!(text.lines[0].alignment, Some(Alignment::Center));
        assert_eq!(text.lines[2].alignment, None);
        assert!(text.lines[2].spans[0].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn blocks_separated_by_single_blank_line() {
        let text = slide("# Title\n\nFirst point.\n\nSecond point.");
        assert_eq!(rows(&text), vec!["Title", "", "First point.", "", "Second point."]);
        assert_eq!(text.lines[2].spans[0].style, SlideTheme::default().body);
    }

    #[test]
    fn bullets_nest_with_indent() {
        let text = slide("- one\n  - inner\n- two");
        assert_eq!(rows(&text), vec!["• one", "  ◦ inner", "• two"]);
    }

    #[test]
    fn ordered_list_counts_from_start() {
        let text = slide("3. c\n4. d\n\nafter");
        assert_eq!(rows(&text), vec!["3. c", "4. d", "", "after"]);
    }

    #[test]
    fn loose_list_keeps_bullet_on_text_line() {
        let text = slide("- one\n\n- two");
        let rows = rows(&text);
        assert!(rows.contains(&"• one".to_string()));
        assert!(rows.contains(&"• two".to_string()));
    }

    #[test]
    fn nested_emphasis_composes() {
        let text = slide("plain ***both*** plain");
        let span = text.lines[0]
            .spans
            .iter()
            .find(|s| s.content == "both")
            .unwrap();
        assert!(span.style.add_modifier.contains(Modifier::BOLD | Modifier::ITALIC));
        let after = text.lines[0].spans.last().unwrap();
        assert!(!after.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn quote_lines_carry_bar() {
        let text = slide("> Premature optimization\n> is the root");
        let rows = rows(&text);
        assert!(rows[0].starts_with("▎ "), "got {:?}", rows);
        assert!(rows[0].contains("Premature optimization"));
        assert!(text.lines[0].spans[1].style.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn code_block_framed_with_language() {
        let text = slide("```rust\nfn main() {}\n```");
        let rows = rows(&text);
        assert_eq!(rows[0], "┌─ rust ");
        assert!(rows[1].starts_with("│ fn"));
        assert_eq!(rows.last().unwrap(), "└─");
        // Highlighted spans carry syntect colours
        assert!(text.lines[1].spans[1..]
            .iter()
            .all(|s| matches!(s.style.fg, Some(Color::Rgb(..)))));
    }

    #[test]
    fn unknown_language_is_plain_with_tabs_expanded() {
        let text = slide("```nosuchlang\n\tindented\n```");
        let rows = rows(&text);
        assert_eq!(rows[1], "│     indented");
        assert!(rows.iter().all(|r| !r.contains('\t')));
    }

    #[test]
    fn link_shows_destination_unless_text_matches() {
        let text = slide("[the docs](https://docs.rs) and <https://crates.io>");
        let row = &rows(&text)[0];
        assert!(row.contains("the docs <https://docs.rs>"), "got {row}");
        assert!(!row.contains("<https://crates.io>"), "got {row}");
        let linked = text.lines[0]
            .spans
            .iter()
            .find(|s| s.content == "the docs")
            .unwrap();
        assert!(linked.style.add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn inline_code_styled() {
        let text = slide("Use `foo()` here");
        let code = text.lines[0]
            .spans
            .iter()
            .find(|s| s.content == "foo()")
            .unwrap();
        assert_eq!(code.style, SlideTheme::default().inline_code);
    }

    #[test]
    fn image_placeholder_uses_alt_text() {
        let text = slide("![Pipeline diagram](img/pipe.png)");
        assert_eq!(rows(&text), vec!["[🖼 Pipeline diagram]"]);
        assert!(!text.lines[0].spans[0].style.add_modifier.contains(Modifier::HIDDEN));
    }

    #[test]
    fn image_placeholder_follows_load_status() {
        let theme = SlideTheme::default();
        let style_for = |status: ImageStatus| {
            let text = render("![x](a.png)", &theme, move |_: &str| status);
            text.lines[0].spans[0].style
        };
        assert!(style_for(ImageStatus::Loading).add_modifier.contains(Modifier::HIDDEN));
        assert!(style_for(ImageStatus::Failed).add_modifier.contains(Modifier::DIM));
        assert!(!style_for(ImageStatus::Loaded).add_modifier.contains(Modifier::DIM));
    }

    #[test]
    fn image_status_sees_raw_destination() {
        let seen = std::cell::RefCell::new(Vec::new());
        render("![](pics/one.png) and ![](two.png)", &SlideTheme::default(), |dest: &str| {
            seen.borrow_mut().push(dest.to_string());
            ImageStatus::Loaded
        });
        assert_eq!(*seen.borrow(), vec!["pics/one.png", "two.png"]);
    }
}
