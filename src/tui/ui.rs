use crate::core::config::ChromeConfig;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::nav_controls::control_areas;
use crate::tui::components::{
    MenuToggle, NavButton, ProgressBar, SlideBody, SlideCounter, SlideMenu, TitleBar,
};
use crate::tui::input::focus::FocusTarget;
use crate::tui::markdown;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Text;

/// Width of the hamburger / close toggle in cells.
const TOGGLE_WIDTH: u16 = 3;
const MENU_MIN_WIDTH: u16 = 30;

/// Where everything went on the last frame.
///
/// Computed by [`screen_layout`] and cached in `TuiState` so pointer hit
/// testing works on exactly the rectangles that were drawn. `None` means the
/// element is not on screen (disabled in config, collapsed by fullscreen,
/// or the menu is closed).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Option<Rect>,
    pub slide: Rect,
    pub progress: Option<Rect>,
    pub prev_button: Option<Rect>,
    pub counter: Option<Rect>,
    pub next_button: Option<Rect>,
    pub menu_toggle: Option<Rect>,
    pub menu_panel: Option<Rect>,
    pub menu_close: Option<Rect>,
    pub menu_entries: Option<Rect>,
}

/// Split the frame into title, slide, progress and control rows.
///
/// Fullscreen drops the title row; the toggle then floats in the top-right
/// corner of the slide. The menu panel covers the right side of the slide.
pub fn screen_layout(
    area: Rect,
    chrome: ChromeConfig,
    fullscreen: bool,
    menu_open: bool,
) -> ScreenLayout {
    use Constraint::{Length, Min};

    let title_rows = if fullscreen { 0 } else { 1 };
    let progress_rows = u16::from(chrome.progress);
    let control_rows = u16::from(chrome.controls || chrome.counter);
    let [title_area, slide, progress_area, controls_area] = Layout::vertical([
        Length(title_rows),
        Min(0),
        Length(progress_rows),
        Length(control_rows),
    ])
    .areas(area);

    let mut layout = ScreenLayout {
        slide,
        ..ScreenLayout::default()
    };
    if title_rows > 0 {
        layout.title = Some(title_area);
    }
    if chrome.progress {
        layout.progress = Some(progress_area);
    }
    if control_rows > 0 {
        let [prev, counter, next] = control_areas(controls_area);
        if chrome.controls {
            layout.prev_button = Some(prev);
            layout.next_button = Some(next);
        }
        if chrome.counter {
            layout.counter = Some(counter);
        }
    }
    if chrome.menu_toggle {
        let row = if fullscreen { slide } else { title_area };
        let width = TOGGLE_WIDTH.min(row.width);
        layout.menu_toggle = Some(Rect::new(row.right() - width, row.y, width, 1.min(row.height)));
    }
    if menu_open {
        let width = MENU_MIN_WIDTH.max(area.width * 35 / 100).min(slide.width);
        let panel = Rect::new(slide.right() - width, slide.y, width, slide.height);
        layout.menu_panel = Some(panel);
        layout.menu_close = Some(Rect::new(
            panel.right().saturating_sub(4).max(panel.x),
            panel.y,
            TOGGLE_WIDTH.min(panel.width),
            1.min(panel.height),
        ));
        layout.menu_entries = Some(Rect::new(
            panel.x + 1.min(panel.width),
            panel.y + 1.min(panel.height),
            panel.width.saturating_sub(2),
            panel.height.saturating_sub(2),
        ));
    }
    layout
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let layout = screen_layout(
        frame.area(),
        tui.view.chrome(),
        app.fullscreen,
        app.menu_open,
    );
    tui.layout = layout;
    let controls_opacity = tui.auto_hide.opacity();

    if let Some(area) = layout.title {
        let slide_title = app.slide().map(|s| s.display_title()).unwrap_or_default();
        TitleBar::new(
            app.deck.name.clone(),
            slide_title,
            app.status_message.clone(),
        )
        .render(frame, area);
    }

    let content = match app.slide() {
        Some(slide) => markdown::render(&slide.body, &tui.theme, |url: &str| app.image_status(url)),
        None => Text::default(),
    };
    SlideBody {
        content,
        visible: tui.view.is_visible(app.current_slide()),
        scroll: &mut tui.scroll,
    }
    .render(frame, layout.slide);

    if let (Some(area), Some(percent)) = (layout.progress, tui.view.progress_percent()) {
        ProgressBar { percent }.render(frame, area);
    }
    if let (Some(area), Some(state)) = (layout.prev_button, tui.view.prev_button()) {
        let focused = tui.focus.is_focused(FocusTarget::PrevButton);
        NavButton::prev(state, focused, controls_opacity).render(frame, area);
    }
    if let (Some(area), Some(text)) = (layout.counter, tui.view.counter_text()) {
        SlideCounter {
            text: text.to_string(),
            opacity: controls_opacity,
        }
        .render(frame, area);
    }
    if let (Some(area), Some(state)) = (layout.next_button, tui.view.next_button()) {
        let focused = tui.focus.is_focused(FocusTarget::NextButton);
        NavButton::next(state, focused, controls_opacity).render(frame, area);
    }
    if let Some(area) = layout.menu_toggle {
        MenuToggle {
            open: app.menu_open,
            focused: tui.focus.is_focused(FocusTarget::MenuToggle),
            opacity: controls_opacity,
        }
        .render(frame, area);
    }

    if let Some(panel) = layout.menu_panel {
        let highlighted = (0..app.menu.len())
            .map(|i| tui.view.is_highlighted(i))
            .collect();
        SlideMenu {
            state: &mut tui.menu,
            entries: &app.menu,
            highlighted,
        }
        .render(frame, panel);
    }

    if let Some(prompt) = tui.jump_prompt.as_mut() {
        prompt.render(frame, layout.slide);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ResolvedConfig;
    use crate::test_support::{RecordingAnnouncer, test_app};
    use crate::tui::components::JumpPrompt;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::{Duration, Instant};

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    fn screen(app: &App, tui: &mut TuiState) -> Vec<String> {
        let backend = TestBackend::new(AREA.width, AREA.height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..AREA.height)
            .map(|y| {
                (0..AREA.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect()
            })
            .collect()
    }

    fn revealed(app: &App) -> TuiState {
        let mut tui = TuiState::new(&ResolvedConfig::default());
        let now = Instant::now();
        tui.view
            .render_pass(app, &mut tui.timers, &mut RecordingAnnouncer::default(), now);
        if let Some(slide) = tui.timers.take_due_reveal(now + Duration::from_secs(1)) {
            tui.view.reveal(slide);
        }
        tui
    }

    #[test]
    fn test_default_layout_rows() {
        let l = screen_layout(AREA, ChromeConfig::default(), false, false);
        assert_eq!(l.title, Some(Rect::new(0, 0, 80, 1)));
        assert_eq!(l.slide, Rect::new(0, 1, 80, 21));
        assert_eq!(l.progress, Some(Rect::new(0, 22, 80, 1)));
        assert_eq!(l.prev_button.unwrap().y, 23);
        assert_eq!(l.menu_toggle, Some(Rect::new(77, 0, 3, 1)));
        assert_eq!(l.menu_panel, None);
    }

    #[test]
    fn test_fullscreen_drops_title_row() {
        let l = screen_layout(AREA, ChromeConfig::default(), true, false);
        assert_eq!(l.title, None);
        assert_eq!(l.slide.y, 0);
        assert_eq!(l.menu_toggle, Some(Rect::new(77, 0, 3, 1)));
    }

    #[test]
    fn test_disabled_chrome_is_absent() {
        let chrome = ChromeConfig {
            counter: false,
            progress: false,
            controls: false,
            menu_toggle: false,
        };
        let l = screen_layout(AREA, chrome, false, false);
        assert_eq!(l.progress, None);
        assert_eq!(l.prev_button, None);
        assert_eq!(l.counter, None);
        assert_eq!(l.menu_toggle, None);
        assert_eq!(l.slide.height, 23);
    }

    #[test]
    fn test_menu_panel_on_right_of_slide() {
        let l = screen_layout(AREA, ChromeConfig::default(), false, true);
        let panel = l.menu_panel.unwrap();
        assert_eq!(panel.right(), 80);
        assert_eq!(panel.width, 30);
        assert_eq!(panel.y, l.slide.y);
        let close = l.menu_close.unwrap();
        assert!(panel.contains(close.as_position()));
        assert_eq!(l.menu_entries.unwrap().width, 28);
    }

    #[test]
    fn test_draw_counter_and_controls() {
        let app = test_app(16);
        let mut tui = revealed(&app);
        let rows = screen(&app, &mut tui);
        assert!(rows[0].contains("Topic 1"));
        assert!(rows[0].contains('☰'));
        assert!(rows[23].contains("Slide 1 of 16"));
        assert!(rows[23].contains("Prev"));
        assert!(rows[23].contains("Next"));
        assert_eq!(tui.layout, screen_layout(AREA, ChromeConfig::default(), false, false));
    }

    #[test]
    fn test_hidden_slide_not_drawn() {
        let app = test_app(3);
        let mut tui = TuiState::new(&ResolvedConfig::default());
        tui.view.render_pass(
            &app,
            &mut tui.timers,
            &mut RecordingAnnouncer::default(),
            Instant::now(),
        );
        let rows = screen(&app, &mut tui);
        let body: String = rows[1..22].concat();
        assert!(!body.contains("Topic 1"));
        // Chrome still reflects the new position immediately
        assert!(rows[23].contains("Slide 1 of 3"));
    }

    #[test]
    fn test_open_menu_shows_close_glyph() {
        let mut app = test_app(4);
        app.menu_open = true;
        let mut tui = revealed(&app);
        let rows = screen(&app, &mut tui);
        assert!(rows[0].contains('✕'));
        assert!(rows[1].contains("Slides"));
        assert!(rows[2].contains("▶ Topic 1"));
    }

    #[test]
    fn test_jump_prompt_drawn_over_slide() {
        let app = test_app(4);
        let mut tui = revealed(&app);
        tui.jump_prompt = Some(JumpPrompt::new());
        let rows = screen(&app, &mut tui);
        assert!(rows.iter().any(|r| r.contains("Go to slide")));
    }
}
