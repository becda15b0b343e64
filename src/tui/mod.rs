//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the deck,
//! and translates terminal events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm. `core`
//! never sees a key code or a `Rect`.
//!
//! ## Event Flow
//!
//! ```text
//! TuiEvent ─▶ translate() ─▶ Vec<Action> ─▶ apply() ─▶ core::update()
//!                 │                              │
//!        input adapters                 Effect::Render ─▶ PresentationView::render_pass
//!     (bindings, pointer, swipe,        Effect::MenuChanged ─▶ menu cursor sync
//!      focus, auto-hide, prompt)        Effect::Fullscreen ─▶ terminal request
//! ```
//!
//! ## Redraw Strategy
//!
//! The event loop only draws when something changed:
//!
//! - **Events**: any terminal event or background action marks the frame dirty.
//! - **Deadlines**: the poll timeout is the time to the nearest timer
//!   (pending reveal or auto-hide), capped at 500ms, so timers fire on time
//!   without busy-waiting.
//! - **Smooth scroll**: while the slide body is easing toward its scroll
//!   target the loop redraws every ~16ms.

pub mod announcer;
mod component;
mod components;
pub mod event;
mod fullscreen;
mod images;
pub mod input;
pub mod markdown;
pub mod timers;
pub mod ui;
pub mod view;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::menu::parse_position;
use crate::core::state::App;
use crate::tui::announcer::{Announcer, TerminalTitleAnnouncer};
use crate::tui::component::EventHandler;
use crate::tui::components::slide_body::SCROLL_STEP;
use crate::tui::components::{JumpEvent, JumpPrompt, MenuEvent, SlideMenuState, SlideScroll};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::input::auto_hide::AutoHide;
use crate::tui::input::focus::{FocusRing, FocusTarget};
use crate::tui::input::keyboard::{Binding, KeyContext, resolve};
use crate::tui::input::pointer::{click_actions, hit_test};
use crate::tui::input::swipe::{Gesture, SwipeTracker};
use crate::tui::markdown::SlideTheme;
use crate::tui::timers::Timers;
use crate::tui::ui::ScreenLayout;
use crate::tui::view::PresentationView;

const IDLE_POLL: Duration = Duration::from_millis(500);
const ANIMATION_POLL: Duration = Duration::from_millis(16);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub view: PresentationView,
    pub timers: Timers,
    // Input adapters
    pub auto_hide: AutoHide,
    pub swipe: SwipeTracker,
    pub focus: FocusRing,
    // Persistent component states
    pub menu: SlideMenuState,
    /// Jump prompt overlay (None = hidden)
    pub jump_prompt: Option<JumpPrompt>,
    pub scroll: SlideScroll,
    /// Rectangles from the last draw, for hit testing
    pub layout: ScreenLayout,
    pub theme: SlideTheme,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            view: PresentationView::new(config.chrome, config.reveal_delay),
            timers: Timers::new(),
            auto_hide: AutoHide::new(config.auto_hide),
            swipe: SwipeTracker::new(config.swipe),
            focus: FocusRing::new(),
            menu: SlideMenuState::default(),
            jump_prompt: None,
            scroll: SlideScroll::new(),
            layout: ScreenLayout::default(),
            theme: SlideTheme::default(),
        }
    }

    /// Initial render pass and auto-hide countdown.
    pub fn start(&mut self, app: &App, announcer: &mut dyn Announcer, now: Instant) {
        self.view
            .render_pass(app, &mut self.timers, announcer, now);
        self.auto_hide.on_activity(&mut self.timers, now);
    }

    /// Fire due timers. Returns true if anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        if let Some(slide) = self.timers.take_due_reveal(now) {
            self.view.reveal(slide);
            changed = true;
        }
        if self.timers.take_due_hide(now) {
            debug!("Controls idle, dimming");
            self.auto_hide.on_deadline();
            changed = true;
        }
        changed
    }

    fn poll_timeout(&self, now: Instant) -> Duration {
        if self.scroll.is_animating() {
            return ANIMATION_POLL;
        }
        self.timers
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now).min(IDLE_POLL))
            .unwrap_or(IDLE_POLL)
    }

    fn focus_targets(&self) -> Vec<FocusTarget> {
        let mut targets = Vec::new();
        if self.layout.prev_button.is_some() {
            targets.push(FocusTarget::PrevButton);
        }
        if self.layout.next_button.is_some() {
            targets.push(FocusTarget::NextButton);
        }
        if self.layout.menu_toggle.is_some() {
            targets.push(FocusTarget::MenuToggle);
        }
        targets
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Mouse capture gives us clicks and drags, and keeps the terminal
        // from starting a text selection on swipe
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }

    /// Release the mouse while a text entry is open so its text can be selected.
    fn set_capture(&self, capture: bool) {
        let result = if capture {
            execute!(stdout(), EnableMouseCapture)
        } else {
            execute!(stdout(), DisableMouseCapture)
        };
        if let Err(e) = result {
            warn!("Failed to change mouse capture: {}", e);
        }
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Turn one terminal event into core actions.
///
/// Local UI changes (focus, prompt text, scroll target, menu cursor,
/// auto-hide) happen here directly; anything that touches navigation or
/// `App` comes back as an `Action`.
pub fn translate(app: &App, tui: &mut TuiState, event: &TuiEvent, now: Instant) -> Vec<Action> {
    match *event {
        TuiEvent::ForceQuit => vec![Action::Quit],
        TuiEvent::Resize => Vec::new(),
        TuiEvent::MouseMove(..) => {
            tui.auto_hide.on_activity(&mut tui.timers, now);
            Vec::new()
        }
        TuiEvent::ScrollUp => {
            tui.scroll.scroll_by(-SCROLL_STEP);
            Vec::new()
        }
        TuiEvent::ScrollDown => {
            tui.scroll.scroll_by(SCROLL_STEP);
            Vec::new()
        }
        TuiEvent::MouseDown(col, row) => {
            tui.auto_hide.on_activity(&mut tui.timers, now);
            tui.swipe.press(col, row);
            Vec::new()
        }
        TuiEvent::MouseUp(col, row) => {
            if tui.jump_prompt.take().is_some() {
                debug!("Pointer input cancelled the jump prompt");
            }
            release(app, tui, col, row)
        }
        TuiEvent::Key { code, modifiers } => {
            tui.auto_hide.on_activity(&mut tui.timers, now);

            let ctx = KeyContext {
                menu_open: app.menu_open,
                text_entry_focused: tui.jump_prompt.is_some(),
            };
            if let Some(binding) = resolve(code, modifiers, ctx) {
                return binding_actions(binding, tui);
            }

            // Nothing resolves while typing, so an open prompt gets every key
            if let Some(prompt) = tui.jump_prompt.as_mut() {
                return match prompt.handle_event(event) {
                    Some(JumpEvent::Submit(text)) => {
                        tui.jump_prompt = None;
                        match parse_position(&text) {
                            Some(position) => vec![Action::GoToSlide(position)],
                            None => {
                                debug!("Discarding non-numeric jump input {:?}", text);
                                Vec::new()
                            }
                        }
                    }
                    Some(JumpEvent::Cancel) => {
                        tui.jump_prompt = None;
                        Vec::new()
                    }
                    None => Vec::new(),
                };
            }

            if app.menu_open {
                return match tui.menu.handle_event(event) {
                    Some(MenuEvent::Choose(index)) => {
                        match app.menu.get(index).and_then(|e| e.position()) {
                            Some(position) => vec![Action::GoToSlide(position), Action::CloseMenu],
                            None => {
                                debug!("Menu entry {} has no numeric target", index);
                                Vec::new()
                            }
                        }
                    }
                    Some(MenuEvent::Dismiss) => vec![Action::CloseMenu],
                    None => Vec::new(),
                };
            }
            Vec::new()
        }
    }
}

fn release(app: &App, tui: &mut TuiState, col: u16, row: u16) -> Vec<Action> {
    match tui.swipe.release(col, row) {
        Gesture::SwipeLeft | Gesture::SwipeRight if app.menu_open => {
            debug!("Ignoring swipe while the menu is open");
            Vec::new()
        }
        Gesture::SwipeLeft => vec![Action::NextSlide],
        Gesture::SwipeRight => vec![Action::PreviousSlide],
        Gesture::Tap(col, row) => {
            // Pointer use ends keyboard focus, and with it the outline
            tui.focus.clear();
            let hit = hit_test(&tui.layout, col, row, tui.menu.offset(), app.menu.len());
            debug!("Click at ({}, {}) hit {:?}", col, row, hit);
            click_actions(hit, app)
        }
    }
}

fn binding_actions(binding: Binding, tui: &mut TuiState) -> Vec<Action> {
    match binding {
        Binding::Next => vec![Action::NextSlide],
        Binding::Previous => vec![Action::PreviousSlide],
        Binding::First => vec![Action::FirstSlide],
        Binding::Last => vec![Action::LastSlide],
        Binding::CloseMenu => vec![Action::CloseMenu],
        Binding::ToggleFullscreen => vec![Action::ToggleFullscreen],
        Binding::ToggleMenu => vec![Action::ToggleMenu],
        Binding::Quit => vec![Action::Quit],
        Binding::OpenJumpPrompt => {
            tui.jump_prompt = Some(JumpPrompt::new());
            Vec::new()
        }
        Binding::FocusNext => {
            let targets = tui.focus_targets();
            tui.focus.advance(&targets);
            Vec::new()
        }
        Binding::FocusPrevious => {
            let targets = tui.focus_targets();
            tui.focus.retreat(&targets);
            Vec::new()
        }
        Binding::Activate => tui.focus.activate().into_iter().collect(),
        Binding::ScrollUp => {
            tui.scroll.scroll_by(-SCROLL_STEP);
            Vec::new()
        }
        Binding::ScrollDown => {
            tui.scroll.scroll_by(SCROLL_STEP);
            Vec::new()
        }
    }
}

/// Apply one action and do the view-side follow-up for its effect.
///
/// Terminal requests (fullscreen) and quitting are left to the caller.
pub fn apply(
    app: &mut App,
    tui: &mut TuiState,
    action: Action,
    announcer: &mut dyn Announcer,
    now: Instant,
) -> Effect {
    let effect = update(app, action);
    match effect {
        Effect::Render => {
            tui.view.render_pass(app, &mut tui.timers, announcer, now);
            tui.scroll.reset();
        }
        Effect::MenuChanged if app.menu_open => {
            // Open with the cursor on the current slide's entry
            tui.menu = SlideMenuState::new(app.menu.len());
            if let Some(index) = (0..app.menu.len()).find(|&i| tui.view.is_highlighted(i)) {
                tui.menu.select(index);
            }
        }
        _ => {}
    }
    effect
}

fn request_fullscreen(on: bool) {
    match fullscreen::set_fullscreen(on) {
        Ok(()) => info!("Requested fullscreen {}", if on { "on" } else { "off" }),
        Err(e) => warn!("Fullscreen request failed: {}", e),
    }
}

pub fn run(mut app: App, config: &ResolvedConfig) -> std::io::Result<()> {
    let mut tui = TuiState::new(config);
    let mut announcer = TerminalTitleAnnouncer;

    let mut terminal = ratatui::init();
    let terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks (image probes)
    let (tx, rx) = mpsc::channel();

    tui.start(&app, &mut announcer, Instant::now());
    images::probe_current_slide(&mut app, &tx);

    let mut needs_redraw = true; // Force first frame
    let mut mouse_captured = true;

    loop {
        if needs_redraw || tui.scroll.is_animating() {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(tui.poll_timeout(Instant::now()));

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            needs_redraw = true;
            let now = Instant::now();
            for action in translate(&app, &mut tui, &event, now) {
                match apply(&mut app, &mut tui, action, &mut announcer, now) {
                    Effect::Quit => should_quit = true,
                    Effect::Render => {
                        images::probe_current_slide(&mut app, &tx);
                    }
                    Effect::Fullscreen(on) => request_fullscreen(on),
                    Effect::MenuChanged | Effect::None => {}
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            apply(&mut app, &mut tui, action, &mut announcer, Instant::now());
        }

        if tui.tick(Instant::now()) {
            needs_redraw = true;
        }

        let want_capture = tui.jump_prompt.is_none();
        if want_capture != mouse_captured {
            if let Ok(guard) = &terminal_mode_guard {
                guard.set_capture(want_capture);
            }
            mouse_captured = want_capture;
        }
    }

    if app.fullscreen {
        request_fullscreen(false);
    }
    drop(terminal_mode_guard);
    ratatui::restore();
    info!("Presentation closed on slide {}", app.current_slide());
    Ok(())
}
