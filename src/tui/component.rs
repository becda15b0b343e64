use ratatui::Frame;
use ratatui::layout::Rect;

/// A piece of presenter chrome that draws itself.
///
/// Components receive what they show as props (struct fields) and render
/// into the `Rect` the screen layout assigned them. The layout is computed
/// once per frame by `ui::screen_layout` so that pointer hit testing sees
/// the same rectangles that were drawn.
///
/// `render` takes `&mut self` so stateful components (the slide body's
/// scroll position, the menu's list state) can update during the pass, in
/// line with ratatui's `StatefulWidget`.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that consumes terminal events while it has focus.
pub trait EventHandler {
    /// The high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
