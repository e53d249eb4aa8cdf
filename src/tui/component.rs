use ratatui::Frame;
use ratatui::layout::Rect;

/// A piece of the chat view that draws itself into a region of the frame.
///
/// Props arrive as struct fields, so every component shares one `render`
/// signature. `&mut self` lets stateful components (the message list, the
/// input box) update scroll offsets and layout caches while drawing, the way
/// ratatui's `StatefulWidget` does.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that reacts to terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
