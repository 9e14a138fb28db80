use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive data via props (struct fields), may borrow
/// persistent state mutably, and render into a `Rect` of the frame.
///
/// `render` takes `&mut self` so components can update presentation
/// state (scroll offsets, list state) during the render pass, the same
/// way Ratatui's `StatefulWidget` does.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
