use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable piece of the screen.
///
/// Components receive their data as struct fields ("props"), borrowed from
/// `App` and `TuiState` for a single frame, and render into a `Frame`
/// within a given `Rect`.
///
/// # Mutability
///
/// `render` takes `&mut self` so a component can record what it drew
/// (hit areas for mouse input, scroll extents) while rendering.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
