//! Immediate-mode drawing contract.

use ratatui::style::Color;

/// A 2D immediate-mode drawing surface.
///
/// Coordinates follow [`crate::Point`]: origin at the top-left corner, y
/// growing downwards. Implementations may change size between frames.
pub trait Surface {
    /// Current `(width, height)` in surface units.
    fn size(&self) -> (f64, f64);

    /// Erase a rectangular region.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Start a new path, discarding any unstroked one.
    fn begin_path(&mut self);

    fn move_to(&mut self, x: f64, y: f64);

    fn line_to(&mut self, x: f64, y: f64);

    /// Stroke the current path.
    fn stroke(&mut self, color: Color, width: f64);

    /// Erase the whole surface.
    fn clear(&mut self) {
        let (width, height) = self.size();
        self.clear_rect(0.0, 0.0, width, height);
    }
}
