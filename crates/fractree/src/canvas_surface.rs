//! [`Surface`] backed by a ratatui canvas.
//!
//! Surface units are Braille dots: two per terminal column and four per
//! row, which keeps them roughly square.

use fractree_core::{Point, Surface};
use ratatui::{
    layout::Rect,
    style::Color,
    widgets::canvas::{Context, Line},
};

/// Surface size in dots for a terminal area.
pub fn dot_size(area: Rect) -> (f64, f64) {
    (f64::from(area.width) * 2.0, f64::from(area.height) * 4.0)
}

/// Adapts a canvas [`Context`] to the top-left origin [`Surface`] contract.
pub struct CanvasSurface<'a, 'b> {
    ctx: &'a mut Context<'b>,
    width: f64,
    height: f64,
    cursor: Option<Point>,
    path: Vec<(Point, Point)>,
}

impl<'a, 'b> CanvasSurface<'a, 'b> {
    /// Wrap `ctx`, whose bounds must be `[0, width] x [0, height]`.
    pub fn new(ctx: &'a mut Context<'b>, width: f64, height: f64) -> Self {
        Self {
            ctx,
            width,
            height,
            cursor: None,
            path: Vec::new(),
        }
    }

    /// Canvas y grows upwards.
    fn flip(&self, p: Point) -> Point {
        Point::new(p.x, self.height - p.y)
    }
}

/// Perpendicular offsets of the one-dot lines making up a `width` stroke.
fn stroke_offsets(width: f64) -> impl Iterator<Item = f64> {
    let lines = width.round().max(1.0) as usize;
    let centre = (lines - 1) as f64 / 2.0;
    (0..lines).map(move |i| i as f64 - centre)
}

impl Surface for CanvasSurface<'_, '_> {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear_rect(&mut self, _x: f64, _y: f64, _width: f64, _height: f64) {
        // The canvas grid starts blank every frame.
        self.path.clear();
        self.cursor = None;
    }

    fn begin_path(&mut self) {
        self.path.clear();
        self.cursor = None;
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.cursor = Some(Point::new(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let to = Point::new(x, y);
        if let Some(from) = self.cursor {
            self.path.push((from, to));
        }
        self.cursor = Some(to);
    }

    fn stroke(&mut self, color: Color, width: f64) {
        for (from, to) in std::mem::take(&mut self.path) {
            let (from, to) = (self.flip(from), self.flip(to));
            let length = from.distance(to);
            let (nx, ny) = if length > 0.0 {
                (-(to.y - from.y) / length, (to.x - from.x) / length)
            } else {
                (0.0, 0.0)
            };
            for offset in stroke_offsets(width) {
                self.ctx.draw(&Line::new(
                    from.x + nx * offset,
                    from.y + ny * offset,
                    to.x + nx * offset,
                    to.y + ny * offset,
                    color,
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{buffer::Buffer, symbols::Marker, widgets::Widget, widgets::canvas::Canvas};

    fn render<F>(area: Rect, draw: F) -> Buffer
    where
        F: Fn(&mut CanvasSurface<'_, '_>),
    {
        let (width, height) = dot_size(area);
        let mut buf = Buffer::empty(area);
        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                let mut surface = CanvasSurface::new(ctx, width, height);
                draw(&mut surface);
            })
            .render(area, &mut buf);
        buf
    }

    fn row_has_ink(buf: &Buffer, y: u16) -> bool {
        (0..buf.area.width).any(|x| buf[(x, y)].symbol() != " ")
    }

    #[test]
    fn test_dot_size() {
        assert_eq!(dot_size(Rect::new(0, 0, 80, 24)), (160.0, 96.0));
    }

    #[test]
    fn test_stroke_offsets_are_centred() {
        let offsets: Vec<f64> = stroke_offsets(3.0).collect();
        assert_eq!(offsets, vec![-1.0, 0.0, 1.0]);
        let thin: Vec<f64> = stroke_offsets(0.2).collect();
        assert_eq!(thin, vec![0.0]);
        assert_eq!(stroke_offsets(10.0).count(), 10);
    }

    #[test]
    fn test_vertical_line_spans_every_row() {
        let area = Rect::new(0, 0, 10, 5);
        let buf = render(area, |surface| {
            surface.begin_path();
            surface.move_to(10.0, 0.0);
            surface.line_to(10.0, 20.0);
            surface.stroke(Color::White, 1.0);
        });
        for y in 0..5 {
            assert!(row_has_ink(&buf, y), "row {y} is blank");
        }
    }

    #[test]
    fn test_top_of_surface_is_top_of_terminal() {
        let area = Rect::new(0, 0, 10, 5);
        let buf = render(area, |surface| {
            surface.begin_path();
            surface.move_to(2.0, 1.0);
            surface.line_to(18.0, 1.0);
            surface.stroke(Color::White, 1.0);
        });
        assert!(row_has_ink(&buf, 0));
        assert!(!row_has_ink(&buf, 4));
    }

    #[test]
    fn test_unstroked_path_is_discarded() {
        let area = Rect::new(0, 0, 10, 5);
        let buf = render(area, |surface| {
            surface.begin_path();
            surface.move_to(0.0, 0.0);
            surface.line_to(20.0, 20.0);
            surface.begin_path();
            surface.stroke(Color::White, 1.0);
        });
        assert!((0..5).all(|y| !row_has_ink(&buf, y)));
    }
}
