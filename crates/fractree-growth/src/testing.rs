//! Surface test double.

use fractree_core::Surface;
use ratatui::style::Color;

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    ClearRect(f64, f64, f64, f64),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Stroke(Color, f64),
}

/// Records every call for later inspection.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub width: f64,
    pub height: f64,
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    /// Number of strokes since the last clear.
    pub fn strokes_since_clear(&self) -> usize {
        let start = self
            .ops
            .iter()
            .rposition(|op| matches!(op, Op::ClearRect(..)))
            .map_or(0, |i| i + 1);
        self.ops[start..]
            .iter()
            .filter(|op| matches!(op, Op::Stroke(..)))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(Op::ClearRect(x, y, width, height));
    }

    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::LineTo(x, y));
    }

    fn stroke(&mut self, color: Color, width: f64) {
        self.ops.push(Op::Stroke(color, width));
    }
}
