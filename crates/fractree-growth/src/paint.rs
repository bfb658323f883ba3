//! Stroking the visible part of a tree onto a surface.

use fractree_core::{Branch, Surface};
use ratatui::style::Color;

/// Branches whose depth is at most `threshold`.
pub fn visible(branches: &[Branch], threshold: u32) -> impl Iterator<Item = &Branch> {
    branches
        .iter()
        .filter(move |branch| branch.depth <= threshold)
}

/// Clear `surface` and stroke every branch up to `threshold`.
///
/// Returns the number of branches drawn.
pub fn paint<S>(surface: &mut S, branches: &[Branch], threshold: u32, color: Color) -> usize
where
    S: Surface + ?Sized,
{
    surface.clear();

    let mut drawn = 0;
    for branch in visible(branches, threshold) {
        surface.begin_path();
        surface.move_to(branch.start.x, branch.start.y);
        surface.line_to(branch.end.x, branch.end.y);
        surface.stroke(color, branch.width);
        drawn += 1;
    }
    drawn
}
