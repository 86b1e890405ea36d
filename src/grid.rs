//! Grid layout for the demo blocks.

use crate::model::{Cell, Palette, Point, Size};

/// Lays out `count` cells left to right starting at the top-left corner of
/// `viewport`, wrapping to a new row once a cell's right edge would pass the
/// right edge of the viewport.
///
/// Rows are never checked against the bottom edge, so a large `count` keeps
/// stacking rows below the visible area. A row always holds at least one
/// cell, which keeps positions distinct even when `cell_size` is wider than
/// the viewport.
pub fn build_grid(count: usize, cell_size: Size, viewport: Size, palette: &Palette) -> Vec<Cell> {
    let left = -viewport.half_width() + cell_size.half_width();
    let right_edge = viewport.half_width();

    let mut cells = Vec::with_capacity(count);
    let mut x = left;
    let mut y = viewport.half_height() - cell_size.half_height();
    let mut row_len = 0usize;

    for index in 0..count {
        if row_len > 0 && x + cell_size.half_width() > right_edge {
            y -= cell_size.height;
            x = left;
            row_len = 0;
        }
        cells.push(Cell {
            index,
            position: Point::new(x, y),
            size: cell_size,
            color: palette.color_for(index),
            label: index.to_string(),
        });
        x += cell_size.width;
        row_len += 1;
    }

    cells
}

/// Number of cells that fit on one row before wrapping.
pub fn cells_per_row(cell_size: Size, viewport: Size) -> usize {
    let fit = (viewport.width / cell_size.width).floor();
    if fit.is_finite() && fit >= 1.0 { fit as usize } else { 1 }
}
