//! Character grid that rectangles are painted onto

use std::ops::RangeInclusive;

use super::shapes::{CellPos, Shape, BLANK};

/// Canvas dimensions in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CanvasSize {
    pub height: usize,
    pub width: usize,
}

impl CanvasSize {
    #[inline]
    pub const fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    #[inline]
    pub const fn cells(&self) -> usize {
        self.height * self.width
    }
}

/// Text canvas
///
/// Each cell holds the string painted into it. Cells borrow from the
/// rectangles that painted them, so a canvas lives no longer than its
/// request list.
#[derive(Debug, Clone)]
pub struct Canvas<'a> {
    size: CanvasSize,
    /// Cell data (row-major)
    cells: Vec<&'a str>,
}

impl<'a> Canvas<'a> {
    /// Create a blank canvas
    pub fn new(size: CanvasSize) -> Self {
        Self {
            size,
            cells: vec![BLANK; size.cells()],
        }
    }

    pub fn size(&self) -> CanvasSize {
        self.size
    }

    #[inline]
    fn index(&self, row: i64, col: i64) -> Option<usize> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        (row < self.size.height && col < self.size.width).then(|| row * self.size.width + col)
    }

    /// Get cell at coordinates
    #[inline]
    pub fn get_cell(&self, row: i64, col: i64) -> Option<&'a str> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at coordinates. Writes outside the grid are dropped.
    #[inline]
    pub fn set_cell(&mut self, row: i64, col: i64, value: &'a str) {
        if let Some(idx) = self.index(row, col) {
            self.cells[idx] = value;
        }
    }

    /// Intersect an inclusive cell span with the grid.
    ///
    /// Returns the row and column ranges to visit, or `None` when the span
    /// misses the canvas entirely.
    pub fn clip(
        &self,
        top_left: CellPos,
        bottom_right: CellPos,
    ) -> Option<(RangeInclusive<i64>, RangeInclusive<i64>)> {
        let rows = clip_axis(top_left.row, bottom_right.row, self.size.height)?;
        let cols = clip_axis(top_left.col, bottom_right.col, self.size.width)?;
        Some((rows, cols))
    }

    /// Draw a shape onto the canvas
    pub fn draw<S: Shape>(&mut self, shape: &'a S) {
        shape.paint(self);
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[&'a str]> {
        self.cells.chunks(self.size.width.max(1))
    }

    /// Serialize: each row's cells concatenated, rows joined by `\n`
    pub fn to_text(&self) -> String {
        self.rows()
            .map(|row| row.concat())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn clip_axis(start: i64, end: i64, len: usize) -> Option<RangeInclusive<i64>> {
    let last = i64::try_from(len).ok()?.checked_sub(1)?;
    let start = start.max(0);
    let end = end.min(last);
    (start <= end).then_some(start..=end)
}
