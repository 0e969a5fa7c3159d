//! Request validation, canvas sizing and compositing

use rayon::prelude::*;
use tracing::debug;

use super::canvas::{Canvas, CanvasSize};
use super::shapes::{normalize_strokes, CellPos, RectangleSpec, Shape};
use super::{MAX_CANVAS_HEIGHT, MAX_CANVAS_WIDTH};
use crate::errors::{CanvasError, Result};
use crate::types::CanvasCreateRequest;

/// Check every rectangle, stopping at the first one that breaks a rule.
///
/// Rules are checked per rectangle in a fixed order: position, bounds,
/// ASCII, size. The caller's list is never modified.
pub fn validate(requests: &[RectangleSpec]) -> Result<()> {
    requests.iter().try_for_each(validate_rectangle)
}

fn validate_rectangle(rectangle: &RectangleSpec) -> Result<()> {
    let strokes = normalize_strokes(&rectangle.fill, &rectangle.outline);
    let CellPos { col, row } = rectangle.top_left;

    if col < 0 || row < 0 {
        return Err(CanvasError::InvalidPosition);
    }

    if col.saturating_add(rectangle.width) > MAX_CANVAS_WIDTH
        || row.saturating_add(rectangle.height) > MAX_CANVAS_HEIGHT
    {
        return Err(CanvasError::out_of_bounds());
    }

    if !strokes.fill.is_ascii() || !strokes.outline.is_ascii() {
        return Err(CanvasError::NonAscii);
    }

    if rectangle.width <= 0 || rectangle.height <= 0 {
        return Err(CanvasError::InvalidSize);
    }

    Ok(())
}

/// Tight bounding box of all rectangles, anchored at the origin.
///
/// An empty list yields a single blank cell. Extents never exceed the
/// canvas guard, so unvalidated input is clamped rather than sized as-is.
pub fn dimension(requests: &[RectangleSpec]) -> CanvasSize {
    let (last_row, last_col) = requests
        .iter()
        .map(Shape::bottom_right)
        .fold((0, 0), |(row, col), corner| {
            (row.max(corner.row), col.max(corner.col))
        });

    CanvasSize::new(
        extent(last_row, MAX_CANVAS_HEIGHT),
        extent(last_col, MAX_CANVAS_WIDTH),
    )
}

fn extent(last: i64, max: i64) -> usize {
    usize::try_from(last.min(max - 1)).map_or(1, |last| last + 1)
}

/// Paint one rectangle: border cells get the outline, interior cells the fill
pub fn paint<'a>(rectangle: &'a RectangleSpec, canvas: &mut Canvas<'a>) {
    canvas.draw(rectangle);
}

/// Validate, size, composite in request order and serialize to text.
///
/// Later rectangles overwrite earlier ones where they overlap.
pub fn render(requests: &[RectangleSpec]) -> Result<String> {
    if let Err(err) = validate(requests) {
        debug!(error = %err, "Rejected canvas request");
        return Err(err);
    }

    let size = dimension(requests);
    debug!(
        rectangles = requests.len(),
        height = size.height,
        width = size.width,
        "Rendering canvas"
    );

    let mut canvas = Canvas::new(size);
    for rectangle in requests {
        paint(rectangle, &mut canvas);
    }

    Ok(canvas.to_text())
}

/// Render independent request lists in parallel. Results keep input order.
pub fn render_batch(batch: &[CanvasCreateRequest]) -> Vec<Result<String>> {
    batch.par_iter().map(Vec::as_slice).map(render).collect()
}
