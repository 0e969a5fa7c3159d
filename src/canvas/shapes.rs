//! Rectangle requests and their cell geometry

use std::fmt;

use serde::de::{IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use super::canvas::Canvas;

/// Cell value used wherever a fill is unset
pub const BLANK: &str = " ";

/// Sentinel accepted in `Fill`/`Outline` meaning "not set"
pub const NONE_SENTINEL: &str = "none";

/// Cell position, 0-based. Encoded on the wire as `[col, row]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "[i64; 2]")]
pub struct CellPos {
    pub col: i64,
    pub row: i64,
}

impl CellPos {
    #[inline]
    pub const fn new(col: i64, row: i64) -> Self {
        Self { col, row }
    }
}

impl From<[i64; 2]> for CellPos {
    fn from([col, row]: [i64; 2]) -> Self {
        Self::new(col, row)
    }
}

impl From<CellPos> for [i64; 2] {
    fn from(pos: CellPos) -> Self {
        [pos.col, pos.row]
    }
}

// Short arrays are zero-padded, extra elements dropped, null elements read as 0
impl<'de> Deserialize<'de> for CellPos {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CellPosVisitor;

        impl<'de> Visitor<'de> for CellPosVisitor {
            type Value = CellPos;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an array of [col, row] coordinates")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<CellPos, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut coords = [0_i64; 2];
                for idx in 0..coords.len() {
                    match seq.next_element::<Option<i64>>()? {
                        Some(value) => coords[idx] = value.unwrap_or_default(),
                        None => return Ok(coords.into()),
                    }
                }
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(coords.into())
            }
        }

        deserializer.deserialize_seq(CellPosVisitor)
    }
}

/// One requested rectangle, as decoded from a canvas create request.
///
/// Keys match case-insensitively and unknown keys are skipped. Absent or
/// `null` fields take their zero value, so a missing `Fill` behaves like
/// `"none"` and a missing `Width` is rejected as an invalid size.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RectangleSpec {
    #[serde(rename = "RectangleAt")]
    pub top_left: CellPos,
    #[serde(rename = "Width")]
    pub width: i64,
    #[serde(rename = "Height")]
    pub height: i64,
    #[serde(rename = "Outline")]
    pub outline: String,
    #[serde(rename = "Fill")]
    pub fill: String,
}

impl<'de> Deserialize<'de> for RectangleSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RectangleSpecVisitor)
    }
}

struct RectangleSpecVisitor;

impl<'de> Visitor<'de> for RectangleSpecVisitor {
    type Value = RectangleSpec;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a rectangle object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<RectangleSpec, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut spec = RectangleSpec::default();

        // Later duplicates win; null leaves the field as it was
        while let Some(key) = map.next_key::<String>()? {
            match key.to_ascii_lowercase().as_str() {
                "rectangleat" => {
                    if let Some(top_left) = map.next_value::<Option<CellPos>>()? {
                        spec.top_left = top_left;
                    }
                }
                "width" => {
                    if let Some(width) = map.next_value::<Option<i64>>()? {
                        spec.width = width;
                    }
                }
                "height" => {
                    if let Some(height) = map.next_value::<Option<i64>>()? {
                        spec.height = height;
                    }
                }
                "outline" => {
                    if let Some(outline) = map.next_value::<Option<String>>()? {
                        spec.outline = outline;
                    }
                }
                "fill" => {
                    if let Some(fill) = map.next_value::<Option<String>>()? {
                        spec.fill = fill;
                    }
                }
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(spec)
    }
}

/// Fill and outline after the `"none"`/blank rules have been applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strokes<'a> {
    pub fill: &'a str,
    pub outline: &'a str,
}

fn is_unset(value: &str) -> bool {
    value == NONE_SENTINEL || value.trim().is_empty()
}

/// Resolve the effective fill and outline of a rectangle.
///
/// An unset fill becomes a single space; an unset outline takes the
/// already-resolved fill.
pub fn normalize_strokes<'a>(fill: &'a str, outline: &'a str) -> Strokes<'a> {
    let fill = if is_unset(fill) { BLANK } else { fill };
    let outline = if is_unset(outline) { fill } else { outline };
    Strokes { fill, outline }
}

/// Shape trait for drawable primitives
pub trait Shape {
    /// Paint the shape onto the canvas, overwriting whatever is there
    fn paint<'a>(&'a self, canvas: &mut Canvas<'a>);

    /// Last cell covered by the shape (inclusive)
    fn bottom_right(&self) -> CellPos;
}

impl RectangleSpec {
    pub fn new(top_left: CellPos, width: i64, height: i64) -> Self {
        Self {
            top_left,
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_outline(mut self, outline: impl Into<String>) -> Self {
        self.outline = outline.into();
        self
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = fill.into();
        self
    }

    pub fn strokes(&self) -> Strokes<'_> {
        normalize_strokes(&self.fill, &self.outline)
    }

    /// Whether `(row, col)` lies on the first or last row or column
    #[inline]
    pub fn is_border(&self, row: i64, col: i64) -> bool {
        let bottom_right = self.bottom_right();
        row == self.top_left.row
            || row == bottom_right.row
            || col == self.top_left.col
            || col == bottom_right.col
    }
}

impl Shape for RectangleSpec {
    fn paint<'a>(&'a self, canvas: &mut Canvas<'a>) {
        // Resolved from the raw request each time; nothing upstream rewrites it.
        let strokes = self.strokes();
        let Some((rows, cols)) = canvas.clip(self.top_left, self.bottom_right()) else {
            return;
        };

        for row in rows {
            for col in cols.clone() {
                let value = if self.is_border(row, col) {
                    strokes.outline
                } else {
                    strokes.fill
                };
                canvas.set_cell(row, col, value);
            }
        }
    }

    fn bottom_right(&self) -> CellPos {
        CellPos::new(
            self.top_left.col.saturating_add(self.width).saturating_sub(1),
            self.top_left.row.saturating_add(self.height).saturating_sub(1),
        )
    }
}
