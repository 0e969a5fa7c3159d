use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::canvas::RectangleSpec;
use crate::errors::{CanvasError, Result};

/// Format used for `creationDate`
pub const CREATION_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Body of a canvas create request: rectangles in paint order
pub type CanvasCreateRequest = Vec<RectangleSpec>;

/// Decode a JSON rectangle list.
///
/// A `null` body is an empty list and `null` entries are zero-valued
/// rectangles.
pub fn parse_request(body: &str) -> Result<CanvasCreateRequest> {
    let request: Option<Vec<Option<RectangleSpec>>> =
        serde_json::from_str(body).map_err(|e| CanvasError::InvalidPayload(e.to_string()))?;

    Ok(request
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

/// Rendered drawing returned to the caller
///
/// The drawing is split into one string per canvas row.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CanvasResponse {
    pub id: String,
    pub drawing: Vec<String>,
    pub creation_date: String,
}

impl CanvasResponse {
    /// Wrap a rendered drawing with a fresh id and the current local time
    pub fn new(drawing: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            drawing: drawing.split('\n').map(str::to_owned).collect(),
            creation_date: Local::now().format(CREATION_DATE_FORMAT).to_string(),
        }
    }

    /// Rows joined back into the rendered text
    pub fn text(&self) -> String {
        self.drawing.join("\n")
    }
}

/// `{"error": "..."}` envelope for a failed request
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&CanvasError> for ErrorResponse {
    fn from(err: &CanvasError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}
