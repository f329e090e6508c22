use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::lineage::FieldId;

/// Failures while drawing links into the overlay.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DrawError {
	/// A link endpoint has no rendered row.
	#[error("field `{0}` is not rendered")]
	MissingElement(FieldId),
	/// The overlay has no container for a link.
	#[error("link container `{0}` is not rendered")]
	MissingContainer(String),
	/// Not running in a browser window.
	#[error("no document available")]
	NoDocument,
	/// A DOM call threw.
	#[error("DOM error: {0}")]
	Dom(String),
}

impl From<JsValue> for DrawError {
	fn from(value: JsValue) -> Self {
		DrawError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}

/// Result of overlay drawing operations.
pub type Result<T> = std::result::Result<T, DrawError>;
