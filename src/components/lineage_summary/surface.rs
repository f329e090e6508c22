use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::error::{DrawError, Result};
use super::geometry::Rect;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Id of the overlay `<svg>` that holds every link container.
pub const OVERLAY_ID: &str = "links-container";
/// Class carried by every clickable field row.
pub const ROW_CLASS: &str = "grid-row";

/// A shape appended into a link container.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
	/// The link's curve.
	Path {
		/// SVG path data.
		d: String,
		/// Stroke color.
		stroke: String,
		/// Stroke width in px.
		stroke_width: f64,
	},
	/// A rounded square at one end of the curve.
	Anchor {
		/// Overlay-local box of the square.
		rect: Rect,
		/// Corner radius.
		rx: f64,
		/// Fill color.
		fill: String,
	},
}

/// What the redraw needs from the page: row measurement, overlay mutation and
/// row highlighting, all keyed by DOM id.
pub trait DrawSurface {
	/// Viewport box of the element with `id`, if rendered.
	fn measure(&self, id: &str) -> Option<Rect>;
	/// Removes every primitive previously appended to any link container.
	fn clear(&self) -> Result<()>;
	/// Appends `primitive` to the link container with id `container`.
	fn append(&self, container: &str, primitive: &Primitive) -> Result<()>;
	/// Resets all row backgrounds, then highlights `row` if given.
	fn highlight_row(&self, row: Option<&str>, background: &str, highlight: &str) -> Result<()>;
}

/// [`DrawSurface`] over the live document.
pub struct DomSurface {
	document: Document,
}

impl DomSurface {
	/// Binds to the window's document.
	pub fn new() -> Result<Self> {
		let document = web_sys::window()
			.and_then(|w| w.document())
			.ok_or(DrawError::NoDocument)?;
		Ok(Self { document })
	}

	fn element(&self, id: &str) -> Option<Element> {
		self.document.get_element_by_id(id)
	}

	fn svg(&self, tag: &str) -> Result<Element> {
		Ok(self.document.create_element_ns(Some(SVG_NS), tag)?)
	}
}

impl DrawSurface for DomSurface {
	fn measure(&self, id: &str) -> Option<Rect> {
		let rect = self.element(id)?.get_bounding_client_rect();
		Some(Rect {
			left: rect.left(),
			top: rect.top(),
			width: rect.width(),
			height: rect.height(),
		})
	}

	fn clear(&self) -> Result<()> {
		let Some(overlay) = self.element(OVERLAY_ID) else {
			return Ok(());
		};
		let drawn = overlay.query_selector_all("path,rect")?;
		for i in 0..drawn.length() {
			if let Some(node) = drawn.item(i) {
				if let Ok(el) = node.dyn_into::<Element>() {
					el.remove();
				}
			}
		}
		Ok(())
	}

	fn append(&self, container: &str, primitive: &Primitive) -> Result<()> {
		let parent = self
			.element(container)
			.ok_or_else(|| DrawError::MissingContainer(container.to_owned()))?;

		let el = match primitive {
			Primitive::Path {
				d,
				stroke,
				stroke_width,
			} => {
				let path = self.svg("path")?;
				path.set_attribute("d", d)?;
				path.set_attribute(
					"style",
					&format!("stroke: {stroke}; stroke-width: {stroke_width}; fill: none;"),
				)?;
				path
			}
			Primitive::Anchor { rect, rx, fill } => {
				let anchor = self.svg("rect")?;
				anchor.set_attribute("x", &rect.left.to_string())?;
				anchor.set_attribute("y", &rect.top.to_string())?;
				anchor.set_attribute("width", &rect.width.to_string())?;
				anchor.set_attribute("height", &rect.height.to_string())?;
				anchor.set_attribute("rx", &rx.to_string())?;
				// The overlay ignores pointer events; anchors opt back in.
				anchor.set_attribute("pointer-events", "fill")?;
				anchor.set_attribute("style", &format!("fill: {fill};"))?;
				anchor
			}
		};
		parent.append_child(&el)?;
		Ok(())
	}

	fn highlight_row(&self, row: Option<&str>, background: &str, highlight: &str) -> Result<()> {
		let rows = self.document.query_selector_all(&format!(".{ROW_CLASS}"))?;
		for i in 0..rows.length() {
			if let Some(el) = rows.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
				el.style().set_property("background-color", background)?;
			}
		}
		if let Some(id) = row {
			let el = self
				.element(id)
				.and_then(|e| e.dyn_into::<HtmlElement>().ok())
				.ok_or_else(|| DrawError::MissingElement(id.to_owned()))?;
			el.style().set_property("background-color", highlight)?;
		}
		Ok(())
	}
}
