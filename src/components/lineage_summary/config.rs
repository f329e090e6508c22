/// Colors used by the summary: links, anchors and row backgrounds.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkPalette {
	/// Links not touching the selected field.
	pub neutral: String,
	/// Links touching the selected field.
	pub selected: String,
	/// Background of the clicked row.
	pub row_highlight: String,
	/// Background every other row is reset to.
	pub row_background: String,
}

impl Default for LinkPalette {
	fn default() -> Self {
		Self {
			neutral: "#bdbdbd".into(),
			selected: "#ff9800".into(),
			row_highlight: "#fff59d".into(),
			row_background: "white".into(),
		}
	}
}

impl LinkPalette {
	/// Stroke and fill of a link.
	pub fn link_color(&self, selected: bool) -> &str {
		if selected {
			&self.selected
		} else {
			&self.neutral
		}
	}
}

/// Which height centers a link's end point vertically on the destination row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EndpointCenter {
	/// Half of the source row's height. Long-standing behavior that existing
	/// layouts were validated against.
	#[default]
	SourceHeight,
	/// Half of the destination row's own height.
	OwnHeight,
}

/// Layout and behavior knobs of [`LineageSummary`](super::LineageSummary).
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryConfig {
	/// Horizontal shift applied to every endpoint; the negated root padding.
	pub offset_x: f64,
	/// Vertical shift applied to every endpoint; the negated distance from the
	/// viewport top to the summary root (the host's app bar).
	pub offset_y: f64,
	/// Side of the square anchors.
	pub anchor_size: f64,
	/// Corner radius of the anchors.
	pub anchor_radius: f64,
	/// Width of the link curves.
	pub stroke_width: f64,
	/// Quiet period after the last resize event before redrawing.
	pub resize_debounce_ms: i32,
	/// Redraw whenever the lineage snapshot changes.
	pub redraw_on_data_change: bool,
	/// Vertical centering rule for the destination end.
	pub dest_center: EndpointCenter,
	/// Link and row colors.
	pub palette: LinkPalette,
}

impl Default for SummaryConfig {
	fn default() -> Self {
		Self {
			offset_x: -100.0,
			offset_y: -50.0,
			anchor_size: 8.0,
			anchor_radius: 1.8,
			stroke_width: 1.0,
			resize_debounce_ms: 1,
			redraw_on_data_change: true,
			dest_center: EndpointCenter::default(),
			palette: LinkPalette::default(),
		}
	}
}

impl SummaryConfig {
	/// Inline style of the root container; its padding must cancel `offset_x`.
	pub fn root_style(&self) -> String {
		format!(
			"position: relative; display: flex; justify-content: space-between; padding-left: {0}px; padding-right: {0}px;",
			-self.offset_x
		)
	}
}
