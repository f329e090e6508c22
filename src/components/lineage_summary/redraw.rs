use log::{debug, warn};

use super::config::SummaryConfig;
use super::error::{DrawError, Result};
use super::geometry::link_geometry;
use super::surface::{DrawSurface, Primitive};
use crate::lineage::Link;

/// Outcome of a full redraw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RedrawReport {
	/// Links drawn with all three primitives.
	pub drawn: usize,
	/// Links left out because a row or container was missing.
	pub skipped: usize,
	/// Drawn links touching the active field.
	pub selected: usize,
}

/// Measures both endpoints of `link` and appends its curve and anchors.
pub fn draw_link<S: DrawSurface + ?Sized>(
	surface: &S,
	link: &Link,
	selected: bool,
	config: &SummaryConfig,
) -> Result<()> {
	let source = surface
		.measure(&link.source)
		.ok_or_else(|| DrawError::MissingElement(link.source.clone()))?;
	let dest = surface
		.measure(&link.destination)
		.ok_or_else(|| DrawError::MissingElement(link.destination.clone()))?;

	let geo = link_geometry(&source, &dest, config);
	let color = config.palette.link_color(selected).to_owned();
	let container = link.container_id();

	surface.append(
		&container,
		&Primitive::Path {
			d: geo.path(),
			stroke: color.clone(),
			stroke_width: config.stroke_width,
		},
	)?;
	for rect in geo.anchors {
		surface.append(
			&container,
			&Primitive::Anchor {
				rect,
				rx: config.anchor_radius,
				fill: color.clone(),
			},
		)?;
	}
	Ok(())
}

/// Clears the overlay and draws every link, highlighting the ones touching
/// `active`. Links that cannot be drawn are skipped.
pub fn redraw<S: DrawSurface + ?Sized>(
	surface: &S,
	links: &[Link],
	active: Option<&str>,
	config: &SummaryConfig,
) -> RedrawReport {
	let mut report = RedrawReport::default();
	if let Err(err) = surface.clear() {
		warn!("failed to clear link overlay: {err}");
	}

	for link in links {
		let selected = active.is_some_and(|field| link.touches(field));
		match draw_link(surface, link, selected, config) {
			Ok(()) => {
				report.drawn += 1;
				report.selected += usize::from(selected);
			}
			Err(err) => {
				warn!("skipping link {} -> {}: {err}", link.source, link.destination);
				report.skipped += 1;
			}
		}
	}

	debug!(
		"redrew {} links ({} selected, {} skipped)",
		report.drawn, report.selected, report.skipped
	);
	report
}

/// Highlights the clicked row, then redraws with `field` active.
pub fn select_field<S: DrawSurface + ?Sized>(
	surface: &S,
	field: &str,
	links: &[Link],
	config: &SummaryConfig,
) -> RedrawReport {
	let palette = &config.palette;
	if let Err(err) =
		surface.highlight_row(Some(field), &palette.row_background, &palette.row_highlight)
	{
		warn!("failed to highlight row {field}: {err}");
	}
	redraw(surface, links, Some(field), config)
}

#[cfg(test)]
pub(crate) mod tests {
	use std::cell::RefCell;
	use std::collections::HashMap;

	use super::*;
	use crate::components::lineage_summary::geometry::Rect;

	/// In-memory page: fixed row rects and containers that collect primitives.
	#[derive(Default)]
	pub(crate) struct MemorySurface {
		pub rows: HashMap<String, Rect>,
		pub containers: RefCell<HashMap<String, Vec<Primitive>>>,
		pub highlighted: RefCell<Option<String>>,
	}

	impl MemorySurface {
		pub fn with_links(rows: &[(&str, Rect)], links: &[Link]) -> Self {
			Self {
				rows: rows.iter().map(|(id, r)| (id.to_string(), *r)).collect(),
				containers: RefCell::new(
					links
						.iter()
						.map(|l| (l.container_id(), Vec::new()))
						.collect(),
				),
				highlighted: RefCell::new(None),
			}
		}

		pub fn primitive_count(&self) -> usize {
			self.containers.borrow().values().map(Vec::len).sum()
		}

		pub fn drawn(&self, link: &Link) -> Vec<Primitive> {
			self.containers.borrow()[&link.container_id()].clone()
		}
	}

	impl DrawSurface for MemorySurface {
		fn measure(&self, id: &str) -> Option<Rect> {
			self.rows.get(id).copied()
		}

		fn clear(&self) -> Result<()> {
			self.containers
				.borrow_mut()
				.values_mut()
				.for_each(Vec::clear);
			Ok(())
		}

		fn append(&self, container: &str, primitive: &Primitive) -> Result<()> {
			self.containers
				.borrow_mut()
				.get_mut(container)
				.ok_or_else(|| DrawError::MissingContainer(container.to_owned()))?
				.push(primitive.clone());
			Ok(())
		}

		fn highlight_row(&self, row: Option<&str>, _: &str, _: &str) -> Result<()> {
			*self.highlighted.borrow_mut() = row.map(str::to_owned);
			Ok(())
		}
	}

	fn row(left: f64, top: f64) -> Rect {
		Rect {
			left,
			top,
			width: 100.0,
			height: 20.0,
		}
	}

	pub(crate) fn fixture() -> (MemorySurface, Vec<Link>) {
		let links = vec![
			Link::new("A_x", "T_x"),
			Link::new("A_y", "T_x"),
			Link::new("T_x", "B_z"),
		];
		let surface = MemorySurface::with_links(
			&[
				("A_x", row(100.0, 60.0)),
				("A_y", row(100.0, 80.0)),
				("T_x", row(400.0, 60.0)),
				("B_z", row(700.0, 60.0)),
			],
			&links,
		);
		(surface, links)
	}

	fn stroke_of(prims: &[Primitive]) -> &str {
		match &prims[0] {
			Primitive::Path { stroke, .. } => stroke,
			other => panic!("expected path first, got {other:?}"),
		}
	}

	#[test]
	fn draws_three_primitives_per_link() {
		let (surface, links) = fixture();
		let report = redraw(&surface, &links, None, &SummaryConfig::default());

		assert_eq!(report.drawn, 3);
		assert_eq!(report.skipped, 0);
		assert_eq!(surface.primitive_count(), 9);
	}

	#[test]
	fn repeated_redraws_do_not_accumulate() {
		let (surface, links) = fixture();
		let config = SummaryConfig::default();
		redraw(&surface, &links, None, &config);
		redraw(&surface, &links, Some("T_x"), &config);
		redraw(&surface, &links, Some("T_x"), &config);
		assert_eq!(surface.primitive_count(), 9);
	}

	#[test]
	fn empty_link_set_clears_previous_draw() {
		let (surface, links) = fixture();
		let config = SummaryConfig::default();
		redraw(&surface, &links, None, &config);

		let report = redraw(&surface, &[], None, &config);
		assert_eq!(report, RedrawReport::default());
		assert_eq!(surface.primitive_count(), 0);
	}

	#[test]
	fn selection_colors_only_touching_links() {
		let (surface, links) = fixture();
		let config = SummaryConfig::default();
		let report = redraw(&surface, &links, Some("A_y"), &config);
		assert_eq!(report.selected, 1);

		assert_eq!(stroke_of(&surface.drawn(&links[0])), config.palette.neutral);
		assert_eq!(stroke_of(&surface.drawn(&links[1])), config.palette.selected);
		assert_eq!(stroke_of(&surface.drawn(&links[2])), config.palette.neutral);

		// A field in the middle column selects links on both sides.
		let report = redraw(&surface, &links, Some("T_x"), &config);
		assert_eq!(report.selected, 3);
	}

	#[test]
	fn anchors_share_the_link_color() {
		let (surface, links) = fixture();
		let config = SummaryConfig::default();
		redraw(&surface, &links, Some("A_x"), &config);

		let prims = surface.drawn(&links[0]);
		assert_eq!(prims.len(), 3);
		for prim in &prims[1..] {
			let Primitive::Anchor { rect, rx, fill } = prim else {
				panic!("expected anchor, got {prim:?}");
			};
			assert_eq!(fill, &config.palette.selected);
			assert_eq!(*rx, 1.8);
			assert_eq!((rect.width, rect.height), (8.0, 8.0));
		}
	}

	#[test]
	fn end_to_end_path_matches_measured_rows() {
		let links = vec![Link::new("A_x", "B_y")];
		let surface = MemorySurface::with_links(
			&[
				(
					"A_x",
					Rect {
						left: 0.0,
						top: 50.0,
						width: 100.0,
						height: 20.0,
					},
				),
				(
					"B_y",
					Rect {
						left: 300.0,
						top: 90.0,
						width: 50.0,
						height: 10.0,
					},
				),
			],
			&links,
		);
		redraw(&surface, &links, None, &SummaryConfig::default());

		let prims = surface.drawn(&links[0]);
		let Primitive::Path { d, .. } = &prims[0] else {
			panic!("expected path");
		};
		assert!(d.starts_with("M0,10C"), "{d}");
		assert!(d.ends_with(",200,50"), "{d}");

		let Primitive::Anchor { rect, .. } = &prims[2] else {
			panic!("expected anchor");
		};
		assert_eq!((rect.left, rect.top), (196.0, 46.0));
	}

	#[test]
	fn missing_rows_skip_only_their_link() {
		let (surface, mut links) = fixture();
		let stale = Link::new("A_gone", "T_x");
		surface
			.containers
			.borrow_mut()
			.insert(stale.container_id(), Vec::new());
		links.insert(1, stale.clone());

		let report = redraw(&surface, &links, None, &SummaryConfig::default());
		assert_eq!(report.drawn, 3);
		assert_eq!(report.skipped, 1);
		assert!(surface.drawn(&stale).is_empty());
		assert_eq!(surface.primitive_count(), 9);
	}

	#[test]
	fn selecting_a_field_highlights_its_row_and_links() {
		let (surface, links) = fixture();
		let config = SummaryConfig::default();
		let report = select_field(&surface, "B_z", &links, &config);

		assert_eq!(surface.highlighted.borrow().as_deref(), Some("B_z"));
		assert_eq!(report.selected, 1);
		assert_eq!(stroke_of(&surface.drawn(&links[2])), config.palette.selected);
		assert_eq!(surface.primitive_count(), 9);
	}

	#[test]
	fn draw_link_reports_missing_element() {
		let (surface, _) = fixture();
		let err = draw_link(
			&surface,
			&Link::new("A_x", "nowhere"),
			false,
			&SummaryConfig::default(),
		)
		.unwrap_err();
		assert_eq!(err, DrawError::MissingElement("nowhere".into()));
	}
}
