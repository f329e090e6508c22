//! Screen-space geometry of link curves and anchors.

use std::fmt::Write;

use super::config::{EndpointCenter, SummaryConfig};

/// A viewport-relative box, as returned by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
	/// Left edge.
	pub left: f64,
	/// Top edge.
	pub top: f64,
	/// Width.
	pub width: f64,
	/// Height.
	pub height: f64,
}

impl Rect {
	/// Right edge.
	pub fn right(&self) -> f64 {
		self.left + self.width
	}
}

/// A point in overlay coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal coordinate.
	pub x: f64,
	/// Vertical coordinate.
	pub y: f64,
}

impl Point {
	/// Point at `(x, y)`.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// Screen-space shape of one link: the curve's control points and the two
/// square anchors at its ends.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkGeometry {
	/// Start, two interior points, end.
	pub points: [Point; 4],
	/// Source-side and destination-side anchors.
	pub anchors: [Rect; 2],
}

impl LinkGeometry {
	/// Point on the source row's right edge.
	pub fn start(&self) -> Point {
		self.points[0]
	}

	/// Point on the destination row's left edge.
	pub fn end(&self) -> Point {
		self.points[3]
	}

	/// SVG path data for the smoothed curve through `points`.
	pub fn path(&self) -> String {
		monotone_x_path(&self.points)
	}
}

/// Connects the right edge of `source` to the left edge of `dest`.
pub fn link_geometry(source: &Rect, dest: &Rect, config: &SummaryConfig) -> LinkGeometry {
	let (ox, oy) = (config.offset_x, config.offset_y);
	let dest_height = match config.dest_center {
		EndpointCenter::SourceHeight => source.height,
		EndpointCenter::OwnHeight => dest.height,
	};

	let start = Point::new(source.right() + ox, source.top + oy + 0.5 * source.height);
	let end = Point::new(dest.left + ox, dest.top + oy + 0.5 * dest_height);
	let third = (end.x - start.x) / 3.0;

	LinkGeometry {
		points: [
			start,
			Point::new(start.x + third, start.y),
			Point::new(end.x - third, end.y),
			end,
		],
		anchors: [
			anchor_at(start, config.anchor_size),
			anchor_at(end, config.anchor_size),
		],
	}
}

fn anchor_at(center: Point, size: f64) -> Rect {
	Rect {
		left: center.x - size * 0.5,
		top: center.y - size * 0.5,
		width: size,
		height: size,
	}
}

/// Builds a path of cubic segments through `points` that is monotone in y
/// between each pair of points (no overshoot past the data).
///
/// Consecutive coincident points are dropped. Tangents at interior points use
/// the Steffen limiter; end tangents are one-sided.
pub fn monotone_x_path(points: &[Point]) -> String {
	let mut pts: Vec<Point> = Vec::with_capacity(points.len());
	for &p in points {
		if pts.last() != Some(&p) {
			pts.push(p);
		}
	}

	let mut d = String::new();
	let Some(first) = pts.first() else {
		return d;
	};
	let _ = write!(d, "M{},{}", first.x, first.y);

	match pts.len() {
		1 => return d,
		2 => {
			let _ = write!(d, "L{},{}", pts[1].x, pts[1].y);
			return d;
		}
		_ => {}
	}

	let n = pts.len();
	let mut tangents = vec![0.0; n];
	for i in 1..n - 1 {
		tangents[i] = interior_slope(pts[i - 1], pts[i], pts[i + 1]);
	}
	tangents[0] = end_slope(pts[0], pts[1], tangents[1]);
	tangents[n - 1] = end_slope(pts[n - 2], pts[n - 1], tangents[n - 2]);

	for i in 0..n - 1 {
		let (p0, p1) = (pts[i], pts[i + 1]);
		let dx = (p1.x - p0.x) / 3.0;
		let _ = write!(
			d,
			"C{},{},{},{},{},{}",
			p0.x + dx,
			p0.y + dx * tangents[i],
			p1.x - dx,
			p1.y - dx * tangents[i + 1],
			p1.x,
			p1.y
		);
	}
	d
}

fn signum(v: f64) -> f64 {
	if v < 0.0 { -1.0 } else { 1.0 }
}

// Zero-width intervals divide by a signed zero so the slope takes the
// direction of the neighbouring interval; NaN collapses to a flat tangent.
fn interior_slope(p0: Point, p1: Point, p2: Point) -> f64 {
	let (h0, h1) = (p1.x - p0.x, p2.x - p1.x);
	let signed_zero = |other: f64| if other < 0.0 { -0.0 } else { 0.0 };
	let s0 = (p1.y - p0.y) / if h0 != 0.0 { h0 } else { signed_zero(h1) };
	let s1 = (p2.y - p1.y) / if h1 != 0.0 { h1 } else { signed_zero(h0) };
	let p = (s0 * h1 + s1 * h0) / (h0 + h1);
	if s0.is_nan() || s1.is_nan() || p.is_nan() {
		return 0.0;
	}
	let slope = (signum(s0) + signum(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
	if slope.is_nan() { 0.0 } else { slope }
}

fn end_slope(p0: Point, p1: Point, t: f64) -> f64 {
	let h = p1.x - p0.x;
	if h != 0.0 {
		(3.0 * (p1.y - p0.y) / h - t) / 2.0
	} else {
		t
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn close(a: f64, b: f64) -> bool {
		(a - b).abs() < 1e-2
	}

	fn sample_rects() -> (Rect, Rect) {
		let source = Rect {
			left: 20.0,
			top: 50.0,
			width: 80.0,
			height: 20.0,
		};
		let dest = Rect {
			left: 300.0,
			top: 90.0,
			width: 80.0,
			height: 10.0,
		};
		(source, dest)
	}

	#[test]
	fn endpoints_follow_offsets_and_source_height() {
		let (source, dest) = sample_rects();
		let geo = link_geometry(&source, &dest, &SummaryConfig::default());

		assert_eq!(geo.start(), Point::new(0.0, 10.0));
		assert_eq!(geo.end(), Point::new(200.0, 50.0));

		let [_, a, b, _] = geo.points;
		assert!(close(a.x, 66.67) && a.y == 10.0);
		assert!(close(b.x, 133.33) && b.y == 50.0);
	}

	#[test]
	fn own_height_centers_on_destination() {
		let (source, dest) = sample_rects();
		let config = SummaryConfig {
			dest_center: EndpointCenter::OwnHeight,
			..Default::default()
		};
		let geo = link_geometry(&source, &dest, &config);
		assert_eq!(geo.end(), Point::new(200.0, 45.0));
	}

	#[test]
	fn anchors_are_centered_squares() {
		let (source, dest) = sample_rects();
		let geo = link_geometry(&source, &dest, &SummaryConfig::default());
		let [left, right] = geo.anchors;

		assert_eq!(
			left,
			Rect {
				left: -4.0,
				top: 6.0,
				width: 8.0,
				height: 8.0
			}
		);
		assert_eq!((right.left, right.top), (196.0, 46.0));
	}

	#[test]
	fn geometry_is_deterministic() {
		let (source, dest) = sample_rects();
		let config = SummaryConfig::default();
		let a = link_geometry(&source, &dest, &config);
		let b = link_geometry(&source, &dest, &config);
		assert_eq!(a, b);
		assert_eq!(a.path(), b.path());
	}

	#[test]
	fn path_starts_and_ends_on_endpoints() {
		let (source, dest) = sample_rects();
		let path = link_geometry(&source, &dest, &SummaryConfig::default()).path();
		assert!(path.starts_with("M0,10C"));
		assert!(path.ends_with(",200,50"));
		assert_eq!(path.matches('C').count(), 3);
	}

	#[test]
	fn flat_runs_keep_flat_tangents() {
		let pts = [
			Point::new(0.0, 10.0),
			Point::new(30.0, 10.0),
			Point::new(60.0, 50.0),
			Point::new(90.0, 50.0),
		];
		// Tangents at both interior points clamp to zero, so the first and last
		// segments stay horizontal.
		assert_eq!(
			monotone_x_path(&pts),
			"M0,10C10,10,20,10,30,10C40,10,50,50,60,50C70,50,80,50,90,50"
		);
	}

	#[test]
	fn monotone_path_does_not_overshoot() {
		let pts = [
			Point::new(0.0, 0.0),
			Point::new(10.0, 5.0),
			Point::new(20.0, 40.0),
			Point::new(30.0, 41.0),
		];
		let d = monotone_x_path(&pts);
		let ys: Vec<f64> = d
			.split(['M', 'C', ','])
			.filter(|s| !s.is_empty())
			.map(|s| s.parse::<f64>().unwrap())
			.skip(1)
			.step_by(2)
			.collect();
		assert!(ys.iter().all(|&y| (0.0..=41.0).contains(&y)), "{d}");
	}

	#[test]
	fn short_inputs_degrade_to_move_and_line() {
		assert_eq!(monotone_x_path(&[]), "");
		assert_eq!(monotone_x_path(&[Point::new(1.0, 2.0)]), "M1,2");
		assert_eq!(
			monotone_x_path(&[Point::new(0.0, 0.0), Point::new(4.0, 3.0)]),
			"M0,0L4,3"
		);
	}

	#[test]
	fn coincident_points_collapse() {
		// Source and destination touching: every control point lands on the
		// same x, and the duplicated start and end points are dropped.
		let source = Rect {
			left: 0.0,
			top: 50.0,
			width: 100.0,
			height: 20.0,
		};
		let dest = Rect {
			left: 100.0,
			top: 80.0,
			width: 100.0,
			height: 20.0,
		};
		let path = link_geometry(&source, &dest, &SummaryConfig::default()).path();
		assert_eq!(path, "M0,10L0,40");
	}
}
