//! Quadratic edge curves bent toward the diagram center.

use serde::Serialize;

use super::types::Point;

/// Quadratic Bézier descriptor for one edge.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EdgeCurve {
	pub start: Point,
	pub control: Point,
	pub end: Point,
}

impl EdgeCurve {
	/// Evaluate the curve at `t` in `[0, 1]`.
	pub fn point_at(&self, t: f64) -> Point {
		let t = t.clamp(0.0, 1.0);
		let a = self.start.lerp(self.control, t);
		let b = self.control.lerp(self.end, t);
		a.lerp(b, t)
	}
}

/// Curve from `from` to `to` whose control point is pulled from the chord
/// midpoint toward `center` by `pull_factor`.
///
/// `0.0` gives a straight chord, `1.0` puts the control point on the center.
/// Values outside `[0, 1]` are clamped.
pub fn curve(from: Point, to: Point, center: Point, pull_factor: f64) -> EdgeCurve {
	let mid = from.midpoint(to);
	EdgeCurve {
		start: from,
		control: mid.lerp(center, pull_factor.clamp(0.0, 1.0)),
		end: to,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn arb_point() -> impl Strategy<Value = Point> {
		(-1000.0f64..1000.0, -1000.0f64..1000.0).prop_map(|(x, y)| Point::new(x, y))
	}

	#[test]
	fn half_pull_lands_between_midpoint_and_center() {
		let c = curve(
			Point::new(0.0, 0.0),
			Point::new(10.0, 0.0),
			Point::new(5.0, 10.0),
			0.5,
		);
		assert_eq!(c.control, Point::new(5.0, 5.0));
	}

	#[test]
	fn out_of_range_pull_is_clamped() {
		let (a, b, center) = (Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(1.0, 4.0));
		assert_eq!(curve(a, b, center, 3.0).control, center);
		assert_eq!(curve(a, b, center, -1.0).control, a.midpoint(b));
	}

	#[test]
	fn point_at_hits_endpoints() {
		let c = curve(Point::new(1.0, 2.0), Point::new(7.0, 9.0), Point::new(0.0, 0.0), 0.4);
		assert!(c.point_at(0.0).distance(c.start) < 1e-9);
		assert!(c.point_at(1.0).distance(c.end) < 1e-9);
	}

	proptest! {
		#[test]
		fn zero_pull_is_straight_chord(from in arb_point(), to in arb_point(), center in arb_point()) {
			prop_assert_eq!(curve(from, to, center, 0.0).control, from.midpoint(to));
		}

		#[test]
		fn full_pull_collapses_onto_center(from in arb_point(), to in arb_point(), center in arb_point()) {
			let c = curve(from, to, center, 1.0);
			prop_assert!((c.control.x - center.x).abs() < 1e-9);
			prop_assert!((c.control.y - center.y).abs() < 1e-9);
			prop_assert_eq!(c.start, from);
			prop_assert_eq!(c.end, to);
		}
	}
}
