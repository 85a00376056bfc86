//! Circular node placement.
//!
//! Node 0 sits at 12 o'clock and indices proceed clockwise in screen
//! coordinates (y grows downward).

use std::f64::consts::{FRAC_PI_2, TAU};
use std::num::NonZeroUsize;

use super::error::FlywheelError;
use super::types::{NodePosition, Point, ToolNode};

/// Point on the circle for `index` out of `total` evenly spaced slots.
pub fn position(index: usize, total: NonZeroUsize, radius: f64, center: Point) -> Point {
	let angle = (index as f64 / total.get() as f64) * TAU - FRAC_PI_2;
	Point::new(
		center.x + radius * angle.cos(),
		center.y + radius * angle.sin(),
	)
}

/// A fixed circle with a known slot count.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialLayout {
	pub total: NonZeroUsize,
	pub radius: f64,
	pub center: Point,
}

impl RadialLayout {
	/// Rejects a zero slot count.
	pub fn new(total: usize, radius: f64, center: Point) -> Result<Self, FlywheelError> {
		let total = NonZeroUsize::new(total).ok_or(FlywheelError::EmptyLayout)?;
		Ok(Self {
			total,
			radius,
			center,
		})
	}

	pub fn position(&self, index: usize) -> Point {
		position(index, self.total, self.radius, self.center)
	}

	/// Lay out `nodes` in order around the circle.
	pub fn positions(&self, nodes: &[ToolNode]) -> Vec<NodePosition> {
		nodes
			.iter()
			.enumerate()
			.map(|(i, node)| {
				let p = self.position(i);
				NodePosition {
					id: node.id.clone(),
					x: p.x,
					y: p.y,
				}
			})
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	const EPS: f64 = 1e-9;

	fn close(a: Point, b: Point) -> bool {
		(a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
	}

	fn nz(n: usize) -> NonZeroUsize {
		NonZeroUsize::new(n).unwrap()
	}

	#[test]
	fn quarter_steps_go_clockwise() {
		let c = Point::new(100.0, 100.0);
		assert!(close(position(0, nz(4), 10.0, c), Point::new(100.0, 90.0)));
		assert!(close(position(1, nz(4), 10.0, c), Point::new(110.0, 100.0)));
		assert!(close(position(2, nz(4), 10.0, c), Point::new(100.0, 110.0)));
		assert!(close(position(3, nz(4), 10.0, c), Point::new(90.0, 100.0)));
	}

	#[test]
	fn zero_total_is_a_configuration_error() {
		let err = RadialLayout::new(0, 10.0, Point::default()).unwrap_err();
		assert_eq!(err, FlywheelError::EmptyLayout);
	}

	#[test]
	fn positions_keep_ids_in_order() {
		let nodes = vec![
			ToolNode::new("a", "A", "A", "sky"),
			ToolNode::new("b", "B", "B", "sky"),
		];
		let layout = RadialLayout::new(nodes.len(), 50.0, Point::new(0.0, 0.0)).unwrap();
		let out = layout.positions(&nodes);
		assert_eq!(out[0].id, "a");
		assert!(close(out[0].point(), Point::new(0.0, -50.0)));
		assert!(close(out[1].point(), Point::new(0.0, 50.0)));
	}

	proptest! {
		#[test]
		fn index_zero_is_top_of_circle(
			total in 1usize..500,
			r in 0.0f64..1000.0,
			cx in -1000.0f64..1000.0,
			cy in -1000.0f64..1000.0,
		) {
			let p = position(0, nz(total), r, Point::new(cx, cy));
			prop_assert!((p.x - cx).abs() < 1e-6);
			prop_assert!((p.y - (cy - r)).abs() < 1e-6);
		}

		#[test]
		fn every_point_lies_on_the_circle(total in 1usize..64, index in 0usize..64, r in 1.0f64..500.0) {
			let c = Point::new(3.0, -7.0);
			let p = position(index, nz(total), r, c);
			prop_assert!((p.distance(c) - r).abs() < 1e-6);
		}
	}
}
