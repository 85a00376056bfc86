//! Graph data structures for input to the flywheel component.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A tool in the flywheel diagram.
///
/// Authored once as static content and never mutated while a diagram is alive.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolNode {
	/// Unique identifier for this node. Used to reference nodes in `connects_to`.
	pub id: String,
	/// Full display name, shown in the detail panel.
	pub name: String,
	/// Compact label drawn inside or beside the node.
	pub short_label: String,
	/// Theme color token (e.g. "sky", "violet"). Resolved by [`Theme`](super::Theme).
	pub color_token: String,
	/// Ids of tools this one works with. May be asymmetric.
	#[serde(default)]
	pub connects_to: Vec<String>,
	/// Free-text notes about a relationship, keyed by partner id.
	#[serde(default)]
	pub connection_notes: HashMap<String, String>,
	/// Optional longer description for the detail panel.
	#[serde(default)]
	pub description: Option<String>,
}

impl ToolNode {
	/// Convenience constructor for a node with no notes or description.
	pub fn new(
		id: impl Into<String>,
		name: impl Into<String>,
		short_label: impl Into<String>,
		color_token: impl Into<String>,
	) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			short_label: short_label.into(),
			color_token: color_token.into(),
			..Self::default()
		}
	}

	/// Builder-style setter for the declared connections.
	pub fn connects_to<I, S>(mut self, ids: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.connects_to = ids.into_iter().map(Into::into).collect();
		self
	}

	/// Builder-style setter for a single relationship note.
	pub fn with_note(mut self, partner: impl Into<String>, note: impl Into<String>) -> Self {
		self.connection_notes.insert(partner.into(), note.into());
		self
	}
}

/// An undirected relationship between two node ids.
///
/// `a` is the node whose declaration was recorded first, `b` its target.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
	pub a: String,
	pub b: String,
}

impl Edge {
	pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
		Self {
			a: a.into(),
			b: b.into(),
		}
	}

	/// Order-independent key: the two ids sorted lexically.
	pub fn key(&self) -> (String, String) {
		pair_key(&self.a, &self.b)
	}

	/// Whether `id` is one of the two endpoints.
	pub fn touches(&self, id: &str) -> bool {
		self.a == id || self.b == id
	}

	/// The endpoint opposite `id`, if `id` is an endpoint.
	pub fn other(&self, id: &str) -> Option<&str> {
		if self.a == id {
			Some(&self.b)
		} else if self.b == id {
			Some(&self.a)
		} else {
			None
		}
	}
}

/// Canonical (sorted) key for an unordered id pair.
pub(crate) fn pair_key(a: &str, b: &str) -> (String, String) {
	if a <= b {
		(a.to_string(), b.to_string())
	} else {
		(b.to_string(), a.to_string())
	}
}

/// A 2D point in layout space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn midpoint(self, other: Point) -> Point {
		Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
	}

	/// Linear interpolation towards `other` (`t = 0` is `self`, `t = 1` is `other`).
	pub fn lerp(self, other: Point, t: f64) -> Point {
		Point::new(
			self.x + (other.x - self.x) * t,
			self.y + (other.y - self.y) * t,
		)
	}

	pub fn distance(self, other: Point) -> f64 {
		let (dx, dy) = (other.x - self.x, other.y - self.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// Laid-out location of one node.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NodePosition {
	pub id: String,
	pub x: f64,
	pub y: f64,
}

impl NodePosition {
	pub fn point(&self) -> Point {
		Point::new(self.x, self.y)
	}
}
