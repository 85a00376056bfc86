//! Visual theming for the flywheel.
//!
//! Nodes carry an explicit color token; the theme maps tokens to colors and
//! defines how each [`NodeState`] is emphasized or dimmed.

use std::collections::HashMap;

use super::highlight::NodeState;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Parse `#RRGGBB`. Anything else yields `None`.
	pub fn from_hex(hex: &str) -> Option<Self> {
		let digits = hex.strip_prefix('#')?;
		if digits.len() != 6 || !digits.is_ascii() {
			return None;
		}
		let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
		Some(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Fallback colors for tokens the theme does not know.
#[derive(Clone, Debug)]
pub struct NodePalette {
	pub colors: Vec<Color>,
}

impl NodePalette {
	/// Muted, harmonious palette - slate blues and teals (default)
	pub fn slate() -> Self {
		Self {
			colors: vec![
				Color::rgb(94, 129, 172),  // Steel blue
				Color::rgb(129, 161, 193), // Light steel
				Color::rgb(100, 148, 160), // Teal gray
				Color::rgb(136, 160, 175), // Cadet blue
				Color::rgb(108, 142, 173), // Air force blue
				Color::rgb(119, 158, 165), // Desaturated cyan
				Color::rgb(143, 163, 180), // Cool gray
				Color::rgb(122, 153, 168), // Dusty blue
			],
		}
	}

	pub fn get(&self, index: usize) -> Color {
		if self.colors.is_empty() {
			return Color::rgb(128, 128, 128);
		}
		self.colors[index % self.colors.len()]
	}
}

/// Alpha and size multipliers for one node state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Emphasis {
	pub alpha: f64,
	pub radius_mult: f64,
	/// Draw a ring around the node.
	pub ring: bool,
}

/// Edge stroke styles.
#[derive(Clone, Debug)]
pub struct EdgeStyle {
	/// Resting edge color
	pub color: Color,
	/// Color of edges touching the active node
	pub highlight_color: Color,
	/// Color of edges unrelated to the active node
	pub dimmed_color: Color,
	pub line_width: f64,
	pub highlight_width: f64,
	/// Dash pattern (dash, gap) for dimmed edges; `None` draws them solid.
	pub dimmed_dash: Option<(f64, f64)>,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub name: &'static str,
	pub background: Color,
	pub label: Color,
	pub ring: Color,
	pub edge: EdgeStyle,
	pub tokens: HashMap<String, Color>,
	pub palette: NodePalette,
}

/// Token table shared by the built-in themes.
fn default_tokens() -> HashMap<String, Color> {
	[
		("sky", Color::rgb(56, 189, 248)),
		("blue", Color::rgb(59, 130, 246)),
		("indigo", Color::rgb(99, 102, 241)),
		("violet", Color::rgb(139, 92, 246)),
		("purple", Color::rgb(168, 85, 247)),
		("pink", Color::rgb(236, 72, 153)),
		("rose", Color::rgb(244, 63, 94)),
		("orange", Color::rgb(249, 115, 22)),
		("amber", Color::rgb(245, 158, 11)),
		("emerald", Color::rgb(16, 185, 129)),
		("teal", Color::rgb(20, 184, 166)),
		("slate", Color::rgb(100, 116, 139)),
	]
	.into_iter()
	.map(|(k, v)| (k.to_string(), v))
	.collect()
}

impl Theme {
	/// Dark theme (default)
	pub fn default_theme() -> Self {
		Self {
			name: "default",
			background: Color::rgb(22, 27, 34),
			label: Color::rgb(240, 244, 248),
			ring: Color::rgb(255, 255, 255),
			edge: EdgeStyle {
				color: Color::rgba(140, 160, 180, 0.45),
				highlight_color: Color::rgba(226, 232, 240, 0.95),
				dimmed_color: Color::rgba(140, 160, 180, 0.12),
				line_width: 1.5,
				highlight_width: 2.5,
				dimmed_dash: Some((4.0, 4.0)),
			},
			tokens: default_tokens(),
			palette: NodePalette::slate(),
		}
	}

	/// Light theme for pages with a white background
	pub fn light() -> Self {
		Self {
			name: "light",
			background: Color::rgb(248, 250, 252),
			label: Color::rgb(15, 23, 42),
			ring: Color::rgb(15, 23, 42),
			edge: EdgeStyle {
				color: Color::rgba(100, 116, 139, 0.45),
				highlight_color: Color::rgba(15, 23, 42, 0.9),
				dimmed_color: Color::rgba(100, 116, 139, 0.12),
				line_width: 1.5,
				highlight_width: 2.5,
				dimmed_dash: None,
			},
			tokens: default_tokens(),
			palette: NodePalette::slate(),
		}
	}

	/// Color for a node's token; unknown tokens fall back to the palette by node index.
	pub fn resolve(&self, token: &str, index: usize) -> Color {
		self.tokens
			.get(token)
			.copied()
			.or_else(|| Color::from_hex(token))
			.unwrap_or_else(|| self.palette.get(index))
	}

	pub fn emphasis(&self, state: NodeState) -> Emphasis {
		match state {
			NodeState::Neutral => Emphasis {
				alpha: 1.0,
				radius_mult: 1.0,
				ring: false,
			},
			NodeState::Active => Emphasis {
				alpha: 1.0,
				radius_mult: 1.15,
				ring: true,
			},
			NodeState::Connected => Emphasis {
				alpha: 1.0,
				radius_mult: 1.05,
				ring: false,
			},
			NodeState::Dimmed => Emphasis {
				alpha: 0.3,
				radius_mult: 0.9,
				ring: false,
			},
		}
	}

	pub fn edge_color(&self, highlighted: bool, any_active: bool) -> Color {
		if highlighted {
			self.edge.highlight_color
		} else if any_active {
			self.edge.dimmed_color
		} else {
			self.edge.color
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::default_theme()
	}
}
