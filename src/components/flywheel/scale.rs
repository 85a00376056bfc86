//! Size-class dependent scaling for the diagram.
//!
//! The diagram never measures the viewport itself. The caller hands in a
//! [`SizeClass`] and gets back one uniform multiplier that is applied to every
//! length in the layout (circle radius, node radius, hit radius, label size),
//! so angles and proportions are preserved at every size.
//!
//! # Size classes
//!
//! - [`SizeClass::Compact`]: phones and narrow panes.
//! - [`SizeClass::Medium`]: tablets and split views.
//! - [`SizeClass::Full`]: desktop, the authored size.

use serde::{Deserialize, Serialize};

use super::config::FlywheelConfig;
use super::error::FlywheelError;

/// Coarse viewport classification supplied by the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SizeClass {
	Compact,
	Medium,
	#[default]
	Full,
}

impl SizeClass {
	/// Compact layouts show the detail panel as an overlay.
	pub fn is_compact(self) -> bool {
		self == SizeClass::Compact
	}
}

/// Uniform multiplier per size class.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScaleConfig {
	pub compact: f64,
	pub medium: f64,
	pub full: f64,
}

impl Default for ScaleConfig {
	fn default() -> Self {
		Self {
			compact: 0.6,
			medium: 0.8,
			full: 1.0,
		}
	}
}

impl ScaleConfig {
	/// Multiplier for `size_class`.
	pub fn scale_for(&self, size_class: SizeClass) -> f64 {
		match size_class {
			SizeClass::Compact => self.compact,
			SizeClass::Medium => self.medium,
			SizeClass::Full => self.full,
		}
	}

	pub fn validate(&self) -> Result<(), FlywheelError> {
		for (field, value) in [
			("scale.compact", self.compact),
			("scale.medium", self.medium),
			("scale.full", self.full),
		] {
			if !value.is_finite() || value <= 0.0 {
				return Err(FlywheelError::InvalidConfig {
					field,
					value,
					reason: "must be a positive number",
				});
			}
		}
		Ok(())
	}
}

/// Width thresholds (CSS pixels) used by the canvas wrapper to pick a [`SizeClass`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Breakpoints {
	/// Widths below this are compact.
	pub compact: f64,
	/// Widths below this (and not compact) are medium.
	pub medium: f64,
}

impl Default for Breakpoints {
	fn default() -> Self {
		Self {
			compact: 640.0,
			medium: 1024.0,
		}
	}
}

impl Breakpoints {
	pub fn classify(&self, width: f64) -> SizeClass {
		if width < self.compact {
			SizeClass::Compact
		} else if width < self.medium {
			SizeClass::Medium
		} else {
			SizeClass::Full
		}
	}
}

/// Pre-computed lengths for one size class.
///
/// Create this once per frame and pass it to the layout and renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaledValues {
	/// Multiplier that produced these values.
	pub k: f64,
	/// Layout circle radius.
	pub radius: f64,
	/// Drawn node radius.
	pub node_radius: f64,
	/// Pointer hit radius around each node center.
	pub hit_radius: f64,
	/// Label font string (e.g., "12px sans-serif").
	pub label_font: String,
}

impl ScaledValues {
	pub fn new(config: &FlywheelConfig, size_class: SizeClass) -> Self {
		let k = config.scale.scale_for(size_class);
		Self {
			k,
			radius: config.radius * k,
			node_radius: config.node_radius * k,
			hit_radius: config.hit_radius * k,
			label_font: format!("{}px sans-serif", (config.label_size * k).round()),
		}
	}
}
