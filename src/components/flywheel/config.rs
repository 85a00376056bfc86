//! Layout parameters, deserializable from JSON with every field defaulted.

use serde::{Deserialize, Serialize};

use super::error::FlywheelError;
use super::scale::{Breakpoints, ScaleConfig};

/// Tunable geometry for one diagram, in authored (full-size) units.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlywheelConfig {
	/// Radius of the circle node centers sit on.
	pub radius: f64,
	/// How far edge control points are pulled toward the center, in `[0, 1]`.
	pub pull_factor: f64,
	/// Drawn node radius.
	pub node_radius: f64,
	/// Pointer hit radius around each node center.
	pub hit_radius: f64,
	/// Label font size in pixels.
	pub label_size: f64,
	pub scale: ScaleConfig,
	pub breakpoints: Breakpoints,
}

impl Default for FlywheelConfig {
	fn default() -> Self {
		Self {
			radius: 220.0,
			pull_factor: 0.35,
			node_radius: 26.0,
			hit_radius: 30.0,
			label_size: 12.0,
			scale: ScaleConfig::default(),
			breakpoints: Breakpoints::default(),
		}
	}
}

impl FlywheelConfig {
	/// Parse from JSON and validate.
	pub fn from_json(json: &str) -> Result<Self, ConfigLoadError> {
		let config: Self = serde_json::from_str(json)?;
		config.validate()?;
		Ok(config)
	}

	pub fn validate(&self) -> Result<(), FlywheelError> {
		for (field, value) in [
			("radius", self.radius),
			("nodeRadius", self.node_radius),
			("hitRadius", self.hit_radius),
			("labelSize", self.label_size),
		] {
			if !value.is_finite() || value <= 0.0 {
				return Err(FlywheelError::InvalidConfig {
					field,
					value,
					reason: "must be a positive number",
				});
			}
		}
		if !(0.0..=1.0).contains(&self.pull_factor) {
			return Err(FlywheelError::InvalidConfig {
				field: "pullFactor",
				value: self.pull_factor,
				reason: "must be within [0, 1]",
			});
		}
		self.scale.validate()
	}
}

/// Failure reading a config document.
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
	#[error("malformed config JSON: {0}")]
	Parse(#[from] serde_json::Error),
	#[error(transparent)]
	Invalid(#[from] FlywheelError),
}
