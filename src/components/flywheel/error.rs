//! Error and diagnostic types.
//!
//! Configuration mistakes that make a diagram meaningless are fatal and
//! surface as [`FlywheelError`] at construction time. Bad references inside
//! otherwise usable content are collected as [`Diagnostic`]s and the diagram
//! renders with the valid subset.

use std::fmt;

/// Fatal configuration errors, rejected before any layout happens.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum FlywheelError {
	/// The node list was empty.
	#[error("flywheel needs at least one node")]
	EmptyGraph,
	/// A radial layout was requested for zero nodes.
	#[error("radial layout needs a node count greater than zero")]
	EmptyLayout,
	/// Two nodes share an id.
	#[error("duplicate node id `{0}`")]
	DuplicateNodeId(String),
	/// A numeric configuration value is out of range.
	#[error("invalid config value for `{field}`: {value} ({reason})")]
	InvalidConfig {
		field: &'static str,
		value: f64,
		reason: &'static str,
	},
}

/// Non-fatal data integrity issue found while normalizing edges.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
	/// `connectsTo` names an id that is not in the node set.
	UnknownReference { from: String, target: String },
	/// `connectsTo` names the declaring node itself.
	SelfReference { id: String },
}

impl fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Diagnostic::UnknownReference { from, target } => {
				write!(f, "node `{from}` connects to unknown node `{target}`")
			}
			Diagnostic::SelfReference { id } => write!(f, "node `{id}` connects to itself"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn messages_name_the_offending_value() {
		assert_eq!(
			FlywheelError::DuplicateNodeId("git".into()).to_string(),
			"duplicate node id `git`"
		);
		let diag = Diagnostic::UnknownReference {
			from: "a".into(),
			target: "zz".into(),
		};
		assert_eq!(diag.to_string(), "node `a` connects to unknown node `zz`");
	}
}
