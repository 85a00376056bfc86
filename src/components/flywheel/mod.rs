//! Radial "flywheel" relationship diagram.
//!
//! Lays a small set of tools out on a circle, joins related tools with curves
//! bent toward the center, and highlights whatever relates to the hovered or
//! selected tool:
//! - Edge normalization from per-node `connects_to` lists (direction ignored)
//! - Deterministic circular layout, node 0 at 12 o'clock, clockwise
//! - Hover/selection state machine with selection taking precedence
//! - Single detail panel that mirrors the selection
//!
//! Everything except [`FlywheelCanvas`] and the renderer is plain data and
//! pure functions, usable without a browser.
//!
//! # Example
//!
//! ```ignore
//! use flywheel_graph::{Flywheel, FlywheelConfig, Point, SizeClass, ToolNode};
//!
//! let mut fw = Flywheel::new(
//!     vec![
//!         ToolNode::new("editor", "Editor", "ED", "sky").connects_to(["agent"]),
//!         ToolNode::new("agent", "Agent", "AG", "violet"),
//!     ],
//!     FlywheelConfig::default(),
//! )?;
//! fw.activate("agent");
//! let vm = fw.view_model(SizeClass::Full, Point::new(300.0, 300.0));
//! assert_eq!(vm.detail_target_id.as_deref(), Some("agent"));
//! ```

mod component;
mod config;
mod curve;
mod detail;
mod error;
mod graph;
mod highlight;
mod layout;
mod render;
pub mod scale;
mod state;
pub mod theme;
mod types;
mod view_model;

pub use component::FlywheelCanvas;
pub use config::{ConfigLoadError, FlywheelConfig};
pub use curve::{EdgeCurve, curve};
pub use detail::{DetailConnection, DetailPanel, DetailPresentation, DetailView};
pub use error::{Diagnostic, FlywheelError};
pub use graph::{EdgeSet, FlywheelGraph, build_edges};
pub use highlight::{HighlightResolver, NodeState};
pub use layout::{RadialLayout, position};
pub use scale::{Breakpoints, ScaleConfig, ScaledValues, SizeClass};
pub use state::{Flywheel, InteractionEvent, InteractionState};
pub use theme::Theme;
pub use types::{Edge, NodePosition, Point, ToolNode};
pub use view_model::{ViewModel, derive_view_model};
