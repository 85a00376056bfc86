//! UI components.

pub mod flywheel;
