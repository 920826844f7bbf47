//! Render sinks
//!
//! The rule engine only hands out `Snapshot`s; these turn them into output.
//! Both sinks skip frames whose scene did not change since the last draw.

pub mod json;
pub mod text;

pub use json::JsonRenderer;
pub use text::TextRenderer;
