//! Color system for cellaxes-rs
//!
//! Provides the RGB color type and the process-wide named color registry.
//! The registry is populated once at startup (standard palette plus the
//! per-axis colors) and read-only thereafter.

mod color;
mod error;
mod named;

pub use color::Color;
pub use error::ColorError;
pub use named::NamedColors;
