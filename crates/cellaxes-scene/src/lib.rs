//! Scene-facing primitives for cellaxes-rs
//!
//! This crate holds the renderable output side of the pipeline:
//! - CGO-style drawing instructions and their flattened numeric stream
//! - The arrow primitive emitter (shaft cylinder + head cone)
//! - Text labels
//! - The narrow traits a host visualization system implements

pub mod arrow;
pub mod cgo;
pub mod host;
pub mod label;

pub use arrow::{build_arrow, ArrowColor, ArrowError, ArrowPrimitive, ArrowStyle};
pub use cgo::CgoOp;
pub use host::{Host, PlacementProvider, SceneSink, SymmetryProvider, SymmetryRecord};
pub use label::Label;
