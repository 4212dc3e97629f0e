//! Arrow primitive emitter
//!
//! Converts a pair of world-space endpoints plus styling into the
//! two-segment arrow glyph: a capped shaft cylinder from the origin to a
//! head junction, and a cone from the junction to the tip.

use lin_alg::f64::Vec3;
use thiserror::Error;

use cellaxes_color::Color;

use crate::cgo::CgoOp;

/// Threshold below which an arrow counts as zero-length
const ARROW_LENGTH_EPS: f64 = 1e-12;

/// Errors from arrow construction
#[derive(Debug, Error)]
pub enum ArrowError {
    /// Origin and tip coincide
    #[error("zero-length arrow: origin and tip coincide at ({x}, {y}, {z})")]
    ZeroLength { x: f64, y: f64, z: f64 },

    /// A style parameter is out of range
    #[error("invalid arrow style: {0}")]
    InvalidStyle(String),
}

/// Styling for axis arrows, with the drawing defaults
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowStyle {
    /// Display length of each axis, in world units
    pub display_length: f64,
    /// Shaft radius as a fraction of arrow length
    pub aspect_ratio: f64,
    /// Fraction of the arrow length taken by the head, in (0, 1]
    pub head_fraction: f64,
}

impl Default for ArrowStyle {
    fn default() -> Self {
        ArrowStyle {
            display_length: 10.0,
            aspect_ratio: 0.03,
            head_fraction: 0.1,
        }
    }
}

impl ArrowStyle {
    fn validate(&self) -> Result<(), ArrowError> {
        if !(self.display_length > 0.0) {
            return Err(ArrowError::InvalidStyle(format!(
                "display length must be positive, got {}",
                self.display_length
            )));
        }
        if !(self.aspect_ratio > 0.0) {
            return Err(ArrowError::InvalidStyle(format!(
                "aspect ratio must be positive, got {}",
                self.aspect_ratio
            )));
        }
        if !(self.head_fraction > 0.0 && self.head_fraction <= 1.0) {
            return Err(ArrowError::InvalidStyle(format!(
                "head fraction must lie in (0, 1], got {}",
                self.head_fraction
            )));
        }
        Ok(())
    }
}

/// Arrow coloring: one color for the whole glyph, or one per endpoint
///
/// The paired variant covers the legacy two-color arrow mode without a
/// separate emitter: the shaft interpolates from the origin color to the
/// tip color, and the head takes the tip color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArrowColor {
    Single(Color),
    Paired(Color, Color),
}

impl ArrowColor {
    fn endpoints(&self) -> ([f32; 3], [f32; 3]) {
        match self {
            ArrowColor::Single(c) => (c.to_array(), c.to_array()),
            ArrowColor::Paired(c1, c2) => (c1.to_array(), c2.to_array()),
        }
    }
}

/// A renderable arrow: exactly one shaft cylinder followed by one head cone
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowPrimitive {
    ops: Vec<CgoOp>,
}

impl ArrowPrimitive {
    /// The drawing instructions, shaft first
    pub fn ops(&self) -> &[CgoOp] {
        &self.ops
    }

    /// Flatten into the numeric stream handed to the renderer
    pub fn to_stream(&self) -> Vec<f64> {
        let mut stream = Vec::with_capacity(32);
        for op in &self.ops {
            op.append_to_stream(&mut stream);
        }
        stream
    }
}

/// Build an arrow glyph between two world-space points
///
/// The head junction sits a fraction `head_fraction` of the way from the
/// tip toward the origin, so the head scales with arrow length rather
/// than being a fixed size. Shaft radius is `aspect_ratio · L`, the cone
/// base radius `0.5 · head_fraction · L`, and the cone tip radius zero.
pub fn build_arrow(
    origin: Vec3,
    tip: Vec3,
    style: &ArrowStyle,
    color: ArrowColor,
) -> Result<ArrowPrimitive, ArrowError> {
    style.validate()?;

    let length = (tip - origin).magnitude();
    if length < ARROW_LENGTH_EPS {
        return Err(ArrowError::ZeroLength {
            x: origin.x,
            y: origin.y,
            z: origin.z,
        });
    }

    let f = style.head_fraction;
    let junction = origin * f + tip * (1.0 - f);
    let shaft_radius = style.aspect_ratio * length;
    let head_radius = 0.5 * f * length;
    let (color1, color2) = color.endpoints();

    Ok(ArrowPrimitive {
        ops: vec![
            CgoOp::Cylinder {
                start: origin,
                end: junction,
                radius: shaft_radius,
                color1,
                color2,
            },
            CgoOp::Cone {
                start: junction,
                end: tip,
                radius1: head_radius,
                radius2: 0.0,
                color1: color2,
                color2,
            },
        ],
    })
}
