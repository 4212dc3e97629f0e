//! Compiled Graphics Object (CGO) instructions
//!
//! Instruction-based descriptions of simple solids, flattened into the
//! numeric stream a host renderer consumes: shape tag, coordinates, radii
//! and color channels, repeated per instruction.

use lin_alg::f64::Vec3;

/// Stream tag for a capped cylinder
pub const CYLINDER_TAG: f64 = 9.0;
/// Stream tag for a (truncated) cone
pub const CONE_TAG: f64 = 27.0;

/// A single CGO drawing instruction
#[derive(Debug, Clone, PartialEq)]
pub enum CgoOp {
    /// Capped cylinder between two points, color interpolated end to end
    Cylinder {
        start: Vec3,
        end: Vec3,
        radius: f64,
        color1: [f32; 3],
        color2: [f32; 3],
    },
    /// Truncated cone between two points; radius2 = 0 gives a true cone
    Cone {
        start: Vec3,
        end: Vec3,
        radius1: f64,
        radius2: f64,
        color1: [f32; 3],
        color2: [f32; 3],
    },
}

impl CgoOp {
    /// Append this instruction's flattened form to a numeric stream
    pub fn append_to_stream(&self, out: &mut Vec<f64>) {
        match self {
            CgoOp::Cylinder {
                start,
                end,
                radius,
                color1,
                color2,
            } => {
                out.push(CYLINDER_TAG);
                push_vec3(out, *start);
                push_vec3(out, *end);
                out.push(*radius);
                push_color(out, *color1);
                push_color(out, *color2);
            }
            CgoOp::Cone {
                start,
                end,
                radius1,
                radius2,
                color1,
                color2,
            } => {
                out.push(CONE_TAG);
                push_vec3(out, *start);
                push_vec3(out, *end);
                out.push(*radius1);
                out.push(*radius2);
                push_color(out, *color1);
                push_color(out, *color2);
                // Cap flags: closed base, open tip
                out.push(1.0);
                out.push(0.0);
            }
        }
    }
}

fn push_vec3(out: &mut Vec<f64>, v: Vec3) {
    out.push(v.x);
    out.push(v.y);
    out.push(v.z);
}

fn push_color(out: &mut Vec<f64>, c: [f32; 3]) {
    out.push(c[0] as f64);
    out.push(c[1] as f64);
    out.push(c[2] as f64);
}
