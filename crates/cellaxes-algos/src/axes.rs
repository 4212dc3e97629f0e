//! Axis geometry composition
//!
//! Turns an orthogonalization basis plus an object placement into four
//! world-space points: the cell origin and the tips of the a, b and c
//! axes, each rescaled to a fixed display length.

use lin_alg::f64::Vec3;

use crate::crystal::OrthogonalizationMatrix;
use crate::placement::PlacementTransform;
use crate::CellError;

/// Threshold below which a mapped axis direction counts as degenerate
const AXIS_NORM_EPS: f64 = 1e-12;

/// World-space unit cell axis endpoints
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBundle {
    pub origin: Vec3,
    pub tip_a: Vec3,
    pub tip_b: Vec3,
    pub tip_c: Vec3,
}

impl AxisBundle {
    /// The three (label, tip) pairs in axis order
    pub fn tips(&self) -> [(char, Vec3); 3] {
        [('a', self.tip_a), ('b', self.tip_b), ('c', self.tip_c)]
    }

    /// Rigidly translate the whole bundle
    fn shifted(&self, delta: Vec3) -> Self {
        AxisBundle {
            origin: self.origin + delta,
            tip_a: self.tip_a + delta,
            tip_b: self.tip_b + delta,
            tip_c: self.tip_c + delta,
        }
    }
}

/// Compose the world-space axis bundle for a placed unit cell
///
/// Steps, in order:
/// 1. map the fractional basis vectors and the zero vector through `basis`;
/// 2. rescale each mapped direction to exactly `display_length`;
/// 3. apply the object placement (T2 + R·(p + T1)) to all four points;
/// 4. if `origin_override` is given, translate the bundle so its origin
///    lands on the override, preserving directions and lengths.
///
/// Deterministic for fixed inputs; no hidden state.
pub fn compose_axis_bundle(
    basis: &OrthogonalizationMatrix,
    placement: &PlacementTransform,
    display_length: f64,
    origin_override: Option<Vec3>,
) -> Result<AxisBundle, CellError> {
    let origin = basis.to_cartesian(Vec3::new(0.0, 0.0, 0.0));
    let raw = [
        ('a', basis.to_cartesian(Vec3::new(1.0, 0.0, 0.0))),
        ('b', basis.to_cartesian(Vec3::new(0.0, 1.0, 0.0))),
        ('c', basis.to_cartesian(Vec3::new(0.0, 0.0, 1.0))),
    ];

    let mut tips = [Vec3::new(0.0, 0.0, 0.0); 3];
    for (i, (axis, dir)) in raw.into_iter().enumerate() {
        let norm = dir.magnitude();
        if norm < AXIS_NORM_EPS {
            return Err(CellError::DegenerateAxis { axis });
        }
        tips[i] = origin + dir * (display_length / norm);
    }

    let bundle = AxisBundle {
        origin: placement.apply(origin),
        tip_a: placement.apply(tips[0]),
        tip_b: placement.apply(tips[1]),
        tip_c: placement.apply(tips[2]),
    };

    Ok(match origin_override {
        Some(target) => bundle.shifted(target - bundle.origin),
        None => bundle,
    })
}
