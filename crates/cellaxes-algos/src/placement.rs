//! Object placement transforms
//!
//! A placed object carries a 4×4 homogeneous matrix describing its
//! position and orientation in world space. The drawing pipeline applies
//! it in the host's decomposed form: world = T2 + R·(local + T1), i.e.
//! translate-before-rotate (T1), rotate (R), translate-after-rotate (T2).

use lin_alg::f64::{Mat4, Vec3};

/// A decomposed object placement transform
#[derive(Debug, Clone)]
pub struct PlacementTransform {
    /// Translation applied before rotation (T1)
    pub pre: Vec3,
    /// Rotation; only the top-left 3×3 block is used (R)
    pub rotation: Mat4,
    /// Translation applied after rotation (T2)
    pub post: Vec3,
}

impl PlacementTransform {
    /// The identity placement (no translation, no rotation)
    pub fn identity() -> Self {
        PlacementTransform {
            pre: Vec3::new(0.0, 0.0, 0.0),
            rotation: Mat4::new_identity(),
            post: Vec3::new(0.0, 0.0, 0.0),
        }
    }

    /// Reshape a host-supplied row-major 16-float object matrix
    ///
    /// T1 is the bottom row (first three entries), R the top-left 3×3
    /// block, T2 the last column (top three entries).
    pub fn from_object_matrix(m: &[f64; 16]) -> Self {
        let mut rotation = Mat4::new_identity();
        for row in 0..3 {
            for col in 0..3 {
                rotation.data[row * 4 + col] = m[row * 4 + col];
            }
        }
        PlacementTransform {
            pre: Vec3::new(m[12], m[13], m[14]),
            rotation,
            post: Vec3::new(m[3], m[7], m[11]),
        }
    }

    /// Apply the placement to a local-space point: T2 + R·(p + T1)
    pub fn apply(&self, p: Vec3) -> Vec3 {
        let shifted = p + self.pre;
        let r = &self.rotation.data;
        let rotated = Vec3::new(
            r[0] * shifted.x + r[1] * shifted.y + r[2] * shifted.z,
            r[4] * shifted.x + r[5] * shifted.y + r[6] * shifted.z,
            r[8] * shifted.x + r[9] * shifted.y + r[10] * shifted.z,
        );
        rotated + self.post
    }
}
