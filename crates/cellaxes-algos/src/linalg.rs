//! 3×3 row-major matrix helpers
//!
//! Small homogeneous-transform utilities shared by the crystal and axis
//! modules. All matrices are row-major: `[r0c0, r0c1, r0c2, r1c0, ...]`.

use lin_alg::f64::{Mat4, Vec3};

/// Expand a 3×3 row-major matrix into a 4×4 homogeneous Mat4 (row-major data)
///
/// Top-left 3×3 from src, column 3 = 0, row 3 = [0,0,0,1].
pub fn mat3x3_to_mat4(m: &[f64; 9]) -> Mat4 {
    Mat4 {
        data: [
            m[0], m[1], m[2], 0.0, // row 0
            m[3], m[4], m[5], 0.0, // row 1
            m[6], m[7], m[8], 0.0, // row 2
            0.0, 0.0, 0.0, 1.0, // row 3
        ],
    }
}

/// Transform a Vec3 by a 3×3 row-major matrix
pub fn transform_3x3(m: &[f64; 9], v: Vec3) -> Vec3 {
    Vec3::new(
        m[0] * v.x + m[1] * v.y + m[2] * v.z,
        m[3] * v.x + m[4] * v.y + m[5] * v.z,
        m[6] * v.x + m[7] * v.y + m[8] * v.z,
    )
}

/// Invert a 3×3 row-major matrix using Cramer's rule
///
/// Returns `None` if the matrix is singular (determinant ≈ 0).
pub fn invert_3x3(m: &[f64; 9]) -> Option<[f64; 9]> {
    let a = m[0];
    let b = m[1];
    let c = m[2];
    let d = m[3];
    let e = m[4];
    let f = m[5];
    let g = m[6];
    let h = m[7];
    let i = m[8];

    let det = a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g);

    if det.abs() < 1e-30 {
        return None;
    }

    let inv_det = 1.0 / det;

    Some([
        (e * i - f * h) * inv_det,
        (c * h - b * i) * inv_det,
        (b * f - c * e) * inv_det,
        (f * g - d * i) * inv_det,
        (a * i - c * g) * inv_det,
        (c * d - a * f) * inv_det,
        (d * h - e * g) * inv_det,
        (b * g - a * h) * inv_det,
        (a * e - b * d) * inv_det,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mat3x3_to_mat4() {
        let m3 = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        let m4 = mat3x3_to_mat4(&m3);
        assert_eq!(m4.data[0], 1.0);
        assert_eq!(m4.data[3], 0.0); // col 3
        assert_eq!(m4.data[12], 0.0); // row 3
        assert_eq!(m4.data[15], 1.0); // [3][3]
    }

    #[test]
    fn test_transform_3x3_identity() {
        let id = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
        let v = Vec3::new(1.0, 2.0, 3.0);
        let result = transform_3x3(&id, v);
        assert!((result.x - 1.0).abs() < 1e-12);
        assert!((result.y - 2.0).abs() < 1e-12);
        assert!((result.z - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_invert_3x3_roundtrip() {
        // Scale matrix
        let m = [2.0, 0.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 4.0];
        let inv = invert_3x3(&m).unwrap();
        assert!((inv[0] - 0.5).abs() < 1e-12);
        assert!((inv[4] - 1.0 / 3.0).abs() < 1e-12);
        assert!((inv[8] - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_invert_3x3_singular() {
        let m = [1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 0.0, 0.0, 1.0];
        assert!(invert_3x3(&m).is_none());
    }
}
