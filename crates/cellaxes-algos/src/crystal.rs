//! Crystallographic unit cell math
//!
//! Converts the six lattice parameters (a, b, c, α, β, γ) into the 3×3
//! orthogonalization matrix mapping fractional lattice coordinates to
//! Cartesian coordinates, using the standard triclinic cell volume formula.

use lin_alg::f64::{Mat4, Vec3};

use crate::linalg::{invert_3x3, mat3x3_to_mat4, transform_3x3};
use crate::CellError;

/// Threshold below which sin(γ) is treated as zero (degenerate cell)
const SIN_GAMMA_EPS: f64 = 1e-9;

/// The six scalars defining a crystallographic unit cell
///
/// Edge lengths in Angstroms, angles in degrees. Immutable per invocation;
/// sourced from an object's stored symmetry record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeParameters {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl LatticeParameters {
    pub fn new(lengths: [f64; 3], angles: [f64; 3]) -> Self {
        LatticeParameters {
            a: lengths[0],
            b: lengths[1],
            c: lengths[2],
            alpha: angles[0],
            beta: angles[1],
            gamma: angles[2],
        }
    }

    /// Check lengths are positive and angles lie in (0, 180) degrees
    fn validate(&self) -> Result<(), CellError> {
        for (name, len) in [("a", self.a), ("b", self.b), ("c", self.c)] {
            if !(len > 0.0) || !len.is_finite() {
                return Err(CellError::InvalidLattice(format!(
                    "cell length {} must be positive, got {}",
                    name, len
                )));
            }
        }
        for (name, angle) in [
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("gamma", self.gamma),
        ] {
            if !(angle > 0.0 && angle < 180.0) || !angle.is_finite() {
                return Err(CellError::InvalidLattice(format!(
                    "cell angle {} must lie in (0, 180) degrees, got {}",
                    name, angle
                )));
            }
        }
        Ok(())
    }
}

/// 3×3 linear map from fractional (lattice-relative) to Cartesian coordinates
///
/// Row-major storage. Built from [`LatticeParameters`] via
/// [`orthogonalization_matrix`]; never contains NaN or infinities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthogonalizationMatrix {
    data: [f64; 9],
}

impl OrthogonalizationMatrix {
    /// Get the row-major 3×3 data
    pub fn data(&self) -> &[f64; 9] {
        &self.data
    }

    /// Transform fractional coordinates to Cartesian
    pub fn to_cartesian(&self, v: Vec3) -> Vec3 {
        transform_3x3(&self.data, v)
    }

    /// Invert the matrix (Cartesian back to fractional)
    ///
    /// The matrix is upper triangular with a strictly positive diagonal,
    /// so the inverse always exists for a successfully built matrix.
    pub fn inverse(&self) -> Option<[f64; 9]> {
        invert_3x3(&self.data)
    }

    /// Expand to a 4×4 homogeneous matrix
    pub fn to_mat4(&self) -> Mat4 {
        mat3x3_to_mat4(&self.data)
    }
}

/// Build the orthogonalization matrix from lattice parameters
///
/// Computes the triclinic cell volume
/// `V = a·b·c·sqrt(1 − cos²α − cos²β − cos²γ + 2·cosα·cosβ·cosγ)`
/// and constructs
///
/// ```text
/// O = [ a   b·cosγ   c·cosβ                    ]
///     [ 0   b·sinγ   c·(cosα − cosβ·cosγ)/sinγ ]
///     [ 0   0        V/(a·b·sinγ)              ]
/// ```
///
/// Fails with [`CellError::InvalidLattice`] when the volume radicand is
/// negative (non-physical angle combination) or sin(γ) is numerically zero.
pub fn orthogonalization_matrix(
    params: &LatticeParameters,
) -> Result<OrthogonalizationMatrix, CellError> {
    params.validate()?;

    let alpha = params.alpha.to_radians();
    let beta = params.beta.to_radians();
    let gamma = params.gamma.to_radians();

    let ca = alpha.cos();
    let cb = beta.cos();
    let cg = gamma.cos();
    let sg = gamma.sin();

    if sg.abs() < SIN_GAMMA_EPS {
        return Err(CellError::InvalidLattice(format!(
            "sin(gamma) is numerically zero (gamma = {} degrees)",
            params.gamma
        )));
    }

    let radicand = 1.0 - ca * ca - cb * cb - cg * cg + 2.0 * ca * cb * cg;
    if radicand < 0.0 {
        return Err(CellError::InvalidLattice(format!(
            "volume radicand is negative ({:.6}) for angles alpha={}, beta={}, gamma={}",
            radicand, params.alpha, params.beta, params.gamma
        )));
    }

    let volume = params.a * params.b * params.c * radicand.sqrt();

    Ok(OrthogonalizationMatrix {
        data: [
            params.a,
            params.b * cg,
            params.c * cb,
            0.0,
            params.b * sg,
            params.c * (ca - cb * cg) / sg,
            0.0,
            0.0,
            volume / (params.a * params.b * sg),
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cubic(edge: f64) -> LatticeParameters {
        LatticeParameters::new([edge, edge, edge], [90.0, 90.0, 90.0])
    }

    #[test]
    fn test_orthorhombic_reduces_to_diagonal() {
        let params = LatticeParameters::new([10.0, 20.0, 30.0], [90.0, 90.0, 90.0]);
        let o = orthogonalization_matrix(&params).unwrap();
        let expected = [10.0, 0.0, 0.0, 0.0, 20.0, 0.0, 0.0, 0.0, 30.0];
        for (got, want) in o.data().iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-9, "{} vs {}", got, want);
        }
    }

    #[test]
    fn test_positive_diagonal_no_nan() {
        // A spread of valid cells, including a triclinic one
        let cells = [
            cubic(5.0),
            LatticeParameters::new([10.0, 20.0, 30.0], [90.0, 100.0, 90.0]),
            LatticeParameters::new([7.1, 8.3, 9.5], [80.0, 95.0, 105.0]),
            LatticeParameters::new([1.0, 1.0, 1.0], [60.0, 60.0, 60.0]),
        ];
        for params in cells {
            let o = orthogonalization_matrix(&params).unwrap();
            let d = o.data();
            assert!(d.iter().all(|x| x.is_finite()));
            assert!(d[0] > 0.0 && d[4] > 0.0 && d[8] > 0.0);
        }
    }

    #[test]
    fn test_roundtrip_through_inverse() {
        let params = LatticeParameters::new([7.1, 8.3, 9.5], [80.0, 95.0, 105.0]);
        let o = orthogonalization_matrix(&params).unwrap();
        let inv = o.inverse().unwrap();

        // O⁻¹ · (O · e_i) must recover the fractional basis
        let basis = [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        ];
        for e in basis {
            let mapped = o.to_cartesian(e);
            let back = transform_3x3(&inv, mapped);
            assert!((back.x - e.x).abs() < 1e-9);
            assert!((back.y - e.y).abs() < 1e-9);
            assert!((back.z - e.z).abs() < 1e-9);
        }
    }

    #[test]
    fn test_gamma_zero_rejected() {
        let params = LatticeParameters::new([10.0, 10.0, 10.0], [90.0, 90.0, 0.0]);
        let err = orthogonalization_matrix(&params).unwrap_err();
        assert!(matches!(err, CellError::InvalidLattice(_)));
    }

    #[test]
    fn test_gamma_180_rejected() {
        let params = LatticeParameters::new([10.0, 10.0, 10.0], [90.0, 90.0, 180.0]);
        assert!(orthogonalization_matrix(&params).is_err());
    }

    #[test]
    fn test_negative_radicand_rejected() {
        // alpha + beta + gamma too close to 360 makes the cell non-physical
        let params = LatticeParameters::new([10.0, 10.0, 10.0], [150.0, 150.0, 150.0]);
        let err = orthogonalization_matrix(&params).unwrap_err();
        match err {
            CellError::InvalidLattice(msg) => assert!(msg.contains("radicand")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_nonpositive_length_rejected() {
        let params = LatticeParameters::new([0.0, 10.0, 10.0], [90.0, 90.0, 90.0]);
        let err = orthogonalization_matrix(&params).unwrap_err();
        match err {
            CellError::InvalidLattice(msg) => assert!(msg.contains('a')),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
