//! Unit cell geometry for cellaxes-rs
//!
//! This crate provides the geometric pipeline behind unit cell axis drawing:
//! - Conversion of lattice parameters to an orthogonalization basis
//! - Object placement transforms (translate / rotate / translate)
//! - Composition of both into world-space axis endpoint bundles

pub mod axes;
pub mod crystal;
pub mod linalg;
pub mod placement;

pub use axes::{compose_axis_bundle, AxisBundle};
pub use crystal::{orthogonalization_matrix, LatticeParameters, OrthogonalizationMatrix};
pub use placement::PlacementTransform;

/// Errors from unit cell geometry
#[derive(Debug, thiserror::Error)]
pub enum CellError {
    /// The lattice parameters do not describe a physical cell
    #[error("invalid lattice: {0}")]
    InvalidLattice(String),

    /// A basis-mapped axis direction collapsed to (near) zero length
    #[error("degenerate '{axis}' axis: basis-mapped direction has near-zero length")]
    DegenerateAxis { axis: char },
}
