//! Host-facing interfaces
//!
//! The drawing pipeline never talks to a concrete visualization system.
//! Instead it consumes symmetry records and object matrices through these
//! narrow traits and hands its output back through [`SceneSink`]; any host
//! integration implements them.

use crate::label::Label;

/// A stored crystallographic symmetry record
#[derive(Debug, Clone, PartialEq)]
pub struct SymmetryRecord {
    /// Cell edge lengths (a, b, c) in Angstroms
    pub cell_lengths: [f64; 3],
    /// Cell angles (alpha, beta, gamma) in degrees
    pub cell_angles: [f64; 3],
    /// Space group label (e.g. "P 21 21 21")
    pub space_group: String,
}

/// Access to an object's stored symmetry metadata
pub trait SymmetryProvider {
    /// Get the symmetry record for a named object, if it has one
    fn symmetry(&self, object: &str) -> Option<SymmetryRecord>;
}

/// Access to an object's placement in the world frame
pub trait PlacementProvider {
    /// Get the row-major 4×4 object matrix for a named object
    fn object_matrix(&self, object: &str) -> Option<[f64; 16]>;
}

/// Output side: where finished primitives and labels go
pub trait SceneSink {
    /// Hand a flattened CGO stream to the renderer under a name
    fn draw_primitives(&mut self, name: &str, stream: &[f64]);

    /// Place a text label in the scene
    fn place_label(&mut self, label: Label);
}

/// The full host contract the command layer depends on
pub trait Host: SymmetryProvider + PlacementProvider + SceneSink {}

impl<T: SymmetryProvider + PlacementProvider + SceneSink> Host for T {}
