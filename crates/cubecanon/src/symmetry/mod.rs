//! Spatial symmetry: the 24 ways to hold a cube.
//!
//! Purpose
//! - `face_rotations`: 4 quarter turns about the front–back axis.
//! - `orientations`: 6 choices of front face.
//! - `spatial_orbit`: every orientation of every rotation (24 states).
//!
//! The tables are fixed constants of cube geometry. The 24 products
//! `QUARTER_TURNS[r].then(&ORIENTATIONS[o])` are pairwise distinct and closed
//! under composition (see tests).

mod orientations;
mod rotations;

pub use orientations::{orientation_index, orientations, ORIENTATIONS};
pub use rotations::{face_rotations, QUARTER_TURNS};

use crate::face::FaceMap;
use crate::state::CubeState;

/// Number of spatial orientations of a cube.
pub const SPATIAL_ORDER: usize = QUARTER_TURNS.len() * ORIENTATIONS.len();

/// The 24 spatial maps, rotation-major (`6 * r + o`).
pub fn spatial_maps() -> [FaceMap; SPATIAL_ORDER] {
    std::array::from_fn(|k| {
        let (r, o) = (k / ORIENTATIONS.len(), k % ORIENTATIONS.len());
        QUARTER_TURNS[r].then(&ORIENTATIONS[o])
    })
}

/// Rotations of the input, then every orientation of each rotation.
pub fn spatial_orbit(state: &CubeState) -> Vec<CubeState> {
    face_rotations(state)
        .iter()
        .flat_map(orientations)
        .collect()
}
