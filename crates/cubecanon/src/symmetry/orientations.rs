//! Re-designating which physical face is the front.
//!
//! Side faces only trade places. Whenever Top or Bottom enters or leaves a
//! side slot, or the cube is spun about the vertical axis, the grids on the
//! Top/Bottom axis pick up quarter turns relative to the viewer.

use crate::face::{Face, FaceMap};
use crate::state::CubeState;

use crate::face::Face::{Back as B, Bottom as D, Front as F, Left as L, Right as R, Top as U};

/// Original front, then Left, Right, Back, Top and Bottom brought to the front.
pub const ORIENTATIONS: [FaceMap; 6] = [
    FaceMap::IDENTITY,
    FaceMap::new([(L, 0), (B, 0), (F, 0), (R, 0), (U, 1), (D, 3)]),
    FaceMap::new([(R, 0), (F, 0), (B, 0), (L, 0), (U, 3), (D, 1)]),
    FaceMap::new([(B, 0), (R, 0), (L, 0), (F, 0), (U, 2), (D, 2)]),
    FaceMap::new([(U, 0), (L, 3), (R, 1), (D, 2), (B, 2), (F, 0)]),
    FaceMap::new([(D, 0), (L, 1), (R, 3), (U, 2), (F, 0), (B, 2)]),
];

/// Index into [`ORIENTATIONS`] for the face that becomes the new front.
pub const fn orientation_index(new_front: Face) -> usize {
    new_front.index()
}

/// The input followed by the five states with another face in front.
pub fn orientations(state: &CubeState) -> [CubeState; 6] {
    ORIENTATIONS.map(|m| m.apply(state))
}
