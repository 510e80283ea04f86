//! Quarter turns of the whole cube about the front–back axis.
//!
//! Seen from the front, the cube turns clockwise: Top moves to Right, Right
//! to Bottom, Bottom to Left, Left to Top. Back is seen from the other end of
//! the axis, so its grid turns the opposite way (one counter-clockwise quarter
//! per step) while every other grid turns clockwise (three counter-clockwise
//! quarters per step).

use crate::face::FaceMap;
use crate::state::CubeState;

use crate::face::Face::{Back as B, Bottom as D, Front as F, Left as L, Right as R, Top as U};

/// Rotation by 0, 1, 2 and 3 clockwise quarter turns, each relative to the
/// original state.
pub const QUARTER_TURNS: [FaceMap; 4] = [
    FaceMap::IDENTITY,
    FaceMap::new([(F, 3), (D, 3), (U, 3), (B, 1), (L, 3), (R, 3)]),
    FaceMap::new([(F, 2), (R, 2), (L, 2), (B, 2), (D, 2), (U, 2)]),
    FaceMap::new([(F, 1), (U, 1), (D, 1), (B, 3), (R, 1), (L, 1)]),
];

/// The input followed by its three quarter-turn rotations.
pub fn face_rotations(state: &CubeState) -> [CubeState; 4] {
    QUARTER_TURNS.map(|m| m.apply(state))
}
