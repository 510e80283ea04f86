//! Faces, 3×3 grids and face maps.
//!
//! - `Face`: the six slots in their fixed order (Front, Left, Right, Back,
//!   Top, Bottom). Every table in `symmetry` and the flattening in `state`
//!   are indexed by this order.
//! - `Grid`: one face's stickers as a `Matrix3<u8>`, addressed `(row, col)`.
//! - `FaceMap`: for each target slot, which source face moves in and how many
//!   counter-clockwise quarter turns it takes on the way.

use std::fmt;

use nalgebra::Matrix3;

use crate::state::CubeState;

/// One face's stickers, row-major as seen when facing that side.
pub type Grid = Matrix3<u8>;

/// The six face slots, in load-bearing order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    Front,
    Left,
    Right,
    Back,
    Top,
    Bottom,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Left,
        Face::Right,
        Face::Back,
        Face::Top,
        Face::Bottom,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-letter name (`U`/`D` for Top/Bottom, as in move notation).
    pub const fn letter(self) -> char {
        match self {
            Face::Front => 'F',
            Face::Left => 'L',
            Face::Right => 'R',
            Face::Back => 'B',
            Face::Top => 'U',
            Face::Bottom => 'D',
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Rotate a grid by `quarter_turns` counter-clockwise quarter turns.
///
/// One quarter turn maps `(i, j)` to `(j, 2 - i)` of the source, i.e. the top
/// row becomes the left column read bottom to top.
pub fn rot90(grid: &Grid, quarter_turns: u8) -> Grid {
    let mut out = *grid;
    for _ in 0..quarter_turns % 4 {
        let src = out;
        out = Grid::from_fn(|i, j| src[(j, 2 - i)]);
    }
    out
}

/// Where one target slot takes its grid from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    pub source: Face,
    /// Counter-clockwise quarter turns, always in `0..4`.
    pub turns: u8,
}

/// A whole-cube relabeling: a permutation of face slots plus per-slot turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FaceMap {
    slots: [Placement; 6],
}

impl FaceMap {
    pub const IDENTITY: FaceMap = FaceMap::new([
        (Face::Front, 0),
        (Face::Left, 0),
        (Face::Right, 0),
        (Face::Back, 0),
        (Face::Top, 0),
        (Face::Bottom, 0),
    ]);

    /// Build from `(source, quarter_turns)` per target slot, in `Face` order.
    pub const fn new(table: [(Face, u8); 6]) -> Self {
        let mut slots = [Placement {
            source: Face::Front,
            turns: 0,
        }; 6];
        let mut i = 0;
        while i < 6 {
            slots[i] = Placement {
                source: table[i].0,
                turns: table[i].1 % 4,
            };
            i += 1;
        }
        Self { slots }
    }

    #[inline]
    pub fn placement(&self, slot: Face) -> Placement {
        self.slots[slot.index()]
    }

    /// Apply to a state, producing a fresh state.
    pub fn apply(&self, state: &CubeState) -> CubeState {
        let faces = state.faces();
        CubeState::from_faces(std::array::from_fn(|slot| {
            let p = self.slots[slot];
            rot90(&faces[p.source.index()], p.turns)
        }))
    }

    /// `self` followed by `next`: `self.then(next).apply(s) == next.apply(&self.apply(s))`.
    pub fn then(&self, next: &FaceMap) -> FaceMap {
        let slots = std::array::from_fn(|slot| {
            let outer = next.slots[slot];
            let inner = self.slots[outer.source.index()];
            Placement {
                source: inner.source,
                turns: (inner.turns + outer.turns) % 4,
            }
        });
        FaceMap { slots }
    }

    /// Whether the map leaves every slot and grid where it is.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}
