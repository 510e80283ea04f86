//! Cube states and their flattening.
//!
//! Invariants
//! - 6 grids in `Face` order.
//! - Exactly 6 distinct colour codes, 9 stickers each. Checked once in
//!   `CubeState::from_stickers`; face maps only move stickers around, so
//!   derived states keep the invariant without re-checking.

use std::fmt;

use crate::face::{Face, Grid};

/// Stickers on the whole cube.
pub const STICKERS: usize = 54;
/// Stickers on one face.
pub const FACE_STICKERS: usize = 9;
/// Distinct colours on a well-formed cube.
pub const COLORS: usize = 6;

/// Row-major concatenation of the 6 grids in `Face` order.
pub type Candidate = [u8; STICKERS];

/// Precondition violations for raw sticker input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    StickerCount { found: usize },
    ColorCount { found: usize },
    ColorFrequency { color: u8, count: usize },
}

impl fmt::Display for CubeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StickerCount { found } => {
                write!(f, "expected {STICKERS} stickers, found {found}")
            }
            Self::ColorCount { found } => {
                write!(f, "expected {COLORS} distinct colours, found {found}")
            }
            Self::ColorFrequency { color, count } => write!(
                f,
                "colour {color} occurs {count} times, expected {FACE_STICKERS}"
            ),
        }
    }
}

impl std::error::Error for CubeError {}

/// One sticker configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CubeState {
    faces: [Grid; 6],
}

impl CubeState {
    /// Validate and build from 54 colour codes (Face order, row-major per face).
    pub fn from_stickers(stickers: &[u8]) -> Result<Self, CubeError> {
        if stickers.len() != STICKERS {
            return Err(CubeError::StickerCount {
                found: stickers.len(),
            });
        }
        let mut counts = [0usize; 256];
        for &s in stickers {
            counts[s as usize] += 1;
        }
        let mut present: Vec<(u8, usize)> = Vec::with_capacity(COLORS);
        for (color, &count) in counts.iter().enumerate() {
            if count > 0 {
                present.push((color as u8, count));
            }
        }
        if present.len() != COLORS {
            return Err(CubeError::ColorCount {
                found: present.len(),
            });
        }
        for &(color, count) in &present {
            if count != FACE_STICKERS {
                return Err(CubeError::ColorFrequency { color, count });
            }
        }
        let faces = std::array::from_fn(|f| {
            let start = f * FACE_STICKERS;
            Grid::from_row_slice(&stickers[start..start + FACE_STICKERS])
        });
        Ok(Self { faces })
    }

    /// Solved cube: face `k` (in `Face` order) uniformly coloured `k + 1`.
    pub fn solved() -> Self {
        Self {
            faces: std::array::from_fn(|f| Grid::repeat(f as u8 + 1)),
        }
    }

    /// Unchecked constructor for states derived from a valid state.
    pub(crate) fn from_faces(faces: [Grid; 6]) -> Self {
        Self { faces }
    }

    #[inline]
    pub fn faces(&self) -> &[Grid; 6] {
        &self.faces
    }

    #[inline]
    pub fn face(&self, face: Face) -> &Grid {
        &self.faces[face.index()]
    }

    /// Row-major concatenation in `Face` order.
    pub fn flatten(&self) -> Candidate {
        let mut out = [0u8; STICKERS];
        for (f, grid) in self.faces.iter().enumerate() {
            for r in 0..3 {
                for c in 0..3 {
                    out[f * FACE_STICKERS + r * 3 + c] = grid[(r, c)];
                }
            }
        }
        out
    }

    /// Rename colours through `map` (indexed by colour code).
    ///
    /// `map` must be injective on the colours present; the caller guarantees it.
    pub(crate) fn map_colors(&self, map: &[u8; 256]) -> Self {
        Self {
            faces: self.faces.map(|g| g.map(|c| map[c as usize])),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solved_codes() -> Vec<u8> {
        (1..=6u8).flat_map(|c| std::iter::repeat(c).take(9)).collect()
    }

    #[test]
    fn from_stickers_round_trips_through_flatten() {
        let mut stickers = solved_codes();
        stickers.swap(0, 53);
        stickers.swap(10, 40);
        let state = CubeState::from_stickers(&stickers).unwrap();
        assert_eq!(state.flatten().to_vec(), stickers);
        assert_eq!(state.face(Face::Front)[(0, 0)], 6);
        assert_eq!(state.face(Face::Bottom)[(2, 2)], 1);
    }

    #[test]
    fn solved_matches_face_order() {
        let state = CubeState::solved();
        assert_eq!(state.flatten().to_vec(), solved_codes());
        assert_eq!(state.face(Face::Back)[(1, 1)], 4);
    }

    #[test]
    fn rejects_wrong_sticker_count() {
        let err = CubeState::from_stickers(&[1; 53]).unwrap_err();
        assert_eq!(err, CubeError::StickerCount { found: 53 });
    }

    #[test]
    fn rejects_wrong_color_count() {
        let mut stickers = solved_codes();
        for s in stickers.iter_mut().filter(|s| **s == 6) {
            *s = 5;
        }
        let err = CubeState::from_stickers(&stickers).unwrap_err();
        assert_eq!(err, CubeError::ColorCount { found: 5 });
    }

    #[test]
    fn rejects_uneven_colors() {
        let mut stickers = solved_codes();
        stickers[0] = 2;
        let err = CubeState::from_stickers(&stickers).unwrap_err();
        assert_eq!(err, CubeError::ColorFrequency { color: 1, count: 8 });
        assert!(err.to_string().contains("8 times"));
    }
}
