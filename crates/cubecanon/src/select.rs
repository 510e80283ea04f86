//! Canonical member selection by iterative refinement.
//!
//! Model
//! - Start with the whole orbit at position 0.
//! - Try symbols 1, 2, … 6 at the current position; the first symbol that
//!   some candidate carries there filters the current set (a *refinement*).
//! - One survivor: done. Several: keep them, advance one position, restart
//!   at symbol 1.
//! - After position 53 every survivor spells the same sequence; the first
//!   one is returned.
//!
//! The result is the lexicographic minimum of the orbit. `lexicographic_min`
//! computes the same value directly and is interchangeable with
//! `select_canonical` for the final answer; only `select_canonical` records
//! the refinement trace.

use crate::face::Face;
use crate::state::{Candidate, COLORS, FACE_STICKERS, STICKERS};

/// Smallest symbol of the canonical alphabet.
pub const MIN_SYMBOL: u8 = 1;
/// Largest symbol of the canonical alphabet.
pub const MAX_SYMBOL: u8 = COLORS as u8;

/// One non-empty filtering pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Refinement {
    pub position: usize,
    pub symbol: u8,
    pub survivors: usize,
}

impl Refinement {
    /// Face and `(row, col)` of the refined sticker.
    pub fn sticker(&self) -> (Face, usize, usize) {
        let cell = self.position % FACE_STICKERS;
        (Face::ALL[self.position / FACE_STICKERS], cell / 3, cell % 3)
    }
}

/// The selected candidate and how the orbit was narrowed down to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub canonical: Candidate,
    pub refinements: Vec<Refinement>,
}

impl Selection {
    /// Survivor counts after each refinement, in order.
    pub fn survivor_counts(&self) -> Vec<usize> {
        self.refinements.iter().map(|r| r.survivors).collect()
    }
}

/// Select the canonical member of `orbit` by refinement.
///
/// Returns `None` for an empty orbit, or when no symbol in `1..=6` occurs at
/// the position being refined (the orbit is not over the canonical alphabet).
pub fn select_canonical(orbit: &[Candidate]) -> Option<Selection> {
    let mut current: Vec<&Candidate> = orbit.iter().collect();
    if current.is_empty() {
        return None;
    }
    let mut refinements = Vec::new();
    for position in 0..STICKERS {
        let mut counts = [0usize; MAX_SYMBOL as usize + 1];
        for c in &current {
            if let Some(n) = counts.get_mut(usize::from(c[position])) {
                *n += 1;
            }
        }
        let symbol = (MIN_SYMBOL..=MAX_SYMBOL).find(|&s| counts[usize::from(s)] > 0)?;
        current.retain(|c| c[position] == symbol);
        refinements.push(Refinement {
            position,
            symbol,
            survivors: current.len(),
        });
        if current.len() == 1 {
            break;
        }
    }
    Some(Selection {
        canonical: *current[0],
        refinements,
    })
}

/// Lexicographic minimum of `orbit` without a trace.
pub fn lexicographic_min(orbit: &[Candidate]) -> Option<Candidate> {
    orbit.iter().min().copied()
}
