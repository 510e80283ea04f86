//! The canonicalization pipeline and its result type.
//!
//! `orbit` builds all 24 × 720 candidates of a state (rotations, then
//! orientations, then recolorings, in that order). `canonicalize_with` picks
//! the canonical member with the configured strategy.

use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;

use crate::cfg::{CanonCfg, Strategy};
use crate::recolor::{recolorings, RECOLORINGS};
use crate::select::{lexicographic_min, select_canonical, Refinement, MAX_SYMBOL, MIN_SYMBOL};
use crate::state::{Candidate, CubeError, CubeState, STICKERS};
use crate::symmetry::{spatial_orbit, SPATIAL_ORDER};

/// Candidates in the orbit of one state.
pub const ORBIT_SIZE: usize = SPATIAL_ORDER * RECOLORINGS;

/// Canonical representative: 54 symbols over `1..=6`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalForm(Candidate);

impl CanonicalForm {
    #[inline]
    pub fn symbols(&self) -> &Candidate {
        &self.0
    }

    /// The form as a fresh cube state (symbols become colour codes).
    pub fn to_state(&self) -> CubeState {
        CubeState::from_stickers(&self.0).expect("canonical forms carry 9 of each symbol")
    }

    /// Whether this form is its own canonical form.
    pub fn is_canonical(&self) -> bool {
        canonicalize(&self.to_state()) == *self
    }
}

impl fmt::Display for CanonicalForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &s in &self.0 {
            write!(f, "{s}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for CanonicalForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CanonicalForm({self})")
    }
}

/// Failure to read a digit string as a canonical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseFormError {
    Symbol { position: usize, found: char },
    Cube(CubeError),
    /// A valid layout that is not the minimum of its own orbit.
    NotCanonical { canonical: CanonicalForm },
}

impl fmt::Display for ParseFormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol { position, found } => write!(
                f,
                "symbol {found:?} at position {position} is outside {MIN_SYMBOL}..={MAX_SYMBOL}"
            ),
            Self::Cube(e) => write!(f, "not a cube layout: {e}"),
            Self::NotCanonical { canonical } => {
                write!(f, "layout is not canonical; its canonical form is {canonical}")
            }
        }
    }
}

impl std::error::Error for ParseFormError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Cube(e) => Some(e),
            Self::Symbol { .. } | Self::NotCanonical { .. } => None,
        }
    }
}

impl FromStr for CanonicalForm {
    type Err = ParseFormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut symbols = Vec::with_capacity(STICKERS);
        for (position, ch) in s.trim().chars().enumerate() {
            match ch.to_digit(10).map(|d| d as u8) {
                Some(d) if (MIN_SYMBOL..=MAX_SYMBOL).contains(&d) => symbols.push(d),
                _ => return Err(ParseFormError::Symbol { position, found: ch }),
            }
        }
        let state = CubeState::from_stickers(&symbols).map_err(ParseFormError::Cube)?;
        let canonical = canonicalize(&state);
        if canonical.0 != state.flatten() {
            return Err(ParseFormError::NotCanonical { canonical });
        }
        Ok(canonical)
    }
}

/// Outcome of one canonicalization.
#[derive(Clone, Debug)]
pub struct Canonicalization {
    pub form: CanonicalForm,
    pub orbit_size: usize,
    /// Empty for `Strategy::LexMin`.
    pub refinements: Vec<Refinement>,
}

/// All candidates of `state`: for each of the 24 spatial states, its 720
/// recolorings. Order does not depend on `cfg.parallel`.
pub fn orbit(state: &CubeState, cfg: &CanonCfg) -> Vec<Candidate> {
    let spatial = spatial_orbit(state);
    if cfg.parallel {
        spatial.par_iter().flat_map_iter(recolorings).collect()
    } else {
        spatial.iter().flat_map(recolorings).collect()
    }
}

/// Canonical form with the default configuration.
pub fn canonicalize(state: &CubeState) -> CanonicalForm {
    canonicalize_with(state, &CanonCfg::default()).form
}

/// Canonical form plus orbit size and the refinement trace.
pub fn canonicalize_with(state: &CubeState, cfg: &CanonCfg) -> Canonicalization {
    let orbit = orbit(state, cfg);
    let (canonical, refinements) = match cfg.strategy {
        Strategy::Refine => select_canonical(&orbit).map(|s| (s.canonical, s.refinements)),
        Strategy::LexMin => lexicographic_min(&orbit).map(|c| (c, Vec::new())),
    }
    .expect("orbit of a valid state is non-empty and over 1..=6");
    tracing::debug!(
        orbit = orbit.len(),
        refinements = refinements.len(),
        strategy = ?cfg.strategy,
        "canonicalized"
    );
    Canonicalization {
        form: CanonicalForm(canonical),
        orbit_size: orbit.len(),
        refinements,
    }
}
