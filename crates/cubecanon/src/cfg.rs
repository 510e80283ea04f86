//! Canonicalization configuration.
//!
//! Defaults reproduce the reference behaviour: refinement selection, with the
//! per-orientation recolorings generated on the rayon pool. Neither switch
//! changes the canonical value.

/// How the canonical member is picked from the orbit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Position-by-position refinement with a recorded trace.
    #[default]
    Refine,
    /// Direct lexicographic minimum; no trace.
    LexMin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanonCfg {
    /// Generate the 24 × 720 orbit in parallel.
    pub parallel: bool,
    pub strategy: Strategy,
}

impl Default for CanonCfg {
    fn default() -> Self {
        Self {
            parallel: true,
            strategy: Strategy::Refine,
        }
    }
}

impl CanonCfg {
    /// Single-threaded configuration with the given strategy.
    pub fn sequential(strategy: Strategy) -> Self {
        Self {
            parallel: false,
            strategy,
        }
    }
}
