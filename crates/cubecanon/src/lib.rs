//! Canonical forms of cube sticker layouts.
//!
//! A layout is 54 coloured stickers on 6 faces. Two layouts are equivalent
//! when one can be turned into the other by holding the whole cube
//! differently (24 spatial orientations) and renaming the colours (720
//! bijections). `canonicalize` maps every layout to one representative of
//! its equivalence class, so equal classes compare equal as plain digit
//! strings.
//!
//! Pipeline
//! - `symmetry::face_rotations` → 4 states, `symmetry::orientations` of each
//!   → 24 states.
//! - `recolor::recolorings` of each → 17,280 flattened candidates.
//! - `select::select_canonical` → the lexicographically smallest candidate.
//!
//! Adapters
//! - `layout`: net text in and out, and the alphabetical display palette.
//! - `scramble`: reproducible random layouts and symmetric variants.

pub mod canon;
pub mod cfg;
pub mod face;
pub mod layout;
pub mod recolor;
pub mod scramble;
pub mod select;
pub mod state;
pub mod symmetry;

#[cfg(test)]
mod fixtures;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use canon::{canonicalize, canonicalize_with, orbit, CanonicalForm, Canonicalization};
pub use cfg::{CanonCfg, Strategy};
pub use face::{Face, FaceMap, Grid};
pub use state::{Candidate, CubeError, CubeState};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::canon::{canonicalize, canonicalize_with, orbit, CanonicalForm};
    pub use crate::cfg::{CanonCfg, Strategy};
    pub use crate::face::{Face, FaceMap};
    pub use crate::layout::{parse_net, parse_nets, render_net, LayoutError, Net, Palette};
    pub use crate::scramble::{draw_layout, draw_symmetric_variant, ReplayToken};
    pub use crate::select::{Refinement, Selection};
    pub use crate::state::{Candidate, CubeError, CubeState};
}
