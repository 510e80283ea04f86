//! Random sticker layouts (replay tokens for reproducibility).
//!
//! Purpose
//! - Feed property tests, benches and the CLI `sample` command with
//!   well-formed layouts: 9 stickers of each of 6 colours, shuffled. Layouts
//!   are not restricted to positions reachable by turning a real cube.
//! - Produce symmetric variants of a state (random spatial map plus random
//!   colour bijection) whose canonical form equals the original's.
//!
//! Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::recolor::first_occurrence_order;
use crate::state::{CubeState, COLORS, FACE_STICKERS};
use crate::symmetry::{spatial_maps, SPATIAL_ORDER};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }

    /// Token for the next draw in the same stream.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

/// Shuffle 9 stickers of each colour code `1..=6` over the cube.
pub fn draw_layout(tok: ReplayToken) -> CubeState {
    let mut rng = tok.to_std_rng();
    let mut stickers: Vec<u8> = (1..=COLORS as u8)
        .flat_map(|c| std::iter::repeat(c).take(FACE_STICKERS))
        .collect();
    stickers.shuffle(&mut rng);
    CubeState::from_stickers(&stickers).expect("shuffling keeps 9 stickers per colour")
}

/// Hold `state` in a random orientation and rename its colours at random.
///
/// The returned state keeps the original colour codes (permuted among
/// themselves), so it canonicalizes to the same form.
pub fn draw_symmetric_variant(state: &CubeState, tok: ReplayToken) -> CubeState {
    let mut rng = tok.to_std_rng();
    let map = spatial_maps()[rng.gen_range(0..SPATIAL_ORDER)];
    let colors = first_occurrence_order(&state.flatten());
    let mut renamed = colors.clone();
    renamed.shuffle(&mut rng);
    let mut table = [0u8; 256];
    for (&from, &to) in colors.iter().zip(&renamed) {
        table[from as usize] = to;
    }
    map.apply(&state.map_colors(&table))
}
