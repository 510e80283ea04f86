//! Orbit census for a few well-known layouts.
//!
//! Prints, per layout, the canonical form, how many of the 17,280 orbit
//! candidates are distinct (self-symmetry shrinks it), and how many
//! refinements the selector needed.
//!
//! Run: `cargo run -p cubecanon --example orbit_census`

use std::collections::HashSet;

use cubecanon::layout::parse_net;
use cubecanon::{canonicalize_with, orbit, CanonCfg, CubeState};

const CHECKERBOARD: &str = "\
W Y W
Y W Y
W Y W
O B O G R G B O B R G R
B O B R G R O B O G R G
O B O G R G B O B R G R
Y W Y
W Y W
Y W Y
";

fn main() {
    let checker = parse_net(CHECKERBOARD)
        .expect("checkerboard net is well-formed")
        .state;
    let cfg = CanonCfg::default();
    for (name, state) in [("solved", CubeState::solved()), ("checkerboard", checker)] {
        let out = canonicalize_with(&state, &cfg);
        let distinct: HashSet<_> = orbit(&state, &cfg).into_iter().collect();
        println!(
            "{name:>12}  {}  distinct={:>5}/{}  refinements={}",
            out.form,
            distinct.len(),
            out.orbit_size,
            out.refinements.len()
        );
    }
}
