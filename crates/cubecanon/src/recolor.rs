//! Colour relabelings with first-occurrence binding.
//!
//! Model
//! - Scan a flattened state once; the k-th distinct colour seen gets rank k.
//! - For each of the 720 permutations `p` of `[1..=6]` (lexicographic order),
//!   emit the candidate where every sticker of rank k becomes `p[k]`.
//!
//! Ranks depend only on where colours first appear, never on the colour codes
//! themselves, so two states that differ by a consistent renaming produce the
//! exact same 720 candidates.

use std::sync::OnceLock;

use itertools::Itertools;

use crate::state::{Candidate, CubeState, COLORS};

/// Number of colour relabelings (6!).
pub const RECOLORINGS: usize = 720;

/// All permutations of `[1, 2, 3, 4, 5, 6]` in lexicographic order.
pub fn color_permutations() -> &'static [[u8; COLORS]] {
    static PERMUTATIONS: OnceLock<Vec<[u8; COLORS]>> = OnceLock::new();
    PERMUTATIONS.get_or_init(|| {
        (1..=COLORS as u8)
            .permutations(COLORS)
            .map(|p| std::array::from_fn(|i| p[i]))
            .collect()
    })
}

/// Distinct colours in order of first appearance.
pub fn first_occurrence_order(stickers: &[u8]) -> Vec<u8> {
    let mut seen = [false; 256];
    let mut order = Vec::with_capacity(COLORS);
    for &c in stickers {
        if !seen[c as usize] {
            seen[c as usize] = true;
            order.push(c);
        }
    }
    order
}

/// Replace each sticker by the rank of its colour in [`first_occurrence_order`].
pub fn first_occurrence_ranks(stickers: &Candidate) -> Candidate {
    let mut rank_of = [u8::MAX; 256];
    let mut next = 0u8;
    (*stickers).map(|c| {
        let slot = &mut rank_of[c as usize];
        if *slot == u8::MAX {
            *slot = next;
            next += 1;
        }
        *slot
    })
}

/// Bind rank k to `permutation[k]`.
///
/// Ranks must be `< COLORS`, which holds for any valid `CubeState`.
#[inline]
pub fn recolor(ranks: &Candidate, permutation: &[u8; COLORS]) -> Candidate {
    (*ranks).map(|r| permutation[r as usize])
}

/// The 720 recolorings of a state, in permutation order.
pub fn recolorings(state: &CubeState) -> Vec<Candidate> {
    let ranks = first_occurrence_ranks(&state.flatten());
    color_permutations()
        .iter()
        .map(|p| recolor(&ranks, p))
        .collect()
}

/// Recolor with the identity permutation: the first colour seen becomes 1,
/// the second 2, and so on.
pub fn normalize(stickers: &Candidate) -> Candidate {
    let ranks = first_occurrence_ranks(stickers);
    ranks.map(|r| r + 1)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::fixtures;

    #[test]
    fn permutations_are_lexicographic() {
        let perms = color_permutations();
        assert_eq!(perms.len(), RECOLORINGS);
        assert_eq!(perms[0], [1, 2, 3, 4, 5, 6]);
        assert_eq!(perms[1], [1, 2, 3, 4, 6, 5]);
        assert_eq!(perms[RECOLORINGS - 1], [6, 5, 4, 3, 2, 1]);
        assert!(perms.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn recolorings_are_720_distinct() {
        let s = fixtures::state(fixtures::SCRAMBLED);
        let all = recolorings(&s);
        assert_eq!(all.len(), RECOLORINGS);
        let distinct: HashSet<Candidate> = all.iter().copied().collect();
        assert_eq!(distinct.len(), RECOLORINGS);
        assert!(all.iter().flatten().all(|&v| (1..=6).contains(&v)));
    }

    #[test]
    fn first_recoloring_is_normalized_input() {
        let s = fixtures::state(fixtures::SCRAMBLED);
        let flat = s.flatten();
        assert_eq!(recolorings(&s)[0], normalize(&flat));
        // "YWGORB..." binds Y→1, W→2, G→3, O→4, R→5 and B→6.
        assert_eq!(&normalize(&flat)[..8], &[1, 2, 3, 4, 5, 1, 4, 6]);
        assert_eq!(first_occurrence_order(&flat), b"YWGORB".to_vec());
    }

    #[test]
    fn consistent_renaming_gives_identical_recolorings() {
        let a = fixtures::state(fixtures::SCRAMBLED);
        let b = fixtures::state(fixtures::SCRAMBLED_SWAPPED);
        assert_ne!(a, b);
        assert_eq!(recolorings(&a), recolorings(&b));
    }

    #[test]
    fn solved_cube_recoloring_follows_permutation() {
        let all = recolorings(&CubeState::solved());
        let p = color_permutations()[100];
        let expected: Vec<u8> = p.iter().flat_map(|&c| [c; 9]).collect();
        assert_eq!(all[100].to_vec(), expected);
    }
}
