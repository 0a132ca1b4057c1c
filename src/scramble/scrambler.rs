//! Scramble generation.

use log::debug;

use crate::core::{CubeRng, CubeState, Face};
use crate::moves::{Amount, Move, MoveSequence};

/// Scramble length used when none is configured: `2·N² + 5`.
#[must_use]
pub const fn default_length(size: usize) -> usize {
    2 * size * size + 5
}

/// Draw `length` random moves, applying each to `state`, and return them.
///
/// No move turns the same face as the move before it.
pub fn scramble(state: &mut CubeState, length: usize, rng: &mut CubeRng) -> MoveSequence {
    let mut seq = MoveSequence::new();
    let mut last: Option<Face> = None;

    while seq.len() < length {
        let face = Face::ALL[rng.gen_range_usize(0..Face::ALL.len())];
        if last == Some(face) {
            continue;
        }
        let amount = Amount::ALL[rng.gen_range_usize(0..Amount::ALL.len())];
        let mv = Move::new(face, amount);

        state.apply(mv);
        seq.push(mv);
        last = Some(face);
    }

    debug!(
        "Scrambled {n}x{n}x{n} cube (seed {seed}) with {len} moves: {seq}",
        n = state.size(),
        seed = rng.seed(),
        len = seq.len(),
    );
    seq
}

/// Scramble with [`default_length`] for the state's size.
pub fn scramble_default(state: &mut CubeState, rng: &mut CubeRng) -> MoveSequence {
    let length = default_length(state.size());
    scramble(state, length, rng)
}
