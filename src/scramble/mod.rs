//! Random scrambles.
//!
//! A scramble is drawn one move at a time, uniformly over the six faces and
//! three amounts, except that a move never turns the same face as the move
//! before it (no `R R'`-style pairs that cancel or merge). Each move is
//! applied to the state as soon as it is drawn.
//!
//! Randomness comes only from the [`CubeRng`](crate::core::CubeRng) handed
//! in, so a fixed seed reproduces both the sequence and the resulting state.

pub mod scrambler;

pub use scrambler::{default_length, scramble, scramble_default};
