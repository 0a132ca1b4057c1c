//! Rules of the puzzle that are not moves.
//!
//! The only such rule is the goal: every face a single color.

pub mod solved;

pub use solved::{is_solved, reference_cell};
