//! Move notation: single outer-layer turns and sequences of them.
//!
//! Grammar for one move: `^[UDLRFB]('|2)?$`. A bare face letter is a
//! clockwise quarter turn, `'` is counter-clockwise, `2` is a half turn.
//! Sequences are whitespace-separated moves.
//!
//! ```
//! use cube_engine::moves::{Amount, Move, MoveSequence};
//! use cube_engine::core::Face;
//!
//! let mv: Move = "R'".parse().unwrap();
//! assert_eq!(mv, Move::new(Face::Right, Amount::CounterClockwise));
//!
//! let seq = MoveSequence::parse("R U R' U'").unwrap();
//! assert_eq!(seq.len(), 4);
//! assert_eq!(seq.inverse().to_string(), "U R U' R'");
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use crate::core::{CubeError, Face, Result};

/// How far a face turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Amount {
    /// 90° clockwise, no suffix.
    Clockwise,
    /// 90° counter-clockwise, `'` suffix.
    CounterClockwise,
    /// 180°, `2` suffix.
    Half,
}

impl Amount {
    pub const ALL: [Amount; 3] = [Amount::Clockwise, Amount::CounterClockwise, Amount::Half];

    /// Number of clockwise quarter turns this amount equals (1, 3 or 2).
    #[must_use]
    pub const fn quarter_turns(self) -> usize {
        match self {
            Amount::Clockwise => 1,
            Amount::Half => 2,
            Amount::CounterClockwise => 3,
        }
    }

    /// The amount that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Amount::Clockwise => Amount::CounterClockwise,
            Amount::CounterClockwise => Amount::Clockwise,
            Amount::Half => Amount::Half,
        }
    }

    /// Notation suffix.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Amount::Clockwise => "",
            Amount::CounterClockwise => "'",
            Amount::Half => "2",
        }
    }
}

/// One outer-layer turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub face: Face,
    pub amount: Amount,
}

impl Move {
    #[must_use]
    pub const fn new(face: Face, amount: Amount) -> Self {
        Self { face, amount }
    }

    /// Parse a single move token such as `R`, `U'` or `F2`.
    pub fn parse(token: &str) -> Result<Self> {
        let invalid = || CubeError::InvalidMoveToken(token.to_string());

        let mut chars = token.chars();
        let face = chars.next().and_then(Face::from_letter).ok_or_else(invalid)?;
        let amount = match chars.next() {
            None => Amount::Clockwise,
            Some('\'') => Amount::CounterClockwise,
            Some('2') => Amount::Half,
            Some(_) => return Err(invalid()),
        };
        if chars.next().is_some() {
            return Err(invalid());
        }

        Ok(Self { face, amount })
    }

    /// The move that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self {
            face: self.face,
            amount: self.amount.inverse(),
        }
    }

    /// Cost in the quarter-turn metric.
    #[must_use]
    pub const fn qtm(self) -> usize {
        match self.amount {
            Amount::Half => 2,
            _ => 1,
        }
    }
}

impl FromStr for Move {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.face.letter(), self.amount.suffix())
    }
}

/// An ordered list of moves, e.g. a scramble or a solver reply.
///
/// Inline storage covers typical scramble and solution lengths without
/// touching the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveSequence {
    moves: SmallVec<[Move; 32]>,
}

impl MoveSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse whitespace-separated moves.
    ///
    /// All-or-nothing: the first bad token fails the whole parse.
    pub fn parse(text: &str) -> Result<Self> {
        text.split_whitespace().map(Move::parse).collect()
    }

    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        self.moves.iter().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// The sequence that undoes this one: reversed, each move inverted.
    #[must_use]
    pub fn inverse(&self) -> Self {
        self.moves.iter().rev().map(|m| m.inverse()).collect()
    }

    /// Total cost in the quarter-turn metric.
    #[must_use]
    pub fn qtm(&self) -> usize {
        self.moves.iter().map(|m| m.qtm()).sum()
    }
}

impl FromIterator<Move> for MoveSequence {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self {
            moves: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MoveSequence {
    type Item = Move;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Move>>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter().copied()
    }
}

impl FromStr for MoveSequence {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, mv) in self.moves.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{mv}")?;
        }
        Ok(())
    }
}
