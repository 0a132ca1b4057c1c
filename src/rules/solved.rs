//! Solved-state detection.

use crate::core::{CubeState, FaceGrid};

/// The cell every other cell of a face is compared against: the center for
/// odd sizes, the top-left corner for even sizes (which have no center).
#[must_use]
pub const fn reference_cell(size: usize) -> (usize, usize) {
    if size % 2 == 1 {
        (size / 2, size / 2)
    } else {
        (0, 0)
    }
}

/// True if every face shows a single color.
///
/// Stops at the first mismatching sticker. Faces are only compared with
/// themselves, so a solved cube seen in any whole-cube orientation counts.
#[must_use]
pub fn is_solved(state: &CubeState) -> bool {
    let (row, col) = reference_cell(state.size());
    state.faces().iter().all(|grid| is_uniform(grid, row, col))
}

fn is_uniform(grid: &FaceGrid, row: usize, col: usize) -> bool {
    let reference = grid.at(row, col);
    grid.iter().all(|c| c == reference)
}

impl CubeState {
    /// See [`is_solved`].
    #[must_use]
    pub fn is_solved(&self) -> bool {
        is_solved(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, Face};
    use crate::moves::{Amount, Move};

    #[test]
    fn test_reference_cell() {
        assert_eq!(reference_cell(3), (1, 1));
        assert_eq!(reference_cell(5), (2, 2));
        assert_eq!(reference_cell(2), (0, 0));
        assert_eq!(reference_cell(4), (0, 0));
    }

    #[test]
    fn test_new_cube_is_solved() {
        for size in 2..=6 {
            assert!(CubeState::new(size).unwrap().is_solved());
        }
    }

    #[test]
    fn test_single_sticker_breaks_solved() {
        for size in 2..=4 {
            let mut state = CubeState::new(size).unwrap();
            state.set(Face::Back, size - 1, size - 1, Color::White).unwrap();
            assert!(!state.is_solved());
        }
    }

    #[test]
    fn test_reference_cell_mismatch() {
        // Only the reference cell differs from the rest of its face.
        let mut state = CubeState::new(4).unwrap();
        state.set(Face::Up, 0, 0, Color::Red).unwrap();
        assert!(!state.is_solved());
    }

    #[test]
    fn test_every_single_move_unsolves() {
        for size in 2..=4 {
            for face in Face::ALL {
                for amount in Amount::ALL {
                    let mut state = CubeState::new(size).unwrap();
                    state.apply(Move::new(face, amount));
                    assert!(!state.is_solved(), "{size}: {face:?} {amount:?}");
                }
            }
        }
    }

    #[test]
    fn test_recolored_uniform_faces_count_as_solved() {
        // Uniform faces with colors swapped between faces still read as
        // solved; only uniformity is checked.
        let mut state = CubeState::new(2).unwrap();
        for row in 0..2 {
            for col in 0..2 {
                state.set(Face::Up, row, col, Color::Yellow).unwrap();
                state.set(Face::Down, row, col, Color::White).unwrap();
            }
        }
        assert!(state.is_solved());
    }
}
