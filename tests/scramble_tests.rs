//! Scrambler integration tests.

use cube_engine::core::{Color, CubeConfig, CubeRng, CubeState};
use cube_engine::scramble::{default_length, scramble, scramble_default};

// =============================================================================
// Reproducibility Tests
// =============================================================================

/// Same seed, same scramble, same resulting state.
#[test_log::test]
fn test_seed_reproduces_scramble() {
    let mut a = CubeState::new(3).unwrap();
    let mut b = CubeState::new(3).unwrap();

    let seq_a = scramble(&mut a, 30, &mut CubeRng::new(2024));
    let seq_b = scramble(&mut b, 30, &mut CubeRng::new(2024));

    assert_eq!(seq_a, seq_b);
    assert_eq!(a, b);
}

/// Replaying the returned sequence on a fresh cube gives the scrambled state.
#[test_log::test]
fn test_returned_sequence_matches_state() {
    for size in 2..=5 {
        let mut scrambled = CubeState::new(size).unwrap();
        let seq = scramble_default(&mut scrambled, &mut CubeRng::new(size as u64));

        let mut replayed = CubeState::new(size).unwrap();
        replayed.apply_sequence(&seq);
        assert_eq!(replayed, scrambled);
    }
}

/// An entropy-seeded RNG can be replayed from its recorded seed.
#[test_log::test]
fn test_entropy_seed_replays() {
    let mut rng = CubeRng::from_entropy();
    let seed = rng.seed();

    let mut a = CubeState::new(4).unwrap();
    let seq = scramble(&mut a, 20, &mut rng);

    let mut b = CubeState::new(4).unwrap();
    assert_eq!(scramble(&mut b, 20, &mut CubeRng::new(seed)), seq);
}

/// The config drives size, length and seed.
#[test_log::test]
fn test_scramble_from_config() {
    let config = CubeConfig::new(4).with_seed(11);
    let mut state = config.build().unwrap();

    let seq = scramble(&mut state, config.scramble_length(), &mut config.rng());

    assert_eq!(seq.len(), default_length(4));
    assert!(!state.is_solved());
}

// =============================================================================
// Shape Tests
// =============================================================================

/// No two consecutive moves turn the same face.
#[test]
fn test_no_consecutive_face() {
    for seed in 0..20 {
        let mut state = CubeState::new(3).unwrap();
        let seq = scramble(&mut state, 100, &mut CubeRng::new(seed));

        for pair in seq.as_slice().windows(2) {
            assert_ne!(pair[0].face, pair[1].face, "seed {seed}");
        }
    }
}

/// Scrambling preserves N² stickers of each color.
#[test]
fn test_color_counts_preserved() {
    for size in 2..=6 {
        let mut state = CubeState::new(size).unwrap();
        scramble_default(&mut state, &mut CubeRng::new(99));

        let counts = state.color_counts();
        for color in Color::ALL {
            assert_eq!(counts.get(&color).copied(), Some(size * size), "{color}");
        }
    }
}

/// A zero-length scramble is empty and leaves the cube alone.
#[test]
fn test_zero_length() {
    let mut state = CubeState::new(3).unwrap();
    let seq = scramble(&mut state, 0, &mut CubeRng::new(1));

    assert!(seq.is_empty());
    assert!(state.is_solved());
}

/// Scrambling continues from whatever state it is given.
#[test]
fn test_scramble_from_unsolved_state() {
    let mut state = CubeState::new(3).unwrap();
    state.apply_notation("R U").unwrap();
    let start = state.clone();

    let seq = scramble(&mut state, 10, &mut CubeRng::new(5));
    state.apply_sequence(&seq.inverse());

    assert_eq!(state, start);
}
