//! Move engine integration tests.
//!
//! These tests verify the group laws of face turns on the facelet model:
//! quarter-turn periodicity, inverse cancellation, half-turn equivalence,
//! facelet conservation, and fixed centers.

use cube_engine::core::{Color, CubeState, Face, CENTER};
use cube_engine::moves::{
    apply_move, apply_moves, apply_quarter_turn, apply_token, invert_sequence, parse_sequence, try_apply_move,
    MoveToken, Turn,
};
use cube_engine::validation::{validate_cube, ColorCounts};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A fixed, well-mixed state so the laws are not only checked on a solved cube.
fn mixed_state() -> CubeState {
    apply_moves(
        &CubeState::solved(),
        "R U2 F' L D B2 R' U F2 D' L2 B U' R2 F".split_whitespace(),
    )
}

fn is_uniform(state: &CubeState, face: Face) -> bool {
    let grid = state.face(face);
    grid.iter().all(|&f| f == grid[0])
}

// =============================================================================
// Group Laws
// =============================================================================

/// Test that four quarter turns of any face, either direction, restore the state.
#[test]
fn test_quarter_turn_has_order_four() {
    let start = mixed_state();

    for face in Face::ALL {
        for clockwise in [true, false] {
            let mut cube = start;
            for i in 1..=4 {
                cube = apply_quarter_turn(&cube, face, clockwise);
                assert_eq!(cube == start, i == 4, "{face} clockwise={clockwise} after {i}");
            }
        }
    }
}

/// Test that every token followed by its inverse is the identity.
#[test]
fn test_inverse_cancellation() {
    let start = mixed_state();

    for token in MoveToken::all() {
        let there = apply_token(&start, token);
        let back = apply_token(&there, token.inverse());
        assert_eq!(back, start, "{token} then {}", token.inverse());
    }
}

/// Test that a half turn equals two clockwise quarter turns.
#[test]
fn test_double_turn_equivalence() {
    let start = mixed_state();

    for face in Face::ALL {
        let letter = face.letter().to_string();
        let double = apply_move(&start, &format!("{letter}2"));
        let twice = apply_move(&apply_move(&start, &letter), &letter);
        assert_eq!(double, twice, "{letter}2");

        // and two counter-clockwise quarters land in the same place
        let prime = format!("{letter}'");
        assert_eq!(double, apply_move(&apply_move(&start, &prime), &prime));
    }
}

/// Test that a counter-clockwise turn equals three clockwise turns.
#[test]
fn test_prime_equals_three_clockwise() {
    let start = mixed_state();

    for face in Face::ALL {
        let prime = apply_token(&start, MoveToken::new(face, Turn::CounterClockwise));
        let three = (0..3).fold(start, |cube, _| apply_quarter_turn(&cube, face, true));
        assert_eq!(prime, three, "{face}");
    }
}

/// Test that moves permute facelets without changing the color multiset.
#[test]
fn test_facelet_conservation() {
    let start = mixed_state();
    let before = ColorCounts::of(&start);

    for token in MoveToken::all() {
        assert_eq!(ColorCounts::of(&apply_token(&start, token)), before, "{token}");
    }
}

/// Test that partially filled cubes keep their empty facelets under moves.
#[test]
fn test_conservation_with_empty_facelets() {
    let start = CubeState::empty()
        .with_facelet(Face::Front, 0, Some(Color::White))
        .unwrap()
        .with_facelet(Face::Top, 8, Some(Color::Red))
        .unwrap();

    let cube = apply_moves(&start, "R U F' D2 L B'".split_whitespace());
    assert_eq!(cube.filled_count(), start.filled_count());
    assert_eq!(ColorCounts::of(&cube), ColorCounts::of(&start));
}

/// Test that no move alters any center facelet.
#[test]
fn test_center_invariance() {
    let start = mixed_state();

    for token in MoveToken::all() {
        let cube = apply_token(&start, token);
        for face in Face::ALL {
            assert_eq!(cube.facelet(face, CENTER), Some(Color::for_face(face)), "{token} on {face}");
        }
    }
}

/// Test that opposite faces commute (their turns touch disjoint facelets).
#[test]
fn test_opposite_faces_commute() {
    let start = mixed_state();

    for face in Face::ALL {
        let a = MoveToken::clockwise(face);
        let b = MoveToken::clockwise(face.opposite());
        let ab = apply_token(&apply_token(&start, a), b);
        let ba = apply_token(&apply_token(&start, b), a);
        assert_eq!(ab, ba, "{a} {b}");
    }
}

// =============================================================================
// Solved Cube
// =============================================================================

/// Test that a single quarter turn unsolves a solved cube.
///
/// The turned face and its opposite stay uniform; the four side faces each
/// pick up a foreign strip.
#[test]
fn test_single_turn_unsolves() {
    let solved = CubeState::solved();
    assert!(solved.is_solved());

    for face in Face::ALL {
        for clockwise in [true, false] {
            let cube = apply_quarter_turn(&solved, face, clockwise);
            assert!(!cube.is_solved(), "{face} clockwise={clockwise}");

            let broken: Vec<Face> = Face::ALL.into_iter().filter(|&f| !is_uniform(&cube, f)).collect();
            assert_eq!(broken.len(), 4, "{face} clockwise={clockwise}: {broken:?}");
            assert!(!broken.contains(&face));
            assert!(!broken.contains(&face.opposite()));
        }
    }
}

/// Test the golden sequence: (R U R' U') repeated six times is the identity.
#[test]
fn test_sexy_move_six_times_is_identity() {
    init_logging();
    let sexy = parse_sequence("R U R' U'").unwrap();

    let mut cube = CubeState::solved();
    for _ in 0..6 {
        cube = cube.apply_all(&sexy);
    }

    assert_eq!(cube, CubeState::solved());
}

/// Test that (R U) has order 105.
#[test]
fn test_r_u_order() {
    let ru = parse_sequence("R U").unwrap();
    let solved = CubeState::solved();

    let mut cube = solved.apply_all(&ru);
    let mut order = 1;
    while cube != solved {
        cube = cube.apply_all(&ru);
        order += 1;
        assert!(order <= 105, "R U order exceeded 105");
    }

    assert_eq!(order, 105);
}

/// Test the checkerboard pattern from half turns of every face.
#[test]
fn test_checkerboard_pattern() {
    let cube = apply_moves(&CubeState::solved(), "R2 L2 U2 D2 F2 B2".split_whitespace());

    for face in Face::ALL {
        let own = Some(Color::for_face(face));
        let other = Some(Color::for_face(face.opposite()));
        for i in 0..9 {
            let expected = if i % 2 == 0 { own } else { other };
            assert_eq!(cube.facelet(face, i), expected, "{face}[{i}]");
        }
    }
}

/// Test that applying a sequence then its inverse restores the start.
#[test]
fn test_sequence_inverse_restores() {
    let start = mixed_state();
    let alg = parse_sequence("F R U R' U' F' D2 B L'").unwrap();

    let cube = start.apply_all(&alg).apply_all(&invert_sequence(&alg));
    assert_eq!(cube, start);
}

// =============================================================================
// Malformed Input
// =============================================================================

/// Test that malformed tokens are a no-op on the lenient path.
#[test]
fn test_malformed_tokens_ignored() {
    init_logging();
    let start = mixed_state();

    for bad in ["X", "r", "R3", "R'2", "", "U''"] {
        assert_eq!(apply_move(&start, bad), start, "{bad:?}");
        assert!(try_apply_move(&start, bad).is_err(), "{bad:?}");
    }

    let mixed = apply_moves(&start, ["R", "nope", "R'"]);
    assert_eq!(mixed, start);
}

/// Test that moves keep a valid cube valid.
#[test]
fn test_moves_preserve_validity() {
    let cube = mixed_state();
    assert!(validate_cube(&cube).valid);
}
