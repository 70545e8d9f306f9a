//! # cube-engine
//!
//! A 3x3x3 Rubik's Cube facelet model and face-turn move engine.
//!
//! ## Design Principles
//!
//! 1. **Pure Transformations**: Every operation takes a `CubeState` and
//!    returns a new one. States are small `Copy` values, so old states can be
//!    kept for undo or playback without any sharing.
//!
//! 2. **Table-Driven Moves**: A quarter turn is a fixed facelet permutation
//!    per face. Counter-clockwise turns run the same cycle backwards and half
//!    turns are two quarter turns, so the group laws hold by construction.
//!
//! 3. **Lenient by Default, Strict on Request**: `apply_move` ignores
//!    malformed tokens (with a `log` warning); `try_apply_move` reports them.
//!
//! ## Modules
//!
//! - `core`: Faces, colors, cube state, RNG, configuration, errors
//! - `moves`: Move notation and the move engine
//! - `scramble`: Random scramble generation
//! - `validation`: Checking user-entered colorings
//! - `solver`: Solution generator boundary and the canned placeholder
//! - `playback`: Stepping through move sequences
//!
//! ## Example
//!
//! ```
//! use cube_engine::{apply_moves, CubeState};
//!
//! let sexy = ["R", "U", "R'", "U'"];
//! let cube = (0..6).fold(CubeState::solved(), |cube, _| apply_moves(&cube, sexy));
//! assert_eq!(cube, CubeState::solved());
//! ```

pub mod core;
pub mod moves;
pub mod scramble;
pub mod validation;
pub mod solver;
pub mod playback;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Color, CubeError, CubeState, Direction, Face, FaceGrid, FaceMap, Facelet, MovePolicy, Neighbors,
    ScrambleConfig, ScrambleRng, NAVIGATION,
};

pub use crate::moves::{
    apply_move, apply_moves, apply_token, format_sequence, invert_sequence, parse_sequence,
    try_apply_move, try_apply_moves, MoveToken, Turn,
};

pub use crate::scramble::{generate_scramble, generate_scrambled_cube, scrambled_cube_with, Scramble};

pub use crate::validation::{validate_cube, ColorCounts, CubeValidation, ValidationIssue};

pub use crate::solver::{
    analyze_cube, generate_solution, CannedSolver, CubeAnalysis, PlannedMove, Solution, SolutionGenerator,
    SolutionStep,
};

pub use crate::playback::Playback;
