//! Solution generation boundary.
//!
//! Implementors of `SolutionGenerator` turn a cube state into a `Solution`
//! for playback. The bundled `CannedSolver` is a placeholder that emits a
//! fixed set of algorithms; it is not a real solver.
//!
//! ```
//! use cube_engine::core::CubeState;
//! use cube_engine::solver::{CannedSolver, SolutionGenerator};
//!
//! let solution = CannedSolver.generate(&CubeState::solved());
//! assert!(!solution.is_empty());
//! ```

pub mod analysis;
pub mod canned;
pub mod solution;

pub use analysis::{analyze_cube, CubeAnalysis};
pub use canned::{generate_solution, CannedSolver};
pub use solution::{PlannedMove, Solution, SolutionStep};

use crate::core::CubeState;

/// Produces a solution for a cube state.
///
/// Implementations must be deterministic: the same state always yields the
/// same solution.
pub trait SolutionGenerator {
    /// Generate a solution for `state`.
    fn generate(&self, state: &CubeState) -> Solution;
}
