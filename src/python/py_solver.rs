//! Solution and playback bindings for Python.

use pyo3::prelude::*;

use crate::playback::Playback;
use crate::solver::{self, PlannedMove, Solution};

use super::py_cube::PyCubeState;

/// Python wrapper for Solution.
#[pyclass(name = "Solution", frozen)]
#[derive(Clone, Debug)]
pub struct PySolution(pub Solution);

#[pymethods]
impl PySolution {
    /// Steps as (name, description, moves) tuples.
    #[getter]
    fn steps(&self) -> Vec<(String, String, Vec<String>)> {
        self.0
            .steps
            .iter()
            .map(|s| {
                let moves = s.moves.iter().map(ToString::to_string).collect();
                (s.name.clone(), s.description.clone(), moves)
            })
            .collect()
    }

    /// Total number of moves.
    fn total_moves(&self) -> usize {
        self.0.total_moves()
    }

    fn __len__(&self) -> usize {
        self.0.steps.len()
    }

    fn __repr__(&self) -> String {
        format!("Solution(steps={}, moves={})", self.0.steps.len(), self.0.total_moves())
    }
}

fn planned_tuple(planned: &PlannedMove) -> (String, usize, usize, String) {
    (
        planned.token.to_string(),
        planned.step_index,
        planned.move_in_step,
        planned.description.clone(),
    )
}

/// Python wrapper for Playback.
#[pyclass(name = "Playback")]
#[derive(Clone, Debug)]
pub struct PyPlayback(pub Playback);

#[pymethods]
impl PyPlayback {
    /// Create a playback of `solution` starting from `initial`.
    #[new]
    fn new(initial: &PyCubeState, solution: &PySolution) -> Self {
        Self(Playback::from_solution(initial.0, &solution.0))
    }

    /// Apply the next move; returns (token, step_index, move_in_step, description).
    fn step_forward(&mut self) -> Option<(String, usize, usize, String)> {
        self.0.step_forward().map(planned_tuple)
    }

    /// Undo the last move; returns the undone move.
    fn step_back(&mut self) -> Option<(String, usize, usize, String)> {
        self.0.step_back().map(planned_tuple)
    }

    /// Return to the initial state.
    fn reset(&mut self) {
        self.0.reset();
    }

    /// Current cube state.
    #[getter]
    fn current(&self) -> PyCubeState {
        PyCubeState(*self.0.current())
    }

    #[getter]
    fn position(&self) -> usize {
        self.0.position()
    }

    #[getter]
    fn progress(&self) -> f64 {
        self.0.progress()
    }

    fn is_finished(&self) -> bool {
        self.0.is_finished()
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    fn __repr__(&self) -> String {
        format!("Playback(position={}, len={})", self.0.position(), self.0.len())
    }
}

/// Generate the canned solution for a cube state.
#[pyfunction]
pub fn generate_solution(state: &PyCubeState) -> PySolution {
    PySolution(solver::generate_solution(&state.0))
}
