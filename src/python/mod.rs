//! Python bindings for the cube engine.
//!
//! Lets a Python UI drive the engine: build states, apply moves, validate
//! user input, and step through solutions.
//!
//! # Quick Start
//!
//! ```python
//! import cube_engine as ce
//!
//! cube = ce.CubeState.solved()
//! for token in ["R", "U", "R'", "U'"]:
//!     cube = cube.apply_move(token)
//!
//! scrambled = ce.generate_scrambled_cube()
//! assert scrambled.validate().valid
//!
//! playback = ce.Playback(scrambled, ce.generate_solution(scrambled))
//! while (move := playback.step_forward()) is not None:
//!     print(move)
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::CubeError;

mod py_cube;
mod py_solver;

pub use py_cube::*;
pub use py_solver::*;

impl From<CubeError> for PyErr {
    fn from(err: CubeError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// cube_engine: a 3x3x3 Rubik's Cube move engine.
#[pymodule]
fn cube_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCubeState>()?;
    m.add_class::<PyMoveToken>()?;
    m.add_class::<PyCubeValidation>()?;
    m.add_class::<PySolution>()?;
    m.add_class::<PyPlayback>()?;

    m.add_function(wrap_pyfunction!(navigate, m)?)?;
    m.add_function(wrap_pyfunction!(generate_scramble, m)?)?;
    m.add_function(wrap_pyfunction!(generate_scrambled_cube, m)?)?;
    m.add_function(wrap_pyfunction!(generate_solution, m)?)?;

    Ok(())
}
