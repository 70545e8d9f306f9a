//! Cube state and move bindings for Python.

use numpy::PyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Color, CubeState, Direction, Face, ScrambleConfig};
use crate::moves::{self, MoveToken};
use crate::scramble;
use crate::validation::{validate_cube, CubeValidation};

pub(crate) fn parse_face(name: &str) -> PyResult<Face> {
    Face::ALL
        .into_iter()
        .find(|f| f.name() == name)
        .ok_or_else(|| PyValueError::new_err(format!("unknown face {name:?}")))
}

fn parse_direction(name: &str) -> PyResult<Direction> {
    match name {
        "up" => Ok(Direction::Up),
        "down" => Ok(Direction::Down),
        "left" => Ok(Direction::Left),
        "right" => Ok(Direction::Right),
        _ => Err(PyValueError::new_err(format!("unknown direction {name:?}"))),
    }
}

fn parse_color(hex: Option<&str>) -> PyResult<Option<Color>> {
    hex.map(|h| Color::from_hex(h).ok_or_else(|| PyValueError::new_err(format!("unknown color {h:?}"))))
        .transpose()
}

/// Python wrapper for CubeState.
///
/// Immutable: every operation returns a new CubeState.
#[pyclass(name = "CubeState", frozen)]
#[derive(Clone, Debug)]
pub struct PyCubeState(pub CubeState);

#[pymethods]
impl PyCubeState {
    /// Create a solved cube.
    #[staticmethod]
    fn solved() -> Self {
        Self(CubeState::solved())
    }

    /// Create an empty cube with only the centers colored.
    #[staticmethod]
    fn empty() -> Self {
        Self(CubeState::empty())
    }

    /// Get the hex colors of one face (None for empty facelets).
    fn face(&self, face: &str) -> PyResult<Vec<Option<&'static str>>> {
        let face = parse_face(face)?;
        Ok(self.0.face(face).iter().map(|f| f.map(Color::hex)).collect())
    }

    /// Return a copy with one facelet set to a hex color (or None to clear).
    #[pyo3(signature = (face, index, color = None))]
    fn with_facelet(&self, face: &str, index: usize, color: Option<&str>) -> PyResult<Self> {
        let face = parse_face(face)?;
        let color = parse_color(color)?;
        Ok(Self(self.0.with_facelet(face, index, color)?))
    }

    /// Apply a move; malformed tokens are ignored.
    fn apply_move(&self, token: &str) -> Self {
        Self(moves::apply_move(&self.0, token))
    }

    /// Apply a move; malformed tokens raise ValueError.
    fn try_apply_move(&self, token: &str) -> PyResult<Self> {
        Ok(Self(moves::try_apply_move(&self.0, token)?))
    }

    /// Apply a list of moves in order; malformed tokens are ignored.
    fn apply_moves(&self, tokens: Vec<String>) -> Self {
        Self(moves::apply_moves(&self.0, tokens))
    }

    /// Check whether every face is uniform.
    fn is_solved(&self) -> bool {
        self.0.is_solved()
    }

    /// Validate the coloring.
    fn validate(&self) -> PyCubeValidation {
        PyCubeValidation(validate_cube(&self.0))
    }

    /// Number of filled facelets.
    fn filled_count(&self) -> usize {
        self.0.filled_count()
    }

    /// Facelet codes as a flat numpy array (0 = empty, 1..=6 colors).
    fn to_numpy<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<u8>> {
        PyArray1::from_slice_bound(py, &self.0.to_codes())
    }

    fn __repr__(&self) -> String {
        format!("CubeState(filled={}, solved={})", self.0.filled_count(), self.0.is_solved())
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}

/// Python wrapper for MoveToken.
#[pyclass(name = "MoveToken", frozen)]
#[derive(Clone, Debug)]
pub struct PyMoveToken(pub MoveToken);

#[pymethods]
impl PyMoveToken {
    /// Parse a token such as "R'".
    #[new]
    fn new(token: &str) -> PyResult<Self> {
        Ok(Self(token.parse::<MoveToken>()?))
    }

    /// Face name, e.g. "right".
    #[getter]
    fn face(&self) -> &'static str {
        self.0.face.name()
    }

    /// The move that undoes this one.
    fn inverse(&self) -> Self {
        Self(self.0.inverse())
    }

    fn __repr__(&self) -> String {
        format!("MoveToken({:?})", self.0.to_string())
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Python wrapper for CubeValidation.
#[pyclass(name = "CubeValidation", frozen)]
#[derive(Clone, Debug)]
pub struct PyCubeValidation(pub CubeValidation);

#[pymethods]
impl PyCubeValidation {
    #[getter]
    fn valid(&self) -> bool {
        self.0.valid
    }

    #[getter]
    fn total_filled(&self) -> usize {
        self.0.total_filled
    }

    /// Per-color counts keyed by hex color.
    #[getter]
    fn color_counts(&self) -> Vec<(&'static str, usize)> {
        self.0.color_counts.iter().map(|(c, n)| (c.hex(), n)).collect()
    }

    /// User-facing error message, or None when valid.
    fn message(&self) -> Option<String> {
        self.0.message()
    }

    fn __repr__(&self) -> String {
        format!("CubeValidation(valid={}, total_filled={})", self.0.valid, self.0.total_filled)
    }
}

/// Face reached by moving the view from `face` in `direction`.
#[pyfunction]
pub fn navigate(face: &str, direction: &str) -> PyResult<&'static str> {
    Ok(parse_face(face)?.neighbor(parse_direction(direction)?).name())
}

/// Generate a list of random move tokens.
#[pyfunction]
#[pyo3(signature = (length = 20, seed = None))]
pub fn generate_scramble(length: usize, seed: Option<u64>) -> Vec<String> {
    let mut config = ScrambleConfig::default().with_length(length);
    config.seed = seed;
    scramble::scrambled_cube_with(&config)
        .moves
        .iter()
        .map(MoveToken::to_string)
        .collect()
}

/// A solved cube with a random 20-move scramble applied.
#[pyfunction]
pub fn generate_scrambled_cube() -> PyCubeState {
    PyCubeState(scramble::generate_scrambled_cube())
}
