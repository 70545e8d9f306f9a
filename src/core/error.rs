//! Error type for the strict engine APIs.
//!
//! The lenient entry points (`apply_move`, `apply_moves`) never return these;
//! they log and degrade to a no-op instead.

use thiserror::Error;

use super::color::Color;
use super::face::Face;

/// Errors produced by strict cube operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    /// Move token does not match `Face [ "'" | "2" ]`.
    #[error("invalid move token {0:?}")]
    InvalidMoveToken(String),

    /// Center facelets define face identity and cannot be edited.
    #[error("center facelet of {0} face cannot be changed")]
    CenterLocked(Face),

    /// Facelet index outside `0..9`.
    #[error("facelet index {index} out of range for {face} face")]
    FaceletOutOfRange { face: Face, index: usize },

    /// Coloring is incomplete or has the wrong color counts.
    #[error("invalid cube: {filled}/54 facelets filled, color counts {counts:?}")]
    InvalidCube {
        filled: usize,
        counts: Vec<(Color, usize)>,
    },
}
