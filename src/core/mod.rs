//! Core cube types: faces, colors, state, RNG, configuration, errors.
//!
//! This module contains the cube state model. Move application lives in
//! `moves`, which only ever produces new `CubeState` values.

pub mod face;
pub mod color;
pub mod state;
pub mod rng;
pub mod config;
pub mod error;

pub use face::{Direction, Face, FaceMap, Neighbors, NAVIGATION};
pub use color::{Color, Facelet};
pub use state::{CubeState, FaceGrid, CENTER, FACELETS_PER_FACE, TOTAL_FACELETS};
pub use rng::{ScrambleRng, ScrambleRngState};
pub use config::{MovePolicy, ScrambleConfig, DEFAULT_SCRAMBLE_LENGTH};
pub use error::CubeError;
