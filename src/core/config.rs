//! Engine configuration.
//!
//! - `ScrambleConfig`: scramble length, seed, and same-face filtering
//! - `MovePolicy`: what sequence playback does with malformed tokens

use serde::{Deserialize, Serialize};

/// Default number of moves in a scramble.
pub const DEFAULT_SCRAMBLE_LENGTH: usize = 20;

/// Scramble generation parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrambleConfig {
    /// Number of move tokens to draw.
    pub length: usize,

    /// Random seed. `None` draws a fresh seed for every scramble.
    pub seed: Option<u64>,

    /// Redraw a token whose face matches the previous token's face.
    /// Off by default: tokens are drawn independently.
    pub avoid_repeated_face: bool,
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_SCRAMBLE_LENGTH,
            seed: None,
            avoid_repeated_face: false,
        }
    }
}

impl ScrambleConfig {
    /// Set the scramble length.
    #[must_use]
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Set a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject consecutive moves on the same face.
    #[must_use]
    pub fn avoiding_repeated_face(mut self) -> Self {
        self.avoid_repeated_face = true;
        self
    }
}

/// Handling of malformed move tokens during sequence playback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovePolicy {
    /// Skip the token with a warning and keep the state unchanged.
    #[default]
    Lenient,
    /// Stop and report `CubeError::InvalidMoveToken`.
    Strict,
}
