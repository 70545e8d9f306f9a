//! Random scramble generation.
//!
//! Each token draws its face uniformly from the 6 faces and its modifier
//! uniformly from {none, `'`, `2`}. Draws are independent unless
//! `ScrambleConfig::avoid_repeated_face` is set, so plain scrambles can
//! contain cancelling pairs such as `R R'`.

use serde::{Deserialize, Serialize};

use crate::core::{CubeState, Face, ScrambleConfig, ScrambleRng};
use crate::moves::{MoveToken, Turn};

/// A generated scramble together with the state it produces.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scramble {
    /// Seed the moves were drawn with; replaying it reproduces them.
    pub seed: u64,

    /// Moves in application order.
    pub moves: Vec<MoveToken>,

    /// Solved cube with `moves` applied.
    pub state: CubeState,
}

fn draw_token(rng: &mut ScrambleRng) -> MoveToken {
    let face = Face::ALL[rng.gen_index(Face::ALL.len())];
    let turn = Turn::ALL[rng.gen_index(Turn::ALL.len())];
    MoveToken::new(face, turn)
}

/// Draw `config.length` tokens from `rng`. `config.seed` is ignored here;
/// the caller owns the RNG.
pub fn generate_scramble_with(config: &ScrambleConfig, rng: &mut ScrambleRng) -> Vec<MoveToken> {
    let mut moves: Vec<MoveToken> = Vec::with_capacity(config.length);
    while moves.len() < config.length {
        let token = draw_token(rng);
        if config.avoid_repeated_face && moves.last().is_some_and(|prev| prev.face == token.face) {
            continue;
        }
        moves.push(token);
    }
    moves
}

/// Generate `length` independent random tokens.
#[must_use]
pub fn generate_scramble(length: usize) -> Vec<MoveToken> {
    let config = ScrambleConfig::default().with_length(length);
    generate_scramble_with(&config, &mut ScrambleRng::from_entropy())
}

/// Generate a scramble and apply it to a solved cube.
#[must_use]
pub fn scrambled_cube_with(config: &ScrambleConfig) -> Scramble {
    let mut rng = match config.seed {
        Some(seed) => ScrambleRng::new(seed),
        None => ScrambleRng::from_entropy(),
    };
    let seed = rng.seed();
    let moves = generate_scramble_with(config, &mut rng);
    let state = CubeState::solved().apply_all(&moves);

    log::debug!("generated {}-move scramble with seed {seed}", moves.len());

    Scramble { seed, moves, state }
}

/// A solved cube scrambled with a fresh 20-move scramble.
#[must_use]
pub fn generate_scrambled_cube() -> CubeState {
    scrambled_cube_with(&ScrambleConfig::default()).state
}
