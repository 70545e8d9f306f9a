//! Move notation and the move engine.
//!
//! - `token`: parsing and formatting of `U D L R F B` notation
//! - `tables`: fixed facelet cycles for each face
//! - `engine`: pure functions from `(CubeState, move)` to a new `CubeState`

pub mod token;
pub mod tables;
pub mod engine;

pub use token::{format_sequence, invert_sequence, parse_sequence, MoveToken, Turn};
pub use tables::{EdgeStrip, ADJACENT_STRIPS, ROTATE_CCW, ROTATE_CW};
pub use engine::{
    apply_move, apply_moves, apply_moves_with_policy, apply_quarter_turn, apply_token, apply_tokens,
    try_apply_move, try_apply_moves,
};
