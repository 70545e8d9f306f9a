//! Move application.
//!
//! Every function here is pure: it reads a `CubeState` and returns a new
//! one. Half turns are two clockwise quarter turns, never a separate table.

use crate::core::{CubeError, CubeState, Face, MovePolicy};

use super::tables::{ADJACENT_STRIPS, ROTATE_CCW, ROTATE_CW};
use super::token::MoveToken;

/// Apply a single quarter turn of `face`.
#[must_use]
pub fn apply_quarter_turn(state: &CubeState, face: Face, clockwise: bool) -> CubeState {
    let mut next = *state;
    let source = state.faces();
    let target = next.faces_mut();

    let rotation = if clockwise { &ROTATE_CW } else { &ROTATE_CCW };
    for (i, &from) in rotation.iter().enumerate() {
        target[face][i] = source[face][from];
    }

    let strips = ADJACENT_STRIPS[face];
    for k in 0..strips.len() {
        let (from, to) = if clockwise {
            (&strips[k], &strips[(k + 1) % 4])
        } else {
            (&strips[(k + 1) % 4], &strips[k])
        };
        for (&src, &dst) in from.indices.iter().zip(&to.indices) {
            target[to.face][dst] = source[from.face][src];
        }
    }

    next
}

/// Apply a parsed move token.
#[must_use]
pub fn apply_token(state: &CubeState, token: MoveToken) -> CubeState {
    log::trace!("applying {token}");
    let clockwise = token.turn.is_clockwise();
    (0..token.turn.quarter_turns()).fold(*state, |acc, _| apply_quarter_turn(&acc, token.face, clockwise))
}

/// Apply a move given in notation.
///
/// Malformed tokens are ignored: the result equals `state` and a warning is
/// logged. Use `try_apply_move` to get an error instead.
#[must_use]
pub fn apply_move(state: &CubeState, token: &str) -> CubeState {
    match try_apply_move(state, token) {
        Ok(next) => next,
        Err(err) => {
            log::warn!("ignoring move: {err}");
            *state
        }
    }
}

/// Apply a move given in notation, failing on malformed tokens.
pub fn try_apply_move(state: &CubeState, token: &str) -> Result<CubeState, CubeError> {
    let token: MoveToken = token.parse()?;
    Ok(apply_token(state, token))
}

/// Apply parsed tokens in order.
#[must_use]
pub fn apply_tokens<'a>(state: &CubeState, tokens: impl IntoIterator<Item = &'a MoveToken>) -> CubeState {
    tokens.into_iter().fold(*state, |acc, &token| apply_token(&acc, token))
}

/// Apply notated moves in order, skipping malformed ones.
#[must_use]
pub fn apply_moves<S: AsRef<str>>(state: &CubeState, tokens: impl IntoIterator<Item = S>) -> CubeState {
    tokens
        .into_iter()
        .fold(*state, |acc, token| apply_move(&acc, token.as_ref()))
}

/// Apply notated moves in order, stopping at the first malformed one.
pub fn try_apply_moves<S: AsRef<str>>(
    state: &CubeState,
    tokens: impl IntoIterator<Item = S>,
) -> Result<CubeState, CubeError> {
    tokens
        .into_iter()
        .try_fold(*state, |acc, token| try_apply_move(&acc, token.as_ref()))
}

/// Apply notated moves under the given policy.
pub fn apply_moves_with_policy<S: AsRef<str>>(
    state: &CubeState,
    tokens: impl IntoIterator<Item = S>,
    policy: MovePolicy,
) -> Result<CubeState, CubeError> {
    match policy {
        MovePolicy::Lenient => Ok(apply_moves(state, tokens)),
        MovePolicy::Strict => try_apply_moves(state, tokens),
    }
}

impl CubeState {
    /// Apply a parsed move, returning the new state.
    #[must_use]
    pub fn apply(&self, token: MoveToken) -> CubeState {
        apply_token(self, token)
    }

    /// Apply parsed moves in order, returning the new state.
    #[must_use]
    pub fn apply_all<'a>(&self, tokens: impl IntoIterator<Item = &'a MoveToken>) -> CubeState {
        apply_tokens(self, tokens)
    }
}
