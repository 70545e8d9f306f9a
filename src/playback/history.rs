//! Move-by-move playback over a precomputed state history.
//!
//! All intermediate states are computed up front, so stepping forwards or
//! backwards is a lookup. `history[0]` is the initial state and
//! `history[i + 1]` is `history[i]` with move `i` applied.
//!
//! Uses `im::Vector` so cloning a playback (e.g. to hand a snapshot to a
//! renderer) is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::CubeState;
use crate::moves::{apply_token, MoveToken};
use crate::solver::{PlannedMove, Solution};

/// Cursor over a move list and the states it produces.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playback {
    moves: Vector<PlannedMove>,
    history: Vector<CubeState>,
    position: usize,
}

impl Playback {
    /// Precompute the state after every move.
    #[must_use]
    pub fn new(initial: CubeState, moves: Vec<PlannedMove>) -> Self {
        let mut history = Vector::new();
        history.push_back(initial);
        let mut current = initial;
        for planned in &moves {
            current = apply_token(&current, planned.token);
            history.push_back(current);
        }

        Self {
            moves: moves.into_iter().collect(),
            history,
            position: 0,
        }
    }

    /// Playback for every move of a solution.
    #[must_use]
    pub fn from_solution(initial: CubeState, solution: &Solution) -> Self {
        Self::new(initial, solution.moves())
    }

    /// Playback for a plain move list, treated as a single step.
    #[must_use]
    pub fn from_tokens(initial: CubeState, tokens: &[MoveToken]) -> Self {
        let moves = tokens
            .iter()
            .enumerate()
            .map(|(i, &token)| PlannedMove {
                token,
                step_index: 0,
                move_in_step: i,
                description: String::new(),
            })
            .collect();
        Self::new(initial, moves)
    }

    /// Number of moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Check if there are no moves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Number of moves applied so far.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Check if every move has been applied.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.position == self.len()
    }

    /// Fraction of moves applied, in `0.0..=1.0`. An empty playback is complete.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.is_empty() {
            1.0
        } else {
            self.position as f64 / self.len() as f64
        }
    }

    /// State after `position` moves.
    #[must_use]
    pub fn current(&self) -> &CubeState {
        &self.history[self.position]
    }

    /// State before any move.
    #[must_use]
    pub fn initial(&self) -> &CubeState {
        &self.history[0]
    }

    /// State after every move.
    #[must_use]
    pub fn final_state(&self) -> &CubeState {
        &self.history[self.len()]
    }

    /// State after `index` moves, if in range.
    #[must_use]
    pub fn state_at(&self, index: usize) -> Option<&CubeState> {
        self.history.get(index)
    }

    /// The move `step_forward` would apply.
    #[must_use]
    pub fn next_move(&self) -> Option<&PlannedMove> {
        self.moves.get(self.position)
    }

    /// Apply the next move. Returns it, or `None` when finished.
    pub fn step_forward(&mut self) -> Option<&PlannedMove> {
        let planned = self.moves.get(self.position)?;
        self.position += 1;
        log::trace!("playback {}/{}: {}", self.position, self.moves.len(), planned.token);
        Some(planned)
    }

    /// Undo the last applied move. Returns it, or `None` at the start.
    pub fn step_back(&mut self) -> Option<&PlannedMove> {
        self.position = self.position.checked_sub(1)?;
        self.moves.get(self.position)
    }

    /// Jump to the state after `position` moves, clamped to the end.
    pub fn seek(&mut self, position: usize) {
        self.position = position.min(self.len());
    }

    /// Return to the initial state.
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Iterate over the planned moves.
    pub fn moves(&self) -> impl Iterator<Item = &PlannedMove> {
        self.moves.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::parse_sequence;

    fn sexy() -> Playback {
        Playback::from_tokens(CubeState::solved(), &parse_sequence("R U R' U'").unwrap())
    }

    #[test]
    fn test_history_length() {
        let playback = sexy();
        assert_eq!(playback.len(), 4);
        assert!(playback.state_at(4).is_some());
        assert!(playback.state_at(5).is_none());
        assert_eq!(playback.initial(), &CubeState::solved());
    }

    #[test]
    fn test_step_forward_and_back() {
        let mut playback = sexy();

        let first = playback.step_forward().map(|m| m.token.to_string());
        assert_eq!(first.as_deref(), Some("R"));
        assert_eq!(playback.position(), 1);
        assert_ne!(playback.current(), &CubeState::solved());

        let undone = playback.step_back().map(|m| m.token.to_string());
        assert_eq!(undone.as_deref(), Some("R"));
        assert_eq!(playback.current(), &CubeState::solved());
        assert!(playback.step_back().is_none());
    }

    #[test]
    fn test_run_to_end() {
        let mut playback = sexy();
        let mut applied = 0;
        while playback.step_forward().is_some() {
            applied += 1;
        }

        assert_eq!(applied, 4);
        assert!(playback.is_finished());
        assert_eq!(playback.progress(), 1.0);
        assert_eq!(playback.current(), playback.final_state());
        assert!(playback.next_move().is_none());
    }

    #[test]
    fn test_seek_and_reset() {
        let mut playback = sexy();
        playback.seek(2);
        assert_eq!(playback.progress(), 0.5);
        assert_eq!(playback.next_move().map(|m| m.token.to_string()).as_deref(), Some("R'"));

        playback.seek(100);
        assert!(playback.is_finished());

        playback.reset();
        assert_eq!(playback.position(), 0);
        assert_eq!(playback.current(), &CubeState::solved());
    }

    #[test]
    fn test_empty_playback() {
        let mut playback = Playback::from_tokens(CubeState::empty(), &[]);
        assert!(playback.is_empty());
        assert!(playback.is_finished());
        assert_eq!(playback.progress(), 1.0);
        assert!(playback.step_forward().is_none());
        assert_eq!(playback.final_state(), &CubeState::empty());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut playback = sexy();
        let snapshot = playback.clone();
        playback.step_forward();

        assert_eq!(snapshot.position(), 0);
        assert_eq!(playback.position(), 1);
    }
}
