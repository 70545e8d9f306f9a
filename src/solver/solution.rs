//! Solution representation: named steps, each with a short move list.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::moves::{format_sequence, MoveToken};

/// One named step of a solution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionStep {
    /// Short identifier, e.g. `"cross"`.
    pub name: String,

    /// Human-readable description.
    pub description: String,

    /// Moves for this step.
    /// SmallVec keeps typical algorithm lengths (up to 8) off the heap.
    pub moves: SmallVec<[MoveToken; 8]>,
}

impl SolutionStep {
    /// Create a step.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>, moves: &[MoveToken]) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            moves: SmallVec::from_slice(moves),
        }
    }

    /// Moves as notation, e.g. `"R U R' U'"`.
    #[must_use]
    pub fn notation(&self) -> String {
        format_sequence(&self.moves)
    }
}

/// A move scheduled for playback, with the step it came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedMove {
    pub token: MoveToken,
    pub step_index: usize,
    pub move_in_step: usize,
    pub description: String,
}

/// An ordered list of solution steps.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub steps: Vec<SolutionStep>,
}

impl Solution {
    /// Create a solution from steps.
    #[must_use]
    pub fn new(steps: Vec<SolutionStep>) -> Self {
        Self { steps }
    }

    /// Check if there are no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total number of moves across all steps.
    #[must_use]
    pub fn total_moves(&self) -> usize {
        self.steps.iter().map(|s| s.moves.len()).sum()
    }

    /// Flatten into playback order, keeping step context.
    #[must_use]
    pub fn moves(&self) -> Vec<PlannedMove> {
        self.steps
            .iter()
            .enumerate()
            .flat_map(|(step_index, step)| {
                step.moves.iter().enumerate().map(move |(move_in_step, &token)| PlannedMove {
                    token,
                    step_index,
                    move_in_step,
                    description: step.description.clone(),
                })
            })
            .collect()
    }

    /// Just the tokens, in playback order.
    #[must_use]
    pub fn tokens(&self) -> Vec<MoveToken> {
        self.steps.iter().flat_map(|s| s.moves.iter().copied()).collect()
    }
}
