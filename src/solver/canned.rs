//! Fixed-sequence solution generator.
//!
//! `CannedSolver` does not search. It emits textbook beginner-method
//! algorithms for each stage that `analyze_cube` reports as unsolved, so the
//! output depends on the input only through those top-face checks. Playing
//! it back will not, in general, solve the cube.

use crate::core::{CubeState, Face};
use crate::moves::{MoveToken, Turn};

use super::analysis::analyze_cube;
use super::solution::{Solution, SolutionStep};
use super::SolutionGenerator;

const fn cw(face: Face) -> MoveToken {
    MoveToken::new(face, Turn::Clockwise)
}

const fn ccw(face: Face) -> MoveToken {
    MoveToken::new(face, Turn::CounterClockwise)
}

const fn half(face: Face) -> MoveToken {
    MoveToken::new(face, Turn::Double)
}

const F: MoveToken = cw(Face::Front);
const F_: MoveToken = ccw(Face::Front);
const R: MoveToken = cw(Face::Right);
const R_: MoveToken = ccw(Face::Right);
const U: MoveToken = cw(Face::Top);
const U_: MoveToken = ccw(Face::Top);
const U2: MoveToken = half(Face::Top);

/// F R U R' U' F'
const CROSS: [MoveToken; 6] = [F, R, U, R_, U_, F_];
/// R U R' U R U2 R'
const CORNERS: [MoveToken; 7] = [R, U, R_, U, R, U2, R_];
/// U R U' R' U' F' U F
const MIDDLE: [MoveToken; 8] = [U, R, U_, R_, U_, F_, U, F];
/// F R U R' U' F'
const OLL: [MoveToken; 6] = [F, R, U, R_, U_, F_];
/// R U R' U' R U R' U'
const PLL: [MoveToken; 8] = [R, U, R_, U_, R, U, R_, U_];

fn cross_step() -> SolutionStep {
    SolutionStep::new("cross", "Create a white cross on the top face", &CROSS)
}

fn corners_step() -> SolutionStep {
    SolutionStep::new("corners", "Solve the white corners", &CORNERS)
}

fn middle_step() -> SolutionStep {
    SolutionStep::new("middle", "Solve the middle layer edges", &MIDDLE)
}

fn oll_step() -> SolutionStep {
    SolutionStep::new("oll", "Orient the last layer (OLL)", &OLL)
}

fn pll_step() -> SolutionStep {
    SolutionStep::new("pll", "Permute the last layer (PLL)", &PLL)
}

/// Emits a canned step for every stage the analysis flags as unsolved.
#[derive(Clone, Copy, Debug, Default)]
pub struct CannedSolver;

impl SolutionGenerator for CannedSolver {
    fn generate(&self, state: &CubeState) -> Solution {
        let analysis = analyze_cube(state);
        let mut steps = Vec::new();

        if !analysis.white_cross {
            steps.push(cross_step());
        }
        if !analysis.white_corners {
            steps.push(corners_step());
        }
        if !analysis.middle_layer {
            steps.push(middle_step());
        }
        if !analysis.last_layer {
            steps.push(oll_step());
            steps.push(pll_step());
        }

        if steps.is_empty() {
            steps = vec![cross_step(), corners_step(), middle_step(), oll_step(), pll_step()];
        }

        log::debug!("canned solution: {} steps, analysis {analysis:?}", steps.len());

        Solution::new(steps)
    }
}

/// Generate a solution with `CannedSolver`.
#[must_use]
pub fn generate_solution(state: &CubeState) -> Solution {
    CannedSolver.generate(state)
}
