//! Geometric heuristics for the position problem. Walls can only lengthen a
//! path, so both distances are lower bounds on unit-cost grids.

use crate::grid::Position;
use crate::search::problem_formulations::PositionProblem;
use crate::search::{Heuristic, HeuristicValue};

#[derive(Debug, Default)]
pub struct ManhattanHeuristic {}

impl ManhattanHeuristic {
    pub fn new() -> Self {
        Self {}
    }
}

impl Heuristic<PositionProblem> for ManhattanHeuristic {
    fn evaluate(&mut self, state: &Position, problem: &mut PositionProblem) -> HeuristicValue {
        (state.manhattan(problem.goal()) as f64).into()
    }
}

#[derive(Debug, Default)]
pub struct EuclideanHeuristic {}

impl EuclideanHeuristic {
    pub fn new() -> Self {
        Self {}
    }
}

impl Heuristic<PositionProblem> for EuclideanHeuristic {
    fn evaluate(&mut self, state: &Position, problem: &mut PositionProblem) -> HeuristicValue {
        state.euclidean(problem.goal()).into()
    }
}
