use crate::grid::Position;
use crate::search::problem_formulations::{CornersProblem, CornersState};
use crate::search::{Heuristic, HeuristicValue};
use itertools::Itertools;

/// The length of the shortest tour, in Manhattan distance, that starts at the
/// agent and visits every remaining corner. With at most four corners the 24
/// orderings are enumerated outright.
///
/// Any real path through the corners is at least as long as its Manhattan
/// tour, so the estimate is admissible, and moving one step changes the tour
/// length by at most one, so it is consistent.
#[derive(Debug, Default)]
pub struct CornersHeuristic {}

impl CornersHeuristic {
    pub fn new() -> Self {
        Self {}
    }
}

fn tour_length(start: Position, corners: &[&Position]) -> i32 {
    let mut position = start;
    let mut length = 0;
    for &&corner in corners {
        length += position.manhattan(corner);
        position = corner;
    }
    length
}

impl Heuristic<CornersProblem> for CornersHeuristic {
    fn evaluate(&mut self, state: &CornersState, problem: &mut CornersProblem) -> HeuristicValue {
        let remaining = problem.remaining_corners(state);
        let best = remaining
            .iter()
            .permutations(remaining.len())
            .map(|order| tour_length(state.position(), &order))
            .min()
            .unwrap_or(0);
        (best as f64).into()
    }
}
