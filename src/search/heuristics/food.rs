use crate::search::problem_formulations::{FoodProblem, FoodState};
use crate::search::{Heuristic, HeuristicValue};
use ordered_float::Float;

/// The maze distance from the agent to the farthest remaining food. The
/// agent has to walk at least that far before the last pellet is eaten, and
/// maze distances obey the triangle inequality, so the estimate is both
/// admissible and consistent. Distances are memoised in the problem.
#[derive(Debug, Default)]
pub struct FoodHeuristic {}

impl FoodHeuristic {
    pub fn new() -> Self {
        Self {}
    }
}

impl Heuristic<FoodProblem> for FoodHeuristic {
    fn evaluate(&mut self, state: &FoodState, problem: &mut FoodProblem) -> HeuristicValue {
        let mut farthest = 0;
        for food in state.food().as_list() {
            match problem.maze_distance(state.position(), food) {
                Some(distance) => farthest = farthest.max(distance),
                None => return HeuristicValue::infinity(),
            }
        }
        (farthest as f64).into()
    }
}
