use crate::search::heuristics::capsule_maze_cost;
use crate::search::problem_formulations::{CapsulePolicy, CapsuleProblem, CapsuleState};
use crate::search::{Heuristic, HeuristicValue};
use ordered_float::Float;
use tracing::trace;

/// Capsule-aware estimate for the capsule problems: the cheapest way to reach
/// the farthest food when capsules are priced by `policy`, but never less
/// than the number of pellets left. Values are memoised per policy and state
/// in the problem's heuristic table.
///
/// [`CapsulePolicy::Encourage`] prices capsules the way the reward variant
/// does and never exceeds the penalty variant's costs either.
/// [`CapsulePolicy::Avoid`] matches the penalty variant exactly. Both count
/// an ordinary step as cost 1, so they can overestimate under step cost
/// presets that make steps cheaper than that.
#[derive(Debug)]
pub struct CapsuleHeuristic {
    policy: CapsulePolicy,
}

impl CapsuleHeuristic {
    pub fn new(policy: CapsulePolicy) -> Self {
        Self { policy }
    }

    fn compute(&self, state: &CapsuleState, problem: &CapsuleProblem) -> HeuristicValue {
        let food = state.food().as_list();
        let mut max_cost: f64 = 0.;
        for &target in &food {
            match capsule_maze_cost(
                problem.walls(),
                state.capsules(),
                state.position(),
                target,
                self.policy,
            ) {
                Some(cost) => max_cost = max_cost.max(cost),
                None => return HeuristicValue::infinity(),
            }
        }
        max_cost.max(food.len() as f64).into()
    }
}

impl Heuristic<CapsuleProblem> for CapsuleHeuristic {
    fn evaluate(&mut self, state: &CapsuleState, problem: &mut CapsuleProblem) -> HeuristicValue {
        let key = (self.policy, state.clone());
        if let Some(&value) = problem.heuristic_info().get(&key) {
            return value;
        }
        let value = self.compute(state, problem);
        trace!(
            policy = ?self.policy,
            position = %state.position(),
            h = value.into_inner(),
            "memoising capsule estimate"
        );
        problem.heuristic_info_mut().insert(key, value);
        value
    }
}
