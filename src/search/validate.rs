use crate::search::{Cost, SearchProblem, SearchResult, INFEASIBLE_COST};

/// Replay `plan` from the start state of `problem`, checking that every action
/// is one of the successors offered and that the final state is a goal.
///
/// Replaying calls [`SearchProblem::successors`], so it counts towards the
/// problem's expansions.
pub fn validate<P>(problem: &mut P, plan: &[P::Action]) -> Result<(), String>
where
    P: SearchProblem,
    P::Action: PartialEq,
{
    let mut cur_state = problem.start_state();
    for (step, action) in plan.iter().enumerate() {
        let successor = problem
            .successors(&cur_state)
            .into_iter()
            .find(|successor| successor.action == *action);

        match successor {
            Some(successor) => cur_state = successor.state,
            None => {
                return Err(format!(
                    "Action {:?} at step {} is not applicable in state {:?}",
                    action, step, cur_state
                ))
            }
        }
    }

    if !problem.is_goal(&cur_state) {
        return Err(format!(
            "Plan does not reach goal state, final state is: {:?}",
            cur_state
        ));
    }

    Ok(())
}

/// The cost of a search result: the cost of the plan, or [`INFEASIBLE_COST`]
/// if the search failed.
pub fn plan_cost<P: SearchProblem>(problem: &P, result: &SearchResult<P::Action>) -> Cost {
    match result {
        Ok(plan) => problem.cost_of_actions(plan),
        Err(_) => INFEASIBLE_COST,
    }
}
