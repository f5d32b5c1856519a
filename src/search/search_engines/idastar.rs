//! Iterative deepening A*

use crate::search::{
    problem_formulations::SearchProblem,
    search_engines::{SearchEngine, SearchError, SearchResult, TerminationCondition},
    Heuristic, HeuristicValue, SearchSpace, SearchStatistics,
};
use ordered_float::Float;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Iterative deepening A*. Each iteration is a depth first search that only
/// expands nodes whose f-value is within the current bound; the next bound is
/// the smallest f-value that exceeded it. The first bound is the heuristic
/// value of the start state.
///
/// A goal is only accepted within the bound, so with an admissible heuristic
/// the plan is optimal and the last bound equals its cost.
///
/// With `detect_duplicates` set, an iteration remembers the cheapest g-value
/// each state was expanded with and skips any node that reaches the state
/// again at no smaller cost. Without it, states are revisited freely.
#[derive(Debug, Default)]
pub struct IdaStar {
    detect_duplicates: bool,
    statistics: SearchStatistics,
    termination_condition: TerminationCondition,
    /// Bounds of the iterations of the most recent search, in order.
    bounds: Vec<HeuristicValue>,
}

impl IdaStar {
    pub fn new(detect_duplicates: bool) -> Self {
        Self {
            detect_duplicates,
            ..Default::default()
        }
    }

    pub fn with_time_limit(mut self, time_limit: Option<Duration>) -> Self {
        self.termination_condition = TerminationCondition::new(time_limit);
        self
    }

    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    pub fn bounds(&self) -> &[HeuristicValue] {
        &self.bounds
    }

    /// One bounded depth first search. Returns the plan if a goal was found,
    /// otherwise the bound for the next iteration.
    fn bounded_search<P: SearchProblem>(
        &mut self,
        problem: &mut P,
        heuristic: &mut dyn Heuristic<P>,
        initial_h: HeuristicValue,
        bound: HeuristicValue,
    ) -> Result<SearchResult<P::Action>, HeuristicValue> {
        let mut search_space = SearchSpace::new(problem.start_state(), initial_h);
        let mut stack = vec![search_space.get_root_node().get_node_id()];
        let mut expanded_g: HashMap<P::State, HeuristicValue> = HashMap::new();
        let mut next_bound = HeuristicValue::infinity();

        while let Some(node_id) = stack.pop() {
            if let Some(error) = self.termination_condition.should_terminate() {
                return Ok(Err(error));
            }

            let node = search_space.get_node(node_id);
            let f_value = node.get_f();
            if f_value > bound {
                next_bound = std::cmp::min(next_bound, f_value);
                continue;
            }
            let state = node.get_state().clone();
            let g_value = node.get_g();
            if problem.is_goal(&state) {
                return Ok(Ok(search_space.extract_plan(node_id)));
            }
            if self.detect_duplicates {
                if expanded_g.get(&state).is_some_and(|&known_g| known_g <= g_value) {
                    self.statistics.increment_pruned_nodes();
                    continue;
                }
                expanded_g.insert(state.clone(), g_value);
            }

            self.statistics.increment_expanded_nodes();
            let successors = problem.successors(&state);
            self.statistics.increment_generated_nodes(successors.len());
            for successor in successors {
                let child_g = g_value + HeuristicValue::from(successor.cost);
                if self.detect_duplicates
                    && expanded_g
                        .get(&successor.state)
                        .is_some_and(|&known_g| known_g <= child_g)
                {
                    self.statistics.increment_pruned_nodes();
                    continue;
                }
                let h_value = heuristic.evaluate(&successor.state, problem);
                self.statistics.increment_evaluated_nodes();
                self.statistics.register_heuristic_value(h_value);
                let child_id = search_space.insert_node(
                    successor.state,
                    successor.action,
                    successor.cost.into(),
                    h_value,
                    node_id,
                );
                stack.push(child_id);
            }
        }

        Err(next_bound)
    }
}

impl<P: SearchProblem> SearchEngine<P> for IdaStar {
    fn search(
        &mut self,
        problem: &mut P,
        heuristic: &mut dyn Heuristic<P>,
    ) -> SearchResult<P::Action> {
        self.statistics.start_search(if self.detect_duplicates {
            "ida-no-dup"
        } else {
            "ida"
        });
        self.termination_condition.start();
        self.bounds.clear();

        let initial_h = heuristic.evaluate(&problem.start_state(), problem);
        self.statistics.increment_evaluated_nodes();
        self.statistics.register_heuristic_value(initial_h);

        let mut bound = initial_h;
        let result = loop {
            if bound.is_infinite() {
                break Err(SearchError::ProvablyUnsolvable);
            }
            debug!(bound = bound.into_inner(), "starting iteration");
            self.bounds.push(bound);
            match self.bounded_search(problem, heuristic, initial_h, bound) {
                Ok(result) => break result,
                Err(next_bound) => bound = next_bound,
            }
        };

        self.statistics.finalise_search();
        self.termination_condition.finalise();
        result
    }

    fn statistics(&self) -> &SearchStatistics {
        self.statistics()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Layout, Position};
    use crate::search::heuristics::{CornersHeuristic, ManhattanHeuristic, ZeroHeuristic};
    use crate::search::problem_formulations::{CornersProblem, PositionProblem};
    use crate::search::validate;
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;

    fn assert_bounds_end_at(engine: &IdaStar, cost: f64) {
        let bounds = engine.bounds();
        assert!(bounds.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_approx_eq!(bounds.last().unwrap().into_inner(), cost);
    }

    #[test]
    fn weighted_graph_bounds_rise_to_optimal_cost() {
        for detect_duplicates in [false, true] {
            let mut problem = GraphProblem::new();
            let mut engine = IdaStar::new(detect_duplicates);
            let plan = engine
                .search(&mut problem, &mut GraphHeuristic::new())
                .unwrap();
            assert_eq!(problem.cost_of_actions(&plan), GRAPH_OPTIMAL_COST);
            assert_eq!(
                engine.bounds(),
                &[HeuristicValue::from(3.), HeuristicValue::from(4.)]
            );
        }
    }

    #[test]
    fn tiny_maze_is_solved_optimally_with_and_without_duplicates() {
        let layout = Layout::from_text(TINY_MAZE_LAYOUT).unwrap();
        let goal = Position::new(1, 1);

        let mut plain = PositionProblem::new(&layout, goal);
        let mut engine = IdaStar::new(false);
        let plan = engine
            .search(&mut plain, &mut ManhattanHeuristic::new())
            .unwrap();
        assert_eq!(plan.len(), TINY_MAZE_SOLUTION.len());
        assert_bounds_end_at(&engine, 8.);

        let mut deduplicated = PositionProblem::new(&layout, goal);
        let mut engine = IdaStar::new(true);
        let plan = engine
            .search(&mut deduplicated, &mut ManhattanHeuristic::new())
            .unwrap();
        assert_eq!(plan.len(), TINY_MAZE_SOLUTION.len());
        assert_bounds_end_at(&engine, 8.);
        assert!(deduplicated.expanded() <= plain.expanded());
    }

    #[test]
    fn zero_heuristic_bounds_count_up() {
        let layout = Layout::from_text("%%%%%%\n%P   %\n%%%%%%").unwrap();
        let mut problem = PositionProblem::new(&layout, Position::new(4, 1));
        let mut engine = IdaStar::new(true);
        engine
            .search(&mut problem, &mut ZeroHeuristic::new())
            .unwrap();
        let bounds: Vec<f64> = engine.bounds().iter().map(|b| b.into_inner()).collect();
        assert_eq!(bounds, vec![0., 1., 2., 3.]);
    }

    #[test]
    fn corners_tour_in_one_iteration() {
        let mut problem = CornersProblem::new(&Layout::from_text(SMALL_CORNERS_LAYOUT).unwrap());
        let mut engine = IdaStar::new(true);
        let plan = engine
            .search(&mut problem, &mut CornersHeuristic::new())
            .unwrap();
        assert_eq!(plan.len(), 8);
        assert!(validate(&mut problem, &plan).is_ok());
        assert_eq!(engine.bounds().len(), 1);
    }

    #[test]
    fn walled_off_goal_is_unsolvable() {
        let layout = Layout::from_text("%%%%%\n%P%.%\n%%%%%").unwrap();
        for detect_duplicates in [false, true] {
            let mut problem = PositionProblem::new(&layout, Position::new(3, 1));
            assert_eq!(
                IdaStar::new(detect_duplicates).search_uninformed(&mut problem),
                Err(SearchError::ProvablyUnsolvable)
            );
        }
    }
}
