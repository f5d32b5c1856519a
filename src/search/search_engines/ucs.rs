//! Uniform cost search

use crate::search::{
    problem_formulations::SearchProblem,
    search_engines::{SearchEngine, SearchError, SearchResult, TerminationCondition},
    Heuristic, HeuristicValue, NodeId, SearchSpace, SearchStatistics,
};
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};
use std::time::Duration;

/// Uniform cost search: always expand the open node with the smallest
/// g-value, oldest first among equals. A state reached again more cheaply
/// gets a new frontier entry; stale entries and states that are already
/// closed are skipped when they are popped.
#[derive(Debug, Default)]
pub struct Ucs {
    statistics: SearchStatistics,
    termination_condition: TerminationCondition,
}

impl Ucs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_time_limit(mut self, time_limit: Option<Duration>) -> Self {
        self.termination_condition = TerminationCondition::new(time_limit);
        self
    }

    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }
}

impl<P: SearchProblem> SearchEngine<P> for Ucs {
    fn search(
        &mut self,
        problem: &mut P,
        _heuristic: &mut dyn Heuristic<P>,
    ) -> SearchResult<P::Action> {
        self.statistics.start_search("ucs");
        self.termination_condition.start();

        let initial_state = problem.start_state();
        let mut best_g = HashMap::from([(initial_state.clone(), HeuristicValue::from(0.))]);
        let mut closed: HashSet<P::State> = HashSet::new();
        let mut search_space = SearchSpace::new(initial_state, HeuristicValue::from(0.));
        let mut priority_queue: PriorityQueue<NodeId, Reverse<(HeuristicValue, NodeId)>> =
            PriorityQueue::new();
        let root_id = search_space.get_root_node().get_node_id();
        priority_queue.push(root_id, Reverse((HeuristicValue::from(0.), root_id)));

        let result = loop {
            let Some((node_id, _)) = priority_queue.pop() else {
                break Err(SearchError::ProvablyUnsolvable);
            };
            if let Some(error) = self.termination_condition.should_terminate() {
                break Err(error);
            }

            let node = search_space.get_node(node_id);
            let state = node.get_state().clone();
            let g_value = node.get_g();
            if closed.contains(&state) {
                self.statistics.increment_pruned_nodes();
                continue;
            }
            if problem.is_goal(&state) {
                break Ok(search_space.extract_plan(node_id));
            }
            closed.insert(state.clone());

            self.statistics.increment_expanded_nodes();
            let successors = problem.successors(&state);
            self.statistics.increment_generated_nodes(successors.len());
            for successor in successors {
                if closed.contains(&successor.state) {
                    continue;
                }
                let child_g = g_value + HeuristicValue::from(successor.cost);
                if best_g
                    .get(&successor.state)
                    .is_some_and(|&known_g| known_g <= child_g)
                {
                    continue;
                }
                best_g.insert(successor.state.clone(), child_g);
                let child_id = search_space.insert_node(
                    successor.state,
                    successor.action,
                    successor.cost.into(),
                    HeuristicValue::from(0.),
                    node_id,
                );
                priority_queue.push(child_id, Reverse((child_g, child_id)));
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
    use crate::grid::{Direction, Layout, Position};
    use crate::search::problem_formulations::{stay_east_cost, stay_west_cost, PositionProblem};
    use crate::test_utils::*;

    #[test]
    fn cheapest_plan_in_weighted_graph() {
        let mut problem = GraphProblem::new();
        let plan = Ucs::new().search_uninformed(&mut problem).unwrap();
        assert_eq!(plan.steps(), &["A->B", "B->D", "D->G"]);
        assert_eq!(problem.cost_of_actions(&plan), GRAPH_OPTIMAL_COST);
    }

    #[test]
    fn tiny_corridor_is_one_step_east() {
        let layout = Layout::from_text(TINY_CORRIDOR_LAYOUT).unwrap();
        let mut problem = PositionProblem::new(&layout, Position::new(2, 1));
        let plan = Ucs::new().search_uninformed(&mut problem).unwrap();
        assert_eq!(plan.steps(), &[Direction::East]);
        assert_eq!(problem.expanded(), 1);
    }

    #[test]
    fn cost_presets_pull_towards_their_side() {
        // Two equally long routes around a pillar, one through the east and
        // one through the west column.
        let layout = Layout::from_text("%%%%%\n%   %\n% % %\n% P %\n%%%%%").unwrap();
        let goal = Position::new(2, 3);

        let mut east = PositionProblem::new(&layout, goal).with_cost_fn(stay_east_cost);
        let plan = Ucs::new().search_uninformed(&mut east).unwrap();
        assert_eq!(plan.first(), Some(&Direction::East));

        let mut west = PositionProblem::new(&layout, goal).with_cost_fn(stay_west_cost);
        let plan = Ucs::new().search_uninformed(&mut west).unwrap();
        assert_eq!(plan.first(), Some(&Direction::West));
    }
}
