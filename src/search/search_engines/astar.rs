//! This module implements the A* search algorithm.

use crate::search::{
    problem_formulations::SearchProblem,
    search_engines::{SearchEngine, SearchError, SearchResult, TerminationCondition},
    Heuristic, HeuristicValue, NodeId, SearchSpace, SearchStatistics,
};
use ordered_float::Float;
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::time::Duration;

/// A* search. The frontier is ordered by f = g + h, oldest first among equal
/// f-values. A state is expanded again only when it is popped with a strictly
/// smaller g-value than the one it was last expanded with, so an inconsistent
/// heuristic still yields optimal plans as long as it is admissible.
#[derive(Debug, Default)]
pub struct AStar {
    statistics: SearchStatistics,
    termination_condition: TerminationCondition,
}

impl AStar {
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

impl<P: SearchProblem> SearchEngine<P> for AStar {
    fn search(
        &mut self,
        problem: &mut P,
        heuristic: &mut dyn Heuristic<P>,
    ) -> SearchResult<P::Action> {
        self.statistics.start_search("astar");
        self.termination_condition.start();

        let initial_state = problem.start_state();
        let initial_h = heuristic.evaluate(&initial_state, problem);
        self.statistics.increment_evaluated_nodes();
        self.statistics.register_heuristic_value(initial_h);

        let mut priority_queue: PriorityQueue<NodeId, Reverse<(HeuristicValue, NodeId)>> =
            PriorityQueue::new();
        let mut best_g: HashMap<P::State, HeuristicValue> = HashMap::new();
        let mut search_space = SearchSpace::new(initial_state, initial_h);
        let root_node = search_space.get_root_node();
        if !initial_h.is_infinite() {
            priority_queue.push(
                root_node.get_node_id(),
                Reverse((root_node.get_f(), root_node.get_node_id())),
            );
        }

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
            match best_g.get(&state) {
                Some(&known_g) if known_g <= g_value => {
                    self.statistics.increment_pruned_nodes();
                    continue;
                }
                Some(_) => self.statistics.increment_reopened_nodes(),
                None => {}
            }
            best_g.insert(state.clone(), g_value);
            if problem.is_goal(&state) {
                break Ok(search_space.extract_plan(node_id));
            }

            self.statistics.increment_expanded_nodes();
            let successors = problem.successors(&state);
            self.statistics.increment_generated_nodes(successors.len());
            for successor in successors {
                let child_g = g_value + HeuristicValue::from(successor.cost);
                if best_g
                    .get(&successor.state)
                    .is_some_and(|&known_g| known_g <= child_g)
                {
                    continue;
                }
                let h_value = heuristic.evaluate(&successor.state, problem);
                self.statistics.increment_evaluated_nodes();
                if h_value.is_infinite() {
                    continue;
                }
                self.statistics.register_heuristic_value(h_value);
                let child_id = search_space.insert_node(
                    successor.state,
                    successor.action,
                    successor.cost.into(),
                    h_value,
                    node_id,
                );
                let f_value = search_space.get_node(child_id).get_f();
                priority_queue.push(child_id, Reverse((f_value, child_id)));
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
