//! Breadth first search

use crate::search::{
    problem_formulations::SearchProblem,
    search_engines::{SearchEngine, SearchError, SearchResult, TerminationCondition},
    Heuristic, HeuristicValue, SearchSpace, SearchStatistics,
};
use std::collections::{HashSet, VecDeque};
use std::time::Duration;

/// Breadth first graph search. A state is enqueued at most once, the first
/// time it is generated, and goals are recognised when they are dequeued.
#[derive(Debug, Default)]
pub struct Bfs {
    statistics: SearchStatistics,
    termination_condition: TerminationCondition,
}

impl Bfs {
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

impl<P: SearchProblem> SearchEngine<P> for Bfs {
    fn search(
        &mut self,
        problem: &mut P,
        _heuristic: &mut dyn Heuristic<P>,
    ) -> SearchResult<P::Action> {
        self.statistics.start_search("bfs");
        self.termination_condition.start();

        let initial_state = problem.start_state();
        let mut generated = HashSet::from([initial_state.clone()]);
        let mut search_space = SearchSpace::new(initial_state, HeuristicValue::from(0.));
        let mut queue = VecDeque::from([search_space.get_root_node().get_node_id()]);

        let result = loop {
            let Some(node_id) = queue.pop_front() else {
                break Err(SearchError::ProvablyUnsolvable);
            };
            if let Some(error) = self.termination_condition.should_terminate() {
                break Err(error);
            }

            let state = search_space.get_state(node_id).clone();
            if problem.is_goal(&state) {
                break Ok(search_space.extract_plan(node_id));
            }

            self.statistics.increment_expanded_nodes();
            let successors = problem.successors(&state);
            self.statistics.increment_generated_nodes(successors.len());
            for successor in successors {
                if generated.contains(&successor.state) {
                    continue;
                }
                generated.insert(successor.state.clone());
                let child_id = search_space.insert_node(
                    successor.state,
                    successor.action,
                    successor.cost.into(),
                    HeuristicValue::from(0.),
                    node_id,
                );
                queue.push_back(child_id);
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
