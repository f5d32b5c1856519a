//! Enforced hill-climbing

use crate::search::{
    problem_formulations::SearchProblem,
    search_engines::{SearchEngine, SearchError, SearchResult, TerminationCondition},
    Heuristic, NodeId, SearchSpace, SearchStatistics,
};
use std::collections::{HashSet, VecDeque};
use std::time::Duration;
use tracing::debug;

/// Enforced hill-climbing. From the current node, a breadth first search
/// looks for the first node with a strictly smaller heuristic value, which
/// then becomes the current node. The search stops once the current node is
/// a goal.
///
/// The plans found are not optimal in general. When a breadth first search
/// exhausts its frontier without improving, the search gives up with
/// [`SearchError::IncompleteUnsolvable`] even though a plan may exist.
#[derive(Debug, Default)]
pub struct EnforcedHillClimbing {
    statistics: SearchStatistics,
    termination_condition: TerminationCondition,
}

impl EnforcedHillClimbing {
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

    /// Breadth first search from `start_id` for a node whose heuristic value
    /// is below that of `start_id`.
    fn improve<P: SearchProblem>(
        &mut self,
        problem: &mut P,
        heuristic: &mut dyn Heuristic<P>,
        search_space: &mut SearchSpace<P::State, P::Action>,
        start_id: NodeId,
    ) -> Result<NodeId, SearchError> {
        let start_h = search_space.get_node(start_id).get_h();
        let mut queue = VecDeque::from([start_id]);
        let mut closed: HashSet<P::State> = HashSet::new();

        while let Some(node_id) = queue.pop_front() {
            if let Some(error) = self.termination_condition.should_terminate() {
                return Err(error);
            }

            let node = search_space.get_node(node_id);
            if closed.contains(node.get_state()) {
                self.statistics.increment_pruned_nodes();
                continue;
            }
            if node.get_h() < start_h {
                return Ok(node_id);
            }
            let state = node.get_state().clone();
            closed.insert(state.clone());

            self.statistics.increment_expanded_nodes();
            let successors = problem.successors(&state);
            self.statistics.increment_generated_nodes(successors.len());
            for successor in successors {
                let h_value = heuristic.evaluate(&successor.state, problem);
                self.statistics.increment_evaluated_nodes();
                let child_id = search_space.insert_node(
                    successor.state,
                    successor.action,
                    successor.cost.into(),
                    h_value,
                    node_id,
                );
                queue.push_back(child_id);
            }
        }

        Err(SearchError::IncompleteUnsolvable)
    }
}

impl<P: SearchProblem> SearchEngine<P> for EnforcedHillClimbing {
    fn search(
        &mut self,
        problem: &mut P,
        heuristic: &mut dyn Heuristic<P>,
    ) -> SearchResult<P::Action> {
        self.statistics.start_search("ehc");
        self.termination_condition.start();

        let initial_state = problem.start_state();
        let initial_h = heuristic.evaluate(&initial_state, problem);
        self.statistics.increment_evaluated_nodes();
        self.statistics.register_heuristic_value(initial_h);
        let mut search_space = SearchSpace::new(initial_state, initial_h);
        let mut current_id = search_space.get_root_node().get_node_id();

        let result = loop {
            if problem.is_goal(search_space.get_state(current_id)) {
                break Ok(search_space.extract_plan(current_id));
            }
            match self.improve(problem, heuristic, &mut search_space, current_id) {
                Ok(improved_id) => {
                    let improved = search_space.get_node(improved_id);
                    debug!(
                        h = improved.get_h().into_inner(),
                        g = improved.get_g().into_inner(),
                        "improved"
                    );
                    self.statistics.register_heuristic_value(improved.get_h());
                    current_id = improved_id;
                }
                Err(error) => break Err(error),
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
