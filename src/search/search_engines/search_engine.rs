use crate::search::{
    problem_formulations::SearchProblem,
    search_engines::{AStar, Bfs, EnforcedHillClimbing, IdaStar, Ucs},
    Heuristic, Plan, SearchStatistics, ZeroHeuristic,
};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::time::Duration;

/// Why a search did not return a plan. A search whose start state is already
/// a goal succeeds with an empty plan and is never an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The whole reachable state space was searched without finding a goal
    #[error("the search space was exhausted without reaching a goal")]
    ProvablyUnsolvable,
    /// The search engine is incomplete and gave up without finding a goal
    #[error("the search gave up without reaching a goal")]
    IncompleteUnsolvable,
    /// The search engine ran out of time
    #[error("the time limit was exceeded")]
    TimeLimitExceeded,
    /// A plan was found but does not solve the problem it was found for
    #[error("invalid plan: {0}")]
    InvalidPlan(String),
}

pub type SearchResult<A> = Result<Plan<A>, SearchError>;

pub trait SearchEngine<P: SearchProblem>: Debug {
    /// Search `problem` for a plan, guided by `heuristic`. Engines that do not
    /// use a heuristic ignore it.
    fn search(
        &mut self,
        problem: &mut P,
        heuristic: &mut dyn Heuristic<P>,
    ) -> SearchResult<P::Action>;

    fn search_uninformed(&mut self, problem: &mut P) -> SearchResult<P::Action> {
        self.search(problem, &mut ZeroHeuristic::new())
    }

    /// Statistics of the most recent search.
    fn statistics(&self) -> &SearchStatistics;
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(help = "Breadth first search, ignores the heuristic.")]
    Bfs,
    #[clap(help = "Uniform cost search, ignores the heuristic.")]
    Ucs,
    #[clap(help = "A* search.")]
    #[serde(alias = "a-star")]
    Astar,
    #[clap(help = "Enforced hill-climbing, not optimal.")]
    Ehc,
    #[clap(help = "Iterative deepening A*, revisits states freely.")]
    Ida,
    #[clap(
        name = "ida-no-dup",
        help = "Iterative deepening A*, prunes states already expanded in an iteration."
    )]
    IdaNoDup,
}

impl SearchEngineName {
    pub fn create<P: SearchProblem>(
        &self,
        time_limit: Option<Duration>,
    ) -> Box<dyn SearchEngine<P>> {
        match self {
            SearchEngineName::Bfs => Box::new(Bfs::new().with_time_limit(time_limit)),
            SearchEngineName::Ucs => Box::new(Ucs::new().with_time_limit(time_limit)),
            SearchEngineName::Astar => Box::new(AStar::new().with_time_limit(time_limit)),
            SearchEngineName::Ehc => {
                Box::new(EnforcedHillClimbing::new().with_time_limit(time_limit))
            }
            SearchEngineName::Ida => Box::new(IdaStar::new(false).with_time_limit(time_limit)),
            SearchEngineName::IdaNoDup => {
                Box::new(IdaStar::new(true).with_time_limit(time_limit))
            }
        }
    }

    /// Whether the engine is guaranteed to return a cheapest plan when given
    /// an admissible heuristic. BFS only is on unit-cost problems.
    pub fn is_optimal(&self) -> bool {
        !matches!(self, SearchEngineName::Bfs | SearchEngineName::Ehc)
    }

    /// Whether the engine consults the heuristic at all.
    pub fn uses_heuristic(&self) -> bool {
        !matches!(self, SearchEngineName::Bfs | SearchEngineName::Ucs)
    }
}
