pub mod heuristics;
mod plan;
pub mod problem_formulations;
pub mod search_engines;
mod search_node;
mod search_space;
mod search_statistics;
mod validate;
mod verbosity;

pub use heuristics::{Heuristic, HeuristicName, HeuristicValue, ZeroHeuristic};
pub use plan::Plan;
pub use problem_formulations::{Cost, ProblemName, SearchProblem, INFEASIBLE_COST};
pub use search_engines::{SearchEngine, SearchEngineName, SearchError, SearchResult};
pub use search_node::{NodeId, SearchNode, NO_NODE};
pub use search_space::SearchSpace;
pub use search_statistics::SearchStatistics;
pub use validate::{plan_cost, validate};
pub use verbosity::Verbosity;
