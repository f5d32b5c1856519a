mod astar;
mod bfs;
mod ehc;
mod idastar;
mod search_engine;
mod termination_condition;
mod ucs;

pub use astar::AStar;
pub use bfs::Bfs;
pub use ehc::EnforcedHillClimbing;
pub use idastar::IdaStar;
pub use search_engine::{SearchEngine, SearchEngineName, SearchError, SearchResult};
pub use termination_condition::TerminationCondition;
pub use ucs::Ucs;
