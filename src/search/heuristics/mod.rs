mod capsule;
mod corners;
mod food;
mod heuristic;
mod maze_distance;
mod position;
mod zero_heuristic;

pub use capsule::CapsuleHeuristic;
pub use corners::CornersHeuristic;
pub use food::FoodHeuristic;
pub use heuristic::{Heuristic, HeuristicName, HeuristicValue, NamedHeuristics};
pub use maze_distance::{capsule_maze_cost, maze_distance};
pub use position::{EuclideanHeuristic, ManhattanHeuristic};
pub use zero_heuristic::ZeroHeuristic;
