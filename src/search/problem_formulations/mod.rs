mod any_food_problem;
mod capsule_path_problem;
mod capsule_problem;
mod corners_problem;
mod food_problem;
mod position_problem;
mod problem_name;
mod search_problem;

pub use any_food_problem::AnyFoodProblem;
pub use capsule_path_problem::{
    CapsuleCostFn, CapsulePathProblem, CapsulePathState, CapsulePolicy,
};
pub use capsule_problem::{
    CapsuleEstimates, CapsuleProblem, CapsuleState, CapsuleVariant, CAPSULE_PENALTY,
};
pub use corners_problem::{CornersProblem, CornersState};
pub use food_problem::{FoodProblem, FoodState};
pub use position_problem::{
    stay_east_cost, stay_west_cost, unit_cost, CostFunctionName, PositionCostFn, PositionProblem,
};
pub use problem_name::ProblemName;
pub use search_problem::{Cost, SearchProblem, Successor, Successors, INFEASIBLE_COST};
