//! Sub-searches used as distance oracles by the heuristics.

use crate::grid::{BoolGrid, Position};
use crate::search::problem_formulations::{
    CapsulePathProblem, CapsulePolicy, Cost, PositionProblem, SearchProblem,
};
use crate::search::search_engines::{AStar, Bfs, SearchEngine};
use crate::search::ZeroHeuristic;
use std::rc::Rc;

/// The number of steps on the shortest path between two cells, found by
/// breadth-first search. `None` if `to` cannot be reached from `from`.
pub fn maze_distance(walls: &Rc<BoolGrid>, from: Position, to: Position) -> Option<usize> {
    let mut problem = PositionProblem::from_walls(walls.clone(), from, to);
    Bfs::new()
        .search_uninformed(&mut problem)
        .ok()
        .map(|plan| plan.len())
}

/// The cheapest cost of walking from `from` to `to` when entering a cell that
/// holds one of `capsules` is priced by `policy`. `None` if `to` cannot be
/// reached.
pub fn capsule_maze_cost(
    walls: &Rc<BoolGrid>,
    capsules: &Rc<BoolGrid>,
    from: Position,
    to: Position,
    policy: CapsulePolicy,
) -> Option<Cost> {
    let mut problem =
        CapsulePathProblem::new(walls.clone(), capsules.clone(), from, to, policy);
    let plan = AStar::new()
        .search(&mut problem, &mut ZeroHeuristic::new())
        .ok()?;
    Some(problem.cost_of_actions(&plan))
}
